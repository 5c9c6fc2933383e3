use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::orders::models::{NewOrder, Order, OrderLine, UpdateOrder};
use crate::modules::orders::repositories::{OrderDetailRepository, OrderRepository};
use crate::modules::users::repositories::UserRepository;

/// Service for order business logic
pub struct OrderService {
    order_repo: Arc<dyn OrderRepository>,
    detail_repo: Arc<dyn OrderDetailRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl OrderService {
    pub fn new(
        order_repo: Arc<dyn OrderRepository>,
        detail_repo: Arc<dyn OrderDetailRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            order_repo,
            detail_repo,
            user_repo,
        }
    }

    /// All orders with their user loaded, detail lines not included
    pub async fn get_all_orders(&self) -> Result<Vec<Order>> {
        self.order_repo.find_all().await
    }

    /// Persist an order header without any lines
    pub async fn save(&self, order: NewOrder) -> Result<Order> {
        let saved = self.order_repo.create(&order).await?;
        tracing::info!(order_id = saved.id, user_id = saved.user_id, "Order saved");
        Ok(saved)
    }

    /// Persist an order and its already-resolved lines atomically.
    ///
    /// Either the order and every line are stored, or nothing is.
    pub async fn place_order(&self, order: NewOrder, lines: Vec<OrderLine>) -> Result<Order> {
        let saved = self.order_repo.create_with_details(&order, &lines).await?;
        tracing::info!(
            order_id = saved.id,
            user_id = saved.user_id,
            lines = lines.len(),
            "Order placed"
        );
        Ok(saved)
    }

    /// The order with its user and detail lines, or `None`
    pub async fn get_order_by_id(&self, id: i64) -> Result<Option<Order>> {
        let Some(mut order) = self.order_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        order.order_details = self.detail_repo.find_by_order_id(id).await?;

        Ok(Some(order))
    }

    /// Apply `changes` to an existing order.
    ///
    /// Returns `None` when the order does not exist. A `userId` that does not
    /// point at an existing user is rejected with `InvalidReference`.
    pub async fn update(&self, id: i64, changes: UpdateOrder) -> Result<Option<Order>> {
        if self.order_repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        if let Some(user_id) = changes.user_id {
            if self.user_repo.find_by_id(user_id).await?.is_none() {
                return Err(AppError::invalid_reference(format!(
                    "User with id {} does not exist",
                    user_id
                )));
            }
        }

        if changes.is_empty() {
            tracing::debug!(order_id = id, "Order update carries no changes");
        } else {
            self.order_repo.update(id, &changes).await?;
            tracing::info!(order_id = id, "Order updated");
        }

        self.get_order_by_id(id).await
    }

    /// Returns whether an order was actually removed
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let deleted = self.order_repo.delete(id).await?;
        if deleted {
            tracing::info!(order_id = id, "Order deleted");
        }
        Ok(deleted)
    }
}
