// MySQL persistence for orders.
//
// Reads always join the owning user. Detail lines live in `order_details`
// and are loaded through OrderDetailRepository; the rows are removed by the
// ON DELETE CASCADE foreign key when their order is deleted.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, MySqlPool};

use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::orders::models::{NewOrder, Order, OrderLine, UpdateOrder};
use crate::modules::users::models::User;

/// Storage for orders.
///
/// `find_by_id` and `find_all` return orders with `user` loaded and
/// `order_details` left empty.
#[async_trait]
pub trait OrderRepository: Repository<Order, NewOrder, i64> {
    /// Insert an order together with its lines in one transaction.
    ///
    /// A line whose product no longer exists when the transaction runs is
    /// skipped, the same as a line for an unknown product.
    async fn create_with_details(&self, order: &NewOrder, lines: &[OrderLine]) -> Result<Order>;

    /// Overwrite the fields present in `changes`
    async fn update(&self, id: i64, changes: &UpdateOrder) -> Result<()>;

    /// Returns whether a row was removed
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// MySQL-backed order repository
#[derive(Clone)]
pub struct MySqlOrderRepository {
    pool: MySqlPool,
}

impl MySqlOrderRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_created(&self, id: i64) -> Result<Order> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Order {} missing after insert", id)))
    }
}

const SELECT_ORDER: &str = r#"
    SELECT
        o.id, o.user_id, o.shipping_address, o.phone_number, o.notes,
        o.created_at, o.updated_at,
        u.user_name, u.email AS user_email, u.full_name AS user_full_name,
        u.created_at AS user_created_at
    FROM orders o
    INNER JOIN users u ON u.id = o.user_id
"#;

#[async_trait]
impl Repository<Order, NewOrder, i64> for MySqlOrderRepository {
    async fn create(&self, order: &NewOrder) -> Result<Order> {
        let result = sqlx::query(
            r#"
            INSERT INTO orders (user_id, shipping_address, phone_number, notes)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(order.user_id)
        .bind(&order.shipping_address)
        .bind(&order.phone_number)
        .bind(&order.notes)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(user_id = order.user_id, error = %e, "Failed to insert order");
            AppError::Database(e)
        })?;

        self.fetch_created(result.last_insert_id() as i64).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(&format!("{} WHERE o.id = ?", SELECT_ORDER))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(OrderRow::into_order))
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!("{} ORDER BY o.id", SELECT_ORDER))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(OrderRow::into_order).collect())
    }
}

#[async_trait]
impl OrderRepository for MySqlOrderRepository {
    async fn create_with_details(&self, order: &NewOrder, lines: &[OrderLine]) -> Result<Order> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO orders (user_id, shipping_address, phone_number, notes)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(order.user_id)
        .bind(&order.shipping_address)
        .bind(&order.phone_number)
        .bind(&order.notes)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!(user_id = order.user_id, error = %e, "Failed to insert order");
            AppError::Database(e)
        })?;

        let order_id = result.last_insert_id() as i64;

        let mut inserted = 0usize;
        for line in lines {
            // Selecting the product row inside the transaction locks it until commit
            let result = sqlx::query(
                r#"
                INSERT INTO order_details (order_id, product_id, quantity)
                SELECT ?, p.id, ? FROM products p WHERE p.id = ?
                "#,
            )
            .bind(order_id)
            .bind(line.quantity)
            .bind(line.product_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!(
                    order_id,
                    product_id = line.product_id,
                    error = %e,
                    "Failed to insert order detail"
                );
                AppError::Database(e)
            })?;

            if result.rows_affected() == 0 {
                tracing::debug!(
                    order_id,
                    product_id = line.product_id,
                    "Product gone before insert, skipping order line"
                );
            } else {
                inserted += 1;
            }
        }

        // Dropping the transaction before this point rolls everything back
        tx.commit().await?;

        tracing::debug!(order_id, lines = inserted, "Inserted order with details");

        self.fetch_created(order_id).await
    }

    async fn update(&self, id: i64, changes: &UpdateOrder) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE orders
            SET user_id = COALESCE(?, user_id),
                shipping_address = COALESCE(?, shipping_address),
                phone_number = COALESCE(?, phone_number),
                notes = COALESCE(?, notes),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            "#,
        )
        .bind(changes.user_id)
        .bind(&changes.shipping_address)
        .bind(&changes.phone_number)
        .bind(&changes.notes)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// Helper struct for database mapping

#[derive(Debug, FromRow)]
struct OrderRow {
    id: i64,
    user_id: i64,
    shipping_address: Option<String>,
    phone_number: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_name: String,
    user_email: Option<String>,
    user_full_name: Option<String>,
    user_created_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self) -> Order {
        Order {
            id: self.id,
            user_id: self.user_id,
            user: User {
                id: self.user_id,
                user_name: self.user_name,
                email: self.user_email,
                full_name: self.user_full_name,
                created_at: self.user_created_at,
            },
            shipping_address: self.shipping_address,
            phone_number: self.phone_number,
            notes: self.notes,
            order_details: Vec::new(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
