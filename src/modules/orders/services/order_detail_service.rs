use std::sync::Arc;

use crate::core::Result;
use crate::modules::orders::models::{NewOrderDetail, OrderDetail};
use crate::modules::orders::repositories::OrderDetailRepository;

/// Service for order detail lines
pub struct OrderDetailService {
    detail_repo: Arc<dyn OrderDetailRepository>,
}

impl OrderDetailService {
    pub fn new(detail_repo: Arc<dyn OrderDetailRepository>) -> Self {
        Self { detail_repo }
    }

    /// Persist a single line of an existing order
    pub async fn save(&self, detail: NewOrderDetail) -> Result<OrderDetail> {
        let saved = self.detail_repo.create(&detail).await?;
        tracing::debug!(
            order_id = saved.order_id,
            detail_id = saved.id,
            product_id = saved.product_id,
            "Order detail saved"
        );
        Ok(saved)
    }

    pub async fn get_order_details_by_order_id(&self, order_id: i64) -> Result<Vec<OrderDetail>> {
        self.detail_repo.find_by_order_id(order_id).await
    }
}
