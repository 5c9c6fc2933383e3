use std::sync::Arc;

use crate::core::Result;
use crate::modules::products::models::{NewProduct, Product};
use crate::modules::products::repositories::ProductRepository;

/// Service for product lookups
pub struct ProductService {
    product_repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    /// Returns `None` when no product has this ID
    pub async fn get_product_by_id(&self, id: i64) -> Result<Option<Product>> {
        self.product_repo.find_by_id(id).await
    }

    pub async fn get_all_products(&self) -> Result<Vec<Product>> {
        self.product_repo.find_all().await
    }

    pub async fn save(&self, product: NewProduct) -> Result<Product> {
        let saved = self.product_repo.create(&product).await?;
        tracing::info!(
            product_id = saved.id,
            product_name = %saved.product_name,
            "Product saved"
        );
        Ok(saved)
    }
}
