use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product that order lines point at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    pub image_url: Option<String>,

    /// Unit price, serialized as a decimal string
    pub price: Decimal,

    pub created_at: DateTime<Utc>,
}

/// Insert shape for a product
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub product_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub price: Decimal,
}

impl NewProduct {
    pub fn new(product_name: impl Into<String>, price: Decimal) -> Self {
        Self {
            product_name: product_name.into(),
            image_url: None,
            price,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}
