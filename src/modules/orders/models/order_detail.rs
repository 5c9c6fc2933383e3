use serde::{Deserialize, Serialize};

use crate::modules::products::models::Product;

/// One line of an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,

    /// Referenced product, always loaded alongside the line
    pub product: Product,

    pub quantity: i32,
}

/// Insert shape for a single detail line of an existing order
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderDetail {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
}

/// A detail line whose product has already been resolved, waiting for its
/// order to be inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: i64,
    pub quantity: i32,
}

impl OrderLine {
    pub fn into_detail(self, order_id: i64) -> NewOrderDetail {
        NewOrderDetail {
            order_id,
            product_id: self.product_id,
            quantity: self.quantity,
        }
    }
}
