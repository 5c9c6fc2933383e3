// Request and response shapes for the /api/orders endpoints.
// Field names on the wire are camelCase.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::order::{NewOrder, Order};
use super::order_detail::OrderDetail;
use crate::core::{AppError, Result};

/// Body of `POST /api/orders`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreationDto {
    pub user_id: i64,
    #[serde(default)]
    pub shipping_address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,

    /// Missing or `null` is treated as no lines
    #[serde(default, deserialize_with = "null_as_empty")]
    pub order_details: Vec<OrderDetailDto>,
}

/// One requested line in an order creation body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailDto {
    pub product_id: i64,
    pub quantity: i32,
}

impl OrderCreationDto {
    /// Reject lines with a non-positive quantity
    pub fn validate(&self) -> Result<()> {
        if let Some(line) = self.order_details.iter().find(|line| line.quantity <= 0) {
            return Err(AppError::validation(format!(
                "Quantity for product {} must be positive, got {}",
                line.product_id, line.quantity
            )));
        }

        Ok(())
    }

    /// Order header to persist, without its lines
    pub fn to_new_order(&self) -> NewOrder {
        NewOrder {
            user_id: self.user_id,
            shipping_address: self.shipping_address.clone(),
            phone_number: self.phone_number.clone(),
            notes: self.notes.clone(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<OrderDetailDto>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let lines: Option<Vec<OrderDetailDto>> = Option::deserialize(deserializer)?;
    Ok(lines.unwrap_or_default())
}

/// Entry in the `GET /api/orders` listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseListOrderDto {
    pub order_id: i64,
    pub user_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<Order> for ResponseListOrderDto {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.id,
            user_name: order.user.user_name,
            phone: order.phone_number,
            address: order.shipping_address,
        }
    }
}

/// Body returned by `POST /api/orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseOrderDto {
    pub id: i64,
    pub user_name: String,
    pub order_details: Vec<ResponseOrderDetailDto>,
}

impl ResponseOrderDto {
    pub fn new(order: &Order, details: Vec<OrderDetail>) -> Self {
        Self {
            id: order.id,
            user_name: order.user.user_name.clone(),
            order_details: details.into_iter().map(ResponseOrderDetailDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseOrderDetailDto {
    pub product_name: String,
    pub image_url: Option<String>,
    pub price: Decimal,
    pub quantity: i32,
}

impl From<OrderDetail> for ResponseOrderDetailDto {
    fn from(detail: OrderDetail) -> Self {
        Self {
            product_name: detail.product.product_name,
            image_url: detail.product.image_url,
            price: detail.product.price,
            quantity: detail.quantity,
        }
    }
}
