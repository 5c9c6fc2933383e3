// An order is a purchase record owned by a user. It carries shipping and
// contact info plus zero or more detail lines; the lines are stored in their
// own table and deleted together with the order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::order_detail::OrderDetail;
use crate::modules::users::models::User;

/// Persisted order, as returned by `GET /api/orders/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub user_id: i64,

    /// Owning user, always loaded alongside the order
    pub user: User,

    pub shipping_address: Option<String>,
    pub phone_number: Option<String>,
    pub notes: Option<String>,

    /// Detail lines; empty unless the order was loaded individually
    #[serde(default)]
    pub order_details: Vec<OrderDetail>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert shape for an order (details are inserted separately)
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: i64,
    pub shipping_address: Option<String>,
    pub phone_number: Option<String>,
    pub notes: Option<String>,
}

/// Changes accepted by `PUT /api/orders/{id}`.
///
/// The body is an order-shaped object. Fields that are present overwrite the
/// stored values, absent ones keep them. `id`, `user` and `orderDetails` in
/// the body are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrder {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub shipping_address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl UpdateOrder {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.shipping_address.is_none()
            && self.phone_number.is_none()
            && self.notes.is_none()
    }

    /// Overlay these changes on an existing order
    pub fn apply_to(&self, order: &mut Order) {
        if let Some(user_id) = self.user_id {
            order.user_id = user_id;
        }
        if let Some(address) = &self.shipping_address {
            order.shipping_address = Some(address.clone());
        }
        if let Some(phone) = &self.phone_number {
            order.phone_number = Some(phone.clone());
        }
        if let Some(notes) = &self.notes {
            order.notes = Some(notes.clone());
        }
    }
}
