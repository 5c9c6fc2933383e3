// Orders module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{NewOrder, NewOrderDetail, Order, OrderDetail, OrderLine, UpdateOrder};
pub use repositories::{
    MySqlOrderDetailRepository, MySqlOrderRepository, OrderDetailRepository, OrderRepository,
};
pub use services::{OrderDetailService, OrderService};
