pub mod order_detail_repository;
pub mod order_repository;

pub use order_detail_repository::{MySqlOrderDetailRepository, OrderDetailRepository};
pub use order_repository::{MySqlOrderRepository, OrderRepository};
