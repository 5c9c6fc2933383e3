pub mod order_detail_service;
pub mod order_service;

pub use order_detail_service::OrderDetailService;
pub use order_service::OrderService;
