mod dto;
mod order;
mod order_detail;

pub use dto::{
    OrderCreationDto, OrderDetailDto, ResponseListOrderDto, ResponseOrderDetailDto,
    ResponseOrderDto,
};
pub use order::{NewOrder, Order, UpdateOrder};
pub use order_detail::{NewOrderDetail, OrderDetail, OrderLine};
