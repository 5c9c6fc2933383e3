// HTTP handlers for /api/orders
//
// Endpoints:
// - GET    /api/orders       - List order summaries
// - GET    /api/orders/{id}  - Full order with user and detail lines
// - POST   /api/orders       - Create an order with its lines
// - PUT    /api/orders/{id}  - Update order header fields
// - DELETE /api/orders/{id}  - Delete an order and its lines

use actix_web::{web, HttpResponse};

use crate::core::{AppError, Result};
use crate::modules::orders::models::{
    OrderCreationDto, OrderLine, ResponseListOrderDto, ResponseOrderDto, UpdateOrder,
};
use crate::modules::orders::services::{OrderDetailService, OrderService};
use crate::modules::products::services::ProductService;
use crate::modules::users::services::UserService;

/// GET /api/orders
pub async fn get_all_orders(orders: web::Data<OrderService>) -> Result<HttpResponse> {
    let summaries: Vec<ResponseListOrderDto> = orders
        .get_all_orders()
        .await?
        .into_iter()
        .map(ResponseListOrderDto::from)
        .collect();

    Ok(HttpResponse::Ok().json(summaries))
}

/// GET /api/orders/{id}
///
/// # Returns
/// - 200: Order with user and detail lines
/// - 404: No order with this ID
pub async fn get_order_by_id(
    orders: web::Data<OrderService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    let order = orders
        .get_order_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order with id {} not found", id)))?;

    Ok(HttpResponse::Ok().json(order))
}

/// POST /api/orders
///
/// The user must exist, otherwise nothing is created and 400 is returned.
/// Lines whose product does not exist are dropped without failing the
/// request. The order and the remaining lines are stored together.
pub async fn create_order(
    users: web::Data<UserService>,
    products: web::Data<ProductService>,
    orders: web::Data<OrderService>,
    order_details: web::Data<OrderDetailService>,
    request: web::Json<OrderCreationDto>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    request.validate()?;

    let user = users.get_user_by_id(request.user_id).await?.ok_or_else(|| {
        tracing::warn!(user_id = request.user_id, "Order rejected, unknown user");
        AppError::invalid_reference(format!("User with id {} does not exist", request.user_id))
    })?;

    let mut lines = Vec::with_capacity(request.order_details.len());
    for line in &request.order_details {
        match products.get_product_by_id(line.product_id).await? {
            Some(product) => lines.push(OrderLine {
                product_id: product.id,
                quantity: line.quantity,
            }),
            None => {
                tracing::debug!(
                    user_id = user.id,
                    product_id = line.product_id,
                    "Skipping order line for unknown product"
                );
            }
        }
    }

    let saved = orders.place_order(request.to_new_order(), lines).await?;
    let details = order_details.get_order_details_by_order_id(saved.id).await?;

    Ok(HttpResponse::Created().json(ResponseOrderDto::new(&saved, details)))
}

/// PUT /api/orders/{id}
///
/// # Returns
/// - 200: Updated order
/// - 400: `userId` in the body does not reference a user
/// - 404: No order with this ID
pub async fn update_order(
    orders: web::Data<OrderService>,
    path: web::Path<i64>,
    request: web::Json<UpdateOrder>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    let order = orders
        .update(id, request.into_inner())
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order with id {} not found", id)))?;

    Ok(HttpResponse::Ok().json(order))
}

/// DELETE /api/orders/{id}
pub async fn delete_order(
    orders: web::Data<OrderService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    if orders.delete(id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::not_found(format!("Order with id {} not found", id)))
    }
}

/// Configure order routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/orders")
            .route("", web::get().to(get_all_orders))
            .route("", web::post().to(create_order))
            .route("/{id}", web::get().to(get_order_by_id))
            .route("/{id}", web::put().to(update_order))
            .route("/{id}", web::delete().to(delete_order)),
    );
}
