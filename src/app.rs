//! Service wiring shared by the binary and the tests.

use std::sync::Arc;

use actix_web::web;
use sqlx::MySqlPool;

use crate::middleware::{json_error_handler, path_error_handler};
use crate::modules::health;
use crate::modules::orders::{
    self, MySqlOrderDetailRepository, MySqlOrderRepository, OrderDetailRepository,
    OrderDetailService, OrderRepository, OrderService,
};
use crate::modules::products::{MySqlProductRepository, ProductRepository, ProductService};
use crate::modules::users::{MySqlUserRepository, UserRepository, UserService};

/// All services, built once and shared across workers
#[derive(Clone)]
pub struct AppState {
    pub users: web::Data<UserService>,
    pub products: web::Data<ProductService>,
    pub orders: web::Data<OrderService>,
    pub order_details: web::Data<OrderDetailService>,
}

impl AppState {
    /// Build services over the given repositories
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        product_repo: Arc<dyn ProductRepository>,
        order_repo: Arc<dyn OrderRepository>,
        detail_repo: Arc<dyn OrderDetailRepository>,
    ) -> Self {
        Self {
            users: web::Data::new(UserService::new(user_repo.clone())),
            products: web::Data::new(ProductService::new(product_repo)),
            orders: web::Data::new(OrderService::new(
                order_repo,
                detail_repo.clone(),
                user_repo,
            )),
            order_details: web::Data::new(OrderDetailService::new(detail_repo)),
        }
    }

    /// Build services backed by MySQL
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self::new(
            Arc::new(MySqlUserRepository::new(pool.clone())),
            Arc::new(MySqlProductRepository::new(pool.clone())),
            Arc::new(MySqlOrderRepository::new(pool.clone())),
            Arc::new(MySqlOrderDetailRepository::new(pool)),
        )
    }

    /// Register services, extractor error handlers and the order routes
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.users.clone())
            .app_data(self.products.clone())
            .app_data(self.orders.clone())
            .app_data(self.order_details.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .configure(orders::controllers::configure);
    }
}

/// Full route table for a MySQL-backed server, health probes included
pub fn configure_with_pool(state: &AppState, pool: MySqlPool, cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::Data::new(pool))
        .configure(health::controllers::configure);
    state.configure(cfg);
}
