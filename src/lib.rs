//! Order management REST API
//!
//! CRUD over orders and their detail lines, with references to users and
//! products, served by actix-web over MySQL.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use app::AppState;
pub use modules::orders;
pub use modules::products;
pub use modules::users;
