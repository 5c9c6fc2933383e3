// Users module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{NewUser, User};
pub use repositories::{MySqlUserRepository, UserRepository};
pub use services::UserService;
