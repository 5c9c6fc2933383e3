use std::sync::Arc;

use crate::core::Result;
use crate::modules::users::models::{NewUser, User};
use crate::modules::users::repositories::UserRepository;

/// Service for user lookups
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Returns `None` when no user has this ID
    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.user_repo.find_by_id(id).await
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>> {
        self.user_repo.find_all().await
    }

    pub async fn save(&self, user: NewUser) -> Result<User> {
        let saved = self.user_repo.create(&user).await?;
        tracing::info!(user_id = saved.id, user_name = %saved.user_name, "User saved");
        Ok(saved)
    }
}
