use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::users::models::{NewUser, User};

/// Storage for users
pub trait UserRepository: Repository<User, NewUser, i64> {}

/// MySQL-backed user repository
#[derive(Clone)]
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<User, NewUser, i64> for MySqlUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (user_name, email, full_name)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&user.user_name)
        .bind(&user.email)
        .bind(&user.full_name)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id() as i64;
        tracing::debug!(user_id = id, "Inserted user");

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("User {} missing after insert", id)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, user_name, email, full_name, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, user_name, email, full_name, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}

impl UserRepository for MySqlUserRepository {}
