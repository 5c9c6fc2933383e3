use crate::core::{AppError, Result};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::env;
use std::time::Duration;

use super::parse_env;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(DatabaseConfig {
            url: env::var("DATABASE_URL")
                .map_err(|_| AppError::Configuration("DATABASE_URL not set".to_string()))?,
            pool_size: parse_env("DATABASE_POOL_SIZE", 5)?,
            max_connections: parse_env("DATABASE_MAX_CONNECTIONS", 10)?,
            acquire_timeout_secs: parse_env("DATABASE_ACQUIRE_TIMEOUT_SECS", 30)?,
            run_migrations: parse_env("DATABASE_RUN_MIGRATIONS", true)?,
        })
    }

    /// Create a MySQL connection pool
    pub async fn create_pool(&self) -> Result<MySqlPool> {
        let pool = MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.pool_size)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .test_before_acquire(true)
            .connect(&self.url)
            .await?;

        Ok(pool)
    }

    /// Apply the SQL files under `migrations/`
    pub async fn migrate(&self, pool: &MySqlPool) -> Result<()> {
        sqlx::migrate!("./migrations").run(pool).await?;
        Ok(())
    }
}
