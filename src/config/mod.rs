use crate::core::{AppError, Result};
use std::env;
use std::str::FromStr;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Output format of the fmt tracing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("Invalid log format: {}", other)),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: parse_env("LOG_FORMAT", LogFormat::Pretty)?,
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "SERVER_PORT must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "SERVER_WORKERS must be greater than 0".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(AppError::Configuration(
                "DATABASE_MAX_CONNECTIONS must be greater than 0".to_string(),
            ));
        }

        if self.database.pool_size > self.database.max_connections {
            return Err(AppError::Configuration(format!(
                "DATABASE_POOL_SIZE ({}) exceeds DATABASE_MAX_CONNECTIONS ({})",
                self.database.pool_size, self.database.max_connections
            )));
        }

        Ok(())
    }
}

/// Read `key` from the environment, falling back to `default` when unset
pub(crate) fn parse_env<T: FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration(format!("Invalid {}", key))),
        Err(_) => Ok(default),
    }
}
