use std::time::Duration;

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

const READINESS_TIMEOUT: Duration = Duration::from_secs(2);

/// Liveness response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

/// Readiness response
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: bool,
}

/// GET /health
///
/// Answers as long as the process can serve requests. Does not touch the database.
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /ready
///
/// 200 when the database answers `SELECT 1` within two seconds, 503 otherwise
pub async fn readiness_check(pool: web::Data<MySqlPool>) -> impl Responder {
    let probe = sqlx::query("SELECT 1").execute(pool.get_ref());
    let database = match tokio::time::timeout(READINESS_TIMEOUT, probe).await {
        Ok(Ok(_)) => true,
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Database readiness check failed");
            false
        }
        Err(_) => {
            tracing::error!("Database readiness check timed out");
            false
        }
    };

    let response = ReadinessResponse {
        ready: database,
        database,
    };

    if response.ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
