use actix_web::{App, HttpServer};
use anyhow::Context;
use order_api::app::{configure_with_pool, AppState};
use order_api::config::{Config, LogFormat};
use order_api::middleware::{ErrorHandler, RequestId};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("order_api={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting order API");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.max_connections
    );

    if config.database.run_migrations {
        config
            .database
            .migrate(&db_pool)
            .await
            .context("Failed to run database migrations")?;
        tracing::info!("Database migrations applied");
    }

    let state = AppState::from_pool(db_pool.clone());

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let state = state.clone();
        let pool = db_pool.clone();
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(move |cfg| configure_with_pool(&state, pool, cfg))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("HTTP server terminated with an error")
}
