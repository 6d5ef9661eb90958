//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use lingo_common::{AppConfig, AppError};
use lingo_db::{create_pool, run_migrations, PgPool};
use lingo_service::{FriendSettings, ServiceContext};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Migrations directory, relative to the working directory
pub const MIGRATIONS_DIR: &str = "migrations";

/// Build the complete Axum application with all routes and middleware
///
/// # Errors
/// `Config` when the middleware settings are invalid
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    // Probes bypass rate limiting
    let app = api.merge(apply_middleware(health_routes()));
    Ok(app.with_state(state))
}

/// Wire repositories and services around an existing pool
pub fn create_app_state_with_pool(pool: PgPool, config: AppConfig) -> AppState {
    let settings = FriendSettings::from_config(&config.friends, config.app.env);
    let service_context = ServiceContext::from_pool(&pool, settings);
    AppState::new(service_context, pool, config)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = lingo_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool, Path::new(MIGRATIONS_DIR))
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    Ok(create_app_state_with_pool(pool, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::config(format!("Invalid API_HOST/API_PORT: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, addr).await
}
