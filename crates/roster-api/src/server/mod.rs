//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use roster_cache::{JsonFileSnapshotProvider, MemoryRosterRepository, RedisPool, RedisRosterRepository};
use roster_common::{AppConfig, AppError};
use roster_core::RosterRepository;
use roster_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the application with the base middleware stack
pub fn create_app(state: AppState) -> Router {
    let router = apply_middleware(create_router().merge(health_routes()));
    router.with_state(state)
}

/// Build the application with rate limiting and configured CORS
///
/// Health routes are merged outside the rate limiter.
pub fn create_app_with_config(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let router = apply_middleware(health_routes()).merge(api);
    Ok(router.with_state(state))
}

/// Wire the roster repository, snapshot provider and engine configuration
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let (roster_repo, redis_pool): (Arc<dyn RosterRepository>, Option<RedisPool>) =
        match &config.redis {
            Some(redis) => {
                info!("Connecting to Redis...");
                let pool = RedisPool::from_config(redis).map_err(|e| AppError::Storage(e.to_string()))?;
                let repo = RedisRosterRepository::new(pool.clone(), redis.roster_key.clone());
                info!(key = %redis.roster_key, "Roster assignment stored in Redis");
                (Arc::new(repo), Some(pool))
            }
            None => {
                warn!("REDIS_URL not set; roster assignment is kept in memory only");
                (Arc::new(MemoryRosterRepository::new()), None)
            }
        };

    let provider = Arc::new(JsonFileSnapshotProvider::new(&config.snapshot.path));

    let service_context = ServiceContextBuilder::new()
        .engine_config(config.engine.clone())
        .roster_repo(roster_repo)
        .snapshot_provider(provider)
        .build()
        .await?;

    let state = AppState::new(service_context, config);
    Ok(match redis_pool {
        Some(pool) => state.with_redis_pool(pool),
        None => state,
    })
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app_with_config(state)?;

    run_server(app, addr).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
