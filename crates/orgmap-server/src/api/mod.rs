//! HTTP surface: router assembly, health probe and the serve loop

pub mod response;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use sqlx::PgPool;
use std::{future::IntoFuture, net::SocketAddr, time::Duration};
use tokio::{signal, sync::watch};
use tower_http::compression::CompressionLayer;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::{config::Config, db, features, middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub features: features::FeatureState,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        let features = features::FeatureState::postgres(db.clone());
        Self { db, features }
    }
}

/// Create the application router with all routes and middleware
pub fn create_router(state: AppState, config: &Config) -> Router {
    let feature_routes = features::router(state.features.clone());

    Router::new()
        .route("/health", get(health_check))
        .with_state(state)
        .merge(feature_routes)
        // Apply layers from innermost to outermost
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

/// Health check handler
async fn health_check(State(state): State<AppState>) -> AppResult<Json<Value>> {
    match db::health_check(&state.db).await {
        Ok(()) => Ok(Json(json!({
            "status": "healthy",
            "database": "connected"
        }))),
        Err(e) => {
            tracing::error!(error = ?e, "Database health check failed");
            Err(AppError::ServiceUnavailable(
                "Database is unavailable".to_string(),
            ))
        },
    }
}

/// Connect to the database, apply migrations and serve until a shutdown
/// signal arrives.
///
/// Once the signal arrives, in-flight requests get `shutdown_timeout_secs`
/// to finish before the server stops waiting for them.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let pool = db::create_pool(&config.database).await?;
    info!("Database connection pool established");

    if config.database.run_migrations {
        db::run_migrations(&pool).await?;
    } else {
        info!("Skipping database migrations (DATABASE_RUN_MIGRATIONS=false)");
    }

    let app = create_router(AppState::new(pool.clone()), &config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        })
        .into_future();
    let timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    tokio::select! {
        result = server => result?,
        _ = drain_deadline(shutdown_rx, timeout) => {
            warn!(
                timeout_secs = config.server.shutdown_timeout_secs,
                "Connections still open after shutdown timeout, exiting"
            );
        },
    }

    pool.close().await;

    Ok(())
}

/// Resolves `timeout` after shutdown starts, or never if it does not.
async fn drain_deadline(mut shutdown: watch::Receiver<bool>, timeout: Duration) {
    if shutdown.wait_for(|started| *started).await.is_err() {
        std::future::pending::<()>().await;
    }
    tokio::time::sleep(timeout).await;
}

/// Resolves once Ctrl+C or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
