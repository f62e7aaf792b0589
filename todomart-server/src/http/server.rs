//! Axum server setup
//!
//! Server skeleton with:
//! - Permissive CORS (`Access-Control-Allow-Origin: *`); the CORS layer
//!   answers every OPTIONS request itself
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use axum::routing::MethodRouter;
use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::routes;
use crate::db::{create_pool_with_options, pool::DEFAULT_MAX_CONNECTIONS, schema};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:4567)
    pub bind_addr: SocketAddr,

    /// SQLite connection string (default: sqlite://todomart.db)
    pub database_url: String,

    /// Pool size (default: 5)
    pub max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 4567)),
            database_url: "sqlite://todomart.db".to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// Build the application router from the endpoint table.
///
/// Routes sharing a path are merged into one method router. Unmatched
/// paths get a JSON 404.
pub fn build_router(pool: SqlitePool) -> Router {
    let mut by_path: BTreeMap<&'static str, MethodRouter<Arc<AppState>>> = BTreeMap::new();
    for endpoint in routes::endpoints() {
        let handler = match by_path.remove(endpoint.path) {
            Some(existing) => existing.merge(endpoint.handler),
            None => endpoint.handler,
        };
        by_path.insert(endpoint.path, handler);
    }

    let router = by_path
        .into_iter()
        .fold(Router::new(), |router, (path, handler)| {
            router.route(path, handler)
        });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .fallback(fallback)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(AppState { pool }))
}

async fn fallback(uri: Uri) -> Response {
    ApiError::NotFound {
        resource: "route",
        id: uri.path().to_owned(),
    }
    .into_response()
}

/// Run the HTTP server.
///
/// Opens the pool, bootstraps the schema, then serves until a shutdown
/// signal arrives.
///
/// # Example
///
/// ```ignore
/// run_server(ServerConfig::default()).await?;
/// ```
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    tracing::info!(database_url = %config.database_url, "Opening database");
    let pool = create_pool_with_options(&config.database_url, config.max_connections).await?;
    schema::bootstrap(&pool).await?;

    let app = build_router(pool);

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
