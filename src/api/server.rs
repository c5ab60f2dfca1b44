//! HTTP server implementation
//!
//! Axum server for the browser upload flow and the JSON report endpoint.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers;
use super::uploads::UploadStore;
use crate::core::ReportPipeline;

/// Default upload size limit (both files together)
pub const DEFAULT_BODY_LIMIT: usize = 50 * 1024 * 1024;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Where uploaded workbooks are written before reading
    pub upload_dir: PathBuf,
    pub body_limit: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            upload_dir: PathBuf::from("uploads"),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

/// Shared application state
pub struct AppState {
    pub version: String,
    pub uploads: UploadStore,
    pub pipeline: ReportPipeline,
}

impl AppState {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_pipeline(config, ReportPipeline::new())
    }

    /// State with a custom pipeline, e.g. one with an outline expander
    pub fn with_pipeline(config: &ApiConfig, pipeline: ReportPipeline) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            uploads: UploadStore::new(&config.upload_dir),
            pipeline,
        }
    }
}

/// Build the application router
pub fn build_router(state: Arc<AppState>, body_limit: usize) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Browser flow
        .route("/", get(handlers::upload_form).post(handlers::upload_report))
        // Health and info endpoints
        .route("/health", get(handlers::health))
        .route("/version", get(handlers::version))
        // JSON API
        .route("/api/v1/report", post(handlers::report))
        // State and middleware
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until Ctrl+C / SIGTERM
pub async fn run_api_server(config: ApiConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "missing_time_report=info,tower_http=info".into()),
        )
        .init();

    let state = Arc::new(AppState::new(&config));
    let app = build_router(state, config.body_limit);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Missing time report server starting on http://{}", addr);
    info!("   Upload form: /, JSON: /api/v1/report");
    info!("   Uploads stored in {}", config.upload_dir.display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, stopping server...");
}
