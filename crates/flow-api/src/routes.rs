//! Router setup with all API routes and middleware.
//!
//! Configures the axum Router with CORS, tracing, and compression, then
//! provides the bind-and-serve entry point.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use flow_core::config::FlowConfig;
use flow_core::error::FlowError;

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Open CORS: the practice client may be served from any origin.
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/health", get(handlers::health))
        .route("/chat", post(handlers::chat))
        .layer(DefaultBodyLimit::max(64 * 1024)) // 64KB cap for chat bodies
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server on the configured address.
pub async fn start_server(config: &FlowConfig, state: AppState) -> Result<(), FlowError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let router = create_router(state);

    tracing::info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| FlowError::Api(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .await
        .map_err(|e| FlowError::Api(format!("Server error: {}", e)))?;

    Ok(())
}
