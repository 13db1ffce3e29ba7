//! Route definitions

use super::handlers;
use super::state::AppState;
use crate::mcp::streamable_http_service;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let rpc_path = state.settings.server.rpc_path.clone();
    let mcp = streamable_http_service(state.tools.clone());

    Router::new()
        .nest_service(&rpc_path, mcp)
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
