use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;

/// Build and configure the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Lookup surface
        .route("/chunks/{key}", get(handlers::get_chunk))
        // Mutation surface (invalidates cached variants on completion)
        .route("/admin/chunks/{key}", put(handlers::put_chunk))
        .route("/admin/chunks/{key}", delete(handlers::delete_chunk))
        // Middleware
        .layer(NormalizePathLayer::trim_trailing_slash())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
