pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/domains", get(handlers::handle_list_domains))
        .route("/api/v1/skills/extract", post(handlers::handle_extract))
        .route(
            "/api/v1/skills/upload",
            post(handlers::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .with_state(state)
}
