pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route(
            "/api/v1/analyze/upload",
            post(handlers::handle_analyze_upload),
        )
        .route(
            "/api/v1/analyze/review",
            post(handlers::handle_review),
        )
        .route(
            "/api/v1/bullets/improve",
            post(handlers::handle_improve_bullet),
        )
        .with_state(state)
}
