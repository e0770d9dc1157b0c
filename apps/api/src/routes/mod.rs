pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::enrichment::handlers as enrichment;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/recommendations",
            post(recommendation::handle_recommend),
        )
        .route("/api/v1/catalog/analyze", post(enrichment::handle_analyze))
        .with_state(state)
}
