pub mod health;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};

use crate::roadmaps::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/health", get(health::health_handler))
        // Roadmaps API
        .route("/api/v1/roadmaps/catalog", post(handlers::handle_catalog))
        .route("/api/v1/roadmaps/generate", post(handlers::handle_generate))
        .with_state(state)
}
