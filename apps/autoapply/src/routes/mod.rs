pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::automations::handlers as automations;
use crate::runs::handlers as runs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/automations", get(automations::handle_list))
        .route("/api/v1/automations/:id", get(automations::handle_get))
        .route("/api/v1/automations/:id/run", post(runs::handle_run_one))
        .route("/api/v1/runs", post(runs::handle_run_all))
        .route("/api/v1/runs/latest", get(runs::handle_latest))
        .with_state(state)
}
