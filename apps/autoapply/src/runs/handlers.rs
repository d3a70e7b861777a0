//! Axum route handlers for triggering runs and reading the latest report.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::automations::handlers::find_automation;
use crate::errors::AppError;
use crate::runs::{start_run, RunAccepted, RunReport};
use crate::state::AppState;

/// POST /api/v1/runs
///
/// Runs every loaded automation in order. Returns 409 while another run is active.
pub async fn handle_run_all(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<RunAccepted>), AppError> {
    let automations = state.automations.as_ref().clone();
    let accepted = start_run(&state, automations)?;
    Ok((StatusCode::ACCEPTED, Json(accepted)))
}

/// POST /api/v1/automations/:id/run
///
/// Runs a single automation. Non job-apply automations are accepted and skipped.
pub async fn handle_run_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<RunAccepted>), AppError> {
    let automation = find_automation(&state, &id)?;
    let accepted = start_run(&state, vec![automation])?;
    Ok((StatusCode::ACCEPTED, Json(accepted)))
}

/// GET /api/v1/runs/latest
pub async fn handle_latest(State(state): State<AppState>) -> Result<Json<RunReport>, AppError> {
    state
        .latest_run
        .read()
        .await
        .clone()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("no run has finished yet".to_string()))
}
