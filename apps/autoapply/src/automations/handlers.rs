//! Axum route handlers for the read-only automations API.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::automation::AutomationDefinition;
use crate::state::AppState;

/// GET /api/v1/automations
///
/// Lists the loaded automations in run order.
pub async fn handle_list(State(state): State<AppState>) -> Json<Vec<AutomationDefinition>> {
    Json(state.automations.as_ref().clone())
}

/// GET /api/v1/automations/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AutomationDefinition>, AppError> {
    find_automation(&state, &id).map(Json)
}

pub fn find_automation(state: &AppState, id: &str) -> Result<AutomationDefinition, AppError> {
    state
        .automations
        .iter()
        .find(|a| a.id == id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("automation '{id}'")))
}
