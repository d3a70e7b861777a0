//! On-demand runs for serve mode.
//!
//! A run executes in a spawned task while holding `AppState::run_lock`, so at
//! most one run is in flight. The finished report replaces the previous one.

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::automation::AutomationDefinition;
use crate::runner::RunSummary;
use crate::state::AppState;

/// Outcome of the most recent finished run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub summary: Option<RunSummary>,
    /// Set when the run aborted (job finder failure).
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunAccepted {
    pub run_id: Uuid,
    pub automation_count: usize,
    pub status: &'static str,
}

/// Starts a background run over `automations`, or fails with `Conflict` if one is running.
pub fn start_run(
    state: &AppState,
    automations: Vec<AutomationDefinition>,
) -> Result<RunAccepted, AppError> {
    let guard = state
        .run_lock
        .clone()
        .try_lock_owned()
        .map_err(|_| AppError::Conflict("a run is already in progress".to_string()))?;

    let run_id = Uuid::new_v4();
    let automation_count = automations.len();
    let runner = state.runner.clone();
    let latest_run = state.latest_run.clone();
    info!("Starting run {run_id} over {automation_count} automations");

    tokio::spawn(async move {
        let started_at = Utc::now();
        let outcome = runner.run(&automations).await;
        let (summary, error) = match outcome {
            Ok(summary) => (Some(summary), None),
            Err(e) => {
                error!("Run {run_id} aborted: {e}");
                (None, Some(e.to_string()))
            }
        };
        *latest_run.write().await = Some(RunReport {
            run_id,
            started_at,
            finished_at: Utc::now(),
            summary,
            error,
        });
        drop(guard);
    });

    Ok(RunAccepted {
        run_id,
        automation_count,
        status: "started",
    })
}
