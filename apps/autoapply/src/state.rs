use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::models::automation::AutomationDefinition;
use crate::runner::AutomationRunner;
use crate::runs::RunReport;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; never written back.
    pub automations: Arc<Vec<AutomationDefinition>>,
    pub runner: Arc<AutomationRunner>,
    /// Held for the whole of a run so two runs never overlap.
    pub run_lock: Arc<Mutex<()>>,
    pub latest_run: Arc<RwLock<Option<RunReport>>>,
}

impl AppState {
    pub fn new(automations: Vec<AutomationDefinition>, runner: AutomationRunner) -> Self {
        Self {
            automations: Arc::new(automations),
            runner: Arc::new(runner),
            run_lock: Arc::new(Mutex::new(())),
            latest_run: Arc::new(RwLock::new(None)),
        }
    }
}
