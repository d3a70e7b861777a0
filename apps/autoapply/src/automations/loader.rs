//! Automation loader — reads the ordered automation list once at startup.
//!
//! Any failure here is fatal: there is no partial-load recovery.

use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::models::automation::AutomationDefinition;

/// Reads and parses the automations file. Order in the file is run order.
pub fn load_automations(path: &Path) -> Result<Vec<AutomationDefinition>, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::Config(format!(
            "Failed to read automations from {}: {e}",
            path.display()
        ))
    })?;

    let automations = parse_automations(&raw)?;
    info!(
        "Loaded {} automations from {}",
        automations.len(),
        path.display()
    );
    Ok(automations)
}

/// Parses a JSON array of automation definitions.
pub fn parse_automations(raw: &str) -> Result<Vec<AutomationDefinition>, AppError> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::Config(format!("Malformed automations list: {e}")))
}
