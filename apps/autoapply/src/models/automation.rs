use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The only automation kind the runner knows how to execute.
pub const JOB_APPLY_KIND: &str = "job-apply";

/// One configured job-search task, loaded from the automations file.
///
/// Fields the runner does not interpret (keywords, locations, salary floors...)
/// are kept verbatim in `criteria` for job finders that want them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationDefinition {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    /// Job source selector. `None` means the demo finder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(flatten)]
    pub criteria: Map<String, Value>,
}

impl AutomationDefinition {
    pub fn is_job_apply(&self) -> bool {
        self.kind == JOB_APPLY_KIND
    }
}
