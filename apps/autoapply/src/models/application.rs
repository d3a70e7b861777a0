use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the browser runner reports back for one submission attempt.
/// `success: false` is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationResult {
    pub success: bool,
    pub message: String,
}

/// Metadata forwarded to the browser runner alongside each submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionMetadata {
    pub automation_id: String,
    pub job_title: String,
}

/// Everything the submitter needs to fill and send one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    pub job_url: String,
    pub resume_path: String,
    pub cover_letter_text: String,
    pub metadata: SubmissionMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Applied,
    Failed,
}

impl LogStatus {
    pub fn from_success(success: bool) -> Self {
        if success {
            LogStatus::Applied
        } else {
            LogStatus::Failed
        }
    }
}

/// One spreadsheet row. Written once per attempted application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub automation_id: String,
    pub job_title: String,
    pub company: String,
    pub url: String,
    pub status: LogStatus,
    pub notes: String,
    pub logged_at: DateTime<Utc>,
}
