use serde::{Deserialize, Serialize};

/// The candidate every cover letter is written for. Loaded once from config
/// and shared read-only across all letter-generation calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub highlights: Vec<String>,
}
