use serde::{Deserialize, Serialize};

/// One discovered job opening. Lives only while its automation is processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub url: String,
    pub description: String,
}
