//! Job discovery — pluggable, trait-based finder selected per automation.
//!
//! Default: `DemoJobFinder` (one fixed posting, deterministic).
//! Per-site finders exist so automations can name them, but none can scrape yet.
//!
//! A finder failure is fatal for the whole run; the runner does not catch it.

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::models::automation::AutomationDefinition;
use crate::models::job::JobPosting;

/// Source selector used when an automation does not name one.
pub const DEFAULT_SOURCE: &str = "demo";

/// Job boards an automation may name as its `source`.
pub const KNOWN_SITES: &[&str] = &["linkedin", "indeed", "wellfound"];

/// Produces the ordered job postings for one automation. An empty list means no work.
#[async_trait]
pub trait JobFinder: Send + Sync {
    async fn find_jobs(&self, automation: &AutomationDefinition)
        -> Result<Vec<JobPosting>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// DemoJobFinder
// ────────────────────────────────────────────────────────────────────────────

/// Returns a single fixed posting for every automation.
pub struct DemoJobFinder;

#[async_trait]
impl JobFinder for DemoJobFinder {
    async fn find_jobs(
        &self,
        automation: &AutomationDefinition,
    ) -> Result<Vec<JobPosting>, AppError> {
        debug!("Demo job finder serving automation {}", automation.id);
        Ok(vec![JobPosting {
            title: "Product Designer".to_string(),
            company: "Acme Startups".to_string(),
            url: "https://example.com/jobs/123".to_string(),
            description: "We need a Product Designer experienced in Figma and prototyping..."
                .to_string(),
        }])
    }
}

// ────────────────────────────────────────────────────────────────────────────
// SiteJobFinder
// ────────────────────────────────────────────────────────────────────────────

/// Finder for a real job board. Scraping is not implemented for any site yet,
/// so every call fails and aborts the run.
pub struct SiteJobFinder {
    pub site: &'static str,
}

#[async_trait]
impl JobFinder for SiteJobFinder {
    async fn find_jobs(
        &self,
        automation: &AutomationDefinition,
    ) -> Result<Vec<JobPosting>, AppError> {
        Err(AppError::JobSource(format!(
            "job source '{}' is not implemented (automation {})",
            self.site, automation.id
        )))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// JobFinderRegistry
// ────────────────────────────────────────────────────────────────────────────

/// Dispatches to the finder named by `AutomationDefinition::source`.
pub struct JobFinderRegistry {
    demo: DemoJobFinder,
    sites: Vec<SiteJobFinder>,
}

impl Default for JobFinderRegistry {
    fn default() -> Self {
        Self {
            demo: DemoJobFinder,
            sites: KNOWN_SITES
                .iter()
                .map(|&site| SiteJobFinder { site })
                .collect(),
        }
    }
}

impl JobFinderRegistry {
    fn resolve(&self, source: &str) -> Option<&dyn JobFinder> {
        if source == DEFAULT_SOURCE {
            return Some(&self.demo);
        }
        self.sites
            .iter()
            .find(|f| f.site.eq_ignore_ascii_case(source))
            .map(|f| f as &dyn JobFinder)
    }
}

#[async_trait]
impl JobFinder for JobFinderRegistry {
    async fn find_jobs(
        &self,
        automation: &AutomationDefinition,
    ) -> Result<Vec<JobPosting>, AppError> {
        let source = automation.source.as_deref().unwrap_or(DEFAULT_SOURCE);
        let finder = self.resolve(source).ok_or_else(|| {
            AppError::JobSource(format!(
                "unknown job source '{source}' for automation {}",
                automation.id
            ))
        })?;
        finder.find_jobs(automation).await
    }
}
