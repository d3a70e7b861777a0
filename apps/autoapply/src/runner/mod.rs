//! Automation Runner — walks the automation list and applies to every job found.
//!
//! Flow per eligible automation: find_jobs → for each job:
//!   generate letter → submit → log row → pause.
//!
//! Everything is strictly sequential. A job finder failure aborts the run;
//! a failure inside one job is reported and the runner moves on.

pub mod job;
pub mod pacing;

#[cfg(test)]
pub(crate) mod fakes;

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::discovery::JobFinder;
use crate::errors::AppError;
use crate::letters::generator::LetterGenerator;
use crate::models::automation::AutomationDefinition;
use crate::models::profile::CandidateProfile;
use crate::runner::job::JobOutcome;
use crate::runner::pacing::PacingPolicy;
use crate::sheets::ResultLogger;
use crate::submission::ApplicationSubmitter;

/// The external systems one run talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub job_finder: Arc<dyn JobFinder>,
    pub letters: Arc<dyn LetterGenerator>,
    pub submitter: Arc<dyn ApplicationSubmitter>,
    pub logger: Arc<dyn ResultLogger>,
    pub pacing: Arc<dyn PacingPolicy>,
}

/// Static per-process inputs shared by every job.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub candidate: CandidateProfile,
    pub resume_path: String,
    pub tone: String,
    /// Also write a "failed" row for jobs that hit a recovered failure.
    pub log_error_outcomes: bool,
}

impl RunSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            candidate: config.candidate.clone(),
            resume_path: config.resume_path.clone(),
            tone: config.cover_letter_tone.clone(),
            log_error_outcomes: config.log_error_outcomes,
        }
    }
}

/// Counters for one finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub automations_processed: usize,
    pub automations_skipped: usize,
    /// Jobs logged as "applied".
    pub jobs_applied: usize,
    /// Jobs the submitter reported as unsuccessful, logged as "failed".
    pub jobs_not_applied: usize,
    /// Jobs that hit a recovered failure.
    pub jobs_errored: usize,
}

pub struct AutomationRunner {
    collaborators: Collaborators,
    settings: RunSettings,
}

impl AutomationRunner {
    pub fn new(collaborators: Collaborators, settings: RunSettings) -> Self {
        Self {
            collaborators,
            settings,
        }
    }

    /// Processes automations in listed order. Non job-apply automations are skipped.
    pub async fn run(&self, automations: &[AutomationDefinition]) -> Result<RunSummary, AppError> {
        let mut summary = RunSummary::default();

        for automation in automations {
            if !automation.is_job_apply() {
                debug!(
                    "Skipping automation {} of type '{}'",
                    automation.id, automation.kind
                );
                summary.automations_skipped += 1;
                continue;
            }
            self.process_automation(automation, &mut summary).await?;
            summary.automations_processed += 1;
        }

        info!("All automations processed.");
        info!(
            "Run summary: processed={} skipped={} applied={} not_applied={} errored={}",
            summary.automations_processed,
            summary.automations_skipped,
            summary.jobs_applied,
            summary.jobs_not_applied,
            summary.jobs_errored
        );
        Ok(summary)
    }

    async fn process_automation(
        &self,
        automation: &AutomationDefinition,
        summary: &mut RunSummary,
    ) -> Result<(), AppError> {
        info!("Processing: {}", automation.title);

        // Not caught: a broken job source stops the whole run.
        let jobs = self.collaborators.job_finder.find_jobs(automation).await?;
        debug!("Automation {} found {} jobs", automation.id, jobs.len());

        for job in &jobs {
            match self.apply_to_job(automation, job).await {
                JobOutcome::Logged { applied: true } => {
                    summary.jobs_applied += 1;
                    self.collaborators.pacing.pause().await;
                }
                JobOutcome::Logged { applied: false } => {
                    summary.jobs_not_applied += 1;
                    self.collaborators.pacing.pause().await;
                }
                JobOutcome::Failed { stage, error } => {
                    summary.jobs_errored += 1;
                    self.report_failure(automation, job, stage, &error).await;
                }
            }
        }

        Ok(())
    }
}
