//! Per-job pipeline: letter → submission → sheet row.
//!
//! Each step advances `JobStage`. The first error stops the job and is
//! returned with the last stage that completed.

use std::fmt;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::letters::generator::CoverLetterRequest;
use crate::models::application::{ApplicationRequest, LogRecord, LogStatus, SubmissionMetadata};
use crate::models::automation::AutomationDefinition;
use crate::models::job::JobPosting;
use crate::runner::AutomationRunner;

/// Last step a job completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStage {
    Discovered,
    LetterGenerated,
    Submitted,
    Logged,
}

impl fmt::Display for JobStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            JobStage::Discovered => "discovered",
            JobStage::LetterGenerated => "letter generated",
            JobStage::Submitted => "submitted",
            JobStage::Logged => "logged",
        };
        f.write_str(label)
    }
}

#[derive(Debug)]
pub enum JobOutcome {
    /// A sheet row was written; `applied` mirrors the submitter's success flag.
    Logged { applied: bool },
    /// A step raised; no row was written for this job.
    Failed { stage: JobStage, error: AppError },
}

impl AutomationRunner {
    pub(super) async fn apply_to_job(
        &self,
        automation: &AutomationDefinition,
        job: &JobPosting,
    ) -> JobOutcome {
        let mut stage = JobStage::Discovered;
        match self.run_job_steps(automation, job, &mut stage).await {
            Ok(status) => JobOutcome::Logged {
                applied: status == LogStatus::Applied,
            },
            Err(error) => JobOutcome::Failed { stage, error },
        }
    }

    async fn run_job_steps(
        &self,
        automation: &AutomationDefinition,
        job: &JobPosting,
        stage: &mut JobStage,
    ) -> Result<LogStatus, AppError> {
        let letter = self
            .collaborators
            .letters
            .generate(&CoverLetterRequest {
                job_description: &job.description,
                profile: &self.settings.candidate,
                tone: &self.settings.tone,
            })
            .await?;
        *stage = JobStage::LetterGenerated;

        let result = self
            .collaborators
            .submitter
            .submit(&ApplicationRequest {
                job_url: job.url.clone(),
                resume_path: self.settings.resume_path.clone(),
                cover_letter_text: letter,
                metadata: SubmissionMetadata {
                    automation_id: automation.id.clone(),
                    job_title: job.title.clone(),
                },
            })
            .await?;
        *stage = JobStage::Submitted;

        let status = LogStatus::from_success(result.success);
        self.collaborators
            .logger
            .append(&log_record(automation, job, status, result.message))
            .await?;
        *stage = JobStage::Logged;

        info!("Result: {} {}", job.title, result.success);
        Ok(status)
    }

    /// Emits the diagnostic for a recovered failure and, when configured,
    /// writes a "failed" row so the sheet keeps a line for the job.
    pub(super) async fn report_failure(
        &self,
        automation: &AutomationDefinition,
        job: &JobPosting,
        stage: JobStage,
        err: &AppError,
    ) {
        error!(
            automation_id = %automation.id,
            stage = %stage,
            "Error processing job {}: {err}",
            job.url
        );

        if !self.settings.log_error_outcomes {
            return;
        }

        let notes = format!("error after stage '{stage}': {err}");
        if let Err(log_err) = self
            .collaborators
            .logger
            .append(&log_record(automation, job, LogStatus::Failed, notes))
            .await
        {
            warn!("Could not log failure row for {}: {log_err}", job.url);
        }
    }
}

fn log_record(
    automation: &AutomationDefinition,
    job: &JobPosting,
    status: LogStatus,
    notes: String,
) -> LogRecord {
    LogRecord {
        automation_id: automation.id.clone(),
        job_title: job.title.clone(),
        company: job.company.clone(),
        url: job.url.clone(),
        status,
        notes,
        logged_at: Utc::now(),
    }
}
