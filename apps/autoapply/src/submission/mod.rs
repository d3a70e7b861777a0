//! Application submission — hands each application to a headless-browser runner.
//!
//! `BrowserSubmitter` talks to an external runner service over HTTP; the runner
//! owns login, form filling and upload. `DryRunSubmitter` is used when no runner
//! is configured and never touches a job site.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::application::{ApplicationRequest, ApplicationResult};

/// Submits one application. Returns `success: false` for a rejected attempt;
/// an `Err` means the attempt itself broke.
#[async_trait]
pub trait ApplicationSubmitter: Send + Sync {
    async fn submit(&self, request: &ApplicationRequest) -> Result<ApplicationResult, AppError>;
}

/// Posts applications to a browser-automation runner.
pub struct BrowserSubmitter {
    client: Client,
    runner_url: String,
}

impl BrowserSubmitter {
    pub fn new(runner_url: String) -> Self {
        Self {
            client: Client::new(),
            runner_url,
        }
    }
}

#[async_trait]
impl ApplicationSubmitter for BrowserSubmitter {
    async fn submit(&self, request: &ApplicationRequest) -> Result<ApplicationResult, AppError> {
        debug!("Submitting application for {}", request.job_url);

        let response = self
            .client
            .post(&self.runner_url)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Submission(format!("browser runner unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Submission(format!(
                "browser runner returned {status}: {body}"
            )));
        }

        response
            .json::<ApplicationResult>()
            .await
            .map_err(|e| AppError::Submission(format!("unreadable runner response: {e}")))
    }
}

/// Message reported for every dry-run attempt.
pub const DRY_RUN_MESSAGE: &str = "dry run: submission skipped";

/// Stand-in used when `BROWSER_RUNNER_URL` is unset. Reports every attempt as not applied.
pub struct DryRunSubmitter;

#[async_trait]
impl ApplicationSubmitter for DryRunSubmitter {
    async fn submit(&self, request: &ApplicationRequest) -> Result<ApplicationResult, AppError> {
        info!(
            "Dry run: would apply to {} ({} chars of cover letter)",
            request.job_url,
            request.cover_letter_text.len()
        );
        Ok(ApplicationResult {
            success: false,
            message: DRY_RUN_MESSAGE.to_string(),
        })
    }
}
