//! Result logging — appends one spreadsheet row per attempted application.
//!
//! `CsvSheetLogger` writes a local CSV sheet; `WebhookSheetLogger` posts rows to a
//! spreadsheet webhook (an Apps Script endpoint or similar). Rows are never read back.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::errors::AppError;
use crate::models::application::LogRecord;

#[async_trait]
pub trait ResultLogger: Send + Sync {
    async fn append(&self, record: &LogRecord) -> Result<(), AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// CsvSheetLogger
// ────────────────────────────────────────────────────────────────────────────

/// Appends rows to a CSV file, writing the header only when the file is new or empty.
pub struct CsvSheetLogger {
    path: PathBuf,
}

impl CsvSheetLogger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

fn append_row(path: &Path, record: &LogRecord) -> Result<(), AppError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| sheet_error(path, e))?;
    let write_header = file.metadata().map_err(|e| sheet_error(path, e))?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(write_header)
        .from_writer(file);
    writer.serialize(record).map_err(|e| sheet_error(path, e))?;
    writer.flush().map_err(|e| sheet_error(path, e))?;
    Ok(())
}

fn sheet_error(path: &Path, e: impl std::fmt::Display) -> AppError {
    AppError::Sheet(format!("{}: {e}", path.display()))
}

#[async_trait]
impl ResultLogger for CsvSheetLogger {
    async fn append(&self, record: &LogRecord) -> Result<(), AppError> {
        let path = self.path.clone();
        let row = record.clone();
        // File and csv I/O block; keep them off the async worker threads.
        tokio::task::spawn_blocking(move || append_row(&path, &row))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("CSV writer task failed: {e}")))??;
        debug!("Appended row for {} to {}", record.url, self.path.display());
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// WebhookSheetLogger
// ────────────────────────────────────────────────────────────────────────────

/// Posts each row as JSON to a spreadsheet webhook.
pub struct WebhookSheetLogger {
    client: Client,
    webhook_url: String,
}

impl WebhookSheetLogger {
    pub fn new(webhook_url: String) -> Self {
        Self {
            client: Client::new(),
            webhook_url,
        }
    }
}

#[async_trait]
impl ResultLogger for WebhookSheetLogger {
    async fn append(&self, record: &LogRecord) -> Result<(), AppError> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(record)
            .send()
            .await
            .map_err(|e| AppError::Sheet(format!("sheet webhook unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Sheet(format!(
                "sheet webhook returned {status}: {body}"
            )));
        }

        debug!("Posted row for {} to sheet webhook", record.url);
        Ok(())
    }
}
