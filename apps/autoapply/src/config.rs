use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::models::profile::CandidateProfile;

const DEFAULT_HIGHLIGHTS: &str = "Figma,prototyping,user research";
const DEFAULT_TONE: &str = "professional, confident";
const DEFAULT_INTERVAL_MS: u64 = 5000;

/// How the process behaves after loading configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Process every automation once, then exit.
    Once,
    /// Serve the automations API and run on demand.
    Serve,
}

/// Application configuration loaded from environment variables.
/// Built once at startup and passed by reference into the runner and adapters.
#[derive(Debug, Clone)]
pub struct Config {
    pub automations_path: PathBuf,
    pub candidate: CandidateProfile,
    pub resume_path: String,
    pub anthropic_api_key: String,
    /// Messages API host; a proxy or local stub may stand in for Anthropic.
    pub anthropic_base_url: Option<String>,
    pub cover_letter_tone: String,
    pub application_interval: Duration,
    /// When set, jobs that hit a recovered failure also get a "failed" sheet row.
    pub log_error_outcomes: bool,
    pub browser_runner_url: Option<String>,
    pub sheet_webhook_url: Option<String>,
    pub results_csv_path: PathBuf,
    pub mode: RunMode,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let highlights = optional("CANDIDATE_HIGHLIGHTS")
            .unwrap_or_else(|| DEFAULT_HIGHLIGHTS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .map(String::from)
            .collect();

        let interval_ms = match optional("APPLICATION_INTERVAL_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("APPLICATION_INTERVAL_MS must be a whole number of milliseconds")?,
            None => DEFAULT_INTERVAL_MS,
        };

        let log_error_outcomes = match optional("LOG_ERROR_OUTCOMES") {
            Some(raw) => parse_flag(&raw).context("LOG_ERROR_OUTCOMES must be true or false")?,
            None => false,
        };

        let mode = match optional("APP_MODE").as_deref() {
            None | Some("once") => RunMode::Once,
            Some("serve") => RunMode::Serve,
            Some(other) => bail!("APP_MODE must be 'once' or 'serve', got '{other}'"),
        };

        Ok(Config {
            automations_path: optional("AUTOMATIONS_PATH")
                .unwrap_or_else(|| "automations.json".to_string())
                .into(),
            candidate: CandidateProfile {
                name: require("USER_NAME")?,
                highlights,
            },
            resume_path: require("RESUME_PATH")?,
            anthropic_api_key: require("ANTHROPIC_API_KEY")?,
            anthropic_base_url: optional("ANTHROPIC_BASE_URL"),
            cover_letter_tone: optional("COVER_LETTER_TONE")
                .unwrap_or_else(|| DEFAULT_TONE.to_string()),
            application_interval: Duration::from_millis(interval_ms),
            log_error_outcomes,
            browser_runner_url: optional("BROWSER_RUNNER_URL"),
            sheet_webhook_url: optional("SHEET_WEBHOOK_URL"),
            results_csv_path: optional("RESULTS_CSV_PATH")
                .unwrap_or_else(|| "applications.csv".to_string())
                .into(),
            mode,
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognised flag value '{other}'"),
    }
}
