mod automations;
mod config;
mod discovery;
mod errors;
mod letters;
mod llm_client;
mod models;
mod routes;
mod runner;
mod runs;
mod sheets;
mod state;
mod submission;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::automations::loader::load_automations;
use crate::config::{Config, RunMode};
use crate::discovery::JobFinderRegistry;
use crate::letters::generator::LlmLetterGenerator;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::runner::pacing::FixedInterval;
use crate::runner::{AutomationRunner, Collaborators, RunSettings};
use crate::sheets::{CsvSheetLogger, ResultLogger, WebhookSheetLogger};
use crate::state::AppState;
use crate::submission::{ApplicationSubmitter, BrowserSubmitter, DryRunSubmitter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting autoapply v{}", env!("CARGO_PKG_VERSION"));

    // Fatal on a missing or malformed file: no partial load.
    let automations = load_automations(&config.automations_path)?;

    let runner = build_runner(&config);

    match config.mode {
        RunMode::Once => {
            runner.run(&automations).await?;
        }
        RunMode::Serve => {
            let app = build_router(AppState::new(automations, runner))
                .layer(TraceLayer::new_for_http());

            let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
            info!("Listening on {addr}");

            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}

/// Wires the production collaborators selected by config.
fn build_runner(config: &Config) -> AutomationRunner {
    let llm = match &config.anthropic_base_url {
        Some(base_url) => LlmClient::with_base_url(config.anthropic_api_key.clone(), base_url),
        None => LlmClient::new(config.anthropic_api_key.clone()),
    };
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let submitter: Arc<dyn ApplicationSubmitter> = match &config.browser_runner_url {
        Some(url) => {
            info!("Submitting applications through browser runner at {url}");
            Arc::new(BrowserSubmitter::new(url.clone()))
        }
        None => {
            info!("BROWSER_RUNNER_URL not set; submissions are dry runs");
            Arc::new(DryRunSubmitter)
        }
    };

    let logger: Arc<dyn ResultLogger> = match &config.sheet_webhook_url {
        Some(url) => {
            info!("Logging results to sheet webhook");
            Arc::new(WebhookSheetLogger::new(url.clone()))
        }
        None => {
            info!(
                "Logging results to {}",
                config.results_csv_path.display()
            );
            Arc::new(CsvSheetLogger::new(config.results_csv_path.clone()))
        }
    };

    info!(
        "Pacing applications {}ms apart",
        config.application_interval.as_millis()
    );

    AutomationRunner::new(
        Collaborators {
            job_finder: Arc::new(JobFinderRegistry::default()),
            letters: Arc::new(LlmLetterGenerator::new(llm)),
            submitter,
            logger,
            pacing: Arc::new(FixedInterval::new(config.application_interval)),
        },
        RunSettings::from_config(config),
    )
}
