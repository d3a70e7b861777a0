//! In-memory fakes for the runner's collaborator traits (testing only).
//!
//! Every fake appends to a shared `Journal` so tests can assert call order.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::discovery::JobFinder;
use crate::errors::AppError;
use crate::letters::generator::{CoverLetterRequest, LetterGenerator};
use crate::models::application::{ApplicationRequest, ApplicationResult, LogRecord};
use crate::models::automation::AutomationDefinition;
use crate::models::job::JobPosting;
use crate::models::profile::CandidateProfile;
use crate::runner::pacing::PacingPolicy;
use crate::runner::{AutomationRunner, Collaborators, RunSettings};
use crate::sheets::ResultLogger;
use crate::submission::ApplicationSubmitter;

pub const RESUME_PATH: &str = "/home/ada/resume.pdf";

pub fn automation(id: &str, kind: &str) -> AutomationDefinition {
    AutomationDefinition {
        id: id.to_string(),
        kind: kind.to_string(),
        title: format!("Automation {id}"),
        source: None,
        criteria: Default::default(),
    }
}

pub fn posting(n: &str) -> JobPosting {
    JobPosting {
        title: format!("Designer {n}"),
        company: format!("Company {n}"),
        url: format!("https://jobs.test/{n}"),
        description: format!("Description {n}"),
    }
}

// ---------------------------------------------------------------------------
// Journal
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct Journal {
    entries: Mutex<Vec<String>>,
}

impl Journal {
    fn push(&self, entry: String) {
        self.entries.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

pub struct ScriptedFinder {
    journal: Arc<Journal>,
    jobs: Mutex<HashMap<String, Vec<JobPosting>>>,
    failing: Mutex<HashSet<String>>,
}

#[async_trait]
impl JobFinder for ScriptedFinder {
    async fn find_jobs(
        &self,
        automation: &AutomationDefinition,
    ) -> Result<Vec<JobPosting>, AppError> {
        self.journal.push(format!("find:{}", automation.id));
        if self.failing.lock().unwrap().contains(&automation.id) {
            return Err(AppError::JobSource("job board offline".to_string()));
        }
        Ok(self
            .jobs
            .lock()
            .unwrap()
            .get(&automation.id)
            .cloned()
            .unwrap_or_default())
    }
}

pub struct ScriptedLetters {
    journal: Arc<Journal>,
    failing: Mutex<HashSet<String>>,
    empty: Mutex<bool>,
}

#[async_trait]
impl LetterGenerator for ScriptedLetters {
    async fn generate(&self, request: &CoverLetterRequest<'_>) -> Result<String, AppError> {
        self.journal.push(format!("letter:{}", request.job_description));
        if self.failing.lock().unwrap().contains(request.job_description) {
            return Err(AppError::Llm("quota exceeded".to_string()));
        }
        if *self.empty.lock().unwrap() {
            return Ok(String::new());
        }
        Ok(format!("Letter for {}", request.job_description))
    }
}

pub struct ScriptedSubmitter {
    journal: Arc<Journal>,
    results: Mutex<HashMap<String, ApplicationResult>>,
    failing: Mutex<HashSet<String>>,
    requests: Mutex<Vec<ApplicationRequest>>,
}

impl ScriptedSubmitter {
    pub fn requests(&self) -> Vec<ApplicationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApplicationSubmitter for ScriptedSubmitter {
    async fn submit(&self, request: &ApplicationRequest) -> Result<ApplicationResult, AppError> {
        self.journal.push(format!("submit:{}", request.job_url));
        self.requests.lock().unwrap().push(request.clone());
        if self.failing.lock().unwrap().contains(&request.job_url) {
            return Err(AppError::Submission("browser crashed".to_string()));
        }
        Ok(self
            .results
            .lock()
            .unwrap()
            .get(&request.job_url)
            .cloned()
            .unwrap_or(ApplicationResult {
                success: true,
                message: "ok".to_string(),
            }))
    }
}

pub struct RecordingLogger {
    journal: Arc<Journal>,
    failing: Mutex<HashSet<String>>,
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLogger {
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResultLogger for RecordingLogger {
    async fn append(&self, record: &LogRecord) -> Result<(), AppError> {
        self.journal.push(format!("log:{}", record.url));
        if self.failing.lock().unwrap().contains(&record.url) {
            return Err(AppError::Sheet("sheet unavailable".to_string()));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

pub struct CountingPacer {
    journal: Arc<Journal>,
    pauses: AtomicUsize,
}

impl CountingPacer {
    pub fn pauses(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PacingPolicy for CountingPacer {
    async fn pause(&self) {
        self.journal.push("pause".to_string());
        self.pauses.fetch_add(1, Ordering::SeqCst);
    }
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

/// Builder that wires every fake into an `AutomationRunner`.
pub struct Harness {
    pub journal: Arc<Journal>,
    pub finder: Arc<ScriptedFinder>,
    pub letters: Arc<ScriptedLetters>,
    pub submitter: Arc<ScriptedSubmitter>,
    pub logger: Arc<RecordingLogger>,
    pub pacer: Arc<CountingPacer>,
    log_error_outcomes: bool,
}

impl Harness {
    pub fn new() -> Self {
        let journal = Arc::new(Journal::default());
        Self {
            finder: Arc::new(ScriptedFinder {
                journal: journal.clone(),
                jobs: Mutex::default(),
                failing: Mutex::default(),
            }),
            letters: Arc::new(ScriptedLetters {
                journal: journal.clone(),
                failing: Mutex::default(),
                empty: Mutex::new(false),
            }),
            submitter: Arc::new(ScriptedSubmitter {
                journal: journal.clone(),
                results: Mutex::default(),
                failing: Mutex::default(),
                requests: Mutex::default(),
            }),
            logger: Arc::new(RecordingLogger {
                journal: journal.clone(),
                failing: Mutex::default(),
                records: Mutex::default(),
            }),
            pacer: Arc::new(CountingPacer {
                journal: journal.clone(),
                pauses: AtomicUsize::new(0),
            }),
            journal,
            log_error_outcomes: false,
        }
    }

    pub fn with_jobs(self, automation_id: &str, jobs: Vec<JobPosting>) -> Self {
        self.finder
            .jobs
            .lock()
            .unwrap()
            .insert(automation_id.to_string(), jobs);
        self
    }

    pub fn failing_finder(self, automation_id: &str) -> Self {
        self.finder
            .failing
            .lock()
            .unwrap()
            .insert(automation_id.to_string());
        self
    }

    pub fn failing_letter(self, description: &str) -> Self {
        self.letters
            .failing
            .lock()
            .unwrap()
            .insert(description.to_string());
        self
    }

    pub fn empty_letters(self) -> Self {
        *self.letters.empty.lock().unwrap() = true;
        self
    }

    pub fn with_result(self, url: &str, result: ApplicationResult) -> Self {
        self.submitter
            .results
            .lock()
            .unwrap()
            .insert(url.to_string(), result);
        self
    }

    pub fn failing_submit(self, url: &str) -> Self {
        self.submitter
            .failing
            .lock()
            .unwrap()
            .insert(url.to_string());
        self
    }

    pub fn failing_log(self, url: &str) -> Self {
        self.logger.failing.lock().unwrap().insert(url.to_string());
        self
    }

    pub fn log_error_outcomes(mut self) -> Self {
        self.log_error_outcomes = true;
        self
    }

    pub fn runner(&self) -> AutomationRunner {
        AutomationRunner::new(
            Collaborators {
                job_finder: self.finder.clone(),
                letters: self.letters.clone(),
                submitter: self.submitter.clone(),
                logger: self.logger.clone(),
                pacing: self.pacer.clone(),
            },
            RunSettings {
                candidate: CandidateProfile {
                    name: "Ada Lovelace".to_string(),
                    highlights: vec!["Figma".to_string(), "prototyping".to_string()],
                },
                resume_path: RESUME_PATH.to_string(),
                tone: "professional, confident".to_string(),
                log_error_outcomes: self.log_error_outcomes,
            },
        )
    }
}
