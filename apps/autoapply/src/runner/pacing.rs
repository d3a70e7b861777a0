//! Pacing between job applications.
//!
//! The runner asks the policy for a pause after every logged job. Jobs that end
//! in a recovered failure skip the pause.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait PacingPolicy: Send + Sync {
    async fn pause(&self);
}

/// Waits the same interval after every job, regardless of outcome.
pub struct FixedInterval {
    interval: Duration,
}

impl FixedInterval {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

#[async_trait]
impl PacingPolicy for FixedInterval {
    async fn pause(&self) {
        debug!("Pausing {}ms before next application", self.interval.as_millis());
        tokio::time::sleep(self.interval).await;
    }
}
