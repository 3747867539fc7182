//! Bounded-concurrency pool of external-process jobs.
//!
//! One `run` call owns its queue, active slots, and outcome list; the control
//! flow is a single task, so nothing is shared or locked. Completion is
//! detected with a blocking multi-wait (`JoinSet::join_next`) instead of
//! polling each child in a loop.
use std::io;

use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tracing::{debug, instrument, trace};

use forq_model::{JobOutcome, JobSpec};

use crate::{
    error::CoreError,
    queue::JobQueue,
    spawn::{SpawnContext, Spawner},
};

/// Pool settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Maximum number of concurrently live jobs. Zero behaves as one.
    pub concurrency: usize,
}

impl PoolConfig {
    /// Create a config with the given concurrency limit.
    pub fn new(concurrency: usize) -> Self {
        Self { concurrency }
    }

    /// Concurrency limit actually enforced: never fewer than one.
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.max(1)
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self { concurrency: 1 }
    }
}

/// Supervisor for a batch of independent jobs.
///
/// Admits jobs in FIFO order, keeps at most the configured number of slots
/// live, and returns one [`JobOutcome`] per submitted job in completion
/// order. A non-zero exit is data, not an error; a failure to launch at all
/// aborts the run.
pub struct Pool<S> {
    spawner: S,
    config: PoolConfig,
}

impl<S: Spawner> Pool<S> {
    /// Create a pool over the given process backend.
    pub fn new(spawner: S, config: PoolConfig) -> Self {
        Self { spawner, config }
    }

    /// Run every job to completion and collect the outcomes.
    ///
    /// Each loop turn admits jobs until the limit or the queue is exhausted,
    /// then blocks until some slot finishes. Throughout the run
    /// `queued + active + completed` equals the number of submitted jobs, so
    /// every job is accounted for exactly once.
    ///
    /// Outcomes are in completion order, which matches submission order only
    /// for a limit of one. Already-running jobs are not cancelled when a
    /// later launch fails; they continue to natural completion unsupervised.
    #[instrument(level = "debug", skip_all, fields(spawner = self.spawner.name(), jobs = jobs.len(), limit = self.config.effective_concurrency()))]
    pub async fn run(
        &self,
        jobs: Vec<JobSpec>,
        ctx: &SpawnContext,
    ) -> Result<Vec<JobOutcome>, CoreError> {
        let limit = self.config.effective_concurrency();
        let total = jobs.len();

        let mut queue = JobQueue::from_jobs(jobs);
        let mut active: JoinSet<io::Result<JobOutcome>> = JoinSet::new();
        let mut outcomes = Vec::with_capacity(total);

        while !queue.is_empty() || !active.is_empty() {
            while active.len() < limit {
                let Some(job) = queue.pop_front() else { break };
                let slot = self.spawner.spawn(&job, ctx)?;
                debug!(
                    command = slot.command(),
                    active = active.len() + 1,
                    queued = queue.len(),
                    "job admitted"
                );
                active.spawn(slot.wait());
            }

            if let Some(joined) = active.join_next().await {
                let outcome = joined
                    .map_err(|e| CoreError::Join(e.to_string()))?
                    .map_err(|e| CoreError::Wait(e.to_string()))?;
                trace!(command = %outcome.command, code = ?outcome.code, "job completed");
                outcomes.push(outcome);
            }
        }

        debug!(total, "pool drained");
        Ok(outcomes)
    }
}
