//! FIFO queue of not-yet-admitted jobs.
//!
//! The pool owns exactly one queue per run and is the only mutator, so no
//! locking is needed. Making the queue explicit (rather than deleting from a
//! shared list while iterating) keeps admission order obvious.
use std::collections::VecDeque;

use forq_model::JobSpec;

/// Ordered list of jobs waiting for a free slot.
#[derive(Debug, Default)]
pub struct JobQueue(VecDeque<JobSpec>);

impl JobQueue {
    /// Build a queue from submitted jobs, preserving their order.
    pub fn from_jobs(jobs: Vec<JobSpec>) -> Self {
        Self(jobs.into())
    }

    /// Take the next job to admit.
    pub fn pop_front(&mut self) -> Option<JobSpec> {
        self.0.pop_front()
    }

    /// Number of jobs still waiting.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether any jobs are still waiting.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
