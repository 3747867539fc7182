//! Spawner seam between the pool and the process backend.
//!
//! Concrete spawners (forq-exec) implement [`Spawner`] and are plugged into
//! the pool. Spawning is synchronous: a launch failure surfaces in the pool's
//! control task before the job ever occupies a slot.
use std::io;

use thiserror::Error;
use tokio::process::Child;

use forq_model::{Env, JobOutcome, JobSpec};

#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("invalid job: {0}")]
    InvalidJob(String),

    #[error("failed to launch '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Explicit execution context passed to spawners.
///
/// Everything a child process observes beyond its own [`JobSpec`] comes from
/// here: a base environment merged under the job's entries, and an optional
/// `PATH` override for program lookup. Nothing is read from ambient process
/// state, which keeps pool runs reproducible and testable in isolation.
#[derive(Clone, Debug, Default)]
pub struct SpawnContext {
    env: Env,
    search_path: Option<String>,
}

impl SpawnContext {
    /// Create an empty context: no base env, inherited `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Base environment applied under each job's own entries.
    pub fn env(&self) -> &Env {
        &self.env
    }

    /// `PATH` override for child program lookup, if any.
    pub fn search_path(&self) -> Option<&str> {
        self.search_path.as_deref()
    }

    /// Replace the base environment (builder style).
    pub fn with_env(mut self, env: Env) -> Self {
        self.env = env;
        self
    }

    /// Set an explicit `PATH` for children (builder style).
    pub fn with_search_path(mut self, path: impl Into<String>) -> Self {
        self.search_path = Some(path.into());
        self
    }
}

/// One admitted job: the rendered command plus its live OS process.
///
/// A slot exists only between admission and completion detection; it is
/// consumed by [`ActiveSlot::wait`].
pub struct ActiveSlot {
    command: String,
    child: Child,
}

impl ActiveSlot {
    /// Bind a freshly spawned child to its originating command.
    pub fn new(command: impl Into<String>, child: Child) -> Self {
        Self {
            command: command.into(),
            child,
        }
    }

    /// Rendered command, used for logs and the eventual outcome.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Wait for the process to terminate and produce its outcome.
    pub async fn wait(mut self) -> io::Result<JobOutcome> {
        let status = self.child.wait().await?;
        Ok(JobOutcome::from_status(self.command, status))
    }
}

/// Process backend used by the pool.
///
/// A spawner turns a [`JobSpec`] into a live [`ActiveSlot`]. It must not
/// block on the child; waiting is the pool's job.
pub trait Spawner: Send + Sync {
    /// Backend name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Launch the job's process under the given context.
    fn spawn(&self, job: &JobSpec, ctx: &SpawnContext) -> Result<ActiveSlot, SpawnError>;
}

#[cfg(test)]
mod tests {
    use super::SpawnContext;
    use forq_model::Env;

    #[test]
    fn default_context_is_empty() {
        let ctx = SpawnContext::new();
        assert!(ctx.env().is_empty());
        assert!(ctx.search_path().is_none());
    }

    #[test]
    fn builders_set_env_and_path() {
        let mut env = Env::new();
        env.push("TMPDIR", "/scratch");

        let ctx = SpawnContext::new()
            .with_env(env)
            .with_search_path("/opt/tools/bin:/usr/bin");

        assert_eq!(ctx.env().get("TMPDIR"), Some("/scratch"));
        assert_eq!(ctx.search_path(), Some("/opt/tools/bin:/usr/bin"));
    }
}
