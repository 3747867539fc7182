use std::process::Stdio;

use tokio::process::Command;
use tracing::trace;

use forq_core::spawn::{ActiveSlot, SpawnContext, SpawnError, Spawner};
use forq_model::{JobCommand, JobSpec, OutputMode};

/// Spawner that runs jobs as OS subprocesses.
pub struct SubprocessSpawner {
    /// Stdio disposition applied to every job spawned by this instance.
    output: OutputMode,
}

impl SubprocessSpawner {
    /// Create a spawner with the given output disposition.
    pub fn new(output: OutputMode) -> Self {
        Self { output }
    }

    fn build_command(&self, job: &JobSpec, ctx: &SpawnContext) -> Command {
        let mut cmd = match &job.command {
            JobCommand::Argv { program, args } => {
                let mut c = Command::new(program);
                c.args(args);
                c
            }
            JobCommand::Shell(line) => {
                let mut c = Command::new("sh");
                c.arg("-c").arg(line);
                c
            }
        };

        if let Some(cwd) = &job.cwd {
            cmd.current_dir(cwd);
        }
        // Job entries are merged over the context base, last-wins.
        for kv in ctx.env().merged(&job.env).iter() {
            cmd.env(kv.key(), kv.value());
        }
        if let Some(path) = ctx.search_path() {
            cmd.env("PATH", path);
        }

        match self.output {
            OutputMode::Discard => {
                cmd.stdout(Stdio::null());
                cmd.stderr(Stdio::null());
            }
            OutputMode::Inherit => {
                cmd.stdout(Stdio::inherit());
                cmd.stderr(Stdio::inherit());
            }
        }
        cmd
    }
}

impl Spawner for SubprocessSpawner {
    fn name(&self) -> &'static str {
        "subprocess"
    }

    fn spawn(&self, job: &JobSpec, ctx: &SpawnContext) -> Result<ActiveSlot, SpawnError> {
        job.validate()
            .map_err(|e| SpawnError::InvalidJob(e.to_string()))?;

        let command = job.display_command();
        trace!(
            command = %command,
            cwd = ?job.cwd,
            output = %self.output,
            "spawning subprocess"
        );

        let child = self
            .build_command(job, ctx)
            .spawn()
            .map_err(|e| SpawnError::Launch { command: command.clone(), source: e })?;

        Ok(ActiveSlot::new(command, child))
    }
}

#[cfg(test)]
mod tests {
    use super::SubprocessSpawner;
    use forq_core::spawn::{SpawnContext, SpawnError, Spawner};
    use forq_model::{Env, JobSpec, OutputMode};

    fn spawner() -> SubprocessSpawner {
        SubprocessSpawner::new(OutputMode::Discard)
    }

    #[tokio::test]
    async fn shell_job_reports_its_exit_code() {
        let job = JobSpec::shell("exit 4");

        let slot = spawner().spawn(&job, &SpawnContext::new()).unwrap();
        let outcome = slot.wait().await.unwrap();

        assert_eq!(outcome.code, Some(4));
        assert_eq!(outcome.command, "exit 4");
    }

    #[tokio::test]
    async fn argv_job_runs_without_shell_interpretation() {
        // Without a shell, "$HOME" is a literal argument, not an expansion.
        let job = JobSpec::argv("test", ["$HOME", "=", "$HOME"]);

        let slot = spawner().spawn(&job, &SpawnContext::new()).unwrap();
        let outcome = slot.wait().await.unwrap();

        assert_eq!(outcome.code, Some(0));
    }

    #[tokio::test]
    async fn job_env_overrides_context_env() {
        let mut base = Env::new();
        base.push("FORQ_CODE", "1");

        let mut job_env = Env::new();
        job_env.push("FORQ_CODE", "6");

        let job = JobSpec::shell("exit $FORQ_CODE").with_env(job_env);
        let ctx = SpawnContext::new().with_env(base);

        let outcome = spawner().spawn(&job, &ctx).unwrap().wait().await.unwrap();
        assert_eq!(outcome.code, Some(6));
    }

    #[tokio::test]
    async fn cwd_is_applied_to_the_child() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), b"").unwrap();

        let job = JobSpec::shell("test -f marker").with_cwd(dir.path());

        let outcome = spawner()
            .spawn(&job, &SpawnContext::new())
            .unwrap()
            .wait()
            .await
            .unwrap();
        assert_eq!(outcome.code, Some(0));
    }

    #[tokio::test]
    async fn search_path_override_limits_program_lookup() {
        let empty = tempfile::tempdir().unwrap();
        let ctx = SpawnContext::new().with_search_path(empty.path().to_str().unwrap());

        let job = JobSpec::argv("true", Vec::<String>::new());
        let res = spawner().spawn(&job, &ctx);

        assert!(matches!(res, Err(SpawnError::Launch { .. })));
    }

    #[tokio::test]
    async fn inherit_mode_still_runs_the_job() {
        let job = JobSpec::shell("true");
        let s = SubprocessSpawner::new(OutputMode::Inherit);

        let outcome = s
            .spawn(&job, &SpawnContext::new())
            .unwrap()
            .wait()
            .await
            .unwrap();
        assert!(outcome.success());
    }

    #[test]
    fn blank_job_is_rejected_before_spawning() {
        let job = JobSpec::shell("   ");
        let res = spawner().spawn(&job, &SpawnContext::new());
        assert!(matches!(res, Err(SpawnError::InvalidJob(_))));
    }
}
