//! Dependency checks run before a batch is submitted.
//!
//! Program lookup is done against an explicit search path handed in by the
//! caller, never against the supervisor's own `PATH`, so a batch that passes
//! preflight here will resolve the same way inside the pool.
use std::path::Path;

use tracing::debug;

use forq_model::{JobCommand, JobSpec};

use crate::ExecError;

/// Verify that every argv job's program resolves on `search_path`.
///
/// `search_path` uses the usual colon-separated `PATH` syntax. Programs that
/// contain a path separator are checked as filesystem paths directly. Shell
/// jobs are skipped: their command line is opaque until `sh` parses it.
///
/// Missing programs are collected (first occurrence order, deduplicated) and
/// reported together in [`ExecError::MissingPrograms`].
pub fn check_programs(jobs: &[JobSpec], search_path: &str) -> Result<(), ExecError> {
    let mut missing: Vec<String> = Vec::new();

    for job in jobs {
        let JobCommand::Argv { program, .. } = &job.command else {
            continue;
        };
        if missing.iter().any(|m| m == program) {
            continue;
        }
        if !resolves(program, search_path) {
            missing.push(program.clone());
        }
    }

    if missing.is_empty() {
        debug!(jobs = jobs.len(), "preflight passed");
        Ok(())
    } else {
        Err(ExecError::MissingPrograms { programs: missing })
    }
}

fn resolves(program: &str, search_path: &str) -> bool {
    if program.contains('/') {
        return is_executable(Path::new(program));
    }
    search_path
        .split(':')
        .filter(|dir| !dir.is_empty())
        .any(|dir| is_executable(&Path::new(dir).join(program)))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::check_programs;
    use crate::ExecError;
    use forq_model::JobSpec;

    #[cfg(unix)]
    fn make_executable(dir: &std::path::Path, name: &str) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        std::fs::write(&path, b"#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn finds_programs_on_the_given_path() {
        let dir = tempfile::tempdir().unwrap();
        make_executable(dir.path(), "hmmfetch");

        let jobs = vec![JobSpec::argv("hmmfetch", ["db.hmm", "PF00001"])];
        let res = check_programs(&jobs, dir.path().to_str().unwrap());
        assert!(res.is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn reports_missing_programs_once_each() {
        let dir = tempfile::tempdir().unwrap();
        make_executable(dir.path(), "present");

        let jobs = vec![
            JobSpec::argv("present", Vec::<String>::new()),
            JobSpec::argv("absent-a", Vec::<String>::new()),
            JobSpec::argv("absent-a", Vec::<String>::new()),
            JobSpec::argv("absent-b", Vec::<String>::new()),
        ];

        match check_programs(&jobs, dir.path().to_str().unwrap()) {
            Err(ExecError::MissingPrograms { programs }) => {
                assert_eq!(programs, vec!["absent-a", "absent-b"]);
            }
            other => panic!("expected MissingPrograms, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn absolute_programs_bypass_the_search_path() {
        let dir = tempfile::tempdir().unwrap();
        let script = make_executable(dir.path(), "tool");

        let jobs = vec![JobSpec::argv(script.to_str().unwrap(), Vec::<String>::new())];
        // Empty search path: only the absolute path can resolve.
        assert!(check_programs(&jobs, "").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_files_do_not_count() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("data.txt"), b"not a program").unwrap();

        let jobs = vec![JobSpec::argv("data.txt", Vec::<String>::new())];
        assert!(check_programs(&jobs, dir.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn shell_jobs_are_skipped() {
        let jobs = vec![JobSpec::shell("definitely-not-a-binary | wc -l")];
        assert!(check_programs(&jobs, "/nonexistent").is_ok());
    }

    #[test]
    fn empty_batch_passes() {
        assert!(check_programs(&[], "/usr/bin").is_ok());
    }
}
