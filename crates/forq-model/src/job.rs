use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Env, ModelError};

/// Command form of a job.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobCommand {
    /// Program invoked directly with an argument vector, no shell involved.
    Argv {
        /// Program to execute (e.g. "hmmsearch", "/usr/bin/sort").
        program: String,

        /// Command-line arguments.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<String>,
    },
    /// Single command line handed to `sh -c` for interpretation.
    Shell(String),
}

/// Immutable description of one external-process job.
///
/// A `JobSpec` says *what* to run; the pool decides *when*. Specs are built
/// by the caller, queued, and never mutated after submission.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSpec {
    /// Command to run, either argv-style or a shell line.
    pub command: JobCommand,

    /// Environment entries applied on top of the pool's base environment.
    #[serde(default, skip_serializing_if = "Env::is_empty")]
    pub env: Env,

    /// Working directory. If `None`, inherits from the supervising process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
}

impl JobSpec {
    /// Create an argv-style job.
    pub fn argv<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: JobCommand::Argv {
                program: program.into(),
                args: args.into_iter().map(Into::into).collect(),
            },
            env: Env::default(),
            cwd: None,
        }
    }

    /// Create a shell job from a single command line.
    pub fn shell(line: impl Into<String>) -> Self {
        Self {
            command: JobCommand::Shell(line.into()),
            env: Env::default(),
            cwd: None,
        }
    }

    /// Create an argv-style job from a token list; the first token is the program.
    ///
    /// Returns an error when the token list is empty.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = tokens.into_iter().map(Into::into);
        let program = tokens
            .next()
            .ok_or_else(|| ModelError::InvalidJob("empty token list".into()))?;
        Ok(Self::argv(program, tokens))
    }

    /// Attach job-level environment entries (builder style).
    pub fn with_env(mut self, env: Env) -> Self {
        self.env = env;
        self
    }

    /// Set the working directory (builder style).
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Validate the job before submission.
    ///
    /// Rules:
    /// - argv program is not empty or whitespace-only;
    /// - shell line is not empty or whitespace-only.
    pub fn validate(&self) -> Result<(), ModelError> {
        match &self.command {
            JobCommand::Argv { program, .. } if program.trim().is_empty() => {
                Err(ModelError::InvalidJob("argv program is empty".into()))
            }
            JobCommand::Shell(line) if line.trim().is_empty() => {
                Err(ModelError::InvalidJob("shell command line is empty".into()))
            }
            _ => Ok(()),
        }
    }

    /// Render the command for logs and outcomes.
    ///
    /// Argv jobs are joined with single spaces; shell jobs are the line as-is.
    pub fn display_command(&self) -> String {
        match &self.command {
            JobCommand::Argv { program, args } => {
                if args.is_empty() {
                    program.clone()
                } else {
                    let mut out = program.clone();
                    for arg in args {
                        out.push(' ');
                        out.push_str(arg);
                    }
                    out
                }
            }
            JobCommand::Shell(line) => line.clone(),
        }
    }
}
