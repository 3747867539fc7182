use std::fmt;
use std::process::ExitStatus;

use serde::{Deserialize, Serialize};

/// Terminal result of one completed job.
///
/// Exactly one outcome is produced per submitted job. `code` is the process
/// exit code; `None` means the process was terminated by a signal and never
/// reported a code.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOutcome {
    /// Rendered command that produced this outcome.
    pub command: String,

    /// Exit code, or `None` for signal termination.
    pub code: Option<i32>,
}

impl JobOutcome {
    /// Build an outcome from a wait status.
    pub fn from_status(command: impl Into<String>, status: ExitStatus) -> Self {
        Self {
            command: command.into(),
            code: status.code(),
        }
    }

    /// A job succeeded only if it exited with code zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for JobOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "[{code}] {}", self.command),
            None => write!(f, "[signal] {}", self.command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::JobOutcome;

    #[test]
    fn success_requires_code_zero() {
        let ok = JobOutcome {
            command: "true".into(),
            code: Some(0),
        };
        let failed = JobOutcome {
            command: "false".into(),
            code: Some(1),
        };
        let signaled = JobOutcome {
            command: "sleep 60".into(),
            code: None,
        };

        assert!(ok.success());
        assert!(!failed.success());
        assert!(!signaled.success());
    }

    #[test]
    fn display_shows_code_or_signal() {
        let failed = JobOutcome {
            command: "false".into(),
            code: Some(1),
        };
        assert_eq!(failed.to_string(), "[1] false");

        let signaled = JobOutcome {
            command: "sleep 60".into(),
            code: None,
        };
        assert_eq!(signaled.to_string(), "[signal] sleep 60");
    }

    #[test]
    fn serde_roundtrip_json() {
        let outcome = JobOutcome {
            command: "hmmsearch db.hmm seqs.fa".into(),
            code: Some(3),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"code\":3"));

        let back: JobOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }
}
