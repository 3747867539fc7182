use std::{convert::TryFrom, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::LoggerError;

/// Validated `tracing_subscriber::EnvFilter` expression.
///
/// Stores the raw filter string (e.g. `"info"` or
/// `"forq_core=trace,forq_exec=debug,info"`), validated at construction so
/// conversion to an actual filter cannot fail later.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct LogLevel(String);

impl LogLevel {
    /// Create a level from a string-like value, validating the expression.
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    /// The underlying filter string exactly as provided.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the `EnvFilter` for subscriber installation.
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.as_str()).expect("LogLevel is always valid after construction")
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::try_from("info".to_string()).expect("default log level must be valid")
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LogLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(LogLevel(s)),
            Err(e) => Err(LoggerError::InvalidLevel(format!("{}: {}", s, e))),
        }
    }
}

impl From<LogLevel> for String {
    fn from(l: LogLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use super::LogLevel;

    #[test]
    fn accepts_valid_expressions() {
        for lvl in ["info", "warn", "trace", "forq_core=trace,forq_exec=debug,info"] {
            assert!(lvl.parse::<LogLevel>().is_ok(), "rejected {lvl:?}");
        }
    }

    #[test]
    fn rejects_invalid_expressions() {
        for lvl in ["forq_core=lol", "a=trace,b=wat"] {
            assert!(lvl.parse::<LogLevel>().is_err(), "accepted {lvl:?}");
        }
    }

    #[test]
    fn default_is_info() {
        let lvl = LogLevel::default();
        assert_eq!(lvl.as_str(), "info");
        let _filter = lvl.to_env_filter();
    }

    #[test]
    fn serde_roundtrip_preserves_the_string() {
        let lvl: LogLevel = "forq_core=trace,info".parse().unwrap();
        let json = serde_json::to_string(&lvl).unwrap();
        let back: LogLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(lvl.as_str(), back.as_str());
    }
}
