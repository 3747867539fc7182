use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::{LogFormat, LogLevel};

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format.
    pub format: LogFormat,
    /// Level filter expression (e.g. "info", "forq_core=debug,info").
    pub level: LogLevel,
    /// Whether to include module targets in log lines.
    pub with_targets: bool,
    /// Whether to use colored output.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: LogLevel::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Color is used only when enabled in config and stdout is a terminal.
    ///
    /// Terminal detection happens at call time, so this belongs in logger
    /// initialization rather than config parsing.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}
