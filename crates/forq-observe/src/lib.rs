mod config;
mod error;
mod format;
mod init;
mod level;

pub use config::LoggerConfig;
pub use error::LoggerError;
pub use format::LogFormat;
pub use init::init_logger;
pub use level::LogLevel;
