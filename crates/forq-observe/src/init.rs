use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    LogFormat, LoggerConfig,
    error::{LoggerError, LoggerResult},
};

/// Install the global tracing subscriber described by the configuration.
///
/// After this call every `tracing` macro (`info!`, `debug!`, ...) goes
/// through the configured filter and formatter. Calling it twice returns
/// [`LoggerError::AlreadyInitialized`].
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LogFormat::Text => init_text(cfg),
        LogFormat::Json => init_json(cfg),
    }
}

fn init_text(cfg: &LoggerConfig) -> LoggerResult<()> {
    let filter = cfg.level.to_env_filter();
    let fmt_layer = fmt::layer()
        .with_ansi(cfg.should_use_color())
        .with_target(cfg.with_targets);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);
    install(subscriber)
}

fn init_json(cfg: &LoggerConfig) -> LoggerResult<()> {
    let filter = cfg.level.to_env_filter();
    let fmt_layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_target(cfg.with_targets);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);
    install(subscriber)
}

fn install<S>(subscriber: S) -> LoggerResult<()>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use crate::{LogFormat, LoggerConfig};

    #[test]
    fn text_config_builds_a_filter() {
        let config = LoggerConfig {
            format: LogFormat::Text,
            level: "forq_core=trace,info".parse().unwrap(),
            with_targets: true,
            use_color: false,
        };
        let _filter = config.level.to_env_filter();
    }

    #[test]
    fn json_config_builds_a_filter() {
        let config = LoggerConfig {
            format: LogFormat::Json,
            level: "debug".parse().unwrap(),
            with_targets: false,
            use_color: true,
        };
        let _filter = config.level.to_env_filter();
    }
}
