use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::logger::{
    config::LoggerConfig,
    error::{LoggerError, LoggerResult},
};

/// Initializes text logger.
pub fn logger_text(cfg: &LoggerConfig) -> LoggerResult<()> {
    let filter = cfg.level.to_env_filter();
    let fmt_layer = fmt::layer()
        .with_ansi(cfg.should_use_color())
        .with_target(cfg.with_targets);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);
    init_subscriber(subscriber)
}

/// Initializes JSON (structured) logger.
pub fn logger_json(cfg: &LoggerConfig) -> LoggerResult<()> {
    let filter = cfg.level.to_env_filter();
    let fmt_layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_target(cfg.with_targets);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);
    init_subscriber(subscriber)
}

/// Installs the subscriber as the global default.
fn init_subscriber<S>(subscriber: S) -> LoggerResult<()>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use crate::logger::{LoggerFormat, config::LoggerConfig};

    #[test]
    fn text_config_builds_filter() {
        let config = LoggerConfig {
            format: LoggerFormat::Text,
            level: "info".parse().unwrap(),
            with_targets: true,
            use_color: false,
        };

        let _filter = config.level.to_env_filter();
        assert_eq!(config.format, LoggerFormat::Text);
    }

    #[test]
    fn json_config_builds_filter() {
        let config = LoggerConfig {
            format: LoggerFormat::Json,
            level: "plo_core=debug,info".parse().unwrap(),
            with_targets: false,
            use_color: true,
        };

        let _filter = config.level.to_env_filter();
        assert_eq!(config.format, LoggerFormat::Json);
    }
}
