//!
//! Setup logging subsystem.
//!

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use super::config;
use crate::errors::ConfigurationError;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps the non-blocking writers flushing until dropped.
#[derive(Debug)]
pub struct LogGuard {
    _log_guards: Vec<WorkerGuard>,
}

/// Installs the global subscriber. `crates_to_watch` get the configured console level,
/// everything else only warnings, unless a filtering directive overrides both.
pub fn setup<Str: AsRef<str>>(
    conf: &config::Log,
    service_name: &str,
    crates_to_watch: Vec<Str>,
) -> Result<LogGuard, ConfigurationError> {
    let mut guards = Vec::new();
    let mut layers: Vec<BoxedLayer> = Vec::new();

    if conf.file.enabled {
        let file_appender = tracing_appender::rolling::daily(&conf.file.path, &conf.file.file_name);
        let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
        guards.push(guard);

        let file_filter = filter::Targets::new().with_default(conf.file.level.into_level());
        layers.push(
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(file_writer)
                .with_filter(file_filter)
                .boxed(),
        );
    }

    if conf.console.enabled {
        let (console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);

        let console_filter = console_filter(&conf.console, crates_to_watch)?;
        let console_layer = match conf.console.log_format {
            config::LogFormat::Default => fmt::layer()
                .with_timer(fmt::time::time())
                .with_span_events(fmt::format::FmtSpan::CLOSE)
                .pretty()
                .with_writer(console_writer)
                .with_filter(console_filter)
                .boxed(),
            config::LogFormat::Json => fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_writer(console_writer)
                .with_filter(console_filter)
                .boxed(),
        };
        layers.push(console_layer);
    }

    tracing_subscriber::registry().with(layers).try_init()?;
    tracing::debug!(service = service_name, "logger initialized");

    Ok(LogGuard {
        _log_guards: guards,
    })
}

fn console_filter<Str: AsRef<str>>(
    conf: &config::LogConsole,
    crates_to_watch: Vec<Str>,
) -> Result<EnvFilter, ConfigurationError> {
    // RUST_LOG wins over the file configuration
    let directive = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|directive| !directive.trim().is_empty())
        .or_else(|| conf.filtering_directive.clone())
        .unwrap_or_else(|| default_directive(conf.level.into_level(), crates_to_watch));
    Ok(EnvFilter::try_new(directive)?)
}

fn default_directive<Str: AsRef<str>>(level: tracing::Level, crates_to_watch: Vec<Str>) -> String {
    std::iter::once(tracing::Level::WARN.to_string())
        .chain(
            crates_to_watch
                .iter()
                .map(|name| format!("{}={level}", name.as_ref())),
        )
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(
            default_directive(
                tracing::Level::DEBUG,
                vec!["connector_integration", "external_services"]
            ),
            "WARN,connector_integration=DEBUG,external_services=DEBUG"
        );
    }

    #[test]
    fn test_invalid_directive_is_rejected() {
        if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
            return;
        }
        let conf = config::LogConsole {
            filtering_directive: Some("connector_integration=LOUDEST".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            console_filter(&conf, Vec::<String>::new()),
            Err(ConfigurationError::LogDirectiveError(_))
        ));
    }
}
