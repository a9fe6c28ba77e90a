#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Unable to load configuration: {0}")]
    ConfigError(#[from] config::ConfigError),
    #[error("Invalid log filtering directive: {0}")]
    LogDirectiveError(#[from] tracing_subscriber::filter::ParseError),
    #[error("Failed to install the global subscriber: {0}")]
    SubscriberError(#[from] tracing_subscriber::util::TryInitError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
