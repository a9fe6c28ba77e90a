use std::path::PathBuf;

use domain_types::{
    connector_types::PaymentOrder,
    types::{Connectors, Proxy},
};

use crate::{errors::ConfigurationError, logger::config::Log};

/// Prefix of the environment variables overriding the file configuration.
pub const ENV_PREFIX: &str = "CONNECTOR_TOOLKIT";

/// Deployment environment, picked from `RUN_ENV`.
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Env {
    #[default]
    Development,
    Sandbox,
    Production,
}

impl Env {
    pub fn current_env() -> Self {
        std::env::var("RUN_ENV")
            .ok()
            .and_then(|env| env.parse().ok())
            .unwrap_or_default()
    }

    pub fn config_path(self) -> &'static str {
        match self {
            Self::Development => "development.toml",
            Self::Sandbox => "sandbox.toml",
            Self::Production => "production.toml",
        }
    }
}

#[derive(Clone, serde::Deserialize, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub log: Log,
    pub proxy: Proxy,
    pub connectors: Connectors,
    /// Sends orders to provider sandboxes regardless of what the caller asks for.
    pub test_mode: bool,
}

impl Config {
    /// Function to build the configuration by picking it from default locations
    pub fn new() -> Result<Self, ConfigurationError> {
        Self::new_with_config_path(None)
    }

    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> Result<Self, ConfigurationError> {
        let env = Env::current_env();
        let config_path = Self::config_path(env, explicit_config_path);

        let config = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("proxy.bypass_proxy_urls"),
            )
            .build()?;

        #[allow(clippy::print_stderr)]
        let config: Self = serde_path_to_error::deserialize(config).map_err(|error| {
            eprintln!("Unable to deserialize application configuration: {error}");
            error.into_inner()
        })?;

        Ok(config)
    }

    /// Marks the order for the provider sandbox when the deployment runs in test mode.
    /// An order already flagged by the caller stays flagged.
    pub fn apply_test_mode(&self, mut order: PaymentOrder) -> PaymentOrder {
        order.test_mode |= self.test_mode;
        order
    }

    /// Config path.
    pub fn config_path(environment: Env, explicit_config_path: Option<PathBuf>) -> PathBuf {
        let mut config_path = PathBuf::new();
        if let Some(explicit_config_path_val) = explicit_config_path {
            config_path.push(explicit_config_path_val);
        } else {
            config_path.push(workspace_path());
            config_path.push("config");
            config_path.push(environment.config_path());
        }
        config_path
    }
}

pub fn workspace_path() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let mut path = PathBuf::from(manifest_dir);
        path.pop();
        path.pop();
        path
    } else {
        PathBuf::from(".")
    }
}
