//! # Configuration Management
//!
//! Layered configuration: built-in defaults, an optional TOML/YAML/JSON file,
//! then `REPOLOGY_`-prefixed environment variables using `__` as the nesting
//! separator (for example `REPOLOGY_ADMIN__PASSWORD` or
//! `REPOLOGY_SERVER__PORT`).

pub mod settings;

pub use settings::{
    AdminConfig, AppConfig, DatabaseConfig, ObservabilityConfig, ServerConfig, SessionConfig,
    DEFAULT_MAX_SESSIONS, DEFAULT_REPORTS_PER_PAGE, DEFAULT_SESSION_COOKIE_NAME,
    DEFAULT_SESSION_TTL_HOURS,
};

use std::path::Path;

use crate::errors::Result;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "REPOLOGY";

/// Load configuration from an optional file plus the process environment.
///
/// A file named explicitly must exist. Environment values are kept as
/// strings until deserialization so secrets such as `007` survive intact.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    load_layers(path, None)
}

fn load_layers(path: Option<&Path>, env: Option<config::Map<String, String>>) -> Result<AppConfig> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .source(env),
    );

    let config: AppConfig = builder.build()?.try_deserialize()?;
    config.validate()?;

    Ok(config)
}
