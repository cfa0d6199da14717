//! Configuration System
//!
//! Layered configuration for the client: built-in defaults, then the global
//! config file, then `KVCLI_*` environment overrides. Later sources win.

use crate::error::ClientError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Loads client configuration from the standard source stack.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Path to the global config file: ~/.config/kvcli/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("kvcli")
                .join("config.toml")
        })
    }

    /// Load configuration: defaults, then the global file if present, then
    /// environment overrides (e.g. KVCLI_LOGGING__LEVEL=debug).
    pub fn load() -> Result<ClientConfig, ClientError> {
        let mut builder = builder_with_defaults()?;

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                builder = builder
                    .add_source(config::File::from(global_path.as_path()).required(false));
            } else {
                warn!(
                    config_path = %global_path.display(),
                    "No configuration file at ~/.config/kvcli/config.toml; using defaults."
                );
            }
        }

        builder = builder.add_source(config::Environment::with_prefix("KVCLI").separator("__"));

        let settings = builder.build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from an explicit file path, skipping the global
    /// file and environment sources.
    pub fn load_from_file(path: &Path) -> Result<ClientConfig, ClientError> {
        let settings = builder_with_defaults()?
            .add_source(config::File::from(path))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Write a default config file at the given path, creating parent
    /// directories as needed. Used by the client's init flow.
    pub fn write_default(path: &Path) -> Result<(), ClientError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let rendered = toml::to_string_pretty(&ClientConfig::default())
            .map_err(|e| ClientError::ConfigError(e.to_string()))?;
        std::fs::write(path, rendered)?;
        Ok(())
    }
}

/// Create a Config builder with defaults applied.
fn builder_with_defaults(
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ClientError> {
    Ok(config::Config::builder()
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")?
        .set_default("logging.color", true)?)
}
