//! Tool configuration.
//!
//! Settings merge order, lowest to highest: built-in defaults, the global
//! config file at ~/.config/mcpsetup/config.toml, then MCPSETUP_*
//! environment variables.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::compose::default_cursor_config_path;
use crate::error::SetupError;
use crate::logging::LoggingConfig;

/// Runtime settings for the bootstrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Interpreter used for dependency probing and installation.
    pub python: String,

    /// Name of the shared workspace directory inside the install root.
    pub workspace_dir_name: String,

    /// Name of the composed configuration file inside the install root.
    pub output_file: String,

    /// Override for the existing Cursor configuration location
    /// (default: ~/.cursor/mcp.json).
    pub cursor_config: Option<PathBuf>,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            python: "python".to_string(),
            workspace_dir_name: "workspace".to_string(),
            output_file: "cursor_mcp_config.json".to_string(),
            cursor_config: None,
            logging: LoggingConfig::default(),
        }
    }
}

/// Path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("mcpsetup")
            .join("config.toml")
    })
}

fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("python", "python")?
        .set_default("workspace_dir_name", "workspace")?
        .set_default("output_file", "cursor_mcp_config.json")
}

impl SetupConfig {
    /// Load settings from defaults, the global config file, and environment.
    pub fn load() -> Result<Self, SetupError> {
        let mut builder = builder_with_defaults()?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let canonical = dunce::canonicalize(&global_path).unwrap_or(global_path);
                builder = builder.add_source(File::from(canonical).required(false));
            } else {
                warn!(
                    config_path = %global_path.display(),
                    "No global configuration file; using defaults"
                );
            }
        }

        builder = builder.add_source(Environment::with_prefix("MCPSETUP").separator("__"));

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load settings from an explicit config file, skipping the global file.
    pub fn load_from_file(path: &Path) -> Result<Self, SetupError> {
        let config = builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Location of the existing Cursor configuration to consult for the
    /// carried entry. `None` only when no home directory can be determined.
    pub fn cursor_config_path(&self) -> Option<PathBuf> {
        self.cursor_config
            .clone()
            .or_else(default_cursor_config_path)
    }
}
