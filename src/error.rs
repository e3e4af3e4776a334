//! Error types for the mcpsetup bootstrapper.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the operator.
///
/// Parse failures while reading the user's existing Cursor configuration are
/// deliberately absent: they are absorbed inside `compose::carry` and degrade
/// to "no carried entry".
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Failed to write configuration to {path}: {source}")]
    WriteConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create workspace directory {path}: {source}")]
    Workspace {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to resolve install root {path}: {source}")]
    InstallRoot {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to probe Python environment: {0}")]
    Probe(std::io::Error),

    #[error("Failed to run installer: {0}")]
    Installer(std::io::Error),

    #[error(
        "Missing dependencies after install attempt: {}. \
         Run `pip install -r requirements.txt` manually and retry.",
        .0.join(", ")
    )]
    DependencyMissing(Vec<String>),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for SetupError {
    fn from(err: config::ConfigError) -> Self {
        SetupError::Config(err.to_string())
    }
}
