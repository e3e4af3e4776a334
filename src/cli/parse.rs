//! CLI parse: clap types for mcpsetup. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mcpsetup CLI - Local environment bootstrapper for Office MCP services
#[derive(Parser)]
#[command(name = "mcpsetup")]
#[command(about = "Local environment bootstrapper for Office MCP services")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Installation root directory
    #[arg(long, default_value = ".")]
    pub install_dir: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable logging output
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr)
    #[arg(long)]
    pub log_output: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full bootstrap: workspace, dependencies, composed configuration
    Setup {
        /// Skip the dependency check/install phase
        #[arg(long)]
        skip_deps: bool,

        /// Install missing packages without prompting
        #[arg(long)]
        yes: bool,

        /// Compose and report without writing the output file
        #[arg(long)]
        dry_run: bool,
    },
    /// Compose and write the configuration document (no dependency phase)
    Compose {
        /// Report without writing the output file
        #[arg(long)]
        dry_run: bool,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Check required Python packages
    Deps {
        /// Attempt installation of missing packages
        #[arg(long)]
        install: bool,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
