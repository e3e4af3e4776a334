//! CLI route: single route table and run context. Dispatches to domain
//! services and presentation.

use std::path::PathBuf;

use crate::cli::parse::Commands;
use crate::config::SetupConfig;
use crate::deps::{self, SystemPython};
use crate::error::SetupError;
use crate::setup::{self, SetupSummary, REQUIREMENTS_MANIFEST};
use crate::workspace;

/// Runtime context for CLI execution: resolved install root and settings.
pub struct RunContext {
    install_root: PathBuf,
    settings: SetupConfig,
}

impl RunContext {
    /// Create run context from the install directory and optional config
    /// path.
    pub fn new(install_dir: PathBuf, config_path: Option<PathBuf>) -> Result<Self, SetupError> {
        let settings = if let Some(ref cfg_path) = config_path {
            SetupConfig::load_from_file(cfg_path)?
        } else {
            SetupConfig::load()?
        };
        let install_root = workspace::resolve_install_root(&install_dir)?;
        Ok(Self {
            install_root,
            settings,
        })
    }

    pub fn settings(&self) -> &SetupConfig {
        &self.settings
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, SetupError> {
        match command {
            Commands::Setup {
                skip_deps,
                yes,
                dry_run,
            } => self.handle_setup(*skip_deps, *yes, *dry_run),
            Commands::Compose { dry_run, format } => self.handle_compose(*dry_run, format),
            Commands::Deps { install, format } => self.handle_deps(*install, format),
        }
    }

    fn handle_setup(
        &self,
        skip_deps: bool,
        yes: bool,
        dry_run: bool,
    ) -> Result<String, SetupError> {
        let workspace_dir =
            workspace::ensure_workspace(&self.install_root, &self.settings.workspace_dir_name)?;

        let dependencies = if skip_deps {
            None
        } else {
            let runtime = SystemPython::new(&self.settings.python);
            let manifest = self.install_root.join(REQUIREMENTS_MANIFEST);

            let report = deps::ensure_dependencies(&runtime, &manifest, false)?;
            let report = if report.is_satisfied() {
                report
            } else {
                if !yes && !confirm_install(report.missing.len())? {
                    return Ok("Setup cancelled: missing dependencies were not installed."
                        .to_string());
                }
                let report = deps::ensure_dependencies(&runtime, &manifest, true)?;
                if !report.is_satisfied() {
                    return Err(SetupError::DependencyMissing(report.missing_after));
                }
                report
            };
            Some(report)
        };

        let compose = setup::run_compose(&self.install_root, &workspace_dir, &self.settings, dry_run)?;

        let summary = SetupSummary {
            install_root: self.install_root.clone(),
            workspace_dir,
            dependencies,
            compose,
        };
        super::format_setup_summary(&summary)
    }

    fn handle_compose(&self, dry_run: bool, format: &str) -> Result<String, SetupError> {
        let workspace_dir =
            workspace::ensure_workspace(&self.install_root, &self.settings.workspace_dir_name)?;
        let outcome =
            setup::run_compose(&self.install_root, &workspace_dir, &self.settings, dry_run)?;
        super::format_compose_outcome(&outcome, format)
    }

    fn handle_deps(&self, install: bool, format: &str) -> Result<String, SetupError> {
        let runtime = SystemPython::new(&self.settings.python);
        let manifest = self.install_root.join(REQUIREMENTS_MANIFEST);
        let report = deps::ensure_dependencies(&runtime, &manifest, install)?;
        super::format_deps_report(&report, format)
    }
}

fn confirm_install(missing: usize) -> Result<bool, SetupError> {
    use dialoguer::Confirm;

    Confirm::new()
        .with_prompt(format!(
            "{} package(s) missing. Install with pip now?",
            missing
        ))
        .default(true)
        .interact()
        .map_err(|e| SetupError::Config(format!("Failed to get user input: {}", e)))
}
