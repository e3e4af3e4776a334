//! Bootstrap orchestration: workspace, dependencies, composed configuration.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::compose::{
    build_document, load_existing_entry, write_document, McpDocument, CARRIED_SERVER,
};
use crate::config::SetupConfig;
use crate::deps::DependencyReport;
use crate::error::SetupError;

/// Name of the requirements manifest inside the install root.
pub const REQUIREMENTS_MANIFEST: &str = "requirements.txt";

/// Result of the compose phase.
#[derive(Debug, Clone)]
pub struct ComposeOutcome {
    pub document: McpDocument,
    pub output_path: PathBuf,
    /// False on dry runs.
    pub written: bool,
    /// Whether a third-party entry was carried over.
    pub carried: bool,
    /// The existing configuration consulted for the carried entry, if any
    /// location could be determined.
    pub source_config: Option<PathBuf>,
}

/// Summary of a full `setup` run.
#[derive(Debug, Clone)]
pub struct SetupSummary {
    pub install_root: PathBuf,
    pub workspace_dir: PathBuf,
    /// Absent when the dependency phase was skipped.
    pub dependencies: Option<DependencyReport>,
    pub compose: ComposeOutcome,
}

/// Load the carried entry (soft), build the document, and write it unless
/// `dry_run` is set.
pub fn run_compose(
    install_root: &Path,
    workspace_dir: &Path,
    settings: &SetupConfig,
    dry_run: bool,
) -> Result<ComposeOutcome, SetupError> {
    let source_config = settings.cursor_config_path();
    let carried = source_config
        .as_deref()
        .and_then(|path| load_existing_entry(path, CARRIED_SERVER));

    match (&source_config, carried.is_some()) {
        (Some(path), true) => info!(
            source = %path.display(),
            entry = CARRIED_SERVER,
            "Carrying over existing entry"
        ),
        (Some(path), false) => debug!(
            source = %path.display(),
            entry = CARRIED_SERVER,
            "No entry to carry over"
        ),
        (None, _) => debug!("No home directory; skipping existing configuration lookup"),
    }

    let carried_present = carried.is_some();
    let document = build_document(install_root, workspace_dir, carried);
    let output_path = install_root.join(&settings.output_file);

    if !dry_run {
        write_document(&document, &output_path)?;
    }

    Ok(ComposeOutcome {
        document,
        output_path,
        written: !dry_run,
        carried: carried_present,
        source_config,
    })
}
