//! Install root resolution and workspace directory creation.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::SetupError;

/// Resolve the install root to an absolute, normalized path.
///
/// Canonicalization failures fall back to the joined absolute path so a
/// not-yet-populated install root still resolves.
pub fn resolve_install_root(path: &Path) -> Result<PathBuf, SetupError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|source| SetupError::InstallRoot {
                path: path.to_path_buf(),
                source,
            })?
            .join(path)
    };
    Ok(dunce::canonicalize(&absolute).unwrap_or(absolute))
}

/// Ensure the shared workspace directory exists. Idempotent.
pub fn ensure_workspace(install_root: &Path, name: &str) -> Result<PathBuf, SetupError> {
    let dir = install_root.join(name);
    std::fs::create_dir_all(&dir).map_err(|source| SetupError::Workspace {
        path: dir.clone(),
        source,
    })?;
    info!(path = %dir.display(), "Workspace directory ready");
    Ok(dir)
}
