//! Serialization of the composed document to its destination file.

use std::path::Path;
use tracing::info;

use super::McpDocument;
use crate::error::SetupError;

/// Render the document as pretty-printed JSON.
pub fn render_document(doc: &McpDocument) -> Result<String, SetupError> {
    serde_json::to_string_pretty(doc)
        .map_err(|err| SetupError::Config(format!("Failed to serialize configuration: {}", err)))
}

/// Write the document to `dest`, overwriting any existing file.
///
/// An unwritable destination is the composer's one fatal condition and is
/// surfaced with the path attached.
pub fn write_document(doc: &McpDocument, dest: &Path) -> Result<(), SetupError> {
    let rendered = render_document(doc)?;
    std::fs::write(dest, rendered).map_err(|source| SetupError::WriteConfig {
        path: dest.to_path_buf(),
        source,
    })?;
    info!(path = %dest.display(), "Configuration written");
    Ok(())
}
