//! Carried-entry loading from an existing Cursor configuration.
//!
//! Every failure mode here collapses to `None`: a missing file, unreadable
//! bytes, malformed JSON, or an absent nested key all mean "no carried
//! entry". Nothing on this path may abort the run.

use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::MCP_SERVERS_KEY;

/// Default location of the user's Cursor MCP configuration.
pub fn default_cursor_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".cursor").join("mcp.json"))
}

/// Extract one named entry from an existing configuration file.
///
/// The entry's value is returned unchanged as an opaque structural copy;
/// the composer does not interpret the third-party entry's shape.
pub fn load_existing_entry(path: &Path, entry_key: &str) -> Option<Value> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!(
                path = %path.display(),
                error = %err,
                "No existing configuration to carry over"
            );
            return None;
        }
    };

    let document: Value = match serde_json::from_slice(&bytes) {
        Ok(document) => document,
        Err(err) => {
            debug!(
                path = %path.display(),
                error = %err,
                "Existing configuration is not valid JSON; ignoring"
            );
            return None;
        }
    };

    document.get(MCP_SERVERS_KEY)?.get(entry_key).cloned()
}
