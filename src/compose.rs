//! Configuration Composer
//!
//! Builds the Cursor MCP configuration document for the Office services:
//! an existing third-party entry carried over from the user's configuration
//! (when present), followed by the three statically defined service entries
//! with paths resolved against the install root. Construction is pure; all
//! I/O lives in the `carry` and `write` submodules.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod build;
mod carry;
mod write;

pub use build::build_document;
pub use carry::{default_cursor_config_path, load_existing_entry};
pub use write::{render_document, write_document};

/// Top-level key of a Cursor MCP configuration document.
pub const MCP_SERVERS_KEY: &str = "mcpServers";

/// Third-party entry carried over from an existing user configuration.
pub const CARRIED_SERVER: &str = "Context7";

pub const EXCEL_SERVER: &str = "excel-mcp";
pub const POWERPOINT_SERVER: &str = "powerpoint-mcp";
pub const WORD_SERVER: &str = "word-document-server";

pub(crate) const INTERPRETER: &str = "python";
pub(crate) const EXCEL_SERVER_DIR: &str = "excel-mcp-server-main";
pub(crate) const POWERPOINT_SERVER_DIR: &str = "Office-PowerPoint-MCP-Server-main";
pub(crate) const POWERPOINT_SERVER_SCRIPT: &str = "ppt_mcp_server.py";
pub(crate) const WORD_SERVER_DIR: &str = "Office-Word-MCP-Server-main";
pub(crate) const WORD_SERVER_SCRIPT: &str = "word_mcp_server.py";

/// A single launchable MCP service definition.
///
/// All path-valued fields are absolute by the time an entry is constructed;
/// no relative paths persist in the serialized output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerEntry {
    pub command: String,

    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub env: IndexMap<String, String>,
}

/// A service slot in the composed document.
///
/// Entries we construct ourselves are `Declared`; the carried-over
/// third-party entry is an opaque pass-through value the composer never
/// interprets or validates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerConfig {
    Declared(ServerEntry),
    Carried(serde_json::Value),
}

/// The composed configuration document. Insertion order of the service map
/// is preserved through serialization for reproducible output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpDocument {
    #[serde(rename = "mcpServers")]
    pub servers: IndexMap<String, ServerConfig>,
}

impl McpDocument {
    /// Service names in insertion order.
    pub fn server_names(&self) -> Vec<&str> {
        self.servers.keys().map(String::as_str).collect()
    }
}
