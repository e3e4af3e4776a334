//! Pure construction of the composed document. No I/O, no error paths.

use indexmap::IndexMap;
use serde_json::Value;
use std::path::Path;

use super::{
    McpDocument, ServerConfig, ServerEntry, CARRIED_SERVER, EXCEL_SERVER, EXCEL_SERVER_DIR,
    INTERPRETER, POWERPOINT_SERVER, POWERPOINT_SERVER_DIR, POWERPOINT_SERVER_SCRIPT, WORD_SERVER,
    WORD_SERVER_DIR, WORD_SERVER_SCRIPT,
};

/// Build the configuration document for the given install root and
/// workspace directory.
///
/// Deterministic: the same `(install_dir, workspace_dir, carried)` triple
/// always yields a structurally equal document. The carried entry, when
/// present, is inserted under its original key ahead of the static entries.
pub fn build_document(
    install_dir: &Path,
    workspace_dir: &Path,
    carried: Option<Value>,
) -> McpDocument {
    let mut servers = IndexMap::new();

    if let Some(value) = carried {
        servers.insert(CARRIED_SERVER.to_string(), ServerConfig::Carried(value));
    }

    let workspace = workspace_dir.display().to_string();

    servers.insert(
        EXCEL_SERVER.to_string(),
        ServerConfig::Declared(ServerEntry {
            command: INTERPRETER.to_string(),
            args: vec![
                "-m".to_string(),
                "excel_mcp".to_string(),
                "stdio".to_string(),
            ],
            cwd: Some(install_dir.join(EXCEL_SERVER_DIR)),
            env: IndexMap::from([("EXCEL_FILES_PATH".to_string(), workspace.clone())]),
        }),
    );

    servers.insert(
        POWERPOINT_SERVER.to_string(),
        ServerConfig::Declared(ServerEntry {
            command: INTERPRETER.to_string(),
            args: vec![install_dir
                .join(POWERPOINT_SERVER_DIR)
                .join(POWERPOINT_SERVER_SCRIPT)
                .display()
                .to_string()],
            cwd: None,
            env: IndexMap::from([("PPT_TEMPLATE_PATH".to_string(), workspace.clone())]),
        }),
    );

    servers.insert(
        WORD_SERVER.to_string(),
        ServerConfig::Declared(ServerEntry {
            command: INTERPRETER.to_string(),
            args: vec![install_dir
                .join(WORD_SERVER_DIR)
                .join(WORD_SERVER_SCRIPT)
                .display()
                .to_string()],
            cwd: None,
            env: IndexMap::from([
                ("MCP_TRANSPORT".to_string(), "stdio".to_string()),
                ("WORD_FILES_PATH".to_string(), workspace),
            ]),
        }),
    );

    McpDocument { servers }
}
