//! End-to-end composer scenarios: carry-over, absent/corrupt sources,
//! path resolution, and write failures.

use mcpsetup::compose::{
    build_document, load_existing_entry, write_document, McpDocument, ServerConfig,
    CARRIED_SERVER, MCP_SERVERS_KEY,
};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn seed_existing_config(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("mcp.json");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_existing_entry_is_carried_into_document() {
    let dir = TempDir::new().unwrap();
    let entry = json!({"command": "npx", "args": ["-y", "ctx7"]});
    let source = seed_existing_config(
        &dir,
        &serde_json::to_string(&json!({MCP_SERVERS_KEY: {CARRIED_SERVER: entry}})).unwrap(),
    );

    let carried = load_existing_entry(&source, CARRIED_SERVER);
    assert_eq!(carried, Some(entry.clone()));

    let doc = build_document(
        &PathBuf::from("/opt/app"),
        &PathBuf::from("/opt/app/workspace"),
        carried,
    );

    assert_eq!(doc.servers.len(), 4);
    assert_eq!(
        doc.servers.get(CARRIED_SERVER),
        Some(&ServerConfig::Carried(entry))
    );
}

#[test]
fn test_absent_source_yields_static_entries_only() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist.json");

    let carried = load_existing_entry(&missing, CARRIED_SERVER);
    assert!(carried.is_none());

    let doc = build_document(
        &PathBuf::from("/opt/app"),
        &PathBuf::from("/opt/app/workspace"),
        carried,
    );

    assert_eq!(doc.servers.len(), 3);
    assert!(!doc.servers.contains_key(CARRIED_SERVER));
}

#[test]
fn test_corrupt_source_behaves_like_absent_source() {
    let dir = TempDir::new().unwrap();
    let corrupt = seed_existing_config(&dir, "\u{0}\u{1}not json {{{");

    let carried = load_existing_entry(&corrupt, CARRIED_SERVER);
    assert!(carried.is_none());

    let doc = build_document(
        &PathBuf::from("/opt/app"),
        &PathBuf::from("/opt/app/workspace"),
        carried,
    );
    assert_eq!(doc.servers.len(), 3);
}

#[test]
fn test_entry_paths_resolve_against_install_root() {
    let doc = build_document(
        &PathBuf::from("/opt/app"),
        &PathBuf::from("/opt/app/workspace"),
        None,
    );

    let ServerConfig::Declared(excel) = &doc.servers["excel-mcp"] else {
        panic!("excel entry must be declared");
    };
    assert_eq!(
        excel.cwd.as_deref(),
        Some(Path::new("/opt/app/excel-mcp-server-main"))
    );
    assert_eq!(
        excel.env.get("EXCEL_FILES_PATH").map(String::as_str),
        Some("/opt/app/workspace")
    );
}

#[test]
fn test_every_path_field_is_absolute() {
    let install = PathBuf::from("/opt/app");
    let workspace = install.join("workspace");
    let doc = build_document(&install, &workspace, None);

    for (name, config) in &doc.servers {
        let ServerConfig::Declared(entry) = config else {
            panic!("static entry {} must be declared", name);
        };
        if let Some(cwd) = &entry.cwd {
            assert!(cwd.starts_with(&install), "{}: cwd outside install root", name);
        }
        for arg in &entry.args {
            if arg.ends_with(".py") {
                assert!(
                    Path::new(arg).starts_with(&install),
                    "{}: script path outside install root",
                    name
                );
            }
        }
        for value in entry.env.values() {
            if value.contains('/') {
                assert_eq!(value, &workspace.display().to_string());
            }
        }
    }
}

#[test]
fn test_written_document_round_trips() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("cursor_mcp_config.json");
    let carried = json!({"command": "npx", "args": ["-y", "ctx7"], "transport": "sse"});
    let doc = build_document(
        &PathBuf::from("/opt/app"),
        &PathBuf::from("/opt/app/workspace"),
        Some(carried),
    );

    write_document(&doc, &dest).unwrap();

    let reparsed: McpDocument = serde_json::from_str(&fs::read_to_string(&dest).unwrap()).unwrap();
    assert_eq!(
        serde_json::to_value(&reparsed).unwrap(),
        serde_json::to_value(&doc).unwrap()
    );
}

#[test]
fn test_unwritable_destination_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("missing-parent").join("out.json");
    let doc = build_document(
        &PathBuf::from("/opt/app"),
        &PathBuf::from("/opt/app/workspace"),
        None,
    );

    let result = write_document(&doc, &dest);
    assert!(result.is_err());
    assert!(!dest.exists());
}

#[cfg(unix)]
#[test]
fn test_readonly_destination_directory_is_reported() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o555);
    fs::set_permissions(&locked, perms).unwrap();

    let dest = locked.join("out.json");
    let doc = build_document(
        &PathBuf::from("/opt/app"),
        &PathBuf::from("/opt/app/workspace"),
        None,
    );
    let result = write_document(&doc, &dest);

    // Restore permissions for cleanup
    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&locked, perms).unwrap();

    match result {
        Err(mcpsetup::error::SetupError::WriteConfig { path, .. }) => assert_eq!(path, dest),
        other => panic!("expected WriteConfig error, got {:?}", other),
    }
}
