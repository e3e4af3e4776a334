//! Settings loading from explicit config files.

use mcpsetup::config::SetupConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_full_settings_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
python = "python3.12"
workspace_dir_name = "shared"
output_file = "mcp.generated.json"
cursor_config = "/home/user/.cursor/mcp.json"

[logging]
enabled = true
level = "warn"
format = "json"
output = "stdout"
"#,
    )
    .unwrap();

    let config = SetupConfig::load_from_file(&path).unwrap();
    assert_eq!(config.python, "python3.12");
    assert_eq!(config.workspace_dir_name, "shared");
    assert_eq!(config.output_file, "mcp.generated.json");
    assert_eq!(
        config.cursor_config,
        Some(PathBuf::from("/home/user/.cursor/mcp.json"))
    );
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.output, "stdout");
}

#[test]
fn test_partial_settings_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "python = \"python3\"\n").unwrap();

    let config = SetupConfig::load_from_file(&path).unwrap();
    assert_eq!(config.python, "python3");
    assert_eq!(config.workspace_dir_name, "workspace");
    assert_eq!(config.output_file, "cursor_mcp_config.json");
    assert!(config.logging.enabled);
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "python = [unterminated").unwrap();

    assert!(SetupConfig::load_from_file(&path).is_err());
}
