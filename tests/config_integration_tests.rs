//! Integration tests for ConfigManager and configuration file handling
//!
//! These tests verify:
//! - Built-in defaults when no config file exists
//! - Partial YAML overrides falling back to defaults
//! - Saving and reloading configuration
//! - Language table order preservation

use camino::Utf8PathBuf;
use solution_stats::ConfigManager;
use solution_stats::config::CONFIG_FILE_NAME;
use std::fs;
use tempfile::TempDir;

fn create_test_config_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, config_path)
}

#[test]
fn test_create_config_manager() {
    let (_temp_dir, base_dir) = create_test_config_dir();
    let manager = ConfigManager::new(&base_dir);

    assert_eq!(manager.base_dir(), &base_dir);
    assert_eq!(manager.config_path(), base_dir.join(CONFIG_FILE_NAME).as_path());
}

#[test]
fn test_load_default_config() {
    let (_temp_dir, base_dir) = create_test_config_dir();
    let manager = ConfigManager::new(&base_dir);

    // Config file doesn't exist, should return defaults
    let config = manager.load_config().unwrap();

    assert_eq!(config.folders, vec!["LeetCode", "Baekjoon", "AdventOfCode"]);
    assert_eq!(config.document, "README.md");
    assert_eq!(config.language_for(".py"), Some("Python"));
    assert!(config.is_ignored(".o"));
    assert!(config.log_dir.is_none());
}

#[test]
fn test_partial_override() {
    let (_temp_dir, base_dir) = create_test_config_dir();
    let manager = ConfigManager::new(&base_dir);

    let content = r#"
folders:
  - Codeforces
  - ProjectEuler
document: docs/INDEX.md
debug_mode: true
"#;
    fs::write(manager.config_path(), content).unwrap();

    let config = manager.load_config().unwrap();

    assert_eq!(config.folders, vec!["Codeforces", "ProjectEuler"]);
    assert_eq!(config.document, "docs/INDEX.md");
    assert!(config.debug_mode);
    // Untouched fields keep their defaults
    assert_eq!(config.languages.len(), 9);
    assert_eq!(config.ignored_extensions.len(), 5);
}

#[test]
fn test_language_table_override_keeps_order() {
    let (_temp_dir, base_dir) = create_test_config_dir();
    let manager = ConfigManager::new(&base_dir);

    let content = r#"
languages:
  ".kt": Kotlin
  ".go": Go
  ".hs": Haskell
"#;
    fs::write(manager.config_path(), content).unwrap();

    let config = manager.load_config().unwrap();
    let keys: Vec<&str> = config.languages.keys().map(String::as_str).collect();

    assert_eq!(keys, vec![".kt", ".go", ".hs"]);
    assert_eq!(config.language_for(".rs"), None);
}

#[test]
fn test_save_and_load_config() {
    let (_temp_dir, base_dir) = create_test_config_dir();
    let manager = ConfigManager::new(&base_dir);

    let mut config = manager.load_config().unwrap();
    config.ignored_extensions.push(".class".to_string());
    config.log_dir = Some("logs".to_string());

    manager.save_config(&config).unwrap();
    let loaded = manager.load_config().unwrap();

    assert_eq!(loaded, config);
    assert!(loaded.is_ignored(".class"));
}

#[test]
fn test_unknown_type_is_error() {
    let (_temp_dir, base_dir) = create_test_config_dir();
    let manager = ConfigManager::new(&base_dir);

    fs::write(manager.config_path(), "skip_hidden: sometimes\n").unwrap();

    let err = manager.load_config().unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config"));
}
