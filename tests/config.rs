//! Configuration tests - config paths and grid config persistence

use slicegrid::config::GridConfig;
use slicegrid::config_paths;

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("slicegrid"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_under_config_dir() {
    if let (Some(logs), Some(dir)) = (config_paths::logs_dir(), config_paths::config_dir()) {
        assert!(logs.starts_with(dir));
    }
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let config = GridConfig {
        max_visible_rows: 40,
        max_visible_cols: 8,
        scroll_step: 5,
        wheel_step: 2,
    };
    config.save_to(&path).unwrap();
    assert_eq!(GridConfig::load_from(&path), config);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = GridConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(loaded, GridConfig::default());
}

#[test]
fn test_unparsable_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "max_visible_rows: [not a number").unwrap();
    assert_eq!(GridConfig::load_from(&path), GridConfig::default());
}
