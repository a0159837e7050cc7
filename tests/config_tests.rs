use challenge_core::{
    cli::output::OutputPreferences,
    config::{Config, ConfigManager},
};
use tempfile::tempdir;

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path());

    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, Config::default());
    assert!(loaded.ui_color_enabled);
    assert!(loaded.history_enabled);
    assert!(!manager.config_path().exists());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path());

    let mut cfg = Config::default();
    cfg.ui_color_enabled = false;
    cfg.accessibility.high_contrast = true;

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(manager.config_path().exists());
}

#[test]
fn partial_file_fills_missing_fields() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "accessibility": { "plain_output": true } }"#).unwrap();

    let loaded = ConfigManager::new(path).load().expect("load config");

    assert!(loaded.ui_color_enabled);
    assert!(loaded.accessibility.plain_output);
    assert!(OutputPreferences::from_config(&loaded).plain_output);
}

#[test]
fn corrupt_file_is_reported() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(ConfigManager::new(path).load().is_err());
}
