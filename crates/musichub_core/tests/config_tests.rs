use std::path::PathBuf;

use assert_matches::assert_matches;
use musichub_core::{Config, ConfigError};

#[test]
fn empty_config_uses_defaults() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
    assert!(config.session_path().ends_with("session.json"));
}

#[test]
fn config_keys_are_read() {
    let config = Config::from_toml_str(
        r#"
        data_dir = "/tmp/musichub-test"
        seed_catalog = "/tmp/songs.json"
        "#,
    )
    .unwrap();

    assert_eq!(config.data_dir(), PathBuf::from("/tmp/musichub-test"));
    assert_eq!(
        config.session_path(),
        PathBuf::from("/tmp/musichub-test/session.json")
    );
    assert_eq!(config.seed_catalog, Some(PathBuf::from("/tmp/songs.json")));
}

#[test]
fn malformed_config_is_an_error() {
    assert_matches!(
        Config::from_toml_str("data_dir = ["),
        Err(ConfigError::Toml(_))
    );
}

#[test]
fn missing_config_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_file_on_disk_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "data_dir = \"/srv/musichub\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.data_dir(), PathBuf::from("/srv/musichub"));
}

#[test]
fn data_dir_override_wins_unless_blank() {
    let config = Config {
        data_dir: Some(PathBuf::from("/from/file")),
        seed_catalog: None,
    };

    let overridden = config
        .clone()
        .with_data_dir_override(Some("/from/env".to_string()));
    assert_eq!(overridden.data_dir(), PathBuf::from("/from/env"));

    let blank = config.clone().with_data_dir_override(Some("  ".to_string()));
    assert_eq!(blank.data_dir(), PathBuf::from("/from/file"));

    let unset = config.with_data_dir_override(None);
    assert_eq!(unset.data_dir(), PathBuf::from("/from/file"));
}

#[test]
fn malformed_config_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "data_dir = [").unwrap();

    let config = Config::resolve(Some(path.as_path()), None);
    assert_eq!(config, Config::default());
}

#[test]
fn data_dir_override_applies_over_malformed_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "data_dir = [").unwrap();

    let config = Config::resolve(Some(path.as_path()), Some("/from/env".to_string()));
    assert_eq!(config.data_dir(), PathBuf::from("/from/env"));
    assert_eq!(config.seed_catalog, None);
}

#[test]
fn data_dir_override_applies_without_config_file() {
    let config = Config::resolve(None, Some("/from/env".to_string()));
    assert_eq!(config.data_dir(), PathBuf::from("/from/env"));
}
