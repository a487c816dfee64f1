//! Configuration round-trip tests.

use fitbuddy::storage::config::{load_config_from, save_config_to, AppConfig};
use fitbuddy::DuplicatePolicy;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config.duplicate_policy, DuplicatePolicy::PerRecord);
    assert_eq!(config.consistency_window_ms, 500);
}

#[test]
fn test_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = AppConfig {
        duplicate_policy: DuplicatePolicy::OncePerBadge,
        consistency_window_ms: 250,
        ..Default::default()
    };
    save_config_to(&config, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.duplicate_policy, DuplicatePolicy::OncePerBadge);
    assert_eq!(loaded.consistency_window_ms, 250);
}

#[test]
fn test_malformed_config_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "duplicate_policy = 42").unwrap();

    assert!(load_config_from(&path).is_err());
}
