//! Config module tests

use tempfile::TempDir;

use crate::config::Config;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "http://localhost:8080/api");
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.dashboard.user_id, 1);
}

#[test]
fn test_config_round_trips_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.api.base_url = "http://tracker.example.test/api".to_string();
    config.dashboard.user_id = 7;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.api.base_url, "http://tracker.example.test/api");
    assert_eq!(loaded.api.timeout_secs, 30);
    assert_eq!(loaded.dashboard.user_id, 7);
}

#[test]
fn test_load_from_rejects_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "not valid toml [").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_gateway_built_from_config() {
    let mut config = Config::default();
    config.api.base_url = "http://tracker.example.test/api/".to_string();

    let gateway = config.gateway().unwrap();
    assert_eq!(gateway.base_url(), "http://tracker.example.test/api");
}
