//! Tests for client configuration loading.

use std::io::Write;
use tempfile::NamedTempFile;
use ttt_client::{API_URL_ENV, ClientConfig, DEFAULT_API_URL, DEFAULT_PLAYER_ID, PLAYER_ID_ENV};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write config");
    file
}

#[test]
fn test_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.api_base_url(), DEFAULT_API_URL);
    assert_eq!(config.player_id(), DEFAULT_PLAYER_ID);
}

#[test]
fn test_from_file() {
    let file = write_config(
        r#"
api_base_url = "http://games.local:8080"
player_id = "alice"
"#,
    );
    let config = ClientConfig::from_file(file.path()).expect("Load failed");
    assert_eq!(config.api_base_url(), "http://games.local:8080");
    assert_eq!(config.player_id(), "alice");
}

#[test]
fn test_from_file_fills_missing_keys() {
    let file = write_config(r#"player_id = "bob""#);
    let config = ClientConfig::from_file(file.path()).expect("Load failed");
    assert_eq!(config.api_base_url(), DEFAULT_API_URL);
    assert_eq!(config.player_id(), "bob");
}

#[test]
fn test_from_file_rejects_bad_toml() {
    let file = write_config("api_base_url = ");
    let err = ClientConfig::from_file(file.path()).expect_err("Bad TOML should fail");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_from_missing_file() {
    let err = ClientConfig::from_file("/nonexistent/ttt_client.toml").expect_err("Should fail");
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_environment_overrides() {
    let config = ClientConfig::default()
        .with_lookup(|key| match key {
            k if k == API_URL_ENV => Some("http://env.local".to_string()),
            k if k == PLAYER_ID_ENV => Some("carol".to_string()),
            _ => None,
        })
        .expect("Overrides failed");
    assert_eq!(config.api_base_url(), "http://env.local");
    assert_eq!(config.player_id(), "carol");
}

#[test]
fn test_empty_environment_value_rejected() {
    let result = ClientConfig::default().with_lookup(|key| {
        (key == API_URL_ENV).then(String::new)
    });
    assert!(result.is_err());
}

#[test]
fn test_explicit_overrides() {
    let config = ClientConfig::default()
        .with_api_base_url("http://cli.local")
        .with_player_id("dave");
    assert_eq!(
        config,
        ClientConfig::new("http://cli.local".to_string(), "dave".to_string())
    );
}
