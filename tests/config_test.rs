///! Startup configuration parsing, driven by a map instead of the process
///! environment.
///!
///! Run with: `cargo test --test config_test`
use std::collections::HashMap;

use yatra_backend::config::{AppConfig, ConfigError};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

const REQUIRED: &[(&str, &str)] = &[
    ("DATABASE_URL", "postgres://localhost/yatra"),
    ("REDIS_URL", "redis://127.0.0.1/"),
    ("JWT_SECRET", "local-dev-secret"),
];

fn with(extra: &[(&'static str, &'static str)]) -> Vec<(&'static str, &'static str)> {
    let mut pairs = REQUIRED.to_vec();
    pairs.extend_from_slice(extra);
    pairs
}

#[test]
fn test_defaults_apply() {
    let config = AppConfig::from_lookup(lookup(REQUIRED)).unwrap();

    assert_eq!(config.port, 8080);
    assert_eq!(config.jwt_ttl_secs, 7 * 24 * 3600);
    assert!(config.run_migrations);
    assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    assert_eq!(config.database_url, "postgres://localhost/yatra");
}

#[test]
fn test_overrides_are_read() {
    let pairs = with(&[("PORT", "5000"), ("JWT_TTL_SECS", "60"), ("RUN_MIGRATIONS", "false")]);
    let config = AppConfig::from_lookup(lookup(&pairs)).unwrap();

    assert_eq!(config.port, 5000);
    assert_eq!(config.jwt_ttl_secs, 60);
    assert!(!config.run_migrations);
}

#[test]
fn test_missing_required_key() {
    let err = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://x")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("REDIS_URL"));
}

#[test]
fn test_blank_required_key_counts_as_missing() {
    let pairs = [
        ("DATABASE_URL", "postgres://localhost/yatra"),
        ("REDIS_URL", "redis://127.0.0.1/"),
        ("JWT_SECRET", "   "),
    ];
    let err = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();
    assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
}

#[test]
fn test_malformed_port_is_an_error() {
    let pairs = with(&[("PORT", "abc")]);
    let err = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();

    assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    assert!(err.to_string().contains("abc"));
}
