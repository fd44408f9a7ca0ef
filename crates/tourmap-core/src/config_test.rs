use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(parse_environment("development"), Environment::Development);
    assert_eq!(parse_environment("test"), Environment::Test);
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn empty_env_yields_defaults() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.photon_url, DEFAULT_PHOTON_URL);
    assert_eq!(cfg.open_meteo_url, DEFAULT_OPEN_METEO_URL);
    assert_eq!(cfg.translate_url, DEFAULT_TRANSLATE_URL);
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(cfg.max_retries, 2);
    assert_eq!(cfg.retry_backoff_base_ms, 500);
}

#[test]
fn overrides_are_applied() {
    let mut map = HashMap::new();
    map.insert("TOURMAP_ENV", "production");
    map.insert("TOURMAP_PHOTON_URL", "http://localhost:2322/api");
    map.insert("TOURMAP_REQUEST_TIMEOUT_SECS", "3");
    map.insert("TOURMAP_MAX_RETRIES", "0");
    map.insert("TOURMAP_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.photon_url, "http://localhost:2322/api");
    assert_eq!(cfg.request_timeout_secs, 3);
    assert_eq!(cfg.max_retries, 0);
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}

#[test]
fn invalid_timeout_is_rejected() {
    let mut map = HashMap::new();
    map.insert("TOURMAP_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TOURMAP_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(TOURMAP_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn zero_timeout_is_rejected() {
    let mut map = HashMap::new();
    map.insert("TOURMAP_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn negative_retries_are_rejected() {
    let mut map = HashMap::new();
    map.insert("TOURMAP_MAX_RETRIES", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TOURMAP_MAX_RETRIES"),
        "got: {result:?}"
    );
}

#[test]
fn non_http_photon_url_is_rejected() {
    let mut map = HashMap::new();
    map.insert("TOURMAP_PHOTON_URL", "photon.komoot.io/api");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TOURMAP_PHOTON_URL"),
        "got: {result:?}"
    );
}
