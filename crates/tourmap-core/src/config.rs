use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_PHOTON_URL: &str = "https://photon.komoot.io/api/";
pub const DEFAULT_OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";
pub const DEFAULT_USER_AGENT: &str = "tourmap/0.1 (poi-discovery)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Parsing and validation over an arbitrary env-var lookup, so tests can feed
/// a `HashMap` instead of mutating the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let require_url = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Ok(raw)
        } else {
            Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected an http(s) URL, got \"{raw}\""),
            })
        }
    };

    let env = parse_environment(&or_default("TOURMAP_ENV", "development"));
    let log_level = or_default("TOURMAP_LOG_LEVEL", "info");

    let photon_url = require_url("TOURMAP_PHOTON_URL", DEFAULT_PHOTON_URL)?;
    let open_meteo_url = require_url("TOURMAP_OPEN_METEO_URL", DEFAULT_OPEN_METEO_URL)?;
    let translate_url = require_url("TOURMAP_TRANSLATE_URL", DEFAULT_TRANSLATE_URL)?;

    let request_timeout_secs = parse_u64("TOURMAP_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TOURMAP_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("TOURMAP_USER_AGENT", DEFAULT_USER_AGENT);
    let max_retries = parse_u32("TOURMAP_MAX_RETRIES", "2")?;
    let retry_backoff_base_ms = parse_u64("TOURMAP_RETRY_BACKOFF_BASE_MS", "500")?;

    Ok(AppConfig {
        env,
        log_level,
        photon_url,
        open_meteo_url,
        translate_url,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_ms,
    })
}

/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
