use thiserror::Error;

use crate::app_config::{AppConfig, Environment};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files; useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup, no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
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

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let ai_base_url = require("SKYSEARCH_AI_BASE_URL")?;
    let ai_api_key = lookup("SKYSEARCH_AI_API_KEY").ok();

    let env = parse_environment(&or_default("SKYSEARCH_ENV", "development"));
    let bind_addr = parse_addr("SKYSEARCH_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("SKYSEARCH_LOG_LEVEL", "info");

    let ai_timeout_secs = parse_u64("SKYSEARCH_AI_TIMEOUT_SECS", "30")?;
    let ai_max_attempts = parse_u32("SKYSEARCH_AI_MAX_ATTEMPTS", "3")?;
    let geo_timeout_secs = parse_u64("SKYSEARCH_GEO_TIMEOUT_SECS", "10")?;
    let geo_cache_secs = parse_u64("SKYSEARCH_GEO_CACHE_SECS", "300")?;
    let airport_radius_km = parse_f64("SKYSEARCH_AIRPORT_RADIUS_KM", "150")?;
    let user_agent = or_default("SKYSEARCH_USER_AGENT", "skysearch/0.1 (flight-search)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        ai_base_url,
        ai_api_key,
        ai_timeout_secs,
        ai_max_attempts,
        geo_timeout_secs,
        geo_cache_secs,
        airport_radius_km,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
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

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("SKYSEARCH_AI_BASE_URL", "https://api.skysearch.test");
        m
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn build_app_config_fails_without_ai_base_url() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SKYSEARCH_AI_BASE_URL"),
            "expected MissingEnvVar(SKYSEARCH_AI_BASE_URL), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_defaults() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.ai_base_url, "https://api.skysearch.test");
        assert!(cfg.ai_api_key.is_none());
        assert_eq!(cfg.ai_timeout_secs, 30);
        assert_eq!(cfg.ai_max_attempts, 3);
        assert_eq!(cfg.geo_timeout_secs, 10);
        assert_eq!(cfg.geo_cache_secs, 300);
        assert!((cfg.airport_radius_km - 150.0).abs() < f64::EPSILON);
        assert_eq!(cfg.user_agent, "skysearch/0.1 (flight-search)");
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map = full_env();
        map.insert("SKYSEARCH_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SKYSEARCH_BIND_ADDR"),
            "expected InvalidEnvVar(SKYSEARCH_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_overrides_retry_budget() {
        let mut map = full_env();
        map.insert("SKYSEARCH_AI_MAX_ATTEMPTS", "5");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
        assert_eq!(cfg.ai_max_attempts, 5);
    }

    #[test]
    fn build_app_config_fails_with_invalid_radius() {
        let mut map = full_env();
        map.insert("SKYSEARCH_AIRPORT_RADIUS_KM", "wide");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SKYSEARCH_AIRPORT_RADIUS_KM"),
            "expected InvalidEnvVar(SKYSEARCH_AIRPORT_RADIUS_KM), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_picks_up_api_key() {
        let mut map = full_env();
        map.insert("SKYSEARCH_AI_API_KEY", "secret-token");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
        assert_eq!(cfg.ai_api_key.as_deref(), Some("secret-token"));
        let debug = format!("{cfg:?}");
        assert!(
            !debug.contains("secret-token"),
            "api key must be redacted from Debug output: {debug}"
        );
    }
}
