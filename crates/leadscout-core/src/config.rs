use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed. Every setting has a default; only the provider credential is
/// genuinely optional.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

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

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("LEADSCOUT_ENV", "development"));
    let bind_addr = parse_addr("LEADSCOUT_BIND_ADDR", "0.0.0.0:5000")?;
    let log_level = or_default("LEADSCOUT_LOG_LEVEL", "info");
    let places_api_key = lookup("GOOGLE_MAPS_API_KEY").ok().filter(|k| !k.is_empty());

    let places_timeout_secs = parse_u64("LEADSCOUT_PLACES_TIMEOUT_SECS", "10")?;
    let detector_timeout_secs = parse_u64("LEADSCOUT_DETECTOR_TIMEOUT_SECS", "5")?;
    let detector_user_agent = or_default(
        "LEADSCOUT_DETECTOR_USER_AGENT",
        "Mozilla/5.0 (compatible; leadscout/0.1)",
    );
    let no_website_delay_ms = parse_u64("LEADSCOUT_NO_WEBSITE_DELAY_MS", "100")?;
    let no_ecommerce_delay_ms = parse_u64("LEADSCOUT_NO_ECOMMERCE_DELAY_MS", "200")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        places_api_key,
        places_timeout_secs,
        detector_timeout_secs,
        detector_user_agent,
        no_website_delay_ms,
        no_ecommerce_delay_ms,
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

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:5000");
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.places_api_key.is_none());
        assert_eq!(cfg.places_timeout_secs, 10);
        assert_eq!(cfg.detector_timeout_secs, 5);
        assert_eq!(cfg.no_website_delay_ms, 100);
        assert_eq!(cfg.no_ecommerce_delay_ms, 200);
    }

    #[test]
    fn build_app_config_reads_api_key() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("GOOGLE_MAPS_API_KEY", "test-key");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.places_api_key.as_deref(), Some("test-key"));
    }

    #[test]
    fn build_app_config_treats_empty_api_key_as_absent() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("GOOGLE_MAPS_API_KEY", "");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.places_api_key.is_none());
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("LEADSCOUT_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LEADSCOUT_BIND_ADDR"),
            "expected InvalidEnvVar(LEADSCOUT_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_delay() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("LEADSCOUT_NO_WEBSITE_DELAY_MS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LEADSCOUT_NO_WEBSITE_DELAY_MS"),
            "expected InvalidEnvVar(LEADSCOUT_NO_WEBSITE_DELAY_MS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_overrides_delays() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("LEADSCOUT_NO_WEBSITE_DELAY_MS", "50");
        map.insert("LEADSCOUT_NO_ECOMMERCE_DELAY_MS", "300");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.no_website_delay_ms, 50);
        assert_eq!(cfg.no_ecommerce_delay_ms, 300);
    }
}
