use url::Url;

use crate::app_config::{AppConfig, Environment};
use crate::contact::DEFAULT_CONTACT_BASE_URL;
use crate::ConfigError;

/// Public CSV export of the business catalog spreadsheet.
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/1owH6uqguBmgg61xGGw9ul_QTTYfox1ffsPEnvcUTtkE/export?format=csv&gid=0";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a working
/// development config pointed at the public catalog sheet.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_positive_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        match parse_u64(var, default)? {
            0 => Err(invalid(var, "must be greater than zero".to_string())),
            n => Ok(n),
        }
    };

    let parse_http_url = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        validate_http_url(&raw).map_err(|reason| invalid(var, reason))?;
        Ok(raw)
    };

    let env = parse_environment(&or_default("STOREFRONT_ENV", "development"))?;
    let bind_addr = parse_addr("STOREFRONT_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("STOREFRONT_LOG_LEVEL", "info");

    let sheet_url = parse_http_url("STOREFRONT_SHEET_URL", DEFAULT_SHEET_URL)?;
    let refresh_interval_secs = parse_positive_u64("STOREFRONT_REFRESH_INTERVAL_SECS", "120")?;
    let fetch_timeout_secs = parse_positive_u64("STOREFRONT_FETCH_TIMEOUT_SECS", "30")?;
    let fetch_max_retries = parse_u32("STOREFRONT_FETCH_MAX_RETRIES", "2")?;
    let fetch_backoff_base_secs = parse_u64("STOREFRONT_FETCH_BACKOFF_BASE_SECS", "2")?;
    let user_agent = or_default("STOREFRONT_USER_AGENT", "storefront/0.1 (catalog-sync)");
    let contact_base_url = parse_http_url("STOREFRONT_CONTACT_BASE_URL", DEFAULT_CONTACT_BASE_URL)?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        sheet_url,
        refresh_interval_secs,
        fetch_timeout_secs,
        fetch_max_retries,
        fetch_backoff_base_secs,
        user_agent,
        contact_base_url,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "STOREFRONT_ENV".to_string(),
            reason: format!("expected development, test or production; got \"{other}\""),
        }),
    }
}

/// Checks for an absolute `http(s)://host...` URL.
fn validate_http_url(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| format!("\"{raw}\" is not a valid URL: {e}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("\"{raw}\" is not an http(s) URL"));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(format!("\"{raw}\" has no host"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
