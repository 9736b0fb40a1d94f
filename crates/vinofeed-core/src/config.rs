//! Environment-driven configuration for the vinofeed binaries.

use std::env::VarError;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment, PageCountHeader};
use crate::ConfigError;

/// Reads `.env` (if present) and then builds an [`AppConfig`] from the
/// process environment.
///
/// # Errors
///
/// Returns [`ConfigError`] when a store credential is missing or a value
/// fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Same as [`load_app_config`] but never touches `.env`.
///
/// # Errors
///
/// See [`load_app_config`].
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

fn invalid(var: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar {
        var: var.to_owned(),
        reason: reason.to_string(),
    }
}

/// Core of the loaders; `lookup` stands in for `std::env::var` in tests.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    // Blank values count as unset for both required and optional vars.
    let get = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
    };
    let require = |var: &str| get(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_owned()));
    let get_or = |var: &str, fallback: &str| get(var).unwrap_or_else(|| fallback.to_owned());

    let store_url = require("STORE_URL")?;
    if !store_url.starts_with("https://") && !store_url.starts_with("http://") {
        return Err(invalid(
            "STORE_URL",
            format!("\"{store_url}\" is not an http(s) URL"),
        ));
    }
    let store_key = require("STORE_CK")?;
    let store_secret = require("STORE_CS")?;

    let env = get("VINOFEED_ENV").map_or(Environment::Development, |raw| parse_environment(&raw));
    let page_count_header = match get("VINOFEED_PAGE_COUNT_HEADER") {
        Some(raw) => parse_page_count_header(&raw)?,
        None => PageCountHeader::for_environment(env),
    };

    let bind_addr = get_or("VINOFEED_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("VINOFEED_BIND_ADDR", e))?;
    let request_timeout_secs = get_or("VINOFEED_REQUEST_TIMEOUT_SECS", "30")
        .parse::<u64>()
        .map_err(|e| invalid("VINOFEED_REQUEST_TIMEOUT_SECS", e))?;

    Ok(AppConfig {
        env,
        store_url: store_url.trim_end_matches('/').to_owned(),
        store_key,
        store_secret,
        store_api_version: get_or("STORE_API_VERSION", "wc/v3")
            .trim_matches('/')
            .to_owned(),
        page_count_header,
        storage_dir: PathBuf::from(get_or("VINOFEED_STORAGE_DIR", "./storage")),
        bind_addr,
        log_level: get_or("VINOFEED_LOG_LEVEL", "info"),
        request_timeout_secs,
        user_agent: get_or("VINOFEED_USER_AGENT", "vinofeed/0.1 (feed-generator)"),
        feed_schedule: get("VINOFEED_SCHEDULE"),
    })
}

/// `VINOFEED_ENV` value to [`Environment`]; anything unknown is development.
fn parse_environment(raw: &str) -> Environment {
    match raw {
        "local" => Environment::Local,
        "test" => Environment::Test,
        "production" => Environment::Production,
        _ => Environment::Development,
    }
}

fn parse_page_count_header(raw: &str) -> Result<PageCountHeader, ConfigError> {
    match raw {
        "legacy" => Ok(PageCountHeader::Legacy),
        "standard" => Ok(PageCountHeader::Standard),
        other => Err(invalid(
            "VINOFEED_PAGE_COUNT_HEADER",
            format!("expected \"legacy\" or \"standard\", got \"{other}\""),
        )),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
