use thiserror::Error;

use crate::app_config::AppConfig;

/// Production catalog endpoint, used when `MOMOLLIE_CATALOG_URL` is unset.
pub const DEFAULT_CATALOG_URL: &str =
    "https://us-central1-momongo-a83ea.cloudfunctions.net/getPublicCatalog";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var has an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var has an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// The parsing/validation logic is decoupled from the real environment so
/// tests can drive it from a plain `HashMap` — no `set_var`/`remove_var`
/// needed.
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

    let bind_addr = parse_addr("MOMOLLIE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("MOMOLLIE_LOG_LEVEL", "info");
    let catalog_url = or_default("MOMOLLIE_CATALOG_URL", DEFAULT_CATALOG_URL);
    let shop_id = lookup("MOMOLLIE_SHOP_ID").ok().filter(|s| !s.is_empty());

    let catalog_timeout_secs = parse_u64("MOMOLLIE_CATALOG_TIMEOUT_SECS", "30")?;
    let catalog_user_agent = or_default(
        "MOMOLLIE_CATALOG_USER_AGENT",
        "momollie-storefront/0.1 (catalog-sync)",
    );
    let catalog_max_retries = parse_u32("MOMOLLIE_CATALOG_MAX_RETRIES", "2")?;
    let catalog_retry_backoff_base_secs =
        parse_u64("MOMOLLIE_CATALOG_RETRY_BACKOFF_BASE_SECS", "1")?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        catalog_url,
        shop_id,
        catalog_timeout_secs,
        catalog_user_agent,
        catalog_max_retries,
        catalog_retry_backoff_base_secs,
    })
}
