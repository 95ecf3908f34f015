use thiserror::Error;

use crate::app_config::AppConfig;

/// Errors produced while loading [`AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value fails to parse.
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
/// Returns `ConfigError` if a configured value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
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

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    // An empty string is treated the same as unset so that `.env` templates
    // with blank placeholders do not enable a tier by accident.
    let kakao_api_key = lookup("ZEROMAP_KAKAO_API_KEY")
        .ok()
        .filter(|v| !v.is_empty());
    let relay_url = lookup("ZEROMAP_RELAY_URL").ok().filter(|v| !v.is_empty());

    let http_timeout_secs = parse_u64("ZEROMAP_HTTP_TIMEOUT_SECS", "10")?;
    let max_retries = parse_u32("ZEROMAP_MAX_RETRIES", "2")?;
    let retry_backoff_base_ms = parse_u64("ZEROMAP_RETRY_BACKOFF_BASE_MS", "500")?;

    let batch_concurrency = parse_usize("ZEROMAP_BATCH_CONCURRENCY", "1")?;
    if batch_concurrency == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "ZEROMAP_BATCH_CONCURRENCY".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let log_level = or_default("ZEROMAP_LOG_LEVEL", "info");

    Ok(AppConfig {
        kakao_api_key,
        relay_url,
        http_timeout_secs,
        max_retries,
        retry_backoff_base_ms,
        batch_concurrency,
        log_level,
    })
}
