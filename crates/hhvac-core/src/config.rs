use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but cannot be parsed.
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
/// Returns `ConfigError` if a variable is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_positive_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        match parse_u32(var, default)? {
            0 => Err(invalid(var, "must be greater than zero".to_string())),
            n => Ok(n),
        }
    };

    let parse_positive_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        match or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))?
        {
            0 => Err(invalid(var, "must be greater than zero".to_string())),
            n => Ok(n),
        }
    };

    let request_timeout_secs = match lookup("HHVAC_REQUEST_TIMEOUT_SECS") {
        Ok(raw) => Some(
            raw.parse::<u64>()
                .map_err(|e| invalid("HHVAC_REQUEST_TIMEOUT_SECS", e.to_string()))?,
        ),
        Err(_) => None,
    };

    Ok(AppConfig {
        api_base_url: or_default("HHVAC_API_BASE_URL", "https://api.hh.ru/"),
        area: parse_u32("HHVAC_AREA", "113")?,
        user_agent: or_default("HHVAC_USER_AGENT", "hhvac/0.1 (vacancy-analytics)"),
        request_timeout_secs,
        target_accepted: parse_positive_usize("HHVAC_TARGET_ACCEPTED", "100")?,
        max_pages: parse_positive_u32("HHVAC_MAX_PAGES", "100")?,
        data_path: PathBuf::from(or_default("HHVAC_DATA_PATH", "./data/data.csv")),
        output_dir: PathBuf::from(or_default("HHVAC_OUTPUT_DIR", "./output")),
        log_level: or_default("HHVAC_LOG_LEVEL", "info"),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
