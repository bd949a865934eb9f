use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if `DOTPE_API_BASE_URL` is not an http(s) URL.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if `DOTPE_API_BASE_URL` is not an http(s) URL.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let log_level = or_default("DOTPE_LOG_LEVEL", "info");

    let api_base_url = or_default("DOTPE_API_BASE_URL", "https://api.dotpe.in");
    if !(api_base_url.starts_with("https://") || api_base_url.starts_with("http://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "DOTPE_API_BASE_URL".to_string(),
            reason: format!("'{api_base_url}' must start with http:// or https://"),
        });
    }

    let headers_path = PathBuf::from(or_default("DOTPE_HEADERS_PATH", "./config/headers.yaml"));
    let output_path = PathBuf::from(or_default("DOTPE_OUTPUT_PATH", "store_ongoing_items.json"));

    Ok(AppConfig {
        log_level,
        api_base_url,
        headers_path,
        output_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
