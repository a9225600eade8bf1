//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `GAGSO_API_BASE_URL` is absent, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `GAGSO_API_BASE_URL`: Schedule service base URL (required)
//! - `GAGSO_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `GAGSO_API_MAX_ATTEMPTS`: Attempts per request (1 disables retries)
//! - `GAGSO_EMPLOYEE_FALLBACK`: Serve the built-in employee list on failure
//! - `GAGSO_EMPLOYEE_ID`: Signed-in employee
//! - `GAGSO_ROLE`: `EMPLOYEE` or `ADMINISTRATOR`
//! - `GAGSO_LOG_LEVEL`: Default log filter
//! - `GAGSO_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes `config.{json,toml}` and `gagso.{json,toml}` in the
//! current working directory, its two parents, and next to the executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use gagso_domain::{ApiConfig, Config, GagsoError, LoggingConfig, Result, Role, SessionConfig};

use crate::api::parse_base_url;

const CONFIG_FILE_NAMES: [&str; 4] = ["config.json", "config.toml", "gagso.json", "gagso.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the base URL is
/// not set there, falls back to a config file.
///
/// # Errors
/// Returns `GagsoError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - The base URL is not an absolute http(s) URL
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Only `GAGSO_API_BASE_URL` is required; every other variable falls back
/// to its default.
///
/// # Errors
/// Returns `GagsoError::Config` if the base URL is missing or any value is
/// malformed.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("GAGSO_API_BASE_URL")?;
    let defaults = ApiConfig::default();

    let timeout_secs = env_parse("GAGSO_API_TIMEOUT_SECS", defaults.timeout_secs)?;
    let max_attempts = env_parse("GAGSO_API_MAX_ATTEMPTS", defaults.max_attempts)?;
    let employee_fallback = env_bool("GAGSO_EMPLOYEE_FALLBACK", defaults.employee_fallback);

    let employee_id = std::env::var("GAGSO_EMPLOYEE_ID").ok().filter(|id| !id.trim().is_empty());
    let role = match std::env::var("GAGSO_ROLE") {
        Ok(raw) => Role::from_str(&raw).map_err(GagsoError::Config)?,
        Err(_) => Role::default(),
    };

    let logging = LoggingConfig {
        level: std::env::var("GAGSO_LOG_LEVEL").unwrap_or_else(|_| LoggingConfig::default().level),
        json: env_bool("GAGSO_LOG_JSON", false),
    };

    let config = Config {
        api: ApiConfig { base_url, timeout_secs, max_attempts, employee_fallback },
        session: SessionConfig { employee_id, role },
        logging,
    };
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `GagsoError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The base URL is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(GagsoError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            GagsoError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| GagsoError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| GagsoError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| GagsoError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(GagsoError::Config(format!("Unsupported config format: {}", extension))),
    }
}

fn validate(config: &Config) -> Result<()> {
    parse_base_url(&config.api.base_url).map_err(GagsoError::from)?;
    if config.api.timeout_secs == 0 {
        return Err(GagsoError::Config("API timeout must be at least one second".to_string()));
    }
    if config.api.max_attempts == 0 {
        return Err(GagsoError::Config("API max_attempts must be at least 1".to_string()));
    }
    Ok(())
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend(cwd.ancestors().take(3).map(Path::to_path_buf));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `GagsoError::Config` if the variable is not set or blank.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| GagsoError::Config(format!("Missing required environment variable: {}", key)))
}

/// Parse an optional numeric environment variable, keeping `default` when unset.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| GagsoError::Config(format!("Invalid {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
