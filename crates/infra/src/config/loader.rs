//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. Only if the token is not set there, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `CZDS_ACCESS_TOKEN`: Bearer token for portal calls (required)
//! - `CZDS_BASE_URL`: API base URL
//! - `CZDS_TIMEOUT_SECS`: Per-call timeout in seconds
//! - `CZDS_USER_AGENT`: User agent sent with each call
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./czds.json` or `./czds.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use czds_domain::{ApiConfig, AuthConfig, CzdsConfig, CzdsError, Result};

const CONFIG_FILE_NAMES: [&str; 4] = ["czds.json", "czds.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// Uses environment variables when `CZDS_ACCESS_TOKEN` is set, otherwise
/// falls back to a config file. Invalid environment values are reported as
/// such rather than hidden behind the file fallback.
///
/// # Errors
/// Returns `CzdsError::Config` if:
/// - An environment value is invalid
/// - No token is set and no usable config file is found
/// - File format is invalid
/// - The loaded values do not validate
pub fn load() -> Result<CzdsConfig> {
    if std::env::var_os("CZDS_ACCESS_TOKEN").is_none() {
        tracing::debug!("CZDS_ACCESS_TOKEN not set, trying file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// Only the access token is required; everything else falls back to the
/// defaults.
///
/// # Errors
/// Returns `CzdsError::Config` if the token is missing or a value is invalid.
pub fn load_from_env() -> Result<CzdsConfig> {
    let access_token = env_var("CZDS_ACCESS_TOKEN")?;

    let mut api = ApiConfig::default();
    if let Some(base_url) = env_opt("CZDS_BASE_URL") {
        api.base_url = base_url;
    }
    if let Some(timeout) = env_opt("CZDS_TIMEOUT_SECS") {
        api.timeout_seconds = timeout
            .parse::<u64>()
            .map_err(|e| CzdsError::Config(format!("Invalid timeout: {}", e)))?;
    }
    api.user_agent = env_opt("CZDS_USER_AGENT");

    let config = CzdsConfig { api, auth: AuthConfig { access_token } };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `CzdsError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid or values do not validate
pub fn load_from_file(path: Option<PathBuf>) -> Result<CzdsConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CzdsError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            CzdsError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CzdsError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<CzdsConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| CzdsError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CzdsError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(CzdsError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a configuration file
///
/// Checks the current working directory first, then the directory holding
/// the executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `CzdsError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| CzdsError::Config(format!("Missing required environment variable: {}", key)))
}

/// Optional environment variable; blank values count as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
