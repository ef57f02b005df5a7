//! Configuration file loading with precedence handling.

use crate::config::ReportFormat;
use crate::model::PageSize;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Default artworks collection endpoint.
pub const DEFAULT_API_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "PAGESEL_CONFIG";
/// Environment variable overriding rows per page.
pub const ENV_PAGE_SIZE: &str = "PAGESEL_PAGE_SIZE";
/// Environment variable overriding the API endpoint.
pub const ENV_API_URL: &str = "PAGESEL_API_URL";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting parsed but holds an unusable value.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Setting name (config key or environment variable).
        key: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/pagesel/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Rows per page.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Collection endpoint for HTTP page fetches.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Report output format.
    #[serde(default)]
    pub report_format: Option<ReportFormat>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Rows per page.
    pub page_size: PageSize,
    /// Collection endpoint.
    pub api_url: String,
    /// Report output format.
    pub report_format: ReportFormat,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            api_url: DEFAULT_API_URL.to_string(),
            report_format: ReportFormat::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/pagesel/pagesel.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("pagesel").join("pagesel.log")
    } else {
        PathBuf::from("pagesel.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/pagesel/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pagesel").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PAGESEL_CONFIG` environment variable
/// 3. Default path `~/.config/pagesel/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

fn page_size_setting(key: &str, raw: usize) -> Result<PageSize, ConfigError> {
    PageSize::new(raw).map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if `page_size` is zero.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let page_size = match config.page_size {
        Some(raw) => page_size_setting("page_size", raw)?,
        None => defaults.page_size,
    };

    Ok(ResolvedConfig {
        page_size,
        api_url: config.api_url.unwrap_or(defaults.api_url),
        report_format: config.report_format.unwrap_or(defaults.report_format),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `PAGESEL_PAGE_SIZE`: Override rows per page
/// - `PAGESEL_API_URL`: Override collection endpoint
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if `PAGESEL_PAGE_SIZE` is not a positive integer.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(ENV_PAGE_SIZE) {
        let parsed: usize = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: ENV_PAGE_SIZE.to_string(),
            reason: format!("'{raw}' is not a positive integer"),
        })?;
        config.page_size = page_size_setting(ENV_PAGE_SIZE, parsed)?;
    }

    if let Ok(url) = std::env::var(ENV_API_URL) {
        config.api_url = url;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    page_size_override: Option<PageSize>,
    api_url_override: Option<String>,
    format_override: Option<ReportFormat>,
) -> ResolvedConfig {
    if let Some(page_size) = page_size_override {
        config.page_size = page_size;
    }

    if let Some(url) = api_url_override {
        config.api_url = url;
    }

    if let Some(format) = format_override {
        config.report_format = format;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
