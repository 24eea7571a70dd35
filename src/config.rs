//! Configuration file support for mr-deps.
//!
//! Provides YAML-based configuration through `mr-deps.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line overrides.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "mr-deps.config.yml";

/// GitLab instance used when neither the config file nor the CLI names one.
pub const DEFAULT_BASE_URL: &str = "https://gitlab.com";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub sudo: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref base_url) = config.base_url {
        validate_base_url(base_url)?;
    }

    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: Omit timeout_secs to use the default of {} seconds.",
            DEFAULT_TIMEOUT_SECS
        );
    }
    Ok(())
}

fn validate_base_url(base_url: &str) -> Result<()> {
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        bail!(
            "Invalid config: base_url '{}' must start with http:// or https://.\n\n\
             💡 Hint: Use the address of your GitLab instance, e.g. \"https://gitlab.example.com\".",
            base_url
        );
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored.", key);
    }
}

/// Values given on the command line; each one wins over the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub sudo: Option<String>,
}

/// Effective settings after merging defaults, config file and CLI overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub token: Option<String>,
    pub sudo: Option<String>,
    pub timeout: Duration,
}

impl Settings {
    pub fn resolve(config: Option<ConfigFile>, overrides: Overrides) -> Result<Self> {
        let config = config.unwrap_or_default();

        let base_url = overrides
            .base_url
            .or(config.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        validate_base_url(&base_url)?;

        Ok(Self {
            base_url,
            token: overrides.token.or(config.token),
            sudo: overrides.sudo.or(config.sudo),
            timeout: Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        })
    }
}
