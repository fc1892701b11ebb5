//! Client configuration
//!
//! The SGS base URL lives in configuration rather than process-wide mutable
//! state. Values come from an optional TOML file under the user's config
//! directory; the CLI can override the base URL per invocation.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// SGS series 11: daily Selic rate.
pub const DEFAULT_BASE_URL: &str = "https://api.bcb.gov.br/dados/serie/bcdata.sgs.11/dados";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the SGS client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SgsConfig {
    /// Base URL of the SGS time-series endpoint
    pub base_url: String,

    /// Timeout applied to each outbound fetch, in seconds
    pub timeout_secs: u64,

    /// Skip TLS certificate verification toward the SGS endpoint.
    /// Off unless explicitly enabled in the config file.
    pub danger_accept_invalid_certs: bool,
}

impl Default for SgsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            danger_accept_invalid_certs: false,
        }
    }
}

impl SgsConfig {
    /// Load configuration from `config.toml` in the selic config directory,
    /// falling back to defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        match config_file_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                let config: SgsConfig = toml::from_str(&content)
                    .with_context(|| format!("Invalid config file {}", path.display()))?;
                Ok(config)
            }
            _ => Ok(Self::default()),
        }
    }
}

fn config_file_path() -> Option<PathBuf> {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dir_spec::config_home)?;
    Some(config_dir.join("selic").join("config.toml"))
}
