//! CLI configuration management
//!
//! The CLI reads a [`ClientConfig`] from `~/.vinculum/config.toml` (or an
//! explicit `--config` path) and applies command-line overrides on top.

use std::path::{Path, PathBuf};

use vinculum_client::ClientConfig;

use crate::CliError;

/// Values given on the command line; each replaces the file setting when present
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub rpc_url: Option<String>,
    pub explorer_url: Option<String>,
    pub explorer_api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Overrides {
    /// Apply onto a loaded configuration
    pub fn apply(&self, config: &mut ClientConfig) {
        if let Some(url) = &self.rpc_url {
            config.rpc_url = url.clone();
        }
        if let Some(url) = &self.explorer_url {
            config.explorer_url = url.clone();
        }
        if let Some(key) = &self.explorer_api_key {
            config.explorer_api_key = Some(key.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }
    }
}

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".vinculum"))
}

/// Get the default config file path
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration.
///
/// An explicit path must exist. The default path is optional; built-in
/// defaults are used when it is missing.
pub fn load(explicit: Option<&Path>) -> Result<ClientConfig, CliError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) if path.exists() => path,
            _ => {
                tracing::debug!("no config file, using defaults");
                return Ok(ClientConfig::default());
            }
        },
    };

    tracing::debug!(path = %path.display(), "loading config");
    ClientConfig::load_from(&path).map_err(|e| CliError::Config(e.to_string()))
}

/// Load configuration and apply command-line overrides on top
pub fn effective(explicit: Option<&Path>, overrides: &Overrides) -> Result<ClientConfig, CliError> {
    let mut config = load(explicit)?;
    overrides.apply(&mut config);
    Ok(config)
}

/// Write configuration, creating the parent directory if needed
pub fn save(config: &ClientConfig, path: &Path) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = config
        .to_toml_string()
        .map_err(|e| CliError::Config(e.to_string()))?;
    std::fs::write(path, content)?;
    Ok(())
}
