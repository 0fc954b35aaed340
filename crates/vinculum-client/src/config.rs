//! Client configuration

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ClientError;

/// Endpoints and call defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// JSON-RPC endpoint URL
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// Etherscan-compatible explorer API base URL
    #[serde(default = "default_explorer_url")]
    pub explorer_url: String,
    /// Explorer API key
    #[serde(default)]
    pub explorer_api_key: Option<String>,
    /// Block tag passed to `eth_call`
    #[serde(default = "default_block_tag")]
    pub block_tag: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_rpc_url() -> String {
    "http://localhost:8545".to_string()
}

fn default_explorer_url() -> String {
    "https://api.etherscan.io".to_string()
}

fn default_block_tag() -> String {
    "latest".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            explorer_url: default_explorer_url(),
            explorer_api_key: None,
            block_tag: default_block_tag(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ClientError> {
        let config: Self = toml::from_str(content).map_err(|e| ClientError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from(path: &Path) -> Result<Self, ClientError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String, ClientError> {
        toml::to_string_pretty(self).map_err(|e| ClientError::Config(e.to_string()))
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> Result<(), ClientError> {
        if self.rpc_url.is_empty() {
            return Err(ClientError::Config("rpc_url must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ClientError::Config("timeout_secs must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(config.block_tag, "latest");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.explorer_api_key.is_none());
    }

    #[test]
    fn test_config_partial_toml() {
        let config = ClientConfig::from_toml_str(
            r#"
            rpc_url = "https://polygon-rpc.com"
            explorer_url = "https://api.polygonscan.com"
            explorer_api_key = "DUMMY_API_KEY"
        "#,
        )
        .unwrap();
        assert_eq!(config.rpc_url, "https://polygon-rpc.com");
        assert_eq!(config.explorer_api_key.as_deref(), Some("DUMMY_API_KEY"));
        assert_eq!(config.block_tag, "latest");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_rejects_zero_timeout() {
        let result = ClientConfig::from_toml_str("timeout_secs = 0");
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn test_config_rejects_bad_toml() {
        assert!(ClientConfig::from_toml_str("rpc_url = ").is_err());
    }

    #[test]
    fn test_config_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = ClientConfig {
            block_tag: "0x10".to_string(),
            ..ClientConfig::default()
        };
        std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();

        assert_eq!(ClientConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_config_missing_file() {
        let result = ClientConfig::load_from(Path::new("/nonexistent/vinculum.toml"));
        assert!(matches!(result, Err(ClientError::Config(_))));
    }
}
