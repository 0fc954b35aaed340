//! Where contract ABIs come from

use async_trait::async_trait;
use vinculum_abi::AbiCollection;
use vinculum_primitives::Address;

use crate::ClientError;

#[cfg(feature = "http")]
use crate::config::ClientConfig;
#[cfg(feature = "http")]
use vinculum_abi::ExplorerResponse;

/// Supplies the ABI of a deployed contract
#[async_trait]
pub trait AbiSource: Send + Sync {
    /// ABI entries published for `address`
    async fn contract_abi(&self, address: &Address) -> Result<AbiCollection, ClientError>;
}

/// A fixed ABI, e.g. loaded from a local JSON file, serves every address
#[async_trait]
impl AbiSource for AbiCollection {
    async fn contract_abi(&self, _address: &Address) -> Result<AbiCollection, ClientError> {
        Ok(self.clone())
    }
}

/// URL of an Etherscan-compatible `getabi` query
pub fn getabi_url(base_url: &str, address: &Address, api_key: &str) -> String {
    format!(
        "{}/api?module=contract&action=getabi&address={}&apikey={}",
        base_url.trim_end_matches('/'),
        address.to_hex(),
        api_key
    )
}

/// Fetches verified ABIs from an Etherscan-compatible explorer
#[cfg(feature = "http")]
pub struct ExplorerClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[cfg(feature = "http")]
impl ExplorerClient {
    /// Create an explorer client; `timeout` bounds each request
    pub fn new(
        base_url: &str,
        api_key: &str,
        timeout: std::time::Duration,
    ) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Create from configuration; the API key is required
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let api_key = config
            .explorer_api_key
            .as_deref()
            .ok_or_else(|| ClientError::Config("explorer_api_key is not set".to_string()))?;
        Self::new(&config.explorer_url, api_key, config.timeout())
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl AbiSource for ExplorerClient {
    async fn contract_abi(&self, address: &Address) -> Result<AbiCollection, ClientError> {
        let url = getabi_url(&self.base_url, address, &self.api_key);
        tracing::debug!(base = %self.base_url, %address, "fetching contract ABI");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Http(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let abi = ExplorerResponse::from_json(&body)?.into_collection()?;
        tracing::debug!(%address, entries = abi.len(), "contract ABI loaded");
        Ok(abi)
    }
}
