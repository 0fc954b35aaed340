//! ContractReader - read-only contract calls over JSON-RPC

use serde_json::Value;
use vinculum_abi::{
    decode_result, encode_call, AbiEntry, AbiError, Arguments, CallData, DecodedValue,
};
use vinculum_primitives::Address;

use crate::source::AbiSource;
use crate::transport::{deserialize_response, Transport};
use crate::ClientError;

#[cfg(feature = "http")]
use crate::{config::ClientConfig, transport::HttpTransport};

/// Executes `eth_call` for ABI entries and decodes the single return value
pub struct ContractReader {
    transport: Box<dyn Transport>,
    block_tag: String,
}

impl ContractReader {
    /// Create a reader with HTTP transport from configuration
    #[cfg(feature = "http")]
    pub fn connect(config: &ClientConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(&config.rpc_url, config.timeout())?;
        Ok(Self {
            transport: Box::new(transport),
            block_tag: config.block_tag.clone(),
        })
    }

    /// Create a reader with a custom transport, querying the `latest` block
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
            block_tag: "latest".to_string(),
        }
    }

    /// Query a different block tag (`latest`, `pending`, or a hex number)
    pub fn at_block(mut self, block_tag: impl Into<String>) -> Self {
        self.block_tag = block_tag.into();
        self
    }

    /// Block tag used for calls
    pub fn block_tag(&self) -> &str {
        &self.block_tag
    }

    /// Send prepared call data and return the raw hex result
    pub async fn call(&self, to: &Address, data: &CallData) -> Result<String, ClientError> {
        let params = vec![
            serde_json::json!({
                "to": to.to_hex(),
                "data": data.to_hex(),
            }),
            Value::String(self.block_tag.clone()),
        ];
        let value = self.transport.request_json("eth_call", params).await?;
        deserialize_response(value)
    }

    /// Encode `args` for `entry`, call `to`, and decode the result.
    ///
    /// Argument and output-arity errors are reported before any request is sent.
    pub async fn read_contract(
        &self,
        to: &Address,
        entry: &AbiEntry,
        args: &Arguments,
    ) -> Result<DecodedValue, ClientError> {
        let data = encode_call(entry, args)?;
        if entry.outputs.len() != 1 {
            return Err(AbiError::UnsupportedOutputArity {
                function: entry.name.clone(),
                count: entry.outputs.len(),
            }
            .into());
        }
        if !entry.is_read_only() {
            tracing::warn!(
                function = %entry.name,
                "calling state-changing function through eth_call; effects are discarded"
            );
        }
        tracing::debug!(
            contract = %to,
            function = %entry.name,
            selector = %hex_selector(&data),
            block = %self.block_tag,
            "reading contract"
        );

        let result = self.call(to, &data).await?;
        tracing::trace!(result = %result, "eth_call returned");

        Ok(decode_result(entry, &result)?)
    }

    /// Fetch the contract ABI from `source`, resolve `function`, and read it.
    ///
    /// `function` is a bare name or a full signature.
    pub async fn read_with_source(
        &self,
        source: &dyn AbiSource,
        to: &Address,
        function: &str,
        args: &Arguments,
    ) -> Result<DecodedValue, ClientError> {
        let abi = source.contract_abi(to).await?;
        let entry = abi.resolve(function)?;
        self.read_contract(to, entry, args).await
    }
}

fn hex_selector(data: &CallData) -> String {
    hex::encode(data.selector())
}
