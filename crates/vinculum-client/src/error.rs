//! Client error types

use thiserror::Error;
use vinculum_abi::AbiError;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Resolving, encoding or decoding failed
    #[error(transparent)]
    Abi(#[from] AbiError),

    /// Transport/network error
    #[error("Transport error: {0}")]
    Transport(String),

    /// RPC error from node
    #[error("RPC error: {code} - {message}")]
    Rpc {
        /// Error code
        code: i64,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("unexpected HTTP status: {0}")]
    Http(u16),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Serialization(e.to_string())
    }
}
