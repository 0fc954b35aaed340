//! CLI error types

use thiserror::Error;
use vinculum_abi::AbiError;
use vinculum_client::ClientError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid address format
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// `--arg` value that does not parse as the declared input type
    #[error("Invalid value for argument '{name}' ({expected}): {value}")]
    InvalidArgument {
        name: String,
        expected: String,
        value: String,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// ABI engine error
    #[error(transparent)]
    Abi(#[from] AbiError),

    /// RPC or explorer error
    #[error(transparent)]
    Client(#[from] ClientError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config error
    #[error("Config error: {0}")]
    Config(String),
}
