//! ABI error types

use thiserror::Error;
use vinculum_primitives::U256;

use crate::model::EntryKind;

/// Error raised while resolving, encoding or decoding a contract call.
///
/// Every variant is terminal for the call in progress; nothing is retried
/// and no partial output is produced.
#[derive(Debug, Error)]
pub enum AbiError {
    /// Selector requested for an entry that is not a named function
    #[error("selector is undefined for {kind} entry {name:?}")]
    InvalidEntryKind {
        /// Entry name (may be empty)
        name: String,
        /// Declared entry kind
        kind: EntryKind,
    },

    /// Supplied argument names do not match the declared inputs
    #[error(
        "argument mismatch: expected {expected} arguments, got {got} \
         (missing: {missing:?}, unexpected: {unexpected:?})"
    )]
    ArgumentCountMismatch {
        /// Number of declared inputs
        expected: usize,
        /// Number of supplied arguments
        got: usize,
        /// Declared inputs with no supplied value
        missing: Vec<String>,
        /// Supplied keys that match no declared input
        unexpected: Vec<String>,
    },

    /// Argument value kind does not fit the declared type
    #[error("invalid value for argument {name:?}: expected {expected}, got {got}")]
    ArgumentTypeMismatch {
        /// Parameter name
        name: String,
        /// Declared type tag
        expected: String,
        /// Description of the supplied value
        got: String,
    },

    /// Declared type is outside the supported set
    #[error("unsupported type {tag:?} for parameter {name:?}")]
    UnsupportedType {
        /// Parameter name (empty for anonymous outputs)
        name: String,
        /// Declared type tag
        tag: String,
    },

    /// Decoding requires exactly one declared output
    #[error("function {function:?} declares {count} outputs, only single-output decoding is supported")]
    UnsupportedOutputArity {
        /// Function name
        function: String,
        /// Number of declared outputs
        count: usize,
    },

    /// Integer does not fit the declared bit width
    #[error("value {value} of {name:?} does not fit in uint{bits}")]
    IntegerOverflow {
        /// Parameter name
        name: String,
        /// Declared bit width
        bits: usize,
        /// Offending value
        value: U256,
    },

    /// Return payload is malformed or too short
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// No entry matched the requested name or signature
    #[error("no ABI entry named {0:?}")]
    EntryNotFound(String),

    /// Name lookup matched several overloads
    #[error("function name {name:?} is overloaded: {candidates:?}")]
    AmbiguousFunction {
        /// Requested name
        name: String,
        /// Canonical signatures of the matching functions
        candidates: Vec<String>,
    },

    /// Block explorer reported a failure instead of an ABI
    #[error("explorer error: {0}")]
    Explorer(String),

    /// ABI JSON could not be parsed
    #[error("ABI JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AbiError {
    pub(crate) fn unsupported(name: &str, tag: impl Into<String>) -> Self {
        AbiError::UnsupportedType {
            name: name.to_string(),
            tag: tag.into(),
        }
    }
}
