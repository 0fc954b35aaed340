//! # vinculum-abi
//!
//! Solidity ABI support for read-only contract calls.
//!
//! This crate provides functionality for:
//! - Parsing contract ABI documents into [`AbiCollection`]
//! - Computing function selectors
//! - Encoding named arguments into call data
//! - Decoding a single return value
//!
//! Supported types are `address`, `uint<N>`, `bool` and `string`. Tuples,
//! arrays and `bytes` are rejected with [`AbiError::UnsupportedType`].
//!
//! # Example
//!
//! ```rust
//! use vinculum_abi::{decode_result, encode_call, AbiEntry, Arguments, Parameter, Value};
//!
//! let balance_of = AbiEntry::function(
//!     "balanceOf",
//!     vec![Parameter::new("owner", "address")],
//!     vec![Parameter::new("", "uint256")],
//! );
//!
//! let mut args = Arguments::new();
//! args.insert(
//!     "owner".to_string(),
//!     Value::from("0x17f935d9b5E73C63b1CeC73f97dD988c5E2D9214"),
//! );
//! let call = encode_call(&balance_of, &args).unwrap();
//! assert!(call.to_hex().starts_with("0x70a08231"));
//!
//! // `result` field of the eth_call response
//! let result = format!("0x{:0>64}", "3e8");
//! let balance = decode_result(&balance_of, &result).unwrap();
//! assert_eq!(balance.to_string(), "1000");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod decode;
mod encode;
mod error;
mod explorer;
mod model;
mod selector;
mod types;

pub use decode::{decode_result, decode_value};
pub use encode::{
    encode_arguments, encode_arguments_with, encode_call, encode_call_with, validate_arguments,
    Arguments, CallData, TailLayout, WORD,
};
pub use error::AbiError;
pub use explorer::ExplorerResponse;
pub use model::{AbiCollection, AbiEntry, EntryKind, Parameter, StateMutability};
pub use selector::{canonical_signature, selector, selector_from_signature, selector_hex};
pub use types::{DecodedValue, SolType, Value};

// Re-export primitives used in the public API
pub use vinculum_primitives::{Address, U256};
