//! # vinculum-primitives
//!
//! Fixed-width values shared by the ABI engine and the RPC client.
//!
//! - [`Address`]: 20-byte account or contract address
//! - [`H256`]: 32-byte Keccak digest
//! - [`U256`]: 256-bit unsigned integer (re-exported from `primitive-types`)

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod hash;

pub use address::{Address, AddressError};
pub use hash::H256;

// Re-export primitive-types for U256
pub use primitive_types::U256;
