//! # vinculum-crypto
//!
//! Keccak-256, the hash behind function selectors and event topics.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hash;

pub use hash::keccak256;
