//! ABI type definitions

use std::fmt;

use serde::{Deserialize, Serialize};
use vinculum_primitives::{Address, U256};

/// Solidity parameter types understood by the encoder and decoder.
///
/// Tags are parsed once when the ABI is loaded. Anything outside the
/// supported set is kept verbatim in [`SolType::Unsupported`] so the entry
/// still round-trips and its selector can still be computed; encoding or
/// decoding such a parameter fails with `UnsupportedType`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SolType {
    /// Address (20 bytes)
    Address,
    /// Unsigned integer with bit size (8, 16, ..., 256)
    Uint(usize),
    /// Boolean
    Bool,
    /// UTF-8 string
    String,
    /// Any other tag: tuples, arrays, bytes, signed integers...
    Unsupported(String),
}

impl SolType {
    /// Parse a canonical type tag (e.g. `"uint256"`, `"address"`)
    pub fn parse(tag: &str) -> Self {
        match tag {
            "address" => SolType::Address,
            "bool" => SolType::Bool,
            "string" => SolType::String,
            _ => parse_uint(tag).unwrap_or_else(|| SolType::Unsupported(tag.to_string())),
        }
    }

    /// Check if this type is dynamic (encoded through the tail region)
    pub fn is_dynamic(&self) -> bool {
        matches!(self, SolType::String)
    }

    /// Check if the encoder/decoder can handle this type
    pub fn is_supported(&self) -> bool {
        !matches!(self, SolType::Unsupported(_))
    }

    /// Canonical tag as used in function signatures
    pub fn tag(&self) -> String {
        match self {
            SolType::Address => "address".to_string(),
            SolType::Uint(bits) => format!("uint{bits}"),
            SolType::Bool => "bool".to_string(),
            SolType::String => "string".to_string(),
            SolType::Unsupported(tag) => tag.clone(),
        }
    }
}

fn parse_uint(tag: &str) -> Option<SolType> {
    let rest = tag.strip_prefix("uint")?;
    let bits: usize = rest.parse().ok()?;
    // Reject non-canonical spellings such as "uint08" or "uint+8".
    if rest != bits.to_string() || bits == 0 || bits > 256 || bits % 8 != 0 {
        return None;
    }
    Some(SolType::Uint(bits))
}

impl From<String> for SolType {
    fn from(tag: String) -> Self {
        SolType::parse(&tag)
    }
}

impl From<&str> for SolType {
    fn from(tag: &str) -> Self {
        SolType::parse(tag)
    }
}

impl From<SolType> for String {
    fn from(ty: SolType) -> Self {
        ty.tag()
    }
}

impl fmt::Display for SolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

/// Argument value supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Parsed address
    Address(Address),
    /// Unsigned integer
    Uint(U256),
    /// Boolean
    Bool(bool),
    /// Text; also accepted for `address` parameters when it holds hex
    String(String),
}

impl Value {
    /// Short name of the runtime kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Address(_) => "address",
            Value::Uint(_) => "integer",
            Value::Bool(_) => "bool",
            Value::String(_) => "string",
        }
    }
}

impl From<Address> for Value {
    fn from(addr: Address) -> Self {
        Value::Address(addr)
    }
}

impl From<U256> for Value {
    fn from(value: U256) -> Self {
        Value::Uint(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Uint(U256::from(value))
    }
}

impl From<u128> for Value {
    fn from(value: u128) -> Self {
        Value::Uint(U256::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

/// Single return value decoded from `eth_call` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedValue {
    /// Address
    Address(Address),
    /// Unsigned integer (any declared width)
    Uint(U256),
    /// Boolean
    Bool(bool),
    /// UTF-8 string
    String(String),
}

impl DecodedValue {
    /// Integer payload, if this is an integer
    pub fn as_uint(&self) -> Option<U256> {
        match self {
            DecodedValue::Uint(value) => Some(*value),
            _ => None,
        }
    }

    /// Address payload, if this is an address
    pub fn as_address(&self) -> Option<&Address> {
        match self {
            DecodedValue::Address(addr) => Some(addr),
            _ => None,
        }
    }

    /// Boolean payload, if this is a bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DecodedValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// String payload, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DecodedValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::Address(addr) => write!(f, "{addr}"),
            DecodedValue::Uint(value) => write!(f, "{value}"),
            DecodedValue::Bool(value) => write!(f, "{value}"),
            DecodedValue::String(s) => f.write_str(s),
        }
    }
}
