//! Contract and account address (20 bytes)

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Address parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// Invalid length
    #[error("invalid address length: expected 20 bytes, got {0}")]
    InvalidLength(usize),
}

/// 20-byte address as carried in the low bytes of an ABI word
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Address([u8; 20]);

impl Address {
    /// Size of address in bytes
    pub const LEN: usize = 20;

    /// Zero address (0x0000...0000)
    pub const ZERO: Address = Address([0u8; 20]);

    /// Create address from bytes
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }

    /// Create address from slice
    pub fn from_slice(slice: &[u8]) -> Result<Self, AddressError> {
        if slice.len() != Self::LEN {
            return Err(AddressError::InvalidLength(slice.len()));
        }
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(slice);
        Ok(Address(bytes))
    }

    /// Parse address from hex string (with or without 0x prefix, any case)
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let s = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Get as byte array
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Check if this is the zero address
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Left-pad into a 32-byte ABI word
    pub fn to_word(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&self.0);
        word
    }

    /// Take the low 20 bytes of an ABI word; the 12 padding bytes are not checked
    pub fn from_word(word: &[u8; 32]) -> Self {
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&word[12..]);
        Address(bytes)
    }

    /// Convert to lowercase hex string with 0x prefix
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Parsing ====================

    #[test]
    fn test_address_from_hex() {
        let addr = Address::from_hex("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270").unwrap();
        assert!(!addr.is_zero());

        let bare = Address::from_hex("0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270").unwrap();
        assert_eq!(addr, bare);
    }

    #[test]
    fn test_address_from_hex_mixed_case() {
        let lower = Address::from_hex("0x0d500b1d8e8ef31e21c99d1db9a6444d3adf1270").unwrap();
        let upper = Address::from_hex("0X0D500B1D8E8EF31E21C99D1DB9A6444D3ADF1270").unwrap();
        let mixed = Address::from_hex("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn test_address_from_hex_invalid_chars() {
        let result = Address::from_hex("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf12GG");
        assert!(matches!(result, Err(AddressError::InvalidHex(_))));
    }

    #[test]
    fn test_address_from_hex_only_prefix() {
        assert_eq!(Address::from_hex("0x"), Err(AddressError::InvalidLength(0)));
    }

    #[test]
    fn test_address_from_hex_wrong_length() {
        // 19 bytes
        assert_eq!(
            Address::from_hex("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf12"),
            Err(AddressError::InvalidLength(19))
        );
        // 21 bytes
        assert_eq!(
            Address::from_hex("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf127000"),
            Err(AddressError::InvalidLength(21))
        );
    }

    #[test]
    fn test_address_from_slice() {
        let bytes = [0xab; 20];
        assert_eq!(Address::from_slice(&bytes).unwrap().as_bytes(), &bytes);
        assert_eq!(Address::from_slice(&[0u8; 32]), Err(AddressError::InvalidLength(32)));
    }

    // ==================== ABI words ====================

    #[test]
    fn test_address_word_padding() {
        let addr = Address::from_hex("0x17f935d9b5E73C63b1CeC73f97dD988c5E2D9214").unwrap();
        let word = addr.to_word();
        assert_eq!(&word[..12], &[0u8; 12]);
        assert_eq!(&word[12..], addr.as_bytes());
        assert_eq!(Address::from_word(&word), addr);
    }

    #[test]
    fn test_address_from_word_ignores_padding() {
        let mut word = [0xffu8; 32];
        word[12..].copy_from_slice(&[0x11; 20]);
        assert_eq!(Address::from_word(&word), Address::from_bytes([0x11; 20]));
    }

    // ==================== Formatting ====================

    #[test]
    fn test_address_display_is_lowercase() {
        let addr = Address::from_hex("0x17f935d9b5E73C63b1CeC73f97dD988c5E2D9214").unwrap();
        assert_eq!(addr.to_string(), "0x17f935d9b5e73c63b1cec73f97dd988c5e2d9214");
        assert_eq!(
            format!("{:?}", addr),
            "Address(0x17f935d9b5e73c63b1cec73f97dd988c5e2d9214)"
        );
    }

    #[test]
    fn test_address_from_str() {
        let addr: Address = "0x000000000000000000000000000000000000dEaD".parse().unwrap();
        assert_eq!(addr.as_bytes()[19], 0xad);
        assert!("not an address".parse::<Address>().is_err());
    }

    #[test]
    fn test_zero_address() {
        assert!(Address::ZERO.is_zero());
        assert_eq!(Address::default(), Address::ZERO);
        assert_eq!(Address::ZERO.to_hex(), "0x0000000000000000000000000000000000000000");
    }
}
