//! ABI decoding of single return values

use vinculum_primitives::{Address, U256};

use crate::encode::WORD;
use crate::model::{AbiEntry, Parameter};
use crate::types::{DecodedValue, SolType};
use crate::AbiError;

/// Decode the `result` of an `eth_call` against the entry's single output.
///
/// `payload` may carry a `0x` prefix.
pub fn decode_result(entry: &AbiEntry, payload: &str) -> Result<DecodedValue, AbiError> {
    let [output] = entry.outputs.as_slice() else {
        return Err(AbiError::UnsupportedOutputArity {
            function: entry.name.clone(),
            count: entry.outputs.len(),
        });
    };

    let data = decode_hex(payload)?;
    decode_value(output, &data)
}

/// Decode raw return bytes as a value of the parameter's declared type
pub fn decode_value(param: &Parameter, data: &[u8]) -> Result<DecodedValue, AbiError> {
    match &param.kind {
        SolType::Uint(bits) => {
            let value = U256::from_big_endian(first_word(data, &param.kind)?);
            if value.bits() > *bits {
                return Err(AbiError::IntegerOverflow {
                    name: param.name.clone(),
                    bits: *bits,
                    value,
                });
            }
            Ok(DecodedValue::Uint(value))
        }
        // Only the lowest nibble of the word decides
        SolType::Bool => match first_word(data, &param.kind)?[WORD - 1] & 0x0f {
            0 => Ok(DecodedValue::Bool(false)),
            1 => Ok(DecodedValue::Bool(true)),
            nibble => Err(AbiError::InvalidEncoding(format!(
                "bool word must end in 0 or 1, got {nibble:x}"
            ))),
        },
        SolType::Address => {
            let word = first_word(data, &param.kind)?;
            Ok(DecodedValue::Address(Address::from_word(word)))
        }
        SolType::String => decode_string(data).map(DecodedValue::String),
        SolType::Unsupported(tag) => Err(AbiError::unsupported(&param.name, tag.as_str())),
    }
}

/// Offset word, length word, then the UTF-8 bytes from byte 64.
///
/// The offset word must be `0` or `0x20`; both place the length in the
/// second slot for a lone string return.
fn decode_string(data: &[u8]) -> Result<String, AbiError> {
    check_length(data, 2 * WORD, "string")?;

    match word_to_usize(&data[..WORD]) {
        Some(0) | Some(WORD) => {}
        _ => {
            return Err(AbiError::InvalidEncoding(format!(
                "unsupported string offset 0x{}",
                hex::encode(&data[..WORD]).trim_start_matches('0')
            )))
        }
    }

    let start = 2 * WORD;
    let len = word_to_usize(&data[WORD..start])
        .ok_or_else(|| AbiError::InvalidEncoding("string length out of range".to_string()))?;
    let end = start
        .checked_add(len)
        .filter(|end| *end <= data.len())
        .ok_or_else(|| {
            AbiError::InvalidEncoding(format!(
                "string length {len} exceeds {} available bytes",
                data.len() - start
            ))
        })?;

    String::from_utf8(data[start..end].to_vec())
        .map_err(|e| AbiError::InvalidEncoding(format!("invalid UTF-8: {e}")))
}

/// Strip an optional `0x` prefix and decode hex
fn decode_hex(payload: &str) -> Result<Vec<u8>, AbiError> {
    let payload = payload.trim();
    let payload = payload.strip_prefix("0x").unwrap_or(payload);
    hex::decode(payload).map_err(|e| AbiError::InvalidEncoding(format!("invalid hex: {e}")))
}

fn first_word<'a>(data: &'a [u8], kind: &SolType) -> Result<&'a [u8; WORD], AbiError> {
    data.first_chunk::<WORD>().ok_or_else(|| insufficient(data, WORD, &kind.tag()))
}

/// Check that data has at least `required` bytes
fn check_length(data: &[u8], required: usize, what: &str) -> Result<(), AbiError> {
    if data.len() < required {
        return Err(insufficient(data, required, what));
    }
    Ok(())
}

fn insufficient(data: &[u8], required: usize, what: &str) -> AbiError {
    AbiError::InvalidEncoding(format!(
        "insufficient data for {what}: need {required} bytes, have {}",
        data.len()
    ))
}

fn word_to_usize(word: &[u8]) -> Option<usize> {
    let value = U256::from_big_endian(word);
    if value.bits() > 64 {
        return None;
    }
    usize::try_from(value.low_u64()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn getter(tag: &str) -> AbiEntry {
        AbiEntry::function("get", vec![], vec![Parameter::new("", tag)])
    }

    fn hex_word(hex_str: &str) -> String {
        format!("{:0>64}", hex_str)
    }

    #[test]
    fn test_decode_uint256() {
        let payload = format!("0x{}", hex_word("de0b6b3a7640000"));
        let value = decode_result(&getter("uint256"), &payload).unwrap();
        assert_eq!(value, DecodedValue::Uint(U256::from(1_000_000_000_000_000_000u64)));
        assert_eq!(value.to_string(), "1000000000000000000");
    }

    #[test]
    fn test_decode_without_prefix() {
        let value = decode_result(&getter("uint256"), &hex_word("2a")).unwrap();
        assert_eq!(value.as_uint(), Some(U256::from(42)));
    }

    #[test]
    fn test_decode_uint8_boundaries() {
        let entry = getter("uint8");
        assert_eq!(
            decode_result(&entry, &hex_word("0")).unwrap(),
            DecodedValue::Uint(U256::zero())
        );
        assert_eq!(
            decode_result(&entry, &hex_word("ff")).unwrap(),
            DecodedValue::Uint(U256::from(255))
        );
        assert!(matches!(
            decode_result(&entry, &hex_word("100")),
            Err(AbiError::IntegerOverflow { bits: 8, .. })
        ));
    }

    #[test]
    fn test_decode_bool() {
        let entry = getter("bool");
        assert_eq!(decode_result(&entry, &hex_word("1")).unwrap(), DecodedValue::Bool(true));
        assert_eq!(decode_result(&entry, &hex_word("0")).unwrap(), DecodedValue::Bool(false));
        assert!(matches!(
            decode_result(&entry, &hex_word("2")),
            Err(AbiError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_decode_bool_reads_last_digit() {
        let entry = getter("bool");
        assert_eq!(decode_result(&entry, &hex_word("100")).unwrap(), DecodedValue::Bool(false));
        assert_eq!(decode_result(&entry, &hex_word("ff01")).unwrap(), DecodedValue::Bool(true));
        assert!(matches!(
            decode_result(&entry, &hex_word("1f")),
            Err(AbiError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_decode_address() {
        let payload = hex_word("17f935d9b5E73C63b1CeC73f97dD988c5E2D9214");
        let value = decode_result(&getter("address"), &payload).unwrap();
        assert_eq!(value.to_string(), "0x17f935d9b5e73c63b1cec73f97dd988c5e2d9214");
    }

    #[test]
    fn test_decode_string() {
        let payload = format!(
            "0x{}{}{:0<64}",
            hex_word("20"),
            hex_word("5"),
            hex::encode("hello")
        );
        let value = decode_result(&getter("string"), &payload).unwrap();
        assert_eq!(value, DecodedValue::String("hello".to_string()));
    }

    #[test]
    fn test_decode_empty_string() {
        let payload = format!("{}{}", hex_word("20"), hex_word("0"));
        let value = decode_result(&getter("string"), &payload).unwrap();
        assert_eq!(value.as_str(), Some(""));
    }

    #[test]
    fn test_decode_string_length_past_payload() {
        let payload = format!("{}{}{:0<64}", hex_word("20"), hex_word("40"), "68656c6c6f");
        assert!(matches!(
            decode_result(&getter("string"), &payload),
            Err(AbiError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_decode_string_zero_offset() {
        let payload = format!(
            "0x{}{}{:0<64}",
            hex_word("0"),
            hex_word("5"),
            hex::encode("hello")
        );
        let value = decode_result(&getter("string"), &payload).unwrap();
        assert_eq!(value.as_str(), Some("hello"));
    }

    #[test]
    fn test_decode_string_rejects_other_offsets() {
        let tail = format!("{}{:0<64}", hex_word("5"), hex::encode("hello"));
        for offset in ["40", "1000", "1f"] {
            let payload = format!("{}{}", hex_word(offset), tail);
            assert!(matches!(
                decode_result(&getter("string"), &payload),
                Err(AbiError::InvalidEncoding(msg)) if msg.contains("offset")
            ));
        }
    }

    #[test]
    fn test_decode_string_invalid_utf8() {
        let payload = format!("{}{}{:0<64}", hex_word("20"), hex_word("2"), "fffe");
        assert!(matches!(
            decode_result(&getter("string"), &payload),
            Err(AbiError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_decode_short_payloads() {
        for tag in ["uint256", "uint8", "bool", "address"] {
            assert!(matches!(
                decode_result(&getter(tag), "0x"),
                Err(AbiError::InvalidEncoding(_))
            ));
            assert!(matches!(
                decode_result(&getter(tag), &"0".repeat(62)),
                Err(AbiError::InvalidEncoding(_))
            ));
        }
        // one word is not enough for a string
        assert!(matches!(
            decode_result(&getter("string"), &hex_word("20")),
            Err(AbiError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_decode_invalid_hex() {
        assert!(matches!(
            decode_result(&getter("uint256"), "0xzz"),
            Err(AbiError::InvalidEncoding(_))
        ));
        assert!(matches!(
            decode_result(&getter("uint256"), "0x123"),
            Err(AbiError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_decode_output_arity() {
        let none = AbiEntry::function("deposit", vec![], vec![]);
        assert!(matches!(
            decode_result(&none, &hex_word("1")),
            Err(AbiError::UnsupportedOutputArity { count: 0, .. })
        ));

        let two = AbiEntry::function(
            "reserves",
            vec![],
            vec![Parameter::new("a", "uint256"), Parameter::new("b", "uint256")],
        );
        assert!(matches!(
            decode_result(&two, &format!("{}{}", hex_word("1"), hex_word("2"))),
            Err(AbiError::UnsupportedOutputArity { count: 2, .. })
        ));
    }

    #[test]
    fn test_decode_unsupported_output() {
        for tag in ["tuple", "uint256[]", "bytes", "int256"] {
            assert!(matches!(
                decode_result(&getter(tag), &hex_word("1")),
                Err(AbiError::UnsupportedType { .. })
            ));
        }
    }
}
