//! `--arg name=value` parsing
//!
//! Values are typed by the declared input they bind to. A bare value with
//! no `=` binds to the empty name, which is how unnamed inputs appear in
//! most published ABIs.

use vinculum_abi::{Arguments, Parameter, SolType, Value, U256};
use vinculum_primitives::Address;

use crate::CliError;

/// Split `name=value`; a bare value gets the empty name
pub fn split_pair(raw: &str) -> (&str, &str) {
    raw.split_once('=').unwrap_or(("", raw))
}

/// Build the argument map for `inputs` from raw `--arg` strings.
///
/// Names that match no input are passed through as strings so the encoder
/// reports them together with any missing names.
pub fn parse_arguments(inputs: &[Parameter], raw: &[String]) -> Result<Arguments, CliError> {
    let mut args = Arguments::new();
    for pair in raw {
        let (name, text) = split_pair(pair);
        let value = match inputs.iter().find(|p| p.name == name) {
            Some(param) => parse_value(name, &param.kind, text)?,
            None => Value::String(text.to_string()),
        };
        if args.insert(name.to_string(), value).is_some() {
            return Err(CliError::InvalidInput(format!(
                "argument '{name}' given more than once"
            )));
        }
    }
    Ok(args)
}

/// Parse one value as `kind`
pub fn parse_value(name: &str, kind: &SolType, text: &str) -> Result<Value, CliError> {
    let invalid = || CliError::InvalidArgument {
        name: name.to_string(),
        expected: kind.tag(),
        value: text.to_string(),
    };

    match kind {
        SolType::Address => Address::from_hex(text)
            .map(Value::Address)
            .map_err(|_| invalid()),
        SolType::Uint(_) => parse_uint(text).map(Value::Uint).ok_or_else(invalid),
        SolType::Bool => match text {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(invalid()),
        },
        // Unsupported tags are left to the encoder to reject.
        SolType::String | SolType::Unsupported(_) => Ok(Value::String(text.to_string())),
    }
}

/// Decimal, or hex with a `0x` prefix
fn parse_uint(text: &str) -> Option<U256> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(digits) if !digits.is_empty() => U256::from_str_radix(digits, 16).ok(),
        Some(_) => None,
        None => U256::from_dec_str(text).ok(),
    }
}
