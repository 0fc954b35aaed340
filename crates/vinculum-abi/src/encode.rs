//! ABI encoding of call arguments

use std::collections::HashMap;
use std::fmt;

use vinculum_primitives::{Address, U256};

use crate::model::{AbiEntry, Parameter};
use crate::selector::selector;
use crate::types::{SolType, Value};
use crate::AbiError;

/// Size of one ABI word in bytes
pub const WORD: usize = 32;

/// Named call arguments; map order is irrelevant, declaration order drives encoding
pub type Arguments = HashMap<String, Value>;

/// How tail offsets for dynamic arguments are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TailLayout {
    /// At most one dynamic argument; its offset is the head size (`32 × inputs`).
    /// A second dynamic argument is rejected.
    #[default]
    SingleDynamic,
    /// Any number of dynamic arguments; each offset is the head size plus the
    /// encoded size of every preceding tail entry.
    General,
}

/// Encoded call data: selector followed by the argument region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallData {
    selector: [u8; 4],
    arguments: Vec<u8>,
}

impl CallData {
    /// Function selector
    pub fn selector(&self) -> [u8; 4] {
        self.selector
    }

    /// Argument region (head slots then tail)
    pub fn arguments(&self) -> &[u8] {
        &self.arguments
    }

    /// Total length in bytes
    pub fn len(&self) -> usize {
        self.selector.len() + self.arguments.len()
    }

    /// Always false: the selector is part of the data
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Selector and arguments as one byte vector
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.len());
        data.extend_from_slice(&self.selector);
        data.extend_from_slice(&self.arguments);
        data
    }

    /// `0x`-prefixed lowercase hex, ready for the `data` field of `eth_call`
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }
}

impl fmt::Display for CallData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Argument after validation: a finished head word or a tail payload
enum Encoded {
    Static([u8; WORD]),
    Dynamic(Vec<u8>),
}

/// Check supplied arguments against the declared inputs without encoding.
pub fn validate_arguments(inputs: &[Parameter], args: &Arguments) -> Result<(), AbiError> {
    resolve_arguments(inputs, args, TailLayout::SingleDynamic).map(|_| ())
}

/// Encode arguments with the default [`TailLayout::SingleDynamic`] layout
pub fn encode_arguments(inputs: &[Parameter], args: &Arguments) -> Result<Vec<u8>, AbiError> {
    encode_arguments_with(inputs, args, TailLayout::default())
}

/// Encode arguments into head slots followed by the tail region
pub fn encode_arguments_with(
    inputs: &[Parameter],
    args: &Arguments,
    layout: TailLayout,
) -> Result<Vec<u8>, AbiError> {
    let encoded = resolve_arguments(inputs, args, layout)?;

    let head_size = WORD * encoded.len();
    let mut head = Vec::with_capacity(head_size);
    let mut tail = Vec::new();

    for item in encoded {
        match item {
            Encoded::Static(word) => head.extend_from_slice(&word),
            Encoded::Dynamic(payload) => {
                let offset = match layout {
                    TailLayout::SingleDynamic => head_size,
                    TailLayout::General => head_size + tail.len(),
                };
                head.extend_from_slice(&usize_word(offset));
                tail.extend(payload);
            }
        }
    }

    head.extend(tail);
    Ok(head)
}

/// Encode a complete function call (selector + arguments)
pub fn encode_call(entry: &AbiEntry, args: &Arguments) -> Result<CallData, AbiError> {
    encode_call_with(entry, args, TailLayout::default())
}

/// Encode a complete function call with an explicit tail layout
pub fn encode_call_with(
    entry: &AbiEntry,
    args: &Arguments,
    layout: TailLayout,
) -> Result<CallData, AbiError> {
    let selector = selector(entry)?;
    let arguments = encode_arguments_with(&entry.inputs, args, layout)?;
    Ok(CallData { selector, arguments })
}

fn resolve_arguments(
    inputs: &[Parameter],
    args: &Arguments,
    layout: TailLayout,
) -> Result<Vec<Encoded>, AbiError> {
    check_names(inputs, args)?;

    let mut dynamic_seen = false;
    let mut encoded = Vec::with_capacity(inputs.len());
    for input in inputs {
        if input.kind.is_dynamic() {
            if dynamic_seen && layout == TailLayout::SingleDynamic {
                return Err(AbiError::unsupported(
                    &input.name,
                    format!("{} (more than one dynamic argument)", input.kind),
                ));
            }
            dynamic_seen = true;
        }
        let value = args
            .get(&input.name)
            .ok_or_else(|| AbiError::ArgumentCountMismatch {
                expected: inputs.len(),
                got: args.len(),
                missing: vec![input.name.clone()],
                unexpected: Vec::new(),
            })?;
        encoded.push(encode_value(input, value)?);
    }
    Ok(encoded)
}

fn check_names(inputs: &[Parameter], args: &Arguments) -> Result<(), AbiError> {
    let missing: Vec<String> = inputs
        .iter()
        .filter(|p| !args.contains_key(&p.name))
        .map(|p| p.name.clone())
        .collect();
    let mut unexpected: Vec<String> = args
        .keys()
        .filter(|key| !inputs.iter().any(|p| &p.name == *key))
        .cloned()
        .collect();

    if inputs.len() == args.len() && missing.is_empty() && unexpected.is_empty() {
        return Ok(());
    }

    unexpected.sort();
    Err(AbiError::ArgumentCountMismatch {
        expected: inputs.len(),
        got: args.len(),
        missing,
        unexpected,
    })
}

fn encode_value(param: &Parameter, value: &Value) -> Result<Encoded, AbiError> {
    match (&param.kind, value) {
        (SolType::Address, Value::Address(addr)) => Ok(Encoded::Static(addr.to_word())),
        (SolType::Address, Value::String(text)) => {
            let addr = Address::from_hex(text).map_err(|e| AbiError::ArgumentTypeMismatch {
                name: param.name.clone(),
                expected: param.kind.tag(),
                got: format!("string {text:?} ({e})"),
            })?;
            Ok(Encoded::Static(addr.to_word()))
        }
        (SolType::Uint(bits), Value::Uint(v)) => {
            if v.bits() > *bits {
                return Err(AbiError::IntegerOverflow {
                    name: param.name.clone(),
                    bits: *bits,
                    value: *v,
                });
            }
            Ok(Encoded::Static(u256_word(v)))
        }
        (SolType::Bool, Value::Bool(b)) => {
            let mut word = [0u8; WORD];
            word[WORD - 1] = u8::from(*b);
            Ok(Encoded::Static(word))
        }
        (SolType::String, Value::String(s)) => Ok(Encoded::Dynamic(encode_bytes(s.as_bytes()))),
        (SolType::Unsupported(tag), _) => Err(AbiError::unsupported(&param.name, tag.as_str())),
        (expected, got) => Err(AbiError::ArgumentTypeMismatch {
            name: param.name.clone(),
            expected: expected.tag(),
            got: got.kind().to_string(),
        }),
    }
}

fn u256_word(value: &U256) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    value.to_big_endian(&mut word);
    word
}

fn usize_word(value: usize) -> [u8; WORD] {
    u256_word(&U256::from(value))
}

/// Length word followed by the data right-padded to a word boundary
fn encode_bytes(data: &[u8]) -> Vec<u8> {
    let padded_len = data.len().div_ceil(WORD) * WORD;
    let mut result = Vec::with_capacity(WORD + padded_len);
    result.extend_from_slice(&usize_word(data.len()));
    result.extend_from_slice(data);
    result.resize(WORD + padded_len, 0);
    result
}
