//! Function selectors

use vinculum_crypto::keccak256;

use crate::model::{AbiEntry, EntryKind};
use crate::types::SolType;
use crate::AbiError;

/// Canonical signature `name(type1,type2,...)`: no spaces, no parameter names.
///
/// Tuple inputs are rejected because their canonical form needs the
/// component list, which this crate does not model.
pub fn canonical_signature(entry: &AbiEntry) -> Result<String, AbiError> {
    let mut types = Vec::with_capacity(entry.inputs.len());
    for input in &entry.inputs {
        if let SolType::Unsupported(tag) = &input.kind {
            if tag.starts_with("tuple") {
                return Err(AbiError::unsupported(&input.name, tag.as_str()));
            }
        }
        types.push(input.kind.tag());
    }
    Ok(format!("{}({})", entry.name, types.join(",")))
}

/// Compute function selector (first 4 bytes of keccak256(signature))
pub fn selector_from_signature(signature: &str) -> [u8; 4] {
    keccak256(signature.as_bytes()).selector()
}

/// Selector of a named function entry
pub fn selector(entry: &AbiEntry) -> Result<[u8; 4], AbiError> {
    if entry.kind != EntryKind::Function || entry.name.is_empty() {
        return Err(AbiError::InvalidEntryKind {
            name: entry.name.clone(),
            kind: entry.kind,
        });
    }
    Ok(selector_from_signature(&canonical_signature(entry)?))
}

/// Selector as 8 lowercase hex characters, without `0x`
pub fn selector_hex(entry: &AbiEntry) -> Result<String, AbiError> {
    selector(entry).map(hex::encode)
}
