//! Contract ABI model: entries, parameters and the entry collection

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::selector::canonical_signature;
use crate::types::SolType;
use crate::AbiError;

/// Kind of ABI entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Callable function (the default when `type` is omitted)
    #[default]
    Function,
    /// Event
    Event,
    /// Constructor
    Constructor,
    /// Fallback function
    Fallback,
    /// Receive function
    Receive,
    /// Custom error
    Error,
    /// Any kind this crate does not know about
    #[serde(other)]
    Other,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryKind::Function => "function",
            EntryKind::Event => "event",
            EntryKind::Constructor => "constructor",
            EntryKind::Fallback => "fallback",
            EntryKind::Receive => "receive",
            EntryKind::Error => "error",
            EntryKind::Other => "other",
        };
        f.write_str(s)
    }
}

/// Function state mutability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    /// Reads neither state nor environment
    Pure,
    /// Reads but does not modify state
    View,
    /// Modifies state, rejects value
    Nonpayable,
    /// Modifies state, accepts value
    Payable,
}

/// Input or output parameter of an ABI entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name (empty for unnamed outputs)
    #[serde(default)]
    pub name: String,
    /// Declared Solidity type
    #[serde(rename = "type")]
    pub kind: SolType,
    /// Indexed flag (event parameters only)
    #[serde(default, skip_serializing_if = "is_false")]
    pub indexed: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Parameter {
    /// Create a parameter from a name and a type tag
    pub fn new(name: impl Into<String>, tag: &str) -> Self {
        Self {
            name: name.into(),
            kind: SolType::parse(tag),
            indexed: false,
        }
    }

    /// Create an indexed event parameter
    pub fn indexed(name: impl Into<String>, tag: &str) -> Self {
        Self {
            indexed: true,
            ..Self::new(name, tag)
        }
    }
}

/// One entry of a contract ABI document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiEntry {
    /// Entry name (empty for constructor/fallback)
    #[serde(default)]
    pub name: String,
    /// Entry kind
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
    /// Ordered input parameters
    #[serde(default)]
    pub inputs: Vec<Parameter>,
    /// Ordered output parameters
    #[serde(default)]
    pub outputs: Vec<Parameter>,
    /// Declared mutability (absent in legacy ABIs)
    #[serde(
        rename = "stateMutability",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub state_mutability: Option<StateMutability>,
    /// Legacy read-only flag
    #[serde(default)]
    pub constant: bool,
    /// Legacy payable flag
    #[serde(default)]
    pub payable: bool,
    /// Anonymous flag (events only)
    #[serde(default)]
    pub anonymous: bool,
}

impl AbiEntry {
    /// Create a view function entry
    pub fn function(
        name: impl Into<String>,
        inputs: Vec<Parameter>,
        outputs: Vec<Parameter>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Function,
            inputs,
            outputs,
            state_mutability: Some(StateMutability::View),
            constant: true,
            payable: false,
            anonymous: false,
        }
    }

    /// Effective mutability, falling back to the legacy `constant`/`payable` flags
    pub fn mutability(&self) -> StateMutability {
        match self.state_mutability {
            Some(mutability) => mutability,
            None if self.payable => StateMutability::Payable,
            None if self.constant => StateMutability::View,
            None => StateMutability::Nonpayable,
        }
    }

    /// True for functions that cannot modify state (pure or view)
    pub fn is_read_only(&self) -> bool {
        self.kind == EntryKind::Function
            && matches!(self.mutability(), StateMutability::Pure | StateMutability::View)
    }

    /// Canonical signature, e.g. `transfer(address,uint256)`
    pub fn signature(&self) -> Result<String, AbiError> {
        canonical_signature(self)
    }
}

/// Ordered list of ABI entries as published for a contract
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbiCollection {
    entries: Vec<AbiEntry>,
}

impl AbiCollection {
    /// Wrap a list of entries
    pub fn new(entries: Vec<AbiEntry>) -> Self {
        Self { entries }
    }

    /// Parse an ABI JSON document (an array of entries). Unknown fields are ignored.
    pub fn from_json(json: &str) -> Result<Self, AbiError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in document order
    pub fn entries(&self) -> &[AbiEntry] {
        &self.entries
    }

    /// Iterate over all entries
    pub fn iter(&self) -> std::slice::Iter<'_, AbiEntry> {
        self.entries.iter()
    }

    /// Iterate over function entries
    pub fn functions(&self) -> impl Iterator<Item = &AbiEntry> {
        self.entries.iter().filter(|e| e.kind == EntryKind::Function)
    }

    /// Iterate over event entries
    pub fn events(&self) -> impl Iterator<Item = &AbiEntry> {
        self.entries.iter().filter(|e| e.kind == EntryKind::Event)
    }

    /// First entry with the given name, of any kind.
    ///
    /// Overloads are not distinguished; see [`AbiCollection::resolve`].
    pub fn find(&self, name: &str) -> Result<&AbiEntry, AbiError> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| AbiError::EntryNotFound(name.to_string()))
    }

    /// Function whose canonical signature equals `signature`
    pub fn find_by_signature(&self, signature: &str) -> Result<&AbiEntry, AbiError> {
        let signature: String = signature.chars().filter(|c| !c.is_whitespace()).collect();
        self.functions()
            .find(|e| e.signature().is_ok_and(|s| s == signature))
            .ok_or(AbiError::EntryNotFound(signature))
    }

    /// Resolve a function unambiguously.
    ///
    /// `query` is either a full signature (`balanceOf(address)`) or a bare
    /// name; a bare name must match exactly one function.
    pub fn resolve(&self, query: &str) -> Result<&AbiEntry, AbiError> {
        if query.contains('(') {
            return self.find_by_signature(query);
        }

        let mut matches = self.functions().filter(|e| e.name == query);
        let first = matches
            .next()
            .ok_or_else(|| AbiError::EntryNotFound(query.to_string()))?;
        let rest: Vec<&AbiEntry> = matches.collect();
        if rest.is_empty() {
            return Ok(first);
        }

        let candidates = std::iter::once(first)
            .chain(rest)
            .map(|e| e.signature().unwrap_or_else(|_| e.name.clone()))
            .collect();
        Err(AbiError::AmbiguousFunction {
            name: query.to_string(),
            candidates,
        })
    }
}

impl<'a> IntoIterator for &'a AbiCollection {
    type Item = &'a AbiEntry;
    type IntoIter = std::slice::Iter<'a, AbiEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Vec<AbiEntry>> for AbiCollection {
    fn from(entries: Vec<AbiEntry>) -> Self {
        Self::new(entries)
    }
}
