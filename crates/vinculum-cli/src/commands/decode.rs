//! `vinculum decode`

use std::path::PathBuf;

use clap::Args;
use vinculum_abi::{decode_result, AbiCollection, DecodedValue};

use super::load_abi;
use crate::{output::Output, CliError};

/// Decode a function's return data
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// ABI file (JSON array or explorer response)
    #[arg(long)]
    pub abi: PathBuf,

    /// Function name or full signature
    #[arg(long)]
    pub function: String,

    /// Return data as hex, with or without 0x
    pub data: String,
}

impl DecodeArgs {
    pub fn execute(self, json: bool) -> Result<(), CliError> {
        let abi = load_abi(&self.abi)?;
        let (tag, value) = decode(&abi, &self.function, &self.data)?;
        value_output(json, &self.function, &tag, &value).print();
        Ok(())
    }
}

/// Decode `data` as the single output of `function`; returns the output type tag too
pub fn decode(
    abi: &AbiCollection,
    function: &str,
    data: &str,
) -> Result<(String, DecodedValue), CliError> {
    let entry = abi.resolve(function)?;
    let value = decode_result(entry, data)?;
    let tag = entry
        .outputs
        .first()
        .map(|p| p.kind.tag())
        .unwrap_or_default();
    Ok((tag, value))
}

/// Shared rendering of a decoded return value
pub(crate) fn value_output(json: bool, function: &str, tag: &str, value: &DecodedValue) -> Output {
    Output::new(json)
        .field("function", function)
        .field("type", tag)
        .field("value", value.to_string())
        .line(value.to_string())
}
