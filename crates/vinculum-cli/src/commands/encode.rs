//! `vinculum encode`

use std::path::PathBuf;

use clap::Args;
use vinculum_abi::{encode_call_with, AbiCollection, CallData, TailLayout};

use super::{args::parse_arguments, load_abi};
use crate::{output::Output, CliError};

/// Build call data for a function
#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// ABI file (JSON array or explorer response)
    #[arg(long)]
    pub abi: PathBuf,

    /// Function name or full signature
    #[arg(long)]
    pub function: String,

    /// Argument as name=value; a bare value binds to an unnamed input
    #[arg(long = "arg", value_name = "NAME=VALUE")]
    pub args: Vec<String>,

    /// Allow several dynamic arguments using cumulative tail offsets
    #[arg(long)]
    pub general: bool,
}

impl EncodeArgs {
    pub fn execute(self, json: bool) -> Result<(), CliError> {
        let abi = load_abi(&self.abi)?;
        let layout = if self.general {
            TailLayout::General
        } else {
            TailLayout::SingleDynamic
        };
        let call = encode(&abi, &self.function, &self.args, layout)?;

        Output::new(json)
            .field("function", self.function)
            .field("selector", hex::encode(call.selector()))
            .field("data", call.to_hex())
            .line(call.to_hex())
            .print();
        Ok(())
    }
}

/// Resolve `function` in `abi` and encode `raw` arguments for it
pub fn encode(
    abi: &AbiCollection,
    function: &str,
    raw: &[String],
    layout: TailLayout,
) -> Result<CallData, CliError> {
    let entry = abi.resolve(function)?;
    let args = parse_arguments(&entry.inputs, raw)?;
    Ok(encode_call_with(entry, &args, layout)?)
}
