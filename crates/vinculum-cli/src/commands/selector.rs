//! `vinculum selector`

use std::path::PathBuf;

use clap::Args;
use serde_json::json;
use vinculum_abi::{selector_from_signature, AbiCollection};

use super::load_abi;
use crate::{output::Output, CliError};

/// Compute function selectors
#[derive(Debug, Args)]
pub struct SelectorArgs {
    /// Raw signature, e.g. "balanceOf(address)"
    #[arg(required_unless_present = "abi")]
    pub signature: Option<String>,

    /// List the selector of every function in this ABI file instead
    #[arg(long, conflicts_with = "signature")]
    pub abi: Option<PathBuf>,
}

impl SelectorArgs {
    pub fn execute(self, json: bool) -> Result<(), CliError> {
        let output = match (self.signature, self.abi) {
            (Some(signature), _) => {
                let (signature, selector) = signature_selector(&signature);
                Output::new(json)
                    .field("signature", signature)
                    .field("selector", selector.clone())
                    .line(selector)
            }
            (None, Some(path)) => list_selectors(&load_abi(&path)?, json),
            (None, None) => {
                return Err(CliError::InvalidInput(
                    "either a signature or --abi is required".to_string(),
                ))
            }
        };
        output.print();
        Ok(())
    }
}

/// Normalized signature and its 8-hex selector
pub fn signature_selector(signature: &str) -> (String, String) {
    let signature: String = signature.chars().filter(|c| !c.is_whitespace()).collect();
    let selector = hex::encode(selector_from_signature(&signature));
    (signature, selector)
}

fn list_selectors(abi: &AbiCollection, json: bool) -> Output {
    let mut output = Output::new(json);
    let mut rows = Vec::new();
    for entry in abi.functions() {
        match entry.signature() {
            Ok(signature) => {
                let (_, selector) = signature_selector(&signature);
                output = output.line(format!("{selector}  {signature}"));
                rows.push(json!({ "signature": signature, "selector": selector }));
            }
            Err(e) => tracing::warn!(function = %entry.name, "skipping: {e}"),
        }
    }
    output.field("functions", rows)
}
