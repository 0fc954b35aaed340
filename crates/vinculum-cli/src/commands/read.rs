//! `vinculum read`

use std::path::PathBuf;

use clap::Args;
use vinculum_abi::DecodedValue;
use vinculum_client::{AbiSource, ClientConfig, ContractReader, ExplorerClient};
use vinculum_primitives::Address;

use super::{args::parse_arguments, decode::value_output, load_abi};
use crate::CliError;

/// Call a read-only contract function
#[derive(Debug, Args)]
pub struct ReadArgs {
    /// Contract address
    #[arg(long)]
    pub address: String,

    /// Function name or full signature
    #[arg(long)]
    pub function: String,

    /// Argument as name=value; a bare value binds to an unnamed input
    #[arg(long = "arg", value_name = "NAME=VALUE")]
    pub args: Vec<String>,

    /// ABI file (JSON array or explorer response)
    #[arg(long, required_unless_present = "explorer")]
    pub abi: Option<PathBuf>,

    /// Fetch the ABI from the configured block explorer
    #[arg(long, conflicts_with = "abi")]
    pub explorer: bool,

    /// Block tag: latest, pending, or a hex block number
    #[arg(long)]
    pub block: Option<String>,
}

impl ReadArgs {
    pub async fn execute(self, config: &ClientConfig, json: bool) -> Result<(), CliError> {
        let address =
            Address::from_hex(&self.address).map_err(|e| CliError::InvalidAddress(e.to_string()))?;

        let source: Box<dyn AbiSource> = match &self.abi {
            Some(path) => Box::new(load_abi(path)?),
            None => Box::new(ExplorerClient::from_config(config)?),
        };

        let mut reader = ContractReader::connect(config)?;
        if let Some(block) = self.block {
            reader = reader.at_block(block);
        }

        let (tag, value) =
            read_value(&reader, source.as_ref(), &address, &self.function, &self.args).await?;
        value_output(json, &self.function, &tag, &value).print();
        Ok(())
    }
}

/// Resolve `function` from `source`, type the raw arguments, and perform the call
pub async fn read_value(
    reader: &ContractReader,
    source: &dyn AbiSource,
    address: &Address,
    function: &str,
    raw: &[String],
) -> Result<(String, DecodedValue), CliError> {
    let abi = source.contract_abi(address).await?;
    let entry = abi.resolve(function)?;
    let args = parse_arguments(&entry.inputs, raw)?;

    tracing::info!(contract = %address, function = %entry.name, block = reader.block_tag(), "reading");
    let value = reader.read_contract(address, entry, &args).await?;
    let tag = entry
        .outputs
        .first()
        .map(|p| p.kind.tag())
        .unwrap_or_default();
    Ok((tag, value))
}
