//! CLI argument parsing

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{decode::DecodeArgs, encode::EncodeArgs, read::ReadArgs, selector::SelectorArgs};
use crate::config::Overrides;

/// Vinculum ABI tool
#[derive(Parser, Debug)]
#[command(name = "vinculum")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ~/.vinculum/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON-RPC endpoint URL
    #[arg(long, global = true)]
    pub rpc_url: Option<String>,

    /// Explorer API base URL
    #[arg(long, global = true)]
    pub explorer_url: Option<String>,

    /// Explorer API key
    #[arg(long, global = true, env = "VINCULUM_EXPLORER_API_KEY", hide_env_values = true)]
    pub explorer_api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute a function selector
    Selector(SelectorArgs),
    /// Encode call data
    Encode(EncodeArgs),
    /// Decode return data
    Decode(DecodeArgs),
    /// Read a contract through eth_call
    Read(ReadArgs),
    /// Show or write configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Configuration overrides given as flags
    pub fn overrides(&self) -> Overrides {
        Overrides {
            rpc_url: self.rpc_url.clone(),
            explorer_url: self.explorer_url.clone(),
            explorer_api_key: self.explorer_api_key.clone(),
            timeout_secs: self.timeout,
        }
    }
}
