//! # vinculum-cli
//!
//! Command-line interface for the vinculum ABI engine.
//!
//! ## Usage
//!
//! ```bash
//! # Selectors
//! vinculum selector "balanceOf(address)"
//! vinculum selector --abi wmatic.json
//!
//! # Offline encode / decode
//! vinculum encode --abi wmatic.json --function balanceOf --arg 0x17f9...9214
//! vinculum decode --abi wmatic.json --function decimals 0x...12
//!
//! # Contract reads
//! vinculum read --explorer --address 0x0d50...1270 --function symbol
//! vinculum read --abi wmatic.json --address 0x0d50...1270 --function balanceOf --arg 0x17f9...9214
//! ```

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vinculum_client::ClientConfig;

pub use error::CliError;
use output::Output;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let json = cli.json;
    if let Err(e) = run(cli).await {
        if json {
            println!(
                "{}",
                serde_json::json!({
                    "error": e.to_string(),
                    "success": false
                })
            );
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

/// Offline commands never read the config file
async fn run(cli: Cli) -> Result<(), CliError> {
    let overrides = cli.overrides();

    match cli.command {
        Commands::Selector(args) => args.execute(cli.json),
        Commands::Encode(args) => args.execute(cli.json),
        Commands::Decode(args) => args.execute(cli.json),
        Commands::Read(args) => {
            let config = config::effective(cli.config.as_deref(), &overrides)?;
            args.execute(&config, cli.json).await
        }
        Commands::Config { save } => {
            let config = config::effective(cli.config.as_deref(), &overrides)?;
            handle_config(&config, cli.config, save, cli.json)
        }
    }
}

fn handle_config(
    config: &ClientConfig,
    path: Option<std::path::PathBuf>,
    save: bool,
    json: bool,
) -> Result<(), CliError> {
    if save {
        let path = path
            .or_else(config::config_path)
            .ok_or_else(|| CliError::Config("cannot determine config path".to_string()))?;
        config::save(config, &path)?;
        Output::new(json)
            .field("status", "saved")
            .field("path", path.display().to_string())
            .line(format!("Configuration saved to {}", path.display()))
            .print();
        return Ok(());
    }

    Output::new(json)
        .field("rpc_url", config.rpc_url.as_str())
        .field("explorer_url", config.explorer_url.as_str())
        .field("explorer_api_key_set", config.explorer_api_key.is_some())
        .field("block_tag", config.block_tag.as_str())
        .field("timeout_secs", config.timeout_secs)
        .line(format!("RPC URL: {}", config.rpc_url))
        .line(format!("Explorer URL: {}", config.explorer_url))
        .line(format!(
            "Explorer API key: {}",
            if config.explorer_api_key.is_some() { "set" } else { "not set" }
        ))
        .line(format!("Block tag: {}", config.block_tag))
        .line(format!("Timeout: {}s", config.timeout_secs))
        .print();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[tokio::test]
    async fn test_broken_config_only_affects_networked_commands() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "rpc_url = [").unwrap();
        let path = path.to_str().unwrap();

        let selector =
            Cli::try_parse_from(["vinculum", "--config", path, "selector", "balanceOf(address)"])
                .unwrap();
        assert!(run(selector).await.is_ok());

        let show = Cli::try_parse_from(["vinculum", "--config", path, "config"]).unwrap();
        assert!(matches!(run(show).await, Err(CliError::Config(_))));
    }
}
