//! # vinculum-client
//!
//! Network glue around the `vinculum-abi` engine.
//!
//! ## Features
//!
//! - **ContractReader**: encodes a call, submits `eth_call`, decodes the result
//! - **Transport**: JSON-RPC transport trait with mock and HTTP implementations
//! - **AbiSource**: ABI providers, including an Etherscan-compatible explorer client
//! - **ClientConfig**: endpoints and timeouts loaded from TOML
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vinculum_client::{ClientConfig, ContractReader, ExplorerClient};
//! use vinculum_abi::{Arguments, Value};
//! use vinculum_primitives::Address;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig {
//!         rpc_url: "https://polygon-rpc.com".to_string(),
//!         explorer_url: "https://api.polygonscan.com".to_string(),
//!         explorer_api_key: Some("YOUR_KEY".to_string()),
//!         ..ClientConfig::default()
//!     };
//!
//!     let reader = ContractReader::connect(&config)?;
//!     let explorer = ExplorerClient::from_config(&config)?;
//!
//!     let wmatic = Address::from_hex("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270")?;
//!     let mut args = Arguments::new();
//!     args.insert(String::new(), Value::from("0x17f935d9b5E73C63b1CeC73f97dD988c5E2D9214"));
//!
//!     let balance = reader.read_with_source(&explorer, &wmatic, "balanceOf", &args).await?;
//!     println!("balance: {balance}");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod reader;
mod source;
mod transport;

pub use config::ClientConfig;
pub use error::ClientError;
pub use reader::ContractReader;
pub use source::{getabi_url, AbiSource};
pub use transport::{deserialize_response, MockTransport, RecordedRequest, Transport};

#[cfg(feature = "http")]
pub use source::ExplorerClient;
#[cfg(feature = "http")]
pub use transport::HttpTransport;
