//! Subcommands

pub mod args;
pub mod decode;
pub mod encode;
pub mod read;
pub mod selector;

use std::path::Path;

use vinculum_abi::{AbiCollection, ExplorerResponse};

use crate::CliError;

/// Load an ABI file: either a bare JSON array or a saved explorer `getabi` response
pub fn load_abi(path: &Path) -> Result<AbiCollection, CliError> {
    let content = std::fs::read_to_string(path)?;
    let abi = if content.trim_start().starts_with('[') {
        AbiCollection::from_json(&content)?
    } else {
        ExplorerResponse::from_json(&content)?.into_collection()?
    };
    tracing::debug!(path = %path.display(), entries = abi.len(), "ABI loaded");
    Ok(abi)
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::path::PathBuf;

    pub const ERC20_ABI: &str = r#"[
        {"type":"function","name":"name","inputs":[],"outputs":[{"name":"","type":"string"}],"stateMutability":"view"},
        {"type":"function","name":"balanceOf","inputs":[{"name":"","type":"address"}],"outputs":[{"name":"","type":"uint256"}],"stateMutability":"view"},
        {"type":"function","name":"transfer","inputs":[{"name":"dst","type":"address"},{"name":"wad","type":"uint256"}],"outputs":[{"name":"","type":"bool"}],"stateMutability":"nonpayable"},
        {"type":"event","name":"Deposit","inputs":[{"name":"dst","type":"address","indexed":true},{"name":"wad","type":"uint256","indexed":false}],"anonymous":false}
    ]"#;

    pub fn write_abi(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("abi.json");
        std::fs::write(&path, content).unwrap();
        path
    }
}
