//! Block-explorer `getabi` response envelope

use serde::{Deserialize, Serialize};

use crate::model::AbiCollection;
use crate::AbiError;

/// Response of an Etherscan-compatible `module=contract&action=getabi` query.
///
/// `result` holds the ABI as JSON text on success and an error message otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerResponse {
    /// `"1"` on success
    pub status: String,
    /// `"OK"` on success
    pub message: String,
    /// ABI JSON text, or an error description
    pub result: String,
}

impl ExplorerResponse {
    /// Parse the envelope
    pub fn from_json(json: &str) -> Result<Self, AbiError> {
        Ok(serde_json::from_str(json)?)
    }

    /// True when the explorer reported success
    pub fn is_ok(&self) -> bool {
        self.status == "1" && self.message == "OK"
    }

    /// Parse the embedded ABI document
    pub fn into_collection(self) -> Result<AbiCollection, AbiError> {
        if !self.is_ok() {
            return Err(AbiError::Explorer(format!("{}: {}", self.message, self.result)));
        }
        AbiCollection::from_json(&self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_ok() {
        let json = r#"{"status":"1","message":"OK","result":"[{\"type\":\"function\",\"name\":\"decimals\",\"inputs\":[],\"outputs\":[{\"name\":\"\",\"type\":\"uint8\"}],\"stateMutability\":\"view\"}]"}"#;
        let response = ExplorerResponse::from_json(json).unwrap();
        assert!(response.is_ok());

        let abi = response.into_collection().unwrap();
        assert_eq!(abi.len(), 1);
        assert_eq!(abi.find("decimals").unwrap().outputs[0].kind.tag(), "uint8");
    }

    #[test]
    fn test_envelope_error() {
        let json = r#"{"status":"0","message":"NOTOK","result":"Invalid API Key"}"#;
        let response = ExplorerResponse::from_json(json).unwrap();
        assert!(!response.is_ok());
        match response.into_collection() {
            Err(AbiError::Explorer(msg)) => assert!(msg.contains("Invalid API Key")),
            other => panic!("expected Explorer error, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope_unverified_contract() {
        let response = ExplorerResponse {
            status: "0".to_string(),
            message: "NOTOK".to_string(),
            result: "Contract source code not verified".to_string(),
        };
        assert!(matches!(response.into_collection(), Err(AbiError::Explorer(_))));
    }

    #[test]
    fn test_envelope_malformed_result() {
        let response = ExplorerResponse {
            status: "1".to_string(),
            message: "OK".to_string(),
            result: "not json".to_string(),
        };
        assert!(matches!(response.into_collection(), Err(AbiError::Json(_))));
    }
}
