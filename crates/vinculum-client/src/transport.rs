//! Transport layer for RPC communication

use std::collections::HashMap;
#[cfg(feature = "http")]
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ClientError;

/// Transport trait for RPC communication (object-safe)
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send an RPC request and get the JSON `result`
    async fn request_json(&self, method: &str, params: Vec<Value>) -> Result<Value, ClientError>;
}

/// Helper to deserialize response
pub fn deserialize_response<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ClientError> {
    serde_json::from_value(value).map_err(|e| ClientError::Serialization(e.to_string()))
}

/// Recorded request: method and params
pub type RecordedRequest = (String, Vec<Value>);

/// Mock transport for testing.
///
/// Clones share their responses and request log, so a test can keep a
/// handle after moving one into a reader.
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<HashMap<String, Value>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    /// Create a new mock transport with no canned responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a mock response for a specific method
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (only possible if another thread panicked while holding the lock).
    pub fn set_response(&self, method: &str, response: Value) {
        self.responses
            .lock()
            .expect("MockTransport mutex poisoned")
            .insert(method.to_string(), response);
    }

    /// Requests received so far, oldest first
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("MockTransport mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request_json(&self, method: &str, params: Vec<Value>) -> Result<Value, ClientError> {
        self.requests
            .lock()
            .map_err(|_| ClientError::Transport("MockTransport mutex poisoned".to_string()))?
            .push((method.to_string(), params));

        let response = self
            .responses
            .lock()
            .map_err(|_| ClientError::Transport("MockTransport mutex poisoned".to_string()))?
            .get(method)
            .cloned();

        response.ok_or_else(|| ClientError::Rpc {
            code: -32601,
            message: format!("Method not found: {}", method),
        })
    }
}

/// JSON-RPC 2.0 request envelope
#[cfg_attr(not(feature = "http"), allow(dead_code))]
#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Vec<Value>,
}

/// JSON-RPC 2.0 response envelope
#[cfg_attr(not(feature = "http"), allow(dead_code))]
#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

#[cfg_attr(not(feature = "http"), allow(dead_code))]
#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

#[cfg_attr(not(feature = "http"), allow(dead_code))]
impl JsonRpcResponse {
    /// The `result` member, or the node's error
    fn into_result(self) -> Result<Value, ClientError> {
        if let Some(error) = self.error {
            return Err(ClientError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        self.result.ok_or_else(|| ClientError::Rpc {
            code: -32603,
            message: "No result in response".to_string(),
        })
    }
}

/// HTTP transport for real RPC communication
#[cfg(feature = "http")]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
    request_id: AtomicU64,
}

#[cfg(feature = "http")]
impl HttpTransport {
    /// Create a new HTTP transport; `timeout` bounds each request
    pub fn new(url: &str, timeout: std::time::Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            url: url.to_string(),
            request_id: AtomicU64::new(1),
        })
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl Transport for HttpTransport {
    async fn request_json(&self, method: &str, params: Vec<Value>) -> Result<Value, ClientError> {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: self.request_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };
        tracing::debug!(url = %self.url, method, id = request.id, "sending JSON-RPC request");

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Http(status.as_u16()));
        }

        let envelope: JsonRpcResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        envelope.into_result().inspect_err(|e| {
            tracing::warn!(method, "node returned an error: {e}");
        })
    }
}
