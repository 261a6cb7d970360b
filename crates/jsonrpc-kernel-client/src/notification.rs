use std::fmt;

use jsonrpc_kernel::{JsonRpcVersion, RequestParams};
use serde::{Deserialize, Serialize};

/// An outbound JSON-RPC notification.
///
/// Never carries an `id`: the receiver sends no reply and nothing is matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "jsonrpc")]
    version: JsonRpcVersion,
    method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<RequestParams>,
}

impl Notification {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            method: method.into(),
            params: None,
        }
    }

    pub fn params(mut self, params: impl Into<RequestParams>) -> Self {
        self.params = Some(params.into());
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn get_params(&self) -> Option<&RequestParams> {
        self.params.as_ref()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
