use std::fmt;

use jsonrpc_kernel::{JsonRpcVersion, RequestId, RequestParams, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{ClientError, ClientResult};

/// An outbound JSON-RPC request that expects a reply.
///
/// Always carries an id so the reply can be correlated; without an explicit
/// one a random UUID v4 string is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(rename = "jsonrpc")]
    version: JsonRpcVersion,
    method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<RequestParams>,
    id: RequestId,
}

impl Request {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            method: method.into(),
            params: None,
            id: RequestId::String(Uuid::new_v4().to_string()),
        }
    }

    pub fn params(mut self, params: impl Into<RequestParams>) -> Self {
        self.params = Some(params.into());
        self
    }

    /// Replace the generated id.
    ///
    /// A null id is ignored and the generated one kept, since a reply
    /// echoing `"id": null` cannot be told apart from an uncorrelated error.
    pub fn id(mut self, id: impl Into<RequestId>) -> Self {
        let id = id.into();
        if !id.is_null() {
            self.id = id;
        }
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn get_params(&self) -> Option<&RequestParams> {
        self.params.as_ref()
    }

    pub fn get_id(&self) -> &RequestId {
        &self.id
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Whether `response` answers this request
    pub fn correlates(&self, response: &Response) -> bool {
        response.id() == Some(&self.id)
    }

    /// Decode a reply to this request into its result
    pub fn read_response(&self, payload: &[u8]) -> ClientResult<Value> {
        let response: Response = serde_json::from_slice(payload)?;
        if !self.correlates(&response) {
            return Err(ClientError::Mismatch {
                expected: self.id.clone(),
                actual: response.id().cloned(),
            });
        }

        match response.error_object() {
            Some(error) => Err(ClientError::Server(error.clone().into())),
            None => Ok(response.result().cloned().unwrap_or(Value::Null)),
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
