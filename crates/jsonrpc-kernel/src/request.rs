use std::sync::Arc;

use serde_json::{Map, Value};

use crate::config::KernelConfig;
use crate::error::ResponseError;
use crate::routing::Route;
use crate::types::{JsonRpcVersion, RequestId, RequestParams};

/// Members that must be present (by key) in every inbound call
const REQUIRED_MEMBERS: [&str; 2] = ["jsonrpc", "method"];

/// An inbound JSON-RPC call, validated and ready for routing
#[derive(Debug, Clone)]
pub struct Request {
    version: JsonRpcVersion,
    method: String,
    params: Option<RequestParams>,
    id: Option<RequestId>,
    route: Option<Arc<Route>>,
}

impl Request {
    /// Parse a raw payload with the default configuration
    pub fn parse(payload: &[u8]) -> Result<Self, ResponseError> {
        Self::parse_with(payload, &KernelConfig::default())
    }

    /// Parse a raw payload.
    ///
    /// Fails with a parse error when the payload is not a JSON object and
    /// with an invalid-request error when a required member is missing or
    /// a member has the wrong shape.
    pub fn parse_with(payload: &[u8], config: &KernelConfig) -> Result<Self, ResponseError> {
        let members = match serde_json::from_slice::<Value>(payload) {
            Ok(Value::Object(members)) => members,
            Ok(_) | Err(_) => return Err(ResponseError::parse_error()),
        };

        Self::from_members(members, config)
    }

    /// Build a request from an already decoded JSON object
    pub fn from_members(
        mut members: Map<String, Value>,
        config: &KernelConfig,
    ) -> Result<Self, ResponseError> {
        if REQUIRED_MEMBERS.iter().any(|key| !members.contains_key(*key)) {
            return Err(ResponseError::invalid_request());
        }

        if config.strict_version
            && members.get("jsonrpc").and_then(Value::as_str) != Some(crate::JSONRPC_VERSION)
        {
            return Err(ResponseError::invalid_request());
        }

        let method = match members.remove("method") {
            Some(Value::String(method)) if !method.is_empty() => method,
            _ => return Err(ResponseError::invalid_request()),
        };

        let params = members
            .remove("params")
            .map(RequestParams::try_from)
            .transpose()
            .map_err(|_| ResponseError::invalid_request())?;

        let id = match members.remove("id") {
            Some(value) => {
                Some(RequestId::from_value(value).ok_or_else(ResponseError::invalid_request)?)
            }
            None => None,
        };

        Ok(Self {
            version: JsonRpcVersion::V2_0,
            method,
            params,
            id,
            route: None,
        })
    }

    /// Build a request directly, bypassing payload parsing
    pub fn new(method: impl Into<String>, params: Option<RequestParams>, id: Option<RequestId>) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            method: method.into(),
            params,
            id,
            route: None,
        }
    }

    pub fn version(&self) -> JsonRpcVersion {
        self.version
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn params(&self) -> Option<&RequestParams> {
        self.params.as_ref()
    }

    /// `None` when the payload had no `id` member at all
    pub fn id(&self) -> Option<&RequestId> {
        self.id.as_ref()
    }

    /// A call without an `id` member expects no reply
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }

    /// Get a named parameter, following dotted paths into nested values
    pub fn get_param(&self, key: &str) -> Option<&Value> {
        self.params.as_ref()?.get(key)
    }

    /// Get a named parameter or fall back to `default`
    pub fn get_param_or(&self, key: &str, default: Value) -> Value {
        self.get_param(key).cloned().unwrap_or(default)
    }

    /// Get a positional parameter (if params are an array)
    pub fn get_param_index(&self, index: usize) -> Option<&Value> {
        self.params.as_ref()?.get_index(index)
    }

    /// The route this request was matched to, once routed
    pub fn route(&self) -> Option<&Arc<Route>> {
        self.route.as_ref()
    }

    pub(crate) fn set_route(&mut self, route: Arc<Route>) {
        self.route = Some(route);
    }
}
