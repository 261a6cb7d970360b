use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error_codes;

/// Error type crossing every collaborator seam (handlers, middleware, host hooks).
///
/// The kernel downcasts it to [`ResponseError`] to tell protocol-visible
/// failures apart from unexpected ones.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// JSON-RPC error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonRpcErrorCode {
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    InternalError,
    Custom(i64),
}

impl JsonRpcErrorCode {
    pub fn code(&self) -> i64 {
        match self {
            JsonRpcErrorCode::ParseError => error_codes::PARSE_ERROR,
            JsonRpcErrorCode::InvalidRequest => error_codes::INVALID_REQUEST,
            JsonRpcErrorCode::MethodNotFound => error_codes::METHOD_NOT_FOUND,
            JsonRpcErrorCode::InvalidParams => error_codes::INVALID_PARAMS,
            JsonRpcErrorCode::InternalError => error_codes::INTERNAL_ERROR,
            JsonRpcErrorCode::Custom(code) => *code,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            JsonRpcErrorCode::ParseError => "Parse error",
            JsonRpcErrorCode::InvalidRequest => "Invalid Request",
            JsonRpcErrorCode::MethodNotFound => "Method not found",
            JsonRpcErrorCode::InvalidParams => "Invalid params",
            JsonRpcErrorCode::InternalError => "Internal error",
            JsonRpcErrorCode::Custom(code) if error_codes::is_reserved(*code) => "Server error",
            JsonRpcErrorCode::Custom(_) => "Application error",
        }
    }
}

impl From<i64> for JsonRpcErrorCode {
    fn from(code: i64) -> Self {
        match code {
            error_codes::PARSE_ERROR => JsonRpcErrorCode::ParseError,
            error_codes::INVALID_REQUEST => JsonRpcErrorCode::InvalidRequest,
            error_codes::METHOD_NOT_FOUND => JsonRpcErrorCode::MethodNotFound,
            error_codes::INVALID_PARAMS => JsonRpcErrorCode::InvalidParams,
            error_codes::INTERNAL_ERROR => JsonRpcErrorCode::InternalError,
            other => JsonRpcErrorCode::Custom(other),
        }
    }
}

impl fmt::Display for JsonRpcErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

/// JSON-RPC error object as it appears on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// A protocol-visible failure.
///
/// Everything the caller is meant to see (malformed payloads, unknown
/// methods, handler-declared errors) is a `ResponseError`. These are never
/// reported to the failure reporter; they are expected conditions, not faults.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ResponseError {
    code: JsonRpcErrorCode,
    message: String,
    data: Option<Value>,
}

impl ResponseError {
    /// Create an error with an explicit code and message
    pub fn new(code: impl Into<JsonRpcErrorCode>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }

    /// Create an error carrying the code's default message
    pub fn from_code(code: JsonRpcErrorCode) -> Self {
        Self::new(code, code.message())
    }

    pub fn parse_error() -> Self {
        Self::from_code(JsonRpcErrorCode::ParseError)
    }

    pub fn invalid_request() -> Self {
        Self::from_code(JsonRpcErrorCode::InvalidRequest)
    }

    pub fn method_not_found() -> Self {
        Self::from_code(JsonRpcErrorCode::MethodNotFound)
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(JsonRpcErrorCode::InvalidParams, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(JsonRpcErrorCode::InternalError, message)
    }

    /// Attach structured data, returned to the caller under `error.data`
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn code(&self) -> JsonRpcErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn to_error_object(&self) -> JsonRpcErrorObject {
        JsonRpcErrorObject {
            code: self.code.code(),
            message: self.message.clone(),
            data: self.data.clone(),
        }
    }
}

impl Default for ResponseError {
    fn default() -> Self {
        Self::from_code(JsonRpcErrorCode::InternalError)
    }
}

impl From<ResponseError> for JsonRpcErrorObject {
    fn from(error: ResponseError) -> Self {
        JsonRpcErrorObject {
            code: error.code.code(),
            message: error.message,
            data: error.data,
        }
    }
}

impl From<JsonRpcErrorObject> for ResponseError {
    fn from(object: JsonRpcErrorObject) -> Self {
        Self {
            code: object.code.into(),
            message: object.message,
            data: object.data,
        }
    }
}

/// A call panicked after routing, in its middleware, resolution or handler
#[derive(Debug, Error)]
#[error("handler for '{method}' panicked: {message}")]
pub struct HandlerPanic {
    pub method: String,
    pub message: String,
}

/// Failure while resolving a route action to an invocable handler
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no controller registered as '{0}'")]
    UnknownController(String),

    #[error("controller '{controller}' has no method '{method}'")]
    UnknownMethod { controller: String, method: String },
}

/// Failure raised by a post-response hook.
///
/// These are not caught by the kernel; they surface to the host runtime.
#[derive(Debug, Error)]
pub enum TerminateError {
    #[error("middleware '{name}' failed to terminate: {source}")]
    Middleware {
        name: String,
        #[source]
        source: BoxError,
    },

    #[error("host runtime failed to terminate: {0}")]
    Host(#[source] BoxError),
}
