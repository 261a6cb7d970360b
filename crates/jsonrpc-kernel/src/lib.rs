//! # JSON-RPC 2.0 Request Kernel
//!
//! A transport-agnostic JSON-RPC 2.0 core. It parses raw payloads into
//! validated requests, routes them by method name, invokes the bound handler
//! inside a failure-isolating pipeline and renders the result or error into
//! the response envelope.
//!
//! The host runtime (listener, process lifecycle, handler instances) stays
//! outside this crate and plugs in through [`HostRuntime`].
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use jsonrpc_kernel::prelude::*;
//! use serde_json::{Value, json};
//!
//! struct Add;
//!
//! #[async_trait]
//! impl Handler for Add {
//!     async fn call(&self, request: &Request) -> Result<Value, BoxError> {
//!         let a = request.get_param_index(0).and_then(Value::as_i64).unwrap_or(0);
//!         let b = request.get_param_index(1).and_then(Value::as_i64).unwrap_or(0);
//!         Ok(json!(a + b))
//!     }
//! }
//!
//! # async fn example() {
//! let mut routes = RouteTable::new();
//! routes.handler("add", Add);
//!
//! let kernel = Kernel::new(routes, Arc::new(Container::new()));
//! let response = kernel
//!     .handle(br#"{"jsonrpc":"2.0","method":"add","params":[1,2],"id":1}"#)
//!     .await;
//! assert_eq!(response.to_json().unwrap(), r#"{"jsonrpc":"2.0","id":1,"result":3}"#);
//! # }
//! ```

pub mod config;
pub mod error;
pub mod handler;
pub mod host;
pub mod kernel;
pub mod middleware;
pub mod prelude;
pub mod reporter;
pub mod request;
pub mod response;
pub mod routing;
pub mod types;

// Re-export main types
pub use config::KernelConfig;
pub use error::{BoxError, JsonRpcErrorCode, JsonRpcErrorObject, ResponseError, TerminateError};
pub use handler::{Controller, FunctionHandler, Handler};
pub use host::{Container, HostRuntime};
pub use kernel::{Exchange, Kernel, Stage};
pub use middleware::{Middleware, MiddlewareRegistry};
pub use reporter::{FailureReporter, Reporter, Severity, TracingReporter};
pub use request::Request;
pub use response::Response;
pub use routing::{Action, Route, RouteTable};
pub use types::{JsonRpcVersion, RequestId, RequestParams};

/// JSON-RPC 2.0 version constant
pub const JSONRPC_VERSION: &str = "2.0";

/// Standard JSON-RPC 2.0 error codes
pub mod error_codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;

    // Reserved for the protocol: -32768 to -32000
    pub const RESERVED_START: i64 = -32768;
    pub const RESERVED_END: i64 = -32000;

    /// Application-defined codes must stay outside the reserved range
    pub fn is_reserved(code: i64) -> bool {
        (RESERVED_START..=RESERVED_END).contains(&code)
    }
}
