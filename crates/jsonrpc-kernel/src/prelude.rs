//! # JSON-RPC Kernel Prelude
//!
//! Convenient re-exports of the most commonly used types.
//!
//! ```rust
//! use jsonrpc_kernel::prelude::*;
//! ```

pub use crate::config::KernelConfig;
pub use crate::error::{BoxError, JsonRpcErrorCode, ResponseError};
pub use crate::handler::{Controller, FunctionHandler, Handler};
pub use crate::host::{Container, HostRuntime};
pub use crate::kernel::{Exchange, Kernel};
pub use crate::middleware::{Middleware, MiddlewareRegistry};
pub use crate::request::Request;
pub use crate::response::Response;
pub use crate::routing::{Action, Route, RouteTable};
pub use crate::types::{RequestId, RequestParams};

pub use crate::error_codes::*;
