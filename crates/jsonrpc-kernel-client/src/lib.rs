//! # JSON-RPC Kernel Client
//!
//! Builders for outbound JSON-RPC 2.0 messages, the counterpart of the
//! `jsonrpc-kernel` dispatcher.
//!
//! ```rust
//! use jsonrpc_kernel_client::{Notification, Request};
//!
//! let call = Request::new("add").params(vec![serde_json::json!(1), serde_json::json!(2)]).id(1i64);
//! assert_eq!(
//!     call.to_json().unwrap(),
//!     r#"{"jsonrpc":"2.0","method":"add","params":[1,2],"id":1}"#
//! );
//!
//! let ping = Notification::new("ping");
//! assert_eq!(ping.to_json().unwrap(), r#"{"jsonrpc":"2.0","method":"ping"}"#);
//! ```

pub mod error;
pub mod notification;
pub mod request;

pub use error::{ClientError, ClientResult};
pub use notification::Notification;
pub use request::Request;
