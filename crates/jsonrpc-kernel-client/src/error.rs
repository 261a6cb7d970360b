//! Error types for client-side message handling

use jsonrpc_kernel::{RequestId, ResponseError};
use thiserror::Error;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The reply was not valid JSON or not a JSON-RPC response
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered with an error object
    #[error("Server error (code {}): {}", .0.code().code(), .0.message())]
    Server(ResponseError),

    /// The reply belongs to another request
    #[error("Response id {actual:?} does not match request id {expected}")]
    Mismatch {
        expected: RequestId,
        actual: Option<RequestId>,
    },
}
