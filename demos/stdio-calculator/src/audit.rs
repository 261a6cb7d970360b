use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use jsonrpc_kernel::prelude::*;
use tracing::info;

/// Counts calls before dispatch and logs each outcome once the reply is out.
///
/// Declared as `"audit"` or `"audit:<label>"`.
#[derive(Default)]
pub struct AuditMiddleware {
    calls: AtomicU64,
}

impl AuditMiddleware {
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Middleware for AuditMiddleware {
    async fn before_dispatch(&self, request: &Request, parameters: &[String]) -> Result<(), BoxError> {
        let count = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
        info!(
            method = request.method(),
            label = parameters.first().map(String::as_str),
            count,
            "audit: dispatching"
        );
        Ok(())
    }

    async fn terminate(&self, request: &Request, response: &Response) -> Result<(), BoxError> {
        info!(
            method = request.method(),
            id = ?request.id(),
            error = response.is_error(),
            "audit: completed"
        );
        Ok(())
    }
}
