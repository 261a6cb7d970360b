//! Which failures reach the reporter, and how they are logged

use std::error::Error;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jsonrpc_kernel::prelude::*;
use jsonrpc_kernel::{FailureReporter, JsonRpcErrorObject, Reporter, Severity};
use serde_json::{Value, json};
use tracing_test::traced_test;

#[derive(Debug, thiserror::Error)]
#[error("ledger write failed")]
struct LedgerWrite(#[source] std::io::Error);

#[derive(Debug, thiserror::Error)]
#[error("cache miss")]
struct CacheMiss;

struct Ledger;

#[async_trait]
impl Controller for Ledger {
    async fn call(&self, method: &str, _request: &Request) -> Result<Value, BoxError> {
        match method {
            "write" => Err(LedgerWrite(std::io::Error::other("disk offline")).into()),
            "lookup" => Err(CacheMiss.into()),
            "reject" => Err(ResponseError::invalid_params("quiet please").into()),
            "explode" => panic!("boom"),
            _ => Ok(json!(null)),
        }
    }
}

fn routes() -> RouteTable {
    let mut routes = RouteTable::new();
    for method in ["write", "lookup", "reject", "explode"] {
        routes.controller(method, "Ledger", method);
    }
    routes.add(Route::new("read", Action::controller("Ledger", "read")).middleware(["ghost"]));
    routes
}

fn kernel() -> Kernel {
    Kernel::new(routes(), Arc::new(Container::new().controller("Ledger", Ledger)))
}

async fn error_of(kernel: &Kernel, method: &str) -> JsonRpcErrorObject {
    let payload = format!(r#"{{"jsonrpc":"2.0","method":"{method}","id":1}}"#);
    kernel
        .handle(payload.as_bytes())
        .await
        .error_object()
        .cloned()
        .unwrap()
}

#[tokio::test]
#[traced_test]
async fn test_unexpected_failures_are_logged_with_sources() {
    let error = error_of(&kernel(), "write").await;

    assert_eq!(error.code, INTERNAL_ERROR);
    assert_eq!(error.message, "ledger write failed");
    assert!(logs_contain("JSON-RPC call failed"));
    assert!(logs_contain("severity=error"));
    assert!(logs_contain("disk offline"));
}

#[tokio::test]
#[traced_test]
async fn test_protocol_errors_are_not_logged_as_failures() {
    let error = error_of(&kernel(), "reject").await;

    assert_eq!(error.code, INVALID_PARAMS);
    assert_eq!(error.message, "quiet please");
    assert!(!logs_contain("JSON-RPC call failed"));
}

#[tokio::test]
#[traced_test]
async fn test_panics_are_critical() {
    let error = error_of(&kernel(), "explode").await;

    assert_eq!(error.code, INTERNAL_ERROR);
    assert_eq!(error.message, "handler for 'explode' panicked: boom");
    assert!(logs_contain("severity=critical"));
}

#[tokio::test]
#[traced_test]
async fn test_hidden_messages_are_still_logged() {
    let kernel = kernel().with_config(KernelConfig::new().expose_internal_errors(false));
    let error = error_of(&kernel, "write").await;

    assert_eq!(error.message, "Internal error");
    assert!(error.data.is_none());
    assert!(logs_contain("ledger write failed"));
}

#[tokio::test]
#[traced_test]
async fn test_unknown_middleware_is_skipped_with_warning() {
    let response = kernel()
        .handle(br#"{"jsonrpc":"2.0","method":"read","id":1}"#)
        .await;

    assert_eq!(response.result(), Some(&Value::Null));
    assert!(logs_contain("declares unknown middleware 'ghost'"));
}

#[derive(Default)]
struct Collecting(Mutex<Vec<(Severity, String)>>);

impl FailureReporter for Collecting {
    fn log(&self, severity: Severity, failure: &(dyn Error + 'static)) {
        self.0.lock().unwrap().push((severity, failure.to_string()));
    }
}

#[tokio::test]
async fn test_custom_reporter_with_dont_report_list() {
    let sink = Arc::new(Collecting::default());
    let kernel = kernel().with_reporter(Reporter::new(sink.clone()).dont_report::<CacheMiss>());

    for method in ["write", "lookup", "reject", "explode"] {
        error_of(&kernel, method).await;
    }

    let cache_miss = error_of(&kernel, "lookup").await;
    assert_eq!(cache_miss.code, INTERNAL_ERROR);
    assert_eq!(cache_miss.message, "cache miss");

    assert_eq!(
        *sink.0.lock().unwrap(),
        [
            (Severity::Error, "ledger write failed".to_string()),
            (
                Severity::Critical,
                "handler for 'explode' panicked: boom".to_string()
            ),
        ]
    );
}
