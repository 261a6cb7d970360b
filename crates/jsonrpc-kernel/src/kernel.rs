//! The request kernel
//!
//! Each call to [`Kernel::handle`] walks one payload through
//! `Received -> Parsed -> Routed -> Invoked -> Responded`. Every failure on
//! the way is caught here and rendered into the response envelope; nothing
//! escapes `handle`. [`Kernel::terminate`] runs afterwards, once the host
//! runtime has sent the response.
//!
//! The kernel keeps no per-call state, so one instance can serve any number
//! of concurrent calls. Routes are frozen when the kernel is built.

use std::any::Any;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use serde_json::Value;
use tracing::debug;

use crate::config::KernelConfig;
use crate::error::{BoxError, HandlerPanic, ResponseError, TerminateError};
use crate::host::HostRuntime;
use crate::middleware::{MiddlewareEntry, MiddlewareRegistry};
use crate::reporter::{Reporter, Severity};
use crate::request::Request;
use crate::response::Response;
use crate::routing::{Route, RouteTable};

/// Progress of one call through the kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Received,
    Parsed,
    Routed,
    Invoked,
    Responded,
    Terminated,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Received => "received",
            Stage::Parsed => "parsed",
            Stage::Routed => "routed",
            Stage::Invoked => "invoked",
            Stage::Responded => "responded",
            Stage::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

/// Everything a handled call produced.
///
/// `request` is `None` when the payload could not be parsed.
/// `failed_at` is the last stage reached before a failure, if one occurred.
#[derive(Debug)]
pub struct Exchange {
    pub request: Option<Request>,
    pub response: Response,
    pub failed_at: Option<Stage>,
}

impl Exchange {
    /// Whether the caller is waiting for this response
    pub fn expects_reply(&self) -> bool {
        self.request
            .as_ref()
            .is_none_or(|request| !request.is_notification())
    }
}

/// Dispatches raw JSON-RPC payloads to routed handlers
pub struct Kernel {
    routes: Arc<RouteTable>,
    host: Arc<dyn HostRuntime>,
    middleware: MiddlewareRegistry,
    reporter: Reporter,
    config: KernelConfig,
}

impl Kernel {
    pub fn new(routes: RouteTable, host: Arc<dyn HostRuntime>) -> Self {
        Self {
            routes: Arc::new(routes),
            host,
            middleware: MiddlewareRegistry::default(),
            reporter: Reporter::default(),
            config: KernelConfig::default(),
        }
    }

    pub fn with_middleware(mut self, middleware: MiddlewareRegistry) -> Self {
        self.middleware = middleware;
        self
    }

    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_config(mut self, config: KernelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Handle one payload and return its response
    pub async fn handle(&self, payload: &[u8]) -> Response {
        self.process(payload).await.response
    }

    /// Handle one payload and return the serialised response
    pub async fn handle_bytes(&self, payload: &[u8]) -> Vec<u8> {
        encode(&self.handle(payload).await)
    }

    /// Handle one payload, keeping the parsed request for [`Kernel::terminate`]
    pub async fn process(&self, payload: &[u8]) -> Exchange {
        debug!(stage = %Stage::Received, bytes = payload.len(), "JSON-RPC payload received");

        let mut request = None;
        let mut stage = Stage::Received;
        let outcome = self.run(payload, &mut request, &mut stage).await;

        let mut response = Response::new();
        let failed_at = match outcome {
            Ok(result) => {
                response.set_result(result);
                None
            }
            Err(failure) => {
                response.set_response_error(self.render(failure, request.as_ref()));
                Some(stage)
            }
        };

        if let Some(request) = &request {
            response.prepare(request);
        }

        debug!(
            stage = %Stage::Responded,
            method = request.as_ref().map(Request::method),
            error = response.is_error(),
            "JSON-RPC response built"
        );

        Exchange {
            request,
            response,
            failed_at,
        }
    }

    async fn run(
        &self,
        payload: &[u8],
        slot: &mut Option<Request>,
        stage: &mut Stage,
    ) -> Result<Value, BoxError> {
        let request = slot.insert(Request::parse_with(payload, &self.config)?);
        *stage = Stage::Parsed;
        debug!(stage = %Stage::Parsed, method = request.method(), id = ?request.id());

        let route = self.routes.match_request(request)?;
        request.set_route(route.clone());
        *stage = Stage::Routed;
        debug!(stage = %Stage::Routed, method = route.method(), name = ?route.get_name());

        let request: &Request = request;
        let result = if self.config.catch_panics {
            AssertUnwindSafe(self.dispatch(request, &route))
                .catch_unwind()
                .await
                .map_err(|panic| HandlerPanic {
                    method: request.method().to_string(),
                    message: panic_message(panic),
                })?
        } else {
            self.dispatch(request, &route).await
        };

        debug!(stage = %Stage::Invoked, method = request.method(), ok = result.is_ok());
        let value = result?;
        *stage = Stage::Invoked;
        Ok(value)
    }

    /// Route middleware, then resolution, then the handler itself
    async fn dispatch(&self, request: &Request, route: &Arc<Route>) -> Result<Value, BoxError> {
        for entry in self.gather_middleware(Some(route)) {
            entry
                .middleware
                .before_dispatch(request, &entry.parameters)
                .await?;
        }

        let handler = self.host.resolve(route.action())?;
        handler.call(request).await
    }

    /// Translate a failure into a protocol-visible error.
    ///
    /// Protocol-visible failures pass through untouched. Anything else is
    /// reported first, then wrapped as an internal error.
    fn render(&self, failure: BoxError, request: Option<&Request>) -> ResponseError {
        let failure = match failure.downcast::<ResponseError>() {
            Ok(error) => return *error,
            Err(failure) => failure,
        };

        let severity = if failure.is::<HandlerPanic>() {
            Severity::Critical
        } else {
            Severity::Error
        };
        debug!(
            method = request.map(Request::method),
            %severity,
            "Wrapping unexpected failure as internal error"
        );
        self.reporter.report(severity, &*failure);

        if self.config.expose_internal_errors {
            ResponseError::internal(failure.to_string())
        } else {
            ResponseError::default()
        }
    }

    fn gather_middleware(&self, route: Option<&Arc<Route>>) -> Vec<MiddlewareEntry> {
        if self.host.should_skip_middleware() {
            return Vec::new();
        }
        route
            .map(|route| self.middleware.gather(route))
            .unwrap_or_default()
    }

    /// Run post-response hooks.
    ///
    /// Terminable middleware of the matched route runs in declaration order
    /// (unless the host runtime skips middleware), then the host runtime's
    /// own hook. Hook failures are not caught: the first one is returned.
    pub async fn terminate(
        &self,
        request: Option<&Request>,
        response: &Response,
    ) -> Result<(), TerminateError> {
        if let Some(request) = request {
            for entry in self.gather_middleware(request.route()) {
                entry
                    .middleware
                    .terminate(request, response)
                    .await
                    .map_err(|source| TerminateError::Middleware {
                        name: entry.name.clone(),
                        source,
                    })?;
            }
        }

        self.host.terminate().await.map_err(TerminateError::Host)?;
        debug!(stage = %Stage::Terminated, method = request.map(Request::method));
        Ok(())
    }

    /// [`Kernel::terminate`] for a finished [`Exchange`]
    pub async fn terminate_exchange(&self, exchange: &Exchange) -> Result<(), TerminateError> {
        self.terminate(exchange.request.as_ref(), &exchange.response)
            .await
    }
}

impl fmt::Debug for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kernel")
            .field("routes", &self.routes.len())
            .field("middleware", &self.middleware.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Serialise a response, falling back to a fixed internal-error envelope
pub fn encode(response: &Response) -> Vec<u8> {
    response.to_vec().unwrap_or_else(|_| {
        br#"{"jsonrpc":"2.0","id":null,"error":{"code":-32603,"message":"Internal error"}}"#
            .to_vec()
    })
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::{Controller, FunctionHandler, Handler};
    use crate::host::Container;
    use crate::middleware::Middleware;
    use crate::reporter::FailureReporter;
    use crate::routing::{Action, Route};
    use async_trait::async_trait;
    use serde_json::json;
    use std::error::Error;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Collecting(Mutex<Vec<(Severity, String)>>);

    impl FailureReporter for Collecting {
        fn log(&self, severity: Severity, failure: &(dyn Error + 'static)) {
            self.0.lock().unwrap().push((severity, failure.to_string()));
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("database unavailable")]
    struct DatabaseDown;

    struct Calculator;

    #[async_trait]
    impl Controller for Calculator {
        async fn call(&self, method: &str, request: &Request) -> Result<Value, BoxError> {
            let operand = |index| {
                request
                    .get_param_index(index)
                    .and_then(Value::as_i64)
                    .ok_or_else(|| ResponseError::invalid_params(format!("operand {index} missing")))
            };

            match method {
                "add" => Ok(json!(operand(0)? + operand(1)?)),
                "divide" => {
                    let divisor = operand(1)?;
                    if divisor == 0 {
                        return Err(ResponseError::new(4001i64, "division by zero")
                            .with_data(json!({"dividend": operand(0)?}))
                            .into());
                    }
                    Ok(json!(operand(0)? / divisor))
                }
                "fail" => Err(DatabaseDown.into()),
                "panic" => panic!("calculator exploded"),
                _ => Err(ResponseError::method_not_found().into()),
            }
        }
    }

    #[derive(Default)]
    struct Trace(Mutex<Vec<String>>);

    struct Recording {
        id: &'static str,
        trace: Arc<Trace>,
        fail_terminate: bool,
    }

    #[async_trait]
    impl Middleware for Recording {
        async fn before_dispatch(&self, request: &Request, _parameters: &[String]) -> Result<(), BoxError> {
            self.trace
                .0
                .lock()
                .unwrap()
                .push(format!("before:{}:{}", self.id, request.method()));
            Ok(())
        }

        async fn terminate(&self, _request: &Request, response: &Response) -> Result<(), BoxError> {
            self.trace
                .0
                .lock()
                .unwrap()
                .push(format!("terminate:{}:{}", self.id, response.is_error()));
            if self.fail_terminate {
                return Err(DatabaseDown.into());
            }
            Ok(())
        }
    }

    struct Guard;

    #[async_trait]
    impl Middleware for Guard {
        async fn before_dispatch(&self, _request: &Request, parameters: &[String]) -> Result<(), BoxError> {
            if parameters.iter().any(|p| p == "deny") {
                return Err(ResponseError::new(4003i64, "Permission denied").into());
            }
            if parameters.iter().any(|p| p == "explode") {
                panic!("guard exploded");
            }
            Ok(())
        }
    }

    fn routes() -> RouteTable {
        let mut routes = RouteTable::new();
        for method in ["add", "divide", "fail", "panic"] {
            routes.controller(method, "Calculator", method);
        }
        routes.handler(
            "echo",
            FunctionHandler::new(|request: &Request| {
                let params = request.params().map(|p| p.to_value());
                async move { Ok(params.unwrap_or(Value::Null)) }.boxed()
            }),
        );
        routes.controller("ghost", "Missing", "run");
        routes
    }

    fn kernel_with(sink: Arc<Collecting>) -> Kernel {
        let host = Container::new().controller("Calculator", Calculator);
        Kernel::new(routes(), Arc::new(host)).with_reporter(Reporter::new(sink))
    }

    async fn call(kernel: &Kernel, payload: &str) -> Value {
        kernel.handle(payload.as_bytes()).await.to_value().unwrap()
    }

    #[tokio::test]
    async fn test_successful_call() {
        let kernel = kernel_with(Arc::default());
        let response = call(&kernel, r#"{"jsonrpc":"2.0","method":"add","params":[1,2],"id":1}"#).await;
        assert_eq!(response, json!({"jsonrpc": "2.0", "id": 1, "result": 3}));
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let kernel = kernel_with(Arc::default());
        let response = call(&kernel, r#"{"jsonrpc":"2.0","method":"unknown","id":5}"#).await;
        assert_eq!(
            response,
            json!({"jsonrpc": "2.0", "id": 5, "error": {"code": -32601, "message": "Method not found"}})
        );
    }

    #[tokio::test]
    async fn test_parse_failures_have_null_id() {
        let sink = Arc::new(Collecting::default());
        let kernel = kernel_with(sink.clone());

        let response = call(&kernel, "{not json").await;
        assert_eq!(response["id"], Value::Null);
        assert_eq!(response["error"]["code"], json!(-32700));

        let exchange = kernel.process(br#"{"jsonrpc":"2.0","id":3}"#).await;
        assert!(exchange.request.is_none());
        assert_eq!(exchange.failed_at, Some(Stage::Received));
        assert_eq!(exchange.response.to_value().unwrap()["error"]["code"], json!(-32600));
        assert_eq!(exchange.response.id(), None);

        assert!(sink.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_handler_declared_error_keeps_code_and_data() {
        let sink = Arc::new(Collecting::default());
        let kernel = kernel_with(sink.clone());

        let response = call(&kernel, r#"{"jsonrpc":"2.0","method":"divide","params":[6,0],"id":"d"}"#).await;
        assert_eq!(
            response["error"],
            json!({"code": 4001, "message": "division by zero", "data": {"dividend": 6}})
        );
        assert_eq!(response["id"], json!("d"));
        assert!(sink.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unexpected_error_is_reported_and_wrapped() {
        let sink = Arc::new(Collecting::default());
        let kernel = kernel_with(sink.clone());

        let exchange = kernel.process(br#"{"jsonrpc":"2.0","method":"fail","id":2}"#).await;
        let response = exchange.response.to_value().unwrap();
        assert_eq!(
            response["error"],
            json!({"code": -32603, "message": "database unavailable"})
        );
        assert_eq!(exchange.failed_at, Some(Stage::Routed));
        assert_eq!(
            *sink.0.lock().unwrap(),
            [(Severity::Error, "database unavailable".to_string())]
        );
    }

    #[tokio::test]
    async fn test_internal_messages_can_be_hidden() {
        let kernel = kernel_with(Arc::default())
            .with_config(KernelConfig::default().expose_internal_errors(false));

        let response = call(&kernel, r#"{"jsonrpc":"2.0","method":"fail","id":2}"#).await;
        assert_eq!(response["error"]["message"], json!("Internal error"));
    }

    #[tokio::test]
    async fn test_panicking_handler_becomes_internal_error() {
        let sink = Arc::new(Collecting::default());
        let kernel = kernel_with(sink.clone());

        let response = call(&kernel, r#"{"jsonrpc":"2.0","method":"panic","id":9}"#).await;
        assert_eq!(response["id"], json!(9));
        assert_eq!(response["error"]["code"], json!(-32603));

        let reported = sink.0.lock().unwrap();
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].0, Severity::Critical);
        assert!(reported[0].1.contains("calculator exploded"));
    }

    #[tokio::test]
    async fn test_unresolvable_controller_is_internal_error() {
        let sink = Arc::new(Collecting::default());
        let kernel = kernel_with(sink.clone());

        let response = call(&kernel, r#"{"jsonrpc":"2.0","method":"ghost","id":1}"#).await;
        assert_eq!(response["error"]["code"], json!(-32603));
        assert_eq!(sink.0.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_notification_still_gets_a_response_without_id() {
        let kernel = kernel_with(Arc::default());

        let exchange = kernel
            .process(br#"{"jsonrpc":"2.0","method":"echo","params":{"a":1}}"#)
            .await;
        assert!(!exchange.expects_reply());
        assert_eq!(
            exchange.response.to_value().unwrap(),
            json!({"jsonrpc": "2.0", "id": null, "result": {"a": 1}})
        );

        let unparsable = kernel.process(b"[").await;
        assert!(unparsable.expects_reply());
    }

    #[tokio::test]
    async fn test_handle_bytes_matches_wire_format() {
        let kernel = kernel_with(Arc::default());
        let bytes = kernel
            .handle_bytes(br#"{"jsonrpc":"2.0","method":"add","params":[2,2],"id":"x"}"#)
            .await;
        assert_eq!(bytes, br#"{"jsonrpc":"2.0","id":"x","result":4}"#);
    }

    #[tokio::test]
    async fn test_middleware_runs_before_dispatch_and_on_terminate() {
        let trace = Arc::new(Trace::default());
        let mut routes = routes();
        routes.add(
            Route::new("audited", Action::controller("Calculator", "add"))
                .middleware(["outer", "inner"]),
        );

        let host = Container::new().controller("Calculator", Calculator);
        let registry = MiddlewareRegistry::new()
            .alias("outer", Recording { id: "outer", trace: trace.clone(), fail_terminate: false })
            .alias("inner", Recording { id: "inner", trace: trace.clone(), fail_terminate: false });
        let kernel = Kernel::new(routes, Arc::new(host)).with_middleware(registry);

        let exchange = kernel
            .process(br#"{"jsonrpc":"2.0","method":"audited","params":[1,1],"id":1}"#)
            .await;
        assert_eq!(exchange.response.result(), Some(&json!(2)));
        assert!(exchange.request.as_ref().unwrap().route().is_some());

        kernel.terminate_exchange(&exchange).await.unwrap();
        assert_eq!(
            *trace.0.lock().unwrap(),
            [
                "before:outer:audited",
                "before:inner:audited",
                "terminate:outer:false",
                "terminate:inner:false"
            ]
        );
    }

    #[tokio::test]
    async fn test_middleware_can_reject_a_call() {
        let mut routes = RouteTable::new();
        routes.add(
            Route::new("secret", Action::controller("Calculator", "add"))
                .middleware(["guard:deny"]),
        );
        let host = Container::new().controller("Calculator", Calculator);
        let kernel = Kernel::new(routes, Arc::new(host))
            .with_middleware(MiddlewareRegistry::new().alias("guard", Guard));

        let response = call(&kernel, r#"{"jsonrpc":"2.0","method":"secret","params":[1,1],"id":1}"#).await;
        assert_eq!(
            response["error"],
            json!({"code": 4003, "message": "Permission denied"})
        );
    }

    #[tokio::test]
    async fn test_panicking_middleware_becomes_internal_error() {
        let sink = Arc::new(Collecting::default());
        let mut routes = RouteTable::new();
        routes.add(
            Route::new("add", Action::controller("Calculator", "add"))
                .middleware(["guard:explode"]),
        );
        let host = Container::new().controller("Calculator", Calculator);
        let kernel = Arc::new(
            Kernel::new(routes, Arc::new(host))
                .with_middleware(MiddlewareRegistry::new().alias("guard", Guard))
                .with_reporter(Reporter::new(sink.clone())),
        );

        let exchange = tokio::spawn(async move {
            kernel
                .process(br#"{"jsonrpc":"2.0","method":"add","params":[1,2],"id":4}"#)
                .await
        })
        .await
        .unwrap();

        assert_eq!(exchange.failed_at, Some(Stage::Routed));
        assert_eq!(
            exchange.response.to_value().unwrap(),
            json!({
                "jsonrpc": "2.0",
                "id": 4,
                "error": {"code": -32603, "message": "handler for 'add' panicked: guard exploded"}
            })
        );

        let reported = sink.0.lock().unwrap();
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].0, Severity::Critical);
    }

    struct Exploding;

    #[async_trait]
    impl HostRuntime for Exploding {
        fn resolve(&self, _action: &Action) -> Result<Arc<dyn Handler>, BoxError> {
            panic!("container exploded")
        }
    }

    #[tokio::test]
    async fn test_panicking_resolution_becomes_internal_error() {
        let sink = Arc::new(Collecting::default());
        let mut routes = RouteTable::new();
        routes.controller("add", "Calculator", "add");
        let kernel = Kernel::new(routes, Arc::new(Exploding)).with_reporter(Reporter::new(sink.clone()));

        let response = call(&kernel, r#"{"jsonrpc":"2.0","method":"add","params":[1,2],"id":"r-1"}"#).await;
        assert_eq!(response["id"], json!("r-1"));
        assert_eq!(response["error"]["code"], json!(-32603));
        assert!(
            response["error"]["message"]
                .as_str()
                .unwrap()
                .contains("container exploded")
        );
        assert_eq!(sink.0.lock().unwrap()[0].0, Severity::Critical);
    }

    #[tokio::test]
    async fn test_maintenance_mode_skips_middleware() {
        let trace = Arc::new(Trace::default());
        let mut routes = RouteTable::new();
        routes.add(
            Route::new("add", Action::controller("Calculator", "add"))
                .middleware(["rec"]),
        );
        let host = Arc::new(Container::new().controller("Calculator", Calculator));
        host.set_maintenance(true);
        let kernel = Kernel::new(routes, host).with_middleware(
            MiddlewareRegistry::new().alias("rec", Recording { id: "rec", trace: trace.clone(), fail_terminate: true }),
        );

        let exchange = kernel
            .process(br#"{"jsonrpc":"2.0","method":"add","params":[1,1],"id":1}"#)
            .await;
        kernel.terminate_exchange(&exchange).await.unwrap();
        assert!(trace.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_terminate_failures_propagate() {
        let trace = Arc::new(Trace::default());
        let mut routes = RouteTable::new();
        routes.add(
            Route::new("add", Action::controller("Calculator", "add"))
                .middleware(["first", "second"]),
        );
        let host = Container::new().controller("Calculator", Calculator);
        let kernel = Kernel::new(routes, Arc::new(host)).with_middleware(
            MiddlewareRegistry::new()
                .alias("first", Recording { id: "first", trace: trace.clone(), fail_terminate: true })
                .alias("second", Recording { id: "second", trace: trace.clone(), fail_terminate: false }),
        );

        let exchange = kernel
            .process(br#"{"jsonrpc":"2.0","method":"add","params":[1,1],"id":1}"#)
            .await;
        let err = kernel.terminate_exchange(&exchange).await.unwrap_err();
        assert!(matches!(err, TerminateError::Middleware { ref name, .. } if name == "first"));
        assert!(!trace.0.lock().unwrap().iter().any(|entry| entry.starts_with("terminate:second")));
    }

    #[tokio::test]
    async fn test_terminate_without_request_runs_host_hook_only() {
        let kernel = kernel_with(Arc::default());
        let exchange = kernel.process(b"garbage").await;
        kernel.terminate_exchange(&exchange).await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_calls_share_one_kernel() {
        let kernel = Arc::new(kernel_with(Arc::default()));
        let mut tasks = Vec::new();
        for n in 0..16i64 {
            let kernel = kernel.clone();
            tasks.push(tokio::spawn(async move {
                let payload = json!({"jsonrpc": "2.0", "method": "add", "params": [n, n], "id": n});
                let response = kernel.handle(payload.to_string().as_bytes()).await;
                (n, response)
            }));
        }

        for task in tasks {
            let (n, response) = task.await.unwrap();
            assert_eq!(response.result(), Some(&json!(n * 2)));
            assert_eq!(response.id(), Some(&crate::RequestId::from(n)));
        }
    }

    #[test]
    fn test_stage_order() {
        assert!(Stage::Received < Stage::Parsed);
        assert!(Stage::Invoked < Stage::Terminated);
        assert_eq!(Stage::Routed.to_string(), "routed");
    }
}
