//! Invocable capabilities a route can be bound to

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde_json::Value;

use crate::error::BoxError;
use crate::request::Request;

/// Something a matched route can invoke.
///
/// Return a [`ResponseError`](crate::ResponseError) (boxed) for failures the
/// caller is meant to see; any other error is reported and rendered as an
/// internal error.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn call(&self, request: &Request) -> Result<Value, BoxError>;
}

/// A closure-based handler
pub struct FunctionHandler<F>
where
    F: Fn(&Request) -> BoxFuture<'static, Result<Value, BoxError>> + Send + Sync,
{
    handler_fn: F,
}

impl<F> FunctionHandler<F>
where
    F: Fn(&Request) -> BoxFuture<'static, Result<Value, BoxError>> + Send + Sync,
{
    pub fn new(handler_fn: F) -> Self {
        Self { handler_fn }
    }
}

#[async_trait]
impl<F> Handler for FunctionHandler<F>
where
    F: Fn(&Request) -> BoxFuture<'static, Result<Value, BoxError>> + Send + Sync,
{
    async fn call(&self, request: &Request) -> Result<Value, BoxError> {
        (self.handler_fn)(request).await
    }
}

/// A group of methods addressed as `"<controller>@<method>"` route actions
#[async_trait]
pub trait Controller: Send + Sync {
    async fn call(&self, method: &str, request: &Request) -> Result<Value, BoxError>;

    /// Methods this controller answers (used for resolution checks)
    fn methods(&self) -> Vec<String> {
        vec![]
    }
}

/// A controller bound to one of its methods
pub struct ControllerMethod {
    controller: Arc<dyn Controller>,
    method: String,
}

impl ControllerMethod {
    pub fn new(controller: Arc<dyn Controller>, method: impl Into<String>) -> Self {
        Self {
            controller,
            method: method.into(),
        }
    }
}

#[async_trait]
impl Handler for ControllerMethod {
    async fn call(&self, request: &Request) -> Result<Value, BoxError> {
        self.controller.call(&self.method, request).await
    }
}
