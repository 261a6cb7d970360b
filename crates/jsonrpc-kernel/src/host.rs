//! The host runtime collaborator
//!
//! The host runtime owns the transport and the process lifecycle. The kernel
//! only needs it to resolve route actions into handlers, to say whether
//! middleware should be skipped, and to run its own termination hook.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::error::{BoxError, ResolveError};
use crate::handler::{Controller, ControllerMethod, Handler};
use crate::routing::Action;

/// Services the kernel consumes from the runtime hosting it
#[async_trait]
pub trait HostRuntime: Send + Sync {
    /// Turn a route action into something invocable
    fn resolve(&self, action: &Action) -> Result<Arc<dyn Handler>, BoxError>;

    /// When true, route middleware does not run at all
    fn should_skip_middleware(&self) -> bool {
        false
    }

    /// Runs after terminable middleware, once per handled call
    async fn terminate(&self) -> Result<(), BoxError> {
        Ok(())
    }
}

type TerminatingCallback = Box<dyn Fn() -> BoxFuture<'static, Result<(), BoxError>> + Send + Sync>;

/// Default host runtime: a controller registry with a maintenance switch
#[derive(Default)]
pub struct Container {
    controllers: HashMap<String, Arc<dyn Controller>>,
    maintenance: AtomicBool,
    terminating: Vec<TerminatingCallback>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a controller under the name route actions refer to
    pub fn controller<C>(mut self, name: impl AsRef<str>, controller: C) -> Self
    where
        C: Controller + 'static,
    {
        let name = crate::routing::normalize_controller(name.as_ref()).to_string();
        self.controllers.insert(name, Arc::new(controller));
        self
    }

    /// Register a callback run by [`HostRuntime::terminate`], in registration order
    pub fn terminating<F>(mut self, callback: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, Result<(), BoxError>> + Send + Sync + 'static,
    {
        self.terminating.push(Box::new(callback));
        self
    }

    pub fn set_maintenance(&self, enabled: bool) {
        self.maintenance.store(enabled, Ordering::SeqCst);
    }

    pub fn is_down_for_maintenance(&self) -> bool {
        self.maintenance.load(Ordering::SeqCst)
    }

    pub fn has_controller(&self, name: &str) -> bool {
        self.controllers
            .contains_key(crate::routing::normalize_controller(name))
    }
}

#[async_trait]
impl HostRuntime for Container {
    fn resolve(&self, action: &Action) -> Result<Arc<dyn Handler>, BoxError> {
        match action {
            Action::Handler(handler) => Ok(handler.clone()),
            Action::Controller { controller, method } => {
                let name = crate::routing::normalize_controller(controller);
                let instance = self
                    .controllers
                    .get(name)
                    .ok_or_else(|| ResolveError::UnknownController(name.to_string()))?;

                let methods = instance.methods();
                if !methods.is_empty() && !methods.iter().any(|m| m == method) {
                    return Err(ResolveError::UnknownMethod {
                        controller: name.to_string(),
                        method: method.clone(),
                    }
                    .into());
                }

                Ok(Arc::new(ControllerMethod::new(instance.clone(), method.clone())))
            }
        }
    }

    fn should_skip_middleware(&self) -> bool {
        self.is_down_for_maintenance()
    }

    async fn terminate(&self) -> Result<(), BoxError> {
        for callback in &self.terminating {
            callback().await?;
        }
        Ok(())
    }
}
