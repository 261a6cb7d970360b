use std::fmt;
use std::sync::Arc;

use crate::handler::Handler;
use crate::request::Request;

/// What a route invokes when it matches
#[derive(Clone)]
pub enum Action {
    /// A handler bound directly at registration time
    Handler(Arc<dyn Handler>),
    /// A controller method, resolved through the host runtime on every call
    Controller { controller: String, method: String },
}

impl Action {
    pub fn controller(controller: impl Into<String>, method: impl Into<String>) -> Self {
        Action::Controller {
            controller: controller.into(),
            method: method.into(),
        }
    }

    /// Lookup key of a controller action: `"<controller>@<method>"`, with
    /// namespace separators trimmed from both ends of the controller.
    pub fn controller_key(&self) -> Option<String> {
        match self {
            Action::Controller { controller, method } => Some(format!(
                "{}@{}",
                normalize_controller(controller),
                method
            )),
            Action::Handler(_) => None,
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Handler(_) => f.write_str("Action::Handler(..)"),
            Action::Controller { controller, method } => f
                .debug_struct("Action::Controller")
                .field("controller", controller)
                .field("method", method)
                .finish(),
        }
    }
}

impl<H> From<H> for Action
where
    H: Handler + 'static,
{
    fn from(handler: H) -> Self {
        Action::Handler(Arc::new(handler))
    }
}

pub(crate) fn normalize_controller(controller: &str) -> &str {
    controller.trim_matches(|c| c == ':' || c == '\\')
}

/// Binding of a JSON-RPC method name to an action
#[derive(Debug, Clone)]
pub struct Route {
    method: String,
    action: Action,
    name: Option<String>,
    middleware: Vec<String>,
}

impl Route {
    pub fn new(method: impl Into<String>, action: impl Into<Action>) -> Self {
        Self {
            method: method.into(),
            action: action.into(),
            name: None,
            middleware: Vec::new(),
        }
    }

    /// Name the route for reverse lookup
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach middleware entries, `"alias"` or `"alias:param1,param2"`
    pub fn middleware<I, S>(mut self, middleware: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.middleware.extend(middleware.into_iter().map(Into::into));
        self
    }

    /// The method name is the entire routing key
    pub fn matches(&self, request: &Request) -> bool {
        self.method == request.method()
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn controller_key(&self) -> Option<String> {
        self.action.controller_key()
    }

    pub fn middleware_names(&self) -> &[String] {
        &self.middleware
    }
}
