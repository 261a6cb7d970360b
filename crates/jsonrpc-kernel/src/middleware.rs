//! Route middleware
//!
//! Routes declare middleware by alias, optionally with parameters
//! (`"throttle:10,60"`). The registry turns those declarations into an ordered
//! list of resolved entries for a route. The kernel uses that list twice:
//!
//! 1. **Before dispatch**: entries run in declaration order after routing and
//!    before the handler is invoked. The first error stops the chain and goes
//!    through the normal error path.
//! 2. **Terminate**: after the response has been handed to the host runtime,
//!    entries run again in declaration order. Failures are returned to the
//!    host runtime unchanged.
//!
//! Both phases are skipped while the host runtime asks for middleware to be
//! skipped (maintenance mode, for instance).

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::error::BoxError;
use crate::request::Request;
use crate::response::Response;
use crate::routing::Route;

/// Hooks a route can attach to its calls
#[async_trait]
pub trait Middleware: Send + Sync {
    /// Called before the handler runs; an error short-circuits the call
    #[allow(unused_variables)]
    async fn before_dispatch(&self, request: &Request, parameters: &[String]) -> Result<(), BoxError> {
        Ok(())
    }

    /// Called after the response has been sent; the default does nothing
    #[allow(unused_variables)]
    async fn terminate(&self, request: &Request, response: &Response) -> Result<(), BoxError> {
        Ok(())
    }
}

/// A middleware declaration resolved for one route
#[derive(Clone)]
pub struct MiddlewareEntry {
    pub name: String,
    pub parameters: Vec<String>,
    pub middleware: Arc<dyn Middleware>,
}

impl fmt::Debug for MiddlewareEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MiddlewareEntry")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// Split `"name:p1,p2"` into its name and parameter list
pub fn parse_middleware(declaration: &str) -> (String, Vec<String>) {
    match declaration.split_once(':') {
        Some((name, parameters)) => (
            name.to_string(),
            parameters.split(',').map(str::to_string).collect(),
        ),
        None => (declaration.to_string(), Vec::new()),
    }
}

/// Aliases and groups used to resolve a route's middleware declarations
#[derive(Default, Clone)]
pub struct MiddlewareRegistry {
    aliases: HashMap<String, Arc<dyn Middleware>>,
    groups: HashMap<String, Vec<String>>,
}

impl MiddlewareRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register middleware under an alias
    pub fn alias<M>(mut self, name: impl Into<String>, middleware: M) -> Self
    where
        M: Middleware + 'static,
    {
        self.aliases.insert(name.into(), Arc::new(middleware));
        self
    }

    /// Register an already shared middleware under an alias
    pub fn alias_shared(mut self, name: impl Into<String>, middleware: Arc<dyn Middleware>) -> Self {
        self.aliases.insert(name.into(), middleware);
        self
    }

    /// Register a group that expands to several declarations.
    ///
    /// Members may name other groups; a group already being expanded is
    /// skipped, so cycles end instead of recursing.
    pub fn group<I, S>(mut self, name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups
            .insert(name.into(), members.into_iter().map(Into::into).collect());
        self
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Resolve a route's middleware in declaration order.
    ///
    /// Groups expand in place, nested groups included. Declarations naming
    /// an unknown alias are skipped with a warning.
    pub fn gather(&self, route: &Route) -> Vec<MiddlewareEntry> {
        let mut declarations = Vec::new();
        let mut expanding = Vec::new();
        for declaration in route.middleware_names() {
            self.expand(declaration, &mut expanding, &mut declarations);
        }

        declarations
            .into_iter()
            .filter_map(|declaration| {
                let (name, parameters) = parse_middleware(declaration);
                match self.aliases.get(&name) {
                    Some(middleware) => Some(MiddlewareEntry {
                        name,
                        parameters,
                        middleware: middleware.clone(),
                    }),
                    None => {
                        warn!(
                            "Route '{}' declares unknown middleware '{}'",
                            route.method(),
                            name
                        );
                        None
                    }
                }
            })
            .collect()
    }

    fn expand<'a>(&'a self, declaration: &'a str, expanding: &mut Vec<&'a str>, out: &mut Vec<&'a str>) {
        let Some(members) = self.groups.get(declaration) else {
            out.push(declaration);
            return;
        };

        if expanding.contains(&declaration) {
            warn!("Middleware group '{}' includes itself; skipping", declaration);
            return;
        }

        expanding.push(declaration);
        for member in members {
            self.expand(member, expanding, out);
        }
        expanding.pop();
    }
}
