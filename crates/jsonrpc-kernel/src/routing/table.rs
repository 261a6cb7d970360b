use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ResponseError;
use crate::handler::Handler;
use crate::request::Request;

use super::route::{Action, Route};

/// Registered routes in registration order plus three lookup maps.
///
/// The maps are updated incrementally on every `add` and are last-write-wins,
/// while [`RouteTable::match_request`] scans the ordered list and is
/// first-match-wins. Several routes may share a method as fallbacks; names
/// and controller actions are expected to be unique.
#[derive(Debug, Default, Clone)]
pub struct RouteTable {
    routes: Vec<Arc<Route>>,
    by_method: HashMap<String, Arc<Route>>,
    by_name: HashMap<String, Arc<Route>>,
    by_action: HashMap<String, Arc<Route>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route and refresh the lookup maps
    pub fn add(&mut self, route: Route) -> Arc<Route> {
        let route = Arc::new(route);
        self.routes.push(route.clone());
        self.add_lookups(&route);
        route
    }

    /// Register a handler under `method`
    pub fn handler<H>(&mut self, method: impl Into<String>, handler: H) -> Arc<Route>
    where
        H: Handler + 'static,
    {
        self.add(Route::new(method, handler))
    }

    /// Register a controller method under `method`
    pub fn controller(
        &mut self,
        method: impl Into<String>,
        controller: impl Into<String>,
        controller_method: impl Into<String>,
    ) -> Arc<Route> {
        self.add(Route::new(
            method,
            Action::controller(controller, controller_method),
        ))
    }

    fn add_lookups(&mut self, route: &Arc<Route>) {
        self.by_method
            .insert(route.method().to_string(), route.clone());

        if let Some(name) = route.get_name() {
            self.by_name.insert(name.to_string(), route.clone());
        }

        if let Some(key) = route.controller_key() {
            self.by_action.insert(key, route.clone());
        }
    }

    /// Find the first registered route whose method equals the request's
    pub fn match_request(&self, request: &Request) -> Result<Arc<Route>, ResponseError> {
        self.routes
            .iter()
            .find(|route| route.matches(request))
            .cloned()
            .ok_or_else(ResponseError::method_not_found)
    }

    /// Direct lookup by method name (last registration wins)
    pub fn get_by_method(&self, method: &str) -> Option<Arc<Route>> {
        self.by_method.get(method).cloned()
    }

    pub fn get_by_name(&self, name: &str) -> Option<Arc<Route>> {
        self.by_name.get(name).cloned()
    }

    /// Lookup by `"<controller>@<method>"`; separators around the controller are ignored
    pub fn get_by_action(&self, action: &str) -> Option<Arc<Route>> {
        let key = match action.split_once('@') {
            Some((controller, method)) => {
                format!("{}@{}", super::normalize_controller(controller), method)
            }
            None => action.to_string(),
        };
        self.by_action.get(&key).cloned()
    }

    pub fn has_named_route(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    /// Distinct method names, in first-registration order
    pub fn methods(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for route in &self.routes {
            if !seen.contains(&route.method()) {
                seen.push(route.method());
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
