//! Route sets and named-route lookup.
//!
//! A [`RouteSet`] pairs routes with the parameter registry of their actions,
//! and compiles them all (in order) or by name. It deserializes from a JSON
//! manifest:
//!
//! ```json
//! {
//!   "routes": [
//!     {"name": "user", "path": {...}, "defaults": {"controller": "users", "action": "show"}}
//!   ],
//!   "params": {"users#show": ["fields"]}
//! }
//! ```


use indexmap::IndexMap;
use routeplate_core::PathNode;
use serde::Deserialize;
use tracing::debug;

use crate::compile::{CompileError, CompileOptions, CompileResult, Compiler};
use crate::params::{ActionId, ParamRegistry, ParamSource};
use crate::template::UriTemplate;

/// Error while resolving or compiling a route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no named route for `{0}`")]
    UnknownRoute(String),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Dispatch target of a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RouteDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl RouteDefaults {
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: Some(controller.into()),
            action: Some(action.into()),
        }
    }

    /// Both halves present and non-empty.
    pub fn action_id(&self) -> Option<ActionId> {
        match (self.controller.as_deref(), self.action.as_deref()) {
            (Some(controller), Some(action)) if !controller.is_empty() && !action.is_empty() => {
                Some(ActionId::new(controller, action))
            }
            _ => None,
        }
    }
}

/// A registered route: its path pattern, optional name, and dispatch target.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Route {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub path: PathNode,
    #[serde(default)]
    pub defaults: RouteDefaults,
}

impl Route {
    pub fn new(path: PathNode) -> Self {
        Self {
            name: None,
            path,
            defaults: RouteDefaults::default(),
        }
    }

    pub fn named(name: impl Into<String>, path: PathNode) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(path)
        }
    }

    pub fn with_defaults(mut self, controller: impl Into<String>, action: impl Into<String>) -> Self {
        self.defaults = RouteDefaults::new(controller, action);
        self
    }

    pub fn action_id(&self) -> Option<ActionId> {
        self.defaults.action_id()
    }

    /// Compile this route, looking up query parameters for its action.
    pub fn to_template(
        &self,
        options: &CompileOptions,
        params: Option<&dyn ParamSource>,
    ) -> CompileResult<UriTemplate> {
        let action = self.action_id();
        let mut builder = Compiler::builder(options);
        if let Some(params) = params {
            builder = builder.params(params);
        }
        if let Some(action) = &action {
            builder = builder.action(action);
        }
        builder.build().accept(&self.path)
    }
}

/// Ordered collection of routes with their parameter registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RouteSet {
    #[serde(default)]
    routes: Vec<Route>,
    #[serde(default)]
    params: ParamRegistry,
}

impl RouteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON route manifest. Long routes nest deeply, so there is no
    /// recursion limit.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut de = serde_json::Deserializer::from_str(json);
        de.disable_recursion_limit();
        let set = Self::deserialize(&mut de)?;
        de.end()?;
        Ok(set)
    }

    pub fn with_params(mut self, params: ParamRegistry) -> Self {
        self.params = params;
        self
    }

    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn params(&self) -> &ParamRegistry {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut ParamRegistry {
        &mut self.params
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Named route lookup. When a name repeats, the last route wins.
    pub fn route(&self, name: &str) -> Option<&Route> {
        self.routes
            .iter()
            .rev()
            .find(|r| r.name.as_deref() == Some(name))
    }

    /// Compile every route, in registration order.
    pub fn to_templates(&self, options: &CompileOptions) -> CompileResult<Vec<UriTemplate>> {
        debug!(routes = self.routes.len(), "compiling route set");
        self.routes
            .iter()
            .map(|route| route.to_template(options, Some(&self.params)))
            .collect()
    }

    /// Compile named routes into a name → template map. A repeated name
    /// keeps its first position and the last route's template.
    pub fn named_templates(
        &self,
        options: &CompileOptions,
    ) -> CompileResult<IndexMap<String, UriTemplate>> {
        let mut out = IndexMap::new();
        for route in &self.routes {
            let Some(name) = &route.name else {
                continue;
            };
            let template = route.to_template(options, Some(&self.params))?;
            out.insert(name.clone(), template);
        }
        Ok(out)
    }

    /// Compile the route registered under `name`.
    pub fn template_for(&self, name: &str, options: &CompileOptions) -> Result<UriTemplate, RouteError> {
        let route = self
            .route(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?;
        Ok(route.to_template(options, Some(&self.params))?)
    }
}

impl FromIterator<Route> for RouteSet {
    fn from_iter<I: IntoIterator<Item = Route>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
            params: ParamRegistry::default(),
        }
    }
}
