//! Top-level entry point: path template plus optional query expression.

use routeplate_core::PathNode;
use tracing::debug;

use crate::params::{ActionId, ParamSource};
use crate::template::UriTemplate;

use super::error::CompileResult;
use super::options::CompileOptions;
use super::query::augment;
use super::visitor::compile_path;

/// Compiles route trees for one route context.
///
/// Without a param source or an action the compiler only produces path
/// templates. Each call to [`Compiler::accept`] starts from fresh traversal
/// state, so one compiler can be shared across threads.
#[derive(Clone, Copy)]
pub struct Compiler<'a> {
    options: &'a CompileOptions,
    params: Option<&'a dyn ParamSource>,
    action: Option<&'a ActionId>,
}

/// Builder for `Compiler`.
pub struct CompilerBuilder<'a> {
    options: &'a CompileOptions,
    params: Option<&'a dyn ParamSource>,
    action: Option<&'a ActionId>,
}

impl<'a> CompilerBuilder<'a> {
    /// Create a new builder with required parameters.
    pub fn new(options: &'a CompileOptions) -> Self {
        Self {
            options,
            params: None,
            action: None,
        }
    }

    /// Source of query-parameter names.
    pub fn params(mut self, params: &'a dyn ParamSource) -> Self {
        self.params = Some(params);
        self
    }

    /// Action whose registered parameters become the query expression.
    pub fn action(mut self, action: &'a ActionId) -> Self {
        self.action = Some(action);
        self
    }

    /// Build the Compiler.
    pub fn build(self) -> Compiler<'a> {
        Compiler {
            options: self.options,
            params: self.params,
            action: self.action,
        }
    }
}

impl<'a> Compiler<'a> {
    /// Create a builder for Compiler.
    pub fn builder(options: &'a CompileOptions) -> CompilerBuilder<'a> {
        CompilerBuilder::new(options)
    }

    /// Compiler producing path templates only.
    pub fn new(options: &'a CompileOptions) -> Self {
        CompilerBuilder::new(options).build()
    }

    pub fn options(&self) -> &'a CompileOptions {
        self.options
    }

    /// Compile `root` into a URI Template.
    pub fn accept(&self, root: &PathNode) -> CompileResult<UriTemplate> {
        let path = compile_path(root, self.options)?;

        let template = match self.query_params() {
            Some(names) => augment(&path, names),
            None => path,
        };

        debug!(pattern = %root, template = %template, "compiled route");
        Ok(UriTemplate::new(template))
    }

    /// Registered parameter names for this compiler's action, if augmentation
    /// applies. Every miss is silent.
    fn query_params(&self) -> Option<&'a [String]> {
        if !self.options.params {
            return None;
        }

        let (Some(source), Some(action)) = (self.params, self.action) else {
            return None;
        };

        if action.controller().is_empty() || action.action().is_empty() {
            debug!(%action, "incomplete action, skipping query parameters");
            return None;
        }

        let names = source.names_for(action);
        if names.is_none() {
            debug!(%action, "no query parameters registered");
        }
        names
    }
}
