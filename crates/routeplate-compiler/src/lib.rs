//! routeplate compiler: route-pattern trees to RFC 6570 URI Templates.
//!
//! This crate provides the compilation pipeline for routes:
//! - `compile` - template compiler (tree visitor) and query augmenter
//! - `params` - per-action query-parameter registry
//! - `routes` - route sets and named-route lookup
//! - `template` - the compiled `UriTemplate` value

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod params;
pub mod routes;
pub mod template;

#[cfg(test)]
pub mod test_utils;

pub use compile::{CompileError, CompileOptions, CompileResult, Compiler, CompilerBuilder};
pub use compile::{augment, compile_path};
pub use params::{ActionId, ActionIdError, ParamRegistry, ParamSource};
pub use routes::{Route, RouteDefaults, RouteError, RouteSet};
pub use template::UriTemplate;

pub use routeplate_core::{NodeKind, PathNode};

/// Errors surfaced by the routeplate library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Route(#[from] RouteError),

    /// Malformed JSON tree, registry, or route manifest.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for routeplate operations.
pub type Result<T> = std::result::Result<T, Error>;
