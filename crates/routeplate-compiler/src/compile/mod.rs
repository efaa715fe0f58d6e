//! Route-pattern to URI Template compilation.
//!
//! Compiles a `PathNode` tree into RFC 6570 template text in two steps:
//! the path template comes from a single depth-first walk of the tree,
//! then an optional `{?a,b}` query expression is appended.
//!
//! # Module Organization
//!
//! - `visitor`: the tree walk, with the separator-absorption rules for `Cat`
//! - `query`: the query augmenter
//! - `options`: compile options (ignored names, query toggle)
//! - `compiler`: the top-level entry point tying both steps to a param source

mod compiler;
mod error;
mod options;
mod query;
mod visitor;

#[cfg(test)]
mod query_tests;
#[cfg(test)]
mod visitor_tests;

pub use compiler::{Compiler, CompilerBuilder};
pub use error::{CompileError, CompileResult};
pub use options::{CompileOptions, DEFAULT_IGNORE};
pub use query::augment;
pub use visitor::compile_path;
