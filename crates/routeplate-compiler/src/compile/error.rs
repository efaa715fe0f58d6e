//! Compilation error types.

/// Error during template compilation.
///
/// Compilation is strict only about group nesting; every other tree shape
/// compiles, possibly to empty text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// An optional group appears inside another optional group.
    /// `pattern` is the inner group in route syntax.
    #[error("nested groups not permitted: `{pattern}`")]
    NestedGroups { pattern: String },
}

/// Result of a compilation step.
pub type CompileResult<T> = std::result::Result<T, CompileError>;
