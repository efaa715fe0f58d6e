//! Compile options.

use indexmap::IndexSet;

/// Placeholder names suppressed unless the caller says otherwise.
pub const DEFAULT_IGNORE: &[&str] = &["format"];

/// Options for one compilation.
///
/// Deserializes from `{"ignore": [...], "params": bool}`; missing fields
/// take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Placeholder names that compile to nothing.
    pub ignore: IndexSet<String>,
    /// Append a `{?...}` expression when parameter names are known.
    pub params: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
            params: true,
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the ignored names.
    pub fn with_ignore<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = names.into_iter().map(Into::into).collect();
        self
    }

    /// Add one ignored name.
    pub fn ignore_name(mut self, name: impl Into<String>) -> Self {
        self.ignore.insert(name.into());
        self
    }

    /// Never append a query expression.
    pub fn without_params(mut self) -> Self {
        self.params = false;
        self
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.contains(name)
    }
}
