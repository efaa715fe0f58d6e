//! Compiled URI Template value.

use std::fmt;

/// An RFC 6570 template produced by the compiler.
///
/// Opaque to this crate: it is never parsed or expanded here, only handed
/// on to whatever expands templates against variable bindings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct UriTemplate {
    pattern: String,
}

impl UriTemplate {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Template text, e.g. `/users/{id}{?page}`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn into_pattern(self) -> String {
        self.pattern
    }
}

impl fmt::Display for UriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl AsRef<str> for UriTemplate {
    fn as_ref(&self) -> &str {
        &self.pattern
    }
}

impl PartialEq<str> for UriTemplate {
    fn eq(&self, other: &str) -> bool {
        self.pattern == other
    }
}

impl PartialEq<&str> for UriTemplate {
    fn eq(&self, other: &&str) -> bool {
        self.pattern == *other
    }
}

impl From<UriTemplate> for String {
    fn from(template: UriTemplate) -> Self {
        template.pattern
    }
}
