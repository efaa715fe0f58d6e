//! Query-parameter registry.
//!
//! Maps an action (`users#index`) to the ordered list of query parameter
//! names it accepts. Owners of actions register ahead of compilation; the
//! compiler only reads through [`ParamSource`].

mod action;


use indexmap::{IndexMap, IndexSet};

pub use action::{ActionId, ActionIdError};

/// Lookup of query parameter names by action.
pub trait ParamSource: Send + Sync {
    /// Ordered, unique names for `action`, or `None` when nothing is
    /// registered.
    fn names_for(&self, action: &ActionId) -> Option<&[String]>;
}

impl ParamSource for IndexMap<ActionId, Vec<String>> {
    fn names_for(&self, action: &ActionId) -> Option<&[String]> {
        self.get(action).map(Vec::as_slice)
    }
}

/// In-memory registry. Registering an action again replaces its names.
///
/// Serializes as a JSON object keyed by `controller#action`:
/// `{"users#index": ["page", "per_page"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "IndexMap<ActionId, Vec<String>>", into = "IndexMap<ActionId, Vec<String>>")]
pub struct ParamRegistry {
    defs: IndexMap<ActionId, Vec<String>>,
}

impl ParamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `names` for `action`, dropping repeats (first occurrence wins).
    pub fn register<I, S>(&mut self, action: ActionId, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: IndexSet<String> = names.into_iter().map(Into::into).collect();
        self.defs.insert(action, names.into_iter().collect());
    }

    /// Register several actions of one controller at once.
    pub fn register_controller<A, I, S>(
        &mut self,
        controller: &str,
        defs: impl IntoIterator<Item = (A, I)>,
    ) where
        A: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (action, names) in defs {
            self.register(ActionId::new(controller, action), names);
        }
    }

    /// Chaining form of [`ParamRegistry::register`].
    pub fn with<I, S>(mut self, action: ActionId, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.register(action, names);
        self
    }

    /// Merge `other` into `self`; entries of `other` win.
    pub fn extend(&mut self, other: ParamRegistry) {
        for (action, names) in other.defs {
            self.register(action, names);
        }
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ActionId, &[String])> {
        self.defs.iter().map(|(k, v)| (k, v.as_slice()))
    }
}

impl ParamSource for ParamRegistry {
    fn names_for(&self, action: &ActionId) -> Option<&[String]> {
        self.defs.get(action).map(Vec::as_slice)
    }
}

impl From<IndexMap<ActionId, Vec<String>>> for ParamRegistry {
    fn from(defs: IndexMap<ActionId, Vec<String>>) -> Self {
        let mut registry = Self::new();
        for (action, names) in defs {
            registry.register(action, names);
        }
        registry
    }
}

impl From<ParamRegistry> for IndexMap<ActionId, Vec<String>> {
    fn from(registry: ParamRegistry) -> Self {
        registry.defs
    }
}
