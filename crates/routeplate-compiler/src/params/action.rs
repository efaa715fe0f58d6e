//! Controller/action identifiers.

use std::fmt;
use std::str::FromStr;

/// Malformed `controller#action` text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionIdError {
    #[error("expected `controller#action`, found `{0}`")]
    MissingSeparator(String),

    #[error("empty controller or action in `{0}`")]
    Empty(String),
}

/// Identifies the action a route dispatches to, written `controller#action`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActionId {
    controller: String,
    action: String,
}

impl ActionId {
    /// Build an identifier without validation. Empty halves are allowed here
    /// and make the compiler skip query parameters.
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
        }
    }

    pub fn controller(&self) -> &str {
        &self.controller
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.controller, self.action)
    }
}

impl FromStr for ActionId {
    type Err = ActionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((controller, action)) = s.split_once('#') else {
            return Err(ActionIdError::MissingSeparator(s.to_string()));
        };
        if controller.is_empty() || action.is_empty() {
            return Err(ActionIdError::Empty(s.to_string()));
        }
        Ok(Self::new(controller, action))
    }
}

impl TryFrom<String> for ActionId {
    type Error = ActionIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ActionId> for String {
    fn from(id: ActionId) -> Self {
        id.to_string()
    }
}
