//! Node kind tags.

use std::fmt;

/// Discriminant of a [`PathNode`](crate::PathNode), used for dispatch and
/// for the compiler's ancestor stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Cat,
    Literal,
    Slash,
    Dot,
    Symbol,
    Or,
    Star,
    Group,
}

impl NodeKind {
    pub const ALL: [NodeKind; 8] = [
        NodeKind::Cat,
        NodeKind::Literal,
        NodeKind::Slash,
        NodeKind::Dot,
        NodeKind::Symbol,
        NodeKind::Or,
        NodeKind::Star,
        NodeKind::Group,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Cat => "Cat",
            NodeKind::Literal => "Literal",
            NodeKind::Slash => "Slash",
            NodeKind::Dot => "Dot",
            NodeKind::Symbol => "Symbol",
            NodeKind::Or => "Or",
            NodeKind::Star => "Star",
            NodeKind::Group => "Group",
        }
    }

    /// Terminals carry text and have no children.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            NodeKind::Literal | NodeKind::Slash | NodeKind::Dot | NodeKind::Symbol
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
