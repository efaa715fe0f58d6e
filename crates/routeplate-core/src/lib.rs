#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Route-pattern AST consumed by the routeplate compiler.
//!
//! The tree mirrors what a route parser produces for patterns such as
//! `/users/:id(.:format)`:
//! - **Terminals**: literals, the `/` and `.` separators, named symbols
//! - **Composites**: concatenation, alternation, optional groups, splats
//!
//! Trees are plain owned values. They can be built in code through the
//! constructor helpers or deserialized from JSON (see [`parse_path_node`]).

use std::fmt;

use serde::Deserialize;

mod kind;
pub mod utils;

#[cfg(test)]
mod utils_tests;

pub use kind::NodeKind;
pub use utils::strip_decorations;

// ============================================================================
// AST
// ============================================================================

/// A node of a parsed route pattern.
///
/// Serialized with snake_case external tags:
/// `{"cat": ["slash", {"symbol": ":id"}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathNode {
    /// Fixed text segment.
    Literal(String),
    /// The `/` separator.
    Slash,
    /// The `.` separator.
    Dot,
    /// Named placeholder. The name keeps its decoration (`:id`, `*path`).
    Symbol(String),
    /// Greedy placeholder spanning several segments.
    Star(Box<PathNode>),
    /// `left` followed by `right`.
    Cat(Box<PathNode>, Box<PathNode>),
    /// Alternatives, in source order.
    Or(Vec<PathNode>),
    /// Optional sub-pattern.
    Group(Box<PathNode>),
}

impl PathNode {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    pub fn star(child: PathNode) -> Self {
        Self::Star(Box::new(child))
    }

    pub fn cat(left: PathNode, right: PathNode) -> Self {
        Self::Cat(Box::new(left), Box::new(right))
    }

    pub fn group(child: PathNode) -> Self {
        Self::Group(Box::new(child))
    }

    pub fn or(children: impl IntoIterator<Item = PathNode>) -> Self {
        Self::Or(children.into_iter().collect())
    }

    /// Right-folds a sequence into nested `Cat` nodes, the shape a route
    /// parser produces: `[a, b, c]` becomes `Cat(a, Cat(b, c))`.
    ///
    /// Returns `None` for an empty sequence.
    pub fn cat_all(nodes: impl IntoIterator<Item = PathNode>) -> Option<Self> {
        let nodes: Vec<_> = nodes.into_iter().collect();
        nodes
            .into_iter()
            .rev()
            .reduce(|right, left| PathNode::cat(left, right))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            PathNode::Literal(_) => NodeKind::Literal,
            PathNode::Slash => NodeKind::Slash,
            PathNode::Dot => NodeKind::Dot,
            PathNode::Symbol(_) => NodeKind::Symbol,
            PathNode::Star(_) => NodeKind::Star,
            PathNode::Cat(..) => NodeKind::Cat,
            PathNode::Or(_) => NodeKind::Or,
            PathNode::Group(_) => NodeKind::Group,
        }
    }

    /// Left operand of a `Cat`.
    pub fn left(&self) -> Option<&PathNode> {
        match self {
            PathNode::Cat(left, _) => Some(left),
            _ => None,
        }
    }

    /// Right operand of a `Cat`.
    pub fn right(&self) -> Option<&PathNode> {
        match self {
            PathNode::Cat(_, right) => Some(right),
            _ => None,
        }
    }

    /// Indented tree rendering, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(self.kind().as_str());
        match self {
            PathNode::Literal(text) => {
                out.push_str(&format!(" {text:?}\n"));
            }
            PathNode::Symbol(name) => {
                out.push(' ');
                out.push_str(name);
                out.push('\n');
            }
            PathNode::Slash | PathNode::Dot => out.push('\n'),
            PathNode::Star(child) | PathNode::Group(child) => {
                out.push('\n');
                child.dump_into(out, depth + 1);
            }
            PathNode::Cat(left, right) => {
                out.push('\n');
                left.dump_into(out, depth + 1);
                right.dump_into(out, depth + 1);
            }
            PathNode::Or(children) => {
                out.push('\n');
                for child in children {
                    child.dump_into(out, depth + 1);
                }
            }
        }
    }
}

/// Renders the node back to route-pattern syntax.
impl fmt::Display for PathNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathNode::Literal(text) => f.write_str(text),
            PathNode::Slash => f.write_str("/"),
            PathNode::Dot => f.write_str("."),
            PathNode::Symbol(name) => f.write_str(name),
            PathNode::Star(child) => write!(f, "{child}"),
            PathNode::Cat(left, right) => write!(f, "{left}{right}"),
            PathNode::Or(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "{child}")?;
                }
                Ok(())
            }
            PathNode::Group(child) => write!(f, "({child})"),
        }
    }
}

// ============================================================================
// Deserialization
// ============================================================================

/// Parse a JSON-encoded route-pattern tree.
///
/// Right-folded `Cat` chains nest two JSON levels per segment, so serde_json's
/// default recursion limit is lifted.
pub fn parse_path_node(json: &str) -> Result<PathNode, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(json);
    de.disable_recursion_limit();
    let node = PathNode::deserialize(&mut de)?;
    de.end()?;
    Ok(node)
}
