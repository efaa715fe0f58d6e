//! Depth-first template compilation.
//!
//! Every node kind has exactly one handler, selected by the `match` in
//! [`TemplateVisitor::dispatch`]. Terminals emit their text, `Or` and
//! `Star` delegate to their children, and `Cat` carries the interesting
//! rules: a separator followed by a placeholder is folded into a single
//! expression whose shape depends on whether the `Cat` sits directly inside
//! an optional group.
//!
//! Under a group the separator moves inside the braces (`{/id}`, `{.format}`)
//! so that an absent value drops its separator too. Elsewhere the separator
//! is always present in the URL and stays literal text (`/{id}`).

use indexmap::IndexSet;
use routeplate_core::{NodeKind, PathNode, strip_decorations};
use tracing::trace;

use super::error::{CompileError, CompileResult};
use super::options::CompileOptions;

/// Compile the path portion of a route into URI Template text.
///
/// Fails only when an optional group is nested inside another.
pub fn compile_path(root: &PathNode, options: &CompileOptions) -> CompileResult<String> {
    let mut visitor = TemplateVisitor::new(&options.ignore);
    let out = visitor.visit(root);
    debug_assert!(visitor.stack.is_empty(), "ancestor stack not unwound");
    debug_assert_eq!(visitor.group_depth, 0, "group depth not unwound");
    out
}

/// Shape of an emitted placeholder expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Expansion {
    /// `{name}`
    Simple,
    /// `/{name}`: separator as plain text before the expression.
    Literal(char),
    /// `{/name}`, `{.name}`: separator inside the expression.
    Prefixed(char),
    /// `{/name*}`
    Splat,
}

/// Traversal state for one compilation. Never reused across calls.
struct TemplateVisitor<'a> {
    ignore: &'a IndexSet<String>,
    /// Kinds from root to the node being visited; the current node is last.
    stack: Vec<NodeKind>,
    /// 0 outside groups, 1 inside one.
    group_depth: u32,
}

impl<'a> TemplateVisitor<'a> {
    fn new(ignore: &'a IndexSet<String>) -> Self {
        Self {
            ignore,
            stack: Vec::new(),
            group_depth: 0,
        }
    }

    fn visit(&mut self, node: &PathNode) -> CompileResult<String> {
        self.with_kind(node.kind(), |this| this.dispatch(node))
    }

    /// Run `f` with `kind` pushed on the ancestor stack, popping it on
    /// every exit path.
    fn with_kind<T>(&mut self, kind: NodeKind, f: impl FnOnce(&mut Self) -> T) -> T {
        self.stack.push(kind);
        let result = f(self);
        self.stack.pop();
        result
    }

    fn dispatch(&mut self, node: &PathNode) -> CompileResult<String> {
        trace!(kind = %node.kind(), depth = self.stack.len(), "visit");
        match node {
            PathNode::Cat(left, right) => self.visit_cat(left, right),
            PathNode::Literal(text) => Ok(text.clone()),
            PathNode::Slash | PathNode::Dot => Ok(node.to_string()),
            PathNode::Symbol(_) => Ok(self.placeholder(node, Expansion::Simple)),
            PathNode::Or(children) => self.visit_or(children),
            PathNode::Star(child) => self.visit(child),
            PathNode::Group(child) => self.visit_group(node, child),
        }
    }

    fn visit_cat(&mut self, left: &PathNode, right: &PathNode) -> CompileResult<String> {
        match (left.kind(), right.kind()) {
            (NodeKind::Dot, NodeKind::Symbol) => {
                Ok(self.placeholder(right, self.separator_expansion('.')))
            }
            (NodeKind::Slash, NodeKind::Symbol) => {
                Ok(self.placeholder(right, self.separator_expansion('/')))
            }
            (NodeKind::Slash, NodeKind::Star) => Ok(self.placeholder(right, Expansion::Splat)),
            (NodeKind::Slash, NodeKind::Cat) => match right {
                PathNode::Cat(splat, rest) if splat.kind() == NodeKind::Star => {
                    let mut out = self.placeholder(splat, Expansion::Splat);
                    out.push_str(&self.visit(rest)?);
                    Ok(out)
                }
                _ => self.concat(left, right),
            },
            (NodeKind::Cat, NodeKind::Star) => {
                let head = self.visit(left)?;
                let mut out = head.trim_end_matches('/').to_owned();
                out.push_str(&self.placeholder(right, Expansion::Splat));
                Ok(out)
            }
            _ => self.concat(left, right),
        }
    }

    fn visit_or(&mut self, children: &[PathNode]) -> CompileResult<String> {
        // RFC 6570 has no alternation: branches are emitted back to back.
        children.iter().map(|child| self.visit(child)).collect()
    }

    fn visit_group(&mut self, node: &PathNode, child: &PathNode) -> CompileResult<String> {
        if self.group_depth >= 1 {
            return Err(CompileError::NestedGroups {
                pattern: node.to_string(),
            });
        }

        self.group_depth += 1;
        let result = self.visit(child);
        self.group_depth -= 1;
        result
    }

    fn concat(&mut self, left: &PathNode, right: &PathNode) -> CompileResult<String> {
        let mut out = self.visit(left)?;
        out.push_str(&self.visit(right)?);
        Ok(out)
    }

    /// The current `Cat` is the direct child of a `Group`.
    fn in_group_cat(&self) -> bool {
        matches!(self.stack.as_slice(), [.., NodeKind::Group, NodeKind::Cat])
    }

    fn separator_expansion(&self, separator: char) -> Expansion {
        if self.in_group_cat() {
            Expansion::Prefixed(separator)
        } else {
            Expansion::Literal(separator)
        }
    }

    /// Placeholder name of `node`, or `None` when it is ignored.
    fn symbol_name(&self, node: &PathNode) -> Option<String> {
        let name = strip_decorations(&node.to_string());
        (!self.ignore.contains(&name)).then_some(name)
    }

    /// Render `node` as an expression. Ignored names render as nothing,
    /// separator included.
    fn placeholder(&self, node: &PathNode, expansion: Expansion) -> String {
        let Some(name) = self.symbol_name(node) else {
            return String::new();
        };

        match expansion {
            Expansion::Simple => format!("{{{name}}}"),
            Expansion::Literal(separator) => format!("{separator}{{{name}}}"),
            Expansion::Prefixed(separator) => format!("{{{separator}{name}}}"),
            Expansion::Splat => format!("{{/{name}*}}"),
        }
    }
}
