//! Test utilities: tree builders and snapshot macros.

use routeplate_core::PathNode;

pub fn lit(text: &str) -> PathNode {
    PathNode::literal(text)
}

pub fn sym(name: &str) -> PathNode {
    PathNode::symbol(name)
}

pub fn splat(name: &str) -> PathNode {
    PathNode::star(PathNode::symbol(name))
}

pub fn group(child: PathNode) -> PathNode {
    PathNode::group(child)
}

/// Right-folded concatenation, the shape a route parser produces.
pub fn path<const N: usize>(nodes: [PathNode; N]) -> PathNode {
    PathNode::cat_all(nodes).expect("path needs at least one node")
}

/// `/users/:id(.:format)`
pub fn users_show() -> PathNode {
    path([
        PathNode::Slash,
        lit("users"),
        PathNode::Slash,
        sym(":id"),
        group(PathNode::cat(PathNode::Dot, sym(":format"))),
    ])
}

/// Snapshot test for a route manifest: one `name  pattern  =>  template`
/// line per route.
#[macro_export]
macro_rules! shot_routes {
    ($manifest:literal, @$snapshot:literal) => {{
        let manifest = indoc::indoc!($manifest);
        let set = $crate::RouteSet::from_json(manifest).expect("valid manifest");
        let templates = set
            .to_templates(&$crate::CompileOptions::default())
            .expect("routes compile");
        let output = set
            .routes()
            .iter()
            .zip(templates)
            .map(|(route, template)| {
                format!(
                    "{}  {}  =>  {}",
                    route.name.as_deref().unwrap_or("-"),
                    route.path,
                    template
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        insta::assert_snapshot!(output, @$snapshot);
    }};
}
