//! Show a route tree and its pattern.

use std::path::PathBuf;

use routeplate_compiler::Error;
use routeplate_core::{PathNode, parse_path_node};

use super::loader::{fail, load_input};

pub struct AstArgs {
    pub ast_path: Option<PathBuf>,
    pub ast_text: Option<String>,
}

pub fn run(args: AstArgs) {
    let json = load_input(args.ast_path.as_deref(), args.ast_text.as_deref(), "route tree")
        .unwrap_or_else(|e| fail(e));

    let node = parse_path_node(&json).unwrap_or_else(|e| fail(Error::from(e)));
    print!("{}", render(&node));
}

/// Tree dump followed by the route-pattern form.
pub fn render(node: &PathNode) -> String {
    format!("{}\npattern: {}\n", node.dump(), node)
}
