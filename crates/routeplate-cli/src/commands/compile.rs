//! Compile a single route tree.

use std::path::PathBuf;

use routeplate_compiler::{ActionId, CompileOptions, Compiler, Error, ParamRegistry};
use routeplate_core::{PathNode, parse_path_node};

use super::loader::{fail, load_input};

/// Action the `--param` names are registered under.
const CLI_CONTROLLER: &str = "cli";
const CLI_ACTION: &str = "compile";

pub struct CompileArgs {
    pub ast_path: Option<PathBuf>,
    pub ast_text: Option<String>,
    pub params: Vec<String>,
    pub options: CompileOptions,
}

pub fn run(args: CompileArgs) {
    let json = load_input(args.ast_path.as_deref(), args.ast_text.as_deref(), "route tree")
        .unwrap_or_else(|e| fail(e));

    match render(&json, &args) {
        Ok(template) => println!("{}", template),
        Err(e) => fail(e),
    }
}

/// Parse and compile. `--param` names go through a registry, so repeats
/// collapse to their first occurrence.
pub fn render(json: &str, args: &CompileArgs) -> Result<String, Error> {
    let node: PathNode = parse_path_node(json)?;

    let action = ActionId::new(CLI_CONTROLLER, CLI_ACTION);
    let registry = ParamRegistry::new().with(action.clone(), args.params.iter().cloned());

    let template = Compiler::builder(&args.options)
        .params(&registry)
        .action(&action)
        .build()
        .accept(&node)?;
    Ok(template.into_pattern())
}
