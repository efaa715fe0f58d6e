//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// JSON-encoded route tree file (positional, `-` for stdin).
pub fn ast_path_arg() -> Arg {
    Arg::new("ast_path")
        .value_name("AST")
        .value_parser(value_parser!(PathBuf))
        .help("JSON route tree file (`-` reads stdin)")
}

/// Inline JSON route tree (-a/--ast).
pub fn ast_text_arg() -> Arg {
    Arg::new("ast_text")
        .short('a')
        .long("ast")
        .value_name("JSON")
        .conflicts_with("ast_path")
        .help("Inline JSON route tree")
}

/// Route manifest file (positional, `-` for stdin).
pub fn manifest_path_arg() -> Arg {
    Arg::new("manifest_path")
        .value_name("MANIFEST")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("JSON route manifest (`-` reads stdin)")
}

/// Additional ignored parameter name (--ignore, repeatable).
pub fn ignore_arg() -> Arg {
    Arg::new("ignore")
        .long("ignore")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Leave NAME out of the template (repeatable)")
}

/// Clear the default ignore list (--no-ignore).
pub fn no_ignore_arg() -> Arg {
    Arg::new("no_ignore")
        .long("no-ignore")
        .action(ArgAction::SetTrue)
        .help("Do not ignore `format` by default")
}

/// Skip query expressions (--no-params).
pub fn no_params_arg() -> Arg {
    Arg::new("no_params")
        .long("no-params")
        .action(ArgAction::SetTrue)
        .help("Do not append query parameter expressions")
}

/// Query parameter name (--param, repeatable).
pub fn param_arg() -> Arg {
    Arg::new("param")
        .short('p')
        .long("param")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Append NAME to the query expression (repeatable)")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print named templates as a JSON object")
}

/// Single named route (--name).
pub fn name_arg() -> Arg {
    Arg::new("name")
        .short('n')
        .long("name")
        .value_name("NAME")
        .conflicts_with("json")
        .help("Print only the route named NAME")
}
