//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Options shared by every command that compiles templates.
fn with_compile_args(cmd: Command) -> Command {
    cmd.arg(ignore_arg())
        .arg(no_ignore_arg())
        .arg(no_params_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("routeplate")
        .about("Compile route patterns into RFC 6570 URI Templates")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(compile_command())
        .subcommand(routes_command())
        .subcommand(ast_command())
}

/// Compile a single route tree.
pub fn compile_command() -> Command {
    let cmd = Command::new("compile")
        .about("Compile a route tree into a URI Template")
        .override_usage(
            "\
  routeplate compile <AST>
  routeplate compile -a <JSON>",
        )
        .after_help(
            r#"EXAMPLES:
  routeplate compile route.json                  # path template
  routeplate compile route.json -p page -p q     # with query expression
  routeplate compile -a '{"cat":["slash",{"symbol":":id"}]}'
  cat route.json | routeplate compile -          # stdin"#,
        )
        .arg(ast_path_arg())
        .arg(ast_text_arg())
        .arg(param_arg());

    with_compile_args(cmd)
}

/// Compile every route of a manifest.
pub fn routes_command() -> Command {
    let cmd = Command::new("routes")
        .about("Compile all routes of a manifest")
        .override_usage(
            "\
  routeplate routes <MANIFEST>
  routeplate routes <MANIFEST> --json
  routeplate routes <MANIFEST> --name <NAME>",
        )
        .after_help(
            r#"EXAMPLES:
  routeplate routes routes.json               # one line per route
  routeplate routes routes.json --json        # named templates as JSON
  routeplate routes routes.json -n user       # a single named route"#,
        )
        .arg(manifest_path_arg())
        .arg(json_arg())
        .arg(name_arg());

    with_compile_args(cmd)
}

/// Show a route tree.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show a route tree and its pattern")
        .override_usage(
            "\
  routeplate ast <AST>
  routeplate ast -a <JSON>",
        )
        .arg(ast_path_arg())
        .arg(ast_text_arg())
}
