mod cli;
mod commands;
mod logging;

use cli::{AstParams, CompileParams, RoutesParams, build_cli};

fn main() {
    logging::init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("compile", m)) => {
            let params = CompileParams::from_matches(m);
            commands::compile::run(params.into());
        }
        Some(("routes", m)) => {
            let params = RoutesParams::from_matches(m);
            commands::routes::run(params.into());
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
