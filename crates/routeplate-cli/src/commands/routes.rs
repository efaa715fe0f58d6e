//! Compile every route of a manifest.

use std::path::PathBuf;

use routeplate_compiler::{CompileOptions, Error, RouteSet};

use super::loader::{fail, load_input};

pub struct RoutesArgs {
    pub manifest_path: Option<PathBuf>,
    pub json: bool,
    pub name: Option<String>,
    pub options: CompileOptions,
}

pub fn run(args: RoutesArgs) {
    let json = load_input(args.manifest_path.as_deref(), None, "manifest")
        .unwrap_or_else(|e| fail(e));

    let set = RouteSet::from_json(&json).unwrap_or_else(|e| fail(Error::from(e)));

    match render(&set, &args) {
        Ok(output) => println!("{}", output),
        Err(e) => fail(e),
    }
}

/// One of three shapes: a single template (`--name`), a JSON object of
/// named templates (`--json`), or one `name<TAB>template` line per route.
pub fn render(set: &RouteSet, args: &RoutesArgs) -> Result<String, Error> {
    if let Some(name) = &args.name {
        return Ok(set.template_for(name, &args.options)?.into_pattern());
    }

    if args.json {
        let named = set.named_templates(&args.options)?;
        return Ok(serde_json::to_string_pretty(&named)?);
    }

    let templates = set.to_templates(&args.options)?;
    let lines: Vec<String> = set
        .routes()
        .iter()
        .zip(templates)
        .map(|(route, template)| match &route.name {
            Some(name) => format!("{}\t{}", name, template),
            None => template.into_pattern(),
        })
        .collect();
    Ok(lines.join("\n"))
}
