//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use routeplate_compiler::CompileOptions;

use crate::commands::ast::AstArgs;
use crate::commands::compile::CompileArgs;
use crate::commands::routes::RoutesArgs;

/// Flags that shape `CompileOptions`.
pub struct OptionFlags {
    pub ignore: Vec<String>,
    pub no_ignore: bool,
    pub no_params: bool,
}

impl OptionFlags {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            ignore: m
                .get_many::<String>("ignore")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            no_ignore: m.get_flag("no_ignore"),
            no_params: m.get_flag("no_params"),
        }
    }

    /// `--no-ignore` clears the defaults; `--ignore` names are added on top.
    pub fn to_options(&self) -> CompileOptions {
        let mut options = CompileOptions::new();
        if self.no_ignore {
            options = options.with_ignore(Vec::<String>::new());
        }
        for name in &self.ignore {
            options = options.ignore_name(name.clone());
        }
        if self.no_params {
            options = options.without_params();
        }
        options
    }
}

pub struct CompileParams {
    pub ast_path: Option<PathBuf>,
    pub ast_text: Option<String>,
    pub params: Vec<String>,
    pub flags: OptionFlags,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            ast_path: m.get_one::<PathBuf>("ast_path").cloned(),
            ast_text: m.get_one::<String>("ast_text").cloned(),
            params: m
                .get_many::<String>("param")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            flags: OptionFlags::from_matches(m),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        Self {
            ast_path: p.ast_path,
            ast_text: p.ast_text,
            params: p.params,
            options: p.flags.to_options(),
        }
    }
}

pub struct RoutesParams {
    pub manifest_path: Option<PathBuf>,
    pub json: bool,
    pub name: Option<String>,
    pub flags: OptionFlags,
}

impl RoutesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest_path: m.get_one::<PathBuf>("manifest_path").cloned(),
            json: m.get_flag("json"),
            name: m.get_one::<String>("name").cloned(),
            flags: OptionFlags::from_matches(m),
        }
    }
}

impl From<RoutesParams> for RoutesArgs {
    fn from(p: RoutesParams) -> Self {
        Self {
            manifest_path: p.manifest_path,
            json: p.json,
            name: p.name,
            options: p.flags.to_options(),
        }
    }
}

pub struct AstParams {
    pub ast_path: Option<PathBuf>,
    pub ast_text: Option<String>,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            ast_path: m.get_one::<PathBuf>("ast_path").cloned(),
            ast_text: m.get_one::<String>("ast_text").cloned(),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            ast_path: p.ast_path,
            ast_text: p.ast_text,
        }
    }
}
