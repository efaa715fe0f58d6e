//! Reads JSON input from a file, stdin (`-`), or inline text.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{0} is required: use a path, `-` for stdin, or inline JSON")]
    Missing(&'static str),

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{path}': {source}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{0} cannot be empty")]
    Empty(&'static str),
}

/// Load `what` from inline text, stdin, or a file, in that order of
/// precedence. Blank input is rejected.
pub fn load_input(
    path: Option<&Path>,
    text: Option<&str>,
    what: &'static str,
) -> Result<String, LoadError> {
    let content = match (text, path) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) if path.as_os_str() == "-" => load_stdin()?,
        (None, Some(path)) => load_file(path)?,
        (None, None) => return Err(LoadError::Missing(what)),
    };

    if content.trim().is_empty() {
        return Err(LoadError::Empty(what));
    }
    debug!(what, bytes = content.len(), "loaded input");
    Ok(content)
}

fn load_stdin() -> Result<String, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(buf)
}

fn load_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.display().to_string(),
        source,
    })
}

/// Print `error: ...` and exit with status 1.
pub fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
