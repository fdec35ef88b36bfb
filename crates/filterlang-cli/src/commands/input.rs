//! Reading the filter from an argument, a file or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use super::CommandError;
use crate::cli::FilterArgs;

pub fn load(args: &FilterArgs) -> Result<String, CommandError> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) if path.as_os_str() == "-" => read_stdin()?,
        (None, Some(path)) => read_file(path)?,
        (None, None) => read_stdin()?,
    };
    Ok(strip_final_newline(text))
}

fn read_file(path: &Path) -> Result<String, CommandError> {
    fs::read_to_string(path).map_err(|source| CommandError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn read_stdin() -> Result<String, CommandError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|source| CommandError::Io {
            path: "<stdin>".to_string(),
            source,
        })?;
    Ok(buf)
}

/// Editors and `echo` add one; offsets are easier to reason about without it.
pub fn strip_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
