//! User-facing diagnostics for launch failures.

use nodewrap_shim::config::{CONFIG_FILENAME, INTERPRETER_KEY};
use nodewrap_shim::{Error, SpawnCategory};
use std::io::{self, Write};

pub fn render(err: &Error, out: &mut impl Write) -> io::Result<()> {
    match err {
        Error::Spawn {
            interpreter,
            script,
            category,
            source,
        } => {
            match source.raw_os_error() {
                Some(code) => writeln!(out, "Error: Failed to launch the interpreter (error code: {code})")?,
                None => writeln!(out, "Error: Failed to launch the interpreter")?,
            }
            writeln!(out, "Interpreter path: {interpreter}")?;
            writeln!(out, "Script path: {script}")?;
            writeln!(out, "  -> {}", hint(*category, source))
        }
        other => writeln!(out, "Error: {other}"),
    }
}

fn hint(category: SpawnCategory, source: &nodewrap_platform::Error) -> String {
    match category {
        SpawnCategory::NotFound => {
            format!("Interpreter not found. Check {INTERPRETER_KEY} in {CONFIG_FILENAME}.")
        }
        SpawnCategory::PermissionDenied => "Access denied.".to_string(),
        SpawnCategory::Other => format!("Cause: {source}"),
    }
}
