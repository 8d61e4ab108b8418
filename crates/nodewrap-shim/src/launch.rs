//! Rebuilding the command line and running the interpreter.
//!
//! The new command line is `"<interpreter>" "<script>" <tail>`, where the
//! tail is the caller's argument text after the launcher's own program
//! token. The tail is never re-quoted.

use crate::error::{Error, Result, SpawnCategory};
use crate::resolver::ResolvedPaths;
use nodewrap_platform::cmdline::{self, MAX_COMMAND_LINE};
use nodewrap_platform::command::Command;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// A composed command line, program token first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    line: String,
    program_end: usize,
    tail_start: usize,
}

impl CommandLine {
    /// Composes the interpreter invocation, failing if it exceeds the host limit.
    pub fn compose(paths: &ResolvedPaths, tail: &str) -> Result<Self> {
        let line = format!("\"{}\" \"{}\" {}", paths.interpreter, paths.script, tail);
        let len = cmdline::utf16_len(&line);
        if len > MAX_COMMAND_LINE {
            return Err(Error::CommandLineTooLong {
                len,
                max: MAX_COMMAND_LINE,
            });
        }

        let program_end = paths.interpreter.len() + 2;
        Ok(Self {
            program_end,
            tail_start: program_end + paths.script.len() + 4,
            line,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// Everything after the quoted program token and its separating space.
    pub fn arguments(&self) -> &str {
        &self.line[self.program_end + 1..]
    }

    /// The script path, without the quotes placed around it.
    pub fn script(&self) -> &str {
        &self.line[self.program_end + 2..self.tail_start - 2]
    }

    /// The caller's argument text, exactly as appended.
    pub fn tail(&self) -> &str {
        &self.line[self.tail_start..]
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

/// Runs a composed command line and reports the child's exit code.
pub trait Spawner {
    fn spawn(&self, program: &Path, command_line: &CommandLine) -> nodewrap_platform::Result<i32>;
}

/// Spawns real child processes with inherited standard streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostSpawner;

impl Spawner for HostSpawner {
    fn spawn(&self, program: &Path, command_line: &CommandLine) -> nodewrap_platform::Result<i32> {
        let command = Command::new(program);
        #[cfg(windows)]
        let command = command.raw_args(command_line.arguments());
        // Without a host command line the script travels as its own argument.
        #[cfg(not(windows))]
        let command = command.arg(command_line.script()).raw_args(command_line.tail());
        command.inherit_stdio().exit_code()
    }
}

/// Relays `raw_command_line` (program token included) to the interpreter.
pub fn launch<S: Spawner>(spawner: &S, paths: &ResolvedPaths, raw_command_line: &str) -> Result<i32> {
    launch_tail(spawner, paths, cmdline::argument_tail(raw_command_line))
}

/// Runs the interpreter on the script with `tail` appended verbatim.
pub fn launch_tail<S: Spawner>(spawner: &S, paths: &ResolvedPaths, tail: &str) -> Result<i32> {
    let command_line = CommandLine::compose(paths, tail)?;
    debug!(
        interpreter = %paths.interpreter,
        script = %paths.script,
        command_line = %command_line,
        "launching"
    );

    let code = spawner
        .spawn(Path::new(&paths.interpreter), &command_line)
        .map_err(|source| Error::Spawn {
            interpreter: paths.interpreter.clone(),
            script: paths.script.clone(),
            category: SpawnCategory::of(&source),
            source,
        })?;
    debug!(code, "child exited");
    Ok(code)
}
