use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command as StdCommand, ExitStatus, Stdio};
use tracing::debug;

/// A child process built from a program path and a verbatim argument fragment.
#[derive(Debug)]
pub struct Command {
    inner: StdCommand,
    program: PathBuf,
}

impl Command {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        let program = program.into();
        Self {
            inner: StdCommand::new(&program),
            program,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Appends one argument, quoted by std as a whole.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.inner.arg(arg);
        self
    }

    /// Appends the command-line text that follows the program token.
    ///
    /// On Windows the fragment reaches the child exactly as written, after
    /// the quoted program token std always emits. Other hosts have no
    /// command-line string, so the fragment is split into arguments.
    pub fn raw_args(mut self, fragment: &str) -> Self {
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            if !fragment.is_empty() {
                self.inner.raw_arg(fragment);
            }
        }
        #[cfg(not(windows))]
        {
            self.inner.args(crate::cmdline::split_args(fragment));
        }
        self
    }

    pub fn inherit_stdio(mut self) -> Self {
        self.inner
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        self
    }

    /// Spawns the child and blocks until it exits.
    ///
    /// The child's process handles are owned by the spawned `Child` and are
    /// released when it drops, on the success and the error path alike.
    pub fn status(mut self) -> Result<ExitStatus> {
        let mut child = self.inner.spawn().map_err(|e| Error::CommandFailed {
            cmd: self.program.display().to_string(),
            source: e,
        })?;
        debug!(pid = child.id(), program = %self.program.display(), "spawned child");

        child.wait().map_err(|e| Error::WaitFailed {
            cmd: self.program.display().to_string(),
            source: e,
        })
    }

    /// Like [`Command::status`], folded into a process exit code.
    pub fn exit_code(self) -> Result<i32> {
        self.status().map(exit_code)
    }
}

/// Exit code a launcher should report for a finished child.
///
/// A Unix child killed by signal `n` maps to `128 + n`, the shell convention.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_new() {
        let cmd = Command::new("node");
        assert_eq!(cmd.program(), Path::new("node"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_raw_args_split_on_unix() {
        let cmd = Command::new("node").raw_args(r#""cli.js" --flag "a b" c"#);
        let args: Vec<_> = cmd.inner.get_args().collect();
        assert_eq!(args, ["cli.js", "--flag", "a b", "c"]);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_raw_args_empty_tail() {
        let cmd = Command::new("node").raw_args(r#""cli.js" "#);
        let args: Vec<_> = cmd.inner.get_args().collect();
        assert_eq!(args, ["cli.js"]);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_arg_kept_whole_before_split_tail() {
        let cmd = Command::new("node").arg(r#"/opt/we"ird dir\"#).raw_args("--flag x");
        let args: Vec<_> = cmd.inner.get_args().collect();
        assert_eq!(args, [r#"/opt/we"ird dir\"#, "--flag", "x"]);
    }

    #[test]
    fn test_status_missing_program_is_not_found() {
        let err = Command::new("/nonexistent/dir/node_12345")
            .raw_args("")
            .status()
            .unwrap_err();
        assert!(matches!(err, Error::CommandFailed { .. }));
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_passthrough() {
        let code = Command::new("/bin/sh")
            .raw_args(r#"-c "exit 3""#)
            .exit_code()
            .unwrap();
        assert_eq!(code, 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_for_signal() {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(exit_code(ExitStatus::from_raw(9)), 128 + 9);
        assert_eq!(exit_code(ExitStatus::from_raw(2 << 8)), 2);
    }
}
