//! The nodewrap launcher.
//!
//! # Usage
//!
//! Place the binary next to a `nodewrap.json` naming `nodePath` and
//! `cliPath`, then invoke it exactly as the Node.js CLI would be invoked.
//! The argument text after the launcher's own name reaches the CLI without
//! being re-quoted.

use anyhow::{Context, Result};
use cli::WrapperAction;
use nodewrap_platform::cmdline;
use nodewrap_shim::{HostSpawner, ResolvedPaths, launch};
use std::env;
use std::io::{self, Write};

pub mod cli;
pub mod logging;
pub mod report;

/// Exit status when the child could not be started.
pub const LAUNCH_FAILURE: i32 = 1;

/// Runs the launcher for the current process and returns its exit status.
pub fn try_run() -> Result<i32> {
    let first = env::args_os().nth(1);
    let action = WrapperAction::from_first_arg(first.as_ref().and_then(|a| a.to_str()));

    match action {
        Some(WrapperAction::Version) => {
            print_text(&cli::version_text())?;
            Ok(0)
        }
        Some(WrapperAction::Help) => {
            print_text(&cli::help_text())?;
            Ok(0)
        }
        Some(WrapperAction::SelfTest) => {
            let paths = nodewrap_shim::resolve();
            self_test::run(&paths, &HostSpawner, &mut io::stdout().lock())
                .context("failed to write self-test report")
        }
        None => relay(&nodewrap_shim::resolve(), &cmdline::current()),
    }
}

/// Runs the interpreter for `raw_command_line`, reporting launch errors on stderr.
pub fn relay(paths: &ResolvedPaths, raw_command_line: &str) -> Result<i32> {
    match launch(&HostSpawner, paths, raw_command_line) {
        Ok(code) => Ok(code),
        Err(e) => {
            tracing::debug!(error = ?e, "launch failed");
            report::render(&e, &mut io::stderr().lock()).context("failed to write error report")?;
            Ok(LAUNCH_FAILURE)
        }
    }
}

fn print_text(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes()).context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")
}
