use clap::{CommandFactory, Parser};
use nodewrap_shim::config::{CONFIG_FILENAME, INTERPRETER_KEY, SCRIPT_KEY};

/// Flags handled by the launcher itself. Everything else goes to the child.
#[derive(Clone, Debug, Parser)]
#[command(
    name = "nodewrap",
    about = "Native launcher for a Node.js command-line tool",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true,
    after_help = after_help(),
)]
pub struct WrapperArgs {
    #[arg(long = "wrapper-version", help = "Show wrapper version and exit")]
    pub show_version: bool,

    #[arg(long = "wrapper-help", help = "Show this wrapper help and exit")]
    pub show_help: bool,

    #[arg(long = "wrapper-test", help = "Test interpreter passthrough and exit")]
    pub self_test: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapperAction {
    Version,
    Help,
    SelfTest,
}

impl WrapperAction {
    /// The wrapper action named by the first argument, if it names one exactly.
    ///
    /// Unknown `--wrapper-*` spellings are not ours and pass through.
    pub fn from_first_arg(arg: Option<&str>) -> Option<Self> {
        let long = arg?.strip_prefix("--")?;
        let cmd = WrapperArgs::command();
        if !cmd.get_arguments().any(|a| a.get_long() == Some(long)) {
            return None;
        }

        let args = WrapperArgs::try_parse_from(["nodewrap", arg?]).ok()?;
        if args.show_version {
            Some(WrapperAction::Version)
        } else if args.show_help {
            Some(WrapperAction::Help)
        } else if args.self_test {
            Some(WrapperAction::SelfTest)
        } else {
            None
        }
    }
}

pub fn version_text() -> String {
    format!(
        "nodewrap version {}\nNative launcher for a Node.js command-line tool\n",
        env!("CARGO_PKG_VERSION")
    )
}

pub fn help_text() -> String {
    WrapperArgs::command().render_help().to_string()
}

fn after_help() -> String {
    format!(
        "All other options are passed through to the CLI unchanged.\n\
         For the CLI's own help, use: nodewrap --help\n\n\
         Configuration:\n  \
           Config file: {CONFIG_FILENAME} (same directory as the executable)\n  \
           Required fields: {INTERPRETER_KEY}, {SCRIPT_KEY}\n\n\
         Examples:\n  \
           nodewrap --wrapper-version    # Show wrapper version\n  \
           nodewrap --wrapper-test       # Test passthrough\n  \
           nodewrap --version            # Passed to the CLI\n  \
           nodewrap --help               # Passed to the CLI"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_flags() {
        assert_eq!(
            WrapperAction::from_first_arg(Some("--wrapper-version")),
            Some(WrapperAction::Version)
        );
        assert_eq!(
            WrapperAction::from_first_arg(Some("--wrapper-help")),
            Some(WrapperAction::Help)
        );
        assert_eq!(
            WrapperAction::from_first_arg(Some("--wrapper-test")),
            Some(WrapperAction::SelfTest)
        );
    }

    #[test]
    fn test_passthrough_args_are_not_wrapper_flags() {
        for arg in [
            None,
            Some("--version"),
            Some("--help"),
            Some("-h"),
            Some("--wrapper-other"),
            Some("--wrapper-version=1"),
            Some("wrapper-test"),
            Some("--"),
        ] {
            assert_eq!(WrapperAction::from_first_arg(arg), None, "{arg:?}");
        }
    }

    #[test]
    fn test_help_lists_flags_and_config() {
        let help = help_text();
        for needle in [
            "--wrapper-version",
            "--wrapper-help",
            "--wrapper-test",
            CONFIG_FILENAME,
            "nodePath",
            "cliPath",
        ] {
            assert!(help.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn test_version_text() {
        let expected = format!("nodewrap version {}", env!("CARGO_PKG_VERSION"));
        assert!(version_text().starts_with(&expected));
    }

    #[test]
    fn test_command_debug_assert() {
        WrapperArgs::command().debug_assert();
    }
}
