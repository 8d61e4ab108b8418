//! Command-line text as the host delivers it.
//!
//! The launcher works on a single command-line string in the Windows
//! convention: one program token followed by an argument tail that is
//! forwarded without re-quoting. On Windows that string comes straight from
//! the OS. Elsewhere it is built from `argv` with [`synthesise`], and
//! [`split_args`] turns it back into an argument vector at spawn time.

use std::borrow::Cow;

/// Longest command line, in UTF-16 code units, the host accepts.
pub const MAX_COMMAND_LINE: usize = 32_767;

/// The full command line of the current process, program token included.
#[cfg(windows)]
pub fn current() -> String {
    use windows::Win32::System::Environment::GetCommandLineW;

    // SAFETY: the returned buffer is NUL-terminated, owned by the process and
    // never freed, so the slice over it stays valid while it is copied out.
    unsafe {
        let line = GetCommandLineW();
        String::from_utf16_lossy(line.as_wide())
    }
}

/// The full command line of the current process, program token included.
#[cfg(not(windows))]
pub fn current() -> String {
    let mut args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let program = args.next().unwrap_or_default();
    synthesise(&program, args)
}

/// Builds a command line from a program name and its arguments.
///
/// [`argument_tail`] does not honour backslash escapes, so any `"` in the
/// program name is dropped to keep the token whole. The token itself is
/// discarded when the line is relayed.
pub fn synthesise<I, S>(program: &str, args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let program = program.replace('"', "");
    let mut line = quote_arg(&program).into_owned();
    for arg in args {
        line.push(' ');
        line.push_str(&quote_arg(arg.as_ref()));
    }
    line
}

/// Everything after the program token, byte-for-byte.
///
/// A `"` toggles the inside-quotes state and is otherwise kept as is. The
/// first space outside quotes ends the program token; it and any spaces
/// that follow are dropped.
pub fn argument_tail(line: &str) -> &str {
    let mut in_quotes = false;
    let mut end = line.len();

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ' ' if !in_quotes => {
                end = i + 1;
                break;
            }
            _ => {}
        }
    }

    line[end..].trim_start_matches(' ')
}

/// Length of `s` in UTF-16 code units, the unit the host limit is counted in.
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Quotes one argument so [`split_args`] (and `CommandLineToArgvW`) reads it back unchanged.
pub fn quote_arg(arg: &str) -> Cow<'_, str> {
    if !arg.is_empty() && !arg.contains([' ', '\t', '"']) {
        return Cow::Borrowed(arg);
    }

    let mut out = String::with_capacity(arg.len() + 2);
    out.push('"');
    let mut backslashes = 0;
    for c in arg.chars() {
        if c == '\\' {
            backslashes += 1;
            continue;
        }
        // Backslashes only escape when they run into a quote.
        let run = if c == '"' { backslashes * 2 + 1 } else { backslashes };
        out.push_str(&"\\".repeat(run));
        out.push(c);
        backslashes = 0;
    }
    out.push_str(&"\\".repeat(backslashes * 2));
    out.push('"');
    Cow::Owned(out)
}

/// Joins arguments into one command line with [`quote_arg`].
pub fn join_args<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| quote_arg(arg.as_ref()).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits a command-line fragment into arguments with the MSVC runtime rules.
///
/// `2n` backslashes before a quote yield `n` backslashes and toggle quoting,
/// `2n+1` yield `n` backslashes and a literal quote, and `""` inside a quoted
/// span is a literal quote. Backslashes anywhere else are literal.
pub fn split_args(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        while matches!(chars.peek(), Some(' ' | '\t')) {
            chars.next();
        }
        if chars.peek().is_none() {
            break;
        }

        let mut arg = String::new();
        let mut in_quotes = false;
        let mut backslashes = 0;

        while let Some(&c) = chars.peek() {
            match c {
                '\\' => {
                    backslashes += 1;
                    chars.next();
                }
                '"' => {
                    chars.next();
                    arg.push_str(&"\\".repeat(backslashes / 2));
                    if backslashes % 2 == 1 {
                        arg.push('"');
                    } else if in_quotes && chars.peek() == Some(&'"') {
                        chars.next();
                        arg.push('"');
                    } else {
                        in_quotes = !in_quotes;
                    }
                    backslashes = 0;
                }
                ' ' | '\t' if !in_quotes => break,
                _ => {
                    arg.push_str(&"\\".repeat(backslashes));
                    backslashes = 0;
                    arg.push(c);
                    chars.next();
                }
            }
        }
        arg.push_str(&"\\".repeat(backslashes));
        args.push(arg);
    }

    args
}
