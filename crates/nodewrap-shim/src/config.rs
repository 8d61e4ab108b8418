//! The optional `nodewrap.json` file that sits next to the launcher.
//!
//! Only two flat string fields matter, so the file is scanned rather than
//! parsed: find the quoted key, expect `:` and a quoted string, decode a
//! small escape set. Anything that does not fit that shape reads as absent.

use crate::error::{Error, Result};
use nodewrap_platform::cmdline::utf16_len;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// File name looked up in the launcher's own directory.
pub const CONFIG_FILENAME: &str = "nodewrap.json";

/// Key holding the interpreter path.
pub const INTERPRETER_KEY: &str = "nodePath";

/// Key holding the entry script path.
pub const SCRIPT_KEY: &str = "cliPath";

/// Read cap for the config file, terminator included; the rest is ignored.
pub const MAX_CONFIG_BYTES: usize = 8192;

/// Path bound in code units, terminator included.
pub const MAX_PATH_LEN: usize = 1024;

/// The raw text of a config file, capped at [`MAX_CONFIG_BYTES`].
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    text: Vec<u8>,
}

impl ConfigFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let read_err = |source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_err)?;
        let mut text = Vec::new();
        file.take((MAX_CONFIG_BYTES - 1) as u64)
            .read_to_end(&mut text)
            .map_err(read_err)?;

        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A usable path value for `key`, or `None` if it is absent or unusable.
    pub fn path_value(&self, key: &str) -> Option<String> {
        KeyScanner::new(&self.text)
            .string_value(key)
            .filter(|v| !v.is_empty() && utf16_len(v) < MAX_PATH_LEN)
    }
}

/// Finds flat string fields by key in JSON-like text.
pub struct KeyScanner<'a> {
    text: &'a [u8],
}

impl<'a> KeyScanner<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        Self { text }
    }

    /// Decoded value of the first `"key": "value"` pair, if any.
    ///
    /// Occurrences of the quoted key that are not followed by `:` and a
    /// terminated string are skipped. Values must be valid UTF-8.
    pub fn string_value(&self, key: &str) -> Option<String> {
        let token = format!("\"{key}\"");
        let token = token.as_bytes();

        let mut from = 0;
        while let Some(found) = find(&self.text[from..], token) {
            let start = from + found;
            let mut cursor = Cursor::new(self.text, start + token.len());
            if let Some(raw) = cursor.field_value() {
                return String::from_utf8(raw).ok();
            }
            from = start + 1;
        }
        None
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8], pos: usize) -> Self {
        Self { bytes, pos }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    /// `: "<string>"` right after a key token.
    fn field_value(&mut self) -> Option<Vec<u8>> {
        self.skip_whitespace();
        if !self.eat(b':') {
            return None;
        }
        self.skip_whitespace();
        self.quoted_string()
    }

    fn quoted_string(&mut self) -> Option<Vec<u8>> {
        if !self.eat(b'"') {
            return None;
        }

        let mut out = Vec::new();
        loop {
            match self.bump()? {
                b'"' => return Some(out),
                b'\\' => {
                    let escaped = self.bump()?;
                    out.push(match escaped {
                        b'n' => b'\n',
                        b't' => b'\t',
                        // `\\`, `\"` and anything unrecognised keep the byte itself.
                        other => other,
                    });
                }
                b => out.push(b),
            }
        }
    }
}
