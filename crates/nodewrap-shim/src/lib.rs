//! Interpreter relay for nodewrap.
//!
//! # Architecture
//!
//! Resolution is policy: a [`PathResolver`] decides which interpreter and
//! entry script to run, normally the `nodewrap.json` next to the binary and
//! then the compiled-in defaults. Launching is mechanism: [`launch`] rebuilds
//! the command line around the caller's untouched argument tail and hands it
//! to a [`Spawner`].
//!
//! # Example
//!
//! ```
//! use nodewrap_shim::{CommandLine, ResolvedPaths, Source};
//!
//! let paths = ResolvedPaths {
//!     interpreter: r"C:\rt\node.exe".to_string(),
//!     script: r"C:\rt\cli.js".to_string(),
//!     source: Source::Config,
//! };
//! let line = CommandLine::compose(&paths, r#"--flag "a b" c"#).unwrap();
//! assert_eq!(line.as_str(), r#""C:\rt\node.exe" "C:\rt\cli.js" --flag "a b" c"#);
//! ```

pub use error::{Error, Result, SpawnCategory};
pub use launch::{CommandLine, HostSpawner, Spawner, launch, launch_tail};
pub use resolver::{
    ConfigResolver, DefaultResolver, PairResolver, PathResolver, ResolvedPaths, Source, resolve,
    resolve_with,
};

pub mod config;
mod error;
mod launch;
mod resolver;
