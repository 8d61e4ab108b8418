//! Interpreter and script resolution.
//!
//! # Architecture
//!
//! A [`PathResolver`] either produces a complete [`ResolvedPaths`] pair or
//! nothing. Resolvers never hand back half a pair, so chaining them with
//! [`PairResolver`] can never mix a configured interpreter with a default
//! script.

use crate::config::{CONFIG_FILENAME, ConfigFile, INTERPRETER_KEY, SCRIPT_KEY};
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(windows)]
const BUILTIN_NODE_PATH: &str = r"C:\Program Files\nodejs\node.exe";
#[cfg(windows)]
const BUILTIN_CLI_PATH: &str = r"C:\Program Files\nodejs\node_modules\cli\cli.js";

#[cfg(not(windows))]
const BUILTIN_NODE_PATH: &str = "/usr/local/bin/node";
#[cfg(not(windows))]
const BUILTIN_CLI_PATH: &str = "/usr/local/lib/node_modules/cli/cli.js";

/// Interpreter used when no config file supplies one.
///
/// Packagers can bake a different value in with `NODEWRAP_DEFAULT_NODE_PATH`
/// at build time.
pub const DEFAULT_NODE_PATH: &str = match option_env!("NODEWRAP_DEFAULT_NODE_PATH") {
    Some(path) => path,
    None => BUILTIN_NODE_PATH,
};

/// Entry script used when no config file supplies one.
///
/// Overridable at build time with `NODEWRAP_DEFAULT_CLI_PATH`.
pub const DEFAULT_CLI_PATH: &str = match option_env!("NODEWRAP_DEFAULT_CLI_PATH") {
    Some(path) => path,
    None => BUILTIN_CLI_PATH,
};

/// Where a resolved pair came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Config,
    Default,
}

/// The interpreter and entry script to launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub interpreter: String,
    pub script: String,
    pub source: Source,
}

impl ResolvedPaths {
    pub fn defaults() -> Self {
        Self {
            interpreter: DEFAULT_NODE_PATH.to_string(),
            script: DEFAULT_CLI_PATH.to_string(),
            source: Source::Default,
        }
    }
}

pub trait PathResolver {
    fn resolve(&self) -> Option<ResolvedPaths>;
}

/// Reads both paths from a config file; succeeds only if both are present.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    path: PathBuf,
}

impl ConfigResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Looks for [`CONFIG_FILENAME`] next to the running executable.
    pub fn beside_exe() -> Option<Self> {
        match nodewrap_platform::dir::beside_exe(CONFIG_FILENAME) {
            Ok(path) => Some(Self::new(path)),
            Err(e) => {
                debug!(error = %e, "cannot locate config next to executable");
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PathResolver for ConfigResolver {
    fn resolve(&self) -> Option<ResolvedPaths> {
        let config = match ConfigFile::load(&self.path) {
            Ok(config) => config,
            Err(e) => {
                debug!(error = %e, "config not loaded");
                return None;
            }
        };
        debug!(path = %config.path().display(), "loaded config");

        let interpreter = config.path_value(INTERPRETER_KEY);
        let script = config.path_value(SCRIPT_KEY);
        match (interpreter, script) {
            (Some(interpreter), Some(script)) => Some(ResolvedPaths {
                interpreter,
                script,
                source: Source::Config,
            }),
            (interpreter, script) => {
                debug!(
                    has_interpreter = interpreter.is_some(),
                    has_script = script.is_some(),
                    "config incomplete"
                );
                None
            }
        }
    }
}

/// Always yields the compiled-in pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResolver;

impl PathResolver for DefaultResolver {
    fn resolve(&self) -> Option<ResolvedPaths> {
        debug!("using default paths");
        Some(ResolvedPaths::defaults())
    }
}

impl<R: PathResolver> PathResolver for Option<R> {
    fn resolve(&self) -> Option<ResolvedPaths> {
        self.as_ref().and_then(|r| r.resolve())
    }
}

#[derive(Clone)]
pub struct PairResolver<R1, R2> {
    primary: R1,
    fallback: R2,
}

impl<R1, R2> PairResolver<R1, R2>
where
    R1: PathResolver,
    R2: PathResolver,
{
    pub fn new(primary: R1, fallback: R2) -> Self {
        Self { primary, fallback }
    }
}

impl<R1, R2> PathResolver for PairResolver<R1, R2>
where
    R1: PathResolver,
    R2: PathResolver,
{
    fn resolve(&self) -> Option<ResolvedPaths> {
        self.primary.resolve().or_else(|| self.fallback.resolve())
    }
}

/// Resolves with `resolver`, falling back to the defaults if it yields nothing.
pub fn resolve_with<R: PathResolver>(resolver: &R) -> ResolvedPaths {
    resolver.resolve().unwrap_or_else(ResolvedPaths::defaults)
}

/// The launcher's resolution chain: config file next to the binary, then defaults.
pub fn resolve() -> ResolvedPaths {
    resolve_with(&PairResolver::new(
        ConfigResolver::beside_exe(),
        DefaultResolver,
    ))
}
