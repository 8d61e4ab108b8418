//! Error types for shim operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("command line too long ({len} > {max} code units)")]
    CommandLineTooLong { len: usize, max: usize },

    #[error("failed to launch interpreter: {source}")]
    Spawn {
        interpreter: String,
        script: String,
        category: SpawnCategory,
        #[source]
        source: nodewrap_platform::Error,
    },
}

/// Coarse class of a spawn failure, used to pick a hint for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnCategory {
    NotFound,
    PermissionDenied,
    Other,
}

impl SpawnCategory {
    pub fn of(err: &nodewrap_platform::Error) -> Self {
        match err.io_kind() {
            Some(io::ErrorKind::NotFound) => SpawnCategory::NotFound,
            Some(io::ErrorKind::PermissionDenied) => SpawnCategory::PermissionDenied,
            _ => SpawnCategory::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
