use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to locate the running executable: {0}")]
    CurrentExe(#[source] io::Error),

    #[error("executable path has no parent directory: {}", .0.display())]
    NoParent(PathBuf),

    #[error("command failed: {cmd}, source: {source}")]
    CommandFailed { cmd: String, source: io::Error },

    #[error("failed to wait for {cmd}: {source}")]
    WaitFailed { cmd: String, source: io::Error },
}

impl Error {
    /// OS error kind behind a failed spawn or wait, if any.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Error::CurrentExe(source)
            | Error::CommandFailed { source, .. }
            | Error::WaitFailed { source, .. } => Some(source.kind()),
            Error::NoParent(_) => None,
        }
    }

    /// Raw OS error code behind the failure, if the OS reported one.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Error::CurrentExe(source)
            | Error::CommandFailed { source, .. }
            | Error::WaitFailed { source, .. } => source.raw_os_error(),
            Error::NoParent(_) => None,
        }
    }
}
