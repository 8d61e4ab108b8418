use crate::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Directory holding the running executable.
pub fn exe_dir() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(Error::CurrentExe)?;
    parent_of(&exe)
}

/// Path of `file_name` next to the running executable.
pub fn beside_exe(file_name: impl AsRef<Path>) -> Result<PathBuf> {
    exe_dir().map(|dir| dir.join(file_name))
}

fn parent_of(path: &Path) -> Result<PathBuf> {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::NoParent(path.to_path_buf()))
}
