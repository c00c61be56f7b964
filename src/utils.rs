use std::{fs, io, path::Path};

use crate::error::{PlotError, Result};

pub fn create_folder_if_not_exists(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| PlotError::io(dir, source))
}

/// Fails unless `path` exists and is a directory
pub fn require_dir(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|source| PlotError::io(path, source))?;
    if !metadata.is_dir() {
        return Err(PlotError::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        ));
    }
    Ok(())
}

pub fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    file_name(path).is_some_and(|name| name.ends_with(suffix))
}

/// Suffixes are matched against bare file names, so they may not carry a
/// path separator.
pub fn check_suffix(suffix: &str) -> Result<()> {
    if suffix.is_empty() || suffix.contains(['/', '\\']) {
        return Err(PlotError::InvalidSuffix(suffix.to_string()));
    }
    Ok(())
}
