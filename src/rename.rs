use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::{
    error::{PlotError, Result},
    utils::{check_suffix, file_name, require_dir},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Renamed {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Renames every file under `root` whose name ends with `from_suffix` so that
/// it ends with `to_suffix` instead. Files stay in their directory and their
/// contents are untouched.
///
/// Renames already done are kept if a later one fails.
pub fn rename_extension(root: &Path, from_suffix: &str, to_suffix: &str) -> Result<Vec<Renamed>> {
    check_suffix(from_suffix)?;
    require_dir(root)?;
    if to_suffix.contains(['/', '\\']) {
        return Err(PlotError::InvalidSuffix(to_suffix.to_string()));
    }

    // Collected up front so the walk never revisits a renamed file
    let mut pending = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        // Links are renamed themselves, never their targets
        if entry.file_type().is_dir() {
            continue;
        }

        let Some(stem) = file_name(entry.path()).and_then(|name| name.strip_suffix(from_suffix)) else {
            continue;
        };

        let to = entry.path().with_file_name(format!("{stem}{to_suffix}"));
        pending.push(Renamed {
            from: entry.into_path(),
            to,
        });
    }

    let mut renamed = Vec::with_capacity(pending.len());

    for rename in pending {
        if rename.from == rename.to {
            continue;
        }
        if rename.to.exists() {
            warn!(path = %rename.to.display(), "overwriting existing file");
        }

        fs::rename(&rename.from, &rename.to).map_err(|source| PlotError::io(&rename.from, source))?;
        info!(from = %rename.from.display(), to = %rename.to.display(), "renamed");
        renamed.push(rename);
    }

    Ok(renamed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renames_only_matching_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("protostg/100");
        fs::create_dir_all(&nested).unwrap();

        fs::write(dir.path().join("a.stg"), "0,1,2\n").unwrap();
        fs::write(nested.join("b.stg"), "3,4,5\n").unwrap();
        fs::write(dir.path().join("c.txt"), "notes").unwrap();

        let renamed = rename_extension(dir.path(), ".stg", ".csv").unwrap();

        assert_eq!(renamed.len(), 2);
        assert!(!dir.path().join("a.stg").exists());
        assert_eq!(fs::read(dir.path().join("a.csv")).unwrap(), b"0,1,2\n");
        assert_eq!(fs::read(nested.join("b.csv")).unwrap(), b"3,4,5\n");
        assert_eq!(fs::read(dir.path().join("c.txt")).unwrap(), b"notes");
    }

    #[test]
    fn test_keeps_rest_of_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("rand0147.stg.stg"), "").unwrap();

        let renamed = rename_extension(dir.path(), ".stg", ".csv").unwrap();

        assert_eq!(renamed[0].to, dir.path().join("rand0147.stg.csv"));
    }

    #[test]
    fn test_directories_are_not_renamed() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("graphs.stg")).unwrap();

        let renamed = rename_extension(dir.path(), ".stg", ".csv").unwrap();

        assert!(renamed.is_empty());
        assert!(dir.path().join("graphs.stg").is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_renames_symlinked_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("real.txt"), "0,1,2\n").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real.txt"), dir.path().join("link.stg")).unwrap();

        let renamed = rename_extension(dir.path(), ".stg", ".csv").unwrap();

        assert_eq!(renamed.len(), 1);
        let link = dir.path().join("link.csv");
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read(&link).unwrap(), b"0,1,2\n");
        assert!(dir.path().join("real.txt").exists());
    }

    #[test]
    fn test_missing_root_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = rename_extension(&dir.path().join("missing"), ".stg", ".csv").unwrap_err();
        assert!(matches!(err, PlotError::Io { .. }));
    }

    #[test]
    fn test_rejects_empty_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let err = rename_extension(dir.path(), "", ".csv").unwrap_err();
        assert!(matches!(err, PlotError::InvalidSuffix(_)));
    }
}
