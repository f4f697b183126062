//! Atomic file replacement.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

/// Sibling path used while writing `path`.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `bytes` to `path` via a temporary sibling and a rename.
///
/// A failed write never leaves a partial file under the final name.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = temp_path_for(path);

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OutputError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let result = write_temp(&temp_path, bytes).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| OutputError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source: e,
        })
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_temp(temp_path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(temp_path).map_err(|e| OutputError::Io {
        operation: "create",
        path: temp_path.to_path_buf(),
        source: e,
    })?;
    file.write_all(bytes).map_err(|e| OutputError::Io {
        operation: "write",
        path: temp_path.to_path_buf(),
        source: e,
    })?;
    file.sync_all().map_err(|e| OutputError::Io {
        operation: "sync",
        path: temp_path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_replaces_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, b"old").unwrap();

        write_atomic(&path, b"new").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_write_atomic_creates_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("out.xlsx");
        write_atomic(&path, b"data").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_failed_write_leaves_no_file() {
        let dir = tempdir().unwrap();
        // A directory in the way makes the rename fail.
        let path = dir.path().join("taken");
        fs::create_dir_all(path.join("inner")).unwrap();

        let result = write_atomic(&path, b"data");
        assert!(result.is_err());
        assert!(!temp_path_for(&path).exists());
        assert!(path.is_dir());
    }

    #[test]
    fn test_temp_path_keeps_extension() {
        assert_eq!(
            temp_path_for(Path::new("/data/PIN_Generated.xlsx")),
            PathBuf::from("/data/PIN_Generated.xlsx.tmp")
        );
    }
}
