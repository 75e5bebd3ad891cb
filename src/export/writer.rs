//! Atomic document writing.
//!
//! The document is staged next to the destination and renamed over it, so
//! the destination is always either the previous content or the complete
//! new document, never a partial write.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::Result;

/// Serialize `document` as pretty-printed JSON and write it to `path`.
///
/// Missing parent directories are created. The staging file is removed if
/// the final rename fails.
///
/// # Errors
///
/// Returns an error if serialization fails or the destination cannot be
/// written.
pub fn write_json<T: Serialize>(path: &Path, document: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(document)?;
    let staged = staging_path(path);
    fs::write(&staged, json.as_bytes())?;
    if let Err(e) = fs::rename(&staged, path) {
        let _ = fs::remove_file(&staged);
        return Err(e.into());
    }

    debug!(path = %path.display(), bytes = json.len(), "document written");
    Ok(())
}

/// Staging file used for the atomic rename, in the destination directory.
fn staging_path(path: &Path) -> PathBuf {
    let mut staged = path.as_os_str().to_os_string();
    staged.push(".tmp");
    PathBuf::from(staged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn writes_pretty_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_json(&path, &json!({"a": 1})).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("out.json");

        write_json(&path, &json!([])).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn overwrites_existing_file_completely() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "previous content that is much longer than the new one").unwrap();

        write_json(&path, &json!({"fresh": true})).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"fresh\": true\n}");
    }

    #[test]
    fn leaves_no_staging_file_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_json(&path, &json!({})).unwrap();

        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn staging_path_stays_in_destination_directory() {
        let staged = staging_path(Path::new("data/out.json"));
        assert_eq!(staged, Path::new("data/out.json.tmp"));
    }
}
