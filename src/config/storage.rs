use crate::domain::ports::Storage;
use crate::utils::error::{Result, WordFreqError};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| WordFreqError::io(path, e))
    }

    /// Writes to a temporary file next to `path`, then renames it into
    /// place. On any error the temporary file is removed and `path` keeps
    /// its previous content.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let temp_file = NamedTempFile::new_in(parent).map_err(|e| WordFreqError::io(path, e))?;
        // Temp files are created owner-only; give the result normal file
        // permissions, or the ones the file being replaced had.
        if let Some(permissions) = target_permissions(path) {
            temp_file
                .as_file()
                .set_permissions(permissions)
                .map_err(|e| WordFreqError::io(path, e))?;
        }
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            writer
                .write_all(data)
                .and_then(|_| writer.flush())
                .map_err(|e| WordFreqError::io(path, e))?;
        }
        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| WordFreqError::io(path, e))?;

        temp_file
            .persist(path)
            .map_err(|e| WordFreqError::io(path, e.error))?;
        Ok(())
    }

    /// True only for regular files; directories do not count.
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    if let Ok(metadata) = fs::metadata(path) {
        if metadata.is_file() {
            return Some(metadata.permissions());
        }
    }
    default_permissions()
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        let storage = LocalStorage::new();

        storage.write_file(&path, b"a:1\n").unwrap();

        assert!(storage.exists(&path));
        assert_eq!(storage.read_file(&path).unwrap(), b"a:1\n");
    }

    #[test]
    fn test_write_replaces_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        fs::write(&path, "old content that is longer than the new one\n").unwrap();

        LocalStorage::new().write_file(&path, b"x:1\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "x:1\n");
    }

    #[test]
    fn test_write_into_missing_directory_fails_cleanly() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no-such-dir").join("out.txt");

        let err = LocalStorage::new().write_file(&path, b"x:1\n").unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_write_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        // Renaming a file over a directory fails after the temp file exists.
        let target = temp_dir.path().join("occupied");
        fs::create_dir(&target).unwrap();

        assert!(LocalStorage::new().write_file(&target, b"x:1\n").is_err());

        let leftovers: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("occupied")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_directory_is_access_denied() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let locked = temp_dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        // Root ignores directory permissions; nothing to check then.
        let can_write = fs::write(locked.join("writable-check"), b"").is_ok();
        if !can_write {
            let path = locked.join("out.txt");
            let err = LocalStorage::new().write_file(&path, b"x:1\n").unwrap_err();

            assert_eq!(err.category(), ErrorCategory::AccessDenied);
            assert_eq!(
                err.user_friendly_message(),
                "Error: Access to the file is denied. Please check file permissions."
            );
            assert!(!path.exists());
        }

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_directory_is_not_an_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!LocalStorage::new().exists(temp_dir.path()));
    }
}
