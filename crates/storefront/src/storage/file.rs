//! File-backed storage: one file per entry under a data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Storage, StorageError};

/// Stores each entry as a file named after its key inside `dir`.
///
/// Keys are restricted to simple names (no path separators), so an entry can
/// never land outside the data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `dir`, creating the directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty()
            || key
                .chars()
                .any(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_')))
        {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(key))
    }

    /// The directory entries are stored under.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key)?;
        fs::write(&path, value).map_err(|source| StorageError::Io {
            key: key.to_owned(),
            source,
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }
}
