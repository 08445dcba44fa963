//! File-backed store backend.

use crate::{KeyValueStore, StoreError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A key/value store where each key is a JSON file under a root directory.
///
/// This is the durable storage used for session state such as the persisted
/// cart: writes are synchronous and replace the whole file, reads of absent
/// keys return `None`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at the given directory, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The directory this store reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        // Keys are plain names, not paths.
        if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(StoreError::Backend(format!("invalid key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.path_for(key)?) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_raw(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        fs::write(self.path_for(key)?, bytes)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.path_for(key)?.exists())
    }
}
