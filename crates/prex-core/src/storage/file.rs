//! File-based storage implementation.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-based storage.
///
/// Stores each record as one file in a directory.
pub struct FileStorage {
    /// Base directory for record storage.
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new file storage with the given base directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("Failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create file storage in the default location.
    ///
    /// On Linux: `~/.local/share/prex/`
    /// On Windows: `%LOCALAPPDATA%\prex\`
    pub fn default_location() -> StorageResult<Self> {
        Self::new(Self::default_dir()?)
    }

    /// The directory [`FileStorage::default_location`] uses.
    pub fn default_dir() -> StorageResult<PathBuf> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;
        Ok(base.join("prex"))
    }

    /// Get the file path for a record name.
    fn record_path(&self, name: &str) -> PathBuf {
        // Sanitize the name to be safe for filenames
        let safe: String = name
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{}.json", safe))
    }

    /// Get the base path.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Storage for FileStorage {
    fn read(&self, name: &str) -> BoxFuture<'_, StorageResult<Option<Vec<u8>>>> {
        let path = self.record_path(name);
        Box::pin(async move {
            match fs::read(&path) {
                Ok(bytes) => Ok(Some(bytes)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(StorageError::Io(format!("Failed to read {}: {}", path.display(), e))),
            }
        })
    }

    fn write(&self, name: &str, bytes: Vec<u8>) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.record_path(name);
        Box::pin(async move {
            // Replace atomically via a sibling temp file
            let tmp = path.with_extension("json.tmp");
            fs::write(&tmp, &bytes).map_err(|e| {
                StorageError::Io(format!("Failed to write {}: {}", tmp.display(), e))
            })?;
            fs::rename(&tmp, &path).map_err(|e| {
                StorageError::Io(format!("Failed to write {}: {}", path.display(), e))
            })
        })
    }

    fn erase(&self, name: &str) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.record_path(name);
        Box::pin(async move {
            match fs::remove_file(&path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(StorageError::Io(format!("Failed to delete {}: {}", path.display(), e))),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pollster::block_on;
    use tempfile::tempdir;

    #[test]
    fn test_file_storage_write_read() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        block_on(storage.write("prex-storage", b"{}".to_vec())).unwrap();
        let loaded = block_on(storage.read("prex-storage")).unwrap();

        assert_eq!(loaded, Some(b"{}".to_vec()));
        assert!(dir.path().join("prex-storage.json").exists());
    }

    #[test]
    fn test_file_storage_absent() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        assert!(block_on(storage.read("nonexistent")).unwrap().is_none());
    }

    #[test]
    fn test_file_storage_erase() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        block_on(storage.write("test", vec![1])).unwrap();
        block_on(storage.erase("test")).unwrap();
        assert!(block_on(storage.read("test")).unwrap().is_none());
        block_on(storage.erase("test")).unwrap();
    }

    #[test]
    fn test_file_storage_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = FileStorage::new(nested.clone()).unwrap();
        assert_eq!(storage.base_path(), nested.as_path());
        assert!(nested.is_dir());
    }

    #[test]
    fn test_file_storage_sanitizes_name() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        block_on(storage.write("test/doc:with*special", vec![9])).unwrap();

        let loaded = block_on(storage.read("test/doc:with*special")).unwrap();
        assert_eq!(loaded, Some(vec![9]));
        assert!(dir.path().join("test_doc_with_special.json").exists());
    }
}
