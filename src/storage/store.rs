// Storage port and implementations.
// The GifStore persists through this interface so its core logic has no
// filesystem dependency.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::Result;

/// Key/value storage port. Reads are best-effort (absent keys are None),
/// writes replace the whole value for a key.
pub trait Storage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Filesystem-backed storage. Each key maps to one JSON file under the
/// base directory.
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at the given directory.
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Create storage rooted at the platform data directory.
    pub fn at_data_dir() -> Option<Self> {
        super::paths::data_dir().map(Self::new)
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        let path = super::paths::key_path(&self.base, key);
        fs::read_to_string(path).ok()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = super::paths::key_path(&self.base, key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write atomically via temp file
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}

/// In-memory storage for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_storage_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().to_path_buf());

        storage.write("search_history", r#"{"cats":[]}"#).unwrap();
        assert_eq!(
            storage.read("search_history").as_deref(),
            Some(r#"{"cats":[]}"#)
        );
    }

    #[test]
    fn test_file_storage_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().to_path_buf());

        storage.write("k", "first").unwrap();
        storage.write("k", "second").unwrap();
        assert_eq!(storage.read("k").as_deref(), Some("second"));
    }

    #[test]
    fn test_file_storage_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().to_path_buf());

        assert!(storage.read("nonexistent").is_none());
    }

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert!(storage.read("k").is_none());

        storage.write("k", "v").unwrap();
        assert_eq!(storage.read("k").as_deref(), Some("v"));
    }
}
