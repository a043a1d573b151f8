//! Storage backends: where persisted values actually live.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Result, StoreError};

/// A key-scoped durable string store.
///
/// Implementations only move bytes; typing and corruption recovery live
/// in [`JsonStore`](crate::JsonStore).
pub trait StorageBackend {
    /// Read the raw value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Filesystem backend: one JSON file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FsBackend {
    dir: PathBuf,
}

impl FsBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io {
                operation: "read",
                path,
                source: e,
            }),
        }
    }

    /// Write via temp file + rename so a crash mid-save never leaves a
    /// torn value behind.
    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::Io {
            operation: "create directory for",
            path: self.dir.clone(),
            source: e,
        })?;

        let path = self.key_path(key);
        let temp_path = self.dir.join(format!("{key}.json.tmp"));

        let mut file = File::create(&temp_path).map_err(|e| StoreError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(value.as_bytes())
            .map_err(|e| StoreError::Io {
                operation: "write",
                path: temp_path.clone(),
                source: e,
            })?;
        file.sync_all().map_err(|e| StoreError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &path).map_err(|e| StoreError::AtomicWriteFailed {
            temp_path,
            target_path: path,
            source: e,
        })
    }
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_fs_backend_round_trip() {
        let dir = tempdir().unwrap();
        let backend = FsBackend::new(dir.path());

        assert_eq!(backend.read("bookmarks").unwrap(), None);
        backend.write("bookmarks", "[\"Doc A\"]").unwrap();
        assert_eq!(
            backend.read("bookmarks").unwrap(),
            Some("[\"Doc A\"]".to_string())
        );
    }

    #[test]
    fn test_fs_backend_creates_data_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("state").join("briefdesk");
        let backend = FsBackend::new(&nested);

        backend.write("reading_progress", "{}").unwrap();
        assert!(nested.join("reading_progress.json").exists());
    }

    #[test]
    fn test_fs_backend_overwrites() {
        let dir = tempdir().unwrap();
        let backend = FsBackend::new(dir.path());

        backend.write("k", "first").unwrap();
        backend.write("k", "second").unwrap();
        assert_eq!(backend.read("k").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_memory_backend_round_trip() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.read("k").unwrap(), None);
        backend.write("k", "v").unwrap();
        assert_eq!(backend.read("k").unwrap(), Some("v".to_string()));
    }
}
