//! Typed JSON layer over a storage backend.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::StorageBackend;
use crate::error::{Result, StoreError};

/// Typed load/save over raw key-value storage.
///
/// `load` never fails: missing data, unreadable storage, and corrupt JSON
/// all come back as the caller's default, so stale or damaged local state
/// can never wedge the application.
#[derive(Debug)]
pub struct JsonStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> JsonStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load and deserialize the value under `key`, substituting `default`
    /// when nothing usable is stored.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(error) => {
                tracing::warn!(key, %error, "store read failed; using default");
                return default;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(key, %error, "stored value is corrupt; using default");
                default
            }
        }
    }

    /// Serialize and overwrite the value under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string_pretty(value).map_err(|e| StoreError::Serialize {
            key: key.to_string(),
            source: e,
        })?;
        self.backend.write(key, &raw)
    }
}
