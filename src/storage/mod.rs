// ABOUTME: Local persistence adapter storing each record collection under one key
// ABOUTME: Pluggable key-value backends (in-memory, file) behind the StorageBackend trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Local Persistence Adapter
//!
//! The logbook keeps every collection as one JSON array under a single key, the
//! way a browser keeps guest data in local storage. [`LocalStore`] is the only
//! type that touches a backend; reads never fail (missing or corrupt data reads
//! as empty) and writes report success as a boolean.
//!
//! ```rust,no_run
//! use pierre_logbook::storage::{memory::MemoryBackend, LocalStore};
//!
//! let store = LocalStore::new(MemoryBackend::new());
//! assert!(store.write_collection("workouts", &Vec::<serde_json::Value>::new()));
//! let workouts: Vec<serde_json::Value> = store.read_collection("workouts");
//! assert!(workouts.is_empty());
//! ```

/// Backend factory selecting an implementation from configuration
pub mod factory;
/// One-file-per-key backend for a data directory
pub mod file;
/// Concurrent in-memory backend with a byte quota
pub mod memory;
/// Whole-store export and import
pub mod snapshot;

use pierre_logbook_core::constants::defaults::STORAGE_QUOTA_BYTES;
use pierre_logbook_core::constants::storage_keys;
use pierre_logbook_core::errors::{AppError, AppResult, ErrorCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

pub use factory::Backend;
pub use snapshot::DataSnapshot;

/// Failures raised by a key-value backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// Writing the value would exceed the configured quota
    #[error("quota exceeded writing '{key}': {requested} bytes requested, {quota} bytes allowed")]
    QuotaExceeded {
        /// Key being written
        key: String,
        /// Total bytes the store would hold after the write
        requested: usize,
        /// Configured quota
        quota: usize,
    },
    /// The key contains characters the backend cannot store
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
    /// Filesystem failure
    #[error("I/O error on '{key}': {source}")]
    Io {
        /// Key being accessed
        key: String,
        /// Underlying error
        #[source]
        source: io::Error,
    },
}

impl From<StorageError> for AppError {
    fn from(error: StorageError) -> Self {
        let code = match &error {
            StorageError::QuotaExceeded { .. } => ErrorCode::QuotaExceeded,
            StorageError::InvalidKey(_) | StorageError::Io { .. } => {
                ErrorCode::StorageUnavailable
            }
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// Key-value storage modelled on browser local storage
///
/// Values are opaque strings. Implementations must be safe to share between
/// threads but no cross-process coordination is expected.
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the write is refused, e.g. when the quota is exceeded
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing an absent key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Every key currently stored
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be listed
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

/// Which backend implementation to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Process-local map, lost on exit
    Memory,
    /// JSON files under a data directory
    #[default]
    File,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::File => f.write_str("file"),
        }
    }
}

impl FromStr for BackendKind {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "file" | "fs" => Ok(Self::File),
            other => Err(AppError::config(format!(
                "Unknown storage backend '{other}' (expected file or memory)"
            ))),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Backend implementation
    pub backend: BackendKind,
    /// Directory used by the file backend
    pub data_dir: PathBuf,
    /// Prefix prepended to every key
    pub key_prefix: Option<String>,
    /// Byte quota enforced by the memory backend
    pub quota_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Memory,
            data_dir: PathBuf::from("."),
            key_prefix: None,
            quota_bytes: STORAGE_QUOTA_BYTES,
        }
    }
}

/// Typed JSON view over a [`StorageBackend`]
///
/// Owned by the caller and passed to the collection accessors; there is no
/// global store.
pub struct LocalStore<B: StorageBackend = Backend> {
    backend: B,
    prefix: String,
}

impl<B: StorageBackend> LocalStore<B> {
    /// Wrap a backend with no key prefix
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            prefix: String::new(),
        }
    }

    /// Wrap a backend, namespacing every key with `prefix`
    pub fn with_prefix(backend: B, prefix: impl Into<String>) -> Self {
        Self {
            backend,
            prefix: prefix.into(),
        }
    }

    /// The wrapped backend
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Key as stored in the backend
    #[must_use]
    pub fn storage_key(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }

    /// Read a JSON array of records
    ///
    /// Absent keys, backend failures and unparseable content all read as an
    /// empty collection; the latter two are logged at `warn`.
    pub fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(raw) = self.read_raw(key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(key, error = %e, "Discarding unparseable collection");
                Vec::new()
            }
        }
    }

    /// Replace a collection, reporting failures as an error
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the records cannot be encoded, or
    /// `StorageUnavailable`/`QuotaExceeded` if the backend refuses the write
    pub fn try_write_collection<T: Serialize>(&self, key: &str, records: &[T]) -> AppResult<()> {
        let raw = serde_json::to_string(records)?;
        self.backend
            .set_item(&self.storage_key(key), &raw)
            .map_err(|e| AppError::from(e).with_collection(key))?;
        debug!(key, count = records.len(), "Collection written");
        Ok(())
    }

    /// Replace a collection, returning `false` if the write failed
    pub fn write_collection<T: Serialize>(&self, key: &str, records: &[T]) -> bool {
        self.try_write_collection(key, records)
            .map_err(|e| warn!(key, error = %e, "Collection write failed"))
            .is_ok()
    }

    /// Read a single JSON value, `None` if absent or unparseable
    pub fn read_value<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read_raw(key)?;
        serde_json::from_str(&raw)
            .map_err(|e| warn!(key, error = %e, "Discarding unparseable value"))
            .ok()
    }

    /// Store a single value as JSON
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the backend refuses the write
    pub fn try_write_value<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.try_write_raw(key, &raw)
    }

    /// Store a single value as JSON, returning `false` on failure
    pub fn write_value<T: Serialize>(&self, key: &str, value: &T) -> bool {
        self.try_write_value(key, value)
            .map_err(|e| warn!(key, error = %e, "Value write failed"))
            .is_ok()
    }

    /// Read the stored string as-is
    pub fn read_raw(&self, key: &str) -> Option<String> {
        self.backend
            .get_item(&self.storage_key(key))
            .unwrap_or_else(|e| {
                warn!(key, error = %e, "Storage read failed");
                None
            })
    }

    /// Store a plain string (preference values are kept unquoted)
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the write
    pub fn try_write_raw(&self, key: &str, value: &str) -> AppResult<()> {
        self.backend
            .set_item(&self.storage_key(key), value)
            .map_err(|e| AppError::from(e).with_collection(key))
    }

    /// Remove one key, returning `false` on failure
    pub fn remove(&self, key: &str) -> bool {
        self.backend
            .remove_item(&self.storage_key(key))
            .map_err(|e| warn!(key, error = %e, "Storage remove failed"))
            .is_ok()
    }

    /// Remove every logbook key, as on guest sign-out
    ///
    /// Keys outside the logbook's own set are left alone, so several prefixed
    /// stores can share one backend.
    pub fn clear_all(&self) -> bool {
        let mut ok = true;
        for key in storage_keys::ALL {
            ok &= self.remove(key);
        }
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryBackend;
    use super::*;

    #[test]
    fn test_corrupt_collection_reads_empty() {
        let backend = MemoryBackend::new();
        backend.set_item("workouts", "{not json").unwrap();
        let store = LocalStore::new(backend);

        let records: Vec<serde_json::Value> = store.read_collection("workouts");
        assert!(records.is_empty());
    }

    #[test]
    fn test_prefix_is_applied_to_keys() {
        let backend = MemoryBackend::new();
        let store = LocalStore::with_prefix(backend.clone(), "test_");
        assert!(store.write_value("goals", &42_u32));

        assert!(backend.get_item("test_goals").unwrap().is_some());
        assert!(backend.get_item("goals").unwrap().is_none());
    }

    #[test]
    fn test_quota_maps_to_quota_code() {
        let error: AppError = StorageError::QuotaExceeded {
            key: "meals".to_owned(),
            requested: 10,
            quota: 5,
        }
        .into();
        assert_eq!(error.code, ErrorCode::QuotaExceeded);
    }
}
