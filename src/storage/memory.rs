// ABOUTME: In-memory storage backend with a byte quota like browser local storage
// ABOUTME: Shared DashMap so clones observe the same entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{StorageBackend, StorageError};
use dashmap::DashMap;
use pierre_logbook_core::constants::defaults::STORAGE_QUOTA_BYTES;
use std::sync::Arc;

/// In-memory key-value store
///
/// Clones share the same map, which lets tests hold a handle to the backend a
/// [`LocalStore`](super::LocalStore) owns.
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    entries: Arc<DashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    /// Create an empty store with the default 5 MiB quota
    #[must_use]
    pub fn new() -> Self {
        Self::with_quota(Some(STORAGE_QUOTA_BYTES))
    }

    /// Create an empty store with a custom quota (`None` for unlimited)
    #[must_use]
    pub fn with_quota(quota_bytes: Option<usize>) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            quota_bytes,
        }
    }

    /// Bytes held across all keys and values
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.key().len() + entry.value().len())
            .sum()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).map(|value| value.clone()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota_bytes {
            let replaced = self
                .entries
                .get(key)
                .map_or(0, |existing| key.len() + existing.len());
            let requested = self.used_bytes() - replaced + key.len() + value.len();
            if requested > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_owned(),
                    requested,
                    quota,
                });
            }
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.entries.iter().map(|entry| entry.key().clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_counts_replaced_value_once() {
        let backend = MemoryBackend::with_quota(Some(20));
        backend.set_item("k", "0123456789").unwrap();
        // Replacing the value frees the old bytes first
        backend.set_item("k", "9876543210abcdef").unwrap();
        assert_eq!(backend.used_bytes(), 17);

        let err = backend.set_item("other", "0123456789").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { quota: 20, .. }));
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn test_clones_share_entries() {
        let backend = MemoryBackend::with_quota(None);
        let handle = backend.clone();
        backend.set_item("theme", "dark").unwrap();
        assert_eq!(handle.get_item("theme").unwrap().as_deref(), Some("dark"));
    }
}
