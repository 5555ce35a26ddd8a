// ABOUTME: Storage factory for configuration-based backend selection
// ABOUTME: Backend enum dispatches to the memory or file implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::file::FileBackend;
use super::memory::MemoryBackend;
use super::{BackendKind, LocalStore, StorageBackend, StorageConfig, StorageError};
use pierre_logbook_core::errors::AppResult;
use tracing::info;

/// Unified storage backend chosen at runtime
#[derive(Debug, Clone)]
pub enum Backend {
    /// In-memory backend
    Memory(MemoryBackend),
    /// File backend
    File(FileBackend),
}

impl Backend {
    /// Build the backend described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the file backend's data directory cannot be created
    pub fn new(config: &StorageConfig) -> AppResult<Self> {
        match config.backend {
            BackendKind::Memory => {
                info!(
                    "Initializing in-memory storage (quota: {} bytes)",
                    config.quota_bytes
                );
                let quota = Some(config.quota_bytes);
                Ok(Self::Memory(MemoryBackend::with_quota(quota)))
            }
            BackendKind::File => {
                info!("Initializing file storage at {}", config.data_dir.display());
                Ok(Self::File(FileBackend::open(&config.data_dir)?))
            }
        }
    }

    /// Which implementation this is
    #[must_use]
    pub const fn kind(&self) -> BackendKind {
        match self {
            Self::Memory(_) => BackendKind::Memory,
            Self::File(_) => BackendKind::File,
        }
    }
}

impl StorageBackend for Backend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Self::Memory(inner) => inner.get_item(key),
            Self::File(inner) => inner.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Memory(inner) => inner.set_item(key, value),
            Self::File(inner) => inner.set_item(key, value),
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match self {
            Self::Memory(inner) => inner.remove_item(key),
            Self::File(inner) => inner.remove_item(key),
        }
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        match self {
            Self::Memory(inner) => inner.keys(),
            Self::File(inner) => inner.keys(),
        }
    }
}

impl LocalStore<Backend> {
    /// Build the configured backend and wrap it, applying the key prefix
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be created
    pub fn from_config(config: &StorageConfig) -> AppResult<Self> {
        let backend = Backend::new(config)?;
        Ok(match &config.key_prefix {
            Some(prefix) => Self::with_prefix(backend, prefix.clone()),
            None => Self::new(backend),
        })
    }
}
