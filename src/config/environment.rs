// ABOUTME: Environment-based configuration for the logbook store, display unit, and logging
// ABOUTME: Reads LOGBOOK_* variables once at startup and rejects values that do not parse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logging::LoggingConfig;
use crate::storage::{BackendKind, StorageConfig};
use pierre_logbook_core::constants::defaults::STORAGE_QUOTA_BYTES;
use pierre_logbook_core::errors::{AppError, AppResult};
use pierre_logbook_core::units::WeightUnit;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{self, Display};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

/// Directory name appended to the platform data directory
const DATA_DIR_NAME: &str = "pierre-logbook";

/// Environment variable names read by [`LogbookConfig::from_env`]
pub mod env_keys {
    /// Data directory for the file backend
    pub const DATA_DIR: &str = "LOGBOOK_DATA_DIR";
    /// `file` or `memory`
    pub const BACKEND: &str = "LOGBOOK_BACKEND";
    /// Prefix prepended to every storage key
    pub const KEY_PREFIX: &str = "LOGBOOK_KEY_PREFIX";
    /// Byte quota for the memory backend
    pub const QUOTA_BYTES: &str = "LOGBOOK_QUOTA_BYTES";
    /// Display unit used until a preference is saved
    pub const WEIGHT_UNIT: &str = "LOGBOOK_WEIGHT_UNIT";
    /// Level for the crate's own log target
    pub const LOG_LEVEL: &str = "LOGBOOK_LOG_LEVEL";
}

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Complete runtime configuration
#[derive(Debug, Clone)]
pub struct LogbookConfig {
    /// Where and how records are persisted
    pub storage: StorageConfig,
    /// Display unit used when no preference has been saved
    pub weight_unit: WeightUnit,
    /// Log output settings
    pub logging: LoggingConfig,
}

impl LogbookConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is set to a value that does not parse
    pub fn from_env() -> AppResult<Self> {
        debug!("Loading logbook configuration from environment variables");

        let data_dir = env::var(env_keys::DATA_DIR)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(default_data_dir, PathBuf::from);

        let config = Self {
            storage: StorageConfig {
                backend: env_parsed(env_keys::BACKEND)?.unwrap_or_default(),
                data_dir,
                key_prefix: env::var(env_keys::KEY_PREFIX)
                    .ok()
                    .filter(|prefix| !prefix.is_empty()),
                quota_bytes: env_parsed(env_keys::QUOTA_BYTES)?.unwrap_or(STORAGE_QUOTA_BYTES),
            },
            weight_unit: env_parsed(env_keys::WEIGHT_UNIT)?.unwrap_or_default(),
            logging: LoggingConfig::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the quota is zero
    pub fn validate(&self) -> AppResult<()> {
        if self.storage.quota_bytes == 0 {
            return Err(AppError::config(format!(
                "{} must be greater than zero",
                env_keys::QUOTA_BYTES
            )));
        }
        Ok(())
    }

    /// One-line description for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        let location = match self.storage.backend {
            BackendKind::File => self.storage.data_dir.display().to_string(),
            BackendKind::Memory => format!("{} byte quota", self.storage.quota_bytes),
        };
        format!(
            "backend={} ({location}) prefix={} unit={} log={}",
            self.storage.backend,
            self.storage.key_prefix.as_deref().unwrap_or("-"),
            self.weight_unit,
            self.logging.level,
        )
    }

    /// Emit the configuration summary at info level
    pub fn log_summary(&self) {
        info!(config = %self.summary(), "Logbook configuration loaded");
    }
}

/// `<platform data dir>/pierre-logbook`, or a relative directory when the
/// platform has none
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// Parse `key` when set and non-empty
fn env_parsed<T>(key: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
        _ => Ok(None),
    }
}
