// ABOUTME: Logging configuration and tracing subscriber setup for the logbook binaries
// ABOUTME: EnvFilter plus a fmt layer in pretty, compact, or JSON form, written to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging setup
//!
//! Library code only emits `tracing` events; binaries call
//! [`LoggingConfig::init`] once. Output goes to stderr so command output on
//! stdout stays clean for piping.

use crate::config::environment::{env_keys, LogLevel};
use pierre_logbook_core::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::io;
use std::str::FromStr;
use tracing_subscriber::{
    fmt as fmt_layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Target name of this crate's log events
const CRATE_TARGET: &str = "pierre_logbook";

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `JSON` lines for machine consumption
    Json,
    /// Multi-field human readable output
    #[default]
    Pretty,
    /// One short line per event
    Compact,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(AppError::config(format!(
                "Invalid LOG_FORMAT value '{other}' (expected pretty, json, or compact)"
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Pretty => f.write_str("pretty"),
            Self::Compact => f.write_str("compact"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Level for this crate when `RUST_LOG` is not set
    pub level: LogLevel,
    /// Raw `RUST_LOG` directives, taking precedence over `level`
    pub directives: Option<String>,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `LOG_FORMAT` is set to an unknown format
    pub fn from_env() -> AppResult<Self> {
        let format = match env::var("LOG_FORMAT") {
            Ok(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => LogFormat::default(),
        };

        Ok(Self {
            level: env::var(env_keys::LOG_LEVEL)
                .map(|raw| LogLevel::from_str_or_default(&raw))
                .unwrap_or_default(),
            directives: env::var("RUST_LOG").ok().filter(|d| !d.trim().is_empty()),
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
        })
    }

    /// Filter applied to every event
    ///
    /// Without `RUST_LOG`, dependencies log warnings only and this crate logs
    /// at `level`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the `RUST_LOG` directives do not parse
    pub fn env_filter(&self) -> AppResult<EnvFilter> {
        let directives = self
            .directives
            .clone()
            .unwrap_or_else(|| format!("warn,{CRATE_TARGET}={}", self.level));
        EnvFilter::try_new(&directives)
            .map_err(|e| AppError::config(format!("Invalid RUST_LOG value '{directives}': {e}")))
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if the filter is invalid or a subscriber is already set
    pub fn init(&self) -> AppResult<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter()?);

        let result = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt_layer::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt_layer::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt_layer::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };

        result.map_err(|e| AppError::internal(format!("Failed to install log subscriber: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_scopes_crate_level() {
        let config = LoggingConfig {
            level: LogLevel::Debug,
            ..LoggingConfig::default()
        };
        assert!(config.env_filter().is_ok());
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
