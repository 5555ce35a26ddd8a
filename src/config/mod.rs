// ABOUTME: Configuration module for the logbook binaries and library consumers
// ABOUTME: Re-exports the environment-driven LogbookConfig and its parts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration is read from environment variables only. There is no config
//! file: the logbook has a handful of settings and every binary loads them once
//! with [`LogbookConfig::from_env`].

/// Environment variable parsing
pub mod environment;

pub use environment::{default_data_dir, env_keys, LogLevel, LogbookConfig};
