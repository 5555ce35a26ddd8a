// ABOUTME: Main library entry point for the Pierre fitness logbook
// ABOUTME: Local persistence, collection accessors, statistics engine, and workout templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Logbook
//!
//! A personal fitness logbook: workouts with per-set detail, meals with
//! macros, body progress entries, and a profile with goals and preferences.
//! Everything is kept in a local key-value store, one JSON collection per key.
//!
//! ## Architecture
//!
//! - **Storage**: [`storage::LocalStore`] over a pluggable [`storage::StorageBackend`]
//! - **Collections**: typed CRUD accessors borrowed from the store
//! - **Intelligence**: Year in Review, achievements, streaks, and personal records
//! - **Templates**: validated workout templates mapped to the logging form
//! - **Config**: environment-only configuration with structured logging
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use pierre_logbook::errors::AppResult;
//! use pierre_logbook::models::{ExerciseEntry, NewWorkout, SetEntry};
//! use pierre_logbook::storage::{memory::MemoryBackend, LocalStore};
//!
//! fn main() -> AppResult<()> {
//!     let store = LocalStore::new(MemoryBackend::new());
//!     let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap_or_default();
//!     let draft = NewWorkout::new(date)
//!         .with_exercise(ExerciseEntry::new("Squat").with_set(SetEntry::new(100.0, 5, 2)));
//!     store.workouts().save(draft)?;
//!
//!     let review = store.year_in_review(2025);
//!     println!("{} kg lifted", review.total_weight_lifted);
//!     Ok(())
//! }
//! ```

/// Typed CRUD accessors for each record collection
pub mod collections;

/// Environment-driven configuration
pub mod config;

/// Derived statistics over stored records
pub mod intelligence;

/// Tracing subscriber setup
pub mod logging;

/// Deterministic sample data for demos and benchmarks
pub mod sample_data;

/// Local persistence adapter and backends
pub mod storage;

/// Workout templates and the set-logging form
pub mod templates;

pub use pierre_logbook_core::{constants, errors, models, units};
