// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, in-memory stores, and record builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pierre_logbook`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use chrono::NaiveDate;
use pierre_logbook::models::{ExerciseEntry, NewWorkout, SetEntry, WorkoutRecord};
use pierre_logbook::storage::memory::MemoryBackend;
use pierre_logbook::storage::LocalStore;
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory store with the default quota
pub fn memory_store() -> LocalStore<MemoryBackend> {
    init_test_logging();
    LocalStore::new(MemoryBackend::new())
}

/// Parse an ISO date
pub fn date(iso: &str) -> NaiveDate {
    iso.parse().unwrap()
}

/// Workout draft with one exercise and the given `(weight, reps)` sets
pub fn workout_draft(iso: &str, exercise: &str, sets: &[(f64, u32)]) -> NewWorkout {
    let entry = sets
        .iter()
        .fold(ExerciseEntry::new(exercise), |entry, &(weight, reps)| {
            entry.with_set(SetEntry::new(weight, reps, 2))
        });
    NewWorkout::new(date(iso)).with_exercise(entry)
}

/// Materialized workout with a predictable id
pub fn workout(iso: &str, exercise: &str, sets: &[(f64, u32)]) -> WorkoutRecord {
    WorkoutRecord::from_draft(
        format!("{exercise}-{iso}"),
        workout_draft(iso, exercise, sets),
    )
}
