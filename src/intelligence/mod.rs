// ABOUTME: Derived-statistics engine folding logbook collections into view models
// ABOUTME: Year in Review, achievements, streaks, personal records, and weekly goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Read-only analytics over stored records. Every function here is pure: it
//! takes slices of records and returns a report, never touching storage and
//! never failing.

/// Threshold achievements
pub mod achievements;
/// Weekly workout goal progress
pub mod goals;
/// Personal records and exercise history
pub mod records;
/// Calendar streaks
pub mod streaks;
/// Year in Review report
pub mod year_in_review;

pub use achievements::{Achievement, AchievementKind};
pub use goals::{weekly_goal_progress, WeeklyGoalProgress};
pub use records::{exercise_history, personal_records, ExerciseSession, PersonalRecord};
pub use streaks::{active_days, current_streak, longest_streak};
pub use year_in_review::{ExerciseFrequency, StrongestLift, YearInReview};

use crate::storage::{LocalStore, StorageBackend};

impl<B: StorageBackend> LocalStore<B> {
    /// Year in Review computed from everything currently stored
    #[must_use]
    pub fn year_in_review(&self, year: i32) -> YearInReview {
        YearInReview::compute(
            year,
            &self.workouts().get_all(),
            &self.meals().get_all(),
            &self.progress().get_all(),
        )
    }
}
