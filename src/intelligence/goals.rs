// ABOUTME: Weekly workout goal tracking against the personal goals singleton
// ABOUTME: Counts workouts in the ISO week containing a given day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Duration, NaiveDate};
use pierre_logbook_core::models::{PersonalGoals, WorkoutRecord};
use serde::Serialize;

/// Progress toward the weekly workout target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyGoalProgress {
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Sunday of the week
    pub week_end: NaiveDate,
    /// Workouts logged this week
    pub completed: u32,
    /// Weekly target from the goals
    pub target: u32,
}

impl WeeklyGoalProgress {
    /// Share of the target reached, capped at 100
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.target == 0 {
            return 100.0;
        }
        (f64::from(self.completed) / f64::from(self.target) * 100.0).min(100.0)
    }

    /// Whether the target has been met
    #[must_use]
    pub const fn achieved(&self) -> bool {
        self.completed >= self.target
    }

    /// Workouts still needed this week
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.target.saturating_sub(self.completed)
    }
}

/// Workouts in the ISO week (Monday to Sunday) containing `today`
#[must_use]
pub fn weekly_goal_progress(
    workouts: &[WorkoutRecord],
    goals: &PersonalGoals,
    today: NaiveDate,
) -> WeeklyGoalProgress {
    let week_start = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    let week_end = week_start + Duration::days(6);
    let completed = workouts
        .iter()
        .filter(|w| (week_start..=week_end).contains(&w.date))
        .count();

    WeeklyGoalProgress {
        week_start,
        week_end,
        completed: u32::try_from(completed).unwrap_or(u32::MAX),
        target: goals.weekly_workouts,
    }
}
