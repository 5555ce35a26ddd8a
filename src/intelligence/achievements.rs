// ABOUTME: Threshold achievements derived from Year in Review statistics
// ABOUTME: Recomputed on every read, so deleting data can un-earn an achievement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::year_in_review::YearInReview;
use pierre_logbook_core::constants::achievements::{
    ACTIVE_DAYS, CENTURION_WORKOUTS, DEDICATED_WORKOUTS, FIRST_WORKOUT, PROGRESS_ENTRIES,
    STREAK_MONTH, STREAK_WEEK, TOTAL_MEALS, TOTAL_SETS,
};
use serde::Serialize;

/// The fixed set of achievements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    /// First workout logged
    GettingStarted,
    /// 50+ workouts
    Dedicated,
    /// 100+ workouts
    Centurion,
    /// 7+ day streak
    OnFire,
    /// 30+ day streak
    Unstoppable,
    /// 500+ sets
    VolumeBuilder,
    /// 100+ meals
    NutritionTracker,
    /// 10+ progress entries
    ProgressLogger,
    /// 100+ active days
    ConsistencyChampion,
}

impl AchievementKind {
    /// Every achievement in display order
    pub const ALL: [Self; 9] = [
        Self::GettingStarted,
        Self::Dedicated,
        Self::Centurion,
        Self::OnFire,
        Self::Unstoppable,
        Self::VolumeBuilder,
        Self::NutritionTracker,
        Self::ProgressLogger,
        Self::ConsistencyChampion,
    ];

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GettingStarted => "Getting Started",
            Self::Dedicated => "Dedicated",
            Self::Centurion => "Centurion",
            Self::OnFire => "On Fire",
            Self::Unstoppable => "Unstoppable",
            Self::VolumeBuilder => "Volume Builder",
            Self::NutritionTracker => "Nutrition Tracker",
            Self::ProgressLogger => "Progress Logger",
            Self::ConsistencyChampion => "Consistency Champion",
        }
    }

    /// One-line description of the requirement
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::GettingStarted => "Complete your first workout",
            Self::Dedicated => "Complete 50 workouts",
            Self::Centurion => "Complete 100 workouts",
            Self::OnFire => "Work out 7 days in a row",
            Self::Unstoppable => "Work out 30 days in a row",
            Self::VolumeBuilder => "Log 500 sets",
            Self::NutritionTracker => "Log 100 meals",
            Self::ProgressLogger => "Record 10 progress entries",
            Self::ConsistencyChampion => "Work out on 100 different days",
        }
    }

    /// Value the user must reach
    #[must_use]
    pub const fn threshold(self) -> u64 {
        match self {
            Self::GettingStarted => FIRST_WORKOUT,
            Self::Dedicated => DEDICATED_WORKOUTS,
            Self::Centurion => CENTURION_WORKOUTS,
            Self::OnFire => STREAK_WEEK,
            Self::Unstoppable => STREAK_MONTH,
            Self::VolumeBuilder => TOTAL_SETS,
            Self::NutritionTracker => TOTAL_MEALS,
            Self::ProgressLogger => PROGRESS_ENTRIES,
            Self::ConsistencyChampion => ACTIVE_DAYS,
        }
    }

    /// The user's current value for this achievement's metric
    #[must_use]
    pub const fn current(self, review: &YearInReview) -> u64 {
        match self {
            Self::GettingStarted | Self::Dedicated | Self::Centurion => review.total_workouts,
            Self::OnFire | Self::Unstoppable => review.longest_streak,
            Self::VolumeBuilder => review.total_sets,
            Self::NutritionTracker => review.total_meals,
            Self::ProgressLogger => review.total_progress_entries,
            Self::ConsistencyChampion => review.active_days,
        }
    }
}

/// One achievement with the user's standing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    /// Which achievement
    pub kind: AchievementKind,
    /// Display name
    pub name: &'static str,
    /// Requirement text
    pub description: &'static str,
    /// Value required
    pub threshold: u64,
    /// Value reached
    pub current: u64,
    /// Whether `current` meets `threshold`
    pub earned: bool,
}

impl Achievement {
    /// Share of the threshold reached, capped at 1.0
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.threshold == 0 {
            return 1.0;
        }
        (self.current as f64 / self.threshold as f64).min(1.0)
    }
}

/// Evaluate every achievement against a review
#[must_use]
pub fn evaluate(review: &YearInReview) -> Vec<Achievement> {
    AchievementKind::ALL
        .into_iter()
        .map(|kind| {
            let current = kind.current(review);
            Achievement {
                kind,
                name: kind.name(),
                description: kind.description(),
                threshold: kind.threshold(),
                current,
                earned: current >= kind.threshold(),
            }
        })
        .collect()
}
