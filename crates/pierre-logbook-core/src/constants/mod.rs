// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Storage keys, record defaults, template placeholders, and achievement thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion constants
pub mod units;

/// Storage keys, one per persisted collection or preference
pub mod storage_keys {
    /// Workout records
    pub const WORKOUTS: &str = "workouts";
    /// Meal records
    pub const MEALS: &str = "meals";
    /// Body progress records
    pub const PROGRESS: &str = "progress";
    /// Profile singleton
    pub const PROFILE: &str = "profile";
    /// Personal goals singleton
    pub const GOALS: &str = "goals";
    /// Theme preference
    pub const THEME: &str = "theme";
    /// Display weight unit preference
    pub const WEIGHT_UNIT: &str = "weight_unit";
    /// Guest-mode flag
    pub const GUEST_MODE: &str = "guest_mode";

    /// Every key owned by the logbook, used when clearing guest data
    pub const ALL: [&str; 8] = [
        WORKOUTS,
        MEALS,
        PROGRESS,
        PROFILE,
        GOALS,
        THEME,
        WEIGHT_UNIT,
        GUEST_MODE,
    ];
}

/// Identity and record defaults
pub mod defaults {
    /// The single local identity every guest-mode record belongs to
    pub const GUEST_USER_ID: &str = "guest";
    /// Daily calorie target used until the user sets one
    pub const DAILY_CALORIES: u32 = 2000;
    /// Weekly workout target used until the user sets one
    pub const WEEKLY_WORKOUTS: u32 = 3;
    /// Browser local storage commonly allows five mebibytes per origin
    pub const STORAGE_QUOTA_BYTES: usize = 5 * 1024 * 1024;
    /// Snapshot format written by `export`
    pub const SNAPSHOT_VERSION: u32 = 1;
}

/// Record validation limits
pub mod limits {
    /// Highest accepted reps-in-reserve value
    pub const MAX_RIR: u8 = 10;
    /// Highest accepted body-fat percentage
    pub const MAX_BODY_FAT_PERCENT: f64 = 100.0;
}

/// Placeholder values used when converting templates to the logging form
pub mod template_defaults {
    /// Rep range shown when a template omits reps
    pub const REPS: &str = "8-12";
    /// Reps in reserve shown when a template omits RIR
    pub const RIR: &str = "2";
    /// Weight is left blank for the user to fill in
    pub const WEIGHT: &str = "";
}

/// Year-in-review ranking sizes
pub mod review {
    /// Number of favourite exercises reported
    pub const FAVORITE_EXERCISES: usize = 5;
    /// Number of strongest lifts reported
    pub const STRONGEST_LIFTS: usize = 3;
    /// Months in the workout histogram
    pub const MONTHS: usize = 12;
}

/// Achievement thresholds
pub mod achievements {
    /// Getting Started: first logged workout
    pub const FIRST_WORKOUT: u64 = 1;
    /// Dedicated: fifty workouts
    pub const DEDICATED_WORKOUTS: u64 = 50;
    /// Centurion: one hundred workouts
    pub const CENTURION_WORKOUTS: u64 = 100;
    /// On Fire: a week-long streak
    pub const STREAK_WEEK: u64 = 7;
    /// Unstoppable: a month-long streak
    pub const STREAK_MONTH: u64 = 30;
    /// Volume Builder: five hundred sets
    pub const TOTAL_SETS: u64 = 500;
    /// Nutrition Tracker: one hundred meals
    pub const TOTAL_MEALS: u64 = 100;
    /// Progress Logger: ten progress entries
    pub const PROGRESS_ENTRIES: u64 = 10;
    /// Consistency Champion: one hundred active days
    pub const ACTIVE_DAYS: u64 = 100;
}
