// ABOUTME: Record types persisted by the guest-mode logbook store
// ABOUTME: Re-exports workout, nutrition, progress, profile, and preference models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain serializable records. Every persisted record carries a unique string id
//! within its collection and a calendar `date`; collections are unordered at rest
//! and ordered by consumers at read time.
//!
//! ## Design Principles
//!
//! - **Independent entities**: no record references another collection
//! - **Drafts and patches**: `New*` drafts carry everything but the id, `*Patch`
//!   types carry the fields an update may change
//! - **Validated at the edge**: drafts are checked before persisting, the
//!   statistics engine never re-validates

mod nutrition;
mod preferences;
mod profile;
mod progress;
mod workout;

pub use nutrition::{MealPatch, MealRecord, MealType, NewMeal};
pub use preferences::{Preferences, Theme};
pub use profile::{PersonalGoals, ProfileData};
pub use progress::{BodyMeasurements, NewProgress, ProgressPatch, ProgressRecord};
pub use workout::{ExerciseEntry, NewWorkout, SetEntry, WorkoutPatch, WorkoutRecord};

use crate::constants::defaults::GUEST_USER_ID;
use crate::errors::{AppError, AppResult};

/// Serde default for `user_id` fields written before user ids were stored
pub(crate) fn guest_user_id() -> String {
    GUEST_USER_ID.to_owned()
}

/// Reject NaN, infinities, and negative values for a named field
pub(crate) fn ensure_non_negative(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{field} must be a non-negative number, got {value}"
        )))
    }
}

/// Optional variant of [`ensure_non_negative`]
pub(crate) fn ensure_optional_non_negative(field: &str, value: Option<f64>) -> AppResult<()> {
    value.map_or(Ok(()), |v| ensure_non_negative(field, v))
}
