// ABOUTME: Strength-training workout models for the logbook
// ABOUTME: WorkoutRecord, ExerciseEntry, SetEntry, and their draft/patch types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ensure_non_negative, guest_user_id};
use crate::constants::limits::MAX_RIR;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single logged set
///
/// `weight` is stored in canonical kilograms; callers convert to and from the
/// display unit at the presentation boundary.
/// `rir` ("reps in reserve") is the self-reported number of extra reps the
/// lifter could have performed, not reps actually done.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    /// Load lifted, in kilograms
    #[serde(default)]
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
    /// Reps in reserve (0-10)
    #[serde(default)]
    pub rir: u8,
}

impl SetEntry {
    /// Create a set
    #[must_use]
    pub const fn new(weight: f64, reps: u32, rir: u8) -> Self {
        Self { weight, reps, rir }
    }

    /// Weight multiplied by reps
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }

    /// Estimated one-rep max using the Epley formula
    #[must_use]
    pub fn estimated_one_rep_max(&self) -> f64 {
        if self.reps <= 1 {
            self.weight
        } else {
            self.weight * (1.0 + f64::from(self.reps) / 30.0)
        }
    }

    /// Check reps, RIR, and weight ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when reps is zero, RIR exceeds 10, or weight is
    /// negative or not finite
    pub fn validate(&self) -> AppResult<()> {
        if self.reps == 0 {
            return Err(AppError::invalid_input("reps must be at least 1"));
        }
        if self.rir > MAX_RIR {
            return Err(AppError::invalid_input(format!(
                "rir must be between 0 and {MAX_RIR}, got {}",
                self.rir
            )));
        }
        ensure_non_negative("weight", self.weight)
    }
}

/// One exercise within a workout, with its sets in logging order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Exercise name, free text or picked from the catalog
    pub name: String,
    /// Sets in append order; position defines the set number
    #[serde(default)]
    pub sets: Vec<SetEntry>,
}

impl ExerciseEntry {
    /// Create an exercise with no sets yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets: Vec::new(),
        }
    }

    /// Builder-style helper appending a set
    #[must_use]
    pub fn with_set(mut self, set: SetEntry) -> Self {
        self.sets.push(set);
        self
    }

    /// Sum of reps across sets
    #[must_use]
    pub fn total_reps(&self) -> u64 {
        self.sets.iter().map(|s| u64::from(s.reps)).sum()
    }

    /// Sum of weight × reps across sets
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.sets.iter().map(SetEntry::volume).sum()
    }

    /// Validate name and every set
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name or an invalid set
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_input("exercise name must not be empty"));
        }
        self.sets.iter().try_for_each(SetEntry::validate)
    }
}

/// A logged training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Unique id within the workouts collection
    pub id: String,
    /// Owning identity (always the guest identity in local mode)
    #[serde(default = "guest_user_id")]
    pub user_id: String,
    /// Calendar day of the session
    pub date: NaiveDate,
    /// Optional session label, e.g. the template it was started from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Exercises in the order they were added
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
    /// Session length in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkoutRecord {
    /// Materialize a draft with the given id
    #[must_use]
    pub fn from_draft(id: String, draft: NewWorkout) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            date: draft.date,
            name: draft.name,
            exercises: draft.exercises,
            duration_minutes: draft.duration_minutes,
            notes: draft.notes,
        }
    }

    /// Number of sets across all exercises
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }

    /// Sum of weight × reps across all exercises
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.exercises.iter().map(ExerciseEntry::total_volume).sum()
    }

    /// Find an exercise by exact name, appending an empty one when absent
    pub fn exercise_mut(&mut self, name: &str) -> &mut ExerciseEntry {
        let position = self
            .exercises
            .iter()
            .position(|e| e.name == name)
            .unwrap_or_else(|| {
                self.exercises.push(ExerciseEntry::new(name));
                self.exercises.len() - 1
            });
        &mut self.exercises[position]
    }

    /// Apply a metadata patch
    pub fn apply(&mut self, patch: WorkoutPatch) {
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
        if let Some(duration) = patch.duration_minutes {
            self.duration_minutes = Some(duration);
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
    }
}

/// A workout that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkout {
    /// Owning identity
    #[serde(default = "guest_user_id")]
    pub user_id: String,
    /// Calendar day of the session
    pub date: NaiveDate,
    /// Optional session label
    #[serde(default)]
    pub name: Option<String>,
    /// Exercises logged so far
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
    /// Session length in minutes
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewWorkout {
    /// Start an empty guest workout on `date`
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            user_id: guest_user_id(),
            date,
            name: None,
            exercises: Vec::new(),
            duration_minutes: None,
            notes: None,
        }
    }

    /// Builder-style helper setting the label
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder-style helper appending an exercise
    #[must_use]
    pub fn with_exercise(mut self, exercise: ExerciseEntry) -> Self {
        self.exercises.push(exercise);
        self
    }

    /// Builder-style helper setting the duration
    #[must_use]
    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// Validate every exercise
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any exercise or set is invalid
    pub fn validate(&self) -> AppResult<()> {
        self.exercises.iter().try_for_each(ExerciseEntry::validate)
    }
}

/// Session metadata that may change after creation
///
/// Exercises and sets are append-only and are changed through set logging,
/// never through a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPatch {
    /// New session label
    pub name: Option<String>,
    /// Final session length in minutes
    pub duration_minutes: Option<u32>,
    /// Replacement notes
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epley_one_rep_max() {
        let set = SetEntry::new(100.0, 10, 2);
        assert!((set.estimated_one_rep_max() - 133.333).abs() < 0.01);
        assert!((SetEntry::new(140.0, 1, 0).estimated_one_rep_max() - 140.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_validation() {
        assert!(SetEntry::new(60.0, 8, 2).validate().is_ok());
        assert!(SetEntry::new(60.0, 0, 2).validate().is_err());
        assert!(SetEntry::new(60.0, 8, 11).validate().is_err());
        assert!(SetEntry::new(-5.0, 8, 2).validate().is_err());
        assert!(SetEntry::new(f64::NAN, 8, 2).validate().is_err());
    }

    #[test]
    fn test_exercise_mut_appends_in_order() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let mut workout = WorkoutRecord::from_draft("w1".into(), NewWorkout::new(date));

        for (name, weight) in [("Squat", 100.0), ("Bench Press", 80.0), ("Squat", 105.0)] {
            let set = SetEntry::new(weight, 5, 2);
            workout.exercise_mut(name).sets.push(set);
        }

        let names: Vec<_> = workout.exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Squat", "Bench Press"]);
        assert_eq!(workout.exercises[0].sets.len(), 2);
        assert_eq!(workout.set_count(), 3);
    }

    #[test]
    fn test_missing_user_id_defaults_to_guest() {
        let json = r#"{"id":"w1","date":"2025-01-01","exercises":[]}"#;
        let workout: WorkoutRecord = serde_json::from_str(json).unwrap();
        assert_eq!(workout.user_id, "guest");
        assert!(workout.name.is_none());
    }
}
