// ABOUTME: Workout collection accessor with append-only exercise and set logging
// ABOUTME: Implements Record for WorkoutRecord
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Record, Workouts};
use crate::storage::StorageBackend;
use chrono::NaiveDate;
use pierre_logbook_core::constants::storage_keys;
use pierre_logbook_core::errors::{AppError, AppResult};
use pierre_logbook_core::models::{
    ExerciseEntry, NewWorkout, SetEntry, WorkoutPatch, WorkoutRecord,
};
use tracing::debug;

impl Record for WorkoutRecord {
    type Draft = NewWorkout;
    type Patch = WorkoutPatch;

    const COLLECTION: &'static str = storage_keys::WORKOUTS;
    const LABEL: &'static str = "Workout";

    fn id(&self) -> &str {
        &self.id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn from_draft(id: String, draft: NewWorkout) -> Self {
        Self::from_draft(id, draft)
    }

    fn apply_patch(&mut self, patch: WorkoutPatch) {
        self.apply(patch);
    }

    fn validate(&self) -> AppResult<()> {
        self.exercises.iter().try_for_each(ExerciseEntry::validate)
    }
}

impl<B: StorageBackend> Workouts<'_, B> {
    /// Add an exercise with no sets to an existing workout
    ///
    /// Adding a name the workout already contains leaves it unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown workout, `InvalidInput` for a
    /// blank name, or a storage error if the write fails
    pub fn add_exercise(&self, workout_id: &str, name: &str) -> AppResult<WorkoutRecord> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("exercise name must not be empty"));
        }
        self.modify(workout_id, |workout| {
            workout.exercise_mut(name);
            Ok(())
        })
    }

    /// Append a set to an exercise, creating the exercise on first use
    ///
    /// Returns the updated workout; the new set's number is the length of the
    /// exercise's set list.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown workout, `InvalidInput` for an
    /// invalid set, or a storage error if the write fails
    pub fn log_set(
        &self,
        workout_id: &str,
        exercise_name: &str,
        set: SetEntry,
    ) -> AppResult<WorkoutRecord> {
        set.validate()?;
        let exercise_name = exercise_name.trim();
        if exercise_name.is_empty() {
            return Err(AppError::invalid_input("exercise name must not be empty"));
        }
        let workout = self.modify(workout_id, |workout| {
            workout.exercise_mut(exercise_name).sets.push(set);
            Ok(())
        })?;
        debug!(
            workout_id,
            exercise = exercise_name,
            weight = set.weight,
            reps = set.reps,
            "Set logged"
        );
        Ok(workout)
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::memory::MemoryBackend;
    use crate::storage::LocalStore;
    use chrono::NaiveDate;
    use pierre_logbook_core::models::{NewWorkout, SetEntry};

    #[test]
    fn test_log_set_creates_exercise_then_appends() {
        let store = LocalStore::new(MemoryBackend::new());
        let workouts = store.workouts();
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let id = workouts.save(NewWorkout::new(date)).unwrap();

        workouts
            .log_set(&id, "Squat", SetEntry::new(100.0, 5, 2))
            .unwrap();
        let updated = workouts
            .log_set(&id, "Squat", SetEntry::new(105.0, 5, 1))
            .unwrap();

        assert_eq!(updated.exercises.len(), 1);
        assert_eq!(updated.exercises[0].sets.len(), 2);
        assert_eq!(workouts.find(&id).unwrap(), updated);
    }

    #[test]
    fn test_log_set_rejects_invalid_set_without_writing() {
        let store = LocalStore::new(MemoryBackend::new());
        let workouts = store.workouts();
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let id = workouts.save(NewWorkout::new(date)).unwrap();

        assert!(workouts.log_set(&id, "Squat", SetEntry::new(100.0, 0, 2)).is_err());
        assert!(workouts.find(&id).unwrap().exercises.is_empty());
    }
}
