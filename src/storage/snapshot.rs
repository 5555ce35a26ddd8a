// ABOUTME: Whole-store snapshot used by export and import
// ABOUTME: Gathers every collection, singleton, and preference into one JSON document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{LocalStore, StorageBackend};
use crate::collections::Record;
use chrono::{DateTime, Utc};
use pierre_logbook_core::constants::defaults::SNAPSHOT_VERSION;
use pierre_logbook_core::constants::storage_keys;
use pierre_logbook_core::errors::{AppError, AppResult};
use pierre_logbook_core::models::{
    MealRecord, PersonalGoals, Preferences, ProfileData, ProgressRecord, WorkoutRecord,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;
use tracing::{error, info, warn};

/// Every piece of logbook data in one serializable document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSnapshot {
    /// Snapshot format version
    pub version: u32,
    /// When the snapshot was taken
    pub exported_at: DateTime<Utc>,
    /// Workout records
    #[serde(default)]
    pub workouts: Vec<WorkoutRecord>,
    /// Meal records
    #[serde(default)]
    pub meals: Vec<MealRecord>,
    /// Progress records
    #[serde(default)]
    pub progress: Vec<ProgressRecord>,
    /// Profile singleton
    #[serde(default)]
    pub profile: Option<ProfileData>,
    /// Goals singleton
    #[serde(default)]
    pub goals: Option<PersonalGoals>,
    /// Device preferences
    #[serde(default)]
    pub preferences: Preferences,
}

impl DataSnapshot {
    /// Total number of records across the three collections
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.workouts.len() + self.meals.len() + self.progress.len()
    }

    fn validate(&self) -> AppResult<()> {
        if self.version > SNAPSHOT_VERSION {
            return Err(AppError::invalid_input(format!(
                "snapshot version {} is newer than supported version {SNAPSHOT_VERSION}",
                self.version
            )));
        }
        ensure_unique_ids(&self.workouts)?;
        ensure_unique_ids(&self.meals)?;
        ensure_unique_ids(&self.progress)?;
        self.workouts.iter().try_for_each(Record::validate)?;
        self.meals.iter().try_for_each(Record::validate)?;
        self.progress.iter().try_for_each(Record::validate)?;
        self.goals.as_ref().map_or(Ok(()), PersonalGoals::validate)
    }
}

fn ensure_unique_ids<R: Record>(records: &[R]) -> AppResult<()> {
    let mut seen = HashSet::new();
    match records.iter().find(|r| !seen.insert(r.id())) {
        Some(duplicate) => Err(AppError::invalid_input(format!(
            "duplicate {} id {}",
            R::COLLECTION,
            duplicate.id()
        ))
        .with_collection(R::COLLECTION)
        .with_resource_id(duplicate.id())
        .with_details(json!({
            "records": records.len(),
            "occurrences": records.iter().filter(|r| r.id() == duplicate.id()).count(),
        }))),
        None => Ok(()),
    }
}

impl<B: StorageBackend> LocalStore<B> {
    /// Capture everything currently stored
    #[must_use]
    pub fn export_snapshot(&self) -> DataSnapshot {
        let settings = self.settings();
        DataSnapshot {
            version: SNAPSHOT_VERSION,
            exported_at: Utc::now(),
            workouts: self.workouts().get_all(),
            meals: self.meals().get_all(),
            progress: self.progress().get_all(),
            profile: settings.profile(),
            goals: self.read_value(storage_keys::GOALS),
            preferences: settings.preferences(),
        }
    }

    /// Replace all stored data with the snapshot's contents
    ///
    /// The snapshot is validated before anything is cleared. If a write fails
    /// part way through, the data held before the import is written back.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unsupported version, duplicate ids,
    /// invalid records or invalid goals, or a storage error if a write fails
    pub fn import_snapshot(&self, snapshot: &DataSnapshot) -> AppResult<()> {
        snapshot.validate()?;
        let previous = self.export_snapshot();

        if let Err(e) = self.replace_with(snapshot) {
            warn!(error = %e, "Snapshot import failed, restoring previous data");
            if let Err(restore) = self.replace_with(&previous) {
                error!(error = %restore, "Could not restore data after failed import");
            }
            return Err(e);
        }

        info!(
            records = snapshot.record_count(),
            exported_at = %snapshot.exported_at,
            "Snapshot imported"
        );
        Ok(())
    }

    fn replace_with(&self, snapshot: &DataSnapshot) -> AppResult<()> {
        if !self.clear_all() {
            return Err(AppError::storage_unavailable(
                "could not clear existing data before import",
            ));
        }

        self.try_write_collection(WorkoutRecord::COLLECTION, &snapshot.workouts)?;
        self.try_write_collection(MealRecord::COLLECTION, &snapshot.meals)?;
        self.try_write_collection(ProgressRecord::COLLECTION, &snapshot.progress)?;
        if let Some(profile) = &snapshot.profile {
            self.try_write_value(storage_keys::PROFILE, profile)?;
        }
        if let Some(goals) = &snapshot.goals {
            self.try_write_value(storage_keys::GOALS, goals)?;
        }
        self.settings().save_preferences(snapshot.preferences)
    }
}
