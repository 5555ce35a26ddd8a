// ABOUTME: Per-entity collection accessors layered on the local persistence adapter
// ABOUTME: Generic get/save/update/delete plus date and user query helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Collection Accessors
//!
//! Every record collection is accessed through a [`Collection`] borrowed from a
//! [`LocalStore`]. Writes read the whole collection, modify it and write it
//! back; there is no indexing, queries are linear scans.
//!
//! Failure policy:
//! - reads never fail (see [`LocalStore::read_collection`])
//! - `save` and `update` validate the record and surface a refused write as an error
//! - `update` of an unknown id fails with `ResourceNotFound`
//! - `delete` of an unknown id is a no-op

/// Meal accessors and daily nutrition totals
pub mod meals;
/// Progress accessors and latest weigh-in lookup
pub mod progress;
/// Profile, goals, and preference singletons
pub mod settings;
/// Workout accessors and in-session set logging
pub mod workouts;

use crate::storage::{LocalStore, StorageBackend};
use chrono::NaiveDate;
use pierre_logbook_core::errors::{AppError, AppResult};
use pierre_logbook_core::models::{MealRecord, ProgressRecord, WorkoutRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::{debug, info};
use uuid::Uuid;

pub use meals::DailyTotals;
pub use settings::Settings;

/// A record type stored as one collection
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Record without an id, as accepted by `save`
    type Draft;
    /// Partial update accepted by `update`
    type Patch;

    /// Storage key of the collection
    const COLLECTION: &'static str;
    /// Human-readable name used in error messages
    const LABEL: &'static str;

    /// Unique id within the collection
    fn id(&self) -> &str;
    /// Owning identity
    fn user_id(&self) -> &str;
    /// Calendar day the record belongs to
    fn date(&self) -> NaiveDate;
    /// Materialize a draft under a fresh id
    fn from_draft(id: String, draft: Self::Draft) -> Self;
    /// Apply a partial update in place
    fn apply_patch(&mut self, patch: Self::Patch);
    /// Check field ranges before the record is persisted
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` describing the first offending field
    fn validate(&self) -> AppResult<()>;
}

/// Accessor for one record collection
pub struct Collection<'a, R, B: StorageBackend> {
    store: &'a LocalStore<B>,
    _record: PhantomData<R>,
}

impl<'a, R: Record, B: StorageBackend> Collection<'a, R, B> {
    /// Borrow a collection from `store`
    pub const fn new(store: &'a LocalStore<B>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Every record, in stored order
    #[must_use]
    pub fn get_all(&self) -> Vec<R> {
        self.store.read_collection(R::COLLECTION)
    }

    /// Number of stored records
    #[must_use]
    pub fn count(&self) -> usize {
        self.get_all().len()
    }

    /// Record with the given id
    #[must_use]
    pub fn find(&self, id: &str) -> Option<R> {
        self.get_all().into_iter().find(|r| r.id() == id)
    }

    /// Validate a draft, assign it a fresh id and append it
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the record fails validation, or a storage
    /// error if the collection cannot be written
    pub fn save(&self, draft: R::Draft) -> AppResult<String> {
        let mut records = self.get_all();
        let id = fresh_id(&records);
        let record = R::from_draft(id.clone(), draft);
        record.validate()?;
        records.push(record);
        self.persist(&records)?;
        info!(collection = R::COLLECTION, id = %id, "Record saved");
        Ok(id)
    }

    /// Save several drafts with a single write; nothing is stored if any
    /// draft is invalid
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for the first invalid draft, or a storage error
    /// if the collection cannot be written
    pub fn save_many(&self, drafts: impl IntoIterator<Item = R::Draft>) -> AppResult<Vec<String>> {
        let mut records = self.get_all();
        let mut ids = Vec::new();
        for draft in drafts {
            let id = fresh_id(&records);
            let record = R::from_draft(id.clone(), draft);
            record.validate()?;
            records.push(record);
            ids.push(id);
        }
        if ids.is_empty() {
            return Ok(ids);
        }
        self.persist(&records)?;
        info!(
            collection = R::COLLECTION,
            count = ids.len(),
            "Records saved"
        );
        Ok(ids)
    }

    /// Apply a patch to an existing record and return the result
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, `InvalidInput` if the
    /// patched record is invalid, or a storage error if the write fails
    pub fn update(&self, id: &str, patch: R::Patch) -> AppResult<R> {
        self.modify(id, |record| {
            record.apply_patch(patch);
            Ok(())
        })
    }

    /// Remove a record; deleting an absent id succeeds without writing
    ///
    /// # Errors
    ///
    /// Returns a storage error if the collection cannot be written
    pub fn delete(&self, id: &str) -> AppResult<()> {
        let mut records = self.get_all();
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            debug!(
                collection = R::COLLECTION,
                id,
                "Delete of absent record ignored"
            );
            return Ok(());
        }
        self.persist(&records)?;
        info!(collection = R::COLLECTION, id, "Record deleted");
        Ok(())
    }

    /// Records owned by `user_id`
    #[must_use]
    pub fn for_user(&self, user_id: &str) -> Vec<R> {
        self.filtered(|r| r.user_id() == user_id)
    }

    /// Records dated exactly `date`
    #[must_use]
    pub fn on_date(&self, date: NaiveDate) -> Vec<R> {
        self.filtered(|r| r.date() == date)
    }

    /// Records dated within `start..=end`
    #[must_use]
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<R> {
        self.filtered(|r| (start..=end).contains(&r.date()))
    }

    /// Every record, newest date first; equal dates keep stored order
    #[must_use]
    pub fn sorted_desc(&self) -> Vec<R> {
        sort_desc(self.get_all())
    }

    fn filtered(&self, keep: impl Fn(&R) -> bool) -> Vec<R> {
        self.get_all().into_iter().filter(keep).collect()
    }

    /// Read, mutate one record, validate and write back
    fn modify(&self, id: &str, change: impl FnOnce(&mut R) -> AppResult<()>) -> AppResult<R> {
        let mut records = self.get_all();
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| {
                AppError::not_found(format!("{} {id}", R::LABEL))
                    .with_collection(R::COLLECTION)
                    .with_resource_id(id)
            })?;
        change(&mut *record)?;
        record.validate()?;
        let updated = record.clone();
        self.persist(&records)?;
        debug!(collection = R::COLLECTION, id, "Record updated");
        Ok(updated)
    }

    fn persist(&self, records: &[R]) -> AppResult<()> {
        self.store.try_write_collection(R::COLLECTION, records)
    }
}

/// Sort records newest first, keeping stored order for equal dates
pub fn sort_desc<R: Record>(mut records: Vec<R>) -> Vec<R> {
    records.sort_by(|a, b| b.date().cmp(&a.date()));
    records
}

/// UUID v4 text not already used in `records`
fn fresh_id<R: Record>(records: &[R]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !records.iter().any(|r| r.id() == id) {
            return id;
        }
    }
}

/// Workout collection accessor
pub type Workouts<'a, B> = Collection<'a, WorkoutRecord, B>;
/// Meal collection accessor
pub type Meals<'a, B> = Collection<'a, MealRecord, B>;
/// Progress collection accessor
pub type ProgressEntries<'a, B> = Collection<'a, ProgressRecord, B>;

impl<B: StorageBackend> LocalStore<B> {
    /// Workout accessor
    pub const fn workouts(&self) -> Workouts<'_, B> {
        Collection::new(self)
    }

    /// Meal accessor
    pub const fn meals(&self) -> Meals<'_, B> {
        Collection::new(self)
    }

    /// Progress accessor
    pub const fn progress(&self) -> ProgressEntries<'_, B> {
        Collection::new(self)
    }

    /// Profile, goals, and preferences accessor
    pub const fn settings(&self) -> Settings<'_, B> {
        Settings::new(self)
    }
}
