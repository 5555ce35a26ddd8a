// ABOUTME: Progress collection accessor for weigh-ins and body measurements
// ABOUTME: Implements Record for ProgressRecord and finds the latest weigh-in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ProgressEntries, Record};
use crate::storage::StorageBackend;
use chrono::NaiveDate;
use pierre_logbook_core::constants::storage_keys;
use pierre_logbook_core::errors::AppResult;
use pierre_logbook_core::models::{NewProgress, ProgressPatch, ProgressRecord};

impl Record for ProgressRecord {
    type Draft = NewProgress;
    type Patch = ProgressPatch;

    const COLLECTION: &'static str = storage_keys::PROGRESS;
    const LABEL: &'static str = "Progress entry";

    fn id(&self) -> &str {
        &self.id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn from_draft(id: String, draft: NewProgress) -> Self {
        Self::from_draft(id, draft)
    }

    fn apply_patch(&mut self, patch: ProgressPatch) {
        self.apply(patch);
    }

    fn validate(&self) -> AppResult<()> {
        Self::validate(self)
    }
}

impl<B: StorageBackend> ProgressEntries<'_, B> {
    /// Most recent entry that records a body weight
    ///
    /// Among entries on the same latest date the one stored last wins.
    #[must_use]
    pub fn latest_weight(&self) -> Option<ProgressRecord> {
        self.get_all()
            .into_iter()
            .filter(|p| p.weight.is_some())
            .max_by_key(|p| p.date)
    }
}
