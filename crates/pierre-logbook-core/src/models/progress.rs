// ABOUTME: Body progress models for weigh-ins and tape measurements
// ABOUTME: ProgressRecord, BodyMeasurements, and their draft/patch types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ensure_optional_non_negative, guest_user_id};
use crate::constants::limits::MAX_BODY_FAT_PERCENT;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tape measurements, all optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    /// Chest circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    /// Waist circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    /// Hip circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hips: Option<f64>,
    /// Arm circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arms: Option<f64>,
    /// Thigh circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thighs: Option<f64>,
}

impl BodyMeasurements {
    fn validate(&self) -> AppResult<()> {
        ensure_optional_non_negative("chest", self.chest)?;
        ensure_optional_non_negative("waist", self.waist)?;
        ensure_optional_non_negative("hips", self.hips)?;
        ensure_optional_non_negative("arms", self.arms)?;
        ensure_optional_non_negative("thighs", self.thighs)
    }
}

/// A body progress entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Unique id within the progress collection
    pub id: String,
    /// Owning identity
    #[serde(default = "guest_user_id")]
    pub user_id: String,
    /// Calendar day of the measurement
    pub date: NaiveDate,
    /// Body weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Body fat percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    /// Tape measurements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurements: Option<BodyMeasurements>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ProgressRecord {
    /// Materialize a draft with the given id
    #[must_use]
    pub fn from_draft(id: String, draft: NewProgress) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            date: draft.date,
            weight: draft.weight,
            body_fat_percent: draft.body_fat_percent,
            measurements: draft.measurements,
            notes: draft.notes,
        }
    }

    /// Apply a patch, leaving unspecified fields untouched
    pub fn apply(&mut self, patch: ProgressPatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if patch.weight.is_some() {
            self.weight = patch.weight;
        }
        if patch.body_fat_percent.is_some() {
            self.body_fat_percent = patch.body_fat_percent;
        }
        if patch.measurements.is_some() {
            self.measurements = patch.measurements;
        }
        if patch.notes.is_some() {
            self.notes = patch.notes;
        }
    }

    /// Validate numeric ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for negative values or a body-fat percentage above 100
    pub fn validate(&self) -> AppResult<()> {
        ensure_optional_non_negative("weight", self.weight)?;
        ensure_optional_non_negative("body_fat_percent", self.body_fat_percent)?;
        if self
            .body_fat_percent
            .is_some_and(|bf| bf > MAX_BODY_FAT_PERCENT)
        {
            return Err(AppError::invalid_input(
                "body_fat_percent must not exceed 100",
            ));
        }
        self.measurements
            .as_ref()
            .map_or(Ok(()), BodyMeasurements::validate)
    }
}

/// A progress entry that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProgress {
    /// Owning identity
    #[serde(default = "guest_user_id")]
    pub user_id: String,
    /// Calendar day
    pub date: NaiveDate,
    /// Body weight
    #[serde(default)]
    pub weight: Option<f64>,
    /// Body fat percentage
    #[serde(default)]
    pub body_fat_percent: Option<f64>,
    /// Tape measurements
    #[serde(default)]
    pub measurements: Option<BodyMeasurements>,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewProgress {
    /// Create an empty guest entry on `date`
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            user_id: guest_user_id(),
            date,
            weight: None,
            body_fat_percent: None,
            measurements: None,
            notes: None,
        }
    }

    /// Builder-style helper setting the body weight
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Builder-style helper setting the body-fat percentage
    #[must_use]
    pub fn with_body_fat(mut self, percent: f64) -> Self {
        self.body_fat_percent = Some(percent);
        self
    }
}

/// Fields an update may change on a progress entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressPatch {
    /// New date
    pub date: Option<NaiveDate>,
    /// New body weight
    pub weight: Option<f64>,
    /// New body fat percentage
    pub body_fat_percent: Option<f64>,
    /// Replacement measurements
    pub measurements: Option<BodyMeasurements>,
    /// Replacement notes
    pub notes: Option<String>,
}
