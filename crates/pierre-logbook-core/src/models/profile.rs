// ABOUTME: Singleton profile and personal-goal models for a logbook install
// ABOUTME: ProfileData and PersonalGoals with canonical-unit goal weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ensure_optional_non_negative;
use crate::constants::defaults::{DAILY_CALORIES, WEEKLY_WORKOUTS};
use crate::errors::AppResult;
use crate::units::{Weight, WeightUnit};
use serde::{Deserialize, Serialize};

/// Display profile, one per install
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData {
    /// Name shown in the app
    #[serde(default)]
    pub display_name: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
    /// Short biography
    #[serde(default)]
    pub bio: String,
    /// Profile image as a data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// Personal targets, one per install
///
/// Weight values are always stored in kilograms; use the `*_in` accessors to
/// read them in a display unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalGoals {
    /// Goal body weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    /// Current body weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_weight: Option<f64>,
    /// Daily calorie target
    #[serde(default = "default_daily_calories")]
    pub daily_calories: u32,
    /// Weekly workout count target
    #[serde(default = "default_weekly_workouts")]
    pub weekly_workouts: u32,
}

const fn default_daily_calories() -> u32 {
    DAILY_CALORIES
}

const fn default_weekly_workouts() -> u32 {
    WEEKLY_WORKOUTS
}

impl Default for PersonalGoals {
    fn default() -> Self {
        Self {
            target_weight: None,
            current_weight: None,
            daily_calories: DAILY_CALORIES,
            weekly_workouts: WEEKLY_WORKOUTS,
        }
    }
}

impl PersonalGoals {
    /// Target weight expressed in `unit`
    #[must_use]
    pub fn target_weight_in(&self, unit: WeightUnit) -> Option<Weight> {
        self.target_weight.map(|kg| Weight::kilograms(kg).to(unit))
    }

    /// Current weight expressed in `unit`
    #[must_use]
    pub fn current_weight_in(&self, unit: WeightUnit) -> Option<Weight> {
        self.current_weight.map(|kg| Weight::kilograms(kg).to(unit))
    }

    /// Store a target weight given in any unit
    pub fn set_target_weight(&mut self, weight: Weight) {
        self.target_weight = Some(weight.canonical().value);
    }

    /// Store a current weight given in any unit
    pub fn set_current_weight(&mut self, weight: Weight) {
        self.current_weight = Some(weight.canonical().value);
    }

    /// Kilograms still to gain (positive) or lose (negative), if both weights are set
    #[must_use]
    pub fn remaining_kg(&self) -> Option<f64> {
        Some(self.target_weight? - self.current_weight?)
    }

    /// Reject negative or non-finite weights
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the offending field
    pub fn validate(&self) -> AppResult<()> {
        ensure_optional_non_negative("target_weight", self.target_weight)?;
        ensure_optional_non_negative("current_weight", self.current_weight)
    }
}
