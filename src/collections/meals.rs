// ABOUTME: Meal collection accessor with per-day calorie and macro totals
// ABOUTME: Implements Record for MealRecord
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Meals, Record};
use crate::storage::StorageBackend;
use chrono::NaiveDate;
use pierre_logbook_core::constants::storage_keys;
use pierre_logbook_core::errors::AppResult;
use pierre_logbook_core::models::{MealPatch, MealRecord, NewMeal};
use serde::Serialize;

impl Record for MealRecord {
    type Draft = NewMeal;
    type Patch = MealPatch;

    const COLLECTION: &'static str = storage_keys::MEALS;
    const LABEL: &'static str = "Meal";

    fn id(&self) -> &str {
        &self.id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn from_draft(id: String, draft: NewMeal) -> Self {
        Self::from_draft(id, draft)
    }

    fn apply_patch(&mut self, patch: MealPatch) {
        self.apply(patch);
    }

    fn validate(&self) -> AppResult<()> {
        Self::validate(self)
    }
}

/// Nutrition summed over one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyTotals {
    /// Day summed
    pub date: NaiveDate,
    /// Number of meals logged
    pub meals: usize,
    /// Kilocalories
    pub calories: f64,
    /// Protein grams (absent values count as zero)
    pub protein_g: f64,
    /// Carbohydrate grams
    pub carbs_g: f64,
    /// Fat grams
    pub fat_g: f64,
}

impl DailyTotals {
    /// Sum the meals dated `date` out of `meals`
    #[must_use]
    pub fn from_meals(date: NaiveDate, meals: &[MealRecord]) -> Self {
        meals.iter().filter(|m| m.date == date).fold(
            Self {
                date,
                meals: 0,
                calories: 0.0,
                protein_g: 0.0,
                carbs_g: 0.0,
                fat_g: 0.0,
            },
            |mut totals, meal| {
                totals.meals += 1;
                totals.calories += meal.calories;
                totals.protein_g += meal.protein_g.unwrap_or_default();
                totals.carbs_g += meal.carbs_g.unwrap_or_default();
                totals.fat_g += meal.fat_g.unwrap_or_default();
                totals
            },
        )
    }

    /// Calories left against a daily target (negative when over)
    #[must_use]
    pub fn remaining_calories(&self, target: u32) -> f64 {
        f64::from(target) - self.calories
    }
}

impl<B: StorageBackend> Meals<'_, B> {
    /// Calorie and macro totals for one day
    #[must_use]
    pub fn daily_totals(&self, date: NaiveDate) -> DailyTotals {
        DailyTotals::from_meals(date, &self.get_all())
    }
}
