// ABOUTME: Nutrition tracking models for food intake logging
// ABOUTME: MealRecord, MealType, and their draft/patch types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ensure_non_negative, ensure_optional_non_negative, guest_user_id};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meal slot (closed enumeration)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// All meal slots in day order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Lowercase name as stored
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|meal| meal.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown meal type '{s}' (expected breakfast, lunch, dinner, or snack)"
                ))
            })
    }
}

/// A logged food item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    /// Unique id within the meals collection
    pub id: String,
    /// Owning identity
    #[serde(default = "guest_user_id")]
    pub user_id: String,
    /// Calendar day the meal was eaten
    pub date: NaiveDate,
    /// Meal slot
    pub meal_type: MealType,
    /// Food label
    pub food: String,
    /// Energy in kilocalories
    #[serde(default)]
    pub calories: f64,
    /// Protein in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Carbohydrates in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    /// Fat in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
}

impl MealRecord {
    /// Materialize a draft with the given id
    #[must_use]
    pub fn from_draft(id: String, draft: NewMeal) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            date: draft.date,
            meal_type: draft.meal_type,
            food: draft.food,
            calories: draft.calories,
            protein_g: draft.protein_g,
            carbs_g: draft.carbs_g,
            fat_g: draft.fat_g,
        }
    }

    /// Apply a patch, leaving unspecified fields untouched
    pub fn apply(&mut self, patch: MealPatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(meal_type) = patch.meal_type {
            self.meal_type = meal_type;
        }
        if let Some(food) = patch.food {
            self.food = food;
        }
        if let Some(calories) = patch.calories {
            self.calories = calories;
        }
        if patch.protein_g.is_some() {
            self.protein_g = patch.protein_g;
        }
        if patch.carbs_g.is_some() {
            self.carbs_g = patch.carbs_g;
        }
        if patch.fat_g.is_some() {
            self.fat_g = patch.fat_g;
        }
    }

    /// Validate label and nutrient values
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank food label or negative nutrient values
    pub fn validate(&self) -> AppResult<()> {
        if self.food.trim().is_empty() {
            return Err(AppError::invalid_input("food must not be empty"));
        }
        ensure_non_negative("calories", self.calories)?;
        ensure_optional_non_negative("protein_g", self.protein_g)?;
        ensure_optional_non_negative("carbs_g", self.carbs_g)?;
        ensure_optional_non_negative("fat_g", self.fat_g)
    }
}

/// A meal that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMeal {
    /// Owning identity
    #[serde(default = "guest_user_id")]
    pub user_id: String,
    /// Calendar day
    pub date: NaiveDate,
    /// Meal slot
    pub meal_type: MealType,
    /// Food label
    pub food: String,
    /// Energy in kilocalories
    pub calories: f64,
    /// Protein in grams
    #[serde(default)]
    pub protein_g: Option<f64>,
    /// Carbohydrates in grams
    #[serde(default)]
    pub carbs_g: Option<f64>,
    /// Fat in grams
    #[serde(default)]
    pub fat_g: Option<f64>,
}

impl NewMeal {
    /// Create a guest meal with no macro breakdown
    pub fn new(
        date: NaiveDate,
        meal_type: MealType,
        food: impl Into<String>,
        calories: f64,
    ) -> Self {
        Self {
            user_id: guest_user_id(),
            date,
            meal_type,
            food: food.into(),
            calories,
            protein_g: None,
            carbs_g: None,
            fat_g: None,
        }
    }

    /// Builder-style helper setting protein, carbohydrate, and fat grams
    #[must_use]
    pub fn with_macros(mut self, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        self.protein_g = Some(protein_g);
        self.carbs_g = Some(carbs_g);
        self.fat_g = Some(fat_g);
        self
    }
}

/// Fields an update may change on a meal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPatch {
    /// New date
    pub date: Option<NaiveDate>,
    /// New meal slot
    pub meal_type: Option<MealType>,
    /// New food label
    pub food: Option<String>,
    /// New calorie value
    pub calories: Option<f64>,
    /// New protein grams
    pub protein_g: Option<f64>,
    /// New carbohydrate grams
    pub carbs_g: Option<f64>,
    /// New fat grams
    pub fat_g: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_parsing() {
        assert_eq!(
            "Breakfast".parse::<MealType>().unwrap(),
            MealType::Breakfast
        );
        assert_eq!("snack".parse::<MealType>().unwrap(), MealType::Snack);
        assert!("brunch".parse::<MealType>().is_err());
    }

    #[test]
    fn test_meal_type_serializes_lowercase() {
        let json = serde_json::to_string(&MealType::Dinner).unwrap();
        assert_eq!(json, "\"dinner\"");
    }
}
