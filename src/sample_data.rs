// ABOUTME: Deterministic sample data generator for demos, seeding, and benchmarks
// ABOUTME: Produces template-based workouts, daily meals, and weekly weigh-ins over a date span
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sample data generation
//!
//! Workouts rotate through the built-in templates with loads that creep up
//! over the span. Given the same seed the generator produces the same data.

use crate::collections::Record;
use crate::storage::{LocalStore, StorageBackend};
use crate::templates::catalog::builtin_templates;
use crate::templates::WorkoutTemplate;
use chrono::{Duration, NaiveDate};
use pierre_logbook_core::constants::defaults::GUEST_USER_ID;
use pierre_logbook_core::errors::AppResult;
use pierre_logbook_core::models::{
    ExerciseEntry, MealRecord, MealType, NewMeal, NewProgress, NewWorkout, ProgressRecord,
    SetEntry, WorkoutRecord,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use tracing::info;

/// Load increment in kilograms
const PLATE_STEP: f64 = 2.5;
/// Days between load increases on an exercise
const PROGRESSION_DAYS: i64 = 14;

/// Food name with calorie range and macro split (protein, carbs, fat as calorie shares)
struct FoodConfig {
    name: &'static str,
    calories: (f64, f64),
    split: (f64, f64, f64),
}

const fn food(name: &'static str, calories: (f64, f64), split: (f64, f64, f64)) -> FoodConfig {
    FoodConfig {
        name,
        calories,
        split,
    }
}

fn foods_for(meal_type: MealType) -> &'static [FoodConfig] {
    const BREAKFAST: &[FoodConfig] = &[
        food("Oatmeal with berries", (300.0, 450.0), (0.15, 0.65, 0.20)),
        food("Eggs on toast", (350.0, 500.0), (0.30, 0.35, 0.35)),
        food("Yogurt and granola", (280.0, 400.0), (0.30, 0.50, 0.20)),
    ];
    const LUNCH: &[FoodConfig] = &[
        food("Chicken rice bowl", (550.0, 750.0), (0.35, 0.45, 0.20)),
        food("Tuna salad sandwich", (450.0, 600.0), (0.30, 0.40, 0.30)),
        food("Lentil soup", (350.0, 500.0), (0.25, 0.55, 0.20)),
    ];
    const DINNER: &[FoodConfig] = &[
        food("Salmon with potatoes", (600.0, 850.0), (0.30, 0.35, 0.35)),
        food("Beef stir fry", (650.0, 900.0), (0.30, 0.40, 0.30)),
        food("Pasta bolognese", (700.0, 950.0), (0.20, 0.55, 0.25)),
    ];
    const SNACK: &[FoodConfig] = &[
        food("Protein shake", (150.0, 250.0), (0.70, 0.20, 0.10)),
        food("Apple and nut butter", (200.0, 300.0), (0.10, 0.45, 0.45)),
        food("Trail mix", (180.0, 320.0), (0.10, 0.35, 0.55)),
    ];
    match meal_type {
        MealType::Breakfast => BREAKFAST,
        MealType::Lunch => LUNCH,
        MealType::Dinner => DINNER,
        MealType::Snack => SNACK,
    }
}

/// What to generate
#[derive(Debug, Clone)]
pub struct SampleDataConfig {
    /// First day of the span
    pub start: NaiveDate,
    /// Number of days covered
    pub days: u32,
    /// Average workouts per week
    pub workouts_per_week: u32,
    /// Probability of an extra snack on a given day
    pub snack_probability: f64,
    /// Body weight at the first weigh-in, kilograms
    pub starting_weight: f64,
    /// Owner of every generated record
    pub user_id: String,
    /// Random seed; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl SampleDataConfig {
    /// Span of `days` days starting at `start` with typical defaults
    #[must_use]
    pub fn new(start: NaiveDate, days: u32) -> Self {
        Self {
            start,
            days,
            workouts_per_week: 4,
            snack_probability: 0.5,
            starting_weight: 82.0,
            user_id: GUEST_USER_ID.to_owned(),
            seed: None,
        }
    }

    /// Fix the random seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Generated drafts, not yet stored
#[derive(Debug, Clone, Default)]
pub struct SampleData {
    /// Workout drafts in date order
    pub workouts: Vec<NewWorkout>,
    /// Meal drafts in date order
    pub meals: Vec<NewMeal>,
    /// Weigh-in drafts in date order
    pub progress: Vec<NewProgress>,
}

/// Number of records written by [`SampleData::save_into`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleSummary {
    /// Workouts written
    pub workouts: usize,
    /// Meals written
    pub meals: usize,
    /// Progress entries written
    pub progress: usize,
}

impl SampleData {
    /// Generate data for `config`
    #[must_use]
    pub fn generate(config: &SampleDataConfig) -> Self {
        let mut generator = SampleDataGenerator::new(config);
        generator.run()
    }

    /// Materialize the drafts as records with stable ids, without storage
    #[must_use]
    pub fn into_records(self) -> (Vec<WorkoutRecord>, Vec<MealRecord>, Vec<ProgressRecord>) {
        (
            materialize(self.workouts, "workout"),
            materialize(self.meals, "meal"),
            materialize(self.progress, "progress"),
        )
    }

    /// Append every draft to the store
    ///
    /// # Errors
    ///
    /// Returns an error if a draft is invalid or a collection cannot be written
    pub fn save_into<B: StorageBackend>(self, store: &LocalStore<B>) -> AppResult<SampleSummary> {
        let summary = SampleSummary {
            workouts: store.workouts().save_many(self.workouts)?.len(),
            meals: store.meals().save_many(self.meals)?.len(),
            progress: store.progress().save_many(self.progress)?.len(),
        };
        info!(
            workouts = summary.workouts,
            meals = summary.meals,
            progress = summary.progress,
            "Sample data stored"
        );
        Ok(summary)
    }
}

fn materialize<R: Record>(drafts: Vec<R::Draft>, kind: &str) -> Vec<R> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(i, draft)| R::from_draft(format!("sample-{kind}-{i}"), draft))
        .collect()
}

struct SampleDataGenerator<'a> {
    config: &'a SampleDataConfig,
    rng: StdRng,
    templates: Vec<WorkoutTemplate>,
    /// Starting load per exercise, kilograms
    base_loads: HashMap<String, f64>,
}

impl<'a> SampleDataGenerator<'a> {
    fn new(config: &'a SampleDataConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            config,
            rng,
            templates: builtin_templates(),
            base_loads: HashMap::new(),
        }
    }

    fn run(&mut self) -> SampleData {
        let mut data = SampleData::default();
        let workout_chance = (f64::from(self.config.workouts_per_week) / 7.0).min(1.0);
        let snack_chance = probability(self.config.snack_probability);
        let mut weight = self.config.starting_weight;

        for offset in 0..self.config.days {
            let day_index = i64::from(offset);
            let date = self.config.start + Duration::days(day_index);

            if self.rng.gen_bool(workout_chance) {
                if let Some(workout) = self.workout(date, day_index) {
                    data.workouts.push(workout);
                }
            }
            self.meals(date, snack_chance, &mut data.meals);

            if offset % 7 == 0 {
                data.progress.push(self.weigh_in(date, weight));
                weight += self.rng.gen_range(-0.4..0.2);
            }
        }
        data
    }

    fn workout(&mut self, date: NaiveDate, day_index: i64) -> Option<NewWorkout> {
        let template = self.templates.choose(&mut self.rng)?.clone();
        let progression = f64::from(u32::try_from(day_index / PROGRESSION_DAYS).unwrap_or(0));

        let mut draft = NewWorkout::new(date);
        draft.user_id.clone_from(&self.config.user_id);
        draft.name.clone_from(&template.name);
        draft.duration_minutes = Some(self.rng.gen_range(40..=90));

        for exercise in &template.exercises {
            let base = self.base_load(&exercise.name);
            let load = progression.mul_add(PLATE_STEP, base);
            let mut entry = ExerciseEntry::new(exercise.name.clone());
            for set in &exercise.sets {
                let (low, high) = set
                    .reps
                    .as_deref()
                    .and_then(parse_rep_range)
                    .unwrap_or((8, 12));
                let reps = self.rng.gen_range(low..=high);
                let rir = self.rng.gen_range(0..=3);
                entry.sets.push(SetEntry::new(load, reps, rir));
            }
            draft.exercises.push(entry);
        }
        Some(draft)
    }

    fn base_load(&mut self, exercise: &str) -> f64 {
        if let Some(&load) = self.base_loads.get(exercise) {
            return load;
        }
        let load = round_to_plate(self.rng.gen_range(20.0..100.0));
        self.base_loads.insert(exercise.to_owned(), load);
        load
    }

    fn meals(&mut self, date: NaiveDate, snack_chance: f64, meals: &mut Vec<NewMeal>) {
        for meal_type in MealType::ALL {
            if meal_type == MealType::Snack && !self.rng.gen_bool(snack_chance) {
                continue;
            }
            let Some(food) = foods_for(meal_type).choose(&mut self.rng) else {
                continue;
            };
            let (low, high) = food.calories;
            let calories = self.rng.gen_range(low..=high).round();
            let (protein, carbs, fat) = food.split;
            let mut meal = NewMeal::new(date, meal_type, food.name, calories).with_macros(
                (calories * protein / 4.0).round(),
                (calories * carbs / 4.0).round(),
                (calories * fat / 9.0).round(),
            );
            meal.user_id.clone_from(&self.config.user_id);
            meals.push(meal);
        }
    }

    fn weigh_in(&mut self, date: NaiveDate, weight: f64) -> NewProgress {
        let body_fat = self.rng.gen_range(14.0..22.0_f64);
        let mut entry = NewProgress::new(date)
            .with_weight((weight * 10.0).round() / 10.0)
            .with_body_fat((body_fat * 10.0).round() / 10.0);
        entry.user_id.clone_from(&self.config.user_id);
        entry
    }
}

/// Clamp a configured chance into `[0, 1]`; NaN counts as never
fn probability(chance: f64) -> f64 {
    if chance.is_nan() {
        0.0
    } else {
        chance.clamp(0.0, 1.0)
    }
}

fn round_to_plate(weight: f64) -> f64 {
    (weight / PLATE_STEP).round() * PLATE_STEP
}

/// `"8-12"` to `(8, 12)`, `"5"` to `(5, 5)`
fn parse_rep_range(reps: &str) -> Option<(u32, u32)> {
    match reps.split_once('-') {
        Some((low, high)) => {
            let low = low.trim().parse().ok()?;
            let high = high.trim().parse().ok()?;
            (low <= high).then_some((low, high))
        }
        None => reps.trim().parse().ok().map(|n| (n, n)),
    }
}
