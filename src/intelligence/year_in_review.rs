// ABOUTME: Year in Review aggregation over workouts, meals, and progress entries
// ABOUTME: Totals, favourite exercises, strongest lifts, streaks, and a monthly histogram
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Year in Review
//!
//! Pure fold over the three record collections for one calendar year. The
//! engine never fails: records outside the year are ignored and missing
//! optional fields contribute zero.
//!
//! Ranking rules:
//! - favourite exercises are ranked by set count; equal counts keep the order
//!   in which the exercise was first seen
//! - strongest lifts keep, per exercise, the first set that reached the
//!   heaviest weight, then rank exercises by that weight

use super::achievements::{self, Achievement};
use super::streaks;
use chrono::{Datelike, NaiveDate};
use pierre_logbook_core::constants::review::{FAVORITE_EXERCISES, MONTHS, STRONGEST_LIFTS};
use pierre_logbook_core::models::{MealRecord, ProgressRecord, WorkoutRecord};
use serde::Serialize;
use std::collections::HashMap;

/// Exercise ranked by how many sets were logged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseFrequency {
    /// Exercise name
    pub name: String,
    /// Sets logged across the year
    pub sets: u64,
}

/// Heaviest single set of one exercise
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrongestLift {
    /// Exercise name
    pub exercise: String,
    /// Weight lifted
    pub weight: f64,
    /// Reps performed at that weight
    pub reps: u32,
    /// Day the set was logged
    pub date: NaiveDate,
}

/// Aggregate report for one calendar year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearInReview {
    /// Calendar year covered
    pub year: i32,
    /// Workouts logged
    pub total_workouts: u64,
    /// Sets across all workouts
    pub total_sets: u64,
    /// Reps across all sets
    pub total_reps: u64,
    /// Sum of weight × reps across all sets
    pub total_weight_lifted: f64,
    /// Sum of recorded workout durations
    pub total_minutes: u64,
    /// Top exercises by set count
    pub favorite_exercises: Vec<ExerciseFrequency>,
    /// Top exercises by heaviest set
    pub strongest_lifts: Vec<StrongestLift>,
    /// Longest run of consecutive workout days
    pub longest_streak: u64,
    /// Distinct days with a workout
    pub active_days: u64,
    /// Meals logged
    pub total_meals: u64,
    /// Calories across all meals
    pub total_calories: f64,
    /// Mean calories per meal, 0 with no meals
    pub average_calories: f64,
    /// Progress entries recorded
    pub total_progress_entries: u64,
    /// Last weigh-in minus first weigh-in, 0 with fewer than two
    pub weight_change: f64,
    /// Workouts per calendar month, January first
    pub monthly_workouts: [u64; MONTHS],
    /// Achievement standings derived from the figures above
    pub achievements: Vec<Achievement>,
}

impl YearInReview {
    /// Build the report for `year`
    #[must_use]
    pub fn compute(
        year: i32,
        workouts: &[WorkoutRecord],
        meals: &[MealRecord],
        progress: &[ProgressRecord],
    ) -> Self {
        let workouts: Vec<&WorkoutRecord> =
            workouts.iter().filter(|w| w.date.year() == year).collect();
        let meals: Vec<&MealRecord> = meals.iter().filter(|m| m.date.year() == year).collect();
        let progress: Vec<&ProgressRecord> =
            progress.iter().filter(|p| p.date.year() == year).collect();

        let sets = workouts
            .iter()
            .flat_map(|w| w.exercises.iter())
            .flat_map(|e| e.sets.iter());
        let (total_sets, total_reps, total_weight_lifted) =
            sets.fold((0_u64, 0_u64, 0.0_f64), |(count, reps, volume), set| {
                (count + 1, reps + u64::from(set.reps), volume + set.volume())
            });

        let total_calories: f64 = meals.iter().map(|m| m.calories).sum();
        let average_calories = if meals.is_empty() {
            0.0
        } else {
            total_calories / meals.len() as f64
        };

        let dates = workouts.iter().map(|w| w.date);

        let mut review = Self {
            year,
            total_workouts: workouts.len() as u64,
            total_sets,
            total_reps,
            total_weight_lifted,
            total_minutes: workouts
                .iter()
                .filter_map(|w| w.duration_minutes)
                .map(u64::from)
                .sum(),
            favorite_exercises: favorite_exercises(&workouts),
            strongest_lifts: strongest_lifts(&workouts),
            longest_streak: streaks::longest_streak(dates.clone()),
            active_days: streaks::active_days(dates),
            total_meals: meals.len() as u64,
            total_calories,
            average_calories,
            total_progress_entries: progress.len() as u64,
            weight_change: weight_change(&progress),
            monthly_workouts: monthly_workouts(&workouts),
            achievements: Vec::new(),
        };
        review.achievements = achievements::evaluate(&review);
        review
    }

    /// Achievements already earned
    pub fn earned_achievements(&self) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter().filter(|a| a.earned)
    }
}

fn favorite_exercises(workouts: &[&WorkoutRecord]) -> Vec<ExerciseFrequency> {
    let mut ranked: Vec<ExerciseFrequency> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for exercise in workouts.iter().flat_map(|w| w.exercises.iter()) {
        if exercise.sets.is_empty() {
            continue;
        }
        let slot = *index.entry(exercise.name.as_str()).or_insert_with(|| {
            ranked.push(ExerciseFrequency {
                name: exercise.name.clone(),
                sets: 0,
            });
            ranked.len() - 1
        });
        ranked[slot].sets += exercise.sets.len() as u64;
    }

    // sort_by is stable, so ties keep first-seen order
    ranked.sort_by(|a, b| b.sets.cmp(&a.sets));
    ranked.truncate(FAVORITE_EXERCISES);
    ranked
}

fn strongest_lifts(workouts: &[&WorkoutRecord]) -> Vec<StrongestLift> {
    let mut best: Vec<StrongestLift> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for workout in workouts {
        for exercise in &workout.exercises {
            for set in &exercise.sets {
                match index.get(exercise.name.as_str()) {
                    Some(&slot) => {
                        if set.weight > best[slot].weight {
                            best[slot].weight = set.weight;
                            best[slot].reps = set.reps;
                            best[slot].date = workout.date;
                        }
                    }
                    None => {
                        index.insert(exercise.name.as_str(), best.len());
                        best.push(StrongestLift {
                            exercise: exercise.name.clone(),
                            weight: set.weight,
                            reps: set.reps,
                            date: workout.date,
                        });
                    }
                }
            }
        }
    }

    best.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    best.truncate(STRONGEST_LIFTS);
    best
}

fn weight_change(progress: &[&ProgressRecord]) -> f64 {
    let mut weighed: Vec<(NaiveDate, f64)> = progress
        .iter()
        .filter_map(|p| p.weight.map(|w| (p.date, w)))
        .collect();
    if weighed.len() < 2 {
        return 0.0;
    }
    weighed.sort_by_key(|(date, _)| *date);
    match (weighed.first(), weighed.last()) {
        (Some((_, first)), Some((_, last))) => last - first,
        _ => 0.0,
    }
}

fn monthly_workouts(workouts: &[&WorkoutRecord]) -> [u64; MONTHS] {
    let mut months = [0_u64; MONTHS];
    for workout in workouts {
        months[workout.date.month0() as usize] += 1;
    }
    months
}
