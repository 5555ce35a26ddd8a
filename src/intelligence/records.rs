// ABOUTME: Personal records and per-exercise history across all logged workouts
// ABOUTME: Heaviest set, Epley estimated one-rep max, and best single-set volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use pierre_logbook_core::models::{SetEntry, WorkoutRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Best marks for one exercise
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalRecord {
    /// Exercise name
    pub exercise: String,
    /// Heaviest set (first one logged at that weight)
    pub heaviest_set: SetEntry,
    /// Day of the heaviest set
    pub heaviest_date: NaiveDate,
    /// Highest Epley estimated one-rep max across sets
    pub best_estimated_one_rep_max: f64,
    /// Highest weight × reps in a single set
    pub best_set_volume: f64,
    /// Sets logged in total
    pub total_sets: u64,
}

impl PersonalRecord {
    fn first(exercise: &str, set: SetEntry, date: NaiveDate) -> Self {
        Self {
            exercise: exercise.to_owned(),
            heaviest_set: set,
            heaviest_date: date,
            best_estimated_one_rep_max: set.estimated_one_rep_max(),
            best_set_volume: set.volume(),
            total_sets: 1,
        }
    }

    fn absorb(&mut self, set: SetEntry, date: NaiveDate) {
        if set.weight > self.heaviest_set.weight {
            self.heaviest_set = set;
            self.heaviest_date = date;
        }
        self.best_estimated_one_rep_max = self
            .best_estimated_one_rep_max
            .max(set.estimated_one_rep_max());
        self.best_set_volume = self.best_set_volume.max(set.volume());
        self.total_sets += 1;
    }
}

/// One day's work on a single exercise, for progress charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseSession {
    /// Workout day
    pub date: NaiveDate,
    /// Heaviest weight that day
    pub top_weight: f64,
    /// Sum of weight × reps that day
    pub volume: f64,
    /// Sets logged that day
    pub sets: u64,
}

/// Personal records for every exercise, sorted by exercise name
///
/// Workouts are visited in date order so "first" means earliest.
#[must_use]
pub fn personal_records(workouts: &[WorkoutRecord]) -> Vec<PersonalRecord> {
    let mut ordered: Vec<&WorkoutRecord> = workouts.iter().collect();
    ordered.sort_by_key(|w| w.date);

    let mut records: BTreeMap<&str, PersonalRecord> = BTreeMap::new();
    for workout in ordered {
        for exercise in &workout.exercises {
            for &set in &exercise.sets {
                records
                    .entry(exercise.name.as_str())
                    .and_modify(|record| record.absorb(set, workout.date))
                    .or_insert_with(|| PersonalRecord::first(&exercise.name, set, workout.date));
            }
        }
    }
    records.into_values().collect()
}

/// Per-day history of one exercise in chronological order
///
/// Names are matched case-insensitively; several workouts on one day merge.
#[must_use]
pub fn exercise_history(workouts: &[WorkoutRecord], exercise: &str) -> Vec<ExerciseSession> {
    let mut days: BTreeMap<NaiveDate, ExerciseSession> = BTreeMap::new();
    let matching = workouts.iter().flat_map(|w| {
        w.exercises
            .iter()
            .filter(|e| e.name.eq_ignore_ascii_case(exercise.trim()))
            .map(move |e| (w.date, e))
    });

    for (date, entry) in matching {
        for set in &entry.sets {
            let session = days.entry(date).or_insert(ExerciseSession {
                date,
                top_weight: 0.0,
                volume: 0.0,
                sets: 0,
            });
            session.top_weight = session.top_weight.max(set.weight);
            session.volume += set.volume();
            session.sets += 1;
        }
    }
    days.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pierre_logbook_core::models::{ExerciseEntry, NewWorkout};

    fn workout(date: &str, name: &str, sets: &[(f64, u32)]) -> WorkoutRecord {
        let exercise = sets.iter().fold(ExerciseEntry::new(name), |e, &(w, r)| {
            e.with_set(SetEntry::new(w, r, 2))
        });
        let draft = NewWorkout::new(date.parse().unwrap()).with_exercise(exercise);
        WorkoutRecord::from_draft(format!("{name}-{date}"), draft)
    }

    #[test]
    fn test_records_track_each_mark_independently() {
        let workouts = vec![
            workout("2025-04-01", "Squat", &[(100.0, 10), (120.0, 2)]),
            workout("2025-03-01", "Deadlift", &[(140.0, 5)]),
        ];
        let records = personal_records(&workouts);

        assert_eq!(records[0].exercise, "Deadlift");
        let squat = &records[1];
        assert!((squat.heaviest_set.weight - 120.0).abs() < f64::EPSILON);
        // 100 × (1 + 10/30) beats 120 × (1 + 2/30)
        assert!((squat.best_estimated_one_rep_max - 133.333).abs() < 0.01);
        assert!((squat.best_set_volume - 1000.0).abs() < f64::EPSILON);
        assert_eq!(squat.total_sets, 2);
    }

    #[test]
    fn test_history_merges_same_day_and_sorts() {
        let workouts = vec![
            workout("2025-04-08", "Squat", &[(110.0, 5)]),
            workout("2025-04-01", "squat", &[(100.0, 5)]),
            workout("2025-04-01", "Squat", &[(105.0, 3)]),
        ];
        let history = exercise_history(&workouts, "Squat");

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sets, 2);
        assert!((history[0].top_weight - 105.0).abs() < f64::EPSILON);
        assert!((history[0].volume - 815.0).abs() < f64::EPSILON);
    }
}
