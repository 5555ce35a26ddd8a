// ABOUTME: Integration tests for the Year in Review statistics engine
// ABOUTME: Verifies totals, streaks, rankings, achievements, and personal records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chrono::Duration;
use pierre_logbook::intelligence::{
    current_streak, exercise_history, longest_streak, personal_records, AchievementKind,
    YearInReview,
};
use pierre_logbook::models::{
    ExerciseEntry, MealType, NewMeal, NewProgress, NewWorkout, SetEntry, WorkoutRecord,
};

fn repeated(name: &str, sets: usize) -> ExerciseEntry {
    (0..sets).fold(ExerciseEntry::new(name), |entry, _| {
        entry.with_set(SetEntry::new(60.0, 8, 2))
    })
}

fn session(id: &str, iso: &str, exercises: Vec<ExerciseEntry>) -> WorkoutRecord {
    let mut draft = NewWorkout::new(common::date(iso));
    draft.exercises = exercises;
    WorkoutRecord::from_draft(id.to_owned(), draft)
}

#[test]
fn test_longest_streak_counts_consecutive_days_only() {
    let dates = ["2025-01-01", "2025-01-02", "2025-01-03", "2025-01-05"].map(common::date);
    assert_eq!(longest_streak(dates), 3);

    let workouts: Vec<WorkoutRecord> = dates
        .iter()
        .map(|d| common::workout(&d.to_string(), "Squat", &[(100.0, 5)]))
        .collect();
    let review = YearInReview::compute(2025, &workouts, &[], &[]);
    assert_eq!(review.longest_streak, 3);
    assert_eq!(review.active_days, 4);
}

#[test]
fn test_two_workouts_on_one_day_count_once_for_streaks() {
    let workouts = vec![
        common::workout("2025-03-10", "Squat", &[(100.0, 5)]),
        common::workout("2025-03-10", "Bench Press", &[(80.0, 5)]),
        common::workout("2025-03-11", "Deadlift", &[(140.0, 3)]),
    ];
    let review = YearInReview::compute(2025, &workouts, &[], &[]);

    assert_eq!(review.total_workouts, 3);
    assert_eq!(review.active_days, 2);
    assert_eq!(review.longest_streak, 2);
}

#[test]
fn test_favorite_exercise_ties_keep_first_seen_order() {
    let workouts = vec![
        session(
            "w1",
            "2025-02-01",
            vec![repeated("Squat", 5), repeated("Bench Press", 10)],
        ),
        session(
            "w2",
            "2025-02-03",
            vec![repeated("Squat", 5), repeated("Deadlift", 5)],
        ),
    ];
    let review = YearInReview::compute(2025, &workouts, &[], &[]);

    let ranked: Vec<(&str, u64)> = review
        .favorite_exercises
        .iter()
        .map(|f| (f.name.as_str(), f.sets))
        .collect();
    assert_eq!(
        ranked,
        vec![("Squat", 10), ("Bench Press", 10), ("Deadlift", 5)]
    );
}

#[test]
fn test_average_calories_without_meals_is_zero() {
    let workouts = vec![common::workout("2025-01-01", "Squat", &[(100.0, 5)])];
    let review = YearInReview::compute(2025, &workouts, &[], &[]);

    assert_eq!(review.total_meals, 0);
    assert!(review.average_calories.abs() < f64::EPSILON);
    assert!(review.total_calories.abs() < f64::EPSILON);
}

#[test]
fn test_total_weight_lifted_sums_weight_times_reps() {
    let workouts = vec![common::workout(
        "2025-05-01",
        "Squat",
        &[(100.0, 10), (50.0, 5)],
    )];
    let review = YearInReview::compute(2025, &workouts, &[], &[]);

    assert!((review.total_weight_lifted - 1250.0).abs() < f64::EPSILON);
    assert_eq!(review.total_sets, 2);
    assert_eq!(review.total_reps, 15);
}

#[test]
fn test_review_from_store_covers_all_collections() -> Result<()> {
    let store = common::memory_store();
    store.workouts().save(
        common::workout_draft("2025-06-01", "Squat", &[(100.0, 5)]).with_duration(45),
    )?;
    store
        .workouts()
        .save(common::workout_draft("2024-06-01", "Squat", &[(200.0, 5)]))?;
    store.meals().save(NewMeal::new(
        common::date("2025-06-01"),
        MealType::Lunch,
        "Rice bowl",
        700.0,
    ))?;
    store.meals().save(NewMeal::new(
        common::date("2025-06-02"),
        MealType::Dinner,
        "Curry",
        900.0,
    ))?;
    store
        .progress()
        .save(NewProgress::new(common::date("2025-01-15")).with_weight(84.0))?;
    store
        .progress()
        .save(NewProgress::new(common::date("2025-11-15")).with_weight(80.5))?;

    let review = store.year_in_review(2025);
    assert_eq!(review.total_workouts, 1);
    assert_eq!(review.total_minutes, 45);
    assert!((review.average_calories - 800.0).abs() < f64::EPSILON);
    assert_eq!(review.total_progress_entries, 2);
    assert!((review.weight_change + 3.5).abs() < 1e-9);
    assert_eq!(review.monthly_workouts[5], 1);
    assert!((review.strongest_lifts[0].weight - 100.0).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn test_achievements_are_recomputed_from_current_data() -> Result<()> {
    let store = common::memory_store();
    let start = common::date("2025-03-01");
    let drafts = (0..7).map(|day| {
        let iso = (start + Duration::days(day)).to_string();
        common::workout_draft(&iso, "Squat", &[(100.0, 5)])
    });
    let ids = store.workouts().save_many(drafts)?;

    let review = store.year_in_review(2025);
    let earned: Vec<AchievementKind> = review.earned_achievements().map(|a| a.kind).collect();
    assert_eq!(
        earned,
        vec![AchievementKind::GettingStarted, AchievementKind::OnFire]
    );

    let dedicated = review
        .achievements
        .iter()
        .find(|a| a.kind == AchievementKind::Dedicated)
        .expect("every achievement is reported");
    assert_eq!(dedicated.current, 7);
    assert!((dedicated.progress() - 0.14).abs() < 1e-9);

    store.workouts().delete(&ids[3])?;
    let after = store.year_in_review(2025);
    assert!(!after
        .earned_achievements()
        .any(|a| a.kind == AchievementKind::OnFire));
    Ok(())
}

#[test]
fn test_current_streak_ends_today_or_yesterday() {
    let dates = ["2025-08-01", "2025-08-02", "2025-08-03"].map(common::date);
    assert_eq!(current_streak(dates, common::date("2025-08-03")), 3);
    assert_eq!(current_streak(dates, common::date("2025-08-04")), 3);
    assert_eq!(current_streak(dates, common::date("2025-08-06")), 0);
}

#[test]
fn test_personal_records_and_history() {
    let workouts = vec![
        common::workout("2025-01-05", "Bench Press", &[(80.0, 8), (85.0, 5)]),
        common::workout("2025-01-12", "Bench Press", &[(87.5, 3)]),
        common::workout("2025-01-12", "Squat", &[(120.0, 5)]),
    ];

    let records = personal_records(&workouts);
    assert_eq!(records.len(), 2);
    let bench = &records[0];
    assert_eq!(bench.exercise, "Bench Press");
    assert!((bench.heaviest_set.weight - 87.5).abs() < f64::EPSILON);
    assert_eq!(bench.heaviest_date, common::date("2025-01-12"));
    assert!((bench.best_set_volume - 640.0).abs() < f64::EPSILON);
    assert_eq!(bench.total_sets, 3);

    let history = exercise_history(&workouts, "bench press");
    assert_eq!(history.len(), 2);
    assert!((history[0].top_weight - 85.0).abs() < f64::EPSILON);
    assert_eq!(history[1].sets, 1);
}
