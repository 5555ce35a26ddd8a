// ABOUTME: Integration tests for the workout, meal, progress, and settings accessors
// ABOUTME: Exercises CRUD behaviour, filters, ordering, and singleton defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use pierre_logbook::constants::storage_keys;
use pierre_logbook::errors::ErrorCode;
use pierre_logbook::models::{
    MealType, NewMeal, NewProgress, NewWorkout, PersonalGoals, ProfileData, SetEntry, Theme,
    WorkoutPatch,
};
use pierre_logbook::units::{Weight, WeightUnit};

#[test]
fn test_save_assigns_unique_ids_and_round_trips() -> Result<()> {
    let store = common::memory_store();
    let workouts = store.workouts();

    let first = workouts.save(common::workout_draft("2025-01-10", "Squat", &[(100.0, 5)]))?;
    let second = workouts.save(common::workout_draft("2025-01-12", "Bench", &[(80.0, 8)]))?;
    assert_ne!(first, second);

    let stored = workouts.find(&first).expect("first workout stored");
    assert_eq!(stored.date, common::date("2025-01-10"));
    assert_eq!(stored.user_id, "guest");
    assert_eq!(stored.exercises[0].sets, vec![SetEntry::new(100.0, 5, 2)]);
    assert_eq!(workouts.count(), 2);
    Ok(())
}

#[test]
fn test_invalid_draft_is_rejected_without_writing() {
    let store = common::memory_store();
    let draft = common::workout_draft("2025-01-10", "Squat", &[(-5.0, 5)]);

    let err = store.workouts().save(draft).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(store.read_raw(storage_keys::WORKOUTS).is_none());
}

#[test]
fn test_delete_twice_is_idempotent() -> Result<()> {
    let store = common::memory_store();
    let meals = store.meals();
    let id = meals.save(NewMeal::new(
        common::date("2025-02-02"),
        MealType::Breakfast,
        "Oats",
        350.0,
    ))?;

    meals.delete(&id)?;
    meals.delete(&id)?;
    meals.delete("never-existed")?;
    assert_eq!(meals.count(), 0);
    Ok(())
}

#[test]
fn test_update_unknown_id_is_not_found() {
    let store = common::memory_store();
    let err = store
        .workouts()
        .update("missing", WorkoutPatch::default())
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_update_changes_only_patched_fields() -> Result<()> {
    let store = common::memory_store();
    let draft = common::workout_draft("2025-03-01", "Deadlift", &[(140.0, 5)]);
    let id = store.workouts().save(draft)?;

    let updated = store.workouts().update(
        &id,
        WorkoutPatch {
            name: Some("Heavy pull".to_owned()),
            duration_minutes: Some(55),
            notes: None,
        },
    )?;

    assert_eq!(updated.name.as_deref(), Some("Heavy pull"));
    assert_eq!(updated.duration_minutes, Some(55));
    assert_eq!(updated.exercises[0].name, "Deadlift");
    assert_eq!(store.workouts().find(&id), Some(updated));
    Ok(())
}

#[test]
fn test_log_set_appends_to_stored_workout() -> Result<()> {
    let store = common::memory_store();
    let id = store
        .workouts()
        .save(NewWorkout::new(common::date("2025-03-05")).named("Push"))?;

    store
        .workouts()
        .log_set(&id, "Overhead Press", SetEntry::new(50.0, 8, 2))?;
    let workout = store
        .workouts()
        .log_set(&id, "Overhead Press", SetEntry::new(52.5, 6, 1))?;

    assert_eq!(workout.exercises.len(), 1);
    assert_eq!(workout.exercises[0].sets.len(), 2);
    assert_eq!(store.workouts().find(&id), Some(workout));
    Ok(())
}

#[test]
fn test_log_set_on_unknown_workout_fails() {
    let store = common::memory_store();
    let err = store
        .workouts()
        .log_set("nope", "Squat", SetEntry::new(100.0, 5, 2))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_filters_by_user_date_and_range() -> Result<()> {
    let store = common::memory_store();
    let meals = store.meals();
    let mut shared = NewMeal::new(common::date("2025-04-02"), MealType::Lunch, "Wrap", 600.0);
    shared.user_id = "alex".to_owned();
    meals.save(shared)?;
    meals.save(NewMeal::new(
        common::date("2025-04-01"),
        MealType::Dinner,
        "Pasta",
        800.0,
    ))?;
    meals.save(NewMeal::new(
        common::date("2025-04-02"),
        MealType::Snack,
        "Apple",
        95.0,
    ))?;
    meals.save(NewMeal::new(
        common::date("2025-04-05"),
        MealType::Breakfast,
        "Eggs",
        300.0,
    ))?;

    assert_eq!(meals.for_user("alex").len(), 1);
    assert_eq!(meals.for_user("guest").len(), 3);
    assert_eq!(meals.on_date(common::date("2025-04-02")).len(), 2);

    let range = meals.in_range(common::date("2025-04-01"), common::date("2025-04-02"));
    assert_eq!(range.len(), 3);
    assert!(meals
        .in_range(common::date("2025-04-03"), common::date("2025-04-04"))
        .is_empty());
    Ok(())
}

#[test]
fn test_sorted_desc_keeps_stored_order_for_equal_dates() -> Result<()> {
    let store = common::memory_store();
    let progress = store.progress();
    progress.save(NewProgress::new(common::date("2025-01-01")).with_weight(80.0))?;
    progress.save(
        NewProgress::new(common::date("2025-02-01"))
            .with_weight(79.0)
            .with_body_fat(18.0),
    )?;
    progress.save(NewProgress::new(common::date("2025-02-01")).with_weight(78.5))?;

    let sorted: Vec<Option<f64>> = progress.sorted_desc().iter().map(|p| p.weight).collect();
    assert_eq!(sorted, vec![Some(79.0), Some(78.5), Some(80.0)]);
    Ok(())
}

#[test]
fn test_latest_weight_skips_entries_without_weight() -> Result<()> {
    let store = common::memory_store();
    let progress = store.progress();
    assert!(progress.latest_weight().is_none());

    progress.save(NewProgress::new(common::date("2025-05-01")).with_weight(82.0))?;
    progress.save(NewProgress::new(common::date("2025-05-08")).with_body_fat(17.5))?;

    let latest = progress.latest_weight().expect("a weigh-in exists");
    assert_eq!(latest.weight, Some(82.0));
    assert_eq!(latest.date, common::date("2025-05-01"));
    Ok(())
}

#[test]
fn test_daily_totals_ignore_missing_macros() -> Result<()> {
    let store = common::memory_store();
    let meals = store.meals();
    let day = common::date("2025-06-01");
    meals.save(NewMeal::new(day, MealType::Breakfast, "Oats", 400.0).with_macros(15.0, 60.0, 8.0))?;
    meals.save(NewMeal::new(day, MealType::Lunch, "Soup", 350.0))?;
    meals.save(NewMeal::new(
        common::date("2025-06-02"),
        MealType::Dinner,
        "Steak",
        900.0,
    ))?;

    let totals = meals.daily_totals(day);
    assert_eq!(totals.meals, 2);
    assert!((totals.calories - 750.0).abs() < f64::EPSILON);
    assert!((totals.protein_g - 15.0).abs() < f64::EPSILON);
    assert!((totals.remaining_calories(2000) - 1250.0).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn test_save_many_stores_nothing_when_one_draft_is_invalid() -> Result<()> {
    let store = common::memory_store();
    let workouts = store.workouts();

    let ids = workouts.save_many(vec![
        common::workout_draft("2025-07-01", "Squat", &[(100.0, 5)]),
        common::workout_draft("2025-07-03", "Squat", &[(102.5, 5)]),
    ])?;
    assert_eq!(ids.len(), 2);

    let err = workouts
        .save_many(vec![
            common::workout_draft("2025-07-05", "Squat", &[(105.0, 5)]),
            common::workout_draft("2025-07-07", "Squat", &[(105.0, 0)]),
        ])
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(workouts.count(), 2);
    assert!(workouts.save_many(Vec::new())?.is_empty());
    Ok(())
}

#[test]
fn test_settings_defaults_and_raw_preferences() -> Result<()> {
    let store = common::memory_store();
    let settings = store.settings();

    assert!(settings.profile().is_none());
    assert_eq!(settings.goals(), PersonalGoals::default());
    assert_eq!(settings.theme(), Theme::Light);
    assert_eq!(settings.weight_unit(), WeightUnit::Kilograms);
    assert!(!settings.guest_mode());

    settings.set_weight_unit(WeightUnit::Pounds)?;
    settings.set_theme(Theme::Dark)?;
    settings.set_guest_mode(true)?;

    assert_eq!(
        store.read_raw(storage_keys::WEIGHT_UNIT).as_deref(),
        Some("lbs")
    );
    assert_eq!(store.read_raw(storage_keys::THEME).as_deref(), Some("dark"));
    assert_eq!(
        store.read_raw(storage_keys::GUEST_MODE).as_deref(),
        Some("true")
    );
    assert_eq!(settings.preferences().weight_unit, WeightUnit::Pounds);
    Ok(())
}

#[test]
fn test_unreadable_preference_falls_back_to_default() -> Result<()> {
    let store = common::memory_store();
    store.try_write_raw(storage_keys::THEME, "neon")?;
    assert_eq!(store.settings().theme(), Theme::Light);
    assert_eq!(
        store
            .settings()
            .with_default_unit(WeightUnit::Pounds)
            .weight_unit(),
        WeightUnit::Pounds
    );
    Ok(())
}

#[test]
fn test_goals_and_profile_persist() -> Result<()> {
    let store = common::memory_store();
    let settings = store.settings();

    let mut goals = PersonalGoals::default();
    goals.set_target_weight(Weight::pounds(165.0));
    goals.weekly_workouts = 5;
    settings.save_goals(&goals)?;

    let stored = settings.goals();
    assert_eq!(stored.weekly_workouts, 5);
    let target = stored.target_weight.expect("target stored");
    assert!((target - 74.84).abs() < 0.01);

    let profile = ProfileData {
        display_name: "Sam".to_owned(),
        ..ProfileData::default()
    };
    settings.save_profile(&profile)?;
    assert_eq!(settings.profile(), Some(profile));
    Ok(())
}
