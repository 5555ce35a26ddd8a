// ABOUTME: Integration tests for weight units and conversions
// ABOUTME: Checks canonical round trips and display-unit handling of stored goals and sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use pierre_logbook::constants::units::ROUND_TRIP_TOLERANCE;
use pierre_logbook::intelligence::personal_records;
use pierre_logbook::models::{PersonalGoals, SetEntry};
use pierre_logbook::units::{convert, Weight, WeightUnit};

#[test]
fn test_canonical_round_trip_within_tolerance() {
    for stored in [0.0, 2.5, 61.2, 82.35, 100.0, 227.5, 1000.0] {
        for unit in [WeightUnit::Kilograms, WeightUnit::Pounds] {
            let shown = convert(stored, WeightUnit::CANONICAL, unit);
            let back = convert(shown, unit, WeightUnit::CANONICAL);
            assert!(
                (back - stored).abs() <= ROUND_TRIP_TOLERANCE,
                "{stored} kg via {unit} came back as {back}"
            );
        }
    }
}

#[test]
fn test_known_conversions() {
    assert!((Weight::kilograms(100.0).to(WeightUnit::Pounds).value - 220.462).abs() < 0.001);
    assert!((Weight::pounds(45.0).canonical().value - 20.412).abs() < 0.001);
    assert_eq!(Weight::pounds(45.0).canonical().unit, WeightUnit::Kilograms);
}

#[test]
fn test_goal_weights_are_stored_canonically() {
    let mut goals = PersonalGoals::default();
    goals.set_current_weight(Weight::pounds(200.0));

    let stored = goals.current_weight.unwrap();
    assert!((stored - 90.718).abs() < 0.001);

    let shown = goals.current_weight_in(WeightUnit::Pounds).unwrap();
    assert!((shown.value - 200.0).abs() <= ROUND_TRIP_TOLERANCE);
}

#[test]
fn test_remaining_weight_converts_to_display_unit() {
    let mut goals = PersonalGoals::default();
    assert_eq!(goals.remaining_kg(), None);

    goals.set_current_weight(Weight::pounds(200.0));
    goals.set_target_weight(Weight::pounds(180.0));
    let remaining = Weight::kilograms(goals.remaining_kg().unwrap()).to(WeightUnit::Pounds);
    assert!((remaining.value + 20.0).abs() <= ROUND_TRIP_TOLERANCE);
    assert_eq!(remaining.display(), "-20.0 lbs");
}

#[test]
fn test_set_weights_entered_in_pounds_are_stored_in_kilograms() -> Result<()> {
    let store = common::memory_store();
    let id = store
        .workouts()
        .save(common::workout_draft("2025-03-03", "Deadlift", &[]))?;

    let entered = Weight::pounds(315.0);
    let set = SetEntry::new(entered.canonical().value, 3, 1);
    let workout = store.workouts().log_set(&id, "Deadlift", set)?;

    let stored = workout.exercises[0].sets[0].weight;
    assert!((stored - 142.882).abs() < 0.001);

    let records = personal_records(&store.workouts().get_all());
    let shown = Weight::kilograms(records[0].heaviest_set.weight).to(WeightUnit::Pounds);
    assert!((shown.value - 315.0).abs() <= ROUND_TRIP_TOLERANCE);
    Ok(())
}
