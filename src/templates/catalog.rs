// ABOUTME: Built-in workout templates and the fixed exercise name catalog
// ABOUTME: Templates are declared as JSON and go through the same parse path as user input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::WorkoutTemplate;
use serde_json::{json, Value};
use tracing::warn;

/// Exercise names offered when adding an exercise to a session
pub const EXERCISES: &[&str] = &[
    "Bench Press",
    "Incline Dumbbell Press",
    "Overhead Press",
    "Lateral Raise",
    "Triceps Pushdown",
    "Dips",
    "Pull-Up",
    "Lat Pulldown",
    "Barbell Row",
    "Seated Cable Row",
    "Face Pull",
    "Barbell Curl",
    "Hammer Curl",
    "Squat",
    "Front Squat",
    "Deadlift",
    "Romanian Deadlift",
    "Leg Press",
    "Walking Lunge",
    "Leg Curl",
    "Leg Extension",
    "Calf Raise",
    "Hip Thrust",
    "Plank",
];

fn raw_templates() -> [Value; 5] {
    [
        json!({
            "name": "Push Day",
            "description": "Chest, shoulders and triceps",
            "exercises": [
                { "name": "Bench Press", "sets": 4, "reps": "6-8", "rir": 2 },
                { "name": "Overhead Press", "sets": 3, "reps": "8-10" },
                { "name": "Incline Dumbbell Press", "sets": 3 },
                { "name": "Lateral Raise", "sets": 3, "reps": "12-15", "rir": 1 },
                { "name": "Triceps Pushdown", "sets": 3, "reps": "10-12" }
            ]
        }),
        json!({
            "name": "Pull Day",
            "description": "Back and biceps",
            "exercises": [
                { "name": "Pull-Up", "sets": 4, "reps": "6-10" },
                { "name": "Barbell Row", "sets": 4, "reps": "6-8" },
                { "name": "Seated Cable Row", "sets": 3 },
                { "name": "Face Pull", "sets": 3, "reps": "12-15", "rir": 1 },
                { "name": "Hammer Curl", "sets": 3 }
            ]
        }),
        json!({
            "name": "Leg Day",
            "description": "Quads, hamstrings and calves",
            "exercises": [
                { "name": "Squat", "sets": [
                    { "reps": 5, "rir": 3 },
                    { "reps": 5, "rir": 2 },
                    { "reps": 5, "rir": 1 }
                ] },
                { "name": "Romanian Deadlift", "sets": 3, "reps": "8-10" },
                { "name": "Leg Press", "sets": 3, "reps": "10-12" },
                { "name": "Leg Curl", "sets": 3 },
                { "name": "Calf Raise", "sets": 4, "reps": "12-15" }
            ]
        }),
        json!({
            "name": "Full Body",
            "description": "One compound lift per pattern",
            "exercises": [
                { "name": "Squat", "sets": 3, "reps": "5-8" },
                { "name": "Bench Press", "sets": 3, "reps": "5-8" },
                { "name": "Barbell Row", "sets": 3, "reps": "8-10" },
                { "name": "Overhead Press", "sets": 2 },
                { "name": "Plank", "sets": 2, "reps": "30", "rir": "" }
            ]
        }),
        json!({
            "name": "Upper Body",
            "description": "Horizontal and vertical push and pull",
            "exercises": [
                { "name": "Bench Press", "sets": 3, "reps": "6-8" },
                { "name": "Lat Pulldown", "sets": 3 },
                { "name": "Overhead Press", "sets": 3, "reps": "8-10" },
                { "name": "Seated Cable Row", "sets": 3 },
                { "name": "Barbell Curl", "sets": 2 },
                { "name": "Dips", "sets": 2 }
            ]
        }),
    ]
}

/// Every built-in template in display order
#[must_use]
pub fn builtin_templates() -> Vec<WorkoutTemplate> {
    raw_templates()
        .iter()
        .filter_map(|raw| match WorkoutTemplate::parse(raw) {
            Ok(template) => Some(template),
            Err(e) => {
                warn!(error = %e, "Skipping built-in template");
                None
            }
        })
        .collect()
}

/// Built-in template by name, ignoring case
#[must_use]
pub fn find_template(name: &str) -> Option<WorkoutTemplate> {
    let wanted = name.trim();
    builtin_templates().into_iter().find(|t| {
        t.name
            .as_deref()
            .is_some_and(|n| n.eq_ignore_ascii_case(wanted))
    })
}

/// Catalog exercises whose name contains `query`, ignoring case
#[must_use]
pub fn search_exercises(query: &str) -> Vec<&'static str> {
    let query = query.trim().to_lowercase();
    EXERCISES
        .iter()
        .copied()
        .filter(|name| name.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_templates_only_use_catalog_exercises() {
        let templates = builtin_templates();
        assert_eq!(templates.len(), 5);
        for template in &templates {
            for exercise in &template.exercises {
                assert!(
                    EXERCISES.contains(&exercise.name.as_str()),
                    "{} is not in the catalog",
                    exercise.name
                );
                assert!(!exercise.sets.is_empty());
            }
        }
    }

    #[test]
    fn test_find_template_ignores_case() {
        let legs = find_template("leg day").unwrap();
        assert_eq!(legs.exercises[0].sets[2].rir.as_deref(), Some("1"));
        assert!(find_template("Arm Day").is_none());
    }

    #[test]
    fn test_search_exercises() {
        assert_eq!(
            search_exercises("deadlift"),
            vec!["Deadlift", "Romanian Deadlift"]
        );
    }
}
