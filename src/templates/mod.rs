// ABOUTME: Workout template parsing and conversion to the set-logging form shape
// ABOUTME: Validates untyped template JSON once, then maps it to string form rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Templates
//!
//! A template is a static workout definition used to pre-populate a logging
//! session. Templates arrive as untyped JSON and are validated once by
//! [`WorkoutTemplate::parse`]:
//!
//! - a missing or non-array `exercises` field fails with `InvalidTemplate`
//! - a malformed exercise is logged and replaced by an empty placeholder, the
//!   rest of the template is kept
//!
//! Everything after parsing works on typed data.

/// Built-in templates and the exercise name catalog
pub mod catalog;

use chrono::NaiveDate;
use pierre_logbook_core::constants::template_defaults;
use pierre_logbook_core::errors::{AppError, AppResult};
use pierre_logbook_core::models::{ExerciseEntry, NewWorkout, SetEntry};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Highest set count accepted for a count-style `sets` field
const MAX_TEMPLATE_SETS: u64 = 20;

/// Suggested values for one set; absent fields fall back to form defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSet {
    /// Suggested load
    pub weight: Option<String>,
    /// Suggested reps or rep range, e.g. `"8-12"`
    pub reps: Option<String>,
    /// Suggested reps in reserve
    pub rir: Option<String>,
}

/// One exercise of a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateExercise {
    /// Exercise name
    pub name: String,
    /// Suggested sets in order
    pub sets: Vec<TemplateSet>,
}

/// A validated workout template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    /// Template name, e.g. "Push Day"
    pub name: Option<String>,
    /// Short description
    pub description: Option<String>,
    /// Exercises in order
    pub exercises: Vec<TemplateExercise>,
}

impl WorkoutTemplate {
    /// Validate untyped template JSON
    ///
    /// # Errors
    ///
    /// Returns `InvalidTemplate` if `value` is not an object whose `exercises`
    /// field is an array. Malformed individual exercises do not fail the parse.
    pub fn parse(value: &Value) -> AppResult<Self> {
        let exercises = value
            .get("exercises")
            .and_then(Value::as_array)
            .ok_or_else(|| AppError::invalid_template("template must have an exercises array"))?;

        let exercises = exercises
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                parse_exercise(raw).unwrap_or_else(|reason| {
                    warn!(
                        index,
                        reason, "Malformed template exercise replaced with placeholder"
                    );
                    TemplateExercise {
                        name: format!("Exercise {}", index + 1),
                        sets: Vec::new(),
                    }
                })
            })
            .collect();

        Ok(Self {
            name: optional_text(value.get("name")),
            description: optional_text(value.get("description")),
            exercises,
        })
    }
}

fn parse_exercise(raw: &Value) -> Result<TemplateExercise, &'static str> {
    let object = raw.as_object().ok_or("exercise is not an object")?;
    let name = object
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or("exercise has no name")?;

    let defaults = TemplateSet {
        weight: field_text(object, "weight")?,
        reps: field_text(object, "reps")?,
        rir: field_text(object, "rir")?,
    };

    let sets = match object.get("sets") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(rows)) => rows
            .iter()
            .map(|row| parse_set(row, &defaults))
            .collect::<Result<_, _>>()?,
        Some(count) => {
            let count = set_count(count).ok_or("sets is neither a count nor an array")?;
            (0..count).map(|_| defaults.clone()).collect()
        }
    };

    Ok(TemplateExercise {
        name: name.to_owned(),
        sets,
    })
}

fn parse_set(row: &Value, defaults: &TemplateSet) -> Result<TemplateSet, &'static str> {
    let object = row.as_object().ok_or("set row is not an object")?;
    Ok(TemplateSet {
        weight: field_text(object, "weight")?.or_else(|| defaults.weight.clone()),
        reps: field_text(object, "reps")?.or_else(|| defaults.reps.clone()),
        rir: field_text(object, "rir")?.or_else(|| defaults.rir.clone()),
    })
}

fn set_count(value: &Value) -> Option<u64> {
    let count = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    (count <= MAX_TEMPLATE_SETS).then_some(count)
}

/// Number or string field as text; other JSON types are malformed
fn field_text(object: &Map<String, Value>, key: &str) -> Result<Option<String>, &'static str> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::String(s)) => Ok(Some(s.trim().to_owned()).filter(|s| !s.is_empty())),
        Some(_) => Err("set field is neither a number nor a string"),
    }
}

fn optional_text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// One row of the logging form; every field is user-editable text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSet {
    /// Load as typed
    pub weight: String,
    /// Reps as typed
    pub reps: String,
    /// Reps in reserve as typed
    pub rir: String,
}

/// One exercise block of the logging form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormExercise {
    /// Exercise name
    pub name: String,
    /// Set rows
    pub sets: Vec<FormSet>,
}

/// Shape the set-logging form is filled from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutForm {
    /// Session label taken from the template name
    pub name: Option<String>,
    /// Exercise blocks
    pub exercises: Vec<FormExercise>,
}

/// Map a template onto the logging form, filling placeholder defaults
#[must_use]
pub fn to_workout_form(template: &WorkoutTemplate) -> WorkoutForm {
    let exercises = template
        .exercises
        .iter()
        .map(|exercise| FormExercise {
            name: exercise.name.clone(),
            sets: exercise
                .sets
                .iter()
                .map(|set| FormSet {
                    weight: set
                        .weight
                        .clone()
                        .unwrap_or_else(|| template_defaults::WEIGHT.to_owned()),
                    reps: set
                        .reps
                        .clone()
                        .unwrap_or_else(|| template_defaults::REPS.to_owned()),
                    rir: set
                        .rir
                        .clone()
                        .unwrap_or_else(|| template_defaults::RIR.to_owned()),
                })
                .collect(),
        })
        .collect();

    WorkoutForm {
        name: template.name.clone(),
        exercises,
    }
}

/// Parse untyped template JSON and map it onto the logging form
///
/// # Errors
///
/// Returns `InvalidTemplate` if the template has no `exercises` array
pub fn to_workout_form_value(value: &Value) -> AppResult<WorkoutForm> {
    WorkoutTemplate::parse(value).map(|template| to_workout_form(&template))
}

impl WorkoutForm {
    /// Start a session from the form: exercise names only, no sets logged yet
    #[must_use]
    pub fn start_session(&self, date: NaiveDate) -> NewWorkout {
        let draft = self
            .exercises
            .iter()
            .fold(NewWorkout::new(date), |draft, exercise| {
                draft.with_exercise(ExerciseEntry::new(exercise.name.clone()))
            });
        match &self.name {
            Some(name) => draft.named(name.clone()),
            None => draft,
        }
    }

    /// Convert a filled-in form into a workout draft
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first row whose weight, reps or RIR is
    /// not a plain number (a rep range such as `"8-12"` must be replaced by the
    /// reps actually done)
    pub fn into_draft(self, date: NaiveDate) -> AppResult<NewWorkout> {
        let mut draft = NewWorkout::new(date);
        draft.name = self.name;
        for exercise in self.exercises {
            let mut entry = ExerciseEntry::new(exercise.name);
            for (index, row) in exercise.sets.iter().enumerate() {
                let set = row.to_set().map_err(|reason| {
                    AppError::invalid_input(format!("{} set {}: {reason}", entry.name, index + 1))
                })?;
                entry.sets.push(set);
            }
            draft.exercises.push(entry);
        }
        draft.validate()?;
        Ok(draft)
    }
}

impl FormSet {
    fn to_set(&self) -> Result<SetEntry, String> {
        let weight = self
            .weight
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("weight '{}' is not a number", self.weight))?;
        let reps = self
            .reps
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("reps '{}' is not a whole number", self.reps))?;
        let rir = match self.rir.trim() {
            "" => 0,
            text => text
                .parse::<u8>()
                .map_err(|_| format!("rir '{}' is not a whole number", self.rir))?,
        };
        Ok(SetEntry::new(weight, reps, rir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_count_style_sets_inherit_exercise_fields() {
        let template = WorkoutTemplate::parse(&json!({
            "name": "Push Day",
            "exercises": [{ "name": "Bench Press", "sets": 3, "reps": "6-8", "rir": 1 }]
        }))
        .unwrap();

        let sets = &template.exercises[0].sets;
        assert_eq!(sets.len(), 3);
        assert_eq!(sets[2].reps.as_deref(), Some("6-8"));
        assert_eq!(sets[2].rir.as_deref(), Some("1"));
        assert_eq!(sets[2].weight, None);
    }

    #[test]
    fn test_bad_set_row_turns_exercise_into_placeholder() {
        let template = WorkoutTemplate::parse(&json!({
            "exercises": [
                { "name": "Squat", "sets": [{ "reps": 5 }] },
                { "name": "Row", "sets": ["heavy"] }
            ]
        }))
        .unwrap();

        assert_eq!(template.exercises[0].name, "Squat");
        assert_eq!(template.exercises[1].name, "Exercise 2");
        assert!(template.exercises[1].sets.is_empty());
    }

    #[test]
    fn test_into_draft_rejects_rep_ranges() {
        let form = to_workout_form_value(&json!({
            "exercises": [{ "name": "Squat", "sets": 1 }]
        }))
        .unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let err = form.clone().into_draft(date).unwrap_err();
        assert!(err.message.contains("Squat set 1"));

        let mut filled = form;
        filled.exercises[0].sets[0] = FormSet {
            weight: "100".to_owned(),
            reps: "5".to_owned(),
            rir: "2".to_owned(),
        };
        let draft = filled.into_draft(date).unwrap();
        assert_eq!(draft.exercises[0].sets[0], SetEntry::new(100.0, 5, 2));
    }
}
