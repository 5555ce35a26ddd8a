// ABOUTME: Workout commands for the logbook CLI
// ABOUTME: Start sessions, log sets, list, show, update, delete, and start from templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use pierre_logbook::collections::sort_desc;
use pierre_logbook::errors::{AppError, AppResult};
use pierre_logbook::models::{NewWorkout, SetEntry, WorkoutPatch};
use pierre_logbook::templates::{self, catalog};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

use super::Context;
use crate::helpers::display::{display_form, display_workout, display_workout_list};

/// Start a new, empty session
pub fn add(
    ctx: &Context<'_>,
    date: Option<NaiveDate>,
    name: Option<String>,
    duration: Option<u32>,
    notes: Option<String>,
) -> AppResult<()> {
    let mut draft = NewWorkout::new(ctx.day(date));
    draft.user_id.clone_from(&ctx.user_id);
    draft.name = name;
    draft.duration_minutes = duration;
    draft.notes = notes;

    let id = ctx.store.workouts().save(draft)?;
    println!("Workout started: {id}");
    Ok(())
}

/// Newest first, optionally restricted to a date range
pub fn list(ctx: &Context<'_>, from: Option<NaiveDate>, to: Option<NaiveDate>, limit: usize) {
    let workouts = ctx.store.workouts();
    let mut shown = match (from, to) {
        (None, None) => workouts.sorted_desc(),
        (start, end) => {
            let start = start.unwrap_or(NaiveDate::MIN);
            let end = end.unwrap_or(NaiveDate::MAX);
            sort_desc(workouts.in_range(start, end))
        }
    };
    shown.truncate(limit);
    display_workout_list(&shown, ctx.unit);
}

/// Full detail of one workout
pub fn show(ctx: &Context<'_>, id: &str) -> AppResult<()> {
    let workout = ctx
        .store
        .workouts()
        .find(id)
        .ok_or_else(|| AppError::not_found(format!("Workout {id}")).with_resource_id(id))?;
    display_workout(&workout, ctx.unit);
    Ok(())
}

/// Append one set; the weight is read in the display unit
pub fn log_set(
    ctx: &Context<'_>,
    id: &str,
    exercise: &str,
    weight: f64,
    reps: u32,
    rir: u8,
) -> AppResult<()> {
    let set = SetEntry::new(ctx.to_kilograms(weight), reps, rir);
    let workout = ctx.store.workouts().log_set(id, exercise, set)?;
    let number = workout
        .exercises
        .iter()
        .find(|e| e.name == exercise.trim())
        .map_or(0, |e| e.sets.len());
    println!(
        "Logged {} set {number}: {} x {reps} @ RIR {rir}",
        exercise.trim(),
        ctx.shown(set.weight)
    );
    Ok(())
}

/// Change label, duration, or notes
pub fn update(
    ctx: &Context<'_>,
    id: &str,
    name: Option<String>,
    duration: Option<u32>,
    notes: Option<String>,
) -> AppResult<()> {
    let patch = WorkoutPatch {
        name,
        duration_minutes: duration,
        notes,
    };
    let workout = ctx.store.workouts().update(id, patch)?;
    display_workout(&workout, ctx.unit);
    Ok(())
}

/// Delete by id; unknown ids are reported but not an error
pub fn delete(ctx: &Context<'_>, id: &str) -> AppResult<()> {
    let workouts = ctx.store.workouts();
    let existed = workouts.find(id).is_some();
    workouts.delete(id)?;
    if existed {
        println!("Workout {id} deleted");
    } else {
        println!("No workout with id {id}");
    }
    Ok(())
}

/// Start a session from a built-in template or a template JSON file
pub fn from_template(ctx: &Context<'_>, template: &str, date: Option<NaiveDate>) -> AppResult<()> {
    let form = match catalog::find_template(template) {
        Some(builtin) => templates::to_workout_form(&builtin),
        None => {
            let raw = read_template_file(Path::new(template))?;
            templates::to_workout_form_value(&raw)?
        }
    };

    let mut draft = form.start_session(ctx.day(date));
    draft.user_id.clone_from(&ctx.user_id);
    let id = ctx.store.workouts().save(draft)?;
    info!(workout_id = %id, template, "Session started from template");

    display_form(&form);
    println!("\nWorkout started: {id}");
    println!("Log sets with: logbook workout log-set {id} \"<exercise>\" --weight <w> --reps <n>");
    Ok(())
}

fn read_template_file(path: &Path) -> AppResult<Value> {
    if !path.is_file() {
        let shown = path.display();
        return Err(AppError::not_found(format!("Template '{shown}'")));
    }
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
