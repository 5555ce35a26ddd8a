// ABOUTME: Progress commands for the logbook CLI
// ABOUTME: Record weigh-ins and measurements, list them, and delete entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use pierre_logbook::errors::{AppError, AppResult};
use pierre_logbook::models::{BodyMeasurements, NewProgress};

use super::Context;
use crate::helpers::display::display_progress;

/// Record a progress entry; body weight is read in the display unit
pub fn add(
    ctx: &Context<'_>,
    weight: Option<f64>,
    body_fat: Option<f64>,
    waist: Option<f64>,
    notes: Option<String>,
    date: Option<NaiveDate>,
) -> AppResult<()> {
    if weight.is_none() && body_fat.is_none() && waist.is_none() && notes.is_none() {
        return Err(AppError::invalid_input(
            "nothing to record: pass --weight, --body-fat, --waist, or --notes",
        ));
    }

    let mut draft = NewProgress::new(ctx.day(date));
    draft.user_id.clone_from(&ctx.user_id);
    draft.weight = weight.map(|w| ctx.to_kilograms(w));
    draft.body_fat_percent = body_fat;
    draft.measurements = waist.map(|waist| BodyMeasurements {
        waist: Some(waist),
        ..BodyMeasurements::default()
    });
    draft.notes = notes;

    let id = ctx.store.progress().save(draft)?;
    println!("Progress entry recorded: {id}");
    Ok(())
}

/// Newest first
pub fn list(ctx: &Context<'_>) {
    display_progress(&ctx.store.progress().sorted_desc(), ctx.unit);
}

/// Delete by id
pub fn delete(ctx: &Context<'_>, id: &str) -> AppResult<()> {
    ctx.store.progress().delete(id)?;
    println!("Progress entry {id} deleted");
    Ok(())
}
