// ABOUTME: Statistics commands for the logbook CLI
// ABOUTME: Year in Review, personal records, and per-exercise history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Datelike;
use pierre_logbook::intelligence::{exercise_history, personal_records};

use super::Context;
use crate::helpers::display::{display_history, display_records, display_year_in_review};

/// Year in Review for `year`, default the current year
pub fn year_in_review(ctx: &Context<'_>, year: Option<i32>) {
    let year = year.unwrap_or_else(|| ctx.today.year());
    let review = ctx.store.year_in_review(year);
    display_year_in_review(&review, ctx.unit);
}

/// Personal records across all workouts
pub fn records(ctx: &Context<'_>) {
    let records = personal_records(&ctx.store.workouts().get_all());
    display_records(&records, ctx.unit);
}

/// Day-by-day history of one exercise
pub fn history(ctx: &Context<'_>, exercise: &str) {
    let sessions = exercise_history(&ctx.store.workouts().get_all(), exercise);
    display_history(exercise, &sessions, ctx.unit);
}
