// ABOUTME: Meal commands for the logbook CLI
// ABOUTME: Log, list, and delete meals and show daily nutrition totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use pierre_logbook::errors::AppResult;
use pierre_logbook::models::{MealType, NewMeal};

use super::Context;
use crate::helpers::display::{display_daily_totals, display_meals};

/// Arguments of `meal add`
pub struct MealInput {
    pub meal_type: MealType,
    pub food: String,
    pub calories: f64,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub date: Option<NaiveDate>,
}

/// Log a meal
pub fn add(ctx: &Context<'_>, input: MealInput) -> AppResult<()> {
    let mut draft = NewMeal::new(
        ctx.day(input.date),
        input.meal_type,
        input.food,
        input.calories,
    );
    draft.user_id.clone_from(&ctx.user_id);
    draft.protein_g = input.protein;
    draft.carbs_g = input.carbs;
    draft.fat_g = input.fat;

    let id = ctx.store.meals().save(draft)?;
    println!("Meal logged: {id}");
    Ok(())
}

/// Meals of one day in slot order
pub fn list(ctx: &Context<'_>, date: Option<NaiveDate>) {
    let day = ctx.day(date);
    let mut meals = ctx.store.meals().on_date(day);
    meals.sort_by_key(|m| MealType::ALL.iter().position(|t| *t == m.meal_type));
    display_meals(day, &meals);
}

/// Delete by id
pub fn delete(ctx: &Context<'_>, id: &str) -> AppResult<()> {
    ctx.store.meals().delete(id)?;
    println!("Meal {id} deleted");
    Ok(())
}

/// Totals for one day against the calorie goal
pub fn totals(ctx: &Context<'_>, date: Option<NaiveDate>) {
    let totals = ctx.store.meals().daily_totals(ctx.day(date));
    display_daily_totals(&totals, &ctx.settings().goals());
}
