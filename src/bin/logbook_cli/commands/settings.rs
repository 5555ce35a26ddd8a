// ABOUTME: Goals, profile, and preference commands for the logbook CLI
// ABOUTME: Reads and writes the singleton settings through the Settings accessor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_logbook::errors::AppResult;
use pierre_logbook::intelligence::weekly_goal_progress;
use pierre_logbook::models::Theme;
use pierre_logbook::units::{Weight, WeightUnit};

use super::Context;
use crate::helpers::display::{display_goals, display_preferences, display_profile};

/// Goals with this week's workout count
pub fn show_goals(ctx: &Context<'_>) {
    let goals = ctx.settings().goals();
    let week = weekly_goal_progress(&ctx.store.workouts().get_all(), &goals, ctx.today);
    display_goals(&goals, &week, ctx.unit);
}

/// Change the given goals; weights are read in the display unit
pub fn set_goals(
    ctx: &Context<'_>,
    target_weight: Option<f64>,
    current_weight: Option<f64>,
    daily_calories: Option<u32>,
    weekly_workouts: Option<u32>,
) -> AppResult<()> {
    let settings = ctx.settings();
    let mut goals = settings.goals();
    if let Some(value) = target_weight {
        goals.set_target_weight(Weight::new(value, ctx.unit));
    }
    if let Some(value) = current_weight {
        goals.set_current_weight(Weight::new(value, ctx.unit));
    }
    if let Some(calories) = daily_calories {
        goals.daily_calories = calories;
    }
    if let Some(workouts) = weekly_workouts {
        goals.weekly_workouts = workouts;
    }
    settings.save_goals(&goals)?;
    println!("Goals saved");
    show_goals(ctx);
    Ok(())
}

/// Saved profile
pub fn show_profile(ctx: &Context<'_>) {
    display_profile(ctx.settings().profile().as_ref());
}

/// Change the given profile fields
pub fn set_profile(
    ctx: &Context<'_>,
    name: Option<String>,
    email: Option<String>,
    bio: Option<String>,
) -> AppResult<()> {
    let settings = ctx.settings();
    let mut profile = settings.profile().unwrap_or_default();
    if let Some(name) = name {
        profile.display_name = name;
    }
    if let Some(email) = email {
        profile.email = email;
    }
    if let Some(bio) = bio {
        profile.bio = bio;
    }
    settings.save_profile(&profile)?;
    display_profile(Some(&profile));
    Ok(())
}

/// All preferences
pub fn show_preferences(ctx: &Context<'_>) {
    display_preferences(&ctx.settings().preferences());
}

/// Persist the display unit
pub fn set_unit(ctx: &Context<'_>, unit: WeightUnit) -> AppResult<()> {
    ctx.settings().set_weight_unit(unit)?;
    println!("Weights will be shown in {unit}");
    Ok(())
}

/// Persist the color theme
pub fn set_theme(ctx: &Context<'_>, theme: Theme) -> AppResult<()> {
    ctx.settings().set_theme(theme)?;
    println!("Theme set to {}", theme.as_str());
    Ok(())
}

/// Persist the guest-mode flag
pub fn set_guest_mode(ctx: &Context<'_>, enabled: bool) -> AppResult<()> {
    ctx.settings().set_guest_mode(enabled)?;
    println!("Guest mode {}", if enabled { "on" } else { "off" });
    Ok(())
}
