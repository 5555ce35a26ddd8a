// ABOUTME: Logbook CLI - command-line front end for the local fitness logbook
// ABOUTME: Workouts, meals, progress, Year in Review, templates, settings, and data export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Start today's session from a built-in template and log a set
//! logbook workout from-template "Push Day"
//! logbook workout log-set <workout-id> "Bench Press" --weight 80 --reps 8 --rir 2
//!
//! # Log a meal and see the day's totals
//! logbook meal add lunch "Chicken rice bowl" 650 --protein 45 --carbs 70 --fat 15
//! logbook meal totals
//!
//! # Weekly weigh-in
//! logbook progress add --weight 81.4 --body-fat 18.5
//!
//! # Year in Review for last year
//! logbook review --year 2024
//!
//! # Switch display unit to pounds
//! logbook prefs unit lbs
//!
//! # Back up and restore everything
//! logbook export backup.json
//! logbook import backup.json
//! ```

mod commands;
mod helpers;

use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand};
use pierre_logbook::config::{LogLevel, LogbookConfig};
use pierre_logbook::constants::defaults::GUEST_USER_ID;
use pierre_logbook::models::{MealType, Theme};
use pierre_logbook::storage::{BackendKind, LocalStore};
use pierre_logbook::units::WeightUnit;
use std::path::PathBuf;
use tracing::debug;

use commands::Context;

#[derive(Parser)]
#[command(
    name = "logbook",
    about = "Pierre Logbook",
    long_about = "Personal training logbook with workouts, meals, weigh-ins and a Year in Review"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (implies the file backend)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Owner id for new records
    #[arg(long, global = true, default_value = GUEST_USER_ID)]
    user: String,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Workout sessions and sets
    Workout {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Meal logging and daily nutrition totals
    Meal {
        #[command(subcommand)]
        action: MealCommand,
    },

    /// Body weight, body fat, and measurements
    Progress {
        #[command(subcommand)]
        action: ProgressCommand,
    },

    /// Year in Review with achievements
    Review {
        /// Calendar year (default: current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Personal records per exercise
    Records {
        /// Show the session history of one exercise instead
        #[arg(long)]
        exercise: Option<String>,
    },

    /// Built-in workout templates
    Template {
        #[command(subcommand)]
        action: TemplateCommand,
    },

    /// Personal goals
    Goals {
        #[command(subcommand)]
        action: GoalsCommand,
    },

    /// Display profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Device preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsCommand,
    },

    /// Write every record and setting to a JSON file
    Export {
        /// Destination file
        file: PathBuf,
    },

    /// Replace all data with the contents of an exported JSON file
    Import {
        /// Snapshot file written by `export`
        file: PathBuf,
    },

    /// Delete all logbook data
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WorkoutCommand {
    /// Start a new workout session
    Add {
        /// Session day (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Session label
        #[arg(long)]
        name: Option<String>,

        /// Session length in minutes
        #[arg(long)]
        duration: Option<u32>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// List workouts, newest first
    List {
        /// First day to include
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day to include
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Maximum number of workouts to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Show one workout with every set
    Show {
        /// Workout id
        id: String,
    },

    /// Append a set to an exercise of a workout
    LogSet {
        /// Workout id
        id: String,

        /// Exercise name (created on first use)
        exercise: String,

        /// Load in the display unit
        #[arg(long)]
        weight: f64,

        /// Repetitions performed
        #[arg(long)]
        reps: u32,

        /// Reps in reserve
        #[arg(long, default_value = "2")]
        rir: u8,
    },

    /// Change a workout's label, duration, or notes
    Update {
        /// Workout id
        id: String,

        /// New label
        #[arg(long)]
        name: Option<String>,

        /// Session length in minutes
        #[arg(long)]
        duration: Option<u32>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a workout
    Delete {
        /// Workout id
        id: String,
    },

    /// Start a session from a built-in template name or a template JSON file
    FromTemplate {
        /// Template name (e.g. "Push Day") or path to a JSON file
        template: String,

        /// Session day (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum MealCommand {
    /// Log a meal
    Add {
        /// breakfast, lunch, dinner, or snack
        meal_type: MealType,

        /// What was eaten
        food: String,

        /// Energy in kcal
        calories: f64,

        /// Protein in grams
        #[arg(long)]
        protein: Option<f64>,

        /// Carbohydrates in grams
        #[arg(long)]
        carbs: Option<f64>,

        /// Fat in grams
        #[arg(long)]
        fat: Option<f64>,

        /// Day eaten (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List meals for one day
    List {
        /// Day to list (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Delete a meal
    Delete {
        /// Meal id
        id: String,
    },

    /// Calorie and macro totals for one day against the calorie goal
    Totals {
        /// Day to total (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProgressCommand {
    /// Record a weigh-in or measurements
    Add {
        /// Body weight in the display unit
        #[arg(long)]
        weight: Option<f64>,

        /// Body fat percentage
        #[arg(long)]
        body_fat: Option<f64>,

        /// Waist circumference in centimetres
        #[arg(long)]
        waist: Option<f64>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,

        /// Entry day (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List progress entries, newest first
    List,

    /// Delete a progress entry
    Delete {
        /// Entry id
        id: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum TemplateCommand {
    /// List built-in templates
    List,

    /// Show a template as the form it pre-fills
    Show {
        /// Template name
        name: String,
    },

    /// Search the exercise catalog
    Exercises {
        /// Part of an exercise name
        #[arg(default_value = "")]
        query: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum GoalsCommand {
    /// Show goals and this week's workout progress
    Show,

    /// Change one or more goals
    Set {
        /// Goal body weight in the display unit
        #[arg(long)]
        target_weight: Option<f64>,

        /// Current body weight in the display unit
        #[arg(long)]
        current_weight: Option<f64>,

        /// Daily calorie target
        #[arg(long)]
        daily_calories: Option<u32>,

        /// Weekly workout target
        #[arg(long)]
        weekly_workouts: Option<u32>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the profile
    Show,

    /// Change profile fields
    Set {
        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Contact email
        #[arg(long)]
        email: Option<String>,

        /// Short biography
        #[arg(long)]
        bio: Option<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PrefsCommand {
    /// Show all preferences
    Show,

    /// Set the display unit (kg or lbs)
    Unit {
        /// New unit
        unit: WeightUnit,
    },

    /// Set the color theme (light, dark, or system)
    Theme {
        /// New theme
        theme: Theme,
    },

    /// Turn guest mode on or off
    Guest {
        /// true or false
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = LogbookConfig::from_env()?;
    if cli.verbose {
        config.logging.level = LogLevel::Debug;
    }
    if let Some(dir) = cli.data_dir {
        config.storage.backend = BackendKind::File;
        config.storage.data_dir = dir;
    }
    config.logging.init()?;
    config.log_summary();

    let store = LocalStore::from_config(&config.storage)?;
    let unit = store
        .settings()
        .with_default_unit(config.weight_unit)
        .weight_unit();
    let ctx = Context {
        store: &store,
        user_id: cli.user,
        unit,
        default_unit: config.weight_unit,
        today: Local::now().date_naive(),
    };
    debug!(user = %ctx.user_id, unit = %ctx.unit, "Running command");

    match cli.command {
        Command::Workout { action } => match action {
            WorkoutCommand::Add {
                date,
                name,
                duration,
                notes,
            } => commands::workout::add(&ctx, date, name, duration, notes)?,
            WorkoutCommand::List { from, to, limit } => {
                commands::workout::list(&ctx, from, to, limit);
            }
            WorkoutCommand::Show { id } => commands::workout::show(&ctx, &id)?,
            WorkoutCommand::LogSet {
                id,
                exercise,
                weight,
                reps,
                rir,
            } => commands::workout::log_set(&ctx, &id, &exercise, weight, reps, rir)?,
            WorkoutCommand::Update {
                id,
                name,
                duration,
                notes,
            } => commands::workout::update(&ctx, &id, name, duration, notes)?,
            WorkoutCommand::Delete { id } => commands::workout::delete(&ctx, &id)?,
            WorkoutCommand::FromTemplate { template, date } => {
                commands::workout::from_template(&ctx, &template, date)?;
            }
        },
        Command::Meal { action } => match action {
            MealCommand::Add {
                meal_type,
                food,
                calories,
                protein,
                carbs,
                fat,
                date,
            } => commands::meal::add(
                &ctx,
                commands::meal::MealInput {
                    meal_type,
                    food,
                    calories,
                    protein,
                    carbs,
                    fat,
                    date,
                },
            )?,
            MealCommand::List { date } => commands::meal::list(&ctx, date),
            MealCommand::Delete { id } => commands::meal::delete(&ctx, &id)?,
            MealCommand::Totals { date } => commands::meal::totals(&ctx, date),
        },
        Command::Progress { action } => match action {
            ProgressCommand::Add {
                weight,
                body_fat,
                waist,
                notes,
                date,
            } => commands::progress::add(&ctx, weight, body_fat, waist, notes, date)?,
            ProgressCommand::List => commands::progress::list(&ctx),
            ProgressCommand::Delete { id } => commands::progress::delete(&ctx, &id)?,
        },
        Command::Review { year } => commands::review::year_in_review(&ctx, year),
        Command::Records { exercise } => match exercise {
            Some(name) => commands::review::history(&ctx, &name),
            None => commands::review::records(&ctx),
        },
        Command::Template { action } => match action {
            TemplateCommand::List => commands::template::list(),
            TemplateCommand::Show { name } => commands::template::show(&name)?,
            TemplateCommand::Exercises { query } => commands::template::exercises(&query),
        },
        Command::Goals { action } => match action {
            GoalsCommand::Show => commands::settings::show_goals(&ctx),
            GoalsCommand::Set {
                target_weight,
                current_weight,
                daily_calories,
                weekly_workouts,
            } => commands::settings::set_goals(
                &ctx,
                target_weight,
                current_weight,
                daily_calories,
                weekly_workouts,
            )?,
        },
        Command::Profile { action } => match action {
            ProfileCommand::Show => commands::settings::show_profile(&ctx),
            ProfileCommand::Set { name, email, bio } => {
                commands::settings::set_profile(&ctx, name, email, bio)?;
            }
        },
        Command::Prefs { action } => match action {
            PrefsCommand::Show => commands::settings::show_preferences(&ctx),
            PrefsCommand::Unit { unit } => commands::settings::set_unit(&ctx, unit)?,
            PrefsCommand::Theme { theme } => commands::settings::set_theme(&ctx, theme)?,
            PrefsCommand::Guest { enabled } => commands::settings::set_guest_mode(&ctx, enabled)?,
        },
        Command::Export { file } => commands::data::export(&ctx, &file)?,
        Command::Import { file } => commands::data::import(&ctx, &file)?,
        Command::Reset { yes } => commands::data::reset(&ctx, yes)?,
    }

    Ok(())
}
