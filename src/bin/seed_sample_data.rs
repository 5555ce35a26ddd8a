// ABOUTME: Sample data seeder for the Pierre logbook
// ABOUTME: Fills the configured store with generated workouts, meals, and weigh-ins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sample data seeder for the Pierre logbook.
//!
//! This binary populates the configured store with a realistic training log so
//! the Year in Review and achievements have something to show.
//!
//! Usage:
//! ```bash
//! # Seed the last 365 days
//! cargo run --bin seed-sample-data
//!
//! # Reproducible data for a given year
//! cargo run --bin seed-sample-data -- --start 2024-01-01 --days 366 --seed 42
//!
//! # Clear existing data first
//! cargo run --bin seed-sample-data -- --reset
//! ```

use chrono::{Duration, Local, NaiveDate};
use clap::Parser;
use pierre_logbook::config::{LogLevel, LogbookConfig};
use pierre_logbook::constants::defaults::GUEST_USER_ID;
use pierre_logbook::errors::AppError;
use pierre_logbook::sample_data::{SampleData, SampleDataConfig};
use pierre_logbook::storage::{BackendKind, LocalStore};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// CLI-specific error type for the seed binary
#[derive(Error, Debug)]
enum SeedError {
    #[error("Logbook error: {0}")]
    Logbook(#[from] AppError),

    #[error("{0}")]
    Validation(String),
}

type SeedResult<T> = Result<T, SeedError>;

#[derive(Parser)]
#[command(
    name = "seed-sample-data",
    about = "Pierre Logbook Sample Data Seeder",
    long_about = "Populate the logbook with generated workouts, meals, and weekly weigh-ins"
)]
struct SeedArgs {
    /// First day to generate (default: `--days` days ago)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Number of days to generate
    #[arg(long, default_value = "365")]
    days: u32,

    /// Average workouts per week
    #[arg(long, default_value = "4")]
    workouts_per_week: u32,

    /// Owner id stamped on generated records
    #[arg(long, default_value = GUEST_USER_ID)]
    user: String,

    /// Data directory override (implies the file backend)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Remove existing logbook data before seeding
    #[arg(long)]
    reset: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Random seed for reproducible data (optional)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> SeedResult<()> {
    let args = SeedArgs::parse();

    if args.days == 0 {
        return Err(SeedError::Validation(
            "--days must be at least 1".to_owned(),
        ));
    }
    if args.workouts_per_week > 7 {
        return Err(SeedError::Validation(
            "--workouts-per-week must be between 0 and 7".to_owned(),
        ));
    }

    let mut config = LogbookConfig::from_env()?;
    if args.verbose {
        config.logging.level = LogLevel::Debug;
    }
    if let Some(dir) = args.data_dir {
        config.storage.backend = BackendKind::File;
        config.storage.data_dir = dir;
    }
    config.logging.init()?;
    config.log_summary();

    let store = LocalStore::from_config(&config.storage)?;
    if args.reset {
        info!("Clearing existing logbook data");
        if !store.clear_all() {
            return Err(SeedError::Validation(
                "existing data could not be cleared".to_owned(),
            ));
        }
    }

    let start = args.start.unwrap_or_else(|| {
        Local::now().date_naive() - Duration::days(i64::from(args.days) - 1)
    });
    let mut sample = SampleDataConfig::new(start, args.days);
    sample.workouts_per_week = args.workouts_per_week;
    sample.user_id = args.user;
    sample.seed = args.seed;

    info!(%start, days = args.days, seed = ?args.seed, "Generating sample data");
    let summary = SampleData::generate(&sample).save_into(&store)?;

    println!("\nSample data seeded");
    println!("{}", "=".repeat(40));
    println!("   Workouts:         {}", summary.workouts);
    println!("   Meals:            {}", summary.meals);
    println!("   Progress entries: {}", summary.progress);
    Ok(())
}
