// ABOUTME: Whole-store commands for the logbook CLI
// ABOUTME: Export to and import from a JSON snapshot, and reset all data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_logbook::errors::{AppError, AppResult};
use pierre_logbook::storage::DataSnapshot;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use super::Context;

/// Write a snapshot of everything to `file`
pub fn export(ctx: &Context<'_>, file: &Path) -> AppResult<()> {
    let snapshot = ctx.store.export_snapshot();
    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(file, json)?;
    info!(path = %file.display(), records = snapshot.record_count(), "Snapshot exported");
    println!(
        "Exported {} records to {}",
        snapshot.record_count(),
        file.display()
    );
    Ok(())
}

/// Replace all data with the snapshot in `file`
pub fn import(ctx: &Context<'_>, file: &Path) -> AppResult<()> {
    let text = fs::read_to_string(file)?;
    let snapshot: DataSnapshot = serde_json::from_str(&text)?;
    ctx.store.import_snapshot(&snapshot)?;
    println!(
        "Imported {} records from {}",
        snapshot.record_count(),
        file.display()
    );
    Ok(())
}

/// Remove every logbook key; requires `--yes`
pub fn reset(ctx: &Context<'_>, confirmed: bool) -> AppResult<()> {
    if !confirmed {
        return Err(AppError::invalid_input(
            "reset deletes all logbook data; pass --yes to confirm",
        ));
    }
    if !ctx.store.clear_all() {
        warn!("Some logbook keys could not be removed");
        return Err(AppError::storage_unavailable(
            "not every logbook key could be removed",
        ));
    }
    println!("All logbook data deleted");
    Ok(())
}
