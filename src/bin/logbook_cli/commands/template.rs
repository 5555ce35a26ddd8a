// ABOUTME: Template commands for the logbook CLI
// ABOUTME: List and show built-in templates and search the exercise catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_logbook::errors::{AppError, AppResult};
use pierre_logbook::templates::{catalog, to_workout_form};

use crate::helpers::display::display_form;

/// Built-in templates with a one-line summary
pub fn list() {
    println!("\nTemplates");
    println!("{}", "=".repeat(60));
    for template in catalog::builtin_templates() {
        let sets: usize = template.exercises.iter().map(|e| e.sets.len()).sum();
        println!(
            "   {:<12} {} exercises, {sets} sets  {}",
            template.name.as_deref().unwrap_or("-"),
            template.exercises.len(),
            template.description.as_deref().unwrap_or("")
        );
    }
}

/// One template rendered as the logging form
pub fn show(name: &str) -> AppResult<()> {
    let template = catalog::find_template(name)
        .ok_or_else(|| AppError::not_found(format!("Template '{name}'")))?;
    display_form(&to_workout_form(&template));
    Ok(())
}

/// Catalog exercises matching `query`
pub fn exercises(query: &str) {
    let matches = catalog::search_exercises(query);
    if matches.is_empty() {
        println!("No catalog exercise matches '{query}'");
    }
    for name in matches {
        println!("   {name}");
    }
}
