// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for the logbook CLI
// ABOUTME: Consistent console layouts for workouts, meals, progress, reviews, and settings

use chrono::NaiveDate;
use pierre_logbook::collections::DailyTotals;
use pierre_logbook::intelligence::{
    Achievement, ExerciseSession, PersonalRecord, WeeklyGoalProgress, YearInReview,
};
use pierre_logbook::models::{
    MealRecord, PersonalGoals, Preferences, ProfileData, ProgressRecord, WorkoutRecord,
};
use pierre_logbook::templates::WorkoutForm;
use pierre_logbook::units::{Weight, WeightUnit};

const WIDE: usize = 60;

fn heading(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(WIDE));
}

fn weight(kilograms: f64, unit: WeightUnit) -> Weight {
    Weight::kilograms(kilograms).to(unit)
}

/// One line per workout, newest first
pub fn display_workout_list(workouts: &[WorkoutRecord], unit: WeightUnit) {
    if workouts.is_empty() {
        println!("No workouts logged.");
        return;
    }
    heading(&format!("Workouts ({})", workouts.len()));
    for workout in workouts {
        println!(
            "{}  {:<14} {:>2} exercises {:>3} sets {:>12}  {}",
            workout.date,
            workout.name.as_deref().unwrap_or("Workout"),
            workout.exercises.len(),
            workout.set_count(),
            weight(workout.total_volume(), unit).display(),
            workout.id
        );
    }
}

/// A workout with every set numbered
pub fn display_workout(workout: &WorkoutRecord, unit: WeightUnit) {
    heading(&format!(
        "{} - {}",
        workout.name.as_deref().unwrap_or("Workout"),
        workout.date
    ));
    println!("   Id: {}", workout.id);
    if let Some(minutes) = workout.duration_minutes {
        println!("   Duration: {minutes} min");
    }
    if let Some(notes) = &workout.notes {
        println!("   Notes: {notes}");
    }
    for exercise in &workout.exercises {
        println!("\n   {}", exercise.name);
        if exercise.sets.is_empty() {
            println!("      (no sets logged)");
        }
        for (index, set) in exercise.sets.iter().enumerate() {
            println!(
                "      Set {}: {} x {} @ RIR {}",
                index + 1,
                weight(set.weight, unit),
                set.reps,
                set.rir
            );
        }
    }
    println!(
        "\n   Total: {} sets, {} volume",
        workout.set_count(),
        weight(workout.total_volume(), unit)
    );
}

/// Meals of one day in slot order
pub fn display_meals(date: NaiveDate, meals: &[MealRecord]) {
    heading(&format!("Meals on {date}"));
    if meals.is_empty() {
        println!("   No meals logged.");
        return;
    }
    for meal in meals {
        println!(
            "   {:<10} {:<28} {:>6.0} kcal  {}",
            meal.meal_type.as_str(),
            meal.food,
            meal.calories,
            meal.id
        );
    }
}

/// Daily totals against the calorie goal
pub fn display_daily_totals(totals: &DailyTotals, goals: &PersonalGoals) {
    heading(&format!("Nutrition for {}", totals.date));
    println!("   Meals:     {}", totals.meals);
    println!(
        "   Calories:  {:.0} / {} kcal ({:.0} remaining)",
        totals.calories,
        goals.daily_calories,
        totals.remaining_calories(goals.daily_calories)
    );
    println!("   Protein:   {:.0} g", totals.protein_g);
    println!("   Carbs:     {:.0} g", totals.carbs_g);
    println!("   Fat:       {:.0} g", totals.fat_g);
}

/// Progress entries, newest first
pub fn display_progress(entries: &[ProgressRecord], unit: WeightUnit) {
    if entries.is_empty() {
        println!("No progress entries recorded.");
        return;
    }
    heading("Progress");
    for entry in entries {
        let shown = entry
            .weight
            .map_or_else(|| "-".to_owned(), |kg| weight(kg, unit).display());
        let body_fat = entry
            .body_fat_percent
            .map_or_else(|| "-".to_owned(), |bf| format!("{bf:.1}%"));
        println!(
            "   {}  {:>12}  {:>6}  {}",
            entry.date, shown, body_fat, entry.id
        );
    }
}

fn display_achievement(achievement: &Achievement) {
    let mark = if achievement.earned { "[x]" } else { "[ ]" };
    println!(
        "   {mark} {:<22} {:>5}/{:<5} {}",
        achievement.name, achievement.current, achievement.threshold, achievement.description
    );
}

/// Year in Review report
pub fn display_year_in_review(review: &YearInReview, unit: WeightUnit) {
    heading(&format!("Your {} in Review", review.year));
    println!("   Workouts:        {}", review.total_workouts);
    println!("   Active days:     {}", review.active_days);
    println!("   Longest streak:  {} days", review.longest_streak);
    println!(
        "   Sets / reps:     {} / {}",
        review.total_sets, review.total_reps
    );
    println!(
        "   Weight lifted:   {}",
        weight(review.total_weight_lifted, unit)
    );
    println!("   Time trained:    {} min", review.total_minutes);
    println!(
        "   Meals logged:    {} (avg {:.0} kcal)",
        review.total_meals, review.average_calories
    );
    println!(
        "   Weigh-ins:       {} (change {:+.1} {})",
        review.total_progress_entries,
        weight(review.weight_change, unit).value,
        unit
    );

    if !review.favorite_exercises.is_empty() {
        println!("\n   Favourite exercises");
        for (rank, favorite) in review.favorite_exercises.iter().enumerate() {
            println!(
                "      {}. {} ({} sets)",
                rank + 1,
                favorite.name,
                favorite.sets
            );
        }
    }
    if !review.strongest_lifts.is_empty() {
        println!("\n   Strongest lifts");
        for lift in &review.strongest_lifts {
            println!(
                "      {}: {} x {} on {}",
                lift.exercise,
                weight(lift.weight, unit),
                lift.reps,
                lift.date
            );
        }
    }

    println!("\n   Workouts per month");
    let months = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    for (month, count) in months.iter().zip(review.monthly_workouts) {
        println!("      {month} {:>3} {}", count, "#".repeat(count as usize));
    }

    println!("\n   Achievements");
    review.achievements.iter().for_each(display_achievement);
}

/// Personal records table
pub fn display_records(records: &[PersonalRecord], unit: WeightUnit) {
    if records.is_empty() {
        println!("No sets logged yet.");
        return;
    }
    heading("Personal Records");
    for record in records {
        println!(
            "   {:<24} heaviest {} x {} ({})  e1RM {}  best set {}",
            record.exercise,
            weight(record.heaviest_set.weight, unit),
            record.heaviest_set.reps,
            record.heaviest_date,
            weight(record.best_estimated_one_rep_max, unit),
            weight(record.best_set_volume, unit)
        );
    }
}

/// Session-by-session history of one exercise
pub fn display_history(exercise: &str, sessions: &[ExerciseSession], unit: WeightUnit) {
    heading(&format!("{exercise} history"));
    if sessions.is_empty() {
        println!("   No sets logged for {exercise}.");
        return;
    }
    for session in sessions {
        println!(
            "   {}  top {:>12}  volume {:>12}  {} sets",
            session.date,
            weight(session.top_weight, unit).display(),
            weight(session.volume, unit).display(),
            session.sets
        );
    }
}

/// A template rendered as the form it pre-fills
pub fn display_form(form: &WorkoutForm) {
    heading(form.name.as_deref().unwrap_or("Template"));
    for exercise in &form.exercises {
        println!("   {}", exercise.name);
        for (index, set) in exercise.sets.iter().enumerate() {
            let load = if set.weight.is_empty() {
                "-"
            } else {
                set.weight.as_str()
            };
            println!(
                "      Set {}: weight {load}, reps {}, RIR {}",
                index + 1,
                set.reps,
                set.rir
            );
        }
    }
}

/// Goals plus this week's workout progress
pub fn display_goals(goals: &PersonalGoals, week: &WeeklyGoalProgress, unit: WeightUnit) {
    heading("Goals");
    let show = |w: Option<Weight>| w.map_or_else(|| "not set".to_owned(), |w| w.display());
    println!("   Target weight:   {}", show(goals.target_weight_in(unit)));
    println!(
        "   Current weight:  {}",
        show(goals.current_weight_in(unit))
    );
    if let Some(remaining) = goals.remaining_kg() {
        let remaining = Weight::kilograms(remaining).to(unit);
        println!("   Remaining:       {remaining}");
    }
    println!("   Daily calories:  {} kcal", goals.daily_calories);
    println!("   Weekly workouts: {}", goals.weekly_workouts);
    println!(
        "\n   This week ({} to {}): {}/{} workouts ({:.0}%){}",
        week.week_start,
        week.week_end,
        week.completed,
        week.target,
        week.percent(),
        if week.achieved() { " - goal met" } else { "" }
    );
}

/// Profile fields, or a hint when none is saved
pub fn display_profile(profile: Option<&ProfileData>) {
    heading("Profile");
    let Some(profile) = profile else {
        println!("   No profile saved. Use `logbook profile set --name <name>`.");
        return;
    };
    println!("   Name:  {}", profile.display_name);
    println!("   Email: {}", profile.email);
    println!("   Bio:   {}", profile.bio);
}

/// Device preferences
pub fn display_preferences(preferences: &Preferences) {
    heading("Preferences");
    println!("   Theme:       {}", preferences.theme.as_str());
    println!("   Weight unit: {}", preferences.weight_unit);
    println!(
        "   Guest mode:  {}",
        if preferences.guest_mode { "on" } else { "off" }
    );
}
