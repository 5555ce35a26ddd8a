// ABOUTME: Criterion benchmarks for the logbook statistics engine
// ABOUTME: Measures Year in Review, personal records, and template conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the logbook statistics engine.
//!
//! Data sets come from the seeded sample-data generator so runs are
//! comparable across machines.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pierre_logbook::intelligence::{exercise_history, personal_records, YearInReview};
use pierre_logbook::models::{MealRecord, ProgressRecord, WorkoutRecord};
use pierre_logbook::sample_data::{SampleData, SampleDataConfig};
use pierre_logbook::templates::catalog::builtin_templates;
use pierre_logbook::templates::to_workout_form;

/// Fixed seed so every run measures the same records
const BENCH_SEED: u64 = 42;

type Records = (Vec<WorkoutRecord>, Vec<MealRecord>, Vec<ProgressRecord>);

fn sample_records(days: u32) -> Records {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    let config = SampleDataConfig::new(start, days).with_seed(BENCH_SEED);
    SampleData::generate(&config).into_records()
}

/// Benchmark the Year in Review fold over growing logs
fn bench_year_in_review(c: &mut Criterion) {
    let mut group = c.benchmark_group("year_in_review");

    for days in [30_u32, 366, 1096] {
        let (workouts, meals, progress) = sample_records(days);
        group.throughput(Throughput::Elements(workouts.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("compute", days),
            &(workouts, meals, progress),
            |b, (workouts, meals, progress)| {
                b.iter(|| {
                    YearInReview::compute(
                        black_box(2024),
                        black_box(workouts),
                        black_box(meals),
                        black_box(progress),
                    )
                });
            },
        );
    }

    group.finish();
}

/// Benchmark per-exercise records and history
fn bench_personal_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("personal_records");
    let (workouts, _, _) = sample_records(366);

    group.bench_function("all_exercises", |b| {
        b.iter(|| personal_records(black_box(&workouts)));
    });
    group.bench_function("squat_history", |b| {
        b.iter(|| exercise_history(black_box(&workouts), black_box("Squat")));
    });

    group.finish();
}

/// Benchmark mapping every built-in template onto the logging form
fn bench_template_conversion(c: &mut Criterion) {
    let templates = builtin_templates();

    c.bench_function("to_workout_form_builtin", |b| {
        b.iter(|| {
            templates
                .iter()
                .map(|t| to_workout_form(black_box(t)))
                .count()
        });
    });
}

criterion_group!(
    benches,
    bench_year_in_review,
    bench_personal_records,
    bench_template_conversion,
);
criterion_main!(benches);
