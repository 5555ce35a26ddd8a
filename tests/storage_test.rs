// ABOUTME: Integration tests for the local persistence adapter and its backends
// ABOUTME: Covers defaults on missing data, quota failures, file persistence, and snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use pierre_logbook::constants::storage_keys;
use pierre_logbook::errors::ErrorCode;
use pierre_logbook::models::{MealRecord, MealType, NewMeal, PersonalGoals, ProfileData, Theme};
use pierre_logbook::storage::file::FileBackend;
use pierre_logbook::storage::memory::MemoryBackend;
use pierre_logbook::storage::{Backend, BackendKind, LocalStore, StorageBackend, StorageConfig};
use serde_json::{json, Value};

#[test]
fn test_missing_keys_read_as_defaults() {
    let store = common::memory_store();

    let workouts: Vec<Value> = store.read_collection(storage_keys::WORKOUTS);
    assert!(workouts.is_empty());
    assert!(store.read_value::<PersonalGoals>(storage_keys::GOALS).is_none());
    assert_eq!(store.settings().goals(), PersonalGoals::default());
}

#[test]
fn test_write_then_read_collection() {
    let store = common::memory_store();
    let records = vec![json!({"id": "a"}), json!({"id": "b"})];

    assert!(store.write_collection("scratch", &records));
    let back: Vec<Value> = store.read_collection("scratch");
    assert_eq!(back, records);
}

#[test]
fn test_quota_exceeded_write_returns_false_and_keeps_old_value() {
    common::init_test_logging();
    let store = LocalStore::new(MemoryBackend::with_quota(Some(64)));
    assert!(store.write_collection("small", &[1, 2, 3]));

    let big: Vec<String> = (0..50).map(|i| format!("entry-{i}")).collect();
    assert!(!store.write_collection("small", &big));

    let kept: Vec<u32> = store.read_collection("small");
    assert_eq!(kept, vec![1, 2, 3]);
}

#[test]
fn test_accessor_surfaces_quota_error() {
    common::init_test_logging();
    let store = LocalStore::new(MemoryBackend::with_quota(Some(32)));
    let meal = NewMeal::new(
        common::date("2025-01-01"),
        MealType::Lunch,
        "A very long description of a large lunch",
        900.0,
    );

    let err = store.meals().save(meal).unwrap_err();
    assert_eq!(err.code, ErrorCode::QuotaExceeded);
    assert_eq!(store.meals().count(), 0);
}

#[test]
fn test_clear_all_only_removes_logbook_keys() {
    let backend = MemoryBackend::new();
    let store = LocalStore::new(backend.clone());
    store.settings().set_theme(Theme::Dark).unwrap();
    store
        .workouts()
        .save(common::workout_draft("2025-02-01", "Squat", &[(100.0, 5)]))
        .unwrap();
    backend.set_item("unrelated", "keep me").unwrap();

    assert!(store.clear_all());
    assert!(store.workouts().get_all().is_empty());
    assert_eq!(store.settings().theme(), Theme::Light);
    assert_eq!(
        backend.get_item("unrelated").unwrap().as_deref(),
        Some("keep me")
    );
}

#[test]
fn test_remove_absent_key_succeeds() {
    let store = common::memory_store();
    assert!(store.remove(storage_keys::PROFILE));
    assert!(store.remove(storage_keys::PROFILE));
}

#[test]
fn test_file_backend_persists_across_reopen() -> Result<()> {
    common::init_test_logging();
    let dir = tempfile::tempdir()?;

    let id = {
        let store = LocalStore::new(FileBackend::open(dir.path())?);
        let draft = common::workout_draft("2025-03-03", "Deadlift", &[(140.0, 5)]);
        store.workouts().save(draft)?
    };

    let reopened = LocalStore::new(FileBackend::open(dir.path())?);
    let workout = reopened.workouts().find(&id).expect("workout persisted");
    assert_eq!(workout.exercises[0].name, "Deadlift");
    assert!(dir.path().join("workouts.json").is_file());
    Ok(())
}

#[test]
fn test_file_backend_rejects_path_like_keys() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let backend = FileBackend::open(dir.path())?;

    assert!(backend.set_item("../escape", "x").is_err());
    assert!(backend.set_item(".hidden", "x").is_err());
    assert!(backend.set_item("ok_key-1", "x").is_ok());
    assert_eq!(backend.keys()?, vec!["ok_key-1".to_owned()]);
    Ok(())
}

#[test]
fn test_factory_builds_configured_backend() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = StorageConfig {
        backend: BackendKind::File,
        data_dir: dir.path().join("nested"),
        key_prefix: Some("demo_".to_owned()),
        ..StorageConfig::default()
    };

    let store = LocalStore::from_config(&config)?;
    assert_eq!(store.backend().kind(), BackendKind::File);
    assert!(matches!(store.backend(), Backend::File(_)));
    assert!(store.write_value(storage_keys::GOALS, &PersonalGoals::default()));
    assert!(dir.path().join("nested").join("demo_goals.json").is_file());

    let memory = LocalStore::from_config(&StorageConfig::default())?;
    assert_eq!(memory.backend().kind(), BackendKind::Memory);
    Ok(())
}

#[test]
fn test_snapshot_round_trip_between_backends() -> Result<()> {
    let source = common::memory_store();
    let draft = common::workout_draft("2025-04-01", "Bench Press", &[(80.0, 8)]);
    source.workouts().save(draft)?;
    source.meals().save(NewMeal::new(
        common::date("2025-04-01"),
        MealType::Dinner,
        "Salmon",
        700.0,
    ))?;
    source.settings().set_theme(Theme::Dark)?;

    let snapshot = source.export_snapshot();
    assert_eq!(snapshot.record_count(), 2);
    let json = serde_json::to_string(&snapshot)?;

    let dir = tempfile::tempdir()?;
    let target = LocalStore::new(FileBackend::open(dir.path())?);
    target
        .workouts()
        .save(common::workout_draft("2020-01-01", "Old", &[(1.0, 1)]))?;
    target.import_snapshot(&serde_json::from_str(&json)?)?;

    assert_eq!(target.workouts().get_all(), source.workouts().get_all());
    assert_eq!(target.meals().get_all(), source.meals().get_all());
    assert_eq!(target.settings().theme(), Theme::Dark);
    Ok(())
}

#[test]
fn test_import_with_duplicate_ids_leaves_store_untouched() -> Result<()> {
    let store = common::memory_store();
    store
        .workouts()
        .save(common::workout_draft("2025-05-05", "Squat", &[(100.0, 5)]))?;

    let mut snapshot = store.export_snapshot();
    let duplicate = snapshot.workouts[0].clone();
    snapshot.workouts.push(duplicate);

    let err = store.import_snapshot(&snapshot).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(store.workouts().count(), 1);
    let details = err.context.details.expect("duplicate details");
    assert_eq!(details["occurrences"], 2);
    assert_eq!(details["records"], 2);
    Ok(())
}

#[test]
fn test_import_with_invalid_goals_leaves_store_untouched() -> Result<()> {
    let store = common::memory_store();
    store
        .workouts()
        .save(common::workout_draft("2025-05-05", "Squat", &[(100.0, 5)]))?;
    store.settings().save_profile(&ProfileData {
        display_name: "Sam".to_owned(),
        ..ProfileData::default()
    })?;

    let mut snapshot = store.export_snapshot();
    snapshot.workouts.clear();
    snapshot.goals = Some(PersonalGoals {
        target_weight: Some(-5.0),
        ..PersonalGoals::default()
    });

    let err = store.import_snapshot(&snapshot).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("target_weight"), "{}", err.message);
    assert_eq!(store.workouts().count(), 1);
    assert!(store.settings().profile().is_some());
    Ok(())
}

#[test]
fn test_import_failing_mid_write_restores_previous_data() -> Result<()> {
    common::init_test_logging();
    let backend = MemoryBackend::with_quota(Some(2048));
    let store = LocalStore::new(backend.clone());
    store
        .workouts()
        .save(common::workout_draft("2025-05-05", "Squat", &[(100.0, 5)]))?;
    store.settings().set_theme(Theme::Dark)?;
    let before = store.export_snapshot();

    let mut snapshot = before.clone();
    snapshot.meals = (0..40)
        .map(|i| {
            let draft = NewMeal::new(
                common::date("2025-05-06"),
                MealType::Snack,
                format!("snack number {i} with a long description"),
                150.0,
            );
            MealRecord::from_draft(format!("meal-{i}"), draft)
        })
        .collect();

    let err = store.import_snapshot(&snapshot).unwrap_err();
    assert_eq!(err.code, ErrorCode::QuotaExceeded);
    assert_eq!(store.workouts().get_all(), before.workouts);
    assert_eq!(store.meals().count(), 0);
    assert_eq!(store.settings().theme(), Theme::Dark);
    assert!(backend.used_bytes() <= 2048);
    Ok(())
}
