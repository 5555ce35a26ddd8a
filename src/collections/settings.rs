// ABOUTME: Singleton accessors for the profile, personal goals, and device preferences
// ABOUTME: Preferences are stored as plain strings; profile and goals as JSON objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::storage::{LocalStore, StorageBackend};
use pierre_logbook_core::constants::storage_keys;
use pierre_logbook_core::errors::AppResult;
use pierre_logbook_core::models::{PersonalGoals, Preferences, ProfileData, Theme};
use pierre_logbook_core::units::WeightUnit;
use std::str::FromStr;
use tracing::warn;

/// Accessor for the install-wide singletons
pub struct Settings<'a, B: StorageBackend> {
    store: &'a LocalStore<B>,
    default_unit: WeightUnit,
}

impl<'a, B: StorageBackend> Settings<'a, B> {
    /// Borrow the singletons from `store`
    pub const fn new(store: &'a LocalStore<B>) -> Self {
        Self {
            store,
            default_unit: WeightUnit::CANONICAL,
        }
    }

    /// Unit reported by [`Self::weight_unit`] when none has been chosen
    #[must_use]
    pub const fn with_default_unit(mut self, unit: WeightUnit) -> Self {
        self.default_unit = unit;
        self
    }

    /// Stored profile, if one was saved
    #[must_use]
    pub fn profile(&self) -> Option<ProfileData> {
        self.store.read_value(storage_keys::PROFILE)
    }

    /// Replace the profile
    ///
    /// # Errors
    ///
    /// Returns a storage error if the write fails
    pub fn save_profile(&self, profile: &ProfileData) -> AppResult<()> {
        self.store.try_write_value(storage_keys::PROFILE, profile)
    }

    /// Stored goals, or the default targets
    #[must_use]
    pub fn goals(&self) -> PersonalGoals {
        self.store
            .read_value(storage_keys::GOALS)
            .unwrap_or_default()
    }

    /// Replace the goals
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for negative weights or a storage error if the
    /// write fails
    pub fn save_goals(&self, goals: &PersonalGoals) -> AppResult<()> {
        goals.validate()?;
        self.store.try_write_value(storage_keys::GOALS, goals)
    }

    /// Color theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.parsed(storage_keys::THEME).unwrap_or_default()
    }

    /// Store the color theme
    ///
    /// # Errors
    ///
    /// Returns a storage error if the write fails
    pub fn set_theme(&self, theme: Theme) -> AppResult<()> {
        self.store
            .try_write_raw(storage_keys::THEME, theme.as_str())
    }

    /// Display unit for weights
    #[must_use]
    pub fn weight_unit(&self) -> WeightUnit {
        self.parsed(storage_keys::WEIGHT_UNIT)
            .unwrap_or(self.default_unit)
    }

    /// Store the display unit
    ///
    /// # Errors
    ///
    /// Returns a storage error if the write fails
    pub fn set_weight_unit(&self, unit: WeightUnit) -> AppResult<()> {
        self.store
            .try_write_raw(storage_keys::WEIGHT_UNIT, unit.label())
    }

    /// Whether guest mode is on
    #[must_use]
    pub fn guest_mode(&self) -> bool {
        self.parsed(storage_keys::GUEST_MODE).unwrap_or(false)
    }

    /// Turn guest mode on or off
    ///
    /// # Errors
    ///
    /// Returns a storage error if the write fails
    pub fn set_guest_mode(&self, enabled: bool) -> AppResult<()> {
        let value = if enabled { "true" } else { "false" };
        self.store.try_write_raw(storage_keys::GUEST_MODE, value)
    }

    /// All preferences at once
    #[must_use]
    pub fn preferences(&self) -> Preferences {
        Preferences {
            theme: self.theme(),
            weight_unit: self.weight_unit(),
            guest_mode: self.guest_mode(),
        }
    }

    /// Store all preferences at once
    ///
    /// # Errors
    ///
    /// Returns a storage error if any write fails
    pub fn save_preferences(&self, preferences: Preferences) -> AppResult<()> {
        self.set_theme(preferences.theme)?;
        self.set_weight_unit(preferences.weight_unit)?;
        self.set_guest_mode(preferences.guest_mode)
    }

    fn parsed<T: FromStr>(&self, key: &str) -> Option<T> {
        let raw = self.store.read_raw(key)?;
        let value = raw.trim().trim_matches('"');
        value
            .parse()
            .map_err(|_| warn!(key, value, "Ignoring unrecognized preference value"))
            .ok()
    }
}
