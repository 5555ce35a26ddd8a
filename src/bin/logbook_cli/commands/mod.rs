// ABOUTME: Command modules for the logbook CLI and the context they share
// ABOUTME: Context carries the store, acting user, display unit, and today's date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod data;
pub mod meal;
pub mod progress;
pub mod review;
pub mod settings;
pub mod template;
pub mod workout;

use chrono::NaiveDate;
use pierre_logbook::collections::Settings;
use pierre_logbook::storage::{Backend, LocalStore};
use pierre_logbook::units::{Weight, WeightUnit};

/// Everything a command needs besides its own arguments
pub struct Context<'a> {
    /// Configured store
    pub store: &'a LocalStore,
    /// Owner id stamped on new records
    pub user_id: String,
    /// Unit weights are entered and shown in
    pub unit: WeightUnit,
    /// Unit used when no preference is saved
    pub default_unit: WeightUnit,
    /// Today's local date
    pub today: NaiveDate,
}

impl<'a> Context<'a> {
    /// Settings accessor honouring the configured default unit
    pub const fn settings(&self) -> Settings<'a, Backend> {
        self.store.settings().with_default_unit(self.default_unit)
    }

    /// `date` or today
    pub fn day(&self, date: Option<NaiveDate>) -> NaiveDate {
        date.unwrap_or(self.today)
    }

    /// A value typed in the display unit, converted to kilograms for storage
    pub fn to_kilograms(&self, value: f64) -> f64 {
        Weight::new(value, self.unit).canonical().value
    }

    /// A stored kilogram value expressed in the display unit
    pub fn shown(&self, kilograms: f64) -> Weight {
        Weight::kilograms(kilograms).to(self.unit)
    }
}
