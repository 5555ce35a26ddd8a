// ABOUTME: Device-local display preferences stored alongside logbook data
// ABOUTME: Theme choice, display weight unit, and the guest-mode flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::units::WeightUnit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
    /// Follow the operating system
    System,
}

impl Theme {
    /// Lowercase name as stored
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" | "auto" => Ok(Self::System),
            other => Err(AppError::invalid_input(format!(
                "Unknown theme '{other}' (expected light, dark, or system)"
            ))),
        }
    }
}

/// All device-local preferences in one view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Color theme
    pub theme: Theme,
    /// Unit weights are displayed in
    pub weight_unit: WeightUnit,
    /// Whether data lives only on this device
    pub guest_mode: bool,
}
