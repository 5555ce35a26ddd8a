// ABOUTME: Typed weight quantities with a single conversion function between units
// ABOUTME: Canonical storage unit is kilograms; display units are converted at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::KG_PER_LB;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit a weight value is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms, the canonical storage unit
    #[default]
    #[serde(alias = "kg")]
    Kilograms,
    /// Pounds
    #[serde(alias = "lbs", alias = "lb")]
    Pounds,
}

impl WeightUnit {
    /// The unit goal weights are persisted in
    pub const CANONICAL: Self = Self::Kilograms;

    /// Short label used in displays ("kg" / "lbs")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kilograms => "kg",
            Self::Pounds => "lbs",
        }
    }

    /// Kilograms represented by one of this unit
    const fn kilograms_per_unit(self) -> f64 {
        match self {
            Self::Kilograms => 1.0,
            Self::Pounds => KG_PER_LB,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilograms" | "metric" => Ok(Self::Kilograms),
            "lb" | "lbs" | "pounds" | "imperial" => Ok(Self::Pounds),
            other => Err(AppError::invalid_input(format!(
                "Unknown weight unit '{other}' (expected kg or lbs)"
            ))),
        }
    }
}

/// Convert a bare value between units
///
/// Every unit conversion in the workspace goes through this function.
#[must_use]
pub fn convert(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.kilograms_per_unit() / to.kilograms_per_unit()
}

/// A weight value tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    /// Magnitude in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: WeightUnit,
}

impl Weight {
    /// Create a weight in the given unit
    #[must_use]
    pub const fn new(value: f64, unit: WeightUnit) -> Self {
        Self { value, unit }
    }

    /// Create a weight in kilograms
    #[must_use]
    pub const fn kilograms(value: f64) -> Self {
        Self::new(value, WeightUnit::Kilograms)
    }

    /// Create a weight in pounds
    #[must_use]
    pub const fn pounds(value: f64) -> Self {
        Self::new(value, WeightUnit::Pounds)
    }

    /// Express this weight in another unit
    #[must_use]
    pub fn to(self, unit: WeightUnit) -> Self {
        Self::new(convert(self.value, self.unit, unit), unit)
    }

    /// Express this weight in the canonical storage unit
    #[must_use]
    pub fn canonical(self) -> Self {
        self.to(WeightUnit::CANONICAL)
    }

    /// Display string rounded to one decimal, e.g. `"72.5 kg"`
    #[must_use]
    pub fn display(self) -> String {
        format!("{:.1} {}", self.value, self.unit)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::units::ROUND_TRIP_TOLERANCE;

    #[test]
    fn test_one_pound_in_kilograms() {
        let kg = Weight::pounds(1.0).canonical();
        assert!((kg.value - 0.453_592_37).abs() < 1e-12);
        assert_eq!(kg.unit, WeightUnit::Kilograms);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        for value in [0.0, 2.5, 61.3, 100.0, 227.75] {
            let back = Weight::kilograms(value)
                .to(WeightUnit::Pounds)
                .to(WeightUnit::Kilograms);
            assert!((back.value - value).abs() <= ROUND_TRIP_TOLERANCE);
        }
    }

    #[test]
    fn test_parse_unit_aliases() {
        assert_eq!("LBS".parse::<WeightUnit>().unwrap(), WeightUnit::Pounds);
        assert_eq!(" kg ".parse::<WeightUnit>().unwrap(), WeightUnit::Kilograms);
        assert!("stone".parse::<WeightUnit>().is_err());
    }

    #[test]
    fn test_display_rounds_to_one_decimal() {
        assert_eq!(Weight::kilograms(72.46).display(), "72.5 kg");
        assert_eq!(Weight::pounds(135.0).to_string(), "135.0 lbs");
    }
}
