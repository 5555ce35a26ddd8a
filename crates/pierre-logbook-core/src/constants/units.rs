// ABOUTME: Unit conversion constants for body and training weights
// ABOUTME: Provides named constants to eliminate magic numbers in conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Kilograms per international avoirdupois pound (exact by definition)
pub const KG_PER_LB: f64 = 0.453_592_37;

/// Tolerance accepted for a canonical → display → canonical round trip
pub const ROUND_TRIP_TOLERANCE: f64 = 0.01;
