// ABOUTME: Core types and constants for the Pierre guest-mode training logbook
// ABOUTME: Foundation crate with error handling, record models, weight units, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Logbook Core
//!
//! Foundation crate providing shared types for the Pierre logbook. This crate is
//! designed to change infrequently, enabling incremental compilation benefits in
//! the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Storage keys, defaults, and achievement thresholds
//! - **models**: Workout, meal, progress, profile, and goal records
//! - **units**: Typed weight quantities with a single conversion function

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Record types persisted by the logbook store
pub mod models;

/// Weight units and conversions between them
pub mod units;

pub use errors::{AppError, AppResult, ErrorCode};
pub use units::{Weight, WeightUnit};
