// ABOUTME: Core types and constants for the NutriGuide health and nutrition engine
// ABOUTME: Foundation crate with error handling, score constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

#![deny(unsafe_code)]

//! # `NutriGuide` Core
//!
//! Foundation crate providing shared types and constants for the `NutriGuide`
//! engine. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Score bands, nutrient names, and engine-wide limits
//! - **models**: Health snapshots, food items, user preferences, and user states

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Core data models (`HealthSnapshot`, `FoodItem`, `UserPreferences`, `UserState`)
pub mod models;
