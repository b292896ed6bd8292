// ABOUTME: Macro and calorie goal calculation engine for fitness applications
// ABOUTME: Pure BMR/TDEE/macro pipeline with serde models and config tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macro Goals Contributors

#![deny(unsafe_code)]

//! # Macro Goals
//!
//! Calculation engine turning a user profile (weight, height, age, gender,
//! activity, goal) into daily calorie and macronutrient targets:
//!
//! 1. BMR via Mifflin-St Jeor
//! 2. TDEE via activity multiplier
//! 3. Calorie target via goal offset and safety floor
//! 4. Protein from bodyweight with density caps and a floor
//! 5. Carbs and fat from the remaining calories via the goal's ratio set
//!
//! The pipeline is synchronous, side-effect-free and infallible: incomplete
//! profiles degrade to documented sentinels and fallbacks rather than
//! errors, so calling code always receives a usable goal record. Ambient
//! selections (protein preset, ratio override) are injected explicitly via
//! [`models::GoalPreferences`]; the engine never reads persisted state.
//!
//! ```
//! use macro_goals::calculator::calculate_macro_goals;
//! use macro_goals::config::NutritionConfig;
//! use macro_goals::models::{FitnessGoal, Gender, GoalPreferences, ProfileData};
//!
//! let profile = ProfileData {
//!     weight_kg: Some(80.0),
//!     height_cm: Some(180.0),
//!     age: Some(28),
//!     gender: Some(Gender::Male),
//!     fitness_goal: Some(FitnessGoal::Lose),
//!     ..ProfileData::default()
//! };
//!
//! let goals = calculate_macro_goals(
//!     &profile,
//!     &GoalPreferences::default(),
//!     &NutritionConfig::default(),
//! );
//! assert!(goals.calories >= 1500);
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod models;

pub use calculator::{
    calculate_bmr, calculate_daily_calories, calculate_macro_goals,
    calculate_macros_with_protein_limit, calculate_protein_for_preset, calculate_tdee,
    calculation_breakdown, resolve_activity_multiplier, resolve_macro_ratios,
};
pub use config::NutritionConfig;
pub use error::ConfigError;
pub use models::{
    ActivityLevel, CalculationBreakdown, ExerciseFrequency, FitnessGoal, Gender, GoalPreferences,
    MacroGoals, MacroRatios, MacroSplit, ProfileData, ProteinPreset,
};
