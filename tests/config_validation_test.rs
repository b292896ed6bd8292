// ABOUTME: Configuration validation and serialization tests
// ABOUTME: Default values, validation failures and serde round-trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macro Goals Contributors
//! Configuration and model serialization tests
//!
//! Verifies that the default configuration carries the documented constants
//! and passes validation, that corrupted configurations fail with the right
//! error variant, and that value objects serialize with the wire-level field
//! names the surrounding application stores.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use macro_goals::config::NutritionConfig;
use macro_goals::error::ConfigError;
use macro_goals::models::{
    ActivityLevel, ExerciseFrequency, FitnessGoal, Gender, MacroGoals, MacroRatios, ProfileData,
    ProteinPreset,
};

// ============================================================================
// DEFAULT CONFIGURATION TESTS
// ============================================================================

#[test]
fn test_default_config_passes_validation() {
    let config = NutritionConfig::default();

    assert!(
        config.validate().is_ok(),
        "shipped defaults must validate cleanly"
    );
}

#[test]
fn test_default_config_carries_documented_constants() {
    let config = NutritionConfig::default();

    assert_eq!(config.bmr.weight_coef, 10.0);
    assert_eq!(config.bmr.height_coef, 6.25);
    assert_eq!(config.bmr.age_coef, -5.0);
    assert_eq!(config.bmr.male_constant, 5.0);
    assert_eq!(config.bmr.female_constant, -161.0);
    assert_eq!(config.bmr.other_constant, -78.0);

    assert_eq!(config.activity_factors.sedentary, 1.2);
    assert_eq!(config.activity_factors.very_active, 1.9);

    assert_eq!(config.calorie_goal.lose_offset, -500.0);
    assert_eq!(config.calorie_goal.gain_offset, 300.0);
    assert_eq!(config.calorie_goal.fallback_calories, 2000.0);
    assert_eq!(config.calorie_goal.female_floor, 1200.0);
    assert_eq!(config.calorie_goal.default_floor, 1500.0);

    assert_eq!(config.macronutrients.default_g_per_kg, 1.6);
    assert_eq!(config.macronutrients.max_density_g_per_kg, 2.5);
    assert_eq!(config.macronutrients.protein_cap_g, 220.0);
    assert_eq!(config.macronutrients.protein_floor_g, 50.0);
    assert_eq!(config.macronutrients.protein_fallback_g, 100.0);
    assert_eq!(config.macronutrients.default_weight_kg, 70.0);
}

#[test]
fn test_density_lookup_covers_all_presets() {
    let config = NutritionConfig::default();
    let cases = [
        (ProteinPreset::Cutting, 2.0),
        (ProteinPreset::Bulking, 1.8),
        (ProteinPreset::Recomposition, 2.2),
        (ProteinPreset::Keto, 1.6),
        (ProteinPreset::Endurance, 1.4),
        (ProteinPreset::Balanced, 1.6),
    ];

    for (preset, expected) in cases {
        assert_eq!(
            config.macronutrients.density_for(Some(preset)),
            expected,
            "density for {preset:?}"
        );
    }
    assert_eq!(config.macronutrients.density_for(None), 1.6);
}

// ============================================================================
// VALIDATION FAILURE TESTS
// ============================================================================

#[test]
fn test_negative_activity_factor_rejected() {
    let mut config = NutritionConfig::default();
    config.activity_factors.moderate = -1.55;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_ratio_set_not_summing_to_100_rejected() {
    let mut config = NutritionConfig::default();
    config.ratios.lose = MacroRatios::new(35.0, 35.0, 35.0);

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
}

#[test]
fn test_protein_cap_below_floor_rejected() {
    let mut config = NutritionConfig::default();
    config.macronutrients.protein_cap_g = 40.0;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_zero_fallback_calories_rejected() {
    let mut config = NutritionConfig::default();
    config.calorie_goal.fallback_calories = 0.0;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

// ============================================================================
// SERIALIZATION TESTS
// ============================================================================

#[test]
fn test_profile_deserializes_wire_level_enum_values() {
    let json = r#"{
        "weight_kg": 82.5,
        "height_cm": 179.0,
        "age": 33,
        "gender": "male",
        "activity_level": "very_active",
        "exercise_frequency": "6+",
        "fitness_goal": "lose"
    }"#;

    let profile: ProfileData = serde_json::from_str(json).unwrap();

    assert_eq!(profile.weight_kg, Some(82.5));
    assert_eq!(profile.gender, Some(Gender::Male));
    assert_eq!(profile.activity_level, Some(ActivityLevel::VeryActive));
    assert_eq!(
        profile.exercise_frequency,
        Some(ExerciseFrequency::SixPlus)
    );
    assert_eq!(profile.fitness_goal, Some(FitnessGoal::Lose));
}

#[test]
fn test_profile_omits_absent_fields_when_serialized() {
    let profile = ProfileData {
        weight_kg: Some(70.0),
        ..ProfileData::default()
    };

    let json = serde_json::to_value(&profile).unwrap();
    let object = json.as_object().unwrap();

    assert_eq!(object.len(), 1, "absent optional fields must be skipped");
    assert!(object.contains_key("weight_kg"));
}

#[test]
fn test_macro_goals_round_trip() {
    let goals = MacroGoals {
        calories: 2275,
        protein: 128,
        carbs: 237,
        fat: 90,
    };

    let json = serde_json::to_string(&goals).unwrap();
    let back: MacroGoals = serde_json::from_str(&json).unwrap();

    assert_eq!(goals, back);
}

#[test]
fn test_config_round_trips_through_json() {
    let config = NutritionConfig::default();

    let json = serde_json::to_string(&config).unwrap();
    let back: NutritionConfig = serde_json::from_str(&json).unwrap();

    assert!(back.validate().is_ok());
    assert_eq!(
        back.macronutrients.protein_cap_g,
        config.macronutrients.protein_cap_g
    );
}

// ============================================================================
// LENIENT PARSING TESTS
// ============================================================================

#[test]
fn test_lossy_parsers() {
    assert_eq!(Gender::from_str_lossy("FEMALE"), Gender::Female);
    assert_eq!(Gender::from_str_lossy("nonbinary"), Gender::Other);

    assert_eq!(FitnessGoal::from_str_lossy("gain"), FitnessGoal::Gain);
    assert_eq!(FitnessGoal::from_str_lossy("bulk"), FitnessGoal::Maintain);

    assert_eq!(ProteinPreset::from_id("Keto"), Some(ProteinPreset::Keto));
    assert_eq!(ProteinPreset::from_id("paleo"), None);

    assert_eq!(
        ExerciseFrequency::from_bucket("3-5"),
        Some(ExerciseFrequency::ThreeToFive)
    );
    assert_eq!(ExerciseFrequency::from_bucket("7+"), None);
    assert_eq!(
        ExerciseFrequency::from_bucket("2-3").map(ExerciseFrequency::activity_level),
        Some(ActivityLevel::Light)
    );
}
