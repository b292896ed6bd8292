// ABOUTME: Macro goal calculation pipeline from profile to daily targets
// ABOUTME: BMR, TDEE, calorie goal, ratio resolution and protein-capped split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macro Goals Contributors

//! Goal Calculation Pipeline
//!
//! Pure functions computing daily calorie and macro targets from a profile
//! record: profile -> BMR -> TDEE -> calorie goal -> protein (bodyweight) ->
//! carbs/fat (remaining-calorie split).
//!
//! Every function in this module is infallible. Missing or malformed input
//! degrades to documented sentinels and fallbacks (0 BMR, 2000 kcal, 100 g
//! protein) so callers always receive a usable result. Rounding is
//! `f64::round` (round-half-away-from-zero) throughout.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use crate::config::{
    ActivityFactorsConfig, BmrConfig, MacroRatiosConfig, MacronutrientConfig, NutritionConfig,
};
use crate::models::{
    ActivityLevel, CalculationBreakdown, ExerciseFrequency, FitnessGoal, GoalPreferences,
    MacroGoals, MacroRatios, MacroSplit, ProfileData, ProteinPreset,
};
use tracing::debug;

/// Calories per gram of protein and carbohydrate
const KCAL_PER_G_PROTEIN_CARBS: f64 = 4.0;
/// Calories per gram of fat
const KCAL_PER_G_FAT: f64 = 9.0;

// Treats NaN, zero and negative values as absent (source-form falsiness).
fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = 10 x weight + 6.25 x height - 5 x age + gender constant
/// (male +5, female -161, other -78).
///
/// Returns 0 when any of weight, height, age or gender is missing or
/// non-positive: the sentinel means "insufficient data", and downstream
/// stages substitute their own fallbacks instead of failing.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(profile: &ProfileData, config: &BmrConfig) -> u32 {
    let (Some(weight), Some(height), Some(age), Some(gender)) = (
        positive(profile.weight_kg),
        positive(profile.height_cm),
        profile.age.filter(|a| *a > 0),
        profile.gender,
    ) else {
        return 0;
    };

    let bmr = config.weight_coef * weight
        + config.height_coef * height
        + config.age_coef * f64::from(age)
        + config.constant_for(gender);

    bmr.round().max(0.0) as u32
}

/// Resolve the activity multiplier for TDEE calculation
///
/// An explicit activity level takes priority; otherwise the exercise
/// frequency bucket is mapped to a level (0-1 sedentary, 0-2/2-3 light,
/// 3-5 moderate, 4-5 active, 6+ very active). With neither present the
/// moderate multiplier (1.55) applies. Never fails.
#[must_use]
pub fn resolve_activity_multiplier(profile: &ProfileData, config: &ActivityFactorsConfig) -> f64 {
    let level = profile
        .activity_level
        .or_else(|| {
            profile
                .exercise_frequency
                .map(ExerciseFrequency::activity_level)
        })
        .unwrap_or(ActivityLevel::Moderate);

    match level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = round(BMR x activity multiplier).
///
/// Propagates the BMR insufficient-data sentinel: a BMR of 0 yields a TDEE
/// of 0 without applying the multiplier.
#[must_use]
pub fn calculate_tdee(profile: &ProfileData, config: &NutritionConfig) -> u32 {
    let bmr = calculate_bmr(profile, &config.bmr);
    if bmr == 0 {
        return 0;
    }
    let multiplier = resolve_activity_multiplier(profile, &config.activity_factors);
    (f64::from(bmr) * multiplier).round() as u32
}

/// Calculate the daily calorie target
///
/// TDEE adjusted by the goal offset (lose -500, maintain 0, gain +300),
/// clamped to the gender-based safety floor (female 1200, otherwise 1500).
///
/// A TDEE of 0 (incomplete profile) returns the fixed 2000 kcal fallback
/// directly, bypassing offset and floor. Documented behavior, not an error.
#[must_use]
pub fn calculate_daily_calories(profile: &ProfileData, config: &NutritionConfig) -> u32 {
    let tdee = calculate_tdee(profile, config);
    if tdee == 0 {
        return config.calorie_goal.fallback_calories.round() as u32;
    }

    let offset = config.calorie_goal.offset_for(profile.goal());
    let floor = config.calorie_goal.floor_for(profile.gender);

    (f64::from(tdee) + offset).max(floor).round() as u32
}

/// Resolve the macro ratio set for a fitness goal
///
/// A caller-supplied override is used verbatim when all three percentages
/// are finite and their sum is within the configured tolerance (1 point) of
/// 100; a corrupt override is silently ignored in favor of the goal default
/// (gain 25/50/25, lose 35/35/30, maintain 30/40/30).
///
/// The protein percentage of the resolved set is display-advisory only:
/// protein grams come from bodyweight (see
/// [`calculate_macros_with_protein_limit`]), and only the carbs:fat
/// proportion of this set feeds the gram split. Intentional divergence,
/// preserved from the product's goal model.
#[must_use]
pub fn resolve_macro_ratios(
    goal: FitnessGoal,
    override_ratios: Option<&MacroRatios>,
    config: &MacroRatiosConfig,
) -> MacroRatios {
    if let Some(ratios) = override_ratios {
        if ratios.is_numeric() && (ratios.sum() - 100.0).abs() <= config.override_sum_tolerance {
            return *ratios;
        }
        debug!(
            sum = ratios.sum(),
            "ignoring invalid ratio override, using goal default"
        );
    }
    config.defaults_for(goal)
}

/// Calculate the daily protein target for a bodyweight and preset
///
/// Formula: protein = round(weight x preset density), then the lower of
/// three ceilings (preset density, 2.5 g/kg max density, 220 g absolute)
/// and a 50 g floor. Unknown preset identifiers use the 1.6 g/kg default
/// density.
///
/// A missing or non-positive weight short-circuits to the fixed 100 g
/// fallback, bypassing the cap and floor math entirely.
#[must_use]
pub fn calculate_protein_for_preset(
    weight_kg: f64,
    preset_id: Option<&str>,
    config: &MacronutrientConfig,
) -> u32 {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return config.protein_fallback_g.round() as u32;
    }

    let density = config.density_for(preset_id.and_then(ProteinPreset::from_id));
    let raw = (weight_kg * density).round();
    let density_ceiling = (weight_kg * config.max_density_g_per_kg).round();

    let capped = raw.min(density_ceiling).min(config.protein_cap_g);
    capped.max(config.protein_floor_g) as u32
}

/// Split a calorie budget into protein, carb and fat gram targets
///
/// Protein comes from bodyweight via [`calculate_protein_for_preset`]. The
/// calories remaining after protein (4 kcal/g) are distributed between carbs
/// and fat using the ratio set's carbs:fat relative proportion (a zero
/// denominator splits 50/50), at 4 kcal/g for carbs and 9 kcal/g for fat.
///
/// Carbs and fat are floored at 20 g each. The floors can push total macro
/// calories above the input budget when calories are very low relative to
/// protein need; that overshoot is accepted behavior and is not
/// redistributed.
#[must_use]
pub fn calculate_macros_with_protein_limit(
    calories: u32,
    weight_kg: f64,
    preset_id: Option<&str>,
    ratios: &MacroRatios,
    config: &MacronutrientConfig,
) -> MacroSplit {
    let protein = calculate_protein_for_preset(weight_kg, preset_id, config);
    let protein_calories = f64::from(protein) * KCAL_PER_G_PROTEIN_CARBS;

    // May go negative when the budget is below protein need; the gram floors
    // below absorb that case.
    let remaining_calories = f64::from(calories) - protein_calories;

    let denominator = ratios.carbs + ratios.fat;
    let (carb_share, fat_share) = if denominator > 0.0 {
        (ratios.carbs / denominator, ratios.fat / denominator)
    } else {
        (0.5, 0.5)
    };

    let carb_calories = (remaining_calories * carb_share).round();
    let fat_calories = (remaining_calories * fat_share).round();

    let carbs = (carb_calories / KCAL_PER_G_PROTEIN_CARBS)
        .round()
        .max(config.carbs_floor_g) as u32;
    let fat = (fat_calories / KCAL_PER_G_FAT)
        .round()
        .max(config.fat_floor_g) as u32;

    MacroSplit {
        protein,
        carbs,
        fat,
    }
}

/// Calculate the complete daily goal record for a profile
///
/// Orchestrates the pipeline: calorie target, ratio resolution for the
/// profile's goal, then the protein-capped split using the profile's weight
/// (70 kg assumed when absent) and the injected preferences. Pure: identical
/// inputs always produce identical output.
#[must_use]
pub fn calculate_macro_goals(
    profile: &ProfileData,
    preferences: &GoalPreferences,
    config: &NutritionConfig,
) -> MacroGoals {
    let calories = calculate_daily_calories(profile, config);
    let ratios = resolve_macro_ratios(
        profile.goal(),
        preferences.ratio_override.as_ref(),
        &config.ratios,
    );
    let weight_kg = effective_weight(profile, &config.macronutrients);

    let split = calculate_macros_with_protein_limit(
        calories,
        weight_kg,
        preferences.preset_id.as_deref(),
        &ratios,
        &config.macronutrients,
    );

    debug!(
        calories,
        protein = split.protein,
        carbs = split.carbs,
        fat = split.fat,
        "computed daily macro goals"
    );

    MacroGoals {
        calories,
        protein: split.protein,
        carbs: split.carbs,
        fat: split.fat,
    }
}

/// Expose the intermediate values behind a goal calculation
///
/// Recomputes along the same path as [`calculate_macro_goals`] on every
/// call; nothing is cached, so the breakdown always matches the goals for
/// the same inputs.
#[must_use]
pub fn calculation_breakdown(
    profile: &ProfileData,
    preferences: &GoalPreferences,
    config: &NutritionConfig,
) -> CalculationBreakdown {
    let protein_per_kg = config.macronutrients.density_for(
        preferences
            .preset_id
            .as_deref()
            .and_then(ProteinPreset::from_id),
    );

    CalculationBreakdown {
        bmr: calculate_bmr(profile, &config.bmr),
        tdee: calculate_tdee(profile, config),
        calories: calculate_daily_calories(profile, config),
        activity_multiplier: resolve_activity_multiplier(profile, &config.activity_factors),
        calorie_adjustment: config.calorie_goal.offset_for(profile.goal()) as i32,
        protein_per_kg,
        weight_kg: effective_weight(profile, &config.macronutrients),
    }
}

// Profile weight with the configured default applied when absent.
fn effective_weight(profile: &ProfileData, config: &MacronutrientConfig) -> f64 {
    positive(profile.weight_kg).unwrap_or(config.default_weight_kg)
}
