// ABOUTME: Formula coefficients, activity factors, protein densities and floors
// ABOUTME: Serde config structs with documented defaults and load-time validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macro Goals Contributors

//! Goal Calculation Configuration
//!
//! Every numeric constant of the calculation pipeline lives here: BMR formula
//! coefficients, TDEE activity factors, calorie offsets and floors, protein
//! preset densities and macro floors. Defaults carry the documented values;
//! applications may deserialize overrides and should call
//! [`NutritionConfig::validate`] once after loading.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle` et al. (2010) - Exercise Physiology
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use crate::error::ConfigError;
use crate::models::{FitnessGoal, Gender, MacroRatios, ProteinPreset};
use serde::{Deserialize, Serialize};

// NaN-rejecting positivity check used by the validators.
fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// Aggregate configuration for the goal calculation pipeline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie goal offsets, fallback and safety floors
    pub calorie_goal: CalorieGoalConfig,
    /// Protein densities, caps and macro gram floors
    pub macronutrients: MacronutrientConfig,
    /// Default macro ratio sets per fitness goal
    pub ratios: MacroRatiosConfig,
}

impl NutritionConfig {
    /// Validate every configuration section
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found in any section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.activity_factors.validate()?;
        self.calorie_goal.validate()?;
        self.macronutrients.validate()?;
        self.ratios.validate()?;
        Ok(())
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure. American Journal of Clinical Nutrition, 51(2),
/// 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub female_constant: f64,
    /// Constant for other/unspecified gender (-78, mean of male and female)
    pub other_constant: f64,
}

impl BmrConfig {
    /// Gender constant for the Mifflin-St Jeor formula
    #[must_use]
    pub const fn constant_for(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male_constant,
            Gender::Female => self.female_constant,
            Gender::Other => self.other_constant,
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            male_constant: 5.0,
            female_constant: -161.0,
            other_constant: -78.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise
/// Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light exercise (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate exercise (3-5 days/week): 1.55
    pub moderate: f64,
    /// Hard exercise (4-5 days/week): 1.725
    pub active: f64,
    /// Very hard exercise or physical job: 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Validate that all factors are positive
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if any factor is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            self.sedentary,
            self.light,
            self.moderate,
            self.active,
            self.very_active,
        ];
        if !factors.iter().copied().all(is_positive) {
            return Err(ConfigError::InvalidRange(
                "activity factors must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

/// Calorie goal configuration: goal offsets, incomplete-profile fallback and
/// gender-based safety floors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieGoalConfig {
    /// Offset for weight loss (kcal/day): -500
    pub lose_offset: f64,
    /// Offset for maintenance (kcal/day): 0
    pub maintain_offset: f64,
    /// Offset for weight gain (kcal/day): +300
    pub gain_offset: f64,
    /// Fixed daily calories when the profile is too incomplete for TDEE: 2000
    pub fallback_calories: f64,
    /// Minimum daily calories for female profiles: 1200
    pub female_floor: f64,
    /// Minimum daily calories otherwise: 1500
    pub default_floor: f64,
}

impl CalorieGoalConfig {
    /// Calorie offset for a fitness goal
    #[must_use]
    pub const fn offset_for(&self, goal: FitnessGoal) -> f64 {
        match goal {
            FitnessGoal::Lose => self.lose_offset,
            FitnessGoal::Maintain => self.maintain_offset,
            FitnessGoal::Gain => self.gain_offset,
        }
    }

    /// Safety floor for a (possibly absent) gender
    #[must_use]
    pub const fn floor_for(&self, gender: Option<Gender>) -> f64 {
        match gender {
            Some(Gender::Female) => self.female_floor,
            _ => self.default_floor,
        }
    }

    /// Validate floors and fallback
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the fallback or a floor is
    /// not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.fallback_calories) {
            return Err(ConfigError::ValueOutOfRange(
                "fallback calories must be positive",
            ));
        }
        if !is_positive(self.female_floor) || !is_positive(self.default_floor) {
            return Err(ConfigError::ValueOutOfRange(
                "calorie floors must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for CalorieGoalConfig {
    fn default() -> Self {
        Self {
            lose_offset: -500.0,
            maintain_offset: 0.0,
            gain_offset: 300.0,
            fallback_calories: 2000.0,
            female_floor: 1200.0,
            default_floor: 1500.0,
        }
    }
}

/// Macronutrient configuration: protein densities per preset, protein caps
/// and floors, carb/fat gram floors
///
/// Reference: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Cutting preset protein density (g/kg): 2.0
    pub cutting_g_per_kg: f64,
    /// Bulking preset protein density (g/kg): 1.8
    pub bulking_g_per_kg: f64,
    /// Recomposition preset protein density (g/kg): 2.2
    pub recomposition_g_per_kg: f64,
    /// Keto preset protein density (g/kg): 1.6
    pub keto_g_per_kg: f64,
    /// Endurance preset protein density (g/kg): 1.4
    pub endurance_g_per_kg: f64,
    /// Balanced preset protein density (g/kg): 1.6
    pub balanced_g_per_kg: f64,
    /// Density when no preset (or an unknown preset id) is selected: 1.6
    pub default_g_per_kg: f64,
    /// Absolute max protein density ceiling (g/kg): 2.5
    pub max_density_g_per_kg: f64,
    /// Absolute protein gram ceiling (g/day): 220
    pub protein_cap_g: f64,
    /// Protein gram floor (g/day): 50
    pub protein_floor_g: f64,
    /// Fixed protein when bodyweight is missing or non-positive (g/day): 100
    pub protein_fallback_g: f64,
    /// Carbohydrate gram floor (g/day): 20
    pub carbs_floor_g: f64,
    /// Fat gram floor (g/day): 20
    pub fat_floor_g: f64,
    /// Bodyweight assumed when the profile has none (kg): 70
    pub default_weight_kg: f64,
}

impl MacronutrientConfig {
    /// Protein density for a (possibly absent) preset
    #[must_use]
    pub const fn density_for(&self, preset: Option<ProteinPreset>) -> f64 {
        match preset {
            Some(ProteinPreset::Cutting) => self.cutting_g_per_kg,
            Some(ProteinPreset::Bulking) => self.bulking_g_per_kg,
            Some(ProteinPreset::Recomposition) => self.recomposition_g_per_kg,
            Some(ProteinPreset::Keto) => self.keto_g_per_kg,
            Some(ProteinPreset::Endurance) => self.endurance_g_per_kg,
            Some(ProteinPreset::Balanced) => self.balanced_g_per_kg,
            None => self.default_g_per_kg,
        }
    }

    /// Validate densities, caps and floors
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` for non-positive densities or
    /// floors, or a protein cap at or below the protein floor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let densities = [
            self.cutting_g_per_kg,
            self.bulking_g_per_kg,
            self.recomposition_g_per_kg,
            self.keto_g_per_kg,
            self.endurance_g_per_kg,
            self.balanced_g_per_kg,
            self.default_g_per_kg,
            self.max_density_g_per_kg,
        ];
        if !densities.iter().copied().all(is_positive) {
            return Err(ConfigError::InvalidRange(
                "protein densities must be positive",
            ));
        }
        if !is_positive(self.protein_floor_g)
            || !is_positive(self.carbs_floor_g)
            || !is_positive(self.fat_floor_g)
        {
            return Err(ConfigError::InvalidRange("gram floors must be positive"));
        }
        if self.protein_cap_g <= self.protein_floor_g {
            return Err(ConfigError::InvalidRange(
                "protein cap must exceed protein floor",
            ));
        }
        if !is_positive(self.default_weight_kg) {
            return Err(ConfigError::InvalidRange(
                "default bodyweight must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            cutting_g_per_kg: 2.0,
            bulking_g_per_kg: 1.8,
            recomposition_g_per_kg: 2.2,
            keto_g_per_kg: 1.6,
            endurance_g_per_kg: 1.4,
            balanced_g_per_kg: 1.6,
            default_g_per_kg: 1.6,
            max_density_g_per_kg: 2.5,
            protein_cap_g: 220.0,
            protein_floor_g: 50.0,
            protein_fallback_g: 100.0,
            carbs_floor_g: 20.0,
            fat_floor_g: 20.0,
            default_weight_kg: 70.0,
        }
    }
}

/// Default macro ratio sets per fitness goal, and the tolerance applied when
/// accepting a user ratio override
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroRatiosConfig {
    /// Gain default: 25% protein / 50% carbs / 25% fat
    pub gain: MacroRatios,
    /// Lose default: 35% protein / 35% carbs / 30% fat
    pub lose: MacroRatios,
    /// Maintain default: 30% protein / 40% carbs / 30% fat
    pub maintain: MacroRatios,
    /// Max distance of an override's percentage sum from 100: 1.0
    pub override_sum_tolerance: f64,
}

impl MacroRatiosConfig {
    /// Default ratio set for a fitness goal
    #[must_use]
    pub const fn defaults_for(&self, goal: FitnessGoal) -> MacroRatios {
        match goal {
            FitnessGoal::Gain => self.gain,
            FitnessGoal::Lose => self.lose,
            FitnessGoal::Maintain => self.maintain,
        }
    }

    /// Validate that each default set sums to 100 within tolerance
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` naming the offending goal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.override_sum_tolerance.is_nan() || self.override_sum_tolerance < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "override sum tolerance must be non-negative",
            ));
        }
        if !self.gain.is_numeric() || (self.gain.sum() - 100.0).abs() > self.override_sum_tolerance
        {
            return Err(ConfigError::InvalidWeights(
                "gain ratio percentages must sum to 100",
            ));
        }
        if !self.lose.is_numeric() || (self.lose.sum() - 100.0).abs() > self.override_sum_tolerance
        {
            return Err(ConfigError::InvalidWeights(
                "lose ratio percentages must sum to 100",
            ));
        }
        if !self.maintain.is_numeric()
            || (self.maintain.sum() - 100.0).abs() > self.override_sum_tolerance
        {
            return Err(ConfigError::InvalidWeights(
                "maintain ratio percentages must sum to 100",
            ));
        }
        Ok(())
    }
}

impl Default for MacroRatiosConfig {
    fn default() -> Self {
        Self {
            gain: MacroRatios::new(25.0, 50.0, 25.0),
            lose: MacroRatios::new(35.0, 35.0, 30.0),
            maintain: MacroRatios::new(30.0, 40.0, 30.0),
            override_sum_tolerance: 1.0,
        }
    }
}
