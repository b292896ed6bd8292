// ABOUTME: Value objects for macro goal calculation inputs and outputs
// ABOUTME: ProfileData, MacroRatios, MacroGoals, preset and preference types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macro Goals Contributors

use serde::{Deserialize, Serialize};

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (Mifflin-St Jeor constant +5)
    Male,
    /// Female (Mifflin-St Jeor constant -161)
    Female,
    /// Other or unspecified (averaged constant -78)
    Other,
}

impl Gender {
    /// Parse gender from string, falling back to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Other,
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise: 1.2
    Sedentary,
    /// Light exercise 1-3 days/week: 1.375
    Light,
    /// Moderate exercise 3-5 days/week: 1.55
    Moderate,
    /// Hard exercise 4-5 days/week: 1.725
    Active,
    /// Very hard exercise or physical job: 1.9
    VeryActive,
}

/// Weekly exercise frequency bucket, used when no explicit activity level is set
///
/// Bucket labels match the values the profile form collects ("3-5" sessions
/// per week and so on).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExerciseFrequency {
    /// 0-1 sessions per week
    #[serde(rename = "0-1")]
    ZeroToOne,
    /// 0-2 sessions per week
    #[serde(rename = "0-2")]
    ZeroToTwo,
    /// 2-3 sessions per week
    #[serde(rename = "2-3")]
    TwoToThree,
    /// 3-5 sessions per week
    #[serde(rename = "3-5")]
    ThreeToFive,
    /// 4-5 sessions per week
    #[serde(rename = "4-5")]
    FourToFive,
    /// 6 or more sessions per week
    #[serde(rename = "6+")]
    SixPlus,
}

impl ExerciseFrequency {
    /// Parse a frequency bucket label; unknown labels yield `None`
    #[must_use]
    pub fn from_bucket(s: &str) -> Option<Self> {
        match s {
            "0-1" => Some(Self::ZeroToOne),
            "0-2" => Some(Self::ZeroToTwo),
            "2-3" => Some(Self::TwoToThree),
            "3-5" => Some(Self::ThreeToFive),
            "4-5" => Some(Self::FourToFive),
            "6+" => Some(Self::SixPlus),
            _ => None,
        }
    }

    /// Map this frequency bucket to the activity level it implies
    #[must_use]
    pub const fn activity_level(self) -> ActivityLevel {
        match self {
            Self::ZeroToOne => ActivityLevel::Sedentary,
            Self::ZeroToTwo | Self::TwoToThree => ActivityLevel::Light,
            Self::ThreeToFive => ActivityLevel::Moderate,
            Self::FourToFive => ActivityLevel::Active,
            Self::SixPlus => ActivityLevel::VeryActive,
        }
    }
}

/// Fitness goal driving the calorie offset and default macro ratios
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Weight loss (caloric deficit)
    Lose,
    /// Weight maintenance (caloric balance)
    #[default]
    Maintain,
    /// Weight/muscle gain (caloric surplus)
    Gain,
}

impl FitnessGoal {
    /// Parse goal from string, falling back to `Maintain`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "lose" => Self::Lose,
            "gain" => Self::Gain,
            _ => Self::Maintain,
        }
    }
}

/// Named protein-density preset selecting grams of protein per kg bodyweight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProteinPreset {
    /// Cutting: 2.0 g/kg for muscle preservation in a deficit
    Cutting,
    /// Bulking: 1.8 g/kg
    Bulking,
    /// Recomposition: 2.2 g/kg
    Recomposition,
    /// Keto: 1.6 g/kg
    Keto,
    /// Endurance: 1.4 g/kg
    Endurance,
    /// Balanced: 1.6 g/kg
    Balanced,
}

impl ProteinPreset {
    /// Parse a preset identifier; unknown identifiers yield `None`
    /// (callers fall back to the default density)
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "cutting" => Some(Self::Cutting),
            "bulking" => Some(Self::Bulking),
            "recomposition" => Some(Self::Recomposition),
            "keto" => Some(Self::Keto),
            "endurance" => Some(Self::Endurance),
            "balanced" => Some(Self::Balanced),
            _ => None,
        }
    }
}

/// Normalized user profile record consumed by the calculation pipeline
///
/// Every field is optional: the pipeline degrades to documented sentinels and
/// fallbacks instead of failing on incomplete profiles. Non-positive values
/// for weight/height/age are treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileData {
    /// Body weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Gender for the BMR constant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Explicit activity level; takes priority over `exercise_frequency`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Weekly exercise frequency bucket, used when `activity_level` is absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_frequency: Option<ExerciseFrequency>,
    /// Stated fitness goal; absent means maintain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitness_goal: Option<FitnessGoal>,
}

impl ProfileData {
    /// Fitness goal with the maintain default applied
    #[must_use]
    pub fn goal(&self) -> FitnessGoal {
        self.fitness_goal.unwrap_or_default()
    }
}

/// Protein/carbs/fat split expressed as percentages of daily calories
///
/// Expected (within a tolerance) to sum to 100. The protein percentage is
/// display-advisory only: protein grams are computed from bodyweight, and
/// only the carbs:fat proportion of this split feeds the gram calculation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroRatios {
    /// Protein percentage (0-100)
    pub protein: f64,
    /// Carbohydrate percentage (0-100)
    pub carbs: f64,
    /// Fat percentage (0-100)
    pub fat: f64,
}

impl MacroRatios {
    /// Create a new ratio set
    #[must_use]
    pub const fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }

    /// Sum of the three percentages
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }

    /// Whether all three percentages are finite numbers
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.protein.is_finite() && self.carbs.is_finite() && self.fat.is_finite()
    }
}

/// Daily macro targets in grams, produced by the protein-capped splitter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroSplit {
    /// Protein (grams/day)
    pub protein: u32,
    /// Carbohydrates (grams/day)
    pub carbs: u32,
    /// Fat (grams/day)
    pub fat: u32,
}

/// Complete daily goal record: calorie target plus macro gram targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroGoals {
    /// Daily calorie target (kcal/day)
    pub calories: u32,
    /// Protein (grams/day)
    pub protein: u32,
    /// Carbohydrates (grams/day)
    pub carbs: u32,
    /// Fat (grams/day)
    pub fat: u32,
}

/// Caller-supplied ambient selections for the aggregate entry points
///
/// The surrounding application sources these from its own settings store and
/// injects them explicitly; the engine never reads persisted state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GoalPreferences {
    /// Selected protein-density preset identifier, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset_id: Option<String>,
    /// Custom macro ratio override, if any; corrupt overrides are ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio_override: Option<MacroRatios>,
}

/// Intermediate values behind a goal calculation, for display in settings UIs
///
/// Recomputed on every call along the same path as [`MacroGoals`]; never
/// cached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalculationBreakdown {
    /// Basal metabolic rate (kcal/day); 0 when the profile is incomplete
    pub bmr: u32,
    /// Total daily energy expenditure (kcal/day); 0 when BMR is 0
    pub tdee: u32,
    /// Daily calorie target after goal offset and floor (kcal/day)
    pub calories: u32,
    /// Resolved activity multiplier
    pub activity_multiplier: f64,
    /// Goal-based calorie offset applied to TDEE (kcal/day)
    pub calorie_adjustment: i32,
    /// Resolved protein density (g/kg bodyweight)
    pub protein_per_kg: f64,
    /// Bodyweight used for the protein calculation (kg), after defaulting
    pub weight_kg: f64,
}
