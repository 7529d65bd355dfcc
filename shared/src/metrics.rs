//! Health metric calculations
//!
//! The two calculators on the page: Body Mass Index with its category
//! band, and the daily-energy estimate (Mifflin-St Jeor BMR, activity-scaled
//! TDEE, and a gentle deficit target).
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: every calculation is synchronous and side-effect
//!    free; identical input always yields identical output
//! 2. **Tagged Results**: malformed input comes back as a field-tagged
//!    [`MetricsError`], never as NaN, zero, or a panic
//! 3. **Type Safety**: sex and activity level are closed enums; there is no
//!    silent catch-all branch

use serde::{Deserialize, Serialize};

use crate::errors::MetricsError;
use crate::validation::require_positive;

// ============================================================================
// Profile Types
// ============================================================================

/// Biological sex, used for the Mifflin-St Jeor offset only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Additive offset in the Mifflin-St Jeor equation
    pub fn mifflin_offset(&self) -> f64 {
        match self {
            Sex::Female => -161.0,
            Sex::Male => 5.0,
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "female" => Ok(Sex::Female),
            "male" => Ok(Sex::Male),
            _ => Err(MetricsError::UnknownVariant {
                field: "sex",
                value: s.to_string(),
            }),
        }
    }
}

/// Activity level for scaling BMR up to daily expenditure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Physical job or hard daily training
    #[serde(alias = "very", alias = "very_active")]
    VeryActive,
}

impl ActivityLevel {
    /// All levels, in select-option order
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// TDEE multiplier for this level
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Select-option label shown on the page
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little exercise)",
            ActivityLevel::Light => "Light (1-3 days/week)",
            ActivityLevel::Moderate => "Moderate (3-5 days/week)",
            ActivityLevel::Active => "Active (6-7 days/week)",
            ActivityLevel::VeryActive => "Very active (physical job + training)",
        }
    }

    /// Wire value used by the page's select
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very-active",
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            // "very" is the value the original select submitted
            "very-active" | "very_active" | "very" => Ok(ActivityLevel::VeryActive),
            _ => Err(MetricsError::UnknownVariant {
                field: "activity_level",
                value: s.to_string(),
            }),
        }
    }
}

/// Anthropometric input for one energy-plan computation.
///
/// Constructed fresh from form input on every recalculation and discarded
/// after use; there is no identity and no stored state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub sex: Sex,
    /// Age in years
    pub age_years: f64,
    /// Height in centimeters (SI internally)
    pub height_cm: f64,
    /// Weight in kilograms (SI internally)
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
}

// ============================================================================
// BMI
// ============================================================================

/// BMI category band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Healthy,
    Overweight,
    Obesity,
}

impl BmiCategory {
    /// Half-open BMI interval `[low, high)` for this band
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Healthy => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obesity => (30.0, f64::INFINITY),
        }
    }

    /// Badge label shown next to the BMI value
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Healthy => "Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of one BMI computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiReading {
    /// BMI value
    pub value: f64,
    /// Category band
    pub category: BmiCategory,
    /// Weight range in kg that maps to the healthy band at this height
    pub healthy_weight_range_kg: (f64, f64),
}

/// Raw BMI formula: weight(kg) / height(m)²
///
/// No validation; callers wanting a checked result use [`compute_bmi`].
pub fn bmi_value(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify a BMI value into its band.
///
/// Intervals are half-open on the lower bound: exactly 18.5 is Healthy,
/// exactly 25 is Overweight, exactly 30 is Obesity.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Healthy
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obesity
    }
}

/// Weight range in kg corresponding to BMI 18.5-25 at the given height
pub fn healthy_weight_range_kg(height_cm: f64) -> (f64, f64) {
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    (18.5 * height_m_sq, 25.0 * height_m_sq)
}

/// Compute a checked BMI reading.
///
/// Height and weight must be positive finite numbers; anything else comes
/// back as a field-tagged error rather than a NaN or infinite value.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Result<BmiReading, MetricsError> {
    let height_cm = require_positive("height_cm", height_cm)?;
    let weight_kg = require_positive("weight_kg", weight_kg)?;

    let value = bmi_value(height_cm, weight_kg);
    Ok(BmiReading {
        value,
        category: classify_bmi(value),
        healthy_weight_range_kg: healthy_weight_range_kg(height_cm),
    })
}

// ============================================================================
// BMR and Energy Plan
// ============================================================================

/// Flat deficit applied to maintenance calories for the suggested target
pub const SUGGESTED_DEFICIT_KCAL: f64 = 500.0;

/// Targets below this are flagged so the page can show a caution.
/// The plan itself is never clamped.
pub const ADVISORY_MINIMUM_KCAL: i32 = 1200;

/// Basal Metabolic Rate via the Mifflin-St Jeor equation, unrounded.
///
/// Women: 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
/// Men:   10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
pub fn bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years + sex.mifflin_offset()
}

/// Daily energy estimate for one profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyPlan {
    /// Basal Metabolic Rate, kcal/day
    pub bmr: i32,
    /// Maintenance calories (BMR × activity multiplier), kcal/day
    pub tdee: i32,
    /// Gentle weight-loss target: maintenance minus 500 kcal/day
    pub suggested_target: i32,
    /// Activity multiplier that was applied
    pub activity_multiplier: f64,
}

impl EnergyPlan {
    /// True when the suggested target fell below [`ADVISORY_MINIMUM_KCAL`]
    pub fn below_advisory_minimum(&self) -> bool {
        self.suggested_target < ADVISORY_MINIMUM_KCAL
    }
}

/// Compute the daily energy plan for a profile.
///
/// Weight, height, and age must be positive finite numbers. TDEE is derived
/// from the unrounded BMR, and each of the three outputs is rounded
/// independently at construction, so rounding error never compounds.
pub fn compute_energy_plan(profile: &Profile) -> Result<EnergyPlan, MetricsError> {
    let weight_kg = require_positive("weight_kg", profile.weight_kg)?;
    let height_cm = require_positive("height_cm", profile.height_cm)?;
    let age_years = require_positive("age_years", profile.age_years)?;

    let multiplier = profile.activity_level.multiplier();
    let bmr_raw = bmr_mifflin(weight_kg, height_cm, age_years, profile.sex);
    let tdee_raw = bmr_raw * multiplier;

    Ok(EnergyPlan {
        bmr: bmr_raw.round() as i32,
        tdee: tdee_raw.round() as i32,
        suggested_target: (tdee_raw - SUGGESTED_DEFICIT_KCAL).round() as i32,
        activity_multiplier: multiplier,
    })
}
