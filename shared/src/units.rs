//! Unit conversion for calculator input and output
//!
//! The calculators work in SI internally (kg, cm, kcal); conversion happens
//! at the form boundary when the visitor picks imperial units.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::MetricsError;

// ============================================================================
// Weight Units
// ============================================================================

const KG_PER_LB: f64 = 0.453592;
const KG_PER_STONE: f64 = 6.35029;

/// Weight unit selectable next to the weight input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
    Stone,
}

impl WeightUnit {
    /// Convert a value in this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => value * KG_PER_LB,
            WeightUnit::Stone => value * KG_PER_STONE,
        }
    }

    /// Convert kilograms to a value in this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg / KG_PER_LB,
            WeightUnit::Stone => kg / KG_PER_STONE,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
            WeightUnit::Stone => "st",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kg),
            "lbs" | "lb" | "pound" | "pounds" => Ok(WeightUnit::Lbs),
            "st" | "stone" | "stones" => Ok(WeightUnit::Stone),
            _ => Err(MetricsError::UnknownVariant {
                field: "weight_unit",
                value: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// Height Units
// ============================================================================

const CM_PER_INCH: f64 = 2.54;

/// Height unit selectable next to the height input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    Meters,
    Inches,
}

impl HeightUnit {
    /// Convert a value in this unit to centimeters
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value,
            HeightUnit::Meters => value * 100.0,
            HeightUnit::Inches => value * CM_PER_INCH,
        }
    }

    /// Convert centimeters to a value in this unit
    pub fn from_cm(&self, cm: f64) -> f64 {
        match self {
            HeightUnit::Cm => cm,
            HeightUnit::Meters => cm / 100.0,
            HeightUnit::Inches => cm / CM_PER_INCH,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::Meters => "m",
            HeightUnit::Inches => "in",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for HeightUnit {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(HeightUnit::Cm),
            "m" | "meter" | "meters" => Ok(HeightUnit::Meters),
            "in" | "inch" | "inches" => Ok(HeightUnit::Inches),
            _ => Err(MetricsError::UnknownVariant {
                field: "height_unit",
                value: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// Energy Units
// ============================================================================

const KJ_PER_KCAL: f64 = 4.184;

/// Energy unit for displaying plan outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUnit {
    #[default]
    Kcal,
    Kj,
}

impl EnergyUnit {
    /// Convert kilocalories to a value in this unit
    pub fn from_kcal(&self, kcal: f64) -> f64 {
        match self {
            EnergyUnit::Kcal => kcal,
            EnergyUnit::Kj => kcal * KJ_PER_KCAL,
        }
    }

    /// Convert a value in this unit to kilocalories
    pub fn to_kcal(&self, value: f64) -> f64 {
        match self {
            EnergyUnit::Kcal => value,
            EnergyUnit::Kj => value / KJ_PER_KCAL,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            EnergyUnit::Kcal => "kcal",
            EnergyUnit::Kj => "kJ",
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for EnergyUnit {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kcal" | "calorie" | "calories" => Ok(EnergyUnit::Kcal),
            "kj" | "kilojoule" | "kilojoules" => Ok(EnergyUnit::Kj),
            _ => Err(MetricsError::UnknownVariant {
                field: "energy_unit",
                value: s.to_string(),
            }),
        }
    }
}
