//! Raw form input for the calculator cards
//!
//! The page hands over its input values as the raw strings the visitor
//! typed. Parsing distinguishes an empty field (nothing entered yet) from a
//! non-numeric or non-positive one, so the page can render a quiet
//! placeholder for the former and a field hint for the latter.

use serde::{Deserialize, Serialize};

use crate::errors::MetricsError;
use crate::metrics::{
    compute_bmi, compute_energy_plan, ActivityLevel, BmiReading, EnergyPlan, Profile, Sex,
};
use crate::units::{HeightUnit, WeightUnit};
use crate::validation::require_positive;

/// Parse one numeric text field
fn parse_number(field: &'static str, raw: &str) -> Result<f64, MetricsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MetricsError::Missing { field });
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| MetricsError::NotANumber { field })
}

/// Parse an optional unit selection, falling back to the SI default
fn parse_unit<U>(raw: &Option<String>) -> Result<U, MetricsError>
where
    U: Default + std::str::FromStr<Err = MetricsError>,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(U::default()),
        Some(value) => value.parse(),
    }
}

/// State of the BMI card's inputs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BmiForm {
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    /// Unit of the height field; empty means cm
    #[serde(default)]
    pub height_unit: Option<String>,
    /// Unit of the weight field; empty means kg
    #[serde(default)]
    pub weight_unit: Option<String>,
}

impl BmiForm {
    /// Parse into SI `(height_cm, weight_kg)`
    pub fn parse(&self) -> Result<(f64, f64), MetricsError> {
        let height_unit: HeightUnit = parse_unit(&self.height_unit)?;
        let weight_unit: WeightUnit = parse_unit(&self.weight_unit)?;

        let height_cm = require_positive(
            "height_cm",
            height_unit.to_cm(parse_number("height_cm", &self.height)?),
        )?;
        let weight_kg = require_positive(
            "weight_kg",
            weight_unit.to_kg(parse_number("weight_kg", &self.weight)?),
        )?;
        Ok((height_cm, weight_kg))
    }

    /// Parse and compute the BMI reading in one step
    pub fn reading(&self) -> Result<BmiReading, MetricsError> {
        let (height_cm, weight_kg) = self.parse()?;
        compute_bmi(height_cm, weight_kg)
    }
}

/// State of the daily-calorie card's inputs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnergyForm {
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    /// Activity select value; empty means sedentary
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub height_unit: Option<String>,
    #[serde(default)]
    pub weight_unit: Option<String>,
}

impl EnergyForm {
    /// Parse into a validated profile
    pub fn profile(&self) -> Result<Profile, MetricsError> {
        let sex_raw = self.sex.trim();
        if sex_raw.is_empty() {
            return Err(MetricsError::Missing { field: "sex" });
        }
        let sex: Sex = sex_raw.parse()?;

        // An untouched select means no exercise assumed, not an error
        let activity_raw = self.activity.trim();
        let activity_level = if activity_raw.is_empty() {
            ActivityLevel::Sedentary
        } else {
            activity_raw.parse()?
        };

        let height_unit: HeightUnit = parse_unit(&self.height_unit)?;
        let weight_unit: WeightUnit = parse_unit(&self.weight_unit)?;

        let age_years = require_positive("age_years", parse_number("age_years", &self.age)?)?;
        let height_cm = require_positive(
            "height_cm",
            height_unit.to_cm(parse_number("height_cm", &self.height)?),
        )?;
        let weight_kg = require_positive(
            "weight_kg",
            weight_unit.to_kg(parse_number("weight_kg", &self.weight)?),
        )?;

        Ok(Profile {
            sex,
            age_years,
            height_cm,
            weight_kg,
            activity_level,
        })
    }

    /// Parse and compute the energy plan in one step
    pub fn plan(&self) -> Result<EnergyPlan, MetricsError> {
        compute_energy_plan(&self.profile()?)
    }
}
