//! Healthy Weight WASM Module
//!
//! Browser bindings for the page. Scalar helpers mirror the raw formulas;
//! everything structured travels as a JSON string with a status envelope
//! (`"ok"` / `"invalid"`) so the page can render an em-dash placeholder on
//! invalid input and point at the offending field.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use healthy_weight_shared::errors::MetricsError;
use healthy_weight_shared::form::{BmiForm, EnergyForm};
use healthy_weight_shared::metrics::{self, ActivityLevel, EnergyPlan};
use healthy_weight_shared::trend::{self, WeightTrend};
use healthy_weight_shared::units::EnergyUnit;
use healthy_weight_shared::{content, validation};

// ============================================================================
// JSON Envelopes
// ============================================================================

#[derive(Serialize)]
struct OkEnvelope<T> {
    status: &'static str,
    #[serde(flatten)]
    data: T,
}

#[derive(Serialize)]
struct InvalidEnvelope<'a> {
    status: &'static str,
    field: &'static str,
    label: &'a str,
    message: String,
    /// True when the field was left empty rather than filled in badly
    missing: bool,
}

#[derive(Serialize)]
struct ErrorEnvelope {
    status: &'static str,
    message: String,
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| r#"{"status":"error"}"#.to_string())
}

fn envelope<T: Serialize>(result: Result<T, MetricsError>) -> String {
    match result {
        Ok(data) => to_json(&OkEnvelope { status: "ok", data }),
        Err(err) => to_json(&InvalidEnvelope {
            status: "invalid",
            field: err.field(),
            label: validation::field_display_label(err.field()),
            message: validation::user_message(&err),
            missing: err.is_missing(),
        }),
    }
}

fn bad_form(err: serde_json::Error) -> String {
    to_json(&ErrorEnvelope {
        status: "error",
        message: format!("malformed form payload: {err}"),
    })
}

// ============================================================================
// Calculators
// ============================================================================

/// Raw BMI value from height (cm) and weight (kg).
///
/// Returns NaN for non-positive or non-finite input so an `isFinite` check
/// on the page keeps working; the JSON form below is the checked path.
#[wasm_bindgen]
pub fn bmi_value(height_cm: f64, weight_kg: f64) -> f64 {
    if !height_cm.is_finite() || !weight_kg.is_finite() || height_cm <= 0.0 || weight_kg <= 0.0 {
        return f64::NAN;
    }
    metrics::bmi_value(height_cm, weight_kg)
}

/// Checked BMI report from the BMI card's raw form state (JSON-encoded
/// [`BmiForm`]): value, category label, and the healthy weight band.
#[wasm_bindgen]
pub fn bmi_report_json(form_json: &str) -> String {
    match serde_json::from_str::<BmiForm>(form_json) {
        Ok(form) => envelope(form.reading()),
        Err(err) => bad_form(err),
    }
}

#[derive(Serialize)]
struct PlanReport {
    #[serde(flatten)]
    plan: EnergyPlan,
    /// Signals the page to show its low-target caution
    below_advisory_minimum: bool,
}

/// Daily energy plan from the calorie card's raw form state (JSON-encoded
/// [`EnergyForm`]): BMR, maintenance, suggested target.
#[wasm_bindgen]
pub fn energy_plan_json(form_json: &str) -> String {
    match serde_json::from_str::<EnergyForm>(form_json) {
        Ok(form) => envelope(form.plan().map(|plan| PlanReport {
            below_advisory_minimum: plan.below_advisory_minimum(),
            plan,
        })),
        Err(err) => bad_form(err),
    }
}

#[derive(Serialize)]
struct StatusOnly {
    status: &'static str,
}

/// Advisory plausibility check over the calorie card's inputs (human
/// height/weight/age ranges). Separate from computation on purpose: the
/// calculators accept any positive finite input.
#[wasm_bindgen]
pub fn check_profile_json(form_json: &str) -> String {
    match serde_json::from_str::<EnergyForm>(form_json) {
        Ok(form) => match form.profile().and_then(|p| validation::validate_profile(&p)) {
            Ok(()) => to_json(&StatusOnly { status: "ok" }),
            Err(err) => envelope::<StatusOnly>(Err(err)),
        },
        Err(err) => bad_form(err),
    }
}

#[derive(Serialize)]
struct ActivityOption {
    value: &'static str,
    label: &'static str,
    multiplier: f64,
}

/// Rows for the activity select: wire value, label, multiplier
#[wasm_bindgen]
pub fn activity_levels_json() -> String {
    let options: Vec<ActivityOption> = ActivityLevel::ALL
        .iter()
        .map(|level| ActivityOption {
            value: level.as_str(),
            label: level.description(),
            multiplier: level.multiplier(),
        })
        .collect();
    to_json(&options)
}

// ============================================================================
// Page Content
// ============================================================================

/// Programme cards
#[wasm_bindgen]
pub fn programmes_json() -> String {
    to_json(&content::programmes())
}

/// Meal catalog with modal recipes
#[wasm_bindgen]
pub fn meals_json() -> String {
    to_json(&content::meals())
}

/// FAQ accordion entries
#[wasm_bindgen]
pub fn faq_json() -> String {
    to_json(&content::faq())
}

/// Sample weekly weigh-in series for the progress chart
#[wasm_bindgen]
pub fn progress_json() -> String {
    to_json(&content::sample_progress())
}

/// Summary numbers for the progress chart caption
#[wasm_bindgen]
pub fn progress_trend_json() -> String {
    match WeightTrend::from_points(content::sample_progress()) {
        Some(trend) => to_json(&trend),
        None => "null".to_string(),
    }
}

/// Trailing moving average for chart smoothing
#[wasm_bindgen]
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    trend::moving_average(values, window)
}

/// Convert a kcal figure into the visitor's preferred energy unit
/// ("kcal" or "kj"). NaN for an unrecognized unit, like the raw scalars.
#[wasm_bindgen]
pub fn convert_energy(kcal: f64, unit: &str) -> f64 {
    match unit.parse::<EnergyUnit>() {
        Ok(unit) => unit.from_kcal(kcal),
        Err(_) => f64::NAN,
    }
}
