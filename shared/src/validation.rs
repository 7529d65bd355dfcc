//! Input validation functions
//!
//! Two layers, both returning field-tagged errors: computability checks
//! (positive, finite) that the calculators themselves require, and
//! plausibility checks (human ranges) the form boundary can run before
//! showing results.

use crate::errors::MetricsError;

/// Reject NaN, infinities, and non-positive values.
///
/// Returns the value back on success so call sites can validate inline.
pub fn require_positive(field: &'static str, value: f64) -> Result<f64, MetricsError> {
    if value.is_nan() {
        return Err(MetricsError::NotANumber { field });
    }
    if value.is_infinite() {
        return Err(MetricsError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(MetricsError::NotPositive { field });
    }
    Ok(value)
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), MetricsError> {
    require_positive(field, value)?;
    if value < min || value > max {
        return Err(MetricsError::OutOfRange { field, min, max });
    }
    Ok(())
}

/// Plausible adult height: 50-300 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), MetricsError> {
    check_range("height_cm", height_cm, 50.0, 300.0)
}

/// Plausible weight: 20-500 kg
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), MetricsError> {
    check_range("weight_kg", weight_kg, 20.0, 500.0)
}

/// Plausible age: 1-150 years
pub fn validate_age_years(age_years: f64) -> Result<(), MetricsError> {
    check_range("age_years", age_years, 1.0, 150.0)
}

/// Run all plausibility checks over a profile, first failure wins
pub fn validate_profile(profile: &crate::metrics::Profile) -> Result<(), MetricsError> {
    validate_height_cm(profile.height_cm)?;
    validate_weight_kg(profile.weight_kg)?;
    validate_age_years(profile.age_years)?;
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to the labels the page shows
pub fn field_display_label(field_name: &str) -> &str {
    match field_name {
        "height_cm" => "Height",
        "weight_kg" => "Weight",
        "age_years" => "Age",
        "sex" => "Sex",
        "activity_level" => "Activity",
        "height_unit" => "Height Unit",
        "weight_unit" => "Weight Unit",
        _ => field_name,
    }
}

/// Format an error for display, with the friendly field label in place of
/// the technical field name
pub fn user_message(err: &MetricsError) -> String {
    let label = field_display_label(err.field());
    match err {
        MetricsError::Missing { .. } => format!("{label} is required"),
        MetricsError::NotANumber { .. } => format!("{label} must be a number"),
        MetricsError::NotFinite { .. } => format!("{label} must be a finite number"),
        MetricsError::NotPositive { .. } => format!("{label} must be greater than zero"),
        MetricsError::OutOfRange { min, max, .. } => {
            format!("{label} must be between {min} and {max}")
        }
        MetricsError::UnknownVariant { value, .. } => {
            format!("{label} has an unrecognized value: {value}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{ActivityLevel, Profile, Sex};
    use proptest::prelude::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("weight_kg", 70.0).unwrap(), 70.0);

        assert_eq!(
            require_positive("weight_kg", 0.0).unwrap_err(),
            MetricsError::NotPositive { field: "weight_kg" }
        );
        assert_eq!(
            require_positive("weight_kg", -5.0).unwrap_err(),
            MetricsError::NotPositive { field: "weight_kg" }
        );
        assert_eq!(
            require_positive("weight_kg", f64::NAN).unwrap_err(),
            MetricsError::NotANumber { field: "weight_kg" }
        );
        assert_eq!(
            require_positive("weight_kg", f64::NEG_INFINITY).unwrap_err(),
            MetricsError::NotFinite { field: "weight_kg" }
        );
    }

    #[test]
    fn test_validate_height_cm() {
        assert!(validate_height_cm(170.0).is_ok());
        assert!(validate_height_cm(50.0).is_ok());
        assert!(validate_height_cm(300.0).is_ok());

        assert!(validate_height_cm(49.9).is_err());
        assert!(validate_height_cm(300.1).is_err());
        assert!(validate_height_cm(-10.0).is_err());
        assert!(validate_height_cm(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_weight_kg() {
        assert!(validate_weight_kg(70.0).is_ok());
        assert!(validate_weight_kg(20.0).is_ok());
        assert!(validate_weight_kg(500.0).is_ok());

        assert!(validate_weight_kg(10.0).is_err());
        assert!(validate_weight_kg(600.0).is_err());
        assert!(validate_weight_kg(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_age_years() {
        assert!(validate_age_years(30.0).is_ok());
        assert!(validate_age_years(1.0).is_ok());
        assert!(validate_age_years(150.0).is_ok());

        assert!(validate_age_years(0.5).is_err());
        assert!(validate_age_years(151.0).is_err());
    }

    #[test]
    fn test_validate_profile_first_failure_wins() {
        let profile = Profile {
            sex: Sex::Female,
            age_years: 200.0,
            height_cm: 10.0,
            weight_kg: 70.0,
            activity_level: ActivityLevel::Light,
        };
        // Height is checked before age
        assert_eq!(validate_profile(&profile).unwrap_err().field(), "height_cm");
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(field_display_label("height_cm"), "Height");
        assert_eq!(field_display_label("activity_level"), "Activity");
        assert_eq!(field_display_label("unknown_field"), "unknown_field");
    }

    #[test]
    fn test_user_message() {
        let err = MetricsError::NotPositive { field: "weight_kg" };
        assert_eq!(user_message(&err), "Weight must be greater than zero");

        let err = MetricsError::UnknownVariant {
            field: "activity_level",
            value: "super".to_string(),
        };
        assert_eq!(user_message(&err), "Activity has an unrecognized value: super");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_height_range(height in 50.0f64..=300.0) {
            prop_assert!(validate_height_cm(height).is_ok());
        }

        #[test]
        fn prop_invalid_height_below_min(height in 0.1f64..50.0) {
            prop_assert!(validate_height_cm(height).is_err());
        }

        #[test]
        fn prop_valid_weight_range(weight in 20.0f64..=500.0) {
            prop_assert!(validate_weight_kg(weight).is_ok());
        }

        #[test]
        fn prop_invalid_weight_above_max(weight in 500.1f64..1000.0) {
            prop_assert!(validate_weight_kg(weight).is_err());
        }

        #[test]
        fn prop_positive_values_pass(value in 0.1f64..1e6) {
            prop_assert!(require_positive("weight_kg", value).is_ok());
        }
    }
}
