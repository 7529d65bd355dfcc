//! Error types for the Healthy Weight calculators

use thiserror::Error;

/// Calculator input errors, tagged with the field they refer to.
///
/// Every variant names the offending field so the page can highlight the
/// right input and tell an untouched field apart from a bad one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("unrecognized {field}: {value}")]
    UnknownVariant { field: &'static str, value: String },
}

impl MetricsError {
    /// Field this error refers to.
    pub fn field(&self) -> &'static str {
        match *self {
            MetricsError::Missing { field }
            | MetricsError::NotANumber { field }
            | MetricsError::NotFinite { field }
            | MetricsError::NotPositive { field }
            | MetricsError::OutOfRange { field, .. }
            | MetricsError::UnknownVariant { field, .. } => field,
        }
    }

    /// True when the field was simply left empty (no input yet),
    /// as opposed to present but invalid.
    pub fn is_missing(&self) -> bool {
        matches!(self, MetricsError::Missing { .. })
    }
}
