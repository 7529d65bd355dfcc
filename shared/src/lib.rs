//! Healthy Weight Shared Library
//!
//! Domain logic behind the Healthy Weight page: the BMI and daily-calorie
//! calculators, unit conversion, raw-form parsing, and the static catalog
//! the page renders. Consumed by the WASM module; the page itself only
//! displays what comes back.

pub mod content;
pub mod errors;
pub mod form;
pub mod metrics;
pub mod trend;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::MetricsError;
pub use form::{BmiForm, EnergyForm};
pub use metrics::*;
pub use trend::{moving_average, WeightTrend};
pub use units::{EnergyUnit, HeightUnit, WeightUnit};
