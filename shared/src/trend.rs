//! Progress series summary
//!
//! Smoothing and summary numbers for the weekly weigh-in chart.

use serde::Serialize;

use crate::content::ProgressPoint;

/// Trailing moving average over a series.
///
/// Each output point averages the last `window` values up to and including
/// its position; the first points average what is available so far. Empty
/// input or a zero window yields an empty result.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if values.is_empty() || window == 0 {
        return vec![];
    }

    let mut result = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        let start = i.saturating_sub(window - 1);
        let slice = &values[start..=i];
        result.push(slice.iter().sum::<f64>() / slice.len() as f64);
    }
    result
}

/// Summary of a weigh-in series
#[derive(Debug, Clone, Serialize)]
pub struct WeightTrend {
    pub start_kg: f64,
    pub current_kg: f64,
    /// Negative when weight went down
    pub total_change_kg: f64,
    /// Total change divided by the weeks spanned
    pub average_weekly_change_kg: f64,
    pub entries: usize,
}

impl WeightTrend {
    /// Summarize a series; needs at least two points
    pub fn from_points(points: &[ProgressPoint]) -> Option<WeightTrend> {
        let (first, last) = match (points.first(), points.last()) {
            (Some(first), Some(last)) if points.len() >= 2 => (first, last),
            _ => return None,
        };

        let total_change = last.weight_kg - first.weight_kg;
        let weeks = last.week.saturating_sub(first.week);
        let weekly = if weeks > 0 {
            total_change / weeks as f64
        } else {
            0.0
        };

        Some(WeightTrend {
            start_kg: first.weight_kg,
            current_kg: last.weight_kg,
            total_change_kg: total_change,
            average_weekly_change_kg: weekly,
            entries: points.len(),
        })
    }
}
