//! Salary estimation from a vacancy's salary range
//!
//! Providers map their raw vacancy records into a [`SalaryRange`]; the
//! estimate itself knows nothing about the provider.

/// Multiplier applied when only the lower bound is published
const LOWER_ONLY_FACTOR: f64 = 1.2;

/// Multiplier applied when only the upper bound is published
const UPPER_ONLY_FACTOR: f64 = 0.8;

/// Provider-agnostic salary range of a single vacancy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryRange<'a> {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: &'a str,
}

impl SalaryRange<'_> {
    /// Estimate in `target_currency`, or None if the range is unusable
    pub fn estimate(&self, target_currency: &str) -> Option<f64> {
        if self.currency != target_currency {
            return None;
        }
        predict_salary(self.from, self.to)
    }
}

/// Single salary figure from optional bounds.
///
/// A bound of 0 counts as unpublished: SuperJob reports missing bounds as 0.
pub fn predict_salary(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    let from = from.filter(|v| *v > 0.0);
    let to = to.filter(|v| *v > 0.0);

    match (from, to) {
        (None, None) => None,
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * LOWER_ONLY_FACTOR),
        (None, Some(to)) => Some(to * UPPER_ONLY_FACTOR),
    }
}
