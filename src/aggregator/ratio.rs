//! Fixed-decimal ratios.
//!
//! Every derived average keeps two forms: the unrounded value, used for
//! sorting and superlative picks, and the fixed-decimal string shown to
//! users. Comparisons never look at the string.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A derived ratio with its display form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ratio {
    /// Unrounded value
    pub value: f64,

    /// Value rounded half away from zero to a fixed number of decimals
    pub display: String,
}

impl Ratio {
    /// `numerator / denominator`, or zero when the denominator is zero
    pub fn per(numerator: u32, denominator: u32, decimals: usize) -> Self {
        let value = if denominator > 0 {
            f64::from(numerator) / f64::from(denominator)
        } else {
            0.0
        };
        Self::from_value(value, decimals)
    }

    /// `numerator / denominator` as a percentage, or zero when the denominator is zero
    pub fn percent(numerator: u32, denominator: u32, decimals: usize) -> Self {
        let value = if denominator > 0 {
            f64::from(numerator) / f64::from(denominator) * 100.0
        } else {
            0.0
        };
        Self::from_value(value, decimals)
    }

    pub fn from_value(value: f64, decimals: usize) -> Self {
        Self {
            value,
            display: to_fixed(value, decimals),
        }
    }

    /// Total order on the unrounded value
    pub fn compare(&self, other: &Ratio) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.display)
    }
}

/// Format `value` with `decimals` digits, rounding half away from zero
///
/// `format!` alone does not round exact ties away from zero, so the
/// rounding is done explicitly first.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{:.*}", decimals, 0.0);
    }

    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;

    // Avoid printing "-0.00"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };

    format!("{:.*}", decimals, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_rounds_half_away_from_zero() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(66.66666, 1), "66.7");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
    }

    #[test]
    fn test_to_fixed_rounds_the_true_ratio() {
        // 3/40 is stored just below 0.075; the scaled value rounds up anyway
        assert_eq!(to_fixed(3.0 / 40.0, 2), "0.08");
        assert_eq!(to_fixed(17.0 / 40.0, 2), "0.43");
        assert_eq!(Ratio::per(3, 40, 2).display, "0.08");
    }

    #[test]
    fn test_to_fixed_pads_decimals() {
        assert_eq!(to_fixed(1.0, 2), "1.00");
        assert_eq!(to_fixed(0.0, 1), "0.0");
    }

    #[test]
    fn test_per_guards_zero_denominator() {
        let ratio = Ratio::per(5, 0, 2);
        assert_eq!(ratio.value, 0.0);
        assert_eq!(ratio.display, "0.00");

        let rate = Ratio::percent(5, 0, 1);
        assert_eq!(rate.display, "0.0");
    }

    #[test]
    fn test_percent() {
        let rate = Ratio::percent(2, 3, 1);
        assert_eq!(rate.display, "66.7");
        assert!((rate.value - 66.666_666).abs() < 1e-4);
    }

    #[test]
    fn test_compare_uses_unrounded_value() {
        // Both display as "0.67"
        let a = Ratio::per(2, 3, 2);
        let b = Ratio::from_value(0.67, 2);
        assert_eq!(a.display, b.display);
        assert_eq!(a.compare(&b), Ordering::Less);
    }
}
