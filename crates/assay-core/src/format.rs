//! Numeric formatting rules
//!
//! Every value placed into a presentation record goes through one of the
//! two functions here, so all analyses render visually consistent
//! magnitudes.

use crate::constants::{DEFAULT_DECIMALS, P_VALUE_DISPLAY_FLOOR, SMALL_MAGNITUDE_THRESHOLD};

/// Format a p-value for display.
///
/// Values below [`P_VALUE_DISPLAY_FLOOR`] render as the literal string
/// `"< 0.001"`; everything else gets three decimal places.
pub fn format_p_value(p: f64) -> String {
    if p < P_VALUE_DISPLAY_FLOOR {
        "< 0.001".to_string()
    } else {
        format!("{p:.3}")
    }
}

/// Format a general number for display.
///
/// Nonzero magnitudes below [`SMALL_MAGNITUDE_THRESHOLD`] use exponential
/// notation with two decimal digits; everything else is fixed-point with
/// `decimals` places. Non-finite values keep their native rendering and
/// callers decide how to display them.
pub fn format_number(value: f64, decimals: usize) -> String {
    if value != 0.0 && value.is_finite() && value.abs() < SMALL_MAGNITUDE_THRESHOLD {
        format!("{value:.2e}")
    } else {
        format!("{value:.decimals$}")
    }
}

/// Format a general number with the default decimal count
pub fn format_number_default(value: f64) -> String {
    format_number(value, DEFAULT_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_p_value_floor() {
        assert_eq!(format_p_value(0.0005), "< 0.001");
        assert_eq!(format_p_value(0.0), "< 0.001");
        assert_eq!(format_p_value(0.04), "0.040");
        assert_eq!(format_p_value(0.001), "0.001");
        assert_eq!(format_p_value(1.0), "1.000");
    }

    #[test]
    fn test_small_magnitudes_go_exponential() {
        assert_eq!(format_number(0.0005, 3), "5.00e-4");
        assert_eq!(format_number(-0.0005, 3), "-5.00e-4");
        assert_eq!(format_number(0.000012, 3), "1.20e-5");
    }

    #[test]
    fn test_zero_is_not_small() {
        assert_eq!(format_number(0.0, 3), "0.000");
        assert_eq!(format_number(0.0, 1), "0.0");
    }

    #[test]
    fn test_fixed_point() {
        assert_eq!(format_number(3.14159, 3), "3.142");
        assert_eq!(format_number(3.14159, 1), "3.1");
        assert_eq!(format_number(-12.5, 2), "-12.50");
        assert_eq!(format_number(0.001, 3), "0.001"); // at the threshold, not below
    }

    #[test]
    fn test_default_decimals() {
        assert_eq!(format_number_default(1.23456), "1.235");
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert_eq!(format_number(f64::NAN, 3), "NaN");
        assert_eq!(format_number(f64::INFINITY, 3), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY, 3), "-inf");
    }
}
