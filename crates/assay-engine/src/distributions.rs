//! Distribution helpers for p-values and critical values
//!
//! Thin wrappers over statrs that degrade to `NaN` when a distribution
//! cannot be constructed (non-positive degrees of freedom, non-finite
//! statistics). Non-finite values propagate into test results; callers
//! decide how to display them.

use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor, Normal, StudentsT};

/// Two-tailed p-value for a Student's t statistic.
///
/// `NaN` when `df <= 0` or `t` is `NaN`; an infinite `t` yields 0.
pub fn students_t_two_tailed(t: f64, df: f64) -> f64 {
    if t.is_nan() {
        return f64::NAN;
    }
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => 2.0 * (1.0 - dist.cdf(t.abs())),
        Err(_) => f64::NAN,
    }
}

/// Two-tailed critical value of Student's t at the given confidence level.
///
/// `NaN` when `df <= 0` or the confidence level is outside (0, 1).
pub fn t_critical(confidence: f64, df: f64) -> f64 {
    if confidence <= 0.0 || confidence >= 1.0 {
        return f64::NAN;
    }
    let alpha = 1.0 - confidence;
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => dist.inverse_cdf(1.0 - alpha / 2.0),
        Err(_) => f64::NAN,
    }
}

/// Upper-tail probability of the F distribution: P(F > f).
///
/// `NaN` when either degrees-of-freedom parameter is non-positive or `f`
/// is `NaN`; an infinite `f` yields 0.
pub fn f_survival(f: f64, df1: f64, df2: f64) -> f64 {
    if f.is_nan() {
        return f64::NAN;
    }
    if f <= 0.0 {
        return 1.0;
    }
    if f.is_infinite() {
        return 0.0;
    }
    match FisherSnedecor::new(df1, df2) {
        Ok(dist) => 1.0 - dist.cdf(f),
        Err(_) => f64::NAN,
    }
}

/// Upper-tail probability of the chi-square distribution: P(X² > x).
pub fn chi_square_survival(x: f64, df: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 1.0;
    }
    if x.is_infinite() {
        return 0.0;
    }
    match ChiSquared::new(df) {
        Ok(dist) => 1.0 - dist.cdf(x),
        Err(_) => f64::NAN,
    }
}

/// Two-tailed p-value for a standard normal z statistic.
pub fn normal_two_tailed(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    // Normal::new(0, 1) cannot fail
    let dist = Normal::new(0.0, 1.0).unwrap();
    2.0 * (1.0 - dist.cdf(z.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_t_two_tailed_center() {
        assert_abs_diff_eq!(students_t_two_tailed(0.0, 10.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_t_two_tailed_known_value() {
        // t = 2.7764 at df = 4 sits at the 95% two-tailed boundary
        assert_abs_diff_eq!(students_t_two_tailed(2.7764, 4.0), 0.05, epsilon = 1e-4);
    }

    #[test]
    fn test_t_degrades_to_nan() {
        assert!(students_t_two_tailed(1.0, 0.0).is_nan());
        assert!(students_t_two_tailed(f64::NAN, 5.0).is_nan());
        assert!(t_critical(0.95, 0.0).is_nan());
        assert!(t_critical(1.5, 5.0).is_nan());
    }

    #[test]
    fn test_t_critical_known_values() {
        assert_abs_diff_eq!(t_critical(0.95, 4.0), 2.7764, epsilon = 1e-3);
        assert_abs_diff_eq!(t_critical(0.95, 1e6), 1.96, epsilon = 1e-2);
    }

    #[test]
    fn test_f_survival() {
        assert_eq!(f_survival(0.0, 2.0, 10.0), 1.0);
        assert_eq!(f_survival(-1.0, 2.0, 10.0), 1.0);
        assert!(f_survival(1.0, 0.0, 10.0).is_nan());
        // Large F should be deep in the tail; an infinite one is past it
        assert!(f_survival(100.0, 2.0, 30.0) < 1e-6);
        assert_eq!(f_survival(f64::INFINITY, 2.0, 30.0), 0.0);
    }

    #[test]
    fn test_chi_square_survival() {
        // With df = 2, survival is exp(-x/2)
        assert_abs_diff_eq!(chi_square_survival(2.0, 2.0), (-1.0f64).exp(), epsilon = 1e-10);
        assert_eq!(chi_square_survival(0.0, 2.0), 1.0);
        assert_eq!(chi_square_survival(f64::INFINITY, 2.0), 0.0);
        assert!(chi_square_survival(1.0, 0.0).is_nan());
    }

    #[test]
    fn test_normal_two_tailed() {
        assert_abs_diff_eq!(normal_two_tailed(0.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normal_two_tailed(1.96), 0.05, epsilon = 1e-3);
        assert!(normal_two_tailed(f64::NAN).is_nan());
    }
}
