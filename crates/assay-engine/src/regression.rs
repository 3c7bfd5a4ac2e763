//! Simple linear regression (ordinary least squares, one predictor)

use assay_core::{Error, Result, SIGNIFICANCE_ALPHA};
use serde::{Deserialize, Serialize};

use crate::descriptive::mean;
use crate::distributions::{f_survival, students_t_two_tailed};

/// Result of an ordinary least squares fit of y on x
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    /// Standard error of the slope, from residual mean squared error
    pub std_err_slope: f64,
    /// Standard error of the intercept
    pub std_err_intercept: f64,
    /// t statistic for the slope
    pub t_statistic: f64,
    /// Two-tailed p-value for the slope
    pub p_value: f64,
    pub significant: bool,
    /// Overall regression F statistic with (1, n−2) degrees of freedom
    pub f_statistic: f64,
    pub f_p_value: f64,
    pub n: usize,
}

/// Fit y = intercept + slope·x by least squares.
///
/// Standard errors come from the residual mean squared error
/// (SSE / (n−2)); the overall F statistic is MSR / MSE with
/// (1, n−2) degrees of freedom. A perfect fit drives the slope t and F
/// to `±inf` and their p-values to 0; zero predictor variance propagates
/// `NaN`. Equal lengths required.
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> Result<LinearRegression> {
    if xs.len() != ys.len() {
        return Err(Error::mismatched_length(xs.len(), ys.len()));
    }
    let n = xs.len();
    let n_f = n as f64;
    let (mx, my) = (mean(xs), mean(ys));

    let mut s_xx = 0.0;
    let mut s_xy = 0.0;
    let mut s_yy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let (dx, dy) = (x - mx, y - my);
        s_xx += dx * dx;
        s_xy += dx * dy;
        s_yy += dy * dy;
    }

    let slope = s_xy / s_xx;
    let intercept = my - slope * mx;

    // SSR = slope * Sxy; SSE is what the line leaves unexplained.
    let ss_regression = slope * s_xy;
    let ss_error = s_yy - ss_regression;
    let r_squared = ss_regression / s_yy;

    let df_error = n_f - 2.0;
    let mse = ss_error / df_error;

    let std_err_slope = (mse / s_xx).sqrt();
    let std_err_intercept = (mse * (1.0 / n_f + mx * mx / s_xx)).sqrt();

    let t = slope / std_err_slope;
    let p = students_t_two_tailed(t, df_error);

    let f = ss_regression / mse;
    let f_p = f_survival(f, 1.0, df_error);

    Ok(LinearRegression {
        slope,
        intercept,
        r_squared,
        std_err_slope,
        std_err_intercept,
        t_statistic: t,
        p_value: p,
        significant: p < SIGNIFICANCE_ALPHA,
        f_statistic: f,
        f_p_value: f_p,
        n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_perfect_line() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [2.0, 4.0, 6.0];
        let result = linear_regression(&xs, &ys).unwrap();

        assert_abs_diff_eq!(result.slope, 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(result.intercept, 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(result.r_squared, 1.0, epsilon = 1e-10);
        // Zero residuals: standard errors collapse, t and F blow up
        assert_abs_diff_eq!(result.std_err_slope, 0.0, epsilon = 1e-10);
        assert!(result.significant);
    }

    #[test]
    fn test_known_fit() {
        // y = 1 + 2x plus symmetric noise on the middle points
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [3.0, 5.5, 7.0, 8.5, 11.0];
        let result = linear_regression(&xs, &ys).unwrap();

        // Sxx = 10, Sxy = 19
        assert_abs_diff_eq!(result.slope, 1.9, epsilon = 1e-10);
        assert_abs_diff_eq!(result.intercept, 1.3, epsilon = 1e-10);
        assert!(result.r_squared > 0.98);
        assert_eq!(result.n, 5);
        // F and t agree for a single predictor: F = t^2
        assert_abs_diff_eq!(
            result.f_statistic,
            result.t_statistic * result.t_statistic,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_flat_response() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [5.0, 5.0, 5.0, 5.0];
        let result = linear_regression(&xs, &ys).unwrap();

        assert_abs_diff_eq!(result.slope, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.intercept, 5.0, epsilon = 1e-12);
        // 0/0: undefined explained-variance ratio propagates
        assert!(result.r_squared.is_nan());
        assert!(!result.significant);
    }

    #[test]
    fn test_zero_predictor_variance_propagates() {
        let xs = [2.0, 2.0, 2.0];
        let ys = [1.0, 2.0, 3.0];
        let result = linear_regression(&xs, &ys).unwrap();
        assert!(result.slope.is_nan());
    }

    #[test]
    fn test_length_mismatch() {
        let result = linear_regression(&[1.0], &[1.0, 2.0]);
        assert!(matches!(result, Err(Error::MismatchedLength { .. })));
    }

    #[test]
    fn test_intercept_standard_error() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [1.1, 2.9, 5.2, 6.8, 9.1];
        let result = linear_regression(&xs, &ys).unwrap();

        // Slope ~2, intercept ~1, both standard errors finite and positive
        assert_abs_diff_eq!(result.slope, 2.0, epsilon = 0.1);
        assert!(result.std_err_slope > 0.0);
        assert!(result.std_err_intercept > result.std_err_slope);
        assert!(result.significant);
    }
}
