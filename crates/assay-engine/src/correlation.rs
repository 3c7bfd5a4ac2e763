//! Pearson product-moment correlation

use assay_core::{Error, Result, SIGNIFICANCE_ALPHA};
use serde::{Deserialize, Serialize};

use crate::descriptive::mean;
use crate::distributions::students_t_two_tailed;

/// Result of a Pearson correlation test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PearsonCorrelation {
    pub r: f64,
    pub r_squared: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub significant: bool,
    pub n: usize,
}

/// Pearson's r with t-transform significance.
///
/// r = cov(x, y) / (sd_x · sd_y); significance via
/// t = r·sqrt((n−2)/(1−r²)) with df = n−2. A perfect correlation drives
/// the t statistic to `±inf` and the p-value to 0. Zero-variance inputs
/// propagate `NaN` through r.
///
/// The samples must have equal length; pairwise truncation is the
/// caller's decision, not the engine's.
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> Result<PearsonCorrelation> {
    if xs.len() != ys.len() {
        return Err(Error::mismatched_length(xs.len(), ys.len()));
    }
    let n = xs.len();
    let (mx, my) = (mean(xs), mean(ys));

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let (dx, dy) = (x - mx, y - my);
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let r = cov / (var_x.sqrt() * var_y.sqrt());
    let r_squared = r * r;
    let df = n as f64 - 2.0;
    let t = r * (df / (1.0 - r_squared)).sqrt();
    let p = students_t_two_tailed(t, df);

    Ok(PearsonCorrelation {
        r,
        r_squared,
        t_statistic: t,
        degrees_of_freedom: df,
        p_value: p,
        significant: p < SIGNIFICANCE_ALPHA,
        n,
    })
}
