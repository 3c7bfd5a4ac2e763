//! Approximate normality test
//!
//! This is a Jarque-Bera test, not Shapiro-Wilk: sample skewness and
//! excess kurtosis are combined into JB = n/6 · (S² + K²/4) and evaluated
//! against a chi-square distribution with 2 degrees of freedom. The
//! statistic field is still named `w_statistic` because downstream
//! consumers key on that field name; do not read it as a Shapiro-Wilk W.

use assay_core::SIGNIFICANCE_ALPHA;
use serde::{Deserialize, Serialize};

use crate::descriptive::{excess_kurtosis, skewness};
use crate::distributions::chi_square_survival;

/// Result of the approximate normality test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalityTest {
    /// The Jarque-Bera statistic, reported under its legacy field name
    pub w_statistic: f64,
    pub p_value: f64,
    /// `true` means normality is rejected at alpha
    pub significant: bool,
    pub skewness: f64,
    pub excess_kurtosis: f64,
    pub n: usize,
}

/// Jarque-Bera normality test with chi-square(2) significance.
pub fn normality_test(xs: &[f64]) -> NormalityTest {
    let n = xs.len();
    let s = skewness(xs);
    let k = excess_kurtosis(xs);
    let jb = n as f64 / 6.0 * (s * s + k * k / 4.0);
    let p = chi_square_survival(jb, 2.0);

    NormalityTest {
        w_statistic: jb,
        p_value: p,
        significant: p < SIGNIFICANCE_ALPHA,
        skewness: s,
        excess_kurtosis: k,
        n,
    }
}
