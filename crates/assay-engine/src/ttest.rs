//! One-sample, independent two-sample, and paired t-tests
//!
//! The independent test is Welch's (unequal variances assumed) but its
//! Cohen's d uses the pooled standard deviation. That pairing is
//! statistically inconsistent; it is kept deliberately because downstream
//! consumers rely on the exact numbers.

use assay_core::{Error, Result, SIGNIFICANCE_ALPHA};
use serde::{Deserialize, Serialize};

use crate::descriptive::{mean, sem, variance};
use crate::distributions::students_t_two_tailed;

/// Result of a one-sample t-test against a reference mean
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OneSampleTTest {
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub significant: bool,
    pub sample_mean: f64,
    pub reference_mean: f64,
    pub n: usize,
}

/// Result of Welch's independent two-sample t-test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndependentTTest {
    pub t_statistic: f64,
    /// Welch-Satterthwaite degrees of freedom
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub significant: bool,
    pub mean_a: f64,
    pub mean_b: f64,
    /// Pooled-standard-deviation Cohen's d (kept alongside Welch's t)
    pub cohens_d: f64,
    pub n_a: usize,
    pub n_b: usize,
}

/// Result of a paired t-test on element-wise differences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairedTTest {
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub significant: bool,
    pub mean_difference: f64,
    pub n: usize,
}

/// Classic Student's one-sample t-test against `reference`.
///
/// t = (mean − reference) / SEM with df = n − 1. A zero numerator over a
/// zero SEM yields t = 0 (identical data is a null result, not `NaN`); a
/// nonzero numerator over a zero SEM propagates as `±inf`.
pub fn one_sample_t_test(xs: &[f64], reference: f64) -> OneSampleTTest {
    let n = xs.len();
    let m = mean(xs);
    let se = sem(xs);
    let diff = m - reference;
    let t = if diff == 0.0 && se == 0.0 { 0.0 } else { diff / se };
    let df = n as f64 - 1.0;
    let p = students_t_two_tailed(t, df);

    OneSampleTTest {
        t_statistic: t,
        degrees_of_freedom: df,
        p_value: p,
        significant: p < SIGNIFICANCE_ALPHA,
        sample_mean: m,
        reference_mean: reference,
        n,
    }
}

/// Welch's independent two-sample t-test.
///
/// Standard error is sqrt(v1/n1 + v2/n2) and degrees of freedom come from
/// the Welch-Satterthwaite equation. Zero-variance groups propagate
/// `NaN`/`±inf` through the statistic rather than erroring.
pub fn independent_t_test(a: &[f64], b: &[f64]) -> IndependentTTest {
    let (n_a, n_b) = (a.len(), b.len());
    let (m_a, m_b) = (mean(a), mean(b));
    let (v_a, v_b) = (variance(a, 1), variance(b, 1));
    let (na_f, nb_f) = (n_a as f64, n_b as f64);

    let se_sq_a = v_a / na_f;
    let se_sq_b = v_b / nb_f;
    let se = (se_sq_a + se_sq_b).sqrt();
    let t = (m_a - m_b) / se;

    // Welch-Satterthwaite
    let df = (se_sq_a + se_sq_b).powi(2)
        / (se_sq_a.powi(2) / (na_f - 1.0) + se_sq_b.powi(2) / (nb_f - 1.0));

    let p = students_t_two_tailed(t, df);

    // Pooled SD for the effect size, not Welch's denominator.
    let pooled_sd =
        (((na_f - 1.0) * v_a + (nb_f - 1.0) * v_b) / (na_f + nb_f - 2.0)).sqrt();
    let cohens_d = (m_a - m_b) / pooled_sd;

    IndependentTTest {
        t_statistic: t,
        degrees_of_freedom: df,
        p_value: p,
        significant: p < SIGNIFICANCE_ALPHA,
        mean_a: m_a,
        mean_b: m_b,
        cohens_d,
        n_a,
        n_b,
    }
}

/// Paired t-test: a one-sample test on element-wise differences.
///
/// Fails with [`Error::MismatchedLength`] when the samples differ in
/// length; paired data must never be silently truncated.
pub fn paired_t_test(before: &[f64], after: &[f64]) -> Result<PairedTTest> {
    if before.len() != after.len() {
        return Err(Error::mismatched_length(before.len(), after.len()));
    }
    let diffs: Vec<f64> = before.iter().zip(after).map(|(x, y)| x - y).collect();
    let inner = one_sample_t_test(&diffs, 0.0);

    Ok(PairedTTest {
        t_statistic: inner.t_statistic,
        degrees_of_freedom: inner.degrees_of_freedom,
        p_value: inner.p_value,
        significant: inner.significant,
        mean_difference: inner.sample_mean,
        n: before.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_one_sample_basic() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let result = one_sample_t_test(&xs, 0.0);

        // t = 3 / (sqrt(2.5)/sqrt(5)) = 4.2426
        assert_abs_diff_eq!(result.t_statistic, 4.2426, epsilon = 1e-3);
        assert_abs_diff_eq!(result.degrees_of_freedom, 4.0);
        assert_abs_diff_eq!(result.p_value, 0.0132, epsilon = 1e-3);
        assert!(result.significant);
        assert_eq!(result.n, 5);
    }

    #[test]
    fn test_one_sample_at_reference() {
        let xs = [1.0, 2.0, 3.0];
        let result = one_sample_t_test(&xs, 2.0);
        assert_abs_diff_eq!(result.t_statistic, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.p_value, 1.0, epsilon = 1e-12);
        assert!(!result.significant);
    }

    #[test]
    fn test_one_sample_zero_spread_nonzero_diff() {
        let xs = [2.0, 2.0, 2.0];
        let result = one_sample_t_test(&xs, 0.0);
        assert!(result.t_statistic.is_infinite());
        assert_eq!(result.p_value, 0.0);
    }

    #[test]
    fn test_independent_separated_groups() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [10.0, 11.0, 12.0, 13.0, 14.0];
        let result = independent_t_test(&a, &b);

        // Equal variances of 2.5: se = 1, t = -9, Welch df = 8
        assert_abs_diff_eq!(result.t_statistic, -9.0, epsilon = 1e-10);
        assert_abs_diff_eq!(result.degrees_of_freedom, 8.0, epsilon = 1e-10);
        assert!(result.p_value < 0.001);
        assert!(result.significant);
        // Pooled sd = sqrt(2.5), d = -9 / sqrt(2.5)
        assert_abs_diff_eq!(result.cohens_d, -9.0 / 2.5f64.sqrt(), epsilon = 1e-10);
        assert_eq!((result.n_a, result.n_b), (5, 5));
    }

    #[test]
    fn test_independent_unequal_sizes_welch_df() {
        let a = [1.0, 2.0, 3.0];
        let b = [2.0, 4.0, 6.0, 8.0, 10.0];
        let result = independent_t_test(&a, &b);

        // Welch df must fall strictly between min(n)-1 and n1+n2-2
        assert!(result.degrees_of_freedom > 2.0);
        assert!(result.degrees_of_freedom < 6.0);
    }

    #[test]
    fn test_independent_zero_variance_propagates() {
        let a = [3.0, 3.0, 3.0];
        let b = [5.0, 5.0, 5.0];
        let result = independent_t_test(&a, &b);
        // 2/0 is -inf; the engine reports it rather than crashing
        assert!(result.t_statistic.is_infinite());
    }

    #[test]
    fn test_paired_identical_is_null() {
        let before = [1.0, 2.0, 3.0];
        let after = [1.0, 2.0, 3.0];
        let result = paired_t_test(&before, &after).unwrap();

        assert_abs_diff_eq!(result.t_statistic, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.p_value, 1.0, epsilon = 1e-9);
        assert!(!result.significant);
        assert_abs_diff_eq!(result.mean_difference, 0.0);
    }

    #[test]
    fn test_paired_shift() {
        let before = [10.0, 12.0, 14.0, 16.0];
        let after = [11.0, 13.0, 15.0, 17.0];
        let result = paired_t_test(&before, &after).unwrap();

        // Constant -1 differences: zero spread, infinite t
        assert_abs_diff_eq!(result.mean_difference, -1.0);
        assert!(result.t_statistic.is_infinite() && result.t_statistic < 0.0);
        assert_eq!(result.p_value, 0.0);
    }

    #[test]
    fn test_paired_noisy_shift() {
        let before = [10.0, 12.0, 14.0, 16.0, 18.0];
        let after = [12.5, 13.0, 16.5, 17.0, 21.0];
        let result = paired_t_test(&before, &after).unwrap();
        assert!(result.t_statistic < 0.0);
        assert_eq!(result.degrees_of_freedom, 4.0);
    }

    #[test]
    fn test_paired_length_mismatch_is_hard_error() {
        let result = paired_t_test(&[1.0, 2.0], &[1.0, 2.0, 3.0]);
        match result {
            Err(Error::MismatchedLength { left, right }) => {
                assert_eq!(left, 2);
                assert_eq!(right, 3);
            }
            other => panic!("Expected MismatchedLength, got {other:?}"),
        }
    }
}
