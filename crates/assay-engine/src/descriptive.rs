//! Descriptive statistics
//!
//! All helpers here are total: empty or undersized samples degrade to a
//! documented sentinel value instead of panicking or erroring, so callers
//! can summarize whatever a participant uploaded without pre-checking.

use assay_core::DEFAULT_CONFIDENCE;

use crate::distributions::t_critical;

/// Arithmetic mean; 0.0 for an empty sample.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Sample standard deviation with `ddof` degrees-of-freedom correction.
///
/// Returns 0.0 when `len <= ddof`, so a singleton sample has zero spread
/// rather than an undefined one.
pub fn sample_std(xs: &[f64], ddof: usize) -> f64 {
    if xs.len() <= ddof {
        return 0.0;
    }
    let m = mean(xs);
    let ss = xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>();
    (ss / (xs.len() - ddof) as f64).sqrt()
}

/// Sample variance with `ddof` degrees-of-freedom correction.
pub fn variance(xs: &[f64], ddof: usize) -> f64 {
    let s = sample_std(xs, ddof);
    s * s
}

/// Median of the sample; averages the two middle values for even length.
/// 0.0 for an empty sample.
pub fn median(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    let mut sorted = xs.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Minimum value. An empty sample yields `+inf` (the fold's seed); callers
/// that need to reject empty input must check length themselves.
pub fn min(xs: &[f64]) -> f64 {
    xs.iter().fold(f64::INFINITY, |a, &b| a.min(b))
}

/// Maximum value. An empty sample yields `-inf` (the fold's seed).
pub fn max(xs: &[f64]) -> f64 {
    xs.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b))
}

/// Standard error of the mean: std / sqrt(n). 0.0 for an empty sample.
pub fn sem(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    sample_std(xs, 1) / (xs.len() as f64).sqrt()
}

/// Two-sided confidence interval for the mean.
///
/// mean ± t-critical(df = n−1) × SEM. Samples with fewer than two values
/// collapse to a zero-width interval at the mean.
pub fn confidence_interval(xs: &[f64], confidence: f64) -> (f64, f64) {
    let m = mean(xs);
    if xs.len() < 2 {
        return (m, m);
    }
    let t = t_critical(confidence, (xs.len() - 1) as f64);
    let margin = t * sem(xs);
    (m - margin, m + margin)
}

/// 95% confidence interval for the mean.
pub fn confidence_interval_default(xs: &[f64]) -> (f64, f64) {
    confidence_interval(xs, DEFAULT_CONFIDENCE)
}

/// Sample skewness from population central moments: m3 / m2^(3/2).
/// 0.0 for degenerate input (fewer than two values or zero variance).
pub fn skewness(xs: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(xs);
    let m2 = xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / n as f64;
    if m2 == 0.0 {
        return 0.0;
    }
    let m3 = xs.iter().map(|x| (x - m).powi(3)).sum::<f64>() / n as f64;
    m3 / m2.powf(1.5)
}

/// Excess kurtosis from population central moments: m4 / m2^2 − 3.
/// 0.0 for degenerate input.
pub fn excess_kurtosis(xs: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(xs);
    let m2 = xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / n as f64;
    if m2 == 0.0 {
        return 0.0;
    }
    let m4 = xs.iter().map(|x| (x - m).powi(4)).sum::<f64>() / n as f64;
    m4 / (m2 * m2) - 3.0
}
