//! Probability density histogram binning
//!
//! Bins are equal-width over `[min, max]`; every bin is half-open
//! `[start, end)` except the last, which includes `max`. When no explicit
//! bin count is given the Freedman-Diaconis rule sizes the bins, clamped
//! to a display-friendly range.

use serde::{Deserialize, Serialize};

/// Fewest bins the automatic rule will produce
pub const MIN_BINS: usize = 5;

/// Most bins the automatic rule will produce
pub const MAX_BINS: usize = 50;

/// Bin count used when the interquartile range is degenerate
pub const FALLBACK_BINS: usize = 10;

/// A single histogram bin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Left edge (inclusive)
    pub start: f64,
    /// Right edge (exclusive, except for the last bin)
    pub end: f64,
    /// Midpoint of the bin
    pub center: f64,
    /// Number of values in this bin
    pub count: usize,
    /// count / (n * bin width); integrates to 1 over the histogram
    pub density: f64,
}

impl HistogramBin {
    fn new(start: f64, end: f64, count: usize, total: usize) -> Self {
        let width = end - start;
        let density = if width > 0.0 && total > 0 {
            count as f64 / (total as f64 * width)
        } else {
            0.0
        };
        Self {
            start,
            end,
            center: (start + end) / 2.0,
            count,
            density,
        }
    }
}

/// Bin count via the Freedman-Diaconis rule.
///
/// Width = 2·IQR·n^(−1/3) with quartiles read at sorted indices ⌊n/4⌋ and
/// ⌊3n/4⌋; count = ⌈range/width⌉ clamped to `[MIN_BINS, MAX_BINS]`.
/// A degenerate IQR (or width) falls back to [`FALLBACK_BINS`].
pub fn freedman_diaconis_bins(xs: &[f64]) -> usize {
    if xs.is_empty() {
        return FALLBACK_BINS;
    }
    let mut sorted = xs.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let q1 = sorted[n / 4];
    let q3 = sorted[(3 * n) / 4];
    let iqr = q3 - q1;

    let width = 2.0 * iqr * (n as f64).powf(-1.0 / 3.0);
    if width <= 0.0 {
        return FALLBACK_BINS;
    }

    let range = sorted[n - 1] - sorted[0];
    let bins = (range / width).ceil() as usize;
    bins.clamp(MIN_BINS, MAX_BINS)
}

/// Build a density histogram.
///
/// An omitted bin count invokes the Freedman-Diaconis rule. Empty input
/// yields no bins; an all-equal sample yields a single zero-width bin
/// holding every value (density 0 by the zero-width guard). Counts always
/// sum to the sample size.
pub fn histogram(xs: &[f64], bins: Option<usize>) -> Vec<HistogramBin> {
    if xs.is_empty() {
        return Vec::new();
    }
    let n = xs.len();
    let lo = xs.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let hi = xs.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

    if lo == hi {
        return vec![HistogramBin::new(lo, hi, n, n)];
    }

    let num_bins = bins.map(|b| b.max(1)).unwrap_or_else(|| freedman_diaconis_bins(xs));
    let width = (hi - lo) / num_bins as f64;

    let mut counts = vec![0usize; num_bins];
    for &x in xs {
        // Index arithmetic keeps bins half-open; the clamp folds max into
        // the last bin.
        let idx = (((x - lo) / width) as usize).min(num_bins - 1);
        counts[idx] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let start = lo + i as f64 * width;
            let end = if i == num_bins - 1 { hi } else { lo + (i + 1) as f64 * width };
            HistogramBin::new(start, end, count, n)
        })
        .collect()
}
