//! Rank-based nonparametric tests
//!
//! Mann-Whitney U, Wilcoxon signed-rank, and Kruskal-Wallis, the
//! distribution-free counterparts of the independent t-test, paired
//! t-test, and one-way ANOVA. P-values use the large-sample normal (or
//! chi-square) approximation without continuity correction; exact
//! small-sample tables are out of scope.

use assay_core::{Error, Result, SIGNIFICANCE_ALPHA};
use serde::{Deserialize, Serialize};

use crate::descriptive::median;
use crate::distributions::{chi_square_survival, normal_two_tailed};
use crate::ranks::fractional_ranks;

/// Result of a Mann-Whitney U test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MannWhitneyU {
    /// min(U1, U2)
    pub u_statistic: f64,
    pub p_value: f64,
    pub significant: bool,
    pub median_a: f64,
    pub median_b: f64,
    pub n_a: usize,
    pub n_b: usize,
}

/// Result of a Wilcoxon signed-rank test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WilcoxonSignedRank {
    /// min(W+, W-)
    pub w_statistic: f64,
    pub p_value: f64,
    pub significant: bool,
    pub median_before: f64,
    pub median_after: f64,
    /// Pairs remaining after zero differences are dropped
    pub n: usize,
}

/// Result of a Kruskal-Wallis test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KruskalWallis {
    pub h_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub significant: bool,
    pub num_groups: usize,
    pub n_total: usize,
}

/// Mann-Whitney U test over two independent samples.
///
/// Pooled midranks; U = min(U1, U2); two-tailed p from the normal
/// approximation.
pub fn mann_whitney_u(a: &[f64], b: &[f64]) -> MannWhitneyU {
    let (n_a, n_b) = (a.len(), b.len());
    let (na_f, nb_f) = (n_a as f64, n_b as f64);

    let pooled: Vec<f64> = a.iter().chain(b).copied().collect();
    let ranks = fractional_ranks(&pooled);
    let rank_sum_a: f64 = ranks[..n_a].iter().sum();

    let u1 = rank_sum_a - na_f * (na_f + 1.0) / 2.0;
    let u2 = na_f * nb_f - u1;
    let u = u1.min(u2);

    let mean_u = na_f * nb_f / 2.0;
    let sd_u = (na_f * nb_f * (na_f + nb_f + 1.0) / 12.0).sqrt();
    let z = (u - mean_u) / sd_u;
    let p = normal_two_tailed(z);

    MannWhitneyU {
        u_statistic: u,
        p_value: p,
        significant: p < SIGNIFICANCE_ALPHA,
        median_a: median(a),
        median_b: median(b),
        n_a,
        n_b,
    }
}

/// Wilcoxon signed-rank test over paired samples.
///
/// Zero differences are dropped before ranking; a pair set with no
/// nonzero differences is a null result (p = 1). Fails with
/// [`Error::MismatchedLength`] when the samples differ in length.
pub fn wilcoxon_signed_rank(before: &[f64], after: &[f64]) -> Result<WilcoxonSignedRank> {
    if before.len() != after.len() {
        return Err(Error::mismatched_length(before.len(), after.len()));
    }

    let diffs: Vec<f64> = before
        .iter()
        .zip(after)
        .map(|(x, y)| y - x)
        .filter(|d| *d != 0.0)
        .collect();
    let n = diffs.len();

    if n == 0 {
        return Ok(WilcoxonSignedRank {
            w_statistic: 0.0,
            p_value: 1.0,
            significant: false,
            median_before: median(before),
            median_after: median(after),
            n: 0,
        });
    }

    let abs_diffs: Vec<f64> = diffs.iter().map(|d| d.abs()).collect();
    let ranks = fractional_ranks(&abs_diffs);

    let w_plus: f64 = diffs
        .iter()
        .zip(&ranks)
        .filter(|(d, _)| **d > 0.0)
        .map(|(_, r)| r)
        .sum();
    let n_f = n as f64;
    let w_minus = n_f * (n_f + 1.0) / 2.0 - w_plus;
    let w = w_plus.min(w_minus);

    let mean_w = n_f * (n_f + 1.0) / 4.0;
    let sd_w = (n_f * (n_f + 1.0) * (2.0 * n_f + 1.0) / 24.0).sqrt();
    let z = (w - mean_w) / sd_w;
    let p = normal_two_tailed(z);

    Ok(WilcoxonSignedRank {
        w_statistic: w,
        p_value: p,
        significant: p < SIGNIFICANCE_ALPHA,
        median_before: median(before),
        median_after: median(after),
        n,
    })
}

/// Kruskal-Wallis rank test over k independent groups.
///
/// H over pooled midranks, p from the chi-square upper tail with k−1
/// degrees of freedom.
pub fn kruskal_wallis(groups: &[&[f64]]) -> KruskalWallis {
    let k = groups.len();
    let n_total: usize = groups.iter().map(|g| g.len()).sum();
    let n_f = n_total as f64;

    let pooled: Vec<f64> = groups.iter().flat_map(|g| g.iter().copied()).collect();
    let ranks = fractional_ranks(&pooled);

    let mut h = 0.0;
    let mut offset = 0;
    for g in groups {
        let rank_sum: f64 = ranks[offset..offset + g.len()].iter().sum();
        h += rank_sum * rank_sum / g.len() as f64;
        offset += g.len();
    }
    h = 12.0 / (n_f * (n_f + 1.0)) * h - 3.0 * (n_f + 1.0);

    let df = k as f64 - 1.0;
    let p = chi_square_survival(h, df);

    KruskalWallis {
        h_statistic: h,
        degrees_of_freedom: df,
        p_value: p,
        significant: p < SIGNIFICANCE_ALPHA,
        num_groups: k,
        n_total,
    }
}
