//! One-way analysis of variance

use assay_core::SIGNIFICANCE_ALPHA;
use serde::{Deserialize, Serialize};

use crate::descriptive::mean;
use crate::distributions::f_survival;

/// Result of a one-way ANOVA over k groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneWayAnova {
    pub f_statistic: f64,
    pub df_between: f64,
    pub df_within: f64,
    pub p_value: f64,
    pub significant: bool,
    /// Proportion of variance explained: SSB / (SSB + SSW)
    pub eta_squared: f64,
    pub ss_between: f64,
    pub ss_within: f64,
    pub grand_mean: f64,
    pub group_means: Vec<f64>,
}

/// Classic between/within sum-of-squares decomposition.
///
/// F = (SSB / (k−1)) / (SSW / (N−k)), p from the upper tail of the F
/// distribution, η² = SSB / (SSB + SSW). Degenerate layouts (k < 2, or
/// N = k so the within term has no degrees of freedom) propagate
/// `NaN`/`±inf` through the statistic.
pub fn one_way_anova(groups: &[&[f64]]) -> OneWayAnova {
    let k = groups.len();
    let n_total: usize = groups.iter().map(|g| g.len()).sum();

    let pooled: Vec<f64> = groups.iter().flat_map(|g| g.iter().copied()).collect();
    let grand_mean = mean(&pooled);
    let group_means: Vec<f64> = groups.iter().map(|g| mean(g)).collect();

    let ss_between: f64 = groups
        .iter()
        .zip(&group_means)
        .map(|(g, &gm)| g.len() as f64 * (gm - grand_mean).powi(2))
        .sum();
    let ss_within: f64 = groups
        .iter()
        .zip(&group_means)
        .map(|(g, &gm)| g.iter().map(|x| (x - gm).powi(2)).sum::<f64>())
        .sum();

    let df_between = k as f64 - 1.0;
    let df_within = n_total as f64 - k as f64;

    let ms_between = ss_between / df_between;
    let ms_within = ss_within / df_within;
    let f = ms_between / ms_within;

    let p = f_survival(f, df_between, df_within);
    let eta_squared = ss_between / (ss_between + ss_within);

    OneWayAnova {
        f_statistic: f,
        df_between,
        df_within,
        p_value: p,
        significant: p < SIGNIFICANCE_ALPHA,
        eta_squared,
        ss_between,
        ss_within,
        grand_mean,
        group_means,
    }
}
