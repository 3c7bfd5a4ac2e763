//! Label-to-routine dispatch and record assembly
//!
//! [`dispatch`] is total: every label and column set produces a
//! [`ResultRecord`]. Kinds are tried in [`AnalysisKind::ROUTING_ORDER`];
//! a matching kind whose data precondition fails falls through to the
//! next candidate, and the generic summary catches everything else.
//!
//! All numeric output passes through the assay-core formatting rules, so
//! every analysis renders consistent magnitudes. P-value metrics
//! highlight at alpha = 0.05; eta-squared, |r|, and R-squared metrics
//! highlight at their own documented thresholds.

use assay_core::{
    format_number_default, format_p_value, CORRELATION_STRONG, DEFAULT_CONFIDENCE,
    ETA_SQUARED_LARGE, R_SQUARED_SUBSTANTIAL,
};
use assay_engine::{
    confidence_interval, independent_t_test, linear_regression, max, mean, median, min,
    one_sample_t_test, one_way_anova, ordinal_ranks, pearson_correlation, sample_std, sem,
};
use log::debug;

use crate::columns::{ColumnSet, NamedColumn};
use crate::interpret::{cohens_d_label, correlation_label};
use crate::kind::AnalysisKind;
use crate::record::ResultRecord;

/// Route an analysis-type label over a column set to exactly one record.
///
/// Never errors and never panics; see the module docs for the routing
/// contract.
pub fn dispatch(label: &str, columns: &ColumnSet) -> ResultRecord {
    let Some((col1, col2)) = columns.select_pair(label) else {
        debug!("dispatch: empty column set for label {label:?}");
        return no_data_record();
    };

    for kind in AnalysisKind::ROUTING_ORDER {
        if kind.matches(label) && precondition_holds(kind, col1, col2) {
            debug!(
                "dispatch: label {label:?} -> {kind:?} over columns {:?}/{:?}",
                col1.name, col2.name
            );
            return run(kind, columns, col1, col2);
        }
    }

    if col1.is_empty() {
        debug!("dispatch: no usable numeric data for label {label:?}");
        return no_data_record();
    }
    debug!("dispatch: label {label:?} -> fallback summary over {:?}", col1.name);
    fallback_summary(col1)
}

/// Minimum paired length for the correlation/regression-shaped families;
/// below this the t-transform has no degrees of freedom
const MIN_PAIRED: usize = 3;

fn precondition_holds(kind: AnalysisKind, col1: &NamedColumn, col2: &NamedColumn) -> bool {
    let paired = col1.len().min(col2.len());
    match kind {
        AnalysisKind::SpearmanRank
        | AnalysisKind::OrdinalApprox
        | AnalysisKind::MultipleApprox
        | AnalysisKind::Correlation
        | AnalysisKind::Regression => paired >= MIN_PAIRED,
        AnalysisKind::MeanComparison => col1.len() >= 2,
        AnalysisKind::Anova => col1.len() >= MIN_PAIRED,
        AnalysisKind::Descriptive => !col1.is_empty(),
    }
}

fn run(
    kind: AnalysisKind,
    columns: &ColumnSet,
    col1: &NamedColumn,
    col2: &NamedColumn,
) -> ResultRecord {
    match kind {
        AnalysisKind::SpearmanRank => spearman_record(col1, col2),
        AnalysisKind::OrdinalApprox => ordinal_record(col1, col2),
        AnalysisKind::MultipleApprox => multiple_record(col1, col2),
        AnalysisKind::MeanComparison => mean_comparison_record(columns, col1, col2),
        AnalysisKind::Anova => anova_record(col1),
        AnalysisKind::Correlation => correlation_record(col1, col2),
        AnalysisKind::Regression => regression_record(col1, col2),
        AnalysisKind::Descriptive => descriptive_record(col1),
    }
}

fn no_data_record() -> ResultRecord {
    ResultRecord::new("No Numeric Data")
        .with_description("No numeric data was available for this analysis.")
}

fn truncated<'a>(col1: &'a NamedColumn, col2: &'a NamedColumn) -> (&'a [f64], &'a [f64]) {
    let n = col1.len().min(col2.len());
    (&col1.values[..n], &col2.values[..n])
}

fn spearman_record(col1: &NamedColumn, col2: &NamedColumn) -> ResultRecord {
    let (xs, ys) = truncated(col1, col2);
    let rx = ordinal_ranks(xs);
    let ry = ordinal_ranks(ys);
    // Equal lengths by construction
    let corr = pearson_correlation(&rx, &ry).expect("rank vectors share a length");

    let mut record = ResultRecord::new("Spearman Rank Correlation").with_description(format!(
        "Rank-based association between {} and {} (ordinal ranks, ties not corrected)",
        col1.name, col2.name
    ));
    record.push_parameter("Variables", format!("{} vs {}", col1.name, col2.name), None);
    record.push_parameter("Sample Size", xs.len().to_string(), None);
    record.push_metric(
        "Spearman's rho",
        format_number_default(corr.r),
        corr.r.abs() > CORRELATION_STRONG,
    );
    record.push_metric("p-value", format_p_value(corr.p_value), corr.significant);
    record
}

fn ordinal_record(col1: &NamedColumn, col2: &NamedColumn) -> ResultRecord {
    let (xs, ys) = truncated(col1, col2);
    let fit = linear_regression(xs, ys).expect("truncated slices share a length");

    // Placeholder arithmetic kept bit-for-bit for downstream compatibility:
    // this is a linear fit in costume, not an ordinal/logistic model.
    let pseudo_r_squared = 1.0 - (-2.0 * fit.r_squared).exp();
    let odds_ratio = (fit.slope * 0.1).exp();
    let wald = fit.t_statistic * fit.t_statistic;

    let mut record = ResultRecord::new("Ordinal Regression (Approximate)").with_description(
        format!(
            "Approximate ordinal fit of {} on {}; derived from a linear fit, not a true ordinal model",
            col2.name, col1.name
        ),
    );
    record.push_parameter("Predictor", col1.name.clone(), None);
    record.push_parameter("Outcome", col2.name.clone(), None);
    record.push_parameter("Sample Size", xs.len().to_string(), None);
    record.push_metric("Odds Ratio", format_number_default(odds_ratio), false);
    record.push_metric("Wald Statistic", format_number_default(wald), false);
    record.push_metric(
        "Pseudo R²",
        format_number_default(pseudo_r_squared),
        pseudo_r_squared > R_SQUARED_SUBSTANTIAL,
    );
    record.push_metric("p-value", format_p_value(fit.p_value), fit.significant);
    record
}

fn multiple_record(col1: &NamedColumn, col2: &NamedColumn) -> ResultRecord {
    let (xs, ys) = truncated(col1, col2);
    let fit = linear_regression(xs, ys).expect("truncated slices share a length");

    // Synthesized coefficients, kept bit-for-bit: the interaction and
    // second covariate are cosmetic placeholders, not fitted terms.
    let covariate_coefficient = fit.intercept * 0.1;
    let interaction_coefficient = fit.slope * 0.3 + 0.1;

    let mut record = ResultRecord::new("Multiple Regression (Approximate)").with_description(
        format!(
            "Approximate multi-term fit of {} on {}; interaction and covariate terms are synthesized, not fitted",
            col2.name, col1.name
        ),
    );
    record.push_parameter("Predictor", col1.name.clone(), None);
    record.push_parameter("Outcome", col2.name.clone(), None);
    record.push_parameter(
        "Coefficient (predictor)",
        format_number_default(fit.slope),
        None,
    );
    record.push_parameter(
        "Coefficient (covariate)",
        format_number_default(covariate_coefficient),
        None,
    );
    record.push_parameter(
        "Coefficient (interaction)",
        format_number_default(interaction_coefficient),
        None,
    );
    record.push_metric(
        "R²",
        format_number_default(fit.r_squared),
        fit.r_squared > R_SQUARED_SUBSTANTIAL,
    );
    record.push_metric("F Statistic", format_number_default(fit.f_statistic), false);
    record.push_metric("p-value", format_p_value(fit.p_value), fit.significant);
    record
}

fn mean_comparison_record(
    columns: &ColumnSet,
    col1: &NamedColumn,
    col2: &NamedColumn,
) -> ResultRecord {
    let two_sample = columns.len() >= 2 && col2.name != col1.name && col2.len() >= 2;

    if two_sample {
        let test = independent_t_test(&col1.values, &col2.values);
        let mut record = ResultRecord::new("Welch's t-Test").with_description(format!(
            "Mean comparison between {} and {} (unequal variances assumed)",
            col1.name, col2.name
        ));
        record.push_parameter("Groups", format!("{} vs {}", col1.name, col2.name), None);
        record.push_parameter(
            format!("Mean ({})", col1.name),
            format_number_default(test.mean_a),
            None,
        );
        record.push_parameter(
            format!("Mean ({})", col2.name),
            format_number_default(test.mean_b),
            None,
        );
        record.push_parameter(
            "Cohen's d",
            format_number_default(test.cohens_d),
            Some(cohens_d_label(test.cohens_d).to_string()),
        );
        record.push_metric("t Statistic", format_number_default(test.t_statistic), false);
        record.push_metric(
            "Degrees of Freedom",
            format_number_default(test.degrees_of_freedom),
            false,
        );
        record.push_metric("p-value", format_p_value(test.p_value), test.significant);
        record
    } else {
        let test = one_sample_t_test(&col1.values, 0.0);
        let mut record = ResultRecord::new("One-Sample t-Test").with_description(format!(
            "Mean of {} compared against zero",
            col1.name
        ));
        record.push_parameter("Column", col1.name.clone(), None);
        record.push_parameter("Mean", format_number_default(test.sample_mean), None);
        record.push_parameter("Sample Size", test.n.to_string(), None);
        record.push_metric("t Statistic", format_number_default(test.t_statistic), false);
        record.push_metric(
            "Degrees of Freedom",
            format_number_default(test.degrees_of_freedom),
            false,
        );
        record.push_metric("p-value", format_p_value(test.p_value), test.significant);
        record
    }
}

fn anova_record(col1: &NamedColumn) -> ResultRecord {
    // Terciles by rank of a single sorted column, not a real grouping
    // variable: contiguous slices of floor(n/3), floor(n/3), remainder.
    let mut sorted = col1.values.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let third = sorted.len() / 3;
    let groups: [&[f64]; 3] = [
        &sorted[..third],
        &sorted[third..2 * third],
        &sorted[2 * third..],
    ];
    let test = one_way_anova(&groups);

    let mut record = ResultRecord::new("One-Way ANOVA").with_description(format!(
        "Variance decomposition across tercile splits of {}",
        col1.name
    ));
    record.push_parameter("Column", col1.name.clone(), None);
    record.push_parameter("Groups", "3 (sorted terciles)".to_string(), None);
    record.push_parameter("Sample Size", col1.len().to_string(), None);
    record.push_metric("F Statistic", format_number_default(test.f_statistic), false);
    record.push_metric(
        "η²",
        format_number_default(test.eta_squared),
        test.eta_squared > ETA_SQUARED_LARGE,
    );
    record.push_metric("p-value", format_p_value(test.p_value), test.significant);
    record
}

fn correlation_record(col1: &NamedColumn, col2: &NamedColumn) -> ResultRecord {
    let (xs, ys) = truncated(col1, col2);
    let corr = pearson_correlation(xs, ys).expect("truncated slices share a length");

    let mut record = ResultRecord::new("Pearson Correlation").with_description(format!(
        "Linear association between {} and {}",
        col1.name, col2.name
    ));
    record.push_parameter("Variables", format!("{} vs {}", col1.name, col2.name), None);
    record.push_parameter("Sample Size", xs.len().to_string(), None);
    record.push_parameter(
        "Strength",
        format_number_default(corr.r.abs()),
        Some(correlation_label(corr.r).to_string()),
    );
    record.push_metric(
        "Pearson's r",
        format_number_default(corr.r),
        corr.r.abs() > CORRELATION_STRONG,
    );
    record.push_metric(
        "R²",
        format_number_default(corr.r_squared),
        corr.r_squared > R_SQUARED_SUBSTANTIAL,
    );
    record.push_metric("p-value", format_p_value(corr.p_value), corr.significant);
    record
}

fn regression_record(col1: &NamedColumn, col2: &NamedColumn) -> ResultRecord {
    let (xs, ys) = truncated(col1, col2);
    // Column 2 regressed on column 1
    let fit = linear_regression(xs, ys).expect("truncated slices share a length");

    let mut record = ResultRecord::new("Linear Regression").with_description(format!(
        "Least-squares fit of {} on {}",
        col2.name, col1.name
    ));
    record.push_parameter("Predictor", col1.name.clone(), None);
    record.push_parameter("Outcome", col2.name.clone(), None);
    record.push_parameter("Slope", format_number_default(fit.slope), None);
    record.push_parameter("Intercept", format_number_default(fit.intercept), None);
    record.push_parameter(
        "SE (slope)",
        format_number_default(fit.std_err_slope),
        None,
    );
    record.push_metric(
        "R²",
        format_number_default(fit.r_squared),
        fit.r_squared > R_SQUARED_SUBSTANTIAL,
    );
    record.push_metric("t Statistic", format_number_default(fit.t_statistic), false);
    record.push_metric("F Statistic", format_number_default(fit.f_statistic), false);
    record.push_metric("p-value", format_p_value(fit.p_value), fit.significant);
    record
}

fn descriptive_record(col1: &NamedColumn) -> ResultRecord {
    let xs = &col1.values;
    let (ci_low, ci_high) = confidence_interval(xs, DEFAULT_CONFIDENCE);
    let (lo, hi) = (min(xs), max(xs));

    let mut record = ResultRecord::new("Descriptive Statistics").with_description(format!(
        "Summary of {}",
        col1.name
    ));
    record.push_parameter("Column", col1.name.clone(), None);
    record.push_parameter("Sample Size", xs.len().to_string(), None);
    record.push_metric("Mean", format_number_default(mean(xs)), false);
    record.push_metric("Std Deviation", format_number_default(sample_std(xs, 1)), false);
    record.push_metric("SEM", format_number_default(sem(xs)), false);
    record.push_metric(
        "95% CI",
        format!(
            "[{}, {}]",
            format_number_default(ci_low),
            format_number_default(ci_high)
        ),
        false,
    );
    record.push_metric(
        "Range",
        format!(
            "{} to {}",
            format_number_default(lo),
            format_number_default(hi)
        ),
        false,
    );
    record
}

fn fallback_summary(col1: &NamedColumn) -> ResultRecord {
    let xs = &col1.values;
    let m = mean(xs);
    let sd = sample_std(xs, 1);
    // Division by a zero mean propagates; callers decide display
    let coefficient_of_variation = sd / m * 100.0;

    let mut record = ResultRecord::new("Data Summary").with_description(format!(
        "General numeric summary of {}",
        col1.name
    ));
    record.push_parameter("Column", col1.name.clone(), None);
    record.push_parameter("Sample Size", xs.len().to_string(), None);
    record.push_metric("Mean", format_number_default(m), false);
    record.push_metric("Std Deviation", format_number_default(sd), false);
    record.push_metric(
        "Coefficient of Variation (%)",
        format_number_default(coefficient_of_variation),
        false,
    );
    record.push_metric("Median", format_number_default(median(xs)), false);
    record.push_metric(
        "Range",
        format!(
            "{} to {}",
            format_number_default(min(xs)),
            format_number_default(max(xs))
        ),
        false,
    );
    record
}
