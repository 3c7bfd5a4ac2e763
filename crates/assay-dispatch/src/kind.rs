//! Analysis kinds and label routing
//!
//! Labels arrive as free-form strings from upstream planning code, so
//! routing is keyword-based: each kind owns a list of case-insensitive
//! substrings, tested in the fixed order of [`AnalysisKind::ROUTING_ORDER`].
//! The order is load-bearing: earlier families win ties (a label like
//! "rank correlation" routes to the Spearman family, not Pearson), and
//! downstream output depends on it staying put.

use serde::{Deserialize, Serialize};

/// The statistical routine families the dispatcher can route to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisKind {
    /// Rank-transform both columns, then Pearson on the ranks.
    /// An approximation of Spearman's rho: ties get ordinal ranks, so
    /// the coefficient is not tie-corrected.
    SpearmanRank,
    /// Linear fit dressed up with a pseudo-R², an approximate odds
    /// ratio, and a Wald-style statistic. Not a real ordinal/logistic
    /// fit; the arithmetic is a compatibility placeholder.
    OrdinalApprox,
    /// Two-column linear fit with synthesized interaction and covariate
    /// coefficients. Not a real multiple regression; the extra
    /// coefficients are cosmetic placeholders kept for compatibility.
    MultipleApprox,
    /// Welch's two-sample t-test, degrading to one-sample against zero
    /// when only one usable column exists
    MeanComparison,
    /// One-way ANOVA over terciles of a single sorted column
    Anova,
    /// Pearson correlation over the selected pair
    Correlation,
    /// Simple linear regression of column 2 on column 1
    Regression,
    /// Mean, spread, confidence interval, range
    Descriptive,
}

impl AnalysisKind {
    /// Priority order for label matching; first match with a satisfied
    /// data precondition wins
    pub const ROUTING_ORDER: [AnalysisKind; 8] = [
        AnalysisKind::SpearmanRank,
        AnalysisKind::OrdinalApprox,
        AnalysisKind::MultipleApprox,
        AnalysisKind::MeanComparison,
        AnalysisKind::Anova,
        AnalysisKind::Correlation,
        AnalysisKind::Regression,
        AnalysisKind::Descriptive,
    ];

    /// The case-insensitive substrings that route to this kind
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            AnalysisKind::SpearmanRank => &["spearman", "rank"],
            AnalysisKind::OrdinalApprox => &["ordinal", "logistic"],
            AnalysisKind::MultipleApprox => &["multiple", "interaction"],
            AnalysisKind::MeanComparison => &["t-test", "ttest", "mean_comparison"],
            AnalysisKind::Anova => &["anova", "variance"],
            AnalysisKind::Correlation => &["correlation", "pearson"],
            AnalysisKind::Regression => &["regression", "linear", "mixed"],
            AnalysisKind::Descriptive => &["descriptive", "exploratory", "summary"],
        }
    }

    /// Whether the label names this kind
    pub fn matches(self, label: &str) -> bool {
        let lowered = label.to_lowercase();
        self.keywords().iter().any(|kw| lowered.contains(kw))
    }

    /// First kind in routing order whose keywords appear in the label
    pub fn from_label(label: &str) -> Option<AnalysisKind> {
        Self::ROUTING_ORDER.into_iter().find(|kind| kind.matches(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        assert!(AnalysisKind::MeanComparison.matches("Independent T-Test"));
        assert!(AnalysisKind::Anova.matches("One-Way ANOVA"));
        assert!(AnalysisKind::SpearmanRank.matches("Spearman rho"));
    }

    #[test]
    fn test_priority_order() {
        // "rank" outranks "correlation" in the routing order
        assert_eq!(
            AnalysisKind::from_label("rank correlation"),
            Some(AnalysisKind::SpearmanRank)
        );
        // "variance" hits the ANOVA family before anything else matches
        assert_eq!(
            AnalysisKind::from_label("analysis of variance"),
            Some(AnalysisKind::Anova)
        );
        // "linear" alone is a regression
        assert_eq!(
            AnalysisKind::from_label("linear model"),
            Some(AnalysisKind::Regression)
        );
        // "logistic regression" routes to the ordinal family first
        assert_eq!(
            AnalysisKind::from_label("logistic regression"),
            Some(AnalysisKind::OrdinalApprox)
        );
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(AnalysisKind::from_label("frequency tabulation"), None);
    }

    #[test]
    fn test_every_kind_is_reachable() {
        for kind in AnalysisKind::ROUTING_ORDER {
            let label = kind.keywords()[0];
            assert_eq!(AnalysisKind::from_label(label), Some(kind));
        }
    }
}
