//! Pure statistical routines over in-memory samples
//!
//! This crate is the computational core of the assay workspace: descriptive
//! statistics, confidence intervals, t-tests, one-way ANOVA, Pearson
//! correlation, ordinary least squares regression, an approximate normality
//! test, rank transforms, rank-based nonparametric tests, and density
//! histogram binning.
//!
//! Every function is deterministic, synchronous, and side-effect free; a
//! call is a pure function of its `&[f64]` inputs. Callers are expected to
//! filter non-finite values upstream. Degenerate input degrades rather than
//! panics: empty samples produce documented sentinel values, and division
//! by zero inside a test statistic propagates as `NaN`/`±inf` in the result
//! instead of crashing.
//!
//! # Examples
//!
//! ```rust
//! use assay_engine::{independent_t_test, mean};
//!
//! let control = vec![12.1, 11.8, 12.5, 11.9, 12.3];
//! let treated = vec![14.2, 13.9, 14.8, 14.1, 14.5];
//!
//! let test = independent_t_test(&control, &treated);
//! assert!(test.significant);
//! assert!(mean(&control) < mean(&treated));
//! ```

pub mod anova;
pub mod correlation;
pub mod descriptive;
pub mod distributions;
pub mod histogram;
pub mod nonparametric;
pub mod normality;
pub mod ranks;
pub mod regression;
pub mod ttest;

pub use anova::{one_way_anova, OneWayAnova};
pub use correlation::{pearson_correlation, PearsonCorrelation};
pub use descriptive::{
    confidence_interval, excess_kurtosis, max, mean, median, min, sample_std, sem, skewness,
    variance,
};
pub use histogram::{freedman_diaconis_bins, histogram, HistogramBin};
pub use nonparametric::{
    kruskal_wallis, mann_whitney_u, wilcoxon_signed_rank, KruskalWallis, MannWhitneyU,
    WilcoxonSignedRank,
};
pub use normality::{normality_test, NormalityTest};
pub use ranks::{fractional_ranks, ordinal_ranks};
pub use regression::{linear_regression, LinearRegression};
pub use ttest::{
    independent_t_test, one_sample_t_test, paired_t_test, IndependentTTest, OneSampleTTest,
    PairedTTest,
};

pub use assay_core::{Error, Result};
