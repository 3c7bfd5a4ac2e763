//! Statistical computation engine and analysis dispatcher
//!
//! `assay-stats` bundles two coupled components behind one dependency:
//!
//! - [`engine`]: pure statistical routines over `&[f64]` samples:
//!   descriptive statistics, t-tests, one-way ANOVA, correlation, OLS
//!   regression, an approximate normality test, nonparametric tests, and
//!   density histograms.
//! - [`dispatcher`]: a deterministic mapping from an analysis-type label
//!   and a set of named numeric columns to exactly one formatted
//!   [`ResultRecord`].
//!
//! # Example
//!
//! ```rust
//! use assay_stats::{dispatch, ColumnSet};
//!
//! let columns = ColumnSet::from_pairs([
//!     ("pre_score", vec![61.0, 58.5, 63.2, 60.1, 59.4, 62.8]),
//!     ("post_score", vec![66.4, 64.0, 69.1, 65.2, 63.9, 68.5]),
//! ])
//! .unwrap();
//!
//! let record = dispatch("independent t-test", &columns);
//! assert_eq!(record.title, "Welch's t-Test");
//! ```

pub use assay_dispatch as dispatcher;
pub use assay_engine as engine;

pub use assay_core::{constants, format, Error, Result};
pub use assay_dispatch::{dispatch, AnalysisKind, ColumnSet, Metric, NamedColumn, Parameter, ResultRecord};
