//! Deterministic analysis dispatcher
//!
//! Given an analysis-type label (an opaque string such as
//! `"independent t-test"` or `"exploratory summary"`) and a set of named
//! numeric columns, the dispatcher picks a deterministic column pair,
//! routes to the matching statistical routine, and packages the output
//! into a uniform [`ResultRecord`] of formatted parameters and metrics.
//!
//! Three guarantees drive the design:
//!
//! - **Determinism**: the same label and column set always select the
//!   same columns and produce numerically identical records. Column
//!   choice comes from a character-code hash of the label, so different
//!   labels tend to exercise different column pairs.
//! - **Totality**: [`dispatch`] never fails. Unrecognized labels fall to
//!   a generic numeric summary, and a column set with no numeric data
//!   produces an empty record that says so.
//! - **Stable routing**: labels are matched case-insensitively against
//!   keyword families in a fixed priority order ([`AnalysisKind`]); a
//!   family whose data precondition fails falls through to the next
//!   candidate rather than erroring.
//!
//! # Examples
//!
//! ```rust
//! use assay_dispatch::{dispatch, ColumnSet};
//!
//! let mut columns = ColumnSet::new();
//! columns.insert("reaction_time", vec![310.0, 295.0, 342.0, 301.0]).unwrap();
//! columns.insert("accuracy", vec![0.91, 0.88, 0.95, 0.97]).unwrap();
//!
//! let record = dispatch("pearson correlation", &columns);
//! assert!(record.metrics.iter().any(|m| m.name == "p-value"));
//! ```

pub mod columns;
pub mod dispatch;
pub mod interpret;
pub mod kind;
pub mod record;

pub use columns::{label_hash, ColumnSet, NamedColumn};
pub use dispatch::dispatch;
pub use kind::AnalysisKind;
pub use record::{Metric, Parameter, ResultRecord};

pub use assay_core::{Error, Result};
