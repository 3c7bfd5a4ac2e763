//! Shared foundation for the assay statistics crates
//!
//! This crate holds the pieces every other assay crate agrees on:
//!
//! - A unified [`Error`] type and [`Result`] alias
//! - The business-meaningful thresholds (significance level, display
//!   floors, effect-size cutoffs) as named constants in [`constants`]
//! - The two numeric formatting rules every rendered value passes
//!   through, in [`format`]
//!
//! Keeping these in one place guarantees that every analysis renders
//! visually consistent magnitudes and flags significance against the
//! same alpha.

pub mod constants;
pub mod error;
pub mod format;

pub use constants::{
    CORRELATION_STRONG, DEFAULT_CONFIDENCE, DEFAULT_DECIMALS, ETA_SQUARED_LARGE,
    P_VALUE_DISPLAY_FLOOR, R_SQUARED_SUBSTANTIAL, SIGNIFICANCE_ALPHA,
    SMALL_MAGNITUDE_THRESHOLD,
};
pub use error::{Error, Result};
pub use format::{format_number, format_number_default, format_p_value};
