//! Named thresholds shared across the engine and dispatcher
//!
//! These values are business-meaningful: downstream rendering and export
//! code keys off the exact numbers, so they live here as constants rather
//! than inline literals.

/// Alpha level for all significance decisions (two-tailed)
pub const SIGNIFICANCE_ALPHA: f64 = 0.05;

/// P-values below this floor render as the literal string `"< 0.001"`
pub const P_VALUE_DISPLAY_FLOOR: f64 = 0.001;

/// Nonzero magnitudes below this threshold render in exponential notation
pub const SMALL_MAGNITUDE_THRESHOLD: f64 = 0.001;

/// Eta-squared above this is highlighted as a large effect
pub const ETA_SQUARED_LARGE: f64 = 0.14;

/// Absolute correlation above this is highlighted as strong
pub const CORRELATION_STRONG: f64 = 0.5;

/// R-squared above this is highlighted as substantial explained variance
pub const R_SQUARED_SUBSTANTIAL: f64 = 0.3;

/// Default confidence level for interval estimates
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Default decimal places for fixed-point rendering
pub const DEFAULT_DECIMALS: usize = 3;
