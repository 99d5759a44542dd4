//! Student's t critical values for two-tailed tests.
//!
//! ## Purpose
//!
//! This module converts a two-tailed significance level (a percentage) and a
//! sample size into the critical value of the Student's t distribution used
//! to test a Pearson correlation coefficient.
//!
//! ## Design notes
//!
//! * **Quantiles**: Delegates the inverse CDF to `statrs`.
//! * **Degrees of freedom**: `sample_size - 2`, since a correlation consumes two.
//! * **Domain guards**: Inputs outside the distribution's domain are rejected
//!   before `statrs` sees them.
//!
//! ## Non-goals
//!
//! * This module does not provide one-tailed or non-central variants.

// External dependencies
use statrs::distribution::{ContinuousCDF, StudentsT};

// Internal dependencies
use crate::primitives::errors::FieldStatsError;

/// Smallest sample size that leaves a positive number of degrees of freedom.
pub const MIN_SAMPLE_SIZE: usize = 3;

/// Probability mass in each tail for a two-tailed test at `level` percent.
#[inline]
pub fn upper_tail_probability(level: f64) -> f64 {
    (1.0 - level / 100.0) / 2.0
}

/// Reject significance levels outside the open interval (0, 100).
pub fn check_level(level: f64) -> Result<(), FieldStatsError> {
    if !level.is_finite() || level <= 0.0 || level >= 100.0 {
        return Err(FieldStatsError::InvalidSignificanceLevel(level));
    }
    Ok(())
}

/// Quantile of the standard Student's t distribution with `df` degrees of freedom.
pub fn quantile(df: f64, p: f64) -> Result<f64, FieldStatsError> {
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| FieldStatsError::DistributionError(e.to_string()))?;
    Ok(dist.inverse_cdf(p))
}

/// Two-tailed critical value for a correlation from `sample_size` pairs.
pub fn critical_value(sample_size: usize, level: f64) -> Result<f64, FieldStatsError> {
    if sample_size < MIN_SAMPLE_SIZE {
        return Err(FieldStatsError::InvalidSampleSize {
            got: sample_size,
            min: MIN_SAMPLE_SIZE,
        });
    }
    check_level(level)?;

    let q = upper_tail_probability(level);
    quantile((sample_size - 2) as f64, 1.0 - q)
}
