//! High-level API for field statistics.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: free functions for each
//! statistic, and a fluent builder that fixes the reduction axis and the
//! significance level once for a whole analysis.
//!
//! ## Design notes
//!
//! * **Explicit defaults**: The reduction axis defaults to [`DEFAULT_AXIS`]
//!   and the significance level to [`DEFAULT_SIGNIFICANCE_LEVEL`].
//! * **Validated**: Builder parameters are validated when `.build()` is called.
//! * **Type-Safe**: Array statistics are generic over `Float` types.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`FieldStatsBuilder`] via `FieldStats::new()`.
//! 2. Chain configuration methods (`.axis()`, `.significance_level()`).
//! 3. Call `.build()` to obtain a [`FieldStatsModel`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::pairwise::PairStatistic;
use crate::algorithms::reduce::Reduction;
use crate::engine::executor::FieldExecutor;
use crate::engine::validator::Validator;
#[cfg(feature = "std")]
use crate::evaluation::significance::SignificanceTest;
#[cfg(feature = "std")]
use crate::math::student_t::critical_value;

// Publicly re-exported types
#[cfg(feature = "std")]
pub use crate::engine::output::CorrelationMap;
pub use crate::primitives::errors::FieldStatsError;
pub use crate::primitives::labeled::LabeledArray;

/// Reduction axis used when none is configured.
pub const DEFAULT_AXIS: &str = "time";

/// Two-tailed significance level (percent) used when none is configured.
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 95.0;

// ============================================================================
// Pairwise Statistics
// ============================================================================

/// Unbiased covariance between `series` and `grid` along `axis`.
///
/// At each remaining coordinate both inputs are de-meaned over the samples
/// where both are present, their products summed, and the sum divided by
/// `n - 1` for that point's own valid count `n`. Points with fewer than two
/// valid pairs yield NaN.
///
/// # Errors
///
/// * [`FieldStatsError::AxisNotFound`] if either input lacks `axis`.
/// * [`FieldStatsError::DimensionMismatch`] if the axis length or
///   coordinates differ, or the remaining axes cannot be paired.
pub fn covariance<T: Float>(
    series: &LabeledArray<T>,
    grid: &LabeledArray<T>,
    axis: &str,
) -> Result<LabeledArray<T>, FieldStatsError> {
    FieldExecutor::reduce_pairs(series, grid, axis, PairStatistic::Covariance)
}

/// Pearson correlation between `series` and `grid` along `axis`.
///
/// Covariance divided by the product of both sample standard deviations
/// (ddof = 1), all over the same pairwise-valid samples. Zero spread at a
/// point yields NaN or Inf there.
///
/// # Errors
///
/// Same as [`covariance`].
pub fn correlation<T: Float>(
    series: &LabeledArray<T>,
    grid: &LabeledArray<T>,
    axis: &str,
) -> Result<LabeledArray<T>, FieldStatsError> {
    FieldExecutor::reduce_pairs(series, grid, axis, PairStatistic::Correlation)
}

/// Least-squares slope of `grid` regressed on `series` along `axis`.
///
/// # Errors
///
/// Same as [`covariance`].
pub fn regression<T: Float>(
    series: &LabeledArray<T>,
    grid: &LabeledArray<T>,
    axis: &str,
) -> Result<LabeledArray<T>, FieldStatsError> {
    FieldExecutor::reduce_pairs(series, grid, axis, PairStatistic::Regression)
}

/// Number of indices along `axis` where both inputs are present.
///
/// # Errors
///
/// Same as [`covariance`].
pub fn pair_count<T: Float>(
    series: &LabeledArray<T>,
    grid: &LabeledArray<T>,
    axis: &str,
) -> Result<LabeledArray<T>, FieldStatsError> {
    FieldExecutor::reduce_pairs(series, grid, axis, PairStatistic::Count)
}

// ============================================================================
// Single-Array Reductions
// ============================================================================

/// Number of non-missing values along `axis`.
pub fn count<T: Float>(
    array: &LabeledArray<T>,
    axis: &str,
) -> Result<LabeledArray<T>, FieldStatsError> {
    FieldExecutor::reduce(array, axis, Reduction::Count)
}

/// Mean of the non-missing values along `axis`.
pub fn mean<T: Float>(
    array: &LabeledArray<T>,
    axis: &str,
) -> Result<LabeledArray<T>, FieldStatsError> {
    FieldExecutor::reduce(array, axis, Reduction::Mean)
}

/// Unbiased variance (ddof = 1) of the non-missing values along `axis`.
pub fn variance<T: Float>(
    array: &LabeledArray<T>,
    axis: &str,
) -> Result<LabeledArray<T>, FieldStatsError> {
    FieldExecutor::reduce(array, axis, Reduction::Variance)
}

/// Unbiased standard deviation (ddof = 1) of the non-missing values along `axis`.
pub fn std_dev<T: Float>(
    array: &LabeledArray<T>,
    axis: &str,
) -> Result<LabeledArray<T>, FieldStatsError> {
    FieldExecutor::reduce(array, axis, Reduction::StdDev)
}

// ============================================================================
// Significance
// ============================================================================

/// Two-tailed Student's t critical value for a correlation from `sample_size` pairs.
///
/// `significance_level` is a percentage, e.g. [`DEFAULT_SIGNIFICANCE_LEVEL`].
/// The quantile is taken at `1 - (1 - level / 100) / 2` with
/// `sample_size - 2` degrees of freedom.
///
/// # Errors
///
/// * [`FieldStatsError::InvalidSampleSize`] if `sample_size <= 2`.
/// * [`FieldStatsError::InvalidSignificanceLevel`] if the level is not in (0, 100).
#[cfg(feature = "std")]
pub fn t_critical(sample_size: usize, significance_level: f64) -> Result<f64, FieldStatsError> {
    critical_value(sample_size, significance_level)
}

/// Per-point two-tailed significance of a correlation field.
///
/// `count` holds the number of valid pairs behind each correlation, as
/// returned by [`pair_count`].
#[cfg(feature = "std")]
pub fn significance<T: Float>(
    correlation: &LabeledArray<T>,
    count: &LabeledArray<T>,
    significance_level: f64,
) -> Result<LabeledArray<bool>, FieldStatsError> {
    SignificanceTest::new(significance_level).mask(correlation, count)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a configured field analysis.
#[derive(Debug, Clone, Default)]
pub struct FieldStatsBuilder {
    /// Name of the reduction axis.
    pub axis: Option<String>,

    /// Two-tailed significance level in percent.
    pub significance_level: Option<f64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl FieldStatsBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            axis: None,
            significance_level: None,
            duplicate_param: None,
        }
    }

    /// Set the name of the reduction axis (default `"time"`).
    pub fn axis(mut self, axis: &str) -> Self {
        if self.axis.is_some() {
            self.duplicate_param = Some("axis");
        }
        self.axis = Some(axis.to_string());
        self
    }

    /// Set the two-tailed significance level in percent (default 95.0).
    pub fn significance_level(mut self, level: f64) -> Self {
        if self.significance_level.is_some() {
            self.duplicate_param = Some("significance_level");
        }
        self.significance_level = Some(level);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<FieldStatsModel, FieldStatsError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let axis = self.axis.unwrap_or_else(|| DEFAULT_AXIS.to_string());
        Validator::validate_axis_name(&axis)?;

        let significance_level = self
            .significance_level
            .unwrap_or(DEFAULT_SIGNIFICANCE_LEVEL);
        Validator::validate_significance_level(significance_level)?;

        Ok(FieldStatsModel {
            axis,
            significance_level,
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// Field statistics bound to one reduction axis and significance level.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStatsModel {
    axis: String,
    significance_level: f64,
}

impl FieldStatsModel {
    /// Name of the reduction axis.
    pub fn axis(&self) -> &str {
        &self.axis
    }

    /// Two-tailed significance level in percent.
    pub fn significance_level(&self) -> f64 {
        self.significance_level
    }

    /// Covariance along the configured axis. See [`covariance`].
    pub fn covariance<T: Float>(
        &self,
        series: &LabeledArray<T>,
        grid: &LabeledArray<T>,
    ) -> Result<LabeledArray<T>, FieldStatsError> {
        covariance(series, grid, &self.axis)
    }

    /// Correlation along the configured axis. See [`correlation`].
    pub fn correlation<T: Float>(
        &self,
        series: &LabeledArray<T>,
        grid: &LabeledArray<T>,
    ) -> Result<LabeledArray<T>, FieldStatsError> {
        correlation(series, grid, &self.axis)
    }

    /// Regression slope along the configured axis. See [`regression`].
    pub fn regression<T: Float>(
        &self,
        series: &LabeledArray<T>,
        grid: &LabeledArray<T>,
    ) -> Result<LabeledArray<T>, FieldStatsError> {
        regression(series, grid, &self.axis)
    }

    /// Critical value at the configured level. See [`t_critical`].
    #[cfg(feature = "std")]
    pub fn t_critical(&self, sample_size: usize) -> Result<f64, FieldStatsError> {
        t_critical(sample_size, self.significance_level)
    }

    /// Correlate `series` against `grid` and test every point for significance.
    #[cfg(feature = "std")]
    pub fn analyze<T: Float>(
        &self,
        series: &LabeledArray<T>,
        grid: &LabeledArray<T>,
    ) -> Result<CorrelationMap<T>, FieldStatsError> {
        let paired = FieldExecutor::pair(series, grid, &self.axis)?;

        let covariance = paired.field(PairStatistic::Covariance);
        let correlation = paired.field(PairStatistic::Correlation);
        let count = paired.field(PairStatistic::Count);

        let test = SignificanceTest::new(self.significance_level);
        let t_statistic = test.t_field(&correlation, &count)?;
        let significant = test.mask(&correlation, &count)?;

        Ok(CorrelationMap {
            axis: self.axis.clone(),
            significance_level: self.significance_level,
            covariance,
            correlation,
            count,
            t_statistic,
            significant,
        })
    }
}
