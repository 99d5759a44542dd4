//! Output types for a full correlation analysis.
//!
//! ## Purpose
//!
//! This module defines `CorrelationMap`, which bundles every field produced
//! when a series is correlated against a grid: covariance, correlation,
//! per-point sample counts, t statistics and significance decisions.
//!
//! ## Design notes
//!
//! * **Shared layout**: All fields have the grid's axes minus the reduction axis.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * Every field has the same dims, shape and coordinates.
//! * `significant` is false wherever `correlation` is NaN.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Standard library
use std::string::String;
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::primitives::labeled::LabeledArray;
use crate::primitives::layout::unravel_index;

// ============================================================================
// Result Structure
// ============================================================================

/// Fields produced by correlating a series against a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMap<T> {
    /// Name of the reduction axis.
    pub axis: String,

    /// Two-tailed significance level in percent.
    pub significance_level: f64,

    /// Unbiased covariance at each point.
    pub covariance: LabeledArray<T>,

    /// Pearson correlation at each point.
    pub correlation: LabeledArray<T>,

    /// Number of pairwise-valid samples at each point.
    pub count: LabeledArray<T>,

    /// t statistic of the correlation at each point.
    pub t_statistic: LabeledArray<T>,

    /// Whether the correlation is significant at each point.
    pub significant: LabeledArray<bool>,
}

impl<T: Float> CorrelationMap<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of points in each field.
    pub fn points(&self) -> usize {
        self.correlation.len()
    }

    /// Number of significant points.
    pub fn significant_points(&self) -> usize {
        self.significant.data().iter().filter(|&&s| s).count()
    }

    /// Share of points that are significant (0 when the map is empty).
    pub fn significant_fraction(&self) -> f64 {
        if self.points() == 0 {
            return 0.0;
        }
        self.significant_points() as f64 / self.points() as f64
    }

    /// Correlation with the largest magnitude, ignoring NaN.
    pub fn max_abs_correlation(&self) -> Option<T> {
        self.correlation
            .data()
            .iter()
            .copied()
            .filter(|r| !r.is_nan())
            .max_by(|a, b| a.abs().partial_cmp(&b.abs()).unwrap_or(Ordering::Equal))
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for CorrelationMap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Reduced axis:       {}", self.axis)?;
        writeln!(f, "  Points:             {}", self.points())?;
        writeln!(f, "  Significance level: {}%", self.significance_level)?;
        writeln!(
            f,
            "  Significant points: {} ({:.1}%)",
            self.significant_points(),
            100.0 * self.significant_fraction()
        )?;
        if let Some(r) = self.max_abs_correlation() {
            writeln!(f, "  Max |correlation|:  {:.6}", r.abs())?;
        }
        writeln!(f)?;

        writeln!(f, "Correlation Map:")?;

        let dims = self.correlation.dims();
        for name in dims {
            write!(f, "{:>10} ", name)?;
        }
        writeln!(
            f,
            "{:>12} {:>12} {:>6} {:>10} {:>4}",
            "Covariance", "Correlation", "N", "t", "Sig"
        )?;
        writeln!(f, "{:-<width$}", "", width = 11 * dims.len() + 48)?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.points();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>10}", "...")?;
            }
            prev_idx = idx;

            let index = unravel_index(idx, self.correlation.shape());
            for (axis, &k) in index.iter().enumerate() {
                write!(f, "{:>10.2} ", self.correlation.all_coords()[axis][k])?;
            }
            writeln!(
                f,
                "{:>12.6} {:>12.6} {:>6} {:>10.4} {:>4}",
                self.covariance.data()[idx],
                self.correlation.data()[idx],
                self.count.data()[idx],
                self.t_statistic.data()[idx],
                if self.significant.data()[idx] { "*" } else { "" }
            )?;
        }

        Ok(())
    }
}
