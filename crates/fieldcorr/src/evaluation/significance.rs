//! Two-tailed significance testing of correlation fields.
//!
//! ## Purpose
//!
//! This module decides, point by point, whether a Pearson correlation is
//! distinguishable from zero at a given two-tailed significance level.
//!
//! ## Design notes
//!
//! * **Per-point sample size**: Each point is tested against the critical
//!   value for its own count of valid pairs, so gaps in the data widen the
//!   threshold only where they occur.
//! * **Lookup reuse**: Critical values are computed once per distinct count
//!   within a single call.
//!
//! ## Key concepts
//!
//! * **t statistic**: `t = r * sqrt((n - 2) / (1 - r^2))`, distributed as
//!   Student's t with `n - 2` degrees of freedom under the null hypothesis.
//! * **Decision**: A point is significant when `|t|` exceeds the critical value.
//!
//! ## Invariants
//!
//! * Points with `n <= 2` or a NaN correlation are never significant.
//! * Correlation and count fields must share one layout.
//!
//! ## Non-goals
//!
//! * This module does not correct for multiple testing or field significance.
//! * This module does not account for serial correlation (effective sample size).

// Standard library
use std::collections::BTreeMap;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::student_t::{MIN_SAMPLE_SIZE, check_level, critical_value};
use crate::primitives::errors::FieldStatsError;
use crate::primitives::labeled::LabeledArray;

/// t statistic of a correlation `r` estimated from `n` pairs.
///
/// `|r| == 1` gives an infinite statistic; `n < 2` gives NaN. Round-off
/// that pushes `|r|` past 1 is treated as `|r| == 1`.
#[inline]
pub fn t_statistic<T: Float>(r: T, n: T) -> T {
    let two = T::one() + T::one();
    let r2 = (r * r).min(T::one());
    r * ((n - two) / (T::one() - r2)).sqrt()
}

/// Two-tailed correlation test at a fixed significance level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignificanceTest {
    /// Significance level in percent (e.g. 95.0).
    pub level: f64,
}

impl SignificanceTest {
    /// Create a test at `level` percent.
    pub fn new(level: f64) -> Self {
        Self { level }
    }

    /// Per-point t statistics of a correlation field.
    pub fn t_field<T: Float>(
        &self,
        correlation: &LabeledArray<T>,
        count: &LabeledArray<T>,
    ) -> Result<LabeledArray<T>, FieldStatsError> {
        Self::check_layout(correlation, count)?;

        let data: Vec<T> = correlation
            .data()
            .iter()
            .zip(count.data().iter())
            .map(|(&r, &n)| t_statistic(r, n))
            .collect();

        Ok(LabeledArray::from_parts(
            data,
            correlation.dims().to_vec(),
            correlation.shape().to_vec(),
            correlation.all_coords().to_vec(),
        ))
    }

    /// Per-point significance decisions of a correlation field.
    pub fn mask<T: Float>(
        &self,
        correlation: &LabeledArray<T>,
        count: &LabeledArray<T>,
    ) -> Result<LabeledArray<bool>, FieldStatsError> {
        Self::check_layout(correlation, count)?;
        check_level(self.level)?;

        let mut thresholds: BTreeMap<usize, f64> = BTreeMap::new();
        let mut data = Vec::with_capacity(correlation.len());

        for (&r, &n) in correlation.data().iter().zip(count.data().iter()) {
            let n_pairs = n.to_usize().unwrap_or(0);
            if r.is_nan() || n_pairs < MIN_SAMPLE_SIZE {
                data.push(false);
                continue;
            }

            let threshold = match thresholds.get(&n_pairs) {
                Some(&t) => t,
                None => {
                    let t = critical_value(n_pairs, self.level)?;
                    thresholds.insert(n_pairs, t);
                    t
                }
            };

            let t = t_statistic(r, n).abs().to_f64().unwrap_or(f64::NAN);
            data.push(t > threshold);
        }

        Ok(LabeledArray::from_parts(
            data,
            correlation.dims().to_vec(),
            correlation.shape().to_vec(),
            correlation.all_coords().to_vec(),
        ))
    }

    fn check_layout<T>(
        correlation: &LabeledArray<T>,
        count: &LabeledArray<T>,
    ) -> Result<(), FieldStatsError> {
        if correlation.same_layout(count) {
            return Ok(());
        }
        Err(FieldStatsError::DimensionMismatch {
            axis: correlation.dims().join(","),
            reason: format!(
                "correlation field has shape {:?}, count field has shape {:?}",
                correlation.shape(),
                count.shape()
            ),
        })
    }
}
