//! Statistics of two aligned lanes.
//!
//! ## Purpose
//!
//! This module maps the joint moments of a `(series, grid)` lane pair to the
//! value stored in the result field: covariance, Pearson correlation,
//! regression slope, or the number of valid pairs.
//!
//! ## Design notes
//!
//! * **Shared moments**: All statistics read the same `PairedMoments`, so a
//!   missing sample is excluded consistently from means, counts and spreads.
//! * **Literal division**: Zero variance or too few samples yields NaN/Inf.
//!
//! ## Key concepts
//!
//! * **Covariance**: `sum(dx * dy) / (n - 1)`.
//! * **Correlation**: `cov(x, y) / (std(x) * std(y))`, both with ddof = 1.
//! * **Regression**: `cov(x, y) / var(x)`, the least-squares slope of `y` on `x`.
//!
//! ## Non-goals
//!
//! * This module does not iterate over lanes (see the engine layer).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::moments::{PairedMoments, to_float};

/// Statistic computed from each pair of lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairStatistic {
    /// Unbiased sample covariance.
    #[default]
    Covariance,

    /// Pearson correlation coefficient.
    Correlation,

    /// Least-squares slope of the second input on the first.
    Regression,

    /// Number of pairwise-valid samples.
    Count,
}

impl PairStatistic {
    /// Compute the statistic from accumulated joint moments.
    pub fn compute<T: Float>(&self, m: &PairedMoments<T>) -> T {
        match self {
            Self::Covariance => m.covariance(),
            Self::Correlation => m.covariance() / (m.std_x() * m.std_y()),
            Self::Regression => m.covariance() / m.variance_x(),
            Self::Count => to_float(m.count),
        }
    }
}
