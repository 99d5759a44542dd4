//! Statistics of a single lane.
//!
//! Missing samples are skipped. `Variance` and `StdDev` use ddof = 1, so a
//! lane with at most one valid sample reduces to NaN.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::moments::{Moments, to_float};

/// Reduction applied along the named axis of one array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    /// Number of non-missing samples.
    Count,

    /// Arithmetic mean.
    #[default]
    Mean,

    /// Unbiased sample variance.
    Variance,

    /// Unbiased sample standard deviation.
    StdDev,
}

impl Reduction {
    /// Compute the reduction from accumulated moments.
    pub fn compute<T: Float>(&self, m: &Moments<T>) -> T {
        match self {
            Self::Count => to_float(m.count),
            Self::Mean => m.mean,
            Self::Variance => m.variance(),
            Self::StdDev => m.std_dev(),
        }
    }
}
