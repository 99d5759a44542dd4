//! Skip-missing moment accumulators for a single lane.
//!
//! This module provides the sample statistics every field operation is built
//! from. NaN marks a missing sample and is excluded from both the sums and
//! the count.
//!
//! Both accumulators make two passes over a lane: the first collects
//! `(sum, count)` to form the mean, the second sums the de-meaned products.
//! Divisors use the unbiased `n - 1` estimator.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::layout::Lane;

// ============================================================================
// Single-Lane Moments
// ============================================================================

/// Count, mean and sum of squared deviations of one lane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments<T> {
    /// Number of non-missing samples.
    pub count: usize,

    /// Mean of the non-missing samples (NaN when `count == 0`).
    pub mean: T,

    /// Sum of squared deviations from the mean.
    pub m2: T,
}

impl<T: Float> Moments<T> {
    /// Accumulate the moments of a lane, skipping NaN.
    pub fn from_lane(lane: Lane<'_, T>) -> Self {
        let mut sum = T::zero();
        let mut count = 0usize;
        for v in lane.iter().filter(|v| !v.is_nan()) {
            sum = sum + v;
            count += 1;
        }

        let mean = sum / to_float::<T>(count);

        let mut m2 = T::zero();
        for v in lane.iter().filter(|v| !v.is_nan()) {
            let d = v - mean;
            m2 = m2 + d * d;
        }

        Self { count, mean, m2 }
    }

    /// Unbiased sample variance, `m2 / (n - 1)`.
    ///
    /// One valid sample gives `0 / 0`; none gives NaN.
    pub fn variance(&self) -> T {
        if self.count == 0 {
            return T::nan();
        }
        self.m2 / (to_float::<T>(self.count) - T::one())
    }

    /// Unbiased sample standard deviation.
    pub fn std_dev(&self) -> T {
        self.variance().sqrt()
    }
}

// ============================================================================
// Paired Moments
// ============================================================================

/// Joint moments of two aligned lanes over their pairwise-valid samples.
///
/// A time index contributes only when both lanes hold a value there, so a
/// gap in either input drops that index from every statistic of the pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairedMoments<T> {
    /// Number of indices where both lanes are present.
    pub count: usize,

    /// Mean of `x` over the valid pairs.
    pub mean_x: T,

    /// Mean of `y` over the valid pairs.
    pub mean_y: T,

    /// Sum of squared deviations of `x`.
    pub sxx: T,

    /// Sum of squared deviations of `y`.
    pub syy: T,

    /// Sum of cross products of deviations (the de-meaned dot product).
    pub sxy: T,
}

impl<T: Float> PairedMoments<T> {
    /// Accumulate the joint moments of two lanes of equal length.
    pub fn from_lanes(x: Lane<'_, T>, y: Lane<'_, T>) -> Self {
        debug_assert_eq!(x.len(), y.len(), "from_lanes: lane length mismatch");

        let valid = |t: &usize| !x.get(*t).is_nan() && !y.get(*t).is_nan();

        let mut sum_x = T::zero();
        let mut sum_y = T::zero();
        let mut count = 0usize;
        for t in (0..x.len()).filter(valid) {
            sum_x = sum_x + x.get(t);
            sum_y = sum_y + y.get(t);
            count += 1;
        }

        let n = to_float::<T>(count);
        let mean_x = sum_x / n;
        let mean_y = sum_y / n;

        let mut sxx = T::zero();
        let mut syy = T::zero();
        let mut sxy = T::zero();
        for t in (0..x.len()).filter(valid) {
            let dx = x.get(t) - mean_x;
            let dy = y.get(t) - mean_y;
            sxx = sxx + dx * dx;
            syy = syy + dy * dy;
            sxy = sxy + dx * dy;
        }

        Self {
            count,
            mean_x,
            mean_y,
            sxx,
            syy,
            sxy,
        }
    }

    /// Divide a sum of deviations by the unbiased divisor `n - 1`.
    #[inline]
    fn unbiased(&self, sum: T) -> T {
        if self.count == 0 {
            return T::nan();
        }
        sum / (to_float::<T>(self.count) - T::one())
    }

    /// Unbiased sample covariance.
    pub fn covariance(&self) -> T {
        self.unbiased(self.sxy)
    }

    /// Unbiased sample variance of `x`.
    pub fn variance_x(&self) -> T {
        self.unbiased(self.sxx)
    }

    /// Unbiased sample variance of `y`.
    pub fn variance_y(&self) -> T {
        self.unbiased(self.syy)
    }

    /// Unbiased sample standard deviation of `x`.
    pub fn std_x(&self) -> T {
        self.variance_x().sqrt()
    }

    /// Unbiased sample standard deviation of `y`.
    pub fn std_y(&self) -> T {
        self.variance_y().sqrt()
    }
}

// Convert a sample count to the working float type.
#[inline]
pub fn to_float<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}
