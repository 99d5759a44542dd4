//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer maps accumulated lane moments to the statistics stored in a
//! result field:
//! - Pairwise statistics (covariance, correlation, regression, count)
//! - Single-array reductions (count, mean, variance, standard deviation)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Statistics of two aligned lanes.
pub mod pairwise;

/// Statistics of one lane.
pub mod reduce;
