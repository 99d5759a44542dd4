//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks:
//! - Skip-missing moment accumulators over one or two lanes
//! - Student's t quantiles for significance thresholds
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sample moments with missing-value exclusion.
pub mod moments;

/// Student's t critical values.
#[cfg(feature = "std")]
pub mod student_t;
