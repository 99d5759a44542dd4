//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer post-processes result fields: it turns a correlation field
//! and its per-point sample counts into t statistics and significance
//! decisions.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Correlation significance testing.
#[cfg(feature = "std")]
pub mod significance;
