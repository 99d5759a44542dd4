//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures and index arithmetic used
//! throughout the crate. It has zero internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Labeled multi-dimensional arrays.
pub mod labeled;

/// Lane geometry for named-axis reductions.
pub mod layout;

/// Shared error types.
pub mod errors;
