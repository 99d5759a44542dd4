//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates reductions: it validates and pairs the inputs,
//! walks their lanes, and assembles the result fields.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Lane-by-lane execution of reductions.
pub mod executor;

/// Bundled analysis results.
#[cfg(feature = "std")]
pub mod output;

/// Input and configuration validation.
pub mod validator;
