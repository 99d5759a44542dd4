//! Error types for field statistics.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building
//! labeled arrays, pairing them along a reduction axis, and looking up
//! Student's t critical values.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending axis name or value.
//! * **Deferred**: Builder misuse is recorded and reported at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Layout errors**: Inconsistent shapes, coordinates, or axis names.
//! 2. **Alignment errors**: Reduction axes that differ between two inputs.
//! 3. **Distribution errors**: Degrees of freedom or levels outside the valid domain.
//!
//! ## Invariants
//!
//! * Degenerate numeric results (zero variance, too few samples) are never errors;
//!   they propagate as NaN/Inf in the output field.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for field statistics.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldStatsError {
    /// The reduction axis differs between the two inputs, or their remaining
    /// axes cannot be paired.
    DimensionMismatch {
        /// Name of the reduction axis.
        axis: String,
        /// What differed.
        reason: String,
    },

    /// The named axis is not present in an input array.
    AxisNotFound {
        /// Name of the missing axis.
        axis: String,
    },

    /// Labeled array metadata is inconsistent with its data.
    InvalidShape(String),

    /// Sample size leaves no degrees of freedom for the t distribution.
    InvalidSampleSize {
        /// Sample size provided.
        got: usize,
        /// Minimum accepted sample size.
        min: usize,
    },

    /// Significance level must be a percentage strictly between 0 and 100.
    InvalidSignificanceLevel(f64),

    /// The t distribution could not be constructed.
    DistributionError(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FieldStatsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DimensionMismatch { axis, reason } => {
                write!(f, "Dimension mismatch along '{axis}': {reason}")
            }
            Self::AxisNotFound { axis } => write!(f, "Axis '{axis}' not found"),
            Self::InvalidShape(msg) => write!(f, "Invalid shape: {msg}"),
            Self::InvalidSampleSize { got, min } => {
                write!(
                    f,
                    "Invalid sample size: {got} (must be at least {min} for a positive number of degrees of freedom)"
                )
            }
            Self::InvalidSignificanceLevel(level) => {
                write!(
                    f,
                    "Invalid significance level: {level} (must be > 0 and < 100)"
                )
            }
            Self::DistributionError(msg) => write!(f, "Distribution error: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for FieldStatsError {}
