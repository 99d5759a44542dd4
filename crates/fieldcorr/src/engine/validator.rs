//! Input validation for field statistics.
//!
//! ## Purpose
//!
//! This module checks that labeled arrays can be reduced along a named axis
//! and that two arrays can be paired lane by lane. It also validates the
//! builder's configuration parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive (names, lengths, coordinates).
//! * **Loud mismatches**: Axes are compared exactly; nothing is aligned or resampled.
//!
//! ## Key concepts
//!
//! * **Axis alignment**: Both inputs hold the reduction axis with identical length and coordinates.
//! * **Pairing**: A 1-D input broadcasts against every lane of the other;
//!   otherwise the two layouts must be identical.
//!
//! ## Invariants
//!
//! * A successful pairing guarantees equal lane lengths on both sides.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or reorder input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, string::ToString};
#[cfg(feature = "std")]
use std::string::String;

// Internal dependencies
use crate::primitives::errors::FieldStatsError;
use crate::primitives::labeled::LabeledArray;

// ============================================================================
// Pairing
// ============================================================================

/// How the lanes of two inputs are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pairing {
    /// The first input is 1-D and is reused for every lane of the second.
    BroadcastFirst,

    /// The second input is 1-D and is reused for every lane of the first.
    BroadcastSecond,

    /// Both inputs share one layout; lane `k` pairs with lane `k`.
    Elementwise,
}

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for labeled arrays and configuration.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Axis Validation
    // ========================================================================

    /// Position of `axis` in `array`, or `AxisNotFound`.
    pub fn locate_axis<T>(array: &LabeledArray<T>, axis: &str) -> Result<usize, FieldStatsError> {
        array
            .axis_index(axis)
            .ok_or_else(|| FieldStatsError::AxisNotFound {
                axis: axis.to_string(),
            })
    }

    /// Validate that two arrays can be reduced together along `axis`.
    pub fn validate_pairing<T>(
        a: &LabeledArray<T>,
        b: &LabeledArray<T>,
        axis: &str,
    ) -> Result<Pairing, FieldStatsError> {
        // Check 1: Both inputs hold the axis
        let ia = Self::locate_axis(a, axis)?;
        let ib = Self::locate_axis(b, axis)?;

        // Check 2: Same axis length
        let (na, nb) = (a.shape()[ia], b.shape()[ib]);
        if na != nb {
            return Err(Self::mismatch(
                axis,
                format!("lengths differ ({na} vs {nb})"),
            ));
        }

        // Check 3: Same coordinate labels in the same order
        let (ca, cb) = (&a.all_coords()[ia], &b.all_coords()[ib]);
        if let Some(t) = (0..na).find(|&t| ca[t] != cb[t]) {
            return Err(Self::mismatch(
                axis,
                format!(
                    "coordinates differ at position {t} ({} vs {})",
                    ca[t], cb[t]
                ),
            ));
        }

        // Check 4: Remaining axes can be paired
        if a.ndim() == 1 {
            Ok(Pairing::BroadcastFirst)
        } else if b.ndim() == 1 {
            Ok(Pairing::BroadcastSecond)
        } else if a.same_layout(b) {
            Ok(Pairing::Elementwise)
        } else {
            Err(Self::mismatch(
                axis,
                format!(
                    "remaining axes differ ({:?} {:?} vs {:?} {:?})",
                    a.dims(),
                    a.shape(),
                    b.dims(),
                    b.shape()
                ),
            ))
        }
    }

    fn mismatch(axis: &str, reason: String) -> FieldStatsError {
        FieldStatsError::DimensionMismatch {
            axis: axis.to_string(),
            reason,
        }
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the reduction axis name.
    pub fn validate_axis_name(axis: &str) -> Result<(), FieldStatsError> {
        if axis.is_empty() {
            return Err(FieldStatsError::AxisNotFound {
                axis: String::new(),
            });
        }
        Ok(())
    }

    /// Validate a two-tailed significance level given in percent.
    pub fn validate_significance_level(level: f64) -> Result<(), FieldStatsError> {
        if !level.is_finite() || level <= 0.0 || level >= 100.0 {
            return Err(FieldStatsError::InvalidSignificanceLevel(level));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), FieldStatsError> {
        if let Some(param) = duplicate_param {
            return Err(FieldStatsError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
