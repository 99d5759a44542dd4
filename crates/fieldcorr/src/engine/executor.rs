//! Execution of named-axis reductions.
//!
//! ## Purpose
//!
//! This module walks every lane of the input arrays, accumulates their
//! moments, and assembles the result field with the reduction axis removed.
//!
//! ## Design notes
//!
//! * **Explicit loops**: Each lane is an indexed, strided walk over the
//!   row-major buffer; there is no implicit broadcasting.
//! * **One pass, many statistics**: `pair` keeps the per-lane moments so
//!   several statistics can be read from a single accumulation.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Lane**: The run of samples along the reduction axis at one grid point.
//! * **Field template**: Axes, shape and coordinates of the result.
//!
//! ## Invariants
//!
//! * Result values are stored in row-major order of the remaining axes.
//! * Inputs are validated before any lane is read.
//!
//! ## Non-goals
//!
//! * This module does not parallelize lanes.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::pairwise::PairStatistic;
use crate::algorithms::reduce::Reduction;
use crate::engine::validator::{Pairing, Validator};
use crate::math::moments::{Moments, PairedMoments};
use crate::primitives::errors::FieldStatsError;
use crate::primitives::labeled::LabeledArray;
use crate::primitives::layout::LaneLayout;

// ============================================================================
// Field Template
// ============================================================================

/// Layout of a field obtained by dropping one axis from a source array.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldTemplate {
    dims: Vec<String>,
    shape: Vec<usize>,
    coords: Vec<Vec<f64>>,
}

impl FieldTemplate {
    /// Template of `array` without the axis at position `axis`.
    pub fn without_axis<T>(array: &LabeledArray<T>, axis: usize) -> Self {
        let keep = |i: &usize| *i != axis;
        Self {
            dims: (0..array.ndim())
                .filter(keep)
                .map(|i| array.dims()[i].clone())
                .collect(),
            shape: (0..array.ndim())
                .filter(keep)
                .map(|i| array.shape()[i])
                .collect(),
            coords: (0..array.ndim())
                .filter(keep)
                .map(|i| array.all_coords()[i].clone())
                .collect(),
        }
    }

    /// Wrap one value per lane into a labeled field.
    pub fn build<U>(&self, data: Vec<U>) -> LabeledArray<U> {
        LabeledArray::from_parts(
            data,
            self.dims.clone(),
            self.shape.clone(),
            self.coords.clone(),
        )
    }
}

// ============================================================================
// Paired Field
// ============================================================================

/// Joint moments of every lane pair, ready to be turned into fields.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedField<T> {
    /// Layout of the result fields.
    pub template: FieldTemplate,

    /// Moments of each lane pair, in result order.
    pub moments: Vec<PairedMoments<T>>,
}

impl<T: Float> PairedField<T> {
    /// Field of `statistic` evaluated at every lane pair.
    pub fn field(&self, statistic: PairStatistic) -> LabeledArray<T> {
        self.template
            .build(self.moments.iter().map(|m| statistic.compute(m)).collect())
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs reductions along a named axis.
pub struct FieldExecutor;

impl FieldExecutor {
    /// Reduce one array along `axis`.
    pub fn reduce<T: Float>(
        array: &LabeledArray<T>,
        axis: &str,
        reduction: Reduction,
    ) -> Result<LabeledArray<T>, FieldStatsError> {
        let ia = Validator::locate_axis(array, axis)?;
        let layout = LaneLayout::along(array.shape(), ia);

        let data = (0..layout.lanes)
            .map(|k| reduction.compute(&Moments::from_lane(layout.lane(array.data(), k))))
            .collect();

        Ok(FieldTemplate::without_axis(array, ia).build(data))
    }

    /// Accumulate the joint moments of two arrays along `axis`.
    pub fn pair<T: Float>(
        a: &LabeledArray<T>,
        b: &LabeledArray<T>,
        axis: &str,
    ) -> Result<PairedField<T>, FieldStatsError> {
        let pairing = Validator::validate_pairing(a, b, axis)?;
        let ia = Validator::locate_axis(a, axis)?;
        let ib = Validator::locate_axis(b, axis)?;

        let (la, lb, template) = match pairing {
            Pairing::BroadcastFirst => (
                LaneLayout::contiguous(a.len()),
                LaneLayout::along(b.shape(), ib),
                FieldTemplate::without_axis(b, ib),
            ),
            Pairing::BroadcastSecond => (
                LaneLayout::along(a.shape(), ia),
                LaneLayout::contiguous(b.len()),
                FieldTemplate::without_axis(a, ia),
            ),
            Pairing::Elementwise => (
                LaneLayout::along(a.shape(), ia),
                LaneLayout::along(b.shape(), ib),
                FieldTemplate::without_axis(a, ia),
            ),
        };

        // A broadcast side has a single lane shared by every point.
        let lanes = match pairing {
            Pairing::BroadcastFirst => lb.lanes,
            Pairing::BroadcastSecond | Pairing::Elementwise => la.lanes,
        };
        let pick = |layout: &LaneLayout, k: usize| if layout.lanes == 1 { 0 } else { k };

        let moments = (0..lanes)
            .map(|k| {
                PairedMoments::from_lanes(
                    la.lane(a.data(), pick(&la, k)),
                    lb.lane(b.data(), pick(&lb, k)),
                )
            })
            .collect();

        Ok(PairedField { template, moments })
    }

    /// Reduce two arrays along `axis` into one pairwise statistic.
    pub fn reduce_pairs<T: Float>(
        a: &LabeledArray<T>,
        b: &LabeledArray<T>,
        axis: &str,
        statistic: PairStatistic,
    ) -> Result<LabeledArray<T>, FieldStatsError> {
        Ok(Self::pair(a, b, axis)?.field(statistic))
    }
}
