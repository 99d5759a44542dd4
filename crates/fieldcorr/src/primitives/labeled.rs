//! Labeled multi-dimensional arrays.
//!
//! ## Purpose
//!
//! This module defines `LabeledArray`, the container every field statistic
//! consumes and produces: a dense row-major buffer plus an ordered list of
//! named axes, each carrying its coordinate labels.
//!
//! ## Design notes
//!
//! * **Immutable**: Arrays are validated once at construction and never mutated in place.
//! * **Generic values**: Values are generic; coordinates are always `f64` labels.
//! * **Missing values**: For `Float` values, NaN marks a missing sample.
//!
//! ## Key concepts
//!
//! * **Series**: A 1-D array whose only axis is the reduction axis.
//! * **Grid**: An array holding the reduction axis plus spatial axes.
//! * **Field**: A reduction result, with the reduction axis removed.
//!
//! ## Invariants
//!
//! * `dims`, `shape` and `coords` have the same rank.
//! * `coords[i].len() == shape[i]` for every axis.
//! * `data.len()` equals the product of `shape` (1 for a 0-D array).
//! * Axis names are unique.
//!
//! ## Non-goals
//!
//! * This module does not resample, align or interpolate coordinates.
//! * This module does not perform reductions (see the engine layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, string::ToString, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FieldStatsError;
use crate::primitives::layout::{ravel_index, unravel_index};

// ============================================================================
// Labeled Array
// ============================================================================

/// N-dimensional array with named, coordinate-tagged axes.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledArray<T> {
    data: Vec<T>,
    dims: Vec<String>,
    shape: Vec<usize>,
    coords: Vec<Vec<f64>>,
}

impl<T> LabeledArray<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Build an array from a row-major buffer, axis names, shape and coordinates.
    pub fn new(
        data: Vec<T>,
        dims: &[&str],
        shape: &[usize],
        coords: Vec<Vec<f64>>,
    ) -> Result<Self, FieldStatsError> {
        let dims: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
        Self::check_layout(data.len(), &dims, shape, &coords)?;

        Ok(Self {
            data,
            dims,
            shape: shape.to_vec(),
            coords,
        })
    }

    /// Build an array whose coordinates are the positional labels `0, 1, ..`.
    pub fn with_default_coords(
        data: Vec<T>,
        dims: &[&str],
        shape: &[usize],
    ) -> Result<Self, FieldStatsError> {
        let coords = shape
            .iter()
            .map(|&n| (0..n).map(|i| i as f64).collect())
            .collect();
        Self::new(data, dims, shape, coords)
    }

    /// Build a 1-D series along `axis`.
    pub fn from_series(
        axis: &str,
        coords: Vec<f64>,
        values: Vec<T>,
    ) -> Result<Self, FieldStatsError> {
        let n = values.len();
        Self::new(values, &[axis], &[n], vec![coords])
    }

    /// Build a 0-D array holding a single value.
    pub fn scalar(value: T) -> Self {
        Self {
            data: vec![value],
            dims: Vec::new(),
            shape: Vec::new(),
            coords: Vec::new(),
        }
    }

    // Assemble an array from parts already known to be consistent.
    pub(crate) fn from_parts(
        data: Vec<T>,
        dims: Vec<String>,
        shape: Vec<usize>,
        coords: Vec<Vec<f64>>,
    ) -> Self {
        debug_assert!(
            Self::check_layout(data.len(), &dims, &shape, &coords).is_ok(),
            "from_parts: inconsistent layout"
        );

        Self {
            data,
            dims,
            shape,
            coords,
        }
    }

    fn check_layout(
        len: usize,
        dims: &[String],
        shape: &[usize],
        coords: &[Vec<f64>],
    ) -> Result<(), FieldStatsError> {
        if dims.len() != shape.len() || coords.len() != shape.len() {
            return Err(FieldStatsError::InvalidShape(format!(
                "{} dims, {} shape entries and {} coordinate vectors",
                dims.len(),
                shape.len(),
                coords.len()
            )));
        }

        for (i, name) in dims.iter().enumerate() {
            if dims[..i].contains(name) {
                return Err(FieldStatsError::InvalidShape(format!(
                    "axis '{name}' appears more than once"
                )));
            }
            if coords[i].len() != shape[i] {
                return Err(FieldStatsError::InvalidShape(format!(
                    "axis '{name}' has length {} but {} coordinates",
                    shape[i],
                    coords[i].len()
                )));
            }
        }

        let expected: usize = shape.iter().product();
        if len != expected {
            return Err(FieldStatsError::InvalidShape(format!(
                "shape {shape:?} holds {expected} values, got {len}"
            )));
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Row-major values.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consume the array, returning its row-major values.
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Axis names, outermost first.
    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    /// Axis lengths, outermost first.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Coordinate labels of every axis.
    pub fn all_coords(&self) -> &[Vec<f64>] {
        &self.coords
    }

    /// Coordinate labels of the axis called `name`.
    pub fn coords(&self, name: &str) -> Option<&[f64]> {
        self.axis_index(name).map(|i| self.coords[i].as_slice())
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Total number of values.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no values.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Position of the axis called `name`.
    pub fn axis_index(&self, name: &str) -> Option<usize> {
        self.dims.iter().position(|d| d == name)
    }

    /// Value at the given per-axis index.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        ravel_index(index, &self.shape).map(|flat| &self.data[flat])
    }

    /// Apply `f` to every value, keeping axes and coordinates.
    pub fn map<U, F>(&self, f: F) -> LabeledArray<U>
    where
        F: FnMut(&T) -> U,
    {
        LabeledArray {
            data: self.data.iter().map(f).collect(),
            dims: self.dims.clone(),
            shape: self.shape.clone(),
            coords: self.coords.clone(),
        }
    }

    /// Whether both arrays have the same axes, shape and coordinates.
    pub fn same_layout<U>(&self, other: &LabeledArray<U>) -> bool {
        self.dims == other.dims && self.shape == other.shape && self.coords == other.coords
    }
}

impl<T: Float> LabeledArray<T> {
    /// Number of missing (NaN) values.
    pub fn missing_count(&self) -> usize {
        self.data.iter().filter(|v| v.is_nan()).count()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Display> Display for LabeledArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "LabeledArray (")?;
        for (i, (name, n)) in self.dims.iter().zip(self.shape.iter()).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {n}")?;
        }
        writeln!(f, ")")?;

        // Header
        for name in &self.dims {
            write!(f, "{:>10} ", name)?;
        }
        writeln!(f, "{:>14}", "value")?;
        writeln!(f, "{:-<width$}", "", width = 11 * self.dims.len() + 14)?;

        // Rows (show first 10 and last 10 if more than 20 values)
        let n = self.data.len();
        let rows: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev = 0;
        for (i, &flat) in rows.iter().enumerate() {
            if i > 0 && flat != prev + 1 {
                writeln!(f, "{:>10}", "...")?;
            }
            prev = flat;

            let index = unravel_index(flat, &self.shape);
            for (axis, &k) in index.iter().enumerate() {
                write!(f, "{:>10.2} ", self.coords[axis][k])?;
            }
            writeln!(f, "{:>14.6}", self.data[flat])?;
        }

        Ok(())
    }
}
