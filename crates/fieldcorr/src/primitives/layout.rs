//! Index arithmetic for reductions along one axis of a row-major buffer.
//!
//! A *lane* is the 1-D run of elements that a reduction along the named axis
//! collapses into one output value. Lanes are enumerated in the row-major
//! order of the remaining axes, so lane `k` lands at flat index `k` of the
//! result field.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Lane geometry for one axis of a given shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneLayout {
    // Number of elements along the reduction axis.
    pub len: usize,

    // Distance between consecutive elements of a lane.
    pub stride: usize,

    // Number of lanes (product of all other axis lengths).
    pub lanes: usize,
}

impl LaneLayout {
    // Build the layout for reducing `shape` along `axis`.
    pub fn along(shape: &[usize], axis: usize) -> Self {
        debug_assert!(axis < shape.len(), "along: axis out of bounds");

        let len = shape[axis];
        let stride: usize = shape[axis + 1..].iter().product();
        let lanes = shape
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != axis)
            .map(|(_, &n)| n)
            .product();

        Self { len, stride, lanes }
    }

    // Layout of a contiguous 1-D buffer, shared by every lane of a broadcast.
    pub fn contiguous(len: usize) -> Self {
        Self {
            len,
            stride: 1,
            lanes: 1,
        }
    }

    // Flat offset of the first element of `lane`.
    #[inline]
    pub fn base(&self, lane: usize) -> usize {
        debug_assert!(lane < self.lanes, "base: lane out of bounds");

        let outer = lane / self.stride;
        let inner = lane % self.stride;
        outer * self.len * self.stride + inner
    }

    // Borrow one lane of `data` as a strided view.
    #[inline]
    pub fn lane<'a, T: Copy>(&self, data: &'a [T], lane: usize) -> Lane<'a, T> {
        Lane {
            data,
            base: self.base(lane),
            stride: self.stride,
            len: self.len,
        }
    }
}

// Strided read-only view over one lane.
#[derive(Debug, Clone, Copy)]
pub struct Lane<'a, T> {
    data: &'a [T],
    base: usize,
    stride: usize,
    len: usize,
}

impl<T: Copy> Lane<'_, T> {
    // Number of elements in the lane.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    // Element `t` of the lane.
    #[inline]
    pub fn get(&self, t: usize) -> T {
        self.data[self.base + t * self.stride]
    }

    // Iterate over the lane in axis order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len).map(move |t| self.get(t))
    }
}

// Convert a flat row-major index into one index per axis.
pub fn unravel_index(mut flat: usize, shape: &[usize]) -> Vec<usize> {
    let mut index = vec![0; shape.len()];
    for (slot, &n) in index.iter_mut().zip(shape.iter()).rev() {
        if n == 0 {
            continue;
        }
        *slot = flat % n;
        flat /= n;
    }
    index
}

// Convert one index per axis into a flat row-major index.
pub fn ravel_index(index: &[usize], shape: &[usize]) -> Option<usize> {
    if index.len() != shape.len() {
        return None;
    }

    let mut flat = 0;
    for (&i, &n) in index.iter().zip(shape.iter()) {
        if i >= n {
            return None;
        }
        flat = flat * n + i;
    }
    Some(flat)
}
