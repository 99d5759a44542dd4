//! # fieldcorr — Covariance and correlation maps for labeled climate arrays
//!
//! Statistical helpers for climate and geoscience analysis: covariance,
//! Pearson correlation, and Student's t critical values, computed along a
//! named axis of labeled multi-dimensional arrays.
//!
//! ## What does it compute?
//!
//! The typical question is "where on the map does this index co-vary with
//! that field?". A 1-D *series* (e.g. an ENSO index over time) is paired with
//! a *grid* holding the same time axis plus spatial axes (e.g. sea surface
//! temperature over time × latitude × longitude). Every statistic collapses
//! the shared axis and returns one value per spatial point.
//!
//! Missing samples are NaN. At each point a time step contributes only when
//! both inputs are present there, and every divisor uses that point's own
//! count of valid pairs.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcorr::prelude::*;
//!
//! let years = vec![2000.0, 2001.0, 2002.0, 2003.0, 2004.0];
//!
//! // Index time series
//! let index = LabeledArray::from_series("time", years.clone(), vec![0.1, 0.4, -0.2, 0.8, 0.3])?;
//!
//! // Field over (time, lat): one point follows the index, the other opposes it
//! let grid = LabeledArray::new(
//!     vec![
//!         0.2, -0.1, //
//!         0.8, -0.4, //
//!         -0.4, 0.2, //
//!         1.6, -0.8, //
//!         0.6, -0.3, //
//!     ],
//!     &["time", "lat"],
//!     &[5, 2],
//!     vec![years, vec![-10.0, 10.0]],
//! )?;
//!
//! let r: LabeledArray<f64> = correlation(&index, &grid, DEFAULT_AXIS)?;
//! assert_eq!(r.shape(), &[2]);
//! assert!((r.data()[0] - 1.0).abs() < 1e-12);
//! assert!((r.data()[1] + 1.0).abs() < 1e-12);
//!
//! // Threshold for a two-tailed test on 5 pairs
//! let t = t_critical(5, DEFAULT_SIGNIFICANCE_LEVEL)?;
//! assert!(t > 3.18 && t < 3.19);
//! # Result::<(), FieldStatsError>::Ok(())
//! ```
//!
//! ### Configured Analysis
//!
//! ```rust
//! use fieldcorr::prelude::*;
//! # let years = vec![2000.0, 2001.0, 2002.0, 2003.0, 2004.0];
//! # let index = LabeledArray::from_series("time", years.clone(), vec![0.1, 0.4, -0.2, 0.8, 0.3])?;
//! # let grid = LabeledArray::new(
//! #     vec![0.2, -0.1, 0.8, -0.4, -0.4, 0.2, 1.6, -0.8, 0.6, -0.3],
//! #     &["time", "lat"],
//! #     &[5, 2],
//! #     vec![years, vec![-10.0, 10.0]],
//! # )?;
//!
//! let model = FieldStats::new()
//!     .axis("time")                 // Reduction axis
//!     .significance_level(99.0)     // Two-tailed level in percent
//!     .build()?;
//!
//! let map = model.analyze(&index, &grid)?;
//! assert_eq!(map.significant_points(), 2);
//! println!("{}", map);
//! # Result::<(), FieldStatsError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every operation returns `Result<_, FieldStatsError>`. Structural problems
//! (a missing axis, reduction axes whose lengths or coordinates differ, a
//! sample size with no degrees of freedom) are errors. Degenerate numbers
//! (zero variance, fewer than two valid samples) are not: they surface as
//! NaN or Inf in the returned field.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency. The
//! array statistics remain available; the Student's t functions (which rely
//! on `statrs`) do not.
//!
//! ```toml
//! [dependencies]
//! fieldcorr = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Wilks, D. S. (2011). *Statistical Methods in the Atmospheric Sciences*, 3rd ed.
//! - von Storch, H. & Zwiers, F. W. (1999). *Statistical Analysis in Climate Research*.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - labeled arrays, lane layout, errors.
mod primitives;

// Layer 2: Math - moment accumulators and t quantiles.
mod math;

// Layer 3: Algorithms - per-lane statistics.
mod algorithms;

// Layer 4: Evaluation - significance testing.
mod evaluation;

// Layer 5: Engine - validation and lane execution.
mod engine;

// High-level API for field statistics.
mod api;

// Standard fieldcorr prelude.
pub mod prelude {
    #[cfg(feature = "std")]
    pub use crate::api::{CorrelationMap, significance, t_critical};
    pub use crate::api::{
        DEFAULT_AXIS, DEFAULT_SIGNIFICANCE_LEVEL, FieldStatsBuilder as FieldStats,
        FieldStatsError, FieldStatsModel, LabeledArray, correlation, count, covariance, mean,
        pair_count, regression, std_dev, variance,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
