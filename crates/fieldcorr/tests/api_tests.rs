//! Tests for the public field statistics API.
//!
//! These tests verify the statistical properties of:
//! - Covariance and correlation between a series and a grid
//! - Missing-value exclusion per grid point
//! - Student's t critical values
//! - Axis alignment errors
//!
//! ## Test Organization
//!
//! 1. **Covariance** - Variance identity, symmetry, result layout
//! 2. **Correlation** - Self-correlation, sign, scale invariance
//! 3. **Missing Values** - Pairwise exclusion and isolation between points
//! 4. **Degenerate Inputs** - NaN/Inf propagation instead of errors
//! 5. **T-Critical** - Reference values, monotonicity, domain errors
//! 6. **Alignment Errors** - Dimension mismatch and missing axes

use approx::assert_relative_eq;

use fieldcorr::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

const INDEX: [f64; 10] = [1.2, 0.4, -0.3, 2.1, 0.9, -1.5, 0.7, 1.8, -0.6, 0.2];

fn years(n: usize) -> Vec<f64> {
    (0..n).map(|i| 1980.0 + i as f64).collect()
}

fn series(values: &[f64]) -> LabeledArray<f64> {
    LabeledArray::from_series("time", years(values.len()), values.to_vec()).unwrap()
}

/// Build a (time, lat, lon) grid with a 2 x 2 spatial layout from four
/// per-point time series, ordered row-major over (lat, lon).
fn grid(columns: &[Vec<f64>; 4]) -> LabeledArray<f64> {
    let n = columns[0].len();
    let mut data = Vec::with_capacity(n * 4);
    for t in 0..n {
        for column in columns {
            data.push(column[t]);
        }
    }
    LabeledArray::new(
        data,
        &["time", "lat", "lon"],
        &[n, 2, 2],
        vec![years(n), vec![-5.0, 5.0], vec![100.0, 110.0]],
    )
    .unwrap()
}

fn sample_grid() -> LabeledArray<f64> {
    grid(&[
        INDEX.iter().map(|x| 2.0 * x + 1.0).collect(),
        vec![0.3, -0.2, 0.5, 0.1, -0.4, 0.8, 0.0, -0.7, 0.6, 0.2],
        INDEX.iter().map(|x| -x).collect(),
        vec![3.1, 2.2, 2.9, 4.0, 3.3, 1.2, 2.8, 3.9, 2.0, 2.6],
    ])
}

fn naive_variance(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (n - 1.0)
}

// ============================================================================
// Covariance Tests
// ============================================================================

/// Test covariance of a series with itself equals its sample variance.
///
/// Verifies the N - 1 divisor against a direct computation.
#[test]
fn test_covariance_with_itself_is_variance() {
    let x = series(&INDEX);

    let cov = covariance(&x, &x, DEFAULT_AXIS).unwrap();
    let var = variance(&x, DEFAULT_AXIS).unwrap();

    assert_eq!(cov.ndim(), 0);
    assert_relative_eq!(cov.data()[0], var.data()[0], epsilon = 1e-12);
    assert_relative_eq!(cov.data()[0], naive_variance(&INDEX), epsilon = 1e-12);
}

/// Test covariance of a grid with itself equals its per-point variance.
#[test]
fn test_covariance_grid_with_itself_is_variance() {
    let g = sample_grid();

    let cov = covariance(&g, &g, "time").unwrap();
    let var = variance(&g, "time").unwrap();

    for (c, v) in cov.data().iter().zip(var.data()) {
        assert_relative_eq!(*c, *v, epsilon = 1e-12);
    }
}

/// Test covariance is symmetric in its arguments.
///
/// Verifies both the broadcast case and the elementwise case.
#[test]
fn test_covariance_symmetry() {
    let x = series(&INDEX);
    let g = sample_grid();

    let ab = covariance(&x, &g, "time").unwrap();
    let ba = covariance(&g, &x, "time").unwrap();
    assert_eq!(ab.shape(), ba.shape());
    for (a, b) in ab.data().iter().zip(ba.data()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-12);
    }

    let h = grid(&[
        vec![0.5, 0.1, 0.9, -0.3, 0.2, 0.4, -0.8, 1.1, 0.0, 0.6],
        INDEX.to_vec(),
        vec![2.0, 1.0, 0.0, 1.0, 2.0, 1.0, 0.0, 1.0, 2.0, 1.0],
        vec![-1.0, 0.5, 0.3, 0.8, -0.2, 0.1, 0.9, -0.4, 0.6, 0.0],
    ]);
    let gh = covariance(&g, &h, "time").unwrap();
    let hg = covariance(&h, &g, "time").unwrap();
    for (a, b) in gh.data().iter().zip(hg.data()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-12);
    }
}

/// Test a linear transform of the series scales covariance by the slope.
#[test]
fn test_covariance_of_linear_transform() {
    let x = series(&INDEX);
    let g = sample_grid();

    let cov = covariance(&x, &g, "time").unwrap();
    let var_x = naive_variance(&INDEX);

    // Point (0, 0) is 2x + 1, point (1, 0) is -x
    assert_relative_eq!(cov.data()[0], 2.0 * var_x, epsilon = 1e-12);
    assert_relative_eq!(cov.data()[2], -var_x, epsilon = 1e-12);
}

/// Test the result field drops the reduction axis and keeps the others.
#[test]
fn test_result_layout() {
    let x = series(&INDEX);
    let g = sample_grid();

    let cov = covariance(&x, &g, "time").unwrap();

    assert_eq!(cov.dims(), &["lat".to_string(), "lon".to_string()]);
    assert_eq!(cov.shape(), &[2, 2]);
    assert_eq!(cov.coords("lat"), Some(&[-5.0, 5.0][..]));
    assert_eq!(cov.coords("lon"), Some(&[100.0, 110.0][..]));
    assert_eq!(cov.coords("time"), None);
}

/// Test the reduction axis does not have to be the outermost axis.
#[test]
fn test_reduction_along_inner_axis() {
    // (lat, time) layout: row j is point j's time series
    let n = INDEX.len();
    let mut data = INDEX.to_vec();
    data.extend(INDEX.iter().map(|x| 3.0 * x));
    let g = LabeledArray::new(data, &["lat", "time"], &[2, n], vec![vec![0.0, 1.0], years(n)])
        .unwrap();
    let x = series(&INDEX);

    let cov = covariance(&x, &g, "time").unwrap();
    let var_x = naive_variance(&INDEX);

    assert_eq!(cov.dims(), &["lat".to_string()]);
    assert_relative_eq!(cov.data()[0], var_x, epsilon = 1e-12);
    assert_relative_eq!(cov.data()[1], 3.0 * var_x, epsilon = 1e-12);
}

// ============================================================================
// Correlation Tests
// ============================================================================

/// Test self-correlation is exactly one (up to round-off).
#[test]
fn test_correlation_with_itself() {
    let x = series(&INDEX);

    let r = correlation(&x, &x, "time").unwrap();

    assert_relative_eq!(r.data()[0], 1.0, epsilon = 1e-12);
}

/// Test correlation with the negated series is minus one.
#[test]
fn test_correlation_with_negation() {
    let x = series(&INDEX);
    let neg: Vec<f64> = INDEX.iter().map(|v| -v).collect();
    let y = series(&neg);

    let r = correlation(&x, &y, "time").unwrap();

    assert_relative_eq!(r.data()[0], -1.0, epsilon = 1e-12);
}

/// Test correlation is invariant to scaling, flipping sign for negative factors.
#[test]
fn test_correlation_scale_invariance() {
    let x = series(&INDEX);
    let g = sample_grid();
    let base = correlation(&x, &g, "time").unwrap();

    for k in [3.5, 0.01, -0.25, -40.0] {
        let scaled = LabeledArray::new(
            g.data().iter().map(|v| k * v).collect(),
            &["time", "lat", "lon"],
            g.shape(),
            g.all_coords().to_vec(),
        )
        .unwrap();
        let r = correlation(&x, &scaled, "time").unwrap();

        for (a, b) in r.data().iter().zip(base.data()) {
            assert_relative_eq!(*a, k.signum() * b, epsilon = 1e-12);
        }
    }
}

/// Test correlation values stay within [-1, 1] and match known points.
#[test]
fn test_correlation_grid_values() {
    let x = series(&INDEX);
    let g = sample_grid();

    let r = correlation(&x, &g, "time").unwrap();

    assert_relative_eq!(r.data()[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(r.data()[2], -1.0, epsilon = 1e-12);
    for &v in r.data() {
        assert!(v.abs() <= 1.0 + 1e-12, "correlation out of range: {v}");
    }
}

/// Test regression recovers the slope of a linear relationship.
#[test]
fn test_regression_slope() {
    let x = series(&INDEX);
    let g = sample_grid();

    let slope = regression(&x, &g, "time").unwrap();

    assert_relative_eq!(slope.data()[0], 2.0, epsilon = 1e-12);
    assert_relative_eq!(slope.data()[2], -1.0, epsilon = 1e-12);
}

/// Test computations in single precision.
#[test]
fn test_correlation_f32() {
    let values: Vec<f32> = INDEX.iter().map(|&v| v as f32).collect();
    let doubled: Vec<f32> = values.iter().map(|v| 2.0 * v).collect();
    let x = LabeledArray::from_series("time", years(10), values).unwrap();
    let y = LabeledArray::from_series("time", years(10), doubled).unwrap();

    let r = correlation(&x, &y, "time").unwrap();

    assert_relative_eq!(r.data()[0], 1.0f32, epsilon = 1e-5);
}

// ============================================================================
// Missing Value Tests
// ============================================================================

/// Test a gap at one grid point matches dropping that time step there only.
#[test]
fn test_missing_value_excluded_at_one_point() {
    let x = series(&INDEX);
    let clean = sample_grid();

    let mut columns: [Vec<f64>; 4] = [
        INDEX.iter().map(|x| 2.0 * x + 1.0).collect(),
        vec![0.3, -0.2, 0.5, 0.1, -0.4, 0.8, 0.0, -0.7, 0.6, 0.2],
        INDEX.iter().map(|x| -x).collect(),
        vec![3.1, 2.2, 2.9, 4.0, 3.3, 1.2, 2.8, 3.9, 2.0, 2.6],
    ];
    let column = columns[1].clone();
    columns[1][3] = f64::NAN;
    let gappy = grid(&columns);

    // Reference: remove time index 3 from both inputs at point 1
    let keep: Vec<usize> = (0..10).filter(|&t| t != 3).collect();
    let times: Vec<f64> = keep.iter().map(|&t| years(10)[t]).collect();
    let x_ref = LabeledArray::from_series(
        "time",
        times.clone(),
        keep.iter().map(|&t| INDEX[t]).collect(),
    )
    .unwrap();
    let y_ref =
        LabeledArray::from_series("time", times, keep.iter().map(|&t| column[t]).collect())
            .unwrap();

    let cov = covariance(&x, &gappy, "time").unwrap();
    let r = correlation(&x, &gappy, "time").unwrap();
    let cov_ref = covariance(&x_ref, &y_ref, "time").unwrap();
    let r_ref = correlation(&x_ref, &y_ref, "time").unwrap();

    assert_relative_eq!(cov.data()[1], cov_ref.data()[0], epsilon = 1e-12);
    assert_relative_eq!(r.data()[1], r_ref.data()[0], epsilon = 1e-12);

    // Other points are unaffected
    let cov_clean = covariance(&x, &clean, "time").unwrap();
    let r_clean = correlation(&x, &clean, "time").unwrap();
    for k in [0, 2, 3] {
        assert_relative_eq!(cov.data()[k], cov_clean.data()[k], epsilon = 1e-12);
        assert_relative_eq!(r.data()[k], r_clean.data()[k], epsilon = 1e-12);
    }

    // Valid pair counts reflect the gap
    let n = pair_count(&x, &gappy, "time").unwrap();
    assert_eq!(n.data(), &[10.0, 9.0, 10.0, 10.0]);
}

/// Test a gap in the series is excluded at every grid point.
#[test]
fn test_missing_value_in_series() {
    let mut values = INDEX.to_vec();
    values[0] = f64::NAN;
    let x = series(&values);
    let g = sample_grid();

    let r = correlation(&x, &g, "time").unwrap();
    let n = pair_count(&x, &g, "time").unwrap();

    assert_eq!(n.data(), &[9.0; 4]);
    assert_relative_eq!(r.data()[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(r.data()[2], -1.0, epsilon = 1e-12);
}

/// Test single-array reductions skip missing values.
#[test]
fn test_reductions_skip_missing() {
    let x = series(&[1.0, f64::NAN, 3.0, 5.0]);

    assert_eq!(count(&x, "time").unwrap().data(), &[3.0]);
    assert_relative_eq!(mean(&x, "time").unwrap().data()[0], 3.0, epsilon = 1e-12);
    assert_relative_eq!(variance(&x, "time").unwrap().data()[0], 4.0, epsilon = 1e-12);
    assert_relative_eq!(std_dev(&x, "time").unwrap().data()[0], 2.0, epsilon = 1e-12);
}

// ============================================================================
// Degenerate Input Tests
// ============================================================================

/// Test a point with one valid sample yields NaN rather than an error.
#[test]
fn test_single_valid_sample_is_nan() {
    let x = series(&[1.0, 2.0, 3.0]);
    let y = series(&[f64::NAN, 5.0, f64::NAN]);

    let cov = covariance(&x, &y, "time").unwrap();
    let r = correlation(&x, &y, "time").unwrap();

    assert!(cov.data()[0].is_nan());
    assert!(r.data()[0].is_nan());
}

/// Test a point with no valid samples yields NaN.
#[test]
fn test_all_missing_is_nan() {
    let x = series(&[1.0, 2.0, 3.0]);
    let y = series(&[f64::NAN; 3]);

    assert!(covariance(&x, &y, "time").unwrap().data()[0].is_nan());
    assert!(mean(&y, "time").unwrap().data()[0].is_nan());
}

/// Test a constant grid point gives zero covariance and undefined correlation.
#[test]
fn test_constant_point() {
    let x = series(&INDEX);
    let y = series(&[4.0; 10]);

    let cov = covariance(&x, &y, "time").unwrap();
    let r = correlation(&x, &y, "time").unwrap();

    assert_relative_eq!(cov.data()[0], 0.0, epsilon = 1e-12);
    assert!(!r.data()[0].is_finite());
}

// ============================================================================
// T-Critical Tests
// ============================================================================

/// Test the reference two-tailed value for 20 pairs at 95%.
#[test]
fn test_t_critical_reference_value() {
    let t = t_critical(20, 95.0).unwrap();

    assert_relative_eq!(t, 2.1009220402409623, epsilon = 1e-6);
}

/// Test other well-known table values.
#[test]
fn test_t_critical_table_values() {
    // df = 1, 95%: 12.706
    assert_relative_eq!(t_critical(3, 95.0).unwrap(), 12.706204736, epsilon = 1e-4);
    // df = 10, 99%: 3.169
    assert_relative_eq!(t_critical(12, 99.0).unwrap(), 3.169272673, epsilon = 1e-5);
    // df = 30, 90%: 1.697
    assert_relative_eq!(t_critical(32, 90.0).unwrap(), 1.697260887, epsilon = 1e-5);
}

/// Test the critical value shrinks as the sample grows.
#[test]
fn test_t_critical_strictly_decreasing() {
    let mut prev = t_critical(5, 95.0).unwrap();
    for n in 6..=200 {
        let t = t_critical(n, 95.0).unwrap();
        assert!(t < prev, "t_critical({n}) = {t} is not below {prev}");
        prev = t;
    }

    let mut prev = t_critical(200, 95.0).unwrap();
    for n in [300, 400, 500, 700, 1000] {
        let t = t_critical(n, 95.0).unwrap();
        assert!(t < prev, "t_critical({n}) = {t} is not below {prev}");
        prev = t;
    }

    // Approaches the normal quantile from above
    assert!(prev > 1.959964);
}

/// Test a stricter level gives a larger critical value.
#[test]
fn test_t_critical_increases_with_level() {
    let t90 = t_critical(30, 90.0).unwrap();
    let t95 = t_critical(30, 95.0).unwrap();
    let t99 = t_critical(30, 99.0).unwrap();

    assert!(t90 < t95 && t95 < t99);
}

/// Test sample sizes without degrees of freedom are rejected.
#[test]
fn test_t_critical_invalid_sample_size() {
    for n in [0, 1, 2] {
        assert_eq!(
            t_critical(n, 95.0),
            Err(FieldStatsError::InvalidSampleSize { got: n, min: 3 })
        );
    }
}

/// Test levels outside (0, 100) are rejected.
#[test]
fn test_t_critical_invalid_level() {
    for level in [0.0, 100.0, -5.0, 150.0, f64::NAN] {
        assert!(matches!(
            t_critical(20, level),
            Err(FieldStatsError::InvalidSignificanceLevel(_))
        ));
    }
}

// ============================================================================
// Alignment Error Tests
// ============================================================================

/// Test differing time coordinates are rejected.
#[test]
fn test_mismatched_coordinates() {
    let x = LabeledArray::from_series("time", years(10), INDEX.to_vec()).unwrap();
    let shifted: Vec<f64> = years(10).iter().map(|y| y + 1.0).collect();
    let y = LabeledArray::from_series("time", shifted, INDEX.to_vec()).unwrap();

    assert!(matches!(
        covariance(&x, &y, "time"),
        Err(FieldStatsError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        correlation(&x, &y, "time"),
        Err(FieldStatsError::DimensionMismatch { .. })
    ));
}

/// Test differing time lengths are rejected.
#[test]
fn test_mismatched_lengths() {
    let x = series(&INDEX);
    let g = series(&INDEX[..8]);

    assert!(matches!(
        covariance(&x, &g, "time"),
        Err(FieldStatsError::DimensionMismatch { .. })
    ));
}

/// Test reordered time coordinates are rejected rather than realigned.
#[test]
fn test_reordered_coordinates() {
    let mut reversed = years(10);
    reversed.reverse();
    let x = series(&INDEX);
    let y = LabeledArray::from_series("time", reversed, INDEX.to_vec()).unwrap();

    assert!(matches!(
        correlation(&x, &y, "time"),
        Err(FieldStatsError::DimensionMismatch { .. })
    ));
}

/// Test two grids with different spatial layouts are rejected.
#[test]
fn test_mismatched_spatial_layout() {
    let g = sample_grid();
    let other = LabeledArray::new(
        vec![0.0; 30],
        &["time", "lat"],
        &[10, 3],
        vec![years(10), vec![0.0, 1.0, 2.0]],
    )
    .unwrap();

    assert!(matches!(
        covariance(&g, &other, "time"),
        Err(FieldStatsError::DimensionMismatch { .. })
    ));
}

/// Test a reduction axis absent from an input is reported.
#[test]
fn test_missing_axis() {
    let x = series(&INDEX);
    let g = sample_grid();

    assert_eq!(
        covariance(&x, &g, "month"),
        Err(FieldStatsError::AxisNotFound {
            axis: "month".to_string()
        })
    );
    assert!(matches!(
        variance(&g, "depth"),
        Err(FieldStatsError::AxisNotFound { .. })
    ));
}
