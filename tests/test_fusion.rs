use altitude_estimate::estimators::fusion::{combine, combine_sequences};
use altitude_estimate::EstimateError;

use approx;

#[test]
fn test_equal_estimates_halve_variance() {
    for &(y, p) in [(0.0, 1.0), (12.5, 0.3), (-4.0, 7.25), (760.0, 0.001)].iter() {
        let (fused, variance) = combine(y, p, y, p).unwrap();
        approx::assert_relative_eq!(fused, y, max_relative = 1e-12);
        approx::assert_relative_eq!(variance, p / 2.0, max_relative = 1e-12);
    }
}

#[test]
fn test_inverse_variance_weighting() {
    let (fused, variance) = combine(1.0, 1.0, 3.0, 3.0).unwrap();
    approx::assert_relative_eq!(fused, 1.5, max_relative = 1e-12);
    approx::assert_relative_eq!(variance, 0.75, max_relative = 1e-12);

    // Symmetric in the two inputs
    let (swapped, swapped_variance) = combine(3.0, 3.0, 1.0, 1.0).unwrap();
    approx::assert_relative_eq!(swapped, fused, max_relative = 1e-12);
    approx::assert_relative_eq!(swapped_variance, variance, max_relative = 1e-12);
}

#[test]
fn test_certain_estimate_dominates() {
    let (fused, variance) = combine(10.0, 1e-12, 20.0, 1.0).unwrap();
    approx::assert_abs_diff_eq!(fused, 10.0, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(variance, 0.0, epsilon = 1e-9);

    let (fused, variance) = combine(10.0, 0.0, 20.0, 1.0).unwrap();
    assert_eq!(fused, 10.0);
    assert_eq!(variance, 0.0);
}

#[test]
fn test_fused_variance_below_inputs() {
    let (_, variance) = combine(5.0, 0.8, 6.0, 0.6).unwrap();
    assert!(variance < 0.6);
}

#[test]
fn test_degenerate_variances_rejected() {
    for &(p1, p2) in [(0.0, 0.0), (-1.0, -2.0), (-1.0, 2.0), (1.0, f64::NAN)].iter() {
        let result = combine(1.0, p1, 2.0, p2);
        assert!(matches!(result, Err(EstimateError::DegenerateFusion { .. })), "{} {}", p1, p2);
    }
}

#[test]
fn test_degenerate_fusion_reason() {
    // Negative variance with a positive sum is still rejected
    assert!(matches!(
        combine(1.0, -1.0, 2.0, 5.0),
        Err(EstimateError::DegenerateFusion { reason: "P1 negative", .. })
    ));
    assert!(matches!(
        combine(1.0, 5.0, 2.0, -1.0),
        Err(EstimateError::DegenerateFusion { reason: "P2 negative", .. })
    ));
    let error = combine(1.0, 0.0, 2.0, 0.0).unwrap_err();
    assert!(matches!(error, EstimateError::DegenerateFusion { reason: "P1 + P2 not positive", .. }));
    assert!(error.to_string().contains("P1 + P2 not positive"));
}

#[test]
fn test_sequences_use_static_weights() {
    let ys1 = [1.0, 2.0, 3.0, 4.0];
    let ys2 = [1.5, 2.5, 2.5, 5.0];
    let (fused, variance) = combine_sequences(&ys1, 0.4, &ys2, 0.9).unwrap();

    assert_eq!(fused.len(), ys1.len());
    for ((y, y1), y2) in fused.iter().zip(ys1.iter()).zip(ys2.iter()) {
        let (expect, expect_variance) = combine(*y1, 0.4, *y2, 0.9).unwrap();
        approx::assert_relative_eq!(*y, expect, max_relative = 1e-12);
        approx::assert_relative_eq!(variance, expect_variance, max_relative = 1e-12);
    }
}

#[test]
fn test_sequences_length_mismatch() {
    let result = combine_sequences(&[1.0, 2.0], 1.0, &[1.0], 1.0);
    assert!(matches!(
        result,
        Err(EstimateError::LengthMismatch { expected: 2, actual: 1, .. })
    ));
}

#[test]
fn test_sequences_degenerate_variances() {
    let result = combine_sequences(&[1.0], 0.0, &[2.0], 0.0);
    assert!(matches!(result, Err(EstimateError::DegenerateFusion { .. })));
}
