//! Inverse variance fusion of two estimates.
//!
//! Two independent estimates of the same quantity are combined by weighting each inversely to its variance.
//! In information form the fused information is simply the sum `1/P1 + 1/P2`; the covariance form used here
//! stays defined when one of the variances is zero.

use na::RealField;
use nalgebra as na;

use crate::error::{EstimateError, Result};
use crate::numeric::{check_non_negative, check_positive, to_f64};

/// Fuses two estimates, returning the fused estimate and its variance.
///
/// The variances must both be non-negative with a strictly positive sum. A negative variance is
/// rejected even when the sum stays positive, which is stricter than requiring only `P1 + P2 > 0`.
pub fn combine<N: RealField>(y1: N, p1: N, y2: N, p2: N) -> Result<(N, N)> {
    let sum = check_variances(p1, p2)?;

    let y = (p2 * y1 + p1 * y2) / sum;
    let p = (p1 * p2) / sum;
    Ok((y, p))
}

/// Fuses two estimate sequences index by index.
///
/// The same variances weight every index, so the fused variance is a single value.
pub fn combine_sequences<N: RealField>(ys1: &[N], p1: N, ys2: &[N], p2: N) -> Result<(Vec<N>, N)> {
    if ys1.len() != ys2.len() {
        return Err(EstimateError::LengthMismatch {
            what: "fusion inputs",
            expected: ys1.len(),
            actual: ys2.len(),
        });
    }
    let sum = check_variances(p1, p2)?;

    let fused = ys1
        .iter()
        .zip(ys2)
        .map(|(&y1, &y2)| (p2 * y1 + p1 * y2) / sum)
        .collect::<Vec<_>>();

    log::debug!(
        "fused {} estimates with variances {} and {}",
        fused.len(),
        to_f64(p1),
        to_f64(p2)
    );
    Ok((fused, (p1 * p2) / sum))
}

fn check_variances<N: RealField>(p1: N, p2: N) -> Result<N> {
    let degenerate = |reason| EstimateError::DegenerateFusion {
        p1: to_f64(p1),
        p2: to_f64(p2),
        reason,
    };
    check_non_negative(p1, "P1 negative").map_err(degenerate)?;
    check_non_negative(p2, "P2 negative").map_err(degenerate)?;
    check_positive(p1 + p2, "P1 + P2 not positive").map_err(degenerate)
}
