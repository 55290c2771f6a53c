//! Error statistics of noisy and filtered signals against the ground truth.

use num_traits::{cast, Float};

use crate::error::{EstimateError, Result};

/// Population standard deviation of the errors `observed - truth`.
pub fn std_error<T: Float>(truth: &[T], observed: &[T]) -> Result<T> {
    if truth.len() != observed.len() {
        return Err(EstimateError::LengthMismatch {
            what: "error statistics",
            expected: truth.len(),
            actual: observed.len(),
        });
    }
    if truth.is_empty() {
        return Err(EstimateError::InvalidInput("no samples for error statistics"));
    }

    let n = cast::<usize, T>(truth.len()).ok_or(EstimateError::InvalidInput("sample count not representable"))?;
    let errors = || truth.iter().zip(observed).map(|(&t, &o)| o - t);

    let mean = errors().fold(T::zero(), |acc, e| acc + e) / n;
    let variance = errors().fold(T::zero(), |acc, e| acc + (e - mean) * (e - mean)) / n;
    Ok(variance.sqrt())
}

/// Standard deviations of the noisy and the filtered errors.
pub fn std_errors<T: Float>(truth: &[T], noisy: &[T], filtered: &[T]) -> Result<(T, T)> {
    Ok((std_error(truth, noisy)?, std_error(truth, filtered)?))
}

/// Reduction of the error standard deviation in percent, 0 when there was no noise.
pub fn reduction_percentage<T: Float>(std_noisy: T, std_filtered: T) -> T {
    if std_noisy == T::zero() {
        return T::zero();
    }
    let hundred: T = cast(100.).unwrap_or_else(T::nan);
    (std_noisy - std_filtered) / std_noisy * hundred
}
