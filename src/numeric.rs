//! Scalar numeric helpers shared by the estimators.

use nalgebra as na;
use na::RealField;

/// Converts an `f64` constant into the estimator's scalar type.
#[inline]
pub fn lit<N: RealField>(value: f64) -> N {
    na::convert(value)
}

/// Converts an estimator scalar back to `f64`, NaN if the value has no `f64` representation.
#[inline]
pub fn to_f64<N: RealField>(value: N) -> f64 {
    na::try_convert(value).unwrap_or(f64::NAN)
}

/**
 * Checks a value is >= 0
 * IEC 559 NaN values are never true
 */
pub fn check_non_negative<'a, N: RealField>(value: N, message: &'a str) -> Result<N, &'a str>
{
    if value >= N::zero() {
        Result::Ok(value)
    } else {
        Result::Err(message)
    }
}

/**
 * Checks a value is > 0
 * IEC 559 NaN values are never true
 */
pub fn check_positive<'a, N: RealField>(value: N, message: &'a str) -> Result<N, &'a str>
{
    if value > N::zero() {
        Result::Ok(value)
    } else {
        Result::Err(message)
    }
}

/// Rounds to `dp` decimal places by scaling with `10^dp`, half away from zero on the scaled value.
///
/// This approximates decimal rounding: a value whose binary representation lies just below a decimal tie,
/// such as `1.0005`, can scale to an exact tie and round up.
#[inline]
pub fn round_to(value: f64, dp: u32) -> f64 {
    if dp == 0 {
        return value.round();
    }
    let factor = 10_f64.powi(dp as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.2344, 3), 1.234);
        assert_eq!(round_to(-1.2346, 3), -1.235);
        assert_eq!(round_to(2.5, 0), 3.0);
        // Scaled value lands on an exact tie
        assert_eq!(round_to(1.0005, 3), 1.001);
    }
}
