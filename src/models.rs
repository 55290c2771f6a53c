//! Altitude estimation models.
//!
//! The filter state and configuration are modeled as structs.
//! Common scalar estimation operations are defined as traits.

use na::RealField;
use nalgebra as na;

use crate::error::{EstimateError, Result};
use crate::numeric::lit;

/// Velocity to position coupling of the prediction.
pub const VELOCITY_COUPLING: f64 = 0.05;
/// Initial estimate variance.
pub const INITIAL_VARIANCE: f64 = 1.0;
/// Measurements at or below this altitude use the low process noise.
pub const LOW_ALTITUDE_CEILING: f64 = 152.4;
/// Measurements above this altitude are beyond the sensor range and bypass the filter.
pub const SENSOR_CUTOFF: f64 = 762.0;
/// Default process noise variance at or below [`LOW_ALTITUDE_CEILING`].
pub const DEFAULT_Q_LOW: f64 = 4.572;
/// Default process noise variance above [`LOW_ALTITUDE_CEILING`].
pub const DEFAULT_Q_HIGH: f64 = 38.1;

/// Filter State.
///
/// Scalar representation as a state estimate and its variance.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct FilterState<N: RealField> {
    /// State estimate
    pub estimate: N,
    /// Estimate variance (conceptually non-negative)
    pub variance: N,
}

impl<N: RealField> FilterState<N> {
    /// Seeds a state from the first measurement with the initial variance.
    pub fn seed(first: N) -> FilterState<N> {
        FilterState {
            estimate: first,
            variance: lit(INITIAL_VARIANCE),
        }
    }
}

/// Filter configuration.
///
/// The measurement noise `r` is derived from the velocity when the configuration is built.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct FilterConfig<N: RealField> {
    velocity: N,
    q_low: N,
    q_high: N,
    r: N,
}

impl<N: RealField> FilterConfig<N> {
    pub fn new(velocity: N, q_low: N, q_high: N) -> Result<Self> {
        // NaN fails the comparison
        if !(velocity >= N::zero()) {
            return Err(EstimateError::InvalidInput("velocity must be non-negative"));
        }
        Ok(FilterConfig {
            velocity,
            q_low,
            q_high,
            r: measurement_noise(velocity),
        })
    }

    pub fn with_default_noise(velocity: N) -> Result<Self> {
        FilterConfig::new(velocity, lit(DEFAULT_Q_LOW), lit(DEFAULT_Q_HIGH))
    }

    pub fn velocity(&self) -> N {
        self.velocity
    }

    pub fn q_low(&self) -> N {
        self.q_low
    }

    pub fn q_high(&self) -> N {
        self.q_high
    }

    /// Measurement noise variance.
    pub fn r(&self) -> N {
        self.r
    }

    /// Process noise variance for a measurement, gated on the measured altitude.
    pub fn process_noise(&self, z: N) -> N {
        if z <= lit(LOW_ALTITUDE_CEILING) {
            self.q_low
        } else {
            self.q_high
        }
    }
}

/// Measurement noise variance for a velocity.
///
/// Faster movement gives noisier measurements.
pub fn measurement_noise<N: RealField>(velocity: N) -> N {
    let r = if velocity <= lit(3.) {
        0.1
    } else if velocity <= lit(7.) {
        0.3
    } else if velocity <= lit(12.) {
        0.6
    } else {
        1.0
    };
    lit(r)
}

/// A state estimator.
pub trait Estimator<N: RealField> {
    /// The estimator's current state.
    fn state(&self) -> FilterState<N>;
}

/// A scalar predictor.
pub trait Predictor<N: RealField> {
    /// Predicted estimate and variance for the next step. Does not change the state.
    fn predict(&self) -> (N, N);
}

/// A scalar observer.
pub trait Observer<N: RealField> {
    /// Incorporates measurement `z` into a prediction, returning the step's output estimate.
    fn update(&mut self, z: N, x_pred: N, p_pred: N) -> Result<N>;
}
