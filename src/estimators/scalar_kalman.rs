//! Scalar Kalman state estimation.
//!
//! A discrete Bayesian estimator for a single altitude state, using the scalar state representation [`FilterState`].
//! State transition and observation are both the identity, the prediction is driven by a constant velocity.
//!
//! Process noise is gated on the measured altitude and measurements above the sensor cutoff pass through unfiltered.
//!
//! [`FilterState`]: ../../models/struct.FilterState.html

use na::RealField;
use nalgebra as na;

use crate::error::{EstimateError, Result};
use crate::models::{Estimator, FilterConfig, FilterState, Observer, Predictor, SENSOR_CUTOFF, VELOCITY_COUPLING};
use crate::numeric::{check_positive, lit, to_f64};

/// Kalman filter over one pre-collected measurement sequence.
pub struct ScalarKalmanFilter<'a, N: RealField> {
    config: FilterConfig<N>,
    measurements: &'a [N],
    state: FilterState<N>,
}

impl<'a, N: RealField> ScalarKalmanFilter<'a, N> {
    pub fn new(velocity: N, measurements: &'a [N], q_low: N, q_high: N) -> Result<Self> {
        ScalarKalmanFilter::from_config(FilterConfig::new(velocity, q_low, q_high)?, measurements)
    }

    /// A filter with the default process noise.
    pub fn with_defaults(velocity: N, measurements: &'a [N]) -> Result<Self> {
        ScalarKalmanFilter::from_config(FilterConfig::with_default_noise(velocity)?, measurements)
    }

    pub fn from_config(config: FilterConfig<N>, measurements: &'a [N]) -> Result<Self> {
        let first = *measurements
            .first()
            .ok_or(EstimateError::InvalidInput("empty measurement sequence"))?;

        Ok(ScalarKalmanFilter {
            config,
            measurements,
            state: FilterState::seed(first),
        })
    }

    pub fn config(&self) -> &FilterConfig<N> {
        &self.config
    }

    /// Filters the whole measurement sequence.
    ///
    /// Returns one output per measurement and the final estimate variance.
    pub fn run(&mut self) -> Result<(Vec<N>, N)> {
        let mut estimates = Vec::with_capacity(self.measurements.len());
        let mut passthrough = 0usize;

        for &z in self.measurements {
            let (x_pred, p_pred) = self.predict();
            if z > lit(SENSOR_CUTOFF) {
                passthrough += 1;
            }
            estimates.push(self.update(z, x_pred, p_pred)?);
        }

        log::debug!(
            "filtered {} measurements ({} beyond cutoff), final variance {}",
            estimates.len(),
            passthrough,
            to_f64(self.state.variance)
        );
        Ok((estimates, self.state.variance))
    }
}

impl<'a, N: RealField> Estimator<N> for ScalarKalmanFilter<'a, N> {
    fn state(&self) -> FilterState<N> {
        self.state
    }
}

impl<'a, N: RealField> Predictor<N> for ScalarKalmanFilter<'a, N> {
    fn predict(&self) -> (N, N) {
        // x = F.x + B.v, F = 1
        let x_pred = self.state.estimate + lit::<N>(VELOCITY_COUPLING) * self.config.velocity();
        // P = F.P.F' + R
        let p_pred = self.state.variance + self.config.r();
        (x_pred, p_pred)
    }
}

impl<'a, N: RealField> Observer<N> for ScalarKalmanFilter<'a, N> {
    fn update(&mut self, z: N, x_pred: N, p_pred: N) -> Result<N> {
        if z > lit(SENSOR_CUTOFF) {
            log::trace!("measurement {} beyond sensor cutoff, passed through", to_f64(z));
            return Ok(z);
        }

        // Innovation, H = 1
        let y = z - x_pred;
        let q = self.config.process_noise(z);
        // S = H.P.H' + R + q
        let s = check_positive(p_pred + self.config.r() + q, "S not PD in update")
            .map_err(|_| EstimateError::DegenerateInnovation)?;
        let k = p_pred / s;

        self.state.estimate = x_pred + k * y;
        self.state.variance = (N::one() - k) * p_pred;

        Ok(self.state.estimate)
    }
}
