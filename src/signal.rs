//! Ground truth altitude signal.
//!
//! The true altitude rises (or falls) linearly with time and never drops below the ground.

use crate::error::{EstimateError, Result};
use crate::numeric::round_to;
use crate::simulation::SimulationConfig;

const SIGNAL_DECIMALS: u32 = 3;

/// Largest number of samples a ground truth signal may hold.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Sampled true altitude.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrueSignal {
    /// Sample times
    pub times: Vec<f64>,
    /// True altitude at each sample time
    pub altitudes: Vec<f64>,
}

impl TrueSignal {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Generates the ramp `start_height + speed * t`, clamped at zero, for `floor(flight_time / time_step)` steps.
pub fn generate_true_signal(config: &SimulationConfig) -> Result<TrueSignal> {
    let steps = sample_count(config.flight_time, config.time_step)?;
    let mut signal = TrueSignal {
        times: Vec::with_capacity(steps),
        altitudes: Vec::with_capacity(steps),
    };

    for i in 0..steps {
        let t = round_to(config.time_step * i as f64, SIGNAL_DECIMALS);
        let y = (config.start_height + config.speed * t).max(0.);
        signal.times.push(t);
        signal.altitudes.push(round_to(y, SIGNAL_DECIMALS));
    }
    Ok(signal)
}

/// Number of samples `floor(flight_time / time_step)`, 0 without a positive step or flight time.
///
/// Fails with `InvalidInput` above [`MAX_SAMPLES`].
pub fn sample_count(flight_time: f64, time_step: f64) -> Result<usize> {
    if !(time_step > 0. && flight_time > 0.) {
        return Ok(0);
    }
    let steps = (flight_time / time_step).floor();
    if !(steps <= MAX_SAMPLES as f64) {
        return Err(EstimateError::InvalidInput("too many samples for the flight time and time step"));
    }
    Ok(steps as usize)
}
