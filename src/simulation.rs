//! Two sensor altitude simulation.
//!
//! A run generates the true altitude ramp, measures it with two independently noised sensors,
//! filters each sensor's measurements and fuses the two filtered sequences.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::{EstimateError, Result};
use crate::estimators::fusion::combine_sequences;
use crate::estimators::scalar_kalman::ScalarKalmanFilter;
use crate::models::{FilterConfig, DEFAULT_Q_HIGH, DEFAULT_Q_LOW};
use crate::noise::{noise_sequence, BandedUniformNoise};
use crate::record::SimulationRecord;
use crate::signal::{generate_true_signal, sample_count};

/// Simulation parameters.
///
/// Built once per run and never changed by it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Rate of altitude change, also the filter velocity
    pub speed: f64,
    pub start_height: f64,
    pub time_step: f64,
    pub flight_time: f64,
    pub q_low: f64,
    pub q_high: f64,
    /// Only every `kalman_step`th measurement is filtered
    pub kalman_step: usize,
    pub noise: BandedUniformNoise,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            speed: 2.,
            start_height: 0.,
            time_step: 0.05,
            flight_time: 600.,
            q_low: DEFAULT_Q_LOW,
            q_high: DEFAULT_Q_HIGH,
            kalman_step: 1,
            noise: BandedUniformNoise::default(),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.speed,
            self.start_height,
            self.time_step,
            self.flight_time,
            self.q_low,
            self.q_high,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(EstimateError::InvalidInput("simulation parameters must be finite"));
        }
        if self.speed < 0. {
            return Err(EstimateError::InvalidInput("speed must be non-negative"));
        }
        if self.time_step <= 0. {
            return Err(EstimateError::InvalidInput("time step must be positive"));
        }
        if self.flight_time < 0. {
            return Err(EstimateError::InvalidInput("flight time must be non-negative"));
        }
        if self.kalman_step == 0 {
            return Err(EstimateError::InvalidInput("kalman step must be at least 1"));
        }
        sample_count(self.flight_time, self.time_step)?;
        Ok(())
    }

    /// Reads a configuration from a JSON file. Missing fields take their defaults.
    #[cfg(feature = "std")]
    pub fn load_json<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: SimulationConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// `key: value` lines of the ground truth parameters.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("speed: {}", self.speed),
            format!("start_height: {}", self.start_height),
            format!("time_step: {}", self.time_step),
            format!("flight_time: {}", self.flight_time),
        ]
    }
}

/// One sensor's part of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct SensorRun {
    /// Every noisy measurement
    pub noised: Vec<f64>,
    /// Filter output for the sampled measurements
    pub estimates: Vec<f64>,
    pub final_variance: f64,
}

/// Result of a simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationOutcome {
    pub record: SimulationRecord,
    pub sensor_1: SensorRun,
    pub sensor_2: SensorRun,
    pub fused_variance: f64,
}

/// The simulation driver.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Simulation { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs with sensor generators seeded from `seed` and `seed + 1`.
    pub fn run_seeded(&self, seed: u64) -> Result<SimulationOutcome> {
        let mut rng_1 = StdRng::seed_from_u64(seed);
        let mut rng_2 = StdRng::seed_from_u64(seed.wrapping_add(1));
        self.run(&mut rng_1, &mut rng_2)
    }

    /// Runs with one noise generator per sensor.
    pub fn run<R1: RngCore + ?Sized, R2: RngCore + ?Sized>(
        &self,
        rng_1: &mut R1,
        rng_2: &mut R2,
    ) -> Result<SimulationOutcome> {
        let truth = generate_true_signal(&self.config)?;
        if truth.is_empty() {
            return Err(EstimateError::InvalidInput("flight shorter than one time step"));
        }
        let filter_config = FilterConfig::new(self.config.speed, self.config.q_low, self.config.q_high)?;

        let sensor_1 = self.sensor_run(&filter_config, &truth.altitudes, rng_1)?;
        let sensor_2 = self.sensor_run(&filter_config, &truth.altitudes, rng_2)?;

        let (combined, fused_variance) = combine_sequences(
            &sensor_1.estimates,
            sensor_1.final_variance,
            &sensor_2.estimates,
            sensor_2.final_variance,
        )?;
        log::debug!(
            "simulated {} samples, sensor variances {} and {}, fused variance {}",
            truth.len(),
            sensor_1.final_variance,
            sensor_2.final_variance,
            fused_variance
        );

        let record = SimulationRecord {
            signals_y: truth.altitudes,
            signals_x: truth.times,
            noised_signals_y_1: sensor_1.noised.clone(),
            noised_signals_y_2: sensor_2.noised.clone(),
            estimated_signals_y_1: sensor_1.estimates.clone(),
            estimated_signals_y_2: sensor_2.estimates.clone(),
            combined_estimated_y: combined,
            kalman_step: self.config.kalman_step,
        };
        record.validate()?;

        Ok(SimulationOutcome {
            record,
            sensor_1,
            sensor_2,
            fused_variance,
        })
    }

    fn sensor_run<R: RngCore + ?Sized>(
        &self,
        filter_config: &FilterConfig<f64>,
        truth: &[f64],
        rng: &mut R,
    ) -> Result<SensorRun> {
        let noised = noise_sequence(&self.config.noise, truth, rng);
        let sampled = noised
            .iter()
            .step_by(self.config.kalman_step)
            .copied()
            .collect::<Vec<_>>();

        let (estimates, final_variance) = ScalarKalmanFilter::from_config(*filter_config, &sampled)?.run()?;
        Ok(SensorRun {
            noised,
            estimates,
            final_variance,
        })
    }
}
