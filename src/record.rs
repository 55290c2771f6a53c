//! Persisted simulation record.
//!
//! The record keeps every sequence of a run under fixed JSON keys so saved runs can be
//! reloaded and inspected later. A plain text summary of the error statistics can be written next to it.

use serde::{Deserialize, Serialize};

use crate::error::{EstimateError, Result};
use crate::simulation::SimulationConfig;
use crate::stats::{reduction_percentage, std_error};

/// All sequences of one simulation run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    /// True altitude
    pub signals_y: Vec<f64>,
    /// Sample times
    pub signals_x: Vec<f64>,
    pub noised_signals_y_1: Vec<f64>,
    pub noised_signals_y_2: Vec<f64>,
    pub estimated_signals_y_1: Vec<f64>,
    pub estimated_signals_y_2: Vec<f64>,
    pub combined_estimated_y: Vec<f64>,
    /// Sampling step of the filtered sequences
    pub kalman_step: usize,
}

impl SimulationRecord {
    /// Checks the sequence lengths agree.
    ///
    /// Raw sequences match the time sequence, filtered and combined sequences match its sampled length.
    pub fn validate(&self) -> Result<()> {
        if self.kalman_step == 0 {
            return Err(EstimateError::InvalidInput("kalman step must be at least 1"));
        }

        let n = self.signals_x.len();
        let raw = [
            ("signals_y", &self.signals_y),
            ("noised_signals_y_1", &self.noised_signals_y_1),
            ("noised_signals_y_2", &self.noised_signals_y_2),
        ];
        check_lengths(&raw, n)?;

        let sampled = self.sampled_len();
        let filtered = [
            ("estimated_signals_y_1", &self.estimated_signals_y_1),
            ("estimated_signals_y_2", &self.estimated_signals_y_2),
            ("combined_estimated_y", &self.combined_estimated_y),
        ];
        check_lengths(&filtered, sampled)
    }

    /// Number of samples in the filtered sequences.
    pub fn sampled_len(&self) -> usize {
        if self.kalman_step == 0 {
            return 0;
        }
        (self.signals_x.len() + self.kalman_step - 1) / self.kalman_step
    }

    /// Sample times of the filtered sequences.
    pub fn sampled_times(&self) -> Vec<f64> {
        sampled(&self.signals_x, self.kalman_step)
    }

    /// True altitude at the sample times of the filtered sequences.
    pub fn sampled_truth(&self) -> Vec<f64> {
        sampled(&self.signals_y, self.kalman_step)
    }

    #[cfg(feature = "std")]
    pub fn save_json<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("simulation record saved to {}", path.as_ref().display());
        Ok(())
    }

    #[cfg(feature = "std")]
    pub fn load_json<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let record: SimulationRecord = serde_json::from_str(&contents)?;
        record.validate()?;
        log::info!(
            "simulation record loaded from {} ({} samples)",
            path.as_ref().display(),
            record.signals_x.len()
        );
        Ok(record)
    }
}

fn check_lengths(sequences: &[(&'static str, &Vec<f64>)], expected: usize) -> Result<()> {
    for &(what, sequence) in sequences {
        if sequence.len() != expected {
            return Err(EstimateError::LengthMismatch {
                what,
                expected,
                actual: sequence.len(),
            });
        }
    }
    Ok(())
}

fn sampled(values: &[f64], step: usize) -> Vec<f64> {
    values.iter().step_by(step.max(1)).copied().collect()
}

/// Error statistics of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationReport {
    pub std_noisy_1: f64,
    pub std_filtered_1: f64,
    pub std_noisy_2: f64,
    pub std_filtered_2: f64,
    pub std_combined: f64,
    /// Reduction from the first sensor's noisy error to the combined error, in percent
    pub reduction_percentage: f64,
}

impl SimulationReport {
    pub fn from_record(record: &SimulationRecord) -> Result<Self> {
        record.validate()?;
        let truth = record.sampled_truth();

        let std_noisy_1 = std_error(&record.signals_y, &record.noised_signals_y_1)?;
        let std_noisy_2 = std_error(&record.signals_y, &record.noised_signals_y_2)?;
        let std_filtered_1 = std_error(&truth, &record.estimated_signals_y_1)?;
        let std_filtered_2 = std_error(&truth, &record.estimated_signals_y_2)?;
        let std_combined = std_error(&truth, &record.combined_estimated_y)?;

        Ok(SimulationReport {
            std_noisy_1,
            std_filtered_1,
            std_noisy_2,
            std_filtered_2,
            std_combined,
            reduction_percentage: reduction_percentage(std_noisy_1, std_combined),
        })
    }

    /// The configuration lines followed by the statistics lines.
    pub fn summary(&self, config: &SimulationConfig) -> String {
        let mut lines = config.summary_lines();
        lines.push("statistics:".to_string());
        lines.push(format!("std of noisy errors, sensor 1: {}", self.std_noisy_1));
        lines.push(format!("std of filtered errors, sensor 1: {}", self.std_filtered_1));
        lines.push(format!("std of noisy errors, sensor 2: {}", self.std_noisy_2));
        lines.push(format!("std of filtered errors, sensor 2: {}", self.std_filtered_2));
        lines.push(format!("std of combined errors: {}", self.std_combined));
        lines.push(format!("std reduction: {:.2}%", self.reduction_percentage));
        lines.join("\n") + "\n"
    }

    #[cfg(feature = "std")]
    pub fn write_summary<P: AsRef<std::path::Path>>(&self, path: P, config: &SimulationConfig) -> Result<()> {
        std::fs::write(path.as_ref(), self.summary(config))?;
        log::info!("simulation summary written to {}", path.as_ref().display());
        Ok(())
    }
}
