//! Sensor noise models.
//!
//! A noise model turns a true altitude into one noisy sensor measurement.
//! Randomness is always drawn from a caller supplied generator so runs can be reproduced from a seed.

use rand_core::RngCore;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use crate::models::{LOW_ALTITUDE_CEILING, SENSOR_CUTOFF};
use crate::numeric::round_to;

/// Decimal places kept in a measurement.
pub const MEASUREMENT_DECIMALS: u32 = 3;

/// A sensor noise model.
pub trait NoiseModel {
    /// A noisy measurement of the `truth` altitude.
    fn measure<R: RngCore + ?Sized>(&self, truth: f64, rng: &mut R) -> f64;
}

/// Altitude banded uniform noise.
///
/// The measurement error is proportional to the altitude. The ratio is drawn uniformly from
/// `[-low_ratio, low_ratio]` up to `band_ceiling`, from `[-high_ratio, high_ratio]` up to `cutoff`
/// and is zero above the cutoff.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandedUniformNoise {
    pub low_ratio: f64,
    pub high_ratio: f64,
    pub band_ceiling: f64,
    pub cutoff: f64,
}

impl Default for BandedUniformNoise {
    fn default() -> Self {
        BandedUniformNoise {
            low_ratio: 0.03,
            high_ratio: 0.05,
            band_ceiling: LOW_ALTITUDE_CEILING,
            cutoff: SENSOR_CUTOFF,
        }
    }
}

impl BandedUniformNoise {
    /// The noise ratio bound for an altitude.
    pub fn ratio_bound(&self, truth: f64) -> f64 {
        if truth <= self.band_ceiling {
            self.low_ratio
        } else if truth <= self.cutoff {
            self.high_ratio
        } else {
            0.
        }
    }
}

impl NoiseModel for BandedUniformNoise {
    fn measure<R: RngCore + ?Sized>(&self, truth: f64, rng: &mut R) -> f64 {
        let bound = self.ratio_bound(truth);
        let ratio = if bound > 0. {
            Uniform::new_inclusive(-bound, bound).sample(rng)
        } else {
            0.
        };
        round_to(truth + truth * ratio, MEASUREMENT_DECIMALS)
    }
}

/// Measures each altitude of a sequence in order.
pub fn noise_sequence<M: NoiseModel, R: RngCore + ?Sized>(model: &M, truths: &[f64], rng: &mut R) -> Vec<f64> {
    truths.iter().map(|&truth| model.measure(truth, &mut *rng)).collect()
}
