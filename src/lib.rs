//! Altitude estimation from noisy sensors.
//!
//! A moving object's altitude is observed by sensors whose error grows with altitude. Each sensor's
//! measurement sequence is filtered by a scalar Kalman filter: the single state is the altitude, the
//! prediction is driven by a constant velocity and the measurement noise is chosen from the velocity.
//! Process noise is gated on the measured altitude and measurements beyond the sensor range pass through unfiltered.
//!
//! The filtered estimates of two independent sensors are then fused by inverse variance weighting,
//! giving a single estimate with a lower variance than either sensor alone.
//!
//! State and configuration are represented by structs in [`models`], the estimation operations by traits.
//! The estimators are numerically generic over nalgebra's `RealField`.
//!
//! Around the estimators the crate provides a two sensor simulation: a ground truth ramp, altitude banded
//! sensor noise drawn from an injected random generator, a persisted JSON record of every run and error statistics.
//!
//! # Licensing
//!
//! The copyright notice is that of the MIT license.
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction,
//! including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software,
//! and to permit persons to whom the Software is furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NON INFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY,
//! WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

pub mod error;
pub mod models;
pub mod estimators;
pub mod noise;
pub mod signal;
pub mod simulation;
pub mod record;
pub mod stats;
mod numeric;

pub use error::{EstimateError, Result};
