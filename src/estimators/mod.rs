//! The altitude estimators.

pub mod fusion;
pub mod scalar_kalman;
