//! Tunable estimator parameters.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

/// Validation failures for [`EstimatorConfig`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// `gravity_influence` is a blend weight and must sit in [0, 1].
    #[error("gravity_influence must be within [0, 1], got {0}")]
    GravityInfluenceOutOfRange(f64),
    /// `max_rotation_speed` must be a positive, finite clamp.
    #[error("max_rotation_speed must be positive and finite, got {0}")]
    InvalidMaxRotationSpeed(f64),
    /// `gyro_sensitivity` must be finite.
    #[error("gyro_sensitivity must be finite, got {0}")]
    InvalidGyroSensitivity(f64),
}

/// Tuning parameters for the roll estimator, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Unitless gain applied to integrated gyro deltas.
    pub gyro_sensitivity: f64,
    /// Per-tick blend weight pulling the integrated roll back toward the
    /// gravity reference. Higher values trust gravity more.
    pub gravity_influence: f64,
    /// Clamp on the per-tick gyro-Z sample difference, in radians.
    ///
    /// This bounds the raw difference between consecutive samples rather
    /// than a normalized rate, so the effective bound on true angular
    /// velocity scales with the tick rate. Kept as-is for fidelity with the
    /// tuning this value was chosen under.
    pub max_rotation_speed: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            gyro_sensitivity: 1.0,
            gravity_influence: 0.05,
            max_rotation_speed: 3.0 * PI,
        }
    }
}

impl EstimatorConfig {
    /// Check the tunables for sane ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gyro_sensitivity.is_finite() {
            return Err(ConfigError::InvalidGyroSensitivity(self.gyro_sensitivity));
        }
        if !(0.0..=1.0).contains(&self.gravity_influence) {
            return Err(ConfigError::GravityInfluenceOutOfRange(
                self.gravity_influence,
            ));
        }
        if !self.max_rotation_speed.is_finite() || self.max_rotation_speed <= 0.0 {
            return Err(ConfigError::InvalidMaxRotationSpeed(
                self.max_rotation_speed,
            ));
        }
        Ok(())
    }
}
