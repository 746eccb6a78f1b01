//! Complementary roll estimator
//!
//! Owns all sensor fusion state and publishes one roll angle per tick.
//! The integrated gyro path reacts quickly but drifts; the low-passed
//! gravity path is stable but laggy; each tick the integrated estimate is
//! pulled back toward the gravity reference by a fixed blend weight.

use log::{debug, info, warn};
use nalgebra::Vector3;
use thiserror::Error;

use crate::angle::{angle_difference, lerp_angle, wrap_angle};
use crate::config::{ConfigError, EstimatorConfig};
use crate::gravity::{roll_from_gravity, GravityFilter};
use crate::gyro::GyroIntegrator;
use crate::types::SensorSample;

/// Minimum gravity magnitude for calibration to succeed.
pub const CALIBRATION_GRAVITY_THRESHOLD: f64 = 0.1;
/// Stricter gravity magnitude required before gyro integration is trusted.
pub const ARMING_GRAVITY_THRESHOLD: f64 = 0.2;

/// Calibration failures. The estimator is left untouched when these occur.
#[derive(Debug, Error, PartialEq)]
pub enum CalibrationError {
    /// Gravity reading too weak to anchor the roll reference (device in
    /// free fall, or the sensor not delivering yet).
    #[error("gravity magnitude {magnitude:.3} at or below calibration threshold {threshold}")]
    WeakGravity { magnitude: f64, threshold: f64 },
}

/// Estimator lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No anchor captured yet; ticks leave the output unchanged.
    Uninitialized,
    /// Anchor captured. Gravity correction runs; gyro integration waits
    /// for a strong enough gravity reading to arm.
    Calibrated,
    /// Gyro baseline captured; full complementary fusion. Terminal until
    /// an explicit recalibration.
    Armed,
}

/// Single-axis attitude estimator fusing gyro-Z integration with a
/// low-passed gravity reference.
///
/// All state is owned here and touched only from the tick path; consumers
/// receive the derived roll by value.
#[derive(Debug, Clone)]
pub struct RollEstimator {
    config: EstimatorConfig,
    phase: Phase,
    gravity_filter: GravityFilter,
    gyro: Option<GyroIntegrator>,
    /// Last published output, radians in (-PI, PI].
    device_roll: f64,
    /// Working estimate ahead of publication.
    target_roll: f64,
    /// Roll captured at the last calibration; the drift-correction anchor.
    base_gravity_roll: f64,
}

impl RollEstimator {
    /// Build an estimator with validated tunables.
    pub fn new(config: EstimatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            phase: Phase::Uninitialized,
            gravity_filter: GravityFilter::new(),
            gyro: None,
            device_roll: 0.0,
            target_roll: 0.0,
            base_gravity_roll: 0.0,
        })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last published roll angle in radians, wrapped to (-PI, PI].
    pub fn device_roll(&self) -> f64 {
        self.device_roll
    }

    /// Anchor roll captured at the last calibration.
    pub fn base_gravity_roll(&self) -> f64 {
        self.base_gravity_roll
    }

    /// Capture the current gravity direction as the drift-correction anchor.
    ///
    /// Succeeds when the gravity magnitude clears
    /// [`CALIBRATION_GRAVITY_THRESHOLD`]: the anchor and both roll scalars
    /// are set to the gravity-derived roll, the smoothing history is
    /// cleared, and the gyro is disarmed until the next tick with a strong
    /// enough gravity reading. On failure every field is left exactly as it
    /// was. Safe to call again at any time to re-zero the view.
    pub fn calibrate(&mut self, gravity: &Vector3<f64>) -> Result<(), CalibrationError> {
        let magnitude = gravity.norm();
        if magnitude <= CALIBRATION_GRAVITY_THRESHOLD {
            warn!("calibration rejected: gravity magnitude {magnitude:.3} too weak");
            return Err(CalibrationError::WeakGravity {
                magnitude,
                threshold: CALIBRATION_GRAVITY_THRESHOLD,
            });
        }

        let anchor = roll_from_gravity(&gravity.normalize());
        self.base_gravity_roll = anchor;
        self.target_roll = anchor;
        self.device_roll = anchor;
        self.gravity_filter.reset();
        self.gyro = None;
        self.phase = Phase::Calibrated;
        info!("roll anchor calibrated to {anchor:.4} rad (gravity magnitude {magnitude:.3})");
        Ok(())
    }

    /// Advance the estimator by one fixed-step tick.
    ///
    /// Returns the roll angle to publish to the camera, wrapped to
    /// (-PI, PI]. Before calibration this returns the last output
    /// unchanged. The tick that arms the gyro only captures the baseline.
    pub fn tick(&mut self, sample: &SensorSample, dt: f64) -> f64 {
        if self.phase == Phase::Uninitialized {
            return self.device_roll;
        }

        // Arm once gravity is strong enough to trust the pose.
        if self.phase == Phase::Calibrated && sample.gravity.norm() > ARMING_GRAVITY_THRESHOLD {
            self.gyro = Some(GyroIntegrator::armed_at(sample.gyro.z));
            self.phase = Phase::Armed;
            debug!("gyro armed with baseline {:.4} rad/s", sample.gyro.z);
            return self.device_roll;
        }

        let current_gravity_roll = self.gravity_filter.update(&sample.gravity);

        if let Some(gyro) = self.gyro.as_mut() {
            self.target_roll += gyro.step(
                sample.gyro.z,
                dt,
                self.config.max_rotation_speed,
                self.config.gyro_sensitivity,
            );
        }

        // Re-express the instantaneous gravity roll relative to the anchor,
        // then pull the integrated estimate toward it along the shorter arc.
        if let Some(gravity_roll) = current_gravity_roll {
            let gravity_diff = angle_difference(self.base_gravity_roll, gravity_roll);
            let target_gravity_roll = self.base_gravity_roll + gravity_diff;
            self.target_roll = lerp_angle(
                self.target_roll,
                target_gravity_roll,
                self.config.gravity_influence,
            );
        }

        self.target_roll = wrap_angle(self.target_roll);
        self.device_roll = self.target_roll;
        self.device_roll
    }
}
