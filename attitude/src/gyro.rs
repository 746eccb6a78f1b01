//! Gyro-Z differencing and integration.

/// Tracks the previous gyro-Z sample and produces bounded per-tick roll
/// increments.
///
/// Only constructed once the estimator arms; before that no baseline
/// exists and integration is suppressed entirely.
#[derive(Debug, Clone, Copy)]
pub struct GyroIntegrator {
    last_gyro_z: f64,
}

impl GyroIntegrator {
    /// Capture the baseline sample at arming time.
    pub fn armed_at(gyro_z: f64) -> Self {
        Self { last_gyro_z: gyro_z }
    }

    /// Last-seen gyro-Z sample, in radians/second.
    pub fn baseline(&self) -> f64 {
        self.last_gyro_z
    }

    /// Clamped roll increment for this tick, advancing the baseline.
    ///
    /// The clamp bounds the raw difference between consecutive samples
    /// (guarding sensor glitches), not a normalized rate; its effective
    /// bound on true angular velocity therefore scales inversely with the
    /// tick interval.
    pub fn step(
        &mut self,
        gyro_z: f64,
        dt: f64,
        max_rotation_speed: f64,
        sensitivity: f64,
    ) -> f64 {
        let delta = (gyro_z - self.last_gyro_z).clamp(-max_rotation_speed, max_rotation_speed);
        self.last_gyro_z = gyro_z;
        delta * dt * sensitivity
    }
}
