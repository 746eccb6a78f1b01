//! Sensor input and roll output boundary types.

use nalgebra::Vector3;

/// One tick of raw motion sensor data in device-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSample {
    /// Gyroscope angular rates in radians/second.
    pub gyro: Vector3<f64>,
    /// Accelerometer gravity vector; magnitude is roughly the gravitational
    /// constant when the device is stationary.
    pub gravity: Vector3<f64>,
}

impl SensorSample {
    pub fn new(gyro: Vector3<f64>, gravity: Vector3<f64>) -> Self {
        Self { gyro, gravity }
    }
}

/// Consumer of the estimated roll angle.
///
/// Abstracts the camera so the estimator loop can be driven in tests
/// without a renderer. Implementations rotate about the forward axis only,
/// leaving the other two rotation axes untouched.
pub trait RollSink {
    /// Apply the published roll angle in radians.
    fn apply_roll(&mut self, roll_rad: f64);
}
