//! Roll attitude estimation for handheld devices
//!
//! Fuses a gyroscope rate signal with an accelerometer-derived gravity
//! reference into a single stabilized roll angle (rotation about the
//! device's forward axis). The integrated gyro path supplies the
//! high-frequency response, the low-passed gravity path supplies the
//! drift-free reference, and a complementary blend reconciles the two
//! once per fixed update tick.
//!
//! The estimator is deliberately single-axis: it tracks one scalar roll
//! rather than a full 3-DOF attitude, which is all that camera roll
//! stabilization needs.

pub mod angle;
mod clock;
mod config;
mod estimator;
mod gravity;
mod gyro;
mod types;

pub use clock::{TickClock, MIN_TICK_SECONDS};
pub use config::{ConfigError, EstimatorConfig};
pub use estimator::{
    CalibrationError, Phase, RollEstimator, ARMING_GRAVITY_THRESHOLD,
    CALIBRATION_GRAVITY_THRESHOLD,
};
pub use gravity::{roll_from_gravity, GravityFilter};
pub use gyro::GyroIntegrator;
pub use types::{RollSink, SensorSample};
