//! Harness for exercising the roll estimator without real sensors
//!
//! Provides scripted motion profiles that synthesize gyro/gravity sample
//! streams, a camera rig implementing the roll sink, and the glue used by
//! the demo binary and the integration tests.

pub mod camera_rig;
pub mod motion_profiles;

pub use camera_rig::CameraRig;
pub use motion_profiles::{
    ConstantRoll, MotionProfile, NoisyProfile, SinusoidalSway, StaticPose, GRAVITY_MAGNITUDE,
};
