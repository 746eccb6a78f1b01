//! Camera stand-in consuming the published roll.

use attitude::RollSink;
use nalgebra::Vector3;

/// Euler-rotation camera rig. Only the forward-axis (Z) component is ever
/// driven by the estimator; pitch and yaw belong to other controllers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraRig {
    rotation: Vector3<f64>,
}

impl CameraRig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rotation(rotation: Vector3<f64>) -> Self {
        Self { rotation }
    }

    pub fn rotation(&self) -> Vector3<f64> {
        self.rotation
    }

    pub fn roll(&self) -> f64 {
        self.rotation.z
    }
}

impl RollSink for CameraRig {
    fn apply_roll(&mut self, roll_rad: f64) {
        self.rotation.z = roll_rad;
    }
}
