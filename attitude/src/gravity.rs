//! Gravity smoothing and roll derivation
//!
//! Low-pass-filters the raw gravity vector and collapses it to a single
//! roll angle with a quadrant-dependent axis projection.

use nalgebra::Vector3;

/// Retained fraction of the smoothing history per update.
const HISTORY_WEIGHT: f64 = 0.7;
/// Fraction of the new sample blended in per update.
const SAMPLE_WEIGHT: f64 = 0.3;
/// Dominant-axis threshold for quadrant selection. Tuned constant; the
/// comparison is inclusive so an input exactly on the boundary always takes
/// the first matching branch.
const DOMINANT_AXIS_THRESHOLD: f64 = 0.9;
/// Smallest filtered-gravity norm considered a usable direction.
const MIN_GRAVITY_NORM: f64 = 1e-9;

/// Exponentially-smoothed gravity reference.
#[derive(Debug, Clone, Default)]
pub struct GravityFilter {
    history: Vector3<f64>,
}

impl GravityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the smoothing history. Done on recalibration so stale motion
    /// does not bleed into the new anchor.
    pub fn reset(&mut self) {
        self.history = Vector3::zeros();
    }

    /// Blend a raw gravity sample into the history and derive the roll.
    ///
    /// Returns `None` when the smoothed vector has no usable direction
    /// (sensor reporting near-zero gravity); callers skip gravity
    /// correction for that tick.
    pub fn update(&mut self, gravity: &Vector3<f64>) -> Option<f64> {
        self.history = self.history * HISTORY_WEIGHT + gravity * SAMPLE_WEIGHT;
        self.history
            .try_normalize(MIN_GRAVITY_NORM)
            .map(|unit| roll_from_gravity(&unit))
    }
}

/// Project a unit gravity direction onto a single roll angle.
///
/// Collapsing a 3D direction to one angle is ambiguous; the branch on the
/// dominant axis resolves it for the three regimes that matter:
/// device flat on a table (dominant Z), device upright in portrait
/// (dominant Y), and intermediate tilt (XY-plane projection). Output is in
/// (-PI, PI].
pub fn roll_from_gravity(unit_gravity: &Vector3<f64>) -> f64 {
    if unit_gravity.z.abs() >= DOMINANT_AXIS_THRESHOLD {
        // Flat, screen up or down: (0, 0, -9.8) lands here. With the
        // projected XY component exactly zero the roll is 0 by convention.
        if unit_gravity.x == 0.0 && unit_gravity.y == 0.0 {
            return 0.0;
        }
        return (-unit_gravity.x).atan2(-unit_gravity.y);
    }
    if unit_gravity.y.abs() >= DOMINANT_AXIS_THRESHOLD {
        // Held upright in portrait.
        return unit_gravity.x.atan2(unit_gravity.z);
    }
    // Intermediate tilt: project onto the device XY plane. The projection
    // cannot be degenerate here since neither Y nor Z dominates.
    let planar = Vector3::new(unit_gravity.x, unit_gravity.y, 0.0).normalize();
    (-planar.y).atan2(planar.x)
}
