//! Annular arc hit testing for the on-screen dial.

use nalgebra::Vector2;
use std::f64::consts::{PI, TAU};

/// Default dial geometry, in pixels.
const DEFAULT_RADIUS: f64 = 300.0;
const DEFAULT_LINE_WIDTH: f64 = 11.0;
/// Default highlighted sector: a short arc centered on the left of the dial.
const DEFAULT_START_ANGLE: f64 = PI * 7.0 / 8.0;
const DEFAULT_END_ANGLE: f64 = PI * 9.0 / 8.0;

/// A stroked angular sector of a circle: the set of points whose distance
/// from the center is within half the stroke width of the radius and whose
/// polar angle falls inside the sector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcRegion {
    pub center: Vector2<f64>,
    pub radius: f64,
    /// Sector start, radians counterclockwise from +X.
    pub start_angle: f64,
    /// Sector end; may be less than `start_angle` modulo a full turn, in
    /// which case the sector crosses the 0/TAU seam.
    pub end_angle: f64,
    pub line_width: f64,
}

impl ArcRegion {
    pub fn new(
        center: Vector2<f64>,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        line_width: f64,
    ) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
            line_width,
        }
    }

    /// The stock dial sector around a given screen center.
    pub fn dial(center: Vector2<f64>) -> Self {
        Self::new(
            center,
            DEFAULT_RADIUS,
            DEFAULT_START_ANGLE,
            DEFAULT_END_ANGLE,
            DEFAULT_LINE_WIDTH,
        )
    }

    /// Whether `point` lands on the stroked arc, padded by `tolerance`
    /// pixels on both sides of the stroke.
    pub fn contains(&self, point: &Vector2<f64>, tolerance: f64) -> bool {
        let offset = point - self.center;
        let distance = offset.norm();

        let half_stroke = self.line_width / 2.0 + tolerance;
        if distance < self.radius - half_stroke || distance > self.radius + half_stroke {
            return false;
        }

        // Polar angle of the tap, normalized to [0, TAU).
        let mut angle = offset.y.atan2(offset.x);
        if angle < 0.0 {
            angle += TAU;
        }

        let start = self.start_angle.rem_euclid(TAU);
        let end = self.end_angle.rem_euclid(TAU);

        if start <= end {
            angle >= start && angle <= end
        } else {
            // Sector wraps through zero.
            angle >= start || angle <= end
        }
    }
}
