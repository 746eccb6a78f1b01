//! Scalar angle arithmetic for roll tracking
//!
//! All angles are in radians. The canonical wrapped range is the
//! half-open interval (-PI, PI].

use std::f64::consts::{PI, TAU};

/// Wrap an angle to (-PI, PI].
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Shortest signed difference `to - from`, wrapped to (-PI, PI].
pub fn angle_difference(from: f64, to: f64) -> f64 {
    wrap_angle(to - from)
}

/// Interpolate from `from` toward `to` along the shorter arc.
///
/// `t = 0` returns `from`, `t = 1` returns `to` (modulo wrapping). Unlike
/// naive scalar interpolation this never traverses the long way around the
/// circle when the endpoints straddle the +/-PI seam.
pub fn lerp_angle(from: f64, to: f64, t: f64) -> f64 {
    wrap_angle(from + angle_difference(from, to) * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wrap_identity_in_range() {
        assert_relative_eq!(wrap_angle(0.0), 0.0);
        assert_relative_eq!(wrap_angle(1.0), 1.0);
        assert_relative_eq!(wrap_angle(-3.0), -3.0);
    }

    #[test]
    fn test_wrap_boundaries() {
        // PI maps to itself, -PI maps to +PI: range is (-PI, PI].
        assert_relative_eq!(wrap_angle(PI), PI);
        assert_relative_eq!(wrap_angle(-PI), PI);
        assert_relative_eq!(wrap_angle(3.0 * PI), PI);
    }

    #[test]
    fn test_wrap_multiple_turns() {
        assert_relative_eq!(wrap_angle(5.0 * TAU + 0.25), 0.25, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(-5.0 * TAU - 0.25), -0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_difference_shortest_path() {
        assert_relative_eq!(angle_difference(0.1, 0.3), 0.2, epsilon = 1e-12);
        assert_relative_eq!(angle_difference(0.3, 0.1), -0.2, epsilon = 1e-12);
        // Crossing the seam: 3.0 -> -3.0 is a short hop through PI.
        assert_relative_eq!(
            angle_difference(3.0, -3.0),
            TAU - 6.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_relative_eq!(lerp_angle(0.5, 2.0, 0.0), 0.5);
        assert_relative_eq!(lerp_angle(0.5, 2.0, 1.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lerp_across_seam() {
        // Halfway from just below +PI to just above -PI lands on the seam,
        // not at zero.
        let mid = lerp_angle(PI - 0.1, -PI + 0.1, 0.5);
        assert_relative_eq!(mid.abs(), PI, epsilon = 1e-9);
    }

    #[test]
    fn test_lerp_step_is_bounded() {
        // A small weight never produces a jump bigger than the weighted
        // shortest arc, even at the wrap point.
        let from = PI - 0.05;
        let to = -PI + 0.05;
        let stepped = lerp_angle(from, to, 0.05);
        assert!(angle_difference(from, stepped).abs() <= 0.1 * 0.05 + 1e-12);
    }
}
