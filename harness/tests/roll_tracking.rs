//! End-to-end estimator behavior against scripted device motions.

use approx::assert_relative_eq;
use attitude::{
    angle::angle_difference, EstimatorConfig, Phase, RollEstimator, RollSink, SensorSample,
};
use harness::{
    CameraRig, ConstantRoll, MotionProfile, NoisyProfile, SinusoidalSway, StaticPose,
};
use nalgebra::Vector3;

const DT: f64 = 1.0 / 60.0;

/// Calibrate from the profile's initial pose and burn the arming tick.
fn start<P: MotionProfile>(profile: &mut P) -> RollEstimator {
    let mut estimator = RollEstimator::new(EstimatorConfig::default()).unwrap();
    let first = profile.sample(0.0);
    estimator.calibrate(&first.gravity).unwrap();
    estimator.tick(&first, DT);
    assert_eq!(estimator.phase(), Phase::Armed);
    estimator
}

#[test]
fn test_static_pose_holds_the_anchor() {
    let mut profile = StaticPose::new(0.4);
    let mut estimator = start(&mut profile);
    for step in 1..600 {
        let t = step as f64 * DT;
        estimator.tick(&profile.sample(t), DT);
    }
    assert_relative_eq!(estimator.device_roll(), 0.4, epsilon = 1e-6);
}

#[test]
fn test_constant_roll_is_tracked_with_bounded_lag() {
    let mut profile = ConstantRoll::new(0.2);
    let mut estimator = start(&mut profile);

    let mut final_error = f64::MAX;
    for step in 1..300 {
        let t = step as f64 * DT;
        let roll = estimator.tick(&profile.sample(t), DT);
        final_error = angle_difference(roll, profile.true_roll(t)).abs();
    }
    // The gravity pull-back trails a moving target; the lag settles at
    // roughly rate * dt / influence and must stay well under it.
    assert!(
        final_error < 0.15,
        "steady-state lag {final_error} too large"
    );
}

#[test]
fn test_sway_is_tracked_with_bounded_error() {
    let mut profile = SinusoidalSway::new(0.5, 0.1);
    let mut estimator = start(&mut profile);

    let mut worst = 0.0f64;
    // Settle for a quarter cycle before judging.
    for step in 1..600 {
        let t = step as f64 * DT;
        let roll = estimator.tick(&profile.sample(t), DT);
        if t > 2.5 {
            worst = worst.max(angle_difference(roll, profile.true_roll(t)).abs());
        }
    }
    assert!(worst < 0.25, "worst-case sway error {worst} too large");
}

#[test]
fn test_noisy_static_pose_stays_near_truth() {
    let mut profile = NoisyProfile::new(StaticPose::new(0.5), 42, 0.05, 0.2);
    let mut estimator = start(&mut profile);
    for step in 1..600 {
        let t = step as f64 * DT;
        estimator.tick(&profile.sample(t), DT);
    }
    let error = angle_difference(estimator.device_roll(), 0.5).abs();
    assert!(error < 0.1, "noisy static error {error} too large");
}

#[test]
fn test_gyro_glitch_is_clamped_and_recovered() {
    let mut profile = StaticPose::new(0.3);
    let mut estimator = start(&mut profile);
    let max_speed = estimator.config().max_rotation_speed;

    // One wild gyro sample: the integrated jump is bounded by the clamp
    // times dt, not by the glitch size.
    let mut glitch = profile.sample(1.0);
    glitch.gyro = Vector3::new(0.0, 0.0, 1e6);
    let before = estimator.device_roll();
    let after = estimator.tick(&glitch, DT);
    let jump = angle_difference(before, after).abs();
    assert!(jump <= max_speed * DT + 1e-9, "glitch jump {jump} exceeds clamp");

    // Sensor returns to rest; the gravity reference reels the estimate back.
    for step in 0..1200 {
        let t = 1.0 + step as f64 * DT;
        estimator.tick(&profile.sample(t), DT);
    }
    let error = angle_difference(estimator.device_roll(), 0.3).abs();
    assert!(error < 1e-3, "post-glitch error {error}");
}

#[test]
fn test_recalibration_rezeroes_mid_run() {
    let mut profile = ConstantRoll::new(0.2);
    let mut estimator = start(&mut profile);
    for step in 1..120 {
        let t = step as f64 * DT;
        estimator.tick(&profile.sample(t), DT);
    }

    // User taps "reset": the current pose becomes the new anchor.
    let t = 120.0 * DT;
    let here = profile.sample(t);
    estimator.calibrate(&here.gravity).unwrap();
    assert_eq!(estimator.phase(), Phase::Calibrated);
    assert_relative_eq!(
        estimator.device_roll(),
        estimator.base_gravity_roll()
    );

    // Next tick re-arms without disturbing the output.
    let rearmed = estimator.tick(&here, DT);
    assert_eq!(estimator.phase(), Phase::Armed);
    assert_relative_eq!(rearmed, estimator.base_gravity_roll());
}

#[test]
fn test_camera_rig_follows_published_roll() {
    let mut profile = StaticPose::new(-0.7);
    let mut estimator = start(&mut profile);
    let mut rig = CameraRig::with_rotation(Vector3::new(0.25, 1.1, 0.0));

    for step in 1..300 {
        let t = step as f64 * DT;
        let roll = estimator.tick(&profile.sample(t), DT);
        rig.apply_roll(roll);
    }
    assert_relative_eq!(rig.roll(), estimator.device_roll());
    // Pitch and yaw are untouched by the estimator path.
    assert_relative_eq!(rig.rotation().x, 0.25);
    assert_relative_eq!(rig.rotation().y, 1.1);
}

#[test]
fn test_free_fall_then_recovery() {
    // Gravity drops out mid-run (device in free fall): correction pauses
    // instead of corrupting the estimate, then resumes when gravity returns.
    let mut profile = StaticPose::new(0.2);
    let mut estimator = start(&mut profile);
    for step in 1..120 {
        estimator.tick(&profile.sample(step as f64 * DT), DT);
    }
    let held = estimator.device_roll();

    let free_fall = SensorSample::new(Vector3::zeros(), Vector3::zeros());
    for _ in 0..240 {
        let roll = estimator.tick(&free_fall, DT);
        assert!(roll.is_finite());
    }
    // Smoothing history decays toward zero during free fall; output drifts
    // at most marginally with a silent gyro.
    assert!(angle_difference(estimator.device_roll(), held).abs() < 1e-6);

    for step in 0..600 {
        estimator.tick(&profile.sample(step as f64 * DT), DT);
    }
    assert!(angle_difference(estimator.device_roll(), 0.2).abs() < 1e-3);
}
