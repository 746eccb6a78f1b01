//! Scripted device motions for driving the estimator in tests and demos.
//!
//! Profiles synthesize what the platform sensor API would report for a
//! device rolling about its forward axis: the gravity vector rotates
//! through the device XY plane while gyro-Z reports the roll rate.

use attitude::SensorSample;
use nalgebra::Vector3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::TAU;

/// Stationary gravity magnitude reported by the simulated sensor.
pub const GRAVITY_MAGNITUDE: f64 = 9.8;

/// A scripted motion, sampled at arbitrary times.
pub trait MotionProfile {
    /// Sensor readings at `t` seconds into the script.
    fn sample(&mut self, t: f64) -> SensorSample;

    /// Ground-truth roll at `t`, for judging the estimate.
    fn true_roll(&self, t: f64) -> f64;
}

impl<P: MotionProfile + ?Sized> MotionProfile for Box<P> {
    fn sample(&mut self, t: f64) -> SensorSample {
        (**self).sample(t)
    }

    fn true_roll(&self, t: f64) -> f64 {
        (**self).true_roll(t)
    }
}

/// Gravity vector for a device at the given roll, held so gravity lies in
/// the device XY plane (the estimator's planar projection regime).
fn gravity_at_roll(roll: f64) -> Vector3<f64> {
    Vector3::new(roll.cos(), -roll.sin(), 0.0) * GRAVITY_MAGNITUDE
}

/// Device held perfectly still at a fixed roll.
#[derive(Debug, Clone, Copy)]
pub struct StaticPose {
    pub roll: f64,
}

impl StaticPose {
    pub fn new(roll: f64) -> Self {
        Self { roll }
    }
}

impl MotionProfile for StaticPose {
    fn sample(&mut self, _t: f64) -> SensorSample {
        SensorSample::new(Vector3::zeros(), gravity_at_roll(self.roll))
    }

    fn true_roll(&self, _t: f64) -> f64 {
        self.roll
    }
}

/// Device rolling at a constant rate.
#[derive(Debug, Clone, Copy)]
pub struct ConstantRoll {
    /// Roll rate in radians/second.
    pub rate: f64,
}

impl ConstantRoll {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

impl MotionProfile for ConstantRoll {
    fn sample(&mut self, t: f64) -> SensorSample {
        let gyro = Vector3::new(0.0, 0.0, self.rate);
        SensorSample::new(gyro, gravity_at_roll(self.true_roll(t)))
    }

    fn true_roll(&self, t: f64) -> f64 {
        self.rate * t
    }
}

/// Device swaying sinusoidally about its calibration pose.
#[derive(Debug, Clone, Copy)]
pub struct SinusoidalSway {
    /// Peak roll excursion in radians.
    pub amplitude: f64,
    /// Sway frequency in Hz.
    pub frequency: f64,
}

impl SinusoidalSway {
    pub fn new(amplitude: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }
}

impl MotionProfile for SinusoidalSway {
    fn sample(&mut self, t: f64) -> SensorSample {
        let omega = TAU * self.frequency;
        let rate = self.amplitude * omega * (omega * t).cos();
        let gyro = Vector3::new(0.0, 0.0, rate);
        SensorSample::new(gyro, gravity_at_roll(self.true_roll(t)))
    }

    fn true_roll(&self, t: f64) -> f64 {
        self.amplitude * (TAU * self.frequency * t).sin()
    }
}

/// Wraps another profile with seeded Gaussian sensor noise.
pub struct NoisyProfile<P> {
    inner: P,
    rng: ChaCha8Rng,
    gyro_noise: Normal<f64>,
    gravity_noise: Normal<f64>,
}

impl<P: MotionProfile> NoisyProfile<P> {
    /// Standard deviations are in rad/s (gyro) and sensor units (gravity).
    pub fn new(inner: P, seed: u64, gyro_sigma: f64, gravity_sigma: f64) -> Self {
        Self {
            inner,
            rng: ChaCha8Rng::seed_from_u64(seed),
            gyro_noise: Normal::new(0.0, gyro_sigma).expect("sigma must be finite"),
            gravity_noise: Normal::new(0.0, gravity_sigma).expect("sigma must be finite"),
        }
    }

    fn noise_vector(&mut self, distribution: Normal<f64>) -> Vector3<f64> {
        Vector3::new(
            distribution.sample(&mut self.rng),
            distribution.sample(&mut self.rng),
            distribution.sample(&mut self.rng),
        )
    }
}

impl<P: MotionProfile> MotionProfile for NoisyProfile<P> {
    fn sample(&mut self, t: f64) -> SensorSample {
        let clean = self.inner.sample(t);
        let gyro_noise = self.noise_vector(self.gyro_noise);
        let gravity_noise = self.noise_vector(self.gravity_noise);
        SensorSample::new(clean.gyro + gyro_noise, clean.gravity + gravity_noise)
    }

    fn true_roll(&self, t: f64) -> f64 {
        self.inner.true_roll(t)
    }
}
