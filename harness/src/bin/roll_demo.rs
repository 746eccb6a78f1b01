//! Real-time demo loop for the roll estimator.
//!
//! Drives the estimator with a scripted motion profile at the configured
//! tick rate, applies the published roll to a camera rig, and advances the
//! scene recycler alongside, logging estimate-vs-truth as it goes.

use anyhow::Result;
use attitude::{angle::angle_difference, EstimatorConfig, RollEstimator, RollSink, TickClock};
use clap::{Parser, ValueEnum};
use harness::{CameraRig, ConstantRoll, MotionProfile, NoisyProfile, SinusoidalSway, StaticPose};
use log::info;
use scene::Recycler;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Profile {
    /// Device held still at a fixed roll.
    Static,
    /// Constant roll rate.
    Spin,
    /// Sinusoidal sway about the calibration pose.
    Sway,
}

#[derive(Parser, Debug)]
#[command(about = "Run the roll estimator against a scripted motion profile")]
struct Args {
    /// Motion profile to simulate
    #[arg(long, value_enum, default_value_t = Profile::Sway)]
    profile: Profile,

    /// Simulation length in seconds
    #[arg(long, default_value_t = 10.0)]
    duration: f64,

    /// Update rate in Hz
    #[arg(long, default_value_t = 60.0)]
    tick_hz: f64,

    /// Add Gaussian sensor noise with this seed
    #[arg(long)]
    noise_seed: Option<u64>,

    /// Per-tick blend weight toward the gravity reference
    #[arg(long, default_value_t = 0.05)]
    gravity_influence: f64,

    /// Gain on integrated gyro deltas
    #[arg(long, default_value_t = 1.0)]
    gyro_sensitivity: f64,
}

fn build_profile(args: &Args) -> Box<dyn MotionProfile> {
    let base: Box<dyn MotionProfile> = match args.profile {
        Profile::Static => Box::new(StaticPose::new(0.4)),
        Profile::Spin => Box::new(ConstantRoll::new(0.2)),
        Profile::Sway => Box::new(SinusoidalSway::new(0.5, 0.1)),
    };
    match args.noise_seed {
        Some(seed) => Box::new(NoisyProfile::new(base, seed, 0.05, 0.2)),
        None => base,
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = EstimatorConfig {
        gravity_influence: args.gravity_influence,
        gyro_sensitivity: args.gyro_sensitivity,
        ..Default::default()
    };
    let mut estimator = RollEstimator::new(config)?;
    let mut profile = build_profile(&args);
    let mut rig = CameraRig::new();
    let mut recycler = Recycler::default();

    // Calibrate from the profile's initial pose, exactly as the app would
    // on startup.
    let first = profile.sample(0.0);
    estimator.calibrate(&first.gravity)?;
    info!(
        "calibrated, anchor {:.4} rad; running {:.1} s at {:.0} Hz",
        estimator.base_gravity_roll(),
        args.duration,
        args.tick_hz
    );

    let period = Duration::from_secs_f64(1.0 / args.tick_hz);
    let mut clock = TickClock::new(period.as_secs_f64());
    let start = Instant::now();
    let mut next_report = Duration::ZERO;

    while start.elapsed().as_secs_f64() < args.duration {
        let t = start.elapsed().as_secs_f64();
        let sample = profile.sample(t);
        let dt = clock.dt();

        let roll = estimator.tick(&sample, dt);
        rig.apply_roll(roll);
        recycler.advance(dt);

        if start.elapsed() >= next_report {
            let truth = profile.true_roll(t);
            info!(
                "t={t:6.2}s roll={roll:+.4} truth={truth:+.4} err={:+.4} visible={}",
                angle_difference(truth, roll),
                recycler.visible_count()
            );
            next_report += Duration::from_millis(500);
        }

        std::thread::sleep(period);
    }

    info!("final camera rotation: {:?}", rig.rotation());
    Ok(())
}
