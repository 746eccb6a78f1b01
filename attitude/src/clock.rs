//! Tick timing against a monotonic clock.

use std::time::Instant;

/// Minimum dt fed to the estimator, guarding the first tick and stalls.
pub const MIN_TICK_SECONDS: f64 = 0.001;

/// Measures the elapsed time between fixed-step ticks.
///
/// The scheduler's nominal step is only used for the very first tick;
/// afterwards the actual elapsed wall time is measured so jitter in the
/// callback cadence does not skew the integration.
#[derive(Debug, Clone)]
pub struct TickClock {
    nominal_step: f64,
    last_tick: Option<Instant>,
}

impl TickClock {
    /// Create a clock with the scheduler's nominal step in seconds.
    pub fn new(nominal_step: f64) -> Self {
        Self {
            nominal_step,
            last_tick: None,
        }
    }

    /// Seconds since the previous call, floored at [`MIN_TICK_SECONDS`].
    pub fn dt(&mut self) -> f64 {
        let now = Instant::now();
        let dt = match self.last_tick {
            Some(last) => now.duration_since(last).as_secs_f64(),
            None => self.nominal_step,
        };
        self.last_tick = Some(now);
        dt.max(MIN_TICK_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::time::Duration;

    #[test]
    fn test_first_tick_uses_nominal_step() {
        let mut clock = TickClock::new(1.0 / 60.0);
        assert_relative_eq!(clock.dt(), 1.0 / 60.0);
    }

    #[test]
    fn test_back_to_back_ticks_hit_the_floor() {
        let mut clock = TickClock::new(1.0 / 60.0);
        let _ = clock.dt();
        assert!(clock.dt() >= MIN_TICK_SECONDS);
    }

    #[test]
    fn test_measures_real_elapsed_time() {
        let mut clock = TickClock::new(1.0 / 60.0);
        let _ = clock.dt();
        std::thread::sleep(Duration::from_millis(20));
        let dt = clock.dt();
        assert!(dt >= 0.02, "dt {dt} shorter than the sleep");
        assert!(dt < 1.0, "dt {dt} implausibly long");
    }
}
