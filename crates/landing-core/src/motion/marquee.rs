//! L4 Atomic Layer: Infinite linear loop clock for marquee tracks
//!
//! The track holds its content twice, so travelling exactly half of its own
//! width lands on a frame identical to the start. Wrapping the phase back to
//! zero at that point is invisible and no content measurement is needed.

use std::time::{Duration, Instant};

use super::timing::secs;

/// Offset reached at the end of each cycle, as a percentage of track width
pub const MARQUEE_TRAVEL_PCT: f64 = -50.0;

#[derive(Debug, Clone, Copy)]
pub struct MarqueeClock {
    started: Instant,
    cycle: Duration,
}

impl MarqueeClock {
    /// Start a loop now that completes one cycle every `cycle_secs`
    pub fn start(cycle_secs: f64, now: Instant) -> Self {
        Self {
            started: now,
            cycle: secs(cycle_secs),
        }
    }

    pub fn cycle(&self) -> Duration {
        self.cycle
    }

    /// Position inside the current cycle, in [0, 1)
    ///
    /// A zero-length cycle never moves.
    pub fn phase(&self, now: Instant) -> f64 {
        if self.cycle.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.started).as_secs_f64();
        (elapsed / self.cycle.as_secs_f64()).fract()
    }

    /// Completed cycles since start
    pub fn cycles(&self, now: Instant) -> u64 {
        if self.cycle.is_zero() {
            return 0;
        }
        let elapsed = now.saturating_duration_since(self.started).as_secs_f64();
        (elapsed / self.cycle.as_secs_f64()).floor() as u64
    }

    /// Current horizontal offset as a percentage of track width, in (-50, 0]
    pub fn offset_pct(&self, now: Instant) -> f64 {
        MARQUEE_TRAVEL_PCT * self.phase(now)
    }
}
