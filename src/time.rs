//! Frame admission timing.
//!
//! The engine is driven by host ticks that may arrive at any cadence; the
//! [`FrameClock`] decides which of them become animation frames. It works
//! on caller-supplied monotonic timestamps rather than reading a clock
//! itself, so tests can drive it with synthetic time.
//!
//! # Example
//!
//! ```ignore
//! use brim::time::FrameClock;
//! use std::time::{Duration, Instant};
//!
//! let mut clock = FrameClock::new(Duration::from_secs_f64(1.0 / 60.0));
//! let start = Instant::now();
//!
//! // In your render loop:
//! if clock.try_admit(start.elapsed()) {
//!     // advance and draw one frame
//! }
//! ```

use std::time::Duration;

/// Decides which host ticks are accepted as animation frames.
///
/// A tick is accepted when it is the first one ever, or when at least the
/// configured interval has elapsed since the last accepted tick. Early,
/// duplicate, and out-of-order ticks are rejected without any state
/// change, which caps the effective frame rate regardless of how often
/// the host calls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameClock {
    interval: Duration,
    last_accepted: Option<Duration>,
}

impl FrameClock {
    /// Create a clock admitting at most one tick per `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: None,
        }
    }

    /// Propose a tick at monotonic timestamp `now`.
    ///
    /// Returns true and records the timestamp when the tick is due;
    /// returns false and records nothing otherwise. A timestamp at or
    /// before the last accepted one is never due, so a clock with a zero
    /// interval still rejects duplicates.
    pub fn try_admit(&mut self, now: Duration) -> bool {
        let due = match self.last_accepted {
            None => true,
            Some(last) => now > last && now - last >= self.interval,
        };
        if due {
            self.last_accepted = Some(now);
        }
        due
    }

    /// Forget the last accepted tick, so the next proposal is accepted
    /// unconditionally.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }

    /// The minimum time between accepted ticks.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Timestamp of the most recently accepted tick, if any.
    #[inline]
    pub fn last_accepted(&self) -> Option<Duration> {
        self.last_accepted
    }
}
