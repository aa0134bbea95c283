//! Animation tuning constants.
//!
//! Every magic number in the animation lives here as a named field with its
//! canonical default. The defaults are hand-tweaked for the intended look,
//! not derived from first principles; adjust them through the `with_*`
//! builders or struct update syntax.
//!
//! # Example
//!
//! ```ignore
//! use brim::prelude::*;
//! use std::time::Duration;
//!
//! let tuning = Tuning::default()
//!     .with_frame_interval(Duration::from_millis(33))
//!     .with_fill_ceiling_ratio(0.1);
//! let anim = Animation::new(viewport).with_tuning(tuning);
//! ```

use std::time::Duration;

/// Tuning constants for the fill animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    // Fill kinematics
    /// The liquid tops out at this fraction of the viewport height,
    /// measured from the top (0.25 leaves the top quarter empty).
    /// Must be below 1.0.
    pub fill_ceiling_ratio: f32,
    /// Initial rise speed as a fraction of viewport height per frame.
    pub rise_speed_ratio: f32,
    /// Rise speed floor in px/frame; keeps the liquid from stalling short
    /// of the target.
    pub min_rise_speed: f32,

    // Wave amplitude
    /// Initial amplitude = viewport width / this, capped at `peak_cap`.
    pub peak_divisor: f32,
    /// Upper bound on the initial amplitude in px.
    pub peak_cap: f32,
    /// Resting amplitude = viewport width / this, floored at
    /// `min_peak_floor`.
    pub min_peak_divisor: f32,
    /// Lower bound on the resting amplitude in px. Nonzero, so the settled
    /// wave keeps moving instead of going flat.
    pub min_peak_floor: f32,
    /// Initial amplitude attenuation speed as a fraction of viewport width
    /// per frame.
    pub attenuation_ratio: f32,
    /// Per-frame attenuation step = attenuation speed / this.
    pub attenuation_decay: f32,
    /// Attenuation speed floor in px/frame.
    pub attenuation_floor: f32,

    // Scroll and continuity
    /// Horizontal scroll per frame as a fraction of viewport width.
    pub scroll_ratio: f32,
    /// Back layer x shift = viewport width / this.
    pub back_shift_divisor: f32,
    /// The vertical correction closes 1/this of the remaining gap per
    /// frame.
    pub smoothing_divisor: f32,
    /// Gap in px under which the vertical correction snaps exactly.
    pub snap_threshold: f32,

    // Frame pacing
    /// Minimum elapsed time between accepted ticks.
    pub frame_interval: Duration,

    // Scale
    /// Tick spacing = viewport height / this.
    pub scale_divisions: f32,
    /// Every Nth tick is major. Must be nonzero.
    pub major_every: usize,
    /// Major tick length = viewport width * this, capped at `major_cap`.
    pub major_ratio: f32,
    /// Upper bound on the major tick length in px.
    pub major_cap: f32,
    /// Minor tick length as a fraction of the major length.
    pub minor_ratio: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            fill_ceiling_ratio: 0.25,
            rise_speed_ratio: 0.012,
            min_rise_speed: 1.0,
            peak_divisor: 6.0,
            peak_cap: 200.0,
            min_peak_divisor: 80.0,
            min_peak_floor: 20.0,
            attenuation_ratio: 0.008,
            attenuation_decay: 10.0,
            attenuation_floor: 0.2,
            scroll_ratio: 0.012,
            back_shift_divisor: 30.0,
            smoothing_divisor: 10.0,
            snap_threshold: 1.0,
            frame_interval: Duration::from_secs_f64(1.0 / 60.0),
            scale_divisions: 100.0,
            major_every: 10,
            major_ratio: 0.1,
            major_cap: 25.0,
            minor_ratio: 0.65,
        }
    }
}

impl Tuning {
    /// Set the minimum time between accepted ticks.
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Set the fraction of the viewport height the liquid leaves empty.
    pub fn with_fill_ceiling_ratio(mut self, ratio: f32) -> Self {
        self.fill_ceiling_ratio = ratio;
        self
    }

    /// Set the horizontal scroll speed as a fraction of width per frame.
    pub fn with_scroll_ratio(mut self, ratio: f32) -> Self {
        self.scroll_ratio = ratio;
        self
    }

    /// Set the resting wave amplitude floor in px.
    pub fn with_min_peak_floor(mut self, floor: f32) -> Self {
        self.min_peak_floor = floor;
        self
    }
}
