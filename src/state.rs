//! Simulation state: the mutable physical parameters of the fill
//! animation.
//!
//! [`SimState`] is derived from a [`Viewport`] at startup, rescaled in
//! place on resize, and advanced once per accepted frame by the stepper.
//! All fields are plain pixel and per-frame quantities; smaller heights
//! are higher on screen, matching SVG coordinates.

use crate::tuning::Tuning;
use crate::viewport::Viewport;

/// Animation phase, derived from [`SimState::target_reached`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The liquid is still rising toward the target level.
    Rising,
    /// The target level is reached; only amplitude and scroll keep
    /// evolving.
    Settled,
}

/// The mutable state of the fill animation.
///
/// Invariants, maintained by every operation:
/// - `min_height >= current_height >= max_height`
/// - `peak_height >= min_peak_height`
/// - `rise_speed >= 0`
/// - once `target_reached` is true, `current_height` stays pinned to
///   `max_height`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimState {
    /// Wave baseline y in px. Starts at `min_height`, ends at
    /// `max_height`.
    pub current_height: f32,
    /// Starting baseline (the bottom of the viewport).
    pub min_height: f32,
    /// Target baseline (the fill ceiling).
    pub max_height: f32,
    /// `min_height - max_height`, the total rise distance.
    pub height_diff: f32,
    /// Rise speed in px/frame.
    pub rise_speed: f32,
    /// Rise deceleration in px/frame^2, negative.
    pub rise_deceleration: f32,
    /// Wave amplitude in px.
    pub peak_height: f32,
    /// Resting amplitude in px.
    pub min_peak_height: f32,
    /// Amplitude attenuation speed in px/frame.
    pub peak_attenuation_speed: f32,
    /// Accepted frames so far; drives the horizontal scroll phase.
    pub frame_counter: u64,
    /// True once the liquid has reached `max_height`.
    pub target_reached: bool,
    /// Smoothed vertical correction applied to the wave's position.
    pub vertical_offset: f32,
}

impl SimState {
    /// Derive a fresh state from viewport dimensions.
    ///
    /// The deceleration is the unique constant that brings the rise speed
    /// to zero exactly at the target: from `v^2 = v0^2 + 2*a*dh` with
    /// `v = 0`, `a = -v0^2 / (2*dh)`.
    pub fn derive(viewport: Viewport, tuning: &Tuning) -> Self {
        let (width, height) = (viewport.width(), viewport.height());
        let max_height = height * tuning.fill_ceiling_ratio;
        let min_height = height;
        let height_diff = min_height - max_height;
        let rise_speed = height * tuning.rise_speed_ratio;
        let state = Self {
            current_height: min_height,
            min_height,
            max_height,
            height_diff,
            rise_speed,
            rise_deceleration: -(rise_speed * rise_speed) / (2.0 * height_diff),
            peak_height: (width / tuning.peak_divisor).min(tuning.peak_cap),
            min_peak_height: (width / tuning.min_peak_divisor).max(tuning.min_peak_floor),
            peak_attenuation_speed: width * tuning.attenuation_ratio,
            frame_counter: 0,
            target_reached: false,
            vertical_offset: 0.0,
        };
        state.assert_finite();
        state
    }

    /// Rescale in place for a new viewport, preserving animation progress.
    ///
    /// Vertical quantities scale by the height ratio, amplitude quantities
    /// by the width ratio, and the ceiling and floor are re-derived from
    /// the new viewport. An unchanged viewport leaves every field exactly
    /// as it was.
    pub fn rescale(&mut self, old: Viewport, new: Viewport, tuning: &Tuning) {
        let height_ratio = new.height() / old.height();
        let width_ratio = new.width() / old.width();

        self.max_height = new.height() * tuning.fill_ceiling_ratio;
        self.min_height = new.height();
        self.height_diff *= height_ratio;
        self.rise_speed *= height_ratio;
        self.rise_deceleration *= height_ratio;
        self.current_height *= height_ratio;
        self.vertical_offset *= height_ratio;
        self.peak_height *= width_ratio;
        self.min_peak_height *= width_ratio;
        self.peak_attenuation_speed *= width_ratio;

        // Ratio rounding must not break the pin or the height bounds.
        if self.target_reached {
            self.current_height = self.max_height;
        } else {
            self.current_height = self.current_height.clamp(self.max_height, self.min_height);
        }
        self.assert_finite();
    }

    /// Current phase of the animation.
    #[inline]
    pub fn phase(&self) -> Phase {
        if self.target_reached {
            Phase::Settled
        } else {
            Phase::Rising
        }
    }

    /// Fraction of the total rise completed so far, in `[0, 1]`.
    #[inline]
    pub fn fill_progress(&self) -> f32 {
        if self.height_diff <= 0.0 {
            1.0
        } else {
            ((self.min_height - self.current_height) / self.height_diff).clamp(0.0, 1.0)
        }
    }

    /// Non-finite fields are programming errors, surfaced loudly in debug
    /// builds so a corrupted path can never reach playback unnoticed.
    pub(crate) fn assert_finite(&self) {
        debug_assert!(
            self.current_height.is_finite()
                && self.height_diff.is_finite()
                && self.rise_speed.is_finite()
                && self.rise_deceleration.is_finite()
                && self.peak_height.is_finite()
                && self.min_peak_height.is_finite()
                && self.peak_attenuation_speed.is_finite()
                && self.vertical_offset.is_finite(),
            "animation state became non-finite: {:?}",
            self
        );
    }
}
