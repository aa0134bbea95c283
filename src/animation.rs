//! The engine facade.
//!
//! [`Animation`] owns the whole animation: viewport, tuning, physical
//! state, frame clock, and the cached scale. Hosts drive it with
//! [`Animation::tick`] and a monotonic timestamp; each accepted tick
//! yields one [`Frame`] to draw. The engine never schedules itself and
//! never touches a render target, so a test can run it with synthetic
//! timestamps and assert on the frames.

use std::time::Duration;

use glam::Vec2;

use crate::geometry::WavePathSpec;
use crate::scale::{self, Tick};
use crate::scroll;
use crate::state::{Phase, SimState};
use crate::stepper;
use crate::time::FrameClock;
use crate::tuning::Tuning;
use crate::viewport::Viewport;

/// Placement of one wave layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerTransform {
    /// Translation applied to the path, in px.
    pub translation: Vec2,
    /// Whether the layer is drawn horizontally flipped.
    pub mirrored: bool,
}

/// Render output of one accepted tick.
///
/// Both layers draw the same path; the back layer is shifted by a
/// fraction of the viewport width and mirrored, which makes the two
/// crests drift through each other instead of moving in lockstep.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// The closed wave path for this frame.
    pub path: String,
    pub front: LayerTransform,
    pub back: LayerTransform,
}

/// The liquid-fill animation engine.
///
/// # Example
///
/// ```ignore
/// use brim::prelude::*;
/// use std::time::{Duration, Instant};
///
/// let viewport = Viewport::new(800.0, 600.0)?;
/// let mut anim = Animation::new(viewport);
/// let start = Instant::now();
///
/// loop {
///     if let Some(frame) = anim.tick(start.elapsed()) {
///         draw(&frame, anim.scale());
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    viewport: Viewport,
    tuning: Tuning,
    state: SimState,
    clock: FrameClock,
    scale: Vec<Tick>,
}

impl Animation {
    /// Create an engine for a viewport with default tuning.
    pub fn new(viewport: Viewport) -> Self {
        let tuning = Tuning::default();
        Self {
            viewport,
            state: SimState::derive(viewport, &tuning),
            clock: FrameClock::new(tuning.frame_interval),
            scale: scale::build(viewport, &tuning),
            tuning,
        }
    }

    /// Replace the tuning, re-deriving state, clock, and scale under the
    /// new constants.
    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self.state = SimState::derive(self.viewport, &self.tuning);
        self.clock = FrameClock::new(self.tuning.frame_interval);
        self.scale = scale::build(self.viewport, &self.tuning);
        self
    }

    /// Adopt a new viewport size without restarting the animation.
    ///
    /// The state is rescaled so relative progress is preserved; the scale
    /// is regenerated. Takes effect atomically between frames.
    pub fn resize(&mut self, viewport: Viewport) {
        self.state.rescale(self.viewport, viewport, &self.tuning);
        self.viewport = viewport;
        self.scale = scale::build(viewport, &self.tuning);
    }

    /// Propose a frame at monotonic timestamp `now`.
    ///
    /// Returns `None` when the tick is early, duplicate, or out of order;
    /// nothing changes in that case. An accepted tick clamps and latches
    /// the fill if it has reached its target, renders a [`Frame`] from
    /// the post-clamp state, then advances the physics for the next
    /// frame.
    pub fn tick(&mut self, now: Duration) -> Option<Frame> {
        if !self.clock.try_admit(now) {
            return None;
        }

        stepper::settle_check(&mut self.state);

        let path = WavePathSpec::from_state(&self.state, self.viewport).to_path();
        let translate_x = scroll::scroll_offset(
            self.state.frame_counter,
            self.viewport.width(),
            &self.tuning,
        );
        scroll::apply_continuity_correction(&mut self.state, &path, translate_x, &self.tuning);

        let back_shift = self.viewport.width() / self.tuning.back_shift_divisor;
        let frame = Frame {
            path,
            front: LayerTransform {
                translation: Vec2::new(translate_x, self.state.vertical_offset),
                mirrored: false,
            },
            back: LayerTransform {
                translation: Vec2::new(translate_x + back_shift, self.state.vertical_offset),
                mirrored: true,
            },
        };

        stepper::advance(&mut self.state, &self.tuning);
        Some(frame)
    }

    /// Start the animation over from an empty fill.
    ///
    /// State and clock are re-seeded exactly as in [`Animation::new`];
    /// the scale is regenerated. The host owns scheduling, so any pending
    /// ticks it has queued simply run against the fresh state.
    pub fn restart(&mut self) {
        self.state = SimState::derive(self.viewport, &self.tuning);
        self.clock.reset();
        self.scale = scale::build(self.viewport, &self.tuning);
    }

    /// The cached tick-mark scale for the current viewport.
    #[inline]
    pub fn scale(&self) -> &[Tick] {
        &self.scale
    }

    /// The current physical state.
    #[inline]
    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// The current viewport.
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The tuning constants in effect.
    #[inline]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Which phase the fill is in.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0).unwrap()
    }

    fn step(anim: &mut Animation, frame: u64) -> Option<Frame> {
        // 17ms steps clear the 60 fps admission interval.
        anim.tick(Duration::from_millis(17 * (frame + 1)))
    }

    #[test]
    fn test_first_tick_renders_full_viewport_fill() {
        let mut anim = Animation::new(viewport());
        let frame = anim.tick(Duration::ZERO).unwrap();
        // At cold start the fill level sits at the bottom of the screen.
        assert!(frame.path.starts_with("M0 600 "));
        assert_eq!(frame.front.translation, Vec2::ZERO);
        assert!(!frame.front.mirrored);
        assert!(frame.back.mirrored);
    }

    #[test]
    fn test_back_layer_leads_front_by_tuned_shift() {
        let mut anim = Animation::new(viewport());
        for i in 0..10 {
            let frame = step(&mut anim, i).unwrap();
            let dx = frame.back.translation.x - frame.front.translation.x;
            assert!((dx - 800.0 / 30.0).abs() < 1e-3);
            assert_eq!(frame.back.translation.y, frame.front.translation.y);
        }
    }

    #[test]
    fn test_rejected_tick_changes_nothing() {
        let mut anim = Animation::new(viewport());
        assert!(anim.tick(Duration::from_millis(17)).is_some());
        let before = anim.clone();
        assert!(anim.tick(Duration::from_millis(18)).is_none());
        assert_eq!(anim, before);
    }

    #[test]
    fn test_accepted_ticks_advance_the_counter() {
        let mut anim = Animation::new(viewport());
        for i in 0..5 {
            assert!(step(&mut anim, i).is_some());
        }
        assert_eq!(anim.state().frame_counter, 5);
    }

    #[test]
    fn test_restart_matches_fresh_engine() {
        let mut anim = Animation::new(viewport());
        for i in 0..300 {
            assert!(step(&mut anim, i).is_some());
        }
        anim.restart();
        assert_eq!(anim, Animation::new(viewport()));
    }

    #[test]
    fn test_resize_applies_between_ticks() {
        let mut anim = Animation::new(viewport());
        for i in 0..10 {
            assert!(step(&mut anim, i).is_some());
        }
        let doubled = Viewport::new(1600.0, 1200.0).unwrap();
        anim.resize(doubled);
        assert_eq!(anim.viewport(), doubled);
        assert_eq!(anim.scale().len(), 100);
        assert_eq!(anim.state().max_height, 300.0);
    }
}
