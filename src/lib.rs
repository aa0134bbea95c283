//! # Brim - Liquid Fill Wave Animation Engine
//!
//! A render-agnostic engine for the classic "filling liquid" effect: an
//! SVG wave that rises toward a target level, decelerates smoothly, and
//! settles into a low-amplitude idle swell that scrolls forever, next to
//! a millilitre-style tick scale.
//!
//! Brim owns the animation math (fill kinematics, wave geometry, scroll
//! continuity) and hands you plain values to draw: a path string, one
//! transform per layer, a list of ticks. It never schedules frames and
//! never touches a render target, so it runs the same under a browser
//! canvas, a terminal, or a test harness feeding it synthetic timestamps.
//!
//! ## Quick Start
//!
//! ```ignore
//! use brim::prelude::*;
//! use std::time::Instant;
//!
//! fn main() -> Result<(), ViewportError> {
//!     let viewport = Viewport::new(800.0, 600.0)?;
//!     let mut anim = Animation::new(viewport);
//!     let start = Instant::now();
//!
//!     loop {
//!         // Call as often as you like; the engine caps itself at its
//!         // tuned frame rate and returns None for early ticks.
//!         if let Some(frame) = anim.tick(start.elapsed()) {
//!             draw_wave(&frame.path, frame.front, frame.back);
//!             draw_ticks(anim.scale());
//!         }
//!     }
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Phases
//!
//! The fill starts in [`Phase::Rising`]: the liquid climbs from the
//! bottom of the viewport toward its target level under constant
//! deceleration, tuned to arrive at exactly zero speed. Once it lands
//! the engine latches into [`Phase::Settled`]: the level pins to the
//! target and the wave amplitude decays to a gentle resting swell. The
//! horizontal scroll never stops in either phase.
//!
//! ### Frames
//!
//! Each accepted tick yields a [`Frame`]: one closed path string shared
//! by both wave layers, plus a [`LayerTransform`] per layer. The back
//! layer is shifted and mirrored so the two crests drift through each
//! other. The path spans twice the viewport width, which lets a renderer
//! translate it a full period leftward with no seam.
//!
//! ### Scale
//!
//! [`Animation::scale`] returns the tick marks of a 0-100 ruler laid out
//! for the current viewport. It only changes on resize or restart, so
//! renderers can cache whatever they derive from it.
//!
//! ### Tuning
//!
//! Every magic number lives in [`Tuning`] with the canonical default.
//! Override the few you care about and keep the rest:
//!
//! ```ignore
//! let tuning = Tuning::default().with_fill_ceiling_ratio(0.1);
//! let anim = Animation::new(viewport).with_tuning(tuning);
//! ```

mod animation;
mod error;
pub mod geometry;
pub mod scale;
mod scroll;
mod state;
mod stepper;
pub mod svg;
pub mod time;
mod tuning;
mod viewport;

pub use animation::{Animation, Frame, LayerTransform};
pub use error::ViewportError;
pub use geometry::WavePathSpec;
pub use glam::Vec2;
pub use scale::{Tick, TickKind};
pub use state::{Phase, SimState};
pub use time::FrameClock;
pub use tuning::Tuning;
pub use viewport::Viewport;

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use brim::prelude::*;
/// ```
///
/// This imports:
/// - [`Animation`] - the engine facade
/// - [`Frame`], [`LayerTransform`] - per-tick render output
/// - [`Viewport`], [`ViewportError`] - validated dimensions
/// - [`Tuning`] - the animation constants
/// - [`Phase`] - rising/settled
/// - [`Tick`], [`TickKind`] - scale marks
/// - [`Vec2`] - glam vector type used in transforms
pub mod prelude {
    pub use crate::animation::{Animation, Frame, LayerTransform};
    pub use crate::error::ViewportError;
    pub use crate::scale::{Tick, TickKind};
    pub use crate::state::Phase;
    pub use crate::tuning::Tuning;
    pub use crate::viewport::Viewport;
    pub use crate::Vec2;
}
