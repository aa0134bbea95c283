//! Horizontal scroll and vertical continuity.
//!
//! The wave drifts left at a constant rate derived from the frame counter
//! and wraps every viewport width. Because the path is rebuilt each frame
//! while the fill level moves, the point of the curve that sits at the
//! viewport's left edge would visibly jump; the continuity correction
//! samples the previous frame's curve there and eases a vertical offset
//! toward the difference, keeping the waterline steady.

use crate::geometry;
use crate::state::SimState;
use crate::tuning::Tuning;

/// Horizontal translation for a given frame counter, in `(-width, 0]`.
///
/// Computed in f64 so large counters lose no precision before the wrap;
/// at 60 fps an f32 product would drift visibly within hours.
pub(crate) fn scroll_offset(frame_counter: u64, width: f32, tuning: &Tuning) -> f32 {
    let travelled = frame_counter as f64 * tuning.scroll_ratio as f64 * width as f64;
    let offset = -(travelled % width as f64) as f32;
    // The f64 remainder can land within half an f32 ulp of the period, in
    // which case the cast rounds to the full width; that is phase 0.
    if offset == -width {
        0.0
    } else {
        offset
    }
}

/// Ease the vertical offset toward the sampled waterline.
///
/// `shift_x` is the horizontal translation the path will be drawn with,
/// so `-shift_x` is the curve position at the viewport's left edge. When
/// the gap between the drawn waterline and the current fill level exceeds
/// the snap threshold the offset moves a tuned fraction of it; inside the
/// threshold it snaps, so the offset converges instead of oscillating.
/// Positions the curve cannot answer for leave the offset untouched.
pub(crate) fn apply_continuity_correction(
    state: &mut SimState,
    path: &str,
    shift_x: f32,
    tuning: &Tuning,
) {
    if !state.target_reached {
        return;
    }
    if let Some(sampled) = geometry::sample_height_at(-shift_x, path) {
        let target = state.current_height - sampled;
        let gap = target - state.vertical_offset;
        if gap.abs() > tuning.snap_threshold {
            state.vertical_offset += gap / tuning.smoothing_divisor;
        } else {
            state.vertical_offset = target;
        }
    }
}
