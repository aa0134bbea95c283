//! Per-frame state integration.
//!
//! One frame is a settle check followed by [`advance`]. The settle check
//! runs before the frame is rendered so the latch and the clamped height
//! are visible on the frame that reaches the target; the kinematic update
//! runs after, preparing the state the next frame will draw.

use crate::state::SimState;
use crate::tuning::Tuning;

/// Latch the settled phase once the fill reaches its target.
///
/// Rising overshoot is clamped back to the ceiling and `target_reached`
/// is set, exactly once. Subsequent calls are no-ops.
pub(crate) fn settle_check(state: &mut SimState) {
    if !state.target_reached && state.current_height <= state.max_height {
        state.current_height = state.max_height;
        state.target_reached = true;
    }
}

/// Advance the state by one frame.
///
/// While rising, the rise speed decelerates (floored at the minimum) and
/// the fill moves up by it. Once settled, the surface stays put and the
/// wave amplitude decays toward its floor instead. The frame counter
/// increments unconditionally, settled or not, because scrolling never
/// stops.
pub(crate) fn advance(state: &mut SimState, tuning: &Tuning) {
    if state.target_reached {
        attenuate(state, tuning);
    } else {
        state.rise_speed =
            (state.rise_speed + state.rise_deceleration).max(tuning.min_rise_speed);
        // Clamp so the stored height never overshoots the ceiling; the
        // settle check latches on the frame that lands there.
        state.current_height =
            (state.current_height - state.rise_speed).max(state.max_height);
    }
    state.frame_counter += 1;
    state.assert_finite();
}

/// Decay the wave amplitude toward its resting value.
///
/// The attenuation speed shrinks by a tenth of itself each frame until it
/// hits the tuned floor, then stays there; the amplitude loses the
/// current speed per frame and clamps at the resting amplitude. The
/// speed floor turns the asymptotic tail into a short linear one, so the
/// swell actually arrives at rest. Once it has, the whole block is
/// skipped and the amplitude holds exactly.
fn attenuate(state: &mut SimState, tuning: &Tuning) {
    if state.peak_height > state.min_peak_height {
        let step = state.peak_attenuation_speed / tuning.attenuation_decay;
        if state.peak_attenuation_speed < tuning.attenuation_floor {
            state.peak_attenuation_speed = tuning.attenuation_floor;
        } else if state.peak_attenuation_speed > tuning.attenuation_floor {
            state.peak_attenuation_speed -= step;
        }
        state.peak_height =
            (state.peak_height - state.peak_attenuation_speed).max(state.min_peak_height);
    }
}
