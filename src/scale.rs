//! Tick-mark scale layout.
//!
//! The scale is the millilitre-style ruler drawn along the viewport's
//! edge. It depends only on viewport size, never on wave state, so it is
//! regenerated wholesale on resize and restart and cached in between.

use crate::tuning::Tuning;
use crate::viewport::Viewport;

/// Whether a tick is a long major mark or a short minor one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Major,
    Minor,
}

/// One mark of the scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Vertical position in px from the top.
    pub y: f32,
    /// Horizontal length in px.
    pub length: f32,
    pub kind: TickKind,
}

/// Lay out the full scale for a viewport.
///
/// Ticks are evenly spaced from the top; every `major_every`-th one is
/// major. The count is recomputed from the spacing rather than assumed,
/// so a tuned division count stays correct even when the division does
/// not come out even.
pub fn build(viewport: Viewport, tuning: &Tuning) -> Vec<Tick> {
    assert!(tuning.major_every > 0, "major_every must be nonzero");

    let spacing = viewport.height() / tuning.scale_divisions;
    let count = (viewport.height() / spacing).floor() as usize;
    let major_length = (viewport.width() * tuning.major_ratio).min(tuning.major_cap);
    let minor_length = major_length * tuning.minor_ratio;

    (0..count)
        .map(|index| {
            let kind = if index % tuning.major_every == 0 {
                TickKind::Major
            } else {
                TickKind::Minor
            };
            Tick {
                y: spacing * index as f32,
                length: match kind {
                    TickKind::Major => major_length,
                    TickKind::Minor => minor_length,
                },
                kind,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_400x1000() {
        let viewport = Viewport::new(400.0, 1000.0).unwrap();
        let ticks = build(viewport, &Tuning::default());

        assert_eq!(ticks.len(), 100);
        assert_eq!(ticks[0].y, 0.0);
        assert_eq!(ticks[1].y, 10.0);
        assert_eq!(ticks[99].y, 990.0);

        // Major every 10th, length capped at 25 (width * 0.1 = 40).
        for (i, tick) in ticks.iter().enumerate() {
            if i % 10 == 0 {
                assert_eq!(tick.kind, TickKind::Major);
                assert_eq!(tick.length, 25.0);
            } else {
                assert_eq!(tick.kind, TickKind::Minor);
                assert_eq!(tick.length, 16.25);
            }
        }
    }

    #[test]
    fn test_major_length_below_cap_on_narrow_viewport() {
        let viewport = Viewport::new(100.0, 600.0).unwrap();
        let ticks = build(viewport, &Tuning::default());
        assert_eq!(ticks[0].length, 10.0);
        assert_eq!(ticks[1].length, 6.5);
    }

    #[test]
    fn test_custom_divisions() {
        let viewport = Viewport::new(800.0, 600.0).unwrap();
        let tuning = Tuning {
            scale_divisions: 50.0,
            ..Tuning::default()
        };
        let ticks = build(viewport, &tuning);
        assert_eq!(ticks.len(), 50);
        assert_eq!(ticks[1].y, 12.0);
    }

    #[test]
    #[should_panic(expected = "major_every must be nonzero")]
    fn test_build_rejects_zero_major_cadence() {
        let viewport = Viewport::new(800.0, 600.0).unwrap();
        let tuning = Tuning {
            major_every: 0,
            ..Tuning::default()
        };
        build(viewport, &tuning);
    }
}
