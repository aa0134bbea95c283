//! Wave geometry: path construction and inverse curve sampling.
//!
//! The wave is a closed SVG path whose curved top is a cubic polybezier
//! spanning twice the viewport width, so a renderer can translate it left
//! by up to a full period without exposing a seam. [`sample_height_at`]
//! inverts the curve: given a horizontal position it reports the wave's
//! height there, which is how the continuity correction keeps the visible
//! edge anchored while the path scrolls.

use glam::Vec2;

use crate::state::SimState;
use crate::viewport::Viewport;

/// The quantities that fully determine one frame's wave path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavePathSpec {
    /// Wave baseline y in px.
    pub level: f32,
    /// Wave amplitude in px.
    pub amplitude: f32,
    /// Viewport width in px.
    pub width: f32,
    /// Viewport height in px.
    pub height: f32,
}

impl WavePathSpec {
    /// Capture the path-determining parameters of a state.
    pub fn from_state(state: &SimState, viewport: Viewport) -> Self {
        Self {
            level: state.current_height,
            amplitude: state.peak_height,
            width: viewport.width(),
            height: viewport.height(),
        }
    }

    /// Build the closed wave path.
    ///
    /// Two full-period cubic segments cover `[0, width]` and
    /// `[width, 2*width]`, each swinging from `level - amplitude` to
    /// `level + amplitude` with both control points at mid-span. The
    /// closing edges drop to 1.5x the viewport height so the fill body
    /// always extends past the bottom of the screen.
    pub fn to_path(&self) -> String {
        let Self {
            level,
            amplitude,
            width,
            height,
        } = *self;
        let crest = level - amplitude;
        let trough = level + amplitude;
        format!(
            "M0 {} C{} {}, {} {}, {} {}, {} {}, {} {}, {} {} V{} H0 V{} Z",
            level,
            width / 2.0,
            crest,
            width / 2.0,
            trough,
            width,
            level,
            width * 1.5,
            crest,
            width * 1.5,
            trough,
            width * 2.0,
            level,
            height * 1.5,
            level * 1.5,
        )
    }
}

/// Evaluate the cubic Bezier height at normalized parameter `t`.
#[inline]
pub fn cubic_bezier_y(t: f32, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0.y + 3.0 * u * u * t * p1.y + 3.0 * u * t * t * p2.y + t * t * t * p3.y
}

/// Find the wave height at horizontal position `x` on a path.
///
/// Walks the path's move and cubic-curve commands, polybezier coordinate
/// groups included, ignoring everything else, and evaluates the first
/// segment whose horizontal span contains `x` (inclusive at both ends;
/// spans are non-overlapping by construction, so the first match is the
/// only one).
///
/// Returns `None` when no segment contains `x`. That is a normal outcome
/// for positions outside the curve, not an error; malformed coordinate
/// tokens and zero-width segments also yield `None` rather than a
/// non-finite height.
pub fn sample_height_at(x: f32, path: &str) -> Option<f32> {
    let mut tokens = path
        .split(|c: char| c == ' ' || c == ',')
        .filter(|t| !t.is_empty())
        .peekable();

    let mut cursor = Vec2::ZERO;

    while let Some(token) = tokens.next() {
        let command = token.chars().next()?;
        let rest = &token[command.len_utf8()..];
        match command.to_ascii_uppercase() {
            'M' => {
                let mx = parse_coord(rest)?;
                let my = parse_coord(tokens.next()?)?;
                cursor = Vec2::new(mx, my);
            }
            'C' => {
                // The first control x rides on the command token itself.
                let mut control_x = parse_coord(rest)?;
                loop {
                    let p0 = cursor;
                    let p1 = Vec2::new(control_x, parse_coord(tokens.next()?)?);
                    let p2 = Vec2::new(
                        parse_coord(tokens.next()?)?,
                        parse_coord(tokens.next()?)?,
                    );
                    let p3 = Vec2::new(
                        parse_coord(tokens.next()?)?,
                        parse_coord(tokens.next()?)?,
                    );

                    let span = p3.x - p0.x;
                    if span > 0.0 && x >= p0.x && x <= p3.x {
                        return Some(cubic_bezier_y((x - p0.x) / span, p0, p1, p2, p3));
                    }
                    cursor = p3;

                    // Polybezier continuation: bare coordinate groups after
                    // a segment extend the curve without a new command.
                    match tokens.peek() {
                        Some(next) if starts_numeric(next) => {
                            control_x = parse_coord(tokens.next()?)?;
                        }
                        _ => break,
                    }
                }
            }
            // V, H, Z and anything else carry no curve to sample.
            _ => {}
        }
    }
    None
}

/// Re-anchor a mirrored copy of the wave so its painted span covers the
/// viewport.
///
/// A mirrored path translated by `shift_x` lands almost entirely at
/// negative x; because the wave repeats every `width`, anchoring the
/// mirror at `2*width - (shift_x mod width)` is pattern-equivalent
/// (the anchor is congruent to `-shift_x` modulo the period) and keeps
/// the whole viewport inside the path's `[0, 2*width]` span.
#[inline]
pub fn mirror_anchor(shift_x: f32, width: f32) -> f32 {
    2.0 * width - shift_x.rem_euclid(width)
}

fn parse_coord(token: &str) -> Option<f32> {
    token.parse::<f32>().ok().filter(|v| v.is_finite())
}

fn starts_numeric(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '+' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn spec() -> WavePathSpec {
        WavePathSpec {
            level: 600.0,
            amplitude: 100.0,
            width: 800.0,
            height: 600.0,
        }
    }

    #[test]
    fn test_path_format() {
        assert_eq!(
            spec().to_path(),
            "M0 600 C400 500, 400 700, 800 600, 1200 500, 1200 700, 1600 600 V900 H0 V900 Z"
        );
    }

    #[test]
    fn test_path_from_state_uses_current_values() {
        let viewport = Viewport::new(800.0, 600.0).unwrap();
        let mut state = SimState::derive(viewport, &Tuning::default());
        state.current_height = 150.0;
        state.peak_height = 40.0;

        let path = WavePathSpec::from_state(&state, viewport).to_path();
        assert!(path.starts_with("M0 150 C400 110, 400 190,"));
        assert!(path.ends_with("V900 H0 V225 Z"));
    }

    #[test]
    fn test_sample_segment_endpoints() {
        let path = spec().to_path();
        // t = 0 gives P0.y, t = 1 gives P3.y.
        assert!((sample_height_at(0.0, &path).unwrap() - 600.0).abs() < 1e-3);
        assert!((sample_height_at(800.0, &path).unwrap() - 600.0).abs() < 1e-3);
        assert!((sample_height_at(1600.0, &path).unwrap() - 600.0).abs() < 1e-3);
    }

    #[test]
    fn test_sample_midpoint_returns_baseline() {
        // Both control points sit at mid-span, so t = 0.5 lands back on
        // the baseline: 1/8 + 3/8 - 3/8 - 1/8 of the amplitude cancels.
        let path = spec().to_path();
        assert!((sample_height_at(400.0, &path).unwrap() - 600.0).abs() < 1e-3);
    }

    #[test]
    fn test_sample_quarter_span_leans_toward_crest() {
        // At t = 0.25 the cubic weights give level - 0.28125 * amplitude.
        let path = spec().to_path();
        let y = sample_height_at(200.0, &path).unwrap();
        assert!((y - (600.0 - 28.125)).abs() < 1e-2);
    }

    #[test]
    fn test_sample_reaches_second_segment() {
        let path = spec().to_path();
        let first = sample_height_at(200.0, &path).unwrap();
        let second = sample_height_at(1000.0, &path).unwrap();
        assert!((first - second).abs() < 1e-2);
    }

    #[test]
    fn test_sample_outside_span_is_none() {
        let path = spec().to_path();
        assert_eq!(sample_height_at(-1.0, &path), None);
        assert_eq!(sample_height_at(1601.0, &path), None);
    }

    #[test]
    fn test_sample_skips_zero_width_segment() {
        let degenerate = "M0 100 C0 0, 0 200, 0 100 V900 H0 V150 Z";
        assert_eq!(sample_height_at(0.0, degenerate), None);
    }

    #[test]
    fn test_sample_malformed_is_none() {
        assert_eq!(sample_height_at(10.0, ""), None);
        assert_eq!(sample_height_at(10.0, "hello world"), None);
        assert_eq!(sample_height_at(10.0, "M0 oops C1 2, 3 4, 5 6"), None);
    }

    #[test]
    fn test_cubic_bezier_endpoints() {
        let p0 = Vec2::new(0.0, 10.0);
        let p1 = Vec2::new(1.0, 20.0);
        let p2 = Vec2::new(2.0, 30.0);
        let p3 = Vec2::new(3.0, 40.0);
        assert_eq!(cubic_bezier_y(0.0, p0, p1, p2, p3), 10.0);
        assert_eq!(cubic_bezier_y(1.0, p0, p1, p2, p3), 40.0);
        // Evenly spaced control heights trace a straight line.
        assert!((cubic_bezier_y(0.5, p0, p1, p2, p3) - 25.0).abs() < 1e-5);
    }

    #[test]
    fn test_mirror_anchor_covers_viewport() {
        let width = 800.0;
        for shift in [-750.0, -400.0, -0.5, 0.0, 26.67] {
            let anchor = mirror_anchor(shift, width);
            // Painted span on screen is [anchor - 2w, anchor].
            assert!(anchor - 2.0 * width <= 0.0);
            assert!(anchor >= width);
            // Pattern equivalence: anchor == -shift (mod width).
            let phase = (anchor + shift).rem_euclid(width);
            assert!(phase.abs() < 1e-3 || (width - phase).abs() < 1e-3);
        }
    }
}
