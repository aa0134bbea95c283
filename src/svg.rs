//! Standalone SVG document composition.
//!
//! The engine itself never renders; this module turns one [`Frame`] and
//! the cached scale into a complete `<svg>` document, which is the
//! cheapest way to eyeball a frame or export stills. Layers are stacked
//! back to front: backdrop, mirrored back wave, front wave, scale.

use crate::animation::{Frame, LayerTransform};
use crate::geometry;
use crate::scale::{Tick, TickKind};
use crate::viewport::Viewport;

/// Fill of the front wave layer.
pub const FRONT_FILL: &str = "#1f6fb2";
/// Fill of the mirrored back wave layer.
pub const BACK_FILL: &str = "#53a7d8";
/// Stroke of the scale ticks.
pub const TICK_STROKE: &str = "#e8f4fb";
/// Backdrop behind everything.
pub const BACKDROP: &str = "#08141f";

/// Compose a complete SVG document for one frame.
pub fn document(frame: &Frame, scale: &[Tick], viewport: Viewport) -> String {
    let width = viewport.width();
    let height = viewport.height();

    let mut svg = String::with_capacity(1024 + scale.len() * 64);
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        width, height, width, height
    ));
    svg.push_str(&format!(
        "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        BACKDROP
    ));

    // Back first so the front wave paints over it.
    svg.push_str(&format!(
        "  <path d=\"{}\" fill=\"{}\" fill-opacity=\"0.6\" transform=\"{}\"/>\n",
        frame.path,
        BACK_FILL,
        transform_attr(&frame.back, width)
    ));
    svg.push_str(&format!(
        "  <path d=\"{}\" fill=\"{}\" transform=\"{}\"/>\n",
        frame.path,
        FRONT_FILL,
        transform_attr(&frame.front, width)
    ));

    svg.push_str(&format!("  <g id=\"scale\" stroke=\"{}\">\n", TICK_STROKE));
    for tick in scale {
        let stroke_width = match tick.kind {
            TickKind::Major => 2,
            TickKind::Minor => 1,
        };
        svg.push_str(&format!(
            "    <line x1=\"0\" y1=\"0\" x2=\"{}\" y2=\"0\" stroke-width=\"{}\" transform=\"translate(0 {})\"/>\n",
            tick.length, stroke_width, tick.y
        ));
    }
    svg.push_str("  </g>\n</svg>\n");
    svg
}

/// The `transform` attribute for a layer.
///
/// A mirrored layer cannot use its translation directly: flipping around
/// x = 0 would throw the painted span off screen. It is re-anchored
/// instead, which draws the same repeating pattern while keeping the
/// viewport covered.
fn transform_attr(layer: &LayerTransform, width: f32) -> String {
    let translation = layer.translation;
    if layer.mirrored {
        let anchor = geometry::mirror_anchor(translation.x, width);
        format!("translate({} {}) scale(-1 1)", anchor, translation.y)
    } else {
        format!("translate({} {})", translation.x, translation.y)
    }
}
