//! # SVG Frame Export
//!
//! Runs the animation headless with synthetic timestamps and writes a
//! handful of checkpoint frames to `wave_*.svg` files, one standalone
//! document each. Open them in a browser to see the fill rise, settle,
//! and calm down.
//!
//! Run with: `cargo run --example svg_export`

use std::fs;
use std::time::Duration;

use brim::prelude::*;
use brim::svg;

/// Frame numbers worth looking at: early rise, mid rise, the landing,
/// and the amplitude decay.
const CHECKPOINTS: [u64; 6] = [1, 30, 60, 120, 240, 480];

fn main() -> std::io::Result<()> {
    let viewport = Viewport::new(800.0, 600.0).expect("fixed dimensions");
    let mut anim = Animation::new(viewport);

    // Slightly over the 60 fps interval so every tick is accepted.
    let step = Duration::from_micros(16_700);
    let mut now = Duration::ZERO;

    for frame_number in 1..=*CHECKPOINTS.last().unwrap() {
        now += step;
        let frame = anim.tick(now).expect("spaced ticks are always due");

        if CHECKPOINTS.contains(&frame_number) {
            let name = format!("wave_{frame_number:04}.svg");
            fs::write(&name, svg::document(&frame, anim.scale(), viewport))?;
            println!(
                "{name}  phase={:?}  fill={:>5.1}%  swell={:>6.2}px",
                anim.phase(),
                anim.state().fill_progress() * 100.0,
                anim.state().peak_height,
            );
        }
    }

    Ok(())
}
