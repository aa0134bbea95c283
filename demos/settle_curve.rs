//! # Settle Curve Dump
//!
//! Prints the per-frame state trajectory as CSV: fill level, rise speed,
//! wave amplitude, and vertical offset. Pipe it into a plotting tool to
//! inspect the deceleration profile and the amplitude decay.
//!
//! Run with: `cargo run --example settle_curve > curve.csv`

use std::time::Duration;

use brim::prelude::*;

fn main() {
    let viewport = Viewport::new(800.0, 600.0).expect("fixed dimensions");
    let mut anim = Animation::new(viewport);

    let step = Duration::from_micros(16_700);
    let mut now = Duration::ZERO;

    println!("frame,phase,height,rise_speed,amplitude,vertical_offset");
    for frame in 0..900u32 {
        now += step;
        if anim.tick(now).is_none() {
            continue;
        }
        let state = anim.state();
        let phase = match anim.phase() {
            Phase::Rising => "rising",
            Phase::Settled => "settled",
        };
        println!(
            "{frame},{phase},{:.3},{:.3},{:.3},{:.3}",
            state.current_height,
            state.rise_speed,
            state.peak_height,
            state.vertical_offset,
        );
    }
}
