//! Terminal renderer for the wave animation.
//!
//! Maps the engine's pixel space onto terminal cells (one cell is 8x16
//! virtual px, roughly a monospace glyph's aspect), samples both wave
//! layers per column, and draws the waterline with lower partial blocks.
//! Diff-based redraw: only cells that changed since the previous frame
//! are written.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, DisableLineWrap, EnableLineWrap, EndSynchronizedUpdate,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};

use brim::geometry;
use brim::{Animation, Frame, Phase, TickKind, Viewport};

/// Virtual px per terminal column.
const PX_PER_COL: f32 = 8.0;
/// Virtual px per terminal row.
const PX_PER_ROW: f32 = 16.0;

const WATER_FRONT: Rgb = Rgb { r: 31, g: 111, b: 178 };
const WATER_BACK: Rgb = Rgb { r: 83, g: 167, b: 216 };
const BACKDROP: Rgb = Rgb { r: 8, g: 20, b: 31 };
const FOAM: Rgb = Rgb { r: 232, g: 244, b: 251 };

/// Lower partial blocks by eighths, empty to full.
const BLOCKS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

#[derive(Clone, Copy, PartialEq)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    fn to_color(self) -> Color {
        Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Rgb,
    bg: Rgb,
}

const BLANK: Cell = Cell {
    ch: ' ',
    fg: FOAM,
    bg: BACKDROP,
};

struct Diff {
    w: u16,
    h: u16,
    prev: Vec<Cell>,
    next: Vec<Cell>,
}

impl Diff {
    fn new(w: u16, h: u16) -> Self {
        let n = w as usize * h as usize;
        Self {
            w,
            h,
            prev: vec![BLANK; n],
            next: vec![BLANK; n],
        }
    }

    fn resize(&mut self, w: u16, h: u16) {
        if self.w == w && self.h == h {
            return;
        }
        *self = Self::new(w, h);
    }

    fn idx(&self, x: u16, y: u16) -> usize {
        y as usize * self.w as usize + x as usize
    }

    fn set_next(&mut self, x: u16, y: u16, cell: Cell) {
        if x >= self.w || y >= self.h {
            return;
        }
        let i = self.idx(x, y);
        self.next[i] = cell;
    }

    /// Set a cell's glyph and foreground but keep whatever background is
    /// already there, so overlays sit on the water instead of punching
    /// holes in it.
    fn overlay_next(&mut self, x: u16, y: u16, ch: char, fg: Rgb) {
        if x >= self.w || y >= self.h {
            return;
        }
        let i = self.idx(x, y);
        self.next[i].ch = ch;
        self.next[i].fg = fg;
    }

    fn flush<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;

        for y in 0..self.h {
            for x in 0..self.w {
                let i = self.idx(x, y);
                if self.prev[i] == self.next[i] {
                    continue;
                }
                let cell = self.next[i];

                queue!(out, cursor::MoveTo(x, y))?;
                if last_bg != Some(cell.bg) {
                    queue!(out, SetBackgroundColor(cell.bg.to_color()))?;
                    last_bg = Some(cell.bg);
                }
                if last_fg != Some(cell.fg) {
                    queue!(out, SetForegroundColor(cell.fg.to_color()))?;
                    last_fg = Some(cell.fg);
                }
                queue!(out, Print(cell.ch))?;
            }
        }

        std::mem::swap(&mut self.prev, &mut self.next);
        Ok(())
    }
}

fn viewport_for(cols: u16, rows: u16) -> Viewport {
    let width = cols.max(1) as f32 * PX_PER_COL;
    let height = rows.max(1) as f32 * PX_PER_ROW;
    Viewport::new(width, height).expect("cell-derived dimensions are positive")
}

/// Wave surface height in virtual px at screen column center `px_x`,
/// for one layer of the frame.
fn surface_at(px_x: f32, frame: &Frame, width: f32, mirrored: bool) -> f32 {
    let (curve_x, translate_y) = if mirrored {
        let anchor = geometry::mirror_anchor(frame.back.translation.x, width);
        (anchor - px_x, frame.back.translation.y)
    } else {
        (px_x - frame.front.translation.x, frame.front.translation.y)
    };
    // The path always spans the positions a covered viewport asks about;
    // treat a miss as open air.
    match geometry::sample_height_at(curve_x, &frame.path) {
        Some(y) => y + translate_y,
        None => f32::MAX,
    }
}

fn draw_wave(diff: &mut Diff, frame: &Frame, width: f32) {
    for x in 0..diff.w {
        let px_x = (x as f32 + 0.5) * PX_PER_COL;
        let front = surface_at(px_x, frame, width, false);
        let back = surface_at(px_x, frame, width, true);

        for y in 0..diff.h {
            let cell_bottom = (y as f32 + 1.0) * PX_PER_ROW;
            // Fraction of the cell below each surface (y grows downward).
            let f = ((cell_bottom - front) / PX_PER_ROW).clamp(0.0, 1.0);
            let b = ((cell_bottom - back) / PX_PER_ROW).clamp(0.0, 1.0);

            let cell = if f >= 1.0 {
                Cell { ch: ' ', fg: WATER_FRONT, bg: WATER_FRONT }
            } else if f > 0.0 {
                let level = ((f * 8.0).round() as usize).clamp(1, 8);
                let bg = if b >= 0.5 { WATER_BACK } else { BACKDROP };
                Cell { ch: BLOCKS[level], fg: WATER_FRONT, bg }
            } else if b >= 1.0 {
                Cell { ch: ' ', fg: WATER_BACK, bg: WATER_BACK }
            } else if b > 0.0 {
                let level = ((b * 8.0).round() as usize).clamp(1, 8);
                Cell { ch: BLOCKS[level], fg: WATER_BACK, bg: BACKDROP }
            } else {
                BLANK
            };
            diff.set_next(x, y, cell);
        }
    }
}

fn draw_scale(diff: &mut Diff, anim: &Animation) {
    for tick in anim.scale() {
        let row = (tick.y / PX_PER_ROW) as u16;
        let cols = (tick.length / PX_PER_COL).ceil().max(1.0) as u16;
        let ch = match tick.kind {
            TickKind::Major => '━',
            TickKind::Minor => '─',
        };
        for x in 0..cols {
            diff.overlay_next(x, row, ch, FOAM);
        }
    }
}

fn draw_hud(diff: &mut Diff, anim: &Animation, fps: f32) {
    let state = anim.state();
    let phase = match anim.phase() {
        Phase::Rising => "rising",
        Phase::Settled => "settled",
    };
    let line = format!(
        " brim  fill:{:>3.0}%  {:<7}  swell:{:>5.1}px  {:>4.0} fps   q quit  r restart  h hud ",
        state.fill_progress() * 100.0,
        phase,
        state.peak_height,
        fps,
    );
    for (i, ch) in line.chars().take(diff.w as usize).enumerate() {
        diff.set_next(i as u16, 0, Cell { ch, fg: BACKDROP, bg: FOAM });
    }
}

/// Run the animation until `q` or Esc.
pub fn run() -> io::Result<()> {
    let mut out = io::stdout();

    execute!(out, EnterAlternateScreen, DisableLineWrap, cursor::Hide)?;
    terminal::enable_raw_mode()?;

    let mut size = terminal::size()?;
    let mut diff = Diff::new(size.0, size.1);
    let mut anim = Animation::new(viewport_for(size.0, size.1));

    let start = Instant::now();
    let mut show_hud = true;
    let mut quit = false;

    let mut last_fps = Instant::now();
    let mut fps_smoothed = 60.0f32;
    let mut frames = 0u32;

    while !quit {
        // Input
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(k) if k.kind == KeyEventKind::Press => match k.code {
                    KeyCode::Char('q') | KeyCode::Esc => quit = true,
                    KeyCode::Char('r') => anim.restart(),
                    KeyCode::Char('h') => show_hud = !show_hud,
                    _ => {}
                },
                Event::Resize(w, h) => {
                    size = (w, h);
                    diff.resize(w, h);
                    anim.resize(viewport_for(w, h));
                }
                _ => {}
            }
        }

        // The engine caps its own frame rate; a None just means not due.
        if let Some(frame) = anim.tick(start.elapsed()) {
            frames += 1;
            let now = Instant::now();
            let window = (now - last_fps).as_secs_f32();
            if window >= 0.33 {
                let fps = frames as f32 / window.max(1e-6);
                fps_smoothed = fps_smoothed * 0.85 + fps * 0.15;
                frames = 0;
                last_fps = now;
            }

            draw_wave(&mut diff, &frame, anim.viewport().width());
            draw_scale(&mut diff, &anim);
            if show_hud && size.1 >= 2 {
                draw_hud(&mut diff, &anim, fps_smoothed);
            }

            queue!(out, BeginSynchronizedUpdate)?;
            diff.flush(&mut out)?;
            queue!(out, ResetColor, EndSynchronizedUpdate)?;
            out.flush()?;
        }

        std::thread::sleep(Duration::from_millis(2));
    }

    terminal::disable_raw_mode()?;
    execute!(
        out,
        ResetColor,
        cursor::Show,
        EnableLineWrap,
        LeaveAlternateScreen
    )?;
    Ok(())
}
