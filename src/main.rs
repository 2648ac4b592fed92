//! Frame driver binary.
//!
//! One thread, one loop per frame: sample orientation, mutate the object,
//! run the full hidden-surface pass, flush the framebuffer, then wait out
//! the remainder of the frame budget while watching for quit keys. The
//! terminal is restored on every exit path.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use tui_cube::cli::Args;
use tui_cube::core::{render, Cube, Model, Vec3i};
use tui_cube::drive::{AngleFile, BouncePath, OrientationSource, Spin};
use tui_cube::loader::{load_mesh, Placement};
use tui_cube::term::{SceneView, TerminalRenderer};
use tui_cube::types::Euler;

/// Give up on a flaky orientation source after this many attempts in one
/// frame and reuse the last good reading; a frozen frame beats a crash
/// mid-display.
const ORIENTATION_RETRIES: u32 = 3;

fn main() -> Result<()> {
    let args = Args::parse();

    // Build everything fallible before touching the terminal so startup
    // errors print on a normal screen.
    let mut model = build_model(&args)?;
    let frame_period = Duration::from_secs_f64(1.0 / args.fps.max(1) as f64);
    let mut source = build_source(&args, frame_period)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args, model.as_mut(), source.as_mut(), frame_period);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn build_model(args: &Args) -> Result<Box<dyn Model>> {
    let center = Vec3i::new(args.cx, args.cy, args.cz);
    match &args.mesh {
        Some(path) => {
            let placement = Placement {
                center,
                width: args.width,
                height: args.height,
                depth: args.depth,
            };
            Ok(Box::new(load_mesh(path, placement)?))
        }
        None => Ok(Box::new(Cube::new(center, args.size))),
    }
}

fn build_source(args: &Args, frame_period: Duration) -> Result<Box<dyn OrientationSource>> {
    if let Some(path) = &args.angles {
        return Ok(Box::new(AngleFile::open(path)?));
    }
    let speeds = Euler::new(args.speed_x, args.speed_y, args.speed_z);
    let mut spin = Spin::new(speeds, frame_period);
    if args.random {
        spin = spin.randomized(&mut rand::thread_rng());
    }
    Ok(Box::new(spin))
}

fn run(
    term: &mut TerminalRenderer,
    args: &Args,
    model: &mut dyn Model,
    source: &mut dyn OrientationSource,
    frame_period: Duration,
) -> Result<()> {
    let mut view = SceneView::new(args.char_aspect);
    let mut bounce = BouncePath::new(
        Vec3i::new(args.move_x, args.move_y, args.move_z),
        args.bounce_every,
    );
    let mut last_good = Euler::ZERO;
    let mut frame: u64 = 0;

    loop {
        if let Some(max) = args.max_frames {
            if frame >= max {
                return Ok(());
            }
        }
        let frame_start = Instant::now();

        // Mutate.
        model.rotate_to(next_orientation(source, &mut last_good));
        if let Some(delta) = bounce.step() {
            model.translate_by(delta);
        }

        // Render.
        let (w, h) = grid_size(args);
        view.begin_frame(w, h);
        render(&*model, view.bounds(), &mut view);
        term.draw_swap(view.buffer_mut())?;

        // Wait out the frame budget, reacting to quit and resize.
        loop {
            let timeout = frame_period
                .checked_sub(frame_start.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if should_quit(key) => return Ok(()),
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            if frame_start.elapsed() >= frame_period {
                break;
            }
        }

        frame += 1;
    }
}

/// Sample the orientation source with bounded retries, falling back to the
/// last-known-good reading so a collaborator failure never kills the
/// display.
fn next_orientation(source: &mut dyn OrientationSource, last_good: &mut Euler) -> Euler {
    for _ in 0..ORIENTATION_RETRIES {
        if let Ok(angles) = source.next() {
            *last_good = angles;
            return angles;
        }
    }
    *last_good
}

fn grid_size(args: &Args) -> (u16, u16) {
    let (tw, th) = crossterm::terminal::size().unwrap_or((80, 24));
    (args.cols.unwrap_or(tw), args.rows.unwrap_or(th))
}

fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
