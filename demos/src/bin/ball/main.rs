//! A violet ball lit by a pink point light that drifts across the canvas.
//!
//! Opens a window by default. With `--frames N`, renders N frames without
//! a window instead, which also works when built without the `minifb`
//! feature.

use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use clap::Parser;
use log::{debug, info};

use pb::prelude::*;
use pb::util::pnm::save_ppm;

mod config;

use config::Config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file to read settings from. Defaults are used if not given.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render this many frames without opening a window.
    #[arg(short, long)]
    frames: Option<u32>,

    /// Write the last rendered frame to this file as a PPM image.
    #[arg(short, long)]
    snapshot: Option<PathBuf>,
}

/// Simulated time between headless frames.
const HEADLESS_DT: Duration = Duration::from_millis(16);

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    debug!("{cfg:?}");

    let mut scene = cfg.scene();
    let drift = cfg.drift();
    scene.render_sphere(cfg.radius, cfg.ball_color());

    match args.frames {
        Some(n) => headless(&cfg, &mut scene, drift, n),
        None => windowed(&cfg, &mut scene, drift)?,
    }

    info!("rendered {} frames\n{}", scene.stats().frames, scene.stats());

    if let Some(path) = &args.snapshot {
        save_ppm(path, scene.framebuffer())
            .with_context(|| format!("writing {}", path.display()))?;
        info!("saved snapshot to {}", path.display());
    }
    Ok(())
}

/// Moves the light if it is due, and re-renders the ball if it moved.
/// Returns whether the framebuffer was updated.
fn advance(
    cfg: &Config,
    scene: &mut Scene,
    drift: &mut Drift,
    dt: Duration,
) -> bool {
    let moved = drift.tick(dt, scene);
    if moved {
        scene.render_sphere(cfg.radius, cfg.ball_color());
    }
    moved
}

fn headless(cfg: &Config, scene: &mut Scene, mut drift: Drift, frames: u32) {
    for _ in 0..frames {
        advance(cfg, scene, &mut drift, HEADLESS_DT);
    }
    debug!("light ended at {:?}", scene.light_position());
}

#[cfg(feature = "minifb")]
fn windowed(
    cfg: &Config,
    scene: &mut Scene,
    mut drift: Drift,
) -> anyhow::Result<()> {
    use std::ops::ControlFlow::{Break, Continue};

    use pb_front::minifb::Window;

    let mut win = Window::builder()
        .title("phongball")
        .dims((cfg.canvas, cfg.canvas))
        .build()?;

    let res = win.run(|frame| {
        advance(cfg, scene, &mut drift, frame.dt);
        match frame.win.present(scene.framebuffer()) {
            Ok(()) => Continue(()),
            Err(e) => Break(e),
        }
    });
    match res {
        Some(e) => Err(e).context("presenting frame"),
        None => Ok(()),
    }
}

#[cfg(not(feature = "minifb"))]
fn windowed(_: &Config, _: &mut Scene, _: Drift) -> anyhow::Result<()> {
    anyhow::bail!("built without a window frontend; use --frames to render headless")
}
