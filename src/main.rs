use anyhow::{Context, Result};
use clap::Parser;
use glam::{DVec2, DVec3};
use log::info;

use map_nav::cli::Cli;
use map_nav::traits::SceneRenderer;
use map_nav::{NavHost, SchedulerConfig, ViewState};

const FRAME_WIDTH: f64 = 800.0;
const FRAME_HEIGHT: f64 = 600.0;

/// Stand-in renderer for the headless demo - counts draws and logs them
#[derive(Debug, Default)]
struct LoggingRenderer {
    frames: u64,
}

impl SceneRenderer for LoggingRenderer {
    fn framebuffer_size(&self) -> DVec2 {
        DVec2::new(FRAME_WIDTH, FRAME_HEIGHT)
    }

    fn has_pending_scene_changes(&self) -> bool {
        false
    }

    fn draw(&mut self, dt: f64) {
        self.frames += 1;
        log::debug!("frame {} (dt {dt:.4}s)", self.frames);
    }
}

fn load_boundary(path: &str) -> Result<Vec<DVec2>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading boundary file {path}"))?;
    let pairs: Vec<[f64; 2]> =
        serde_json::from_str(&raw).with_context(|| format!("parsing boundary file {path}"))?;
    Ok(pairs.into_iter().map(|[x, y]| DVec2::new(x, y)).collect())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let boundary = match &cli.boundary {
        Some(path) => load_boundary(path)?,
        None => Vec::new(),
    };

    let mut view = ViewState::new(
        DVec3::new(0.0, 0.0, 1.0),
        DVec2::new(FRAME_WIDTH, FRAME_HEIGHT),
    );

    let mut host = NavHost::new(SchedulerConfig {
        extra_frame_mode: cli.extra_frames,
        ..SchedulerConfig::default()
    });
    host.attach_renderer(LoggingRenderer::default())?;

    let target = DVec3::new(cli.target_x, cli.target_y, view.loc().z);
    host.animator_mut()
        .begin(&view, target, 0.0, cli.duration, boundary)?;

    info!(
        "flying {:?} -> {target:?} over {}s, {} ticks at {} fps",
        view.loc(),
        cli.duration,
        cli.ticks,
        cli.fps
    );

    let dt = 1.0 / cli.fps;
    let mut rendered = 0u64;
    for i in 0..cli.ticks {
        let now = i as f64 * dt;
        let report = host.tick(now, dt, &mut view)?;
        if report.rendered {
            rendered += 1;
        }
        log::debug!(
            "tick {i}: now={now:.3} loc={:?} anim={:?} rendered={}",
            view.loc(),
            report.animation,
            report.rendered
        );
    }

    println!(
        "Done: final position {:?}, rendered {rendered} of {} ticks",
        view.loc(),
        cli.ticks
    );
    Ok(())
}
