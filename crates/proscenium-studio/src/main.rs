use std::time::Duration;

use anyhow::Context;
use proscenium::logging::{init_logging, LoggingConfig};
use proscenium::prelude::*;
use proscenium::render::CanvasCmd;

const DEFAULT_FRAMES: u64 = 120;
const FRAME_BUDGET: Duration = Duration::from_millis(16);

/// Ring that breathes around a center point; exercises both per-frame hooks.
struct Pulse {
    center: Anchor,
    phase: f32,
    min_radius: f32,
    max_radius: f32,
    style: Style,
}

impl Pulse {
    fn new(center: impl Into<Anchor>, min_radius: f32, max_radius: f32) -> Self {
        let mut style = Style::default();
        style.stroke.enabled = true;
        style.stroke.color = Color::from_srgb_u8(120, 200, 255, 160);
        style.stroke.weight = 2.0;
        Self { center: center.into(), phase: 0.0, min_radius, max_radius, style }
    }

    fn radius(&self) -> f32 {
        let t = 0.5 + 0.5 * self.phase.sin();
        self.min_radius + (self.max_radius - self.min_radius) * t
    }
}

impl SceneMember for Pulse {
    fn capabilities(&self) -> Capabilities {
        Capabilities::ALL
    }

    fn update(&mut self, frame: &FrameTime) -> Result<(), MemberError> {
        self.phase = (self.phase + frame.dt * 2.0) % std::f32::consts::TAU;
        Ok(())
    }

    fn draw(&self, canvas: &mut dyn Canvas, scene: &Scene<'_>) -> Result<(), MemberError> {
        let center = self.center.read(scene)?;
        let mut scope = PaintScope::new(canvas);
        self.style.apply(&mut *scope);
        let d = self.radius() * 2.0;
        scope.ellipse(center, Vec2::new(d, d));
        Ok(())
    }

    fn position(&self, scene: &Scene<'_>) -> Result<Option<Vec2>, PositionError> {
        self.center.read(scene).map(Some)
    }
}

/// Builds a small orrery: sun, orbiting planet with a moon, labels and a tether.
fn build_stage() -> Stage {
    let mut stage = Stage::new();

    let mut sun = shapes::circle();
    sun.set_xy(410.0, 280.0)
        .set_radius(36.0)
        .set_fill_color(Color::from_srgb_u8(255, 196, 0, 255))
        .set_not_stroked();
    let sun = stage.add(sun);

    let mut planet = shapes::circle();
    planet
        .set_radius(12.0)
        .set_fill_color(Color::from_srgb_u8(60, 120, 255, 255))
        .set_location(Orbiter::new(sun).with_radius(160.0).with_velocity_radians(0.6));
    let planet = stage.add(planet);

    let mut moon = shapes::circle();
    let mut moon_orbit = Orbiter::new(planet);
    moon_orbit.set_radius(28.0).set_velocity_degrees(240.0).set_start_angle_degrees(90.0);
    moon.set_radius(4.0).set_fill_color(Color::gray(200)).set_location(moon_orbit);
    stage.add(moon);

    let mut tether = shapes::line();
    tether
        .set_start(Follower::new(sun))
        .set_end(Follower::new(planet))
        .set_stroke_color(Color::gray(90));
    let tether = stage.add(tether);

    let mut label = shapes::text("Planet");
    label
        .set_text_size(14.0)
        .set_text_vertical_align_bottom()
        .set_fill_color(Color::WHITE)
        .set_location(Follower::new(planet).with_offset(0.0, -18.0));
    stage.add(label);

    stage.add(Pulse::new(Follower::new(sun), 44.0, 60.0));

    // Keep the tether behind every body.
    stage.move_to_back(tether);

    stage
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let frames = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u64>()
            .with_context(|| format!("frame count must be a positive integer, got {arg:?}"))?,
        None => DEFAULT_FRAMES,
    };

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          PROSCENIUM STUDIO v0.1        ║");
    println!("  ║   recording canvas  ·  orrery scene    ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let mut stage = build_stage();
    let mut clock = FrameClock::new();
    let mut canvas = RecordingCanvas::new();

    log::info!("stage ready: {} members, running {frames} frames", stage.len());

    for _ in 0..frames {
        let frame = clock.tick();
        canvas.clear();

        let updated = stage.update(&frame);
        let drawn = stage
            .draw(&mut canvas, &frame)
            .with_context(|| format!("frame {} aborted", frame.frame_index))?;

        if canvas.depth() != 0 {
            anyhow::bail!("frame {} left {} unmatched saves", frame.frame_index, canvas.depth());
        }

        if frame.frame_index % 30 == 0 {
            let ellipses = canvas
                .primitives()
                .filter(|c| matches!(c, CanvasCmd::Ellipse { .. }))
                .count();
            log::info!(
                "frame {:>4} t={:>6.2}s  updated {}  drew {}  ({} primitives, {} ellipses, {} failures)",
                frame.frame_index,
                frame.elapsed,
                updated.visited,
                drawn.visited,
                canvas.primitives().count(),
                ellipses,
                updated.failures.len() + drawn.failures.len(),
            );
        }

        std::thread::sleep(FRAME_BUDGET);
    }

    for cmd in canvas.primitives() {
        println!("  {cmd:?}");
    }
    println!();

    Ok(())
}
