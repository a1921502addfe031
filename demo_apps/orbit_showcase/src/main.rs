//! Drives the scene without a window for a fixed number of frames.
//!
//! Usage: `orbit_showcase [config.json] [frames]`
//!
//! The cursor sweeps a circle around the viewport centre so the rings have
//! something to follow. Set `RUST_LOG=debug` to see per-second FPS samples.

use std::f32::consts::TAU;

use glam::Vec2;
use skyring::{App, SceneAssets, SceneConfig};

const FRAME_DT: f32 = 1.0 / 60.0;
const VIEWPORT: (u32, u32) = (1280, 720);

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SceneConfig::load(&path)?,
        None => SceneConfig::default(),
    };
    let frames: usize = match args.next() {
        Some(n) => n.parse()?,
        None => 600,
    };

    let mut app = App::new(config, &SceneAssets::builtin())?;
    app.handle_resize(VIEWPORT.0, VIEWPORT.1);
    log::info!("Fleet seed: {}", app.seed());

    let center = Vec2::new(VIEWPORT.0 as f32, VIEWPORT.1 as f32) * 0.5;
    for i in 0..frames {
        let phase = i as f32 / frames.max(1) as f32 * TAU;
        let cursor = center + Vec2::new(phase.cos(), phase.sin()) * 300.0;
        app.input_mut().handle_cursor_move(f64::from(cursor.x), f64::from(cursor.y));

        app.frame(FRAME_DT)?;

        if i % 120 == 0 {
            for (n, body) in app.animation.bodies.iter().enumerate() {
                log::debug!("frame {i} aircraft {n}: {:?}", body.position());
            }
        }
    }

    for (n, body) in app.animation.bodies.iter().enumerate() {
        log::info!(
            "aircraft {n}: angle {:.3} rad, position {:?}",
            body.current_angle,
            body.position()
        );
    }
    for (n, ring) in app.animation.rings.iter().enumerate() {
        log::info!("ring {n}: rotation {:?}", ring.rotation);
    }
    log::info!(
        "{} frames, last FPS sample {:?}, {} renderables",
        app.frame_count(),
        app.last_fps(),
        app.scene.iter_renderables().count()
    );
    Ok(())
}
