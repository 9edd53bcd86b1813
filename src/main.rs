//! Breakout headless entry point
//!
//! Plays one seeded game with the autopilot, feeding events through the same
//! scene, audio and HUD adapters a graphical host would use, then prints the
//! final board as JSON.
//!
//! Usage: `breakout [settings.json]`

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use std::time::{SystemTime, UNIX_EPOCH};

use breakout_core::Settings;
use breakout_core::audio::{AudioManager, LogSink};
use breakout_core::hud::Hud;
use breakout_core::platform::{Clock, SceneSync};
use breakout_core::renderer::Scene;
use breakout_core::sim::{Autopilot, Game, GamePhase};

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `Game` through the library
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Breakout (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).unwrap_or_else(|e| {
            log::warn!("Using default settings ({path}: {e})");
            Settings::default()
        }),
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Started new game with seed: {}", seed);

    let mut game = Game::new(seed).with_tick_rate(settings.tick_rate_hz);
    let mut pilot = Autopilot::new();
    let mut clock = Clock::new(settings.tick_rate_hz);
    let mut scene = Scene::new();
    let mut hud = Hud::new();
    let mut audio = AudioManager::new(LogSink);
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_power_up_volume(settings.power_up_volume);
    audio.set_muted(settings.muted);

    let frame_time = clock.tick_dt();
    let mut vertex_count = 0;
    'frames: while clock.ticks() < settings.max_ticks {
        for _ in 0..clock.advance(frame_time) {
            for input in pilot.inputs(game.state()) {
                game.handle(input);
            }
            game.update(frame_time);

            let events = game.drain_events();
            SceneSync::apply(&mut scene, &events);
            audio.play_events(&events);
            hud.observe(&events);

            if matches!(game.phase(), GamePhase::Complete(_)) {
                break 'frames;
            }
        }
        if scene.is_dirty() {
            vertex_count = scene.build(game.state()).len();
        }
    }

    let text = hud.text(game.state());
    log::info!(
        "{} | {} | {} after {} ticks ({} vertices last frame)",
        text.banner.unwrap_or("still playing"),
        text.lives,
        text.score,
        clock.ticks(),
        vertex_count
    );
    println!("{}", serde_json::to_string_pretty(game.state())?);
    Ok(())
}
