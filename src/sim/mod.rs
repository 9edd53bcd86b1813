//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick displacement
//! - Injected or seeded randomness only
//! - Stable iteration order (by brick ID)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod color;
pub mod game;
pub mod random;
pub mod rect;
pub mod scheduler;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{CollisionOutcome, catches_power_up, resolve};
pub use color::{Color, InvalidColor};
pub use game::{Game, InputEvent};
pub use random::{RandomSource, ScriptedRandom, seeded};
pub use rect::Rect;
pub use scheduler::{Deferred, Scheduler};
pub use state::{
    Ball, Brick, BrickId, EntityKey, GameEvent, GamePhase, GameState, Outcome, Paddle, PowerUp,
    PowerUpKind,
};
pub use tick::{activate_power, apply_power, brick_reward, should_spawn_power_up, tick, update_ball};
