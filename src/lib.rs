//! Breakout Core - a deterministic brick-breaking simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collisions, game state, input)
//! - `platform`: View/clock adapters between the simulation and a host
//! - `renderer`: Scene tracking and vertex generation for any GPU backend
//! - `audio`: Sound cues and volume policy
//! - `hud`: On-screen text derived from game state
//! - `settings`: JSON configuration

pub mod audio;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
///
/// All coordinates are in pixels with the origin at the bottom-left corner
/// of the board and y growing upward.
pub mod consts {
    /// Nominal tick rate of the host clock
    pub const TICK_RATE_HZ: u32 = 60;
    /// Maximum ticks per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Board dimensions
    pub const GAME_WIDTH: f32 = 400.0;
    pub const GAME_HEIGHT: f32 = 620.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 58.0;
    pub const PADDLE_HEIGHT: f32 = 11.0;
    /// Distance of the bottom of the paddle from the bottom of the board
    pub const PADDLE_OFFSET: f32 = 30.0;

    /// Brick layout
    pub const BRICK_SEP_H: f32 = 5.0;
    pub const BRICK_SEP_V: f32 = 4.0;
    pub const BRICK_HEIGHT: f32 = 8.0;
    /// Offset of the top brick row from the top of the board
    pub const BRICK_Y_OFFSET: f32 = 70.0;
    pub const BRICKS_IN_ROW: u32 = 5;
    pub const BRICK_ROWS: u32 = 10;
    pub const BRICK_WIDTH: f32 = GAME_WIDTH / BRICKS_IN_ROW as f32 - BRICK_SEP_H;

    /// Ball defaults
    pub const BALL_DIAMETER: f32 = 18.0;
    /// Serve speed: vx drawn from [min, max), vy fixed downward
    pub const BALL_SERVE_VX_MIN: f32 = 1.0;
    pub const BALL_SERVE_VX_MAX: f32 = 5.0;
    pub const BALL_SERVE_VY: f32 = -5.0;
    /// Gap between the lowest brick row and the serve position
    pub const BALL_SERVE_GAP: f32 = 35.0;
    /// Speed gain on a top-of-paddle bounce (fraction of current velocity)
    pub const PADDLE_BOOST: f32 = 0.1;

    /// Attempts per game
    pub const NUMBER_TURNS: u8 = 3;

    /// Power-up defaults
    pub const POWER_UP_SIZE: f32 = 20.0;
    pub const POWER_UP_FALL_SPEED: f32 = 4.0;
    pub const POWER_UP_CHANCE: f32 = 0.25;
    pub const POWER_UP_BONUS: u64 = 50;
    /// Power-ups below this height are lost
    pub const POWER_UP_FLOOR: f32 = 1.0;
    pub const SLOW_FACTOR: f32 = 0.75;
    pub const CULL_CHANCE: f32 = 0.2;

    /// Brick reward is its height above this line
    pub const BRICK_SCORE_BASELINE: f32 = 300.0;

    /// Wall contact tolerance band
    pub const WALL_TOLERANCE: f32 = 0.1;
    /// A ball below this height has left the board
    pub const FLOOR_THRESHOLD: f32 = 5.0;
    /// Inset used to tell top/bottom hits from side hits
    pub const HIT_PROBE_OFFSET: f32 = 5.0;
}
