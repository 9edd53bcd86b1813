//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]; it is plain data
//! and serializable so a snapshot can be logged or compared across runs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::color::{Color, brick_color};
use super::random::RandomSource;
use super::rect::Rect;
use crate::consts::*;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every brick destroyed
    Won,
    /// Out of lives
    Lost,
}

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Game has not started yet
    Inactive,
    /// Board is set up, waiting for the next serve
    Paused,
    /// Ball is in play and being animated
    Active,
    /// Game over; a press starts a new one
    Complete(Outcome),
}

/// Stable brick identifier (allocation order)
pub type BrickId = u32;

/// Identifies an entity for view adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKey {
    Brick(BrickId),
    Paddle,
    Ball,
    PowerUp,
}

/// A brick entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub id: BrickId,
    pub rect: Rect,
    pub color: Color,
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            rect: Rect::new(0.0, PADDLE_OFFSET, PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }
}

impl Paddle {
    pub fn x(&self) -> f32 {
        self.rect.pos.x
    }

    pub fn width(&self) -> f32 {
        self.rect.size.x
    }

    /// Rightmost x the paddle may take at its current width
    pub fn max_x(&self) -> f32 {
        (GAME_WIDTH - self.width()).max(0.0)
    }

    /// Move to `x`, clamped so the paddle stays on the board
    pub fn move_to(&mut self, x: f32) {
        self.rect.pos.x = x.clamp(0.0, self.max_x());
    }

    /// Grow by a quarter of the default width, keeping it on the board
    pub fn widen(&mut self) {
        self.rect.size.x += PADDLE_WIDTH / 4.0;
        self.move_to(self.x());
    }

    /// Back to the default size (after losing a ball)
    pub fn reset_size(&mut self) {
        self.rect.size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
    pub color: Color,
}

impl Ball {
    /// Height the ball is served from: just below the lowest brick row
    pub fn serve_height() -> f32 {
        GAME_HEIGHT
            - (BRICK_Y_OFFSET + (BRICK_SEP_V + BRICK_HEIGHT) * BRICK_ROWS as f32)
            - BALL_SERVE_GAP
    }

    /// A freshly served ball heading down and to the right
    pub fn serve<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let vx = rng.range(BALL_SERVE_VX_MIN, BALL_SERVE_VX_MAX);
        let color = Color::random(rng);
        Self {
            rect: Rect::new(0.0, Self::serve_height(), BALL_DIAMETER, BALL_DIAMETER),
            vel: Vec2::new(vx, BALL_SERVE_VY),
            color,
        }
    }

    /// Ball of default size at `pos` moving with `vel`
    pub fn at(pos: Vec2, vel: Vec2) -> Self {
        Self {
            rect: Rect::new(pos.x, pos.y, BALL_DIAMETER, BALL_DIAMETER),
            vel,
            color: Color::WHITE,
        }
    }

    /// Grow both dimensions by a fifth of the default diameter
    pub fn enlarge(&mut self) {
        self.rect.size += Vec2::splat(BALL_DIAMETER / 5.0);
    }
}

/// Power-up effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Ball velocity scaled down
    SlowBall,
    /// Paddle grows
    WidenPaddle,
    /// A random fifth of the bricks disappear
    CullBricks,
    /// Ball grows
    EnlargeBall,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::SlowBall,
        PowerUpKind::WidenPaddle,
        PowerUpKind::CullBricks,
        PowerUpKind::EnlargeBall,
    ];

    /// Banner shown when the effect kicks in
    pub fn announcement(&self) -> &'static str {
        match self {
            PowerUpKind::SlowBall => "ball speed decreased!!!",
            PowerUpKind::WidenPaddle => "paddle size increased!!!",
            PowerUpKind::CullBricks => "random brick kill!!!",
            PowerUpKind::EnlargeBall => "ball size increased!!!",
        }
    }
}

/// A falling power-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub rect: Rect,
    pub vel: Vec2,
}

impl PowerUp {
    /// Dropped from the middle of a destroyed brick
    pub fn dropped_from(brick: &Brick) -> Self {
        Self {
            rect: Rect::new(
                brick.rect.pos.x + BRICK_WIDTH / 2.0,
                brick.rect.pos.y,
                POWER_UP_SIZE,
                POWER_UP_SIZE,
            ),
            vel: Vec2::new(0.0, -POWER_UP_FALL_SPEED),
        }
    }

    pub fn fall(&mut self) {
        self.rect.pos += self.vel;
    }
}

/// Something the outside world may want to react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Entity became part of the scene
    Spawned(EntityKey),
    /// Entity left the scene
    Despawned(EntityKey),
    /// Entity changed size
    Resized(EntityKey),
    /// Ball bounced off the paddle
    PaddleBounce,
    BrickDestroyed { id: BrickId, reward: u64 },
    PowerUpCaught(PowerUpKind),
    BallLost { lives_left: u8 },
    Served,
    PhaseChanged(GamePhase),
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Remaining bricks, ordered by id
    pub bricks: Vec<Brick>,
    pub paddle: Option<Paddle>,
    pub ball: Option<Ball>,
    pub power_up: Option<PowerUp>,
    pub score: u64,
    pub lives: u8,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Bumped whenever a new game is set up
    pub session: u32,
    /// Events produced since the last drain (not part of snapshots)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next brick id
    next_id: BrickId,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Empty, inactive board
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Inactive,
            bricks: Vec::new(),
            paddle: None,
            ball: None,
            power_up: None,
            score: 0,
            lives: NUMBER_TURNS,
            time_ticks: 0,
            session: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Record an event for adapters
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events recorded so far
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Switch phase, recording the change
    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
            self.emit(GameEvent::PhaseChanged(phase));
        }
    }

    /// Allocate a new brick ID
    pub fn next_brick_id(&mut self) -> BrickId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Lay out the full `BRICKS_IN_ROW x BRICK_ROWS` grid, column by column
    pub fn build_bricks(&mut self) {
        self.bricks.clear();
        for c in 0..BRICKS_IN_ROW {
            for q in 0..BRICK_ROWS {
                let x = BRICK_SEP_H / 2.0 + c as f32 * (BRICK_WIDTH + BRICK_SEP_H);
                let y = GAME_HEIGHT - (BRICK_Y_OFFSET + (BRICK_SEP_V + BRICK_HEIGHT) * (q + 1) as f32);
                let id = self.next_brick_id();
                self.bricks.push(Brick {
                    id,
                    rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
                    color: brick_color(q),
                });
            }
        }
    }

    pub fn brick(&self, id: BrickId) -> Option<&Brick> {
        self.bricks.iter().find(|b| b.id == id)
    }

    /// Remove a brick by id; removing a missing brick is a no-op
    pub fn remove_brick(&mut self, id: BrickId) -> Option<Brick> {
        let idx = self.bricks.iter().position(|b| b.id == id)?;
        Some(self.bricks.remove(idx))
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.phase, GamePhase::Complete(_))
    }

    /// Check the board invariants (debug builds only)
    pub fn debug_check(&self) {
        debug_assert!(
            self.ball.is_none() || self.phase == GamePhase::Active,
            "ball exists outside Active phase: {:?}",
            self.phase
        );
        debug_assert!(self.lives <= NUMBER_TURNS);
        if self.phase == GamePhase::Inactive {
            debug_assert!(self.paddle.is_none() && self.bricks.is_empty());
        }
        if self.lives == 0 {
            debug_assert_eq!(self.phase, GamePhase::Complete(Outcome::Lost));
        }
    }
}
