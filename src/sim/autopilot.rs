//! Demo-mode player
//!
//! Produces the pointer input a player would: press to start and serve, then
//! drag the paddle under the ball. When the ball is rising and a power-up is
//! falling, it goes for the power-up instead.

use super::game::InputEvent;
use super::state::{GamePhase, GameState};

/// Maximum paddle travel per tick (pixels)
const MAX_STEP: f32 = 12.0;

/// Scripted player that tracks the ball
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Whether a press has anchored the current drag
    anchored: bool,
    /// Pointer x as last reported
    pointer_x: f32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input for the coming tick
    pub fn inputs(&mut self, state: &GameState) -> Vec<InputEvent> {
        let paddle_x = state.paddle.as_ref().map_or(0.0, |p| p.x());

        match state.phase {
            GamePhase::Inactive => {
                self.anchored = false;
                vec![InputEvent::Press { x: 0.0, y: 0.0 }]
            }
            GamePhase::Paused => {
                // Pressing at the paddle's x makes pointer and paddle coincide
                self.anchored = true;
                self.pointer_x = paddle_x;
                vec![InputEvent::Press { x: paddle_x, y: 0.0 }]
            }
            GamePhase::Active => {
                let mut out = Vec::with_capacity(2);
                if !self.anchored {
                    self.anchored = true;
                    self.pointer_x = paddle_x;
                    out.push(InputEvent::Press { x: paddle_x, y: 0.0 });
                }
                if let Some(target) = self.target_x(state) {
                    let step = (target - self.pointer_x).clamp(-MAX_STEP, MAX_STEP);
                    self.pointer_x += step;
                    out.push(InputEvent::Drag { x: self.pointer_x });
                }
                out
            }
            GamePhase::Complete(_) => {
                self.anchored = false;
                Vec::new()
            }
        }
    }

    /// Where the paddle's left edge should go
    fn target_x(&self, state: &GameState) -> Option<f32> {
        let paddle = state.paddle.as_ref()?;
        let ball = state.ball.as_ref()?;
        let half = paddle.width() / 2.0;

        // Vary the contact point so the ball does not loop forever
        let t = state.time_ticks as f32 * 0.01;
        let offset = (t.sin() * 0.3 + (t * 0.7).sin() * 0.15) * half;

        let ball_rising = ball.vel.y > 0.0;
        let chase = match &state.power_up {
            Some(p) if ball_rising => p.rect.center().x,
            _ => ball.rect.center().x + offset,
        };
        Some(chase - half)
    }
}
