//! Collision detection and response for axis-aligned boxes
//!
//! Paddle first, then bricks in board order. The resolver only reports what
//! happened and what the ball's velocity should become; the caller applies it.

use glam::Vec2;

use super::rect::Rect;
use super::state::{Ball, Brick, BrickId, Paddle, PowerUp};
use crate::consts::{HIT_PROBE_OFFSET, PADDLE_BOOST};

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionOutcome {
    /// Brick the ball struck (caller removes it and awards score)
    pub struck_brick: Option<BrickId>,
    /// Whether the ball bounced off the paddle
    pub paddle_hit: bool,
    /// Ball velocity after the collision
    pub velocity: Vec2,
}

impl CollisionOutcome {
    pub fn miss(velocity: Vec2) -> Self {
        Self {
            struck_brick: None,
            paddle_hit: false,
            velocity,
        }
    }

    pub fn is_miss(&self) -> bool {
        self.struck_brick.is_none() && !self.paddle_hit
    }
}

/// Find what the ball hits this tick and how it bounces
pub fn resolve(ball: &Ball, paddle: &Paddle, bricks: &[Brick]) -> CollisionOutcome {
    if let Some(velocity) = paddle_bounce(&ball.rect, ball.vel, &paddle.rect) {
        return CollisionOutcome {
            struck_brick: None,
            paddle_hit: true,
            velocity,
        };
    }

    for brick in bricks {
        if brick.rect.contains_any_corner(&ball.rect) {
            return CollisionOutcome {
                struck_brick: Some(brick.id),
                paddle_hit: false,
                velocity: brick_bounce(&ball.rect, ball.vel, &brick.rect),
            };
        }
    }

    CollisionOutcome::miss(ball.vel)
}

/// Bounce off the paddle, testing only the bottom corner on the leading edge
///
/// A hit whose probe point 5px higher is still inside the paddle came from
/// the side; anything else landed on top and speeds the ball up by 10%.
fn paddle_bounce(ball: &Rect, vel: Vec2, paddle: &Rect) -> Option<Vec2> {
    let edge_x = if vel.x >= 0.0 { ball.right() } else { ball.left() };
    if !paddle.contains_point(Vec2::new(edge_x, ball.bottom())) {
        return None;
    }

    if paddle.contains_point(Vec2::new(edge_x, ball.bottom() + HIT_PROBE_OFFSET)) {
        return Some(Vec2::new(-vel.x, vel.y));
    }

    let bounced = Vec2::new(vel.x, -vel.y);
    Some(bounced + bounced * PADDLE_BOOST)
}

/// Bounce off a brick the ball overlaps
fn brick_bounce(ball: &Rect, vel: Vec2, brick: &Rect) -> Vec2 {
    let probe_x = ball.left() + HIT_PROBE_OFFSET;
    let probe_y = ball.bottom() + HIT_PROBE_OFFSET;

    let top_or_bottom = brick.contains_point(Vec2::new(probe_x, ball.bottom()))
        || brick.contains_point(Vec2::new(probe_x, ball.top()));
    if top_or_bottom {
        return Vec2::new(vel.x, -vel.y);
    }

    let side = brick.contains_point(Vec2::new(ball.left(), probe_y))
        || brick.contains_point(Vec2::new(ball.right(), probe_y));
    if side {
        return Vec2::new(-vel.x, vel.y);
    }

    // Corner graze: no reflection
    vel
}

/// Check whether the paddle catches a falling power-up
///
/// Either bottom corner of the power-up inside the paddle counts.
pub fn catches_power_up(paddle: &Paddle, power_up: &PowerUp) -> bool {
    let r = &power_up.rect;
    paddle.rect.contains_point(Vec2::new(r.left(), r.bottom()))
        || paddle.rect.contains_point(Vec2::new(r.right(), r.bottom()))
}
