//! Fixed timestep simulation tick
//!
//! Advances an active game by one frame: collisions, scoring, power-ups,
//! ball movement and the phase changes they trigger. Displacement is a fixed
//! amount per tick; the host clock decides how many ticks to run.

use super::collision::{catches_power_up, resolve};
use super::random::RandomSource;
use super::state::{
    Brick, BrickId, EntityKey, GameEvent, GamePhase, GameState, Outcome, PowerUp, PowerUpKind,
};
use crate::consts::*;

/// Advance an active game by one tick (other phases are left alone)
pub fn tick<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R) {
    if state.phase != GamePhase::Active {
        return;
    }

    let (Some(ball), Some(paddle)) = (state.ball.as_ref(), state.paddle.as_ref()) else {
        debug_assert!(false, "active phase without ball or paddle");
        return;
    };

    let outcome = resolve(ball, paddle, &state.bricks);
    if let Some(ball) = state.ball.as_mut() {
        ball.vel = outcome.velocity;
    }
    if outcome.paddle_hit {
        state.emit(GameEvent::PaddleBounce);
    }

    match outcome.struck_brick {
        Some(id) => update_brick(state, id, rng),
        None => update_power_up(state, rng),
    }
    if state.is_complete() {
        return;
    }

    if let Some(power_up) = state.power_up.as_mut() {
        power_up.fall();
    }

    update_ball(state);
}

/// Score awarded for a brick: its height above the baseline, never negative
pub fn brick_reward(brick: &Brick) -> u64 {
    (brick.rect.pos.y - BRICK_SCORE_BASELINE).max(0.0).round() as u64
}

/// A destroyed brick drops a power-up only on a lucky draw with none in play
#[inline]
pub fn should_spawn_power_up(draw: f32, power_up_live: bool) -> bool {
    draw < POWER_UP_CHANCE && !power_up_live
}

/// Remove a struck brick, award score, maybe drop a power-up, check for a win
pub fn update_brick<R: RandomSource + ?Sized>(state: &mut GameState, id: BrickId, rng: &mut R) {
    let Some(brick) = state.remove_brick(id) else {
        return;
    };
    state.emit(GameEvent::Despawned(EntityKey::Brick(id)));

    let reward = brick_reward(&brick);
    state.score += reward;
    state.emit(GameEvent::BrickDestroyed { id, reward });
    log::debug!("brick {} destroyed (+{}, score {})", id, reward, state.score);

    let draw = rng.next_f32();
    if should_spawn_power_up(draw, state.power_up.is_some()) {
        state.power_up = Some(PowerUp::dropped_from(&brick));
        state.emit(GameEvent::Spawned(EntityKey::PowerUp));
    }

    if state.bricks.is_empty() {
        finish(state, Outcome::Won);
    }
}

/// Catch or lose a falling power-up
fn update_power_up<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R) {
    let (Some(power_up), Some(paddle)) = (state.power_up.as_ref(), state.paddle.as_ref()) else {
        return;
    };
    let caught = catches_power_up(paddle, power_up);
    let fell_off = power_up.rect.pos.y < POWER_UP_FLOOR;

    if caught {
        despawn_power_up(state);
        activate_power(state, rng);
    } else if fell_off {
        despawn_power_up(state);
    }
}

/// Award the catch bonus and apply a random effect
pub fn activate_power<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R) -> PowerUpKind {
    state.score += POWER_UP_BONUS;
    let kind = PowerUpKind::ALL[rng.pick(PowerUpKind::ALL.len())];
    apply_power(state, kind, rng);
    kind
}

/// Apply one power-up effect
pub fn apply_power<R: RandomSource + ?Sized>(state: &mut GameState, kind: PowerUpKind, rng: &mut R) {
    log::info!("power-up: {}", kind.announcement());
    state.emit(GameEvent::PowerUpCaught(kind));

    match kind {
        PowerUpKind::SlowBall => {
            if let Some(ball) = state.ball.as_mut() {
                ball.vel *= SLOW_FACTOR;
            }
        }
        PowerUpKind::WidenPaddle => {
            if let Some(paddle) = state.paddle.as_mut() {
                paddle.widen();
                state.emit(GameEvent::Resized(EntityKey::Paddle));
            }
        }
        PowerUpKind::CullBricks => {
            let mut culled = Vec::new();
            state.bricks.retain(|b| {
                if rng.next_f32() < CULL_CHANCE {
                    culled.push(b.id);
                    false
                } else {
                    true
                }
            });
            log::debug!("culled {} bricks", culled.len());
            for id in culled {
                state.emit(GameEvent::Despawned(EntityKey::Brick(id)));
            }
            if state.bricks.is_empty() {
                finish(state, Outcome::Won);
            }
        }
        PowerUpKind::EnlargeBall => {
            if let Some(ball) = state.ball.as_mut() {
                ball.enlarge();
                state.emit(GameEvent::Resized(EntityKey::Ball));
            }
        }
    }
}

/// Move the ball one step and handle walls and the floor
pub fn update_ball(state: &mut GameState) {
    let Some(ball) = state.ball.as_mut() else {
        return;
    };

    ball.rect.pos += ball.vel;
    let r = &mut ball.rect;

    if r.left() < WALL_TOLERANCE && ball.vel.x < 0.0 {
        r.pos.x = r.pos.x.max(0.0);
        ball.vel.x = ball.vel.x.abs();
    } else if r.right() > GAME_WIDTH - WALL_TOLERANCE {
        r.pos.x = r.pos.x.min(GAME_WIDTH - r.size.x);
        ball.vel.x = -ball.vel.x.abs();
    }

    let mut lost = false;
    if r.top() > GAME_HEIGHT - WALL_TOLERANCE {
        r.pos.y = r.pos.y.min(GAME_HEIGHT - r.size.y);
        ball.vel.y = -ball.vel.y.abs();
    } else if r.bottom() < FLOOR_THRESHOLD {
        lost = true;
    }

    if lost {
        lose_ball(state);
    }
}

/// The ball left through the floor
fn lose_ball(state: &mut GameState) {
    despawn_ball(state);
    if let Some(paddle) = state.paddle.as_mut() {
        paddle.reset_size();
        state.emit(GameEvent::Resized(EntityKey::Paddle));
    }

    state.lives = state.lives.saturating_sub(1);
    let lives_left = state.lives;
    state.emit(GameEvent::BallLost { lives_left });
    log::info!("ball lost, {} lives left", lives_left);

    if lives_left == 0 {
        finish(state, Outcome::Lost);
    } else {
        despawn_power_up(state);
        state.set_phase(GamePhase::Paused);
    }
}

/// End the game, clearing anything still moving
fn finish(state: &mut GameState, outcome: Outcome) {
    despawn_ball(state);
    despawn_power_up(state);
    log::info!("game over: {:?}, score {}", outcome, state.score);
    state.set_phase(GamePhase::Complete(outcome));
}

fn despawn_ball(state: &mut GameState) {
    if state.ball.take().is_some() {
        state.emit(GameEvent::Despawned(EntityKey::Ball));
    }
}

fn despawn_power_up(state: &mut GameState) {
    if state.power_up.take().is_some() {
        state.emit(GameEvent::Despawned(EntityKey::PowerUp));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::color::Color;
    use crate::sim::random::ScriptedRandom;
    use crate::sim::rect::Rect;
    use crate::sim::state::{Ball, Paddle};
    use glam::Vec2;

    /// Active board with a paddle, no bricks, and the given ball
    fn active_with_ball(ball: Ball) -> GameState {
        let mut state = GameState::new();
        state.paddle = Some(Paddle::default());
        state.ball = Some(ball);
        state.phase = GamePhase::Active;
        state
    }

    fn brick(id: BrickId, x: f32, y: f32) -> Brick {
        Brick {
            id,
            rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
            color: Color::RED,
        }
    }

    #[test]
    fn test_left_wall_reflection() {
        let mut state = active_with_ball(Ball::at(Vec2::new(0.0, 300.0), Vec2::new(-2.0, 1.0)));
        update_ball(&mut state);
        let ball = state.ball.as_ref().unwrap();
        assert_eq!(ball.vel.x, 2.0);
        assert!(ball.rect.pos.x >= 0.0);
    }

    #[test]
    fn test_right_wall_reflection() {
        let mut state = active_with_ball(Ball::at(Vec2::new(381.0, 300.0), Vec2::new(3.0, 1.0)));
        update_ball(&mut state);
        let ball = state.ball.as_ref().unwrap();
        assert_eq!(ball.vel.x, -3.0);
        assert!(ball.rect.right() <= GAME_WIDTH);
    }

    #[test]
    fn test_top_wall_reflection() {
        let mut state = active_with_ball(Ball::at(Vec2::new(200.0, 600.0), Vec2::new(1.0, 5.0)));
        update_ball(&mut state);
        let ball = state.ball.as_ref().unwrap();
        assert_eq!(ball.vel.y, -5.0);
        assert!(ball.rect.top() <= GAME_HEIGHT);
    }

    #[test]
    fn test_floor_loses_ball_and_pauses() {
        let mut state = active_with_ball(Ball::at(Vec2::new(200.0, 8.0), Vec2::new(1.0, -5.0)));
        state.power_up = Some(PowerUp::dropped_from(&brick(1, 100.0, 400.0)));
        state.paddle.as_mut().unwrap().widen();

        update_ball(&mut state);

        assert!(state.ball.is_none());
        assert!(state.power_up.is_none());
        assert_eq!(state.lives, NUMBER_TURNS - 1);
        assert_eq!(state.phase, GamePhase::Paused);
        assert_eq!(state.paddle.as_ref().unwrap().width(), PADDLE_WIDTH);
        assert!(state.events.contains(&GameEvent::BallLost { lives_left: 2 }));
    }

    #[test]
    fn test_last_life_loses_game_with_bricks_left() {
        let mut state = active_with_ball(Ball::at(Vec2::new(200.0, 8.0), Vec2::new(1.0, -5.0)));
        state.bricks.push(brick(1, 2.5, 538.0));
        state.lives = 1;

        update_ball(&mut state);

        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::Complete(Outcome::Lost));
        assert_eq!(state.bricks.len(), 1);
    }

    #[test]
    fn test_last_brick_wins_regardless_of_lives() {
        let mut state = active_with_ball(Ball::at(Vec2::new(120.0, 415.0), Vec2::new(1.0, 5.0)));
        state.bricks.push(brick(1, 100.0, 430.0));
        state.lives = 1;
        let mut rng = ScriptedRandom::constant(0.9);

        tick(&mut state, &mut rng);

        assert!(state.bricks.is_empty());
        assert_eq!(state.phase, GamePhase::Complete(Outcome::Won));
        assert!(state.ball.is_none());
        assert_eq!(state.score, 130);
    }

    #[test]
    fn test_spawn_rule() {
        assert!(should_spawn_power_up(0.0, false));
        assert!(should_spawn_power_up(0.2499, false));
        assert!(!should_spawn_power_up(0.25, false));
        assert!(!should_spawn_power_up(0.1, true));
    }

    #[test]
    fn test_power_up_spawns_on_low_draw() {
        let mut state = active_with_ball(Ball::at(Vec2::new(200.0, 200.0), Vec2::new(1.0, 5.0)));
        state.bricks.push(brick(1, 100.0, 430.0));
        state.bricks.push(brick(2, 200.0, 430.0));
        state.bricks.push(brick(3, 300.0, 430.0));

        update_brick(&mut state, 1, &mut ScriptedRandom::constant(0.1));
        assert!(state.power_up.is_some());
        assert_eq!(state.power_up.as_ref().unwrap().rect.pos, Vec2::new(100.0 + BRICK_WIDTH / 2.0, 430.0));

        // A second lucky draw does not replace the live power-up
        let before = state.power_up.clone();
        update_brick(&mut state, 2, &mut ScriptedRandom::constant(0.1));
        assert_eq!(state.power_up, before);
    }

    #[test]
    fn test_no_spawn_on_high_draw() {
        let mut state = active_with_ball(Ball::at(Vec2::new(200.0, 200.0), Vec2::new(1.0, 5.0)));
        state.bricks.push(brick(1, 100.0, 430.0));
        state.bricks.push(brick(2, 200.0, 430.0));
        update_brick(&mut state, 1, &mut ScriptedRandom::constant(0.25));
        assert!(state.power_up.is_none());
    }

    #[test]
    fn test_update_brick_missing_id_is_noop() {
        let mut state = active_with_ball(Ball::at(Vec2::new(200.0, 200.0), Vec2::new(1.0, 5.0)));
        state.bricks.push(brick(1, 100.0, 430.0));
        update_brick(&mut state, 99, &mut ScriptedRandom::constant(0.1));
        assert_eq!(state.bricks.len(), 1);
        assert_eq!(state.score, 0);
        assert!(state.power_up.is_none());
    }

    #[test]
    fn test_brick_reward_clamped() {
        assert_eq!(brick_reward(&brick(1, 0.0, 538.0)), 238);
        assert_eq!(brick_reward(&brick(1, 0.0, 120.0)), 0);
    }

    #[test]
    fn test_power_up_caught() {
        let mut state = active_with_ball(Ball::at(Vec2::new(200.0, 300.0), Vec2::new(4.0, 4.0)));
        state.bricks.push(brick(1, 100.0, 430.0));
        state.power_up = Some(PowerUp {
            rect: Rect::new(10.0, 36.0, POWER_UP_SIZE, POWER_UP_SIZE),
            vel: Vec2::new(0.0, -POWER_UP_FALL_SPEED),
        });
        // First draw picks SlowBall
        let mut rng = ScriptedRandom::constant(0.0);

        tick(&mut state, &mut rng);

        assert!(state.power_up.is_none());
        assert_eq!(state.score, POWER_UP_BONUS);
        assert_eq!(state.ball.as_ref().unwrap().vel, Vec2::new(3.0, 3.0));
        assert!(state.events.contains(&GameEvent::PowerUpCaught(PowerUpKind::SlowBall)));
    }

    #[test]
    fn test_power_up_falls_off_board() {
        let mut state = active_with_ball(Ball::at(Vec2::new(200.0, 300.0), Vec2::new(4.0, 4.0)));
        state.bricks.push(brick(1, 100.0, 430.0));
        state.power_up = Some(PowerUp {
            rect: Rect::new(300.0, 0.5, POWER_UP_SIZE, POWER_UP_SIZE),
            vel: Vec2::new(0.0, -POWER_UP_FALL_SPEED),
        });
        tick(&mut state, &mut ScriptedRandom::constant(0.0));
        assert!(state.power_up.is_none());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_widen_and_enlarge() {
        let mut state = active_with_ball(Ball::at(Vec2::new(200.0, 300.0), Vec2::new(4.0, 4.0)));
        let mut rng = ScriptedRandom::constant(0.0);
        apply_power(&mut state, PowerUpKind::WidenPaddle, &mut rng);
        apply_power(&mut state, PowerUpKind::EnlargeBall, &mut rng);
        assert_eq!(state.paddle.as_ref().unwrap().width(), PADDLE_WIDTH + PADDLE_WIDTH / 4.0);
        let size = state.ball.as_ref().unwrap().rect.size;
        assert_eq!(size, Vec2::splat(BALL_DIAMETER + BALL_DIAMETER / 5.0));
    }

    #[test]
    fn test_cull_bricks() {
        let mut state = active_with_ball(Ball::at(Vec2::new(200.0, 300.0), Vec2::new(4.0, 4.0)));
        for id in 1..=4 {
            state.bricks.push(brick(id, 0.0, 400.0 + id as f32 * 12.0));
        }
        // Draws alternate: cull, keep, cull, keep
        let mut rng = ScriptedRandom::new(vec![0.1, 0.5]);
        apply_power(&mut state, PowerUpKind::CullBricks, &mut rng);
        let ids: Vec<_> = state.bricks.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 4]);
        assert_eq!(state.phase, GamePhase::Active);

        // Culling everything wins the game
        apply_power(&mut state, PowerUpKind::CullBricks, &mut ScriptedRandom::constant(0.0));
        assert_eq!(state.phase, GamePhase::Complete(Outcome::Won));
        assert!(state.ball.is_none());
    }

    #[test]
    fn test_tick_ignored_when_not_active() {
        let mut state = GameState::new();
        tick(&mut state, &mut ScriptedRandom::constant(0.5));
        assert_eq!(state.phase, GamePhase::Inactive);
        assert!(state.events.is_empty());
    }
}
