//! Scene tracking and per-frame vertex generation
//!
//! A [`Scene`] is the `View` a host hands to `SceneSync`. It only remembers
//! which entities are visible; geometry is read from the game state each
//! frame.

use std::collections::BTreeSet;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{GAME_HEIGHT, GAME_WIDTH};
use crate::platform::View;
use crate::sim::{EntityKey, GameState, Rect};

/// Segments used for the ball outline
const BALL_SEGMENTS: u32 = 24;

/// Visible entities
#[derive(Debug, Default)]
pub struct Scene {
    visible: BTreeSet<EntityKey>,
    /// Set when membership or shape changed since the last build
    dirty: bool,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, key: EntityKey) -> bool {
        self.visible.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Triangle list for the current frame, back to front
    pub fn build(&mut self, state: &GameState) -> Vec<Vertex> {
        self.dirty = false;

        let mut vertices = shapes::rect(
            &Rect::new(0.0, 0.0, GAME_WIDTH, GAME_HEIGHT),
            colors::BACKGROUND,
        );

        for brick in &state.bricks {
            if self.is_visible(EntityKey::Brick(brick.id)) {
                vertices.extend(shapes::rect(&brick.rect, brick.color.to_array()));
            }
        }
        if let Some(paddle) = &state.paddle {
            if self.is_visible(EntityKey::Paddle) {
                vertices.extend(shapes::rect(&paddle.rect, colors::PADDLE));
            }
        }
        if let Some(power_up) = &state.power_up {
            if self.is_visible(EntityKey::PowerUp) {
                vertices.extend(shapes::star(&power_up.rect, colors::POWER_UP));
            }
        }
        if let Some(ball) = &state.ball {
            if self.is_visible(EntityKey::Ball) {
                vertices.extend(shapes::ellipse(&ball.rect, ball.color.to_array(), BALL_SEGMENTS));
            }
        }

        vertices
    }
}

impl View for Scene {
    fn add(&mut self, key: EntityKey) {
        self.dirty |= self.visible.insert(key);
    }

    fn remove(&mut self, key: EntityKey) {
        self.dirty |= self.visible.remove(&key);
    }

    fn refresh(&mut self, _key: EntityKey) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::SceneSync;
    use crate::sim::{Game, ScriptedRandom};

    #[test]
    fn test_scene_follows_game() {
        let mut game = Game::with_rng(ScriptedRandom::constant(0.5));
        let mut scene = Scene::new();

        game.press(0.0, 0.0);
        SceneSync::apply(&mut scene, &game.drain_events());
        assert_eq!(scene.len(), 51); // 50 bricks + paddle
        assert!(scene.is_dirty());

        // Background + 51 quads
        let vertices = scene.build(game.state());
        assert_eq!(vertices.len(), 6 * 52);
        assert!(!scene.is_dirty());

        game.press(0.0, 0.0);
        game.update(1.0 / 60.0);
        SceneSync::apply(&mut scene, &game.drain_events());
        assert!(scene.is_visible(EntityKey::Ball));
        let vertices = scene.build(game.state());
        assert_eq!(vertices.len(), 6 * 52 + 3 * BALL_SEGMENTS as usize);
    }
}
