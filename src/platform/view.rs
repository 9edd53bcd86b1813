//! Scene membership for whatever draws the game
//!
//! The simulation never touches a view directly. It records spawn, despawn
//! and resize events; [`SceneSync`] replays them into a [`View`].

use crate::sim::{EntityKey, GameEvent};

/// Host-side scene graph
pub trait View {
    /// Entity becomes visible
    fn add(&mut self, key: EntityKey);
    /// Entity is no longer visible
    fn remove(&mut self, key: EntityKey);
    /// Entity changed shape; hosts that cache geometry should rebuild it
    fn refresh(&mut self, _key: EntityKey) {}
}

/// Replays game events into a view
#[derive(Debug, Default)]
pub struct SceneSync;

impl SceneSync {
    /// Apply membership events; returns how many were applied
    pub fn apply<V: View + ?Sized>(view: &mut V, events: &[GameEvent]) -> usize {
        let mut applied = 0;
        for event in events {
            match event {
                GameEvent::Spawned(key) => view.add(*key),
                GameEvent::Despawned(key) => view.remove(*key),
                GameEvent::Resized(key) => view.refresh(*key),
                _ => continue,
            }
            applied += 1;
        }
        applied
    }
}
