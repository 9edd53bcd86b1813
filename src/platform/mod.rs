//! Platform abstraction layer
//!
//! Handles the boundary between the simulation and a host:
//! - Scene membership (`View`)
//! - Fixed-rate ticking (`Clock`)

pub mod clock;
pub mod view;

pub use clock::Clock;
pub use view::{SceneSync, View};
