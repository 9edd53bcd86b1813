//! Fill colors for game entities

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::random::RandomSource;

/// A color channel was outside `[0, 1]` (or NaN)
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid color channel {channel}: {value} (expected 0.0..=1.0)")]
pub struct InvalidColor {
    pub channel: &'static str,
    pub value: f32,
}

/// RGBA color with channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl Color {
    pub const BLACK: Color = Color::opaque(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::opaque(1.0, 1.0, 1.0);
    pub const RED: Color = Color::opaque(1.0, 0.0, 0.0);
    pub const ORANGE: Color = Color::opaque(1.0, 0.5, 0.0);
    pub const YELLOW: Color = Color::opaque(1.0, 1.0, 0.0);
    pub const GREEN: Color = Color::opaque(0.0, 1.0, 0.0);
    pub const CYAN: Color = Color::opaque(0.0, 1.0, 1.0);
    pub const BLUE: Color = Color::opaque(0.0, 0.0, 1.0);

    const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build a color, rejecting channels outside `[0, 1]`
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Result<Self, InvalidColor> {
        for (channel, value) in [("r", r), ("g", g), ("b", b), ("a", a)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(InvalidColor { channel, value });
            }
        }
        Ok(Self { r, g, b, a })
    }

    /// Build an opaque color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::opaque(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Random opaque color (used for freshly served balls)
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut channel = || rng.pick(255) as u8;
        let (r, g, b) = (channel(), channel(), channel());
        Self::from_rgb8(r, g, b)
    }

    /// Replace the alpha channel
    pub fn with_alpha(self, a: f32) -> Result<Self, InvalidColor> {
        Self::rgba(self.r, self.g, self.b, a)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Row colors, top row first
pub const BRICK_COLORS: [Color; 10] = [
    Color::RED,
    Color::RED,
    Color::ORANGE,
    Color::ORANGE,
    Color::YELLOW,
    Color::YELLOW,
    Color::GREEN,
    Color::GREEN,
    Color::CYAN,
    Color::CYAN,
];

/// Color for the brick in the given row
pub fn brick_color(row: u32) -> Color {
    BRICK_COLORS[row as usize % BRICK_COLORS.len()]
}
