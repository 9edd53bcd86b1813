//! Heads-up display text
//!
//! Lives, score, the centered banner and the latest power-up announcement.

use crate::sim::{GameEvent, GamePhase, GameState, Outcome};

/// Text to draw this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub lives: String,
    pub score: String,
    /// Centered message, if any
    pub banner: Option<&'static str>,
    /// Most recent power-up, shown until the ball is lost
    pub power_up: Option<&'static str>,
}

/// Remembers the parts of the HUD that come from events
#[derive(Debug, Clone, Default)]
pub struct Hud {
    power_up: Option<&'static str>,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update from a batch of game events
    pub fn observe(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::PowerUpCaught(kind) => self.power_up = Some(kind.announcement()),
                GameEvent::BallLost { .. } | GameEvent::PhaseChanged(GamePhase::Inactive) => {
                    self.power_up = None
                }
                _ => {}
            }
        }
    }

    /// Text for the current state
    pub fn text(&self, state: &GameState) -> HudText {
        HudText {
            lives: format!("Lives: {}", state.lives),
            score: format!("Score: {}", state.score),
            banner: banner(state),
            power_up: self.power_up,
        }
    }
}

fn banner(state: &GameState) -> Option<&'static str> {
    match state.phase {
        GamePhase::Inactive if state.session == 0 => Some("Click to Start"),
        GamePhase::Inactive => Some("Click to Play Again"),
        GamePhase::Paused => Some("Click to Serve"),
        GamePhase::Active => None,
        GamePhase::Complete(Outcome::Won) => Some("not bad ;)"),
        GamePhase::Complete(Outcome::Lost) => Some("much disappoint :("),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PowerUpKind;

    #[test]
    fn test_text_for_fresh_game() {
        let hud = Hud::new();
        let text = hud.text(&GameState::new());
        assert_eq!(text.lives, "Lives: 3");
        assert_eq!(text.score, "Score: 0");
        assert_eq!(text.banner, Some("Click to Start"));
        assert_eq!(text.power_up, None);
    }

    #[test]
    fn test_power_up_message_lifecycle() {
        let mut hud = Hud::new();
        hud.observe(&[GameEvent::PowerUpCaught(PowerUpKind::WidenPaddle)]);
        assert_eq!(hud.text(&GameState::new()).power_up, Some("paddle size increased!!!"));

        hud.observe(&[GameEvent::BallLost { lives_left: 2 }]);
        assert_eq!(hud.text(&GameState::new()).power_up, None);
    }

    #[test]
    fn test_outcome_banners() {
        let hud = Hud::new();
        let mut state = GameState::new();
        state.phase = GamePhase::Complete(Outcome::Won);
        assert_eq!(hud.text(&state).banner, Some("not bad ;)"));
        state.phase = GamePhase::Complete(Outcome::Lost);
        assert_eq!(hud.text(&state).banner, Some("much disappoint :("));
    }
}
