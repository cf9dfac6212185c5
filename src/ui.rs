//! HUD view model
//!
//! Derives what the stamina gauge, score readout and retry button should
//! show from the world state. Applying it to the DOM is left to the caller.

use crate::sim::{GamePhase, WorldState};

/// Stamina gauge colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaminaTone {
    /// Stamina at its maximum
    Full,
    /// Stamina exhausted
    Empty,
    Neutral,
}

impl StaminaTone {
    /// CSS class applied to the gauge, if any
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            StaminaTone::Full => Some("green"),
            StaminaTone::Empty => Some("red"),
            StaminaTone::Neutral => None,
        }
    }
}

/// Everything the on-screen indicators display for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub stamina_text: String,
    pub stamina_tone: StaminaTone,
    pub score_text: String,
    /// Score readout highlighted (win)
    pub score_highlight: bool,
    /// Retry button shown (run ended)
    pub retry_visible: bool,
}

impl Hud {
    pub fn from_state(state: &WorldState) -> Self {
        let player = &state.player;

        let stamina_tone = if player.has_full_stamina() {
            StaminaTone::Full
        } else if player.stamina == 0 {
            StaminaTone::Empty
        } else {
            StaminaTone::Neutral
        };

        let stamina_text = match state.phase {
            GamePhase::GameOver => "GAME OVER!".to_string(),
            _ => format!("{}/{}", player.stamina, player.max_stamina),
        };

        let (score_text, score_highlight) = match state.phase {
            GamePhase::Won => ("\u{221e}".to_string(), true),
            _ => (player.score.to_string(), false),
        };

        Self {
            stamina_text,
            stamina_tone,
            score_text,
            score_highlight,
            retry_visible: state.phase.is_terminal(),
        }
    }
}
