//! Per-tick snapshot for the render collaborator
//!
//! Everything a renderer needs after a tick, as plain numbers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState, Rect};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    /// Current wall scale (1.0 = at the bird)
    pub wall_scale: f32,
    /// Bird offset from the stage center
    pub bird: Vec2,
    /// Door rectangle in stage coordinates
    pub door: Rect,
    pub score: u32,
    pub phase: GamePhase,
    /// Hide the running score once the game-over banner is up
    pub score_visible: bool,
    /// Banner text, only when the game is over
    pub game_over_text: Option<String>,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        let game_over = state.is_game_over();
        Self {
            wall_scale: state.wall.scale,
            bird: state.bird.pos,
            door: state.door.rect(),
            score: state.score,
            phase: state.phase,
            score_visible: !game_over,
            game_over_text: game_over.then(|| format!("Game over! Score {}", state.score)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick;

    #[test]
    fn test_running_hud() {
        let mut state = GameState::new(4, 1.0);
        state.start();
        tick(&mut state);

        let hud = Hud::from_state(&state);
        assert_eq!(hud.phase, GamePhase::Running);
        assert!(hud.score_visible);
        assert_eq!(hud.game_over_text, None);
        assert_eq!(hud.wall_scale, state.wall.scale);
        assert_eq!(hud.door.size(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_game_over_hud() {
        let mut state = GameState::new(4, 1.0);
        state.start();
        state.score = 7;
        state.phase = GamePhase::GameOver;

        let hud = Hud::from_state(&state);
        assert!(!hud.score_visible);
        assert_eq!(hud.game_over_text.as_deref(), Some("Game over! Score 7"));
    }

    #[test]
    fn test_hud_json() {
        let state = GameState::new(4, 1.0);
        let json = serde_json::to_string(&Hud::from_state(&state)).unwrap();
        assert!(json.contains("\"phase\":\"Idle\""));
        assert!(json.contains("\"score\":0"));
    }
}
