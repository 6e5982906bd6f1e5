//! Idle/demo mode - AI plays the game
//!
//! Picks a flap (or none) for the coming tick. Hosts feed the result to
//! `GameState::apply_input`; the tick itself never consults it.

use super::state::{Direction, GameState};
use crate::center_to_stage;

/// How many ticks ahead horizontal drift is predicted
const LOOKAHEAD_TICKS: f32 = 20.0;

/// Choose a flap that steers the bird toward the current door's center
pub fn autopilot(state: &GameState) -> Option<Direction> {
    if !state.is_running() {
        return None;
    }

    let bird = center_to_stage(state.bird.pos);
    let target = state.door.center();

    // Only flap once the bird has sunk below the door center and is not already rising
    let below = bird.y > target.y;
    let rising = state.bird.vel.y < 0.0;
    if !below || rising {
        return None;
    }

    // Lead the target: where will drift carry us?
    let predicted_x = bird.x + state.bird.vel.x * LOOKAHEAD_TICKS;
    if predicted_x < target.x {
        Some(Direction::Right)
    } else {
        Some(Direction::Left)
    }
}
