//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Longest frame delta accepted per call (seconds)
const MAX_FRAME_TIME: f32 = 0.25;

/// Advance the game state by one fixed timestep.
///
/// Does nothing unless the game is running. Returns the pass/fail event if the
/// wall arrived during this tick.
pub fn tick(state: &mut GameState) -> Option<GameEvent> {
    if state.phase != GamePhase::Running {
        return None;
    }

    state.time_ticks += 1;

    let tuning = *state.tuning();
    state.wall.approach(&tuning);
    state.bird.apply_forces(&tuning);

    let mut event = None;
    if state.wall.arrived() {
        if state.door.rect().strictly_contains(&state.bird.stage_rect()) {
            state.score += 1;
            state.wall.reset();
            state.randomize_door();
            log::debug!("Door passed, score {}", state.score);
            event = Some(GameEvent::DoorPassed { score: state.score });
        } else {
            state.phase = GamePhase::GameOver;
            log::info!("Game over with score {}", state.score);
            // Position update is skipped for the final frame
            return Some(GameEvent::GameOver { score: state.score });
        }
    }

    state.bird.integrate();

    event
}

/// Host-driven fixed-rate scheduler.
///
/// Turns wall-clock frame deltas into whole simulation ticks. Stops ticking
/// as soon as a tick leaves the running phase.
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any partially accumulated time (call when a session starts)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// Run as many ticks as `elapsed` seconds allow, capped at `MAX_SUBSTEPS`.
    /// Events are appended to `events`. Returns the number of ticks run.
    pub fn advance(&mut self, state: &mut GameState, elapsed: f32, events: &mut Vec<GameEvent>) -> u32 {
        if !state.is_running() {
            self.accumulator = 0.0;
            return 0;
        }

        // NaN from a misbehaving host must not poison the accumulator
        let elapsed = if elapsed.is_finite() {
            elapsed.clamp(0.0, MAX_FRAME_TIME)
        } else {
            0.0
        };
        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;

            if let Some(event) = tick(state) {
                events.push(event);
            }
            if !state.is_running() {
                self.accumulator = 0.0;
                break;
            }
        }

        // Behind schedule: slow down instead of catching up later
        if substeps == MAX_SUBSTEPS {
            self.accumulator = 0.0;
        }

        substeps
    }

    /// Time carried over to the next call
    pub fn pending(&self) -> f32 {
        self.accumulator
    }
}
