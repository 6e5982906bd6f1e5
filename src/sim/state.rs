//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::tuning::Tuning;
use crate::consts::*;
use crate::{bird_limits, center_to_stage};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start command
    #[default]
    Idle,
    /// Active gameplay, ticks advance the world
    Running,
    /// A wall arrived without the bird inside its door
    GameOver,
}

/// Which way a flap pushes the bird
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Horizontal sign of the impulse
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Bird made it through; `score` is the new total
    DoorPassed { score: u32 },
    /// Bird hit the wall; `score` is final
    GameOver { score: u32 },
}

/// The player's bird. Position is relative to the stage center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: BIRD_SIZE,
        }
    }
}

impl Bird {
    /// Flap: vertical speed is replaced by the lift, horizontal speed gets a push
    pub fn flap(&mut self, direction: Direction, tuning: &Tuning) {
        self.vel.y = -tuning.lift;
        self.vel.x += direction.sign() * tuning.x_impulse;
    }

    /// Air resistance on x, gravity on y. No terminal velocity.
    pub fn apply_forces(&mut self, tuning: &Tuning) {
        self.vel.x *= BIRD_X_DAMPING;
        self.vel.y += tuning.gravity;
    }

    /// Move by one tick of velocity, then pin to the stage.
    /// Velocity is left untouched when pinned.
    pub fn integrate(&mut self) {
        let limits = bird_limits();
        self.pos = (self.pos + self.vel).clamp(-limits, limits);
    }

    /// Bounding box in stage coordinates
    pub fn stage_rect(&self) -> Rect {
        Rect::from_center_size(center_to_stage(self.pos), Vec2::splat(self.size))
    }
}

/// The gap in the current wall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Door {
    /// Top-left corner in stage coordinates
    pub origin: Vec2,
    pub size: Vec2,
}

impl Default for Door {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            size: Vec2::new(DOOR_WIDTH, DOOR_HEIGHT),
        }
    }
}

impl Door {
    /// Move the door to a uniformly random spot fully on stage
    pub fn randomize(&mut self, rng: &mut Pcg32) {
        let x = rng.random::<f32>() * (STAGE_WIDTH - self.size.x);
        let y = rng.random::<f32>() * (STAGE_HEIGHT - self.size.y);
        self.origin = Vec2::new(x, y);
    }

    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size / 2.0
    }
}

/// The approaching wall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub scale: f32,
}

impl Default for Wall {
    fn default() -> Self {
        Self {
            scale: WALL_START_SCALE,
        }
    }
}

impl Wall {
    pub fn approach(&mut self, tuning: &Tuning) {
        self.scale += tuning.wall_speed;
    }

    /// Wall has reached the bird's plane
    pub fn arrived(&self) -> bool {
        self.scale >= 1.0
    }

    pub fn reset(&mut self) {
        self.scale = WALL_START_SCALE;
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    pub bird: Bird,
    pub wall: Wall,
    pub door: Door,
    /// Simulation tick counter for the current session
    pub time_ticks: u64,
    tuning: Tuning,
    rng: Pcg32,
}

impl GameState {
    /// Create an idle game with the given seed and speed scale
    pub fn new(seed: u64, speed_scale: f32) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            score: 0,
            bird: Bird::default(),
            wall: Wall::default(),
            door: Door::default(),
            time_ticks: 0,
            tuning: Tuning::from_speed_scale(speed_scale),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Begin (or restart) a session. The bird keeps its position and velocity.
    pub fn start(&mut self) {
        self.score = 0;
        self.time_ticks = 0;
        self.wall.reset();
        self.randomize_door();
        self.phase = GamePhase::Running;
        log::info!("Game started (seed {}, speed x{})", self.seed, self.tuning.speed_scale);
    }

    /// Flap in `direction`. Ignored unless the game is running.
    pub fn apply_input(&mut self, direction: Direction) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.bird.flap(direction, &self.tuning);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Change the speed multiplier; per-tick deltas are recomputed immediately
    pub fn set_speed_scale(&mut self, speed_scale: f32) {
        self.tuning = Tuning::from_speed_scale(speed_scale);
    }

    pub fn speed_scale(&self) -> f32 {
        self.tuning.speed_scale
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub(crate) fn randomize_door(&mut self) {
        self.door.randomize(&mut self.rng);
    }
}
