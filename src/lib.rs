//! Little Bird - fly through the door before the wall reaches you
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, door test, game state)
//! - `settings`: The persisted speed scale
//! - `platform`: Key/value storage (LocalStorage on web, in-memory elsewhere)
//! - `hud`: Per-tick snapshot for the renderer

pub mod hud;
pub mod platform;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use hud::Hud;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Stage dimensions
    pub const STAGE_WIDTH: f32 = 600.0;
    pub const STAGE_HEIGHT: f32 = 600.0;

    /// Bird is a square sprite centered on its position
    pub const BIRD_SIZE: f32 = 20.0;

    /// Door (the gap in each wall)
    pub const DOOR_WIDTH: f32 = 100.0;
    pub const DOOR_HEIGHT: f32 = 100.0;

    /// Wall scale a fresh wall starts at; 1.0 means it reached the bird
    pub const WALL_START_SCALE: f32 = 0.3;

    /// Horizontal velocity kept per tick (air resistance)
    pub const BIRD_X_DAMPING: f32 = 0.99;

    // Base per-tick values, multiplied by the speed scale
    pub const BASE_GRAVITY: f32 = 0.1;
    pub const BASE_X_IMPULSE: f32 = 1.0;
    pub const BASE_LIFT: f32 = 2.0;
    pub const BASE_WALL_SPEED: f32 = 0.002;
}

/// Largest distance the bird center may sit from the stage center, per axis
#[inline]
pub fn bird_limits() -> Vec2 {
    use consts::*;
    Vec2::new(
        STAGE_WIDTH / 2.0 - BIRD_SIZE / 2.0,
        STAGE_HEIGHT / 2.0 - BIRD_SIZE / 2.0,
    )
}

/// Convert a bird-relative (stage center origin) point to stage coordinates
#[inline]
pub fn center_to_stage(pos: Vec2) -> Vec2 {
    use consts::*;
    pos + Vec2::new(STAGE_WIDTH / 2.0, STAGE_HEIGHT / 2.0)
}
