//! Data-driven game balance
//!
//! Every per-tick delta scales linearly with the player's speed setting.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Per-tick physics deltas derived from a speed scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Multiplier the deltas below were computed from
    pub speed_scale: f32,
    /// Added to vertical velocity each tick
    pub gravity: f32,
    /// Added to horizontal velocity per flap
    pub x_impulse: f32,
    /// Upward speed a flap sets (applied as `-lift`)
    pub lift: f32,
    /// Added to the wall scale each tick
    pub wall_speed: f32,
}

/// Speed scale used in place of a missing or invalid one
pub const DEFAULT_SPEED_SCALE: f32 = 1.0;

/// Finite and non-negative. Zero is allowed and freezes play.
pub fn is_valid_speed_scale(speed_scale: f32) -> bool {
    speed_scale.is_finite() && speed_scale >= 0.0
}

impl Default for Tuning {
    fn default() -> Self {
        Self::from_speed_scale(DEFAULT_SPEED_SCALE)
    }
}

impl Tuning {
    /// Invalid scales (NaN, infinite, negative) fall back to `DEFAULT_SPEED_SCALE`
    pub fn from_speed_scale(speed_scale: f32) -> Self {
        let speed_scale = if is_valid_speed_scale(speed_scale) {
            speed_scale
        } else {
            log::warn!("Invalid speed scale {}, using {}", speed_scale, DEFAULT_SPEED_SCALE);
            DEFAULT_SPEED_SCALE
        };
        Self {
            speed_scale,
            gravity: BASE_GRAVITY * speed_scale,
            x_impulse: BASE_X_IMPULSE * speed_scale,
            lift: BASE_LIFT * speed_scale,
            wall_speed: BASE_WALL_SPEED * speed_scale,
        }
    }
}
