//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod rect;
pub mod state;
pub mod tick;
pub mod tuning;

pub use autopilot::autopilot;
pub use rect::Rect;
pub use state::{Bird, Direction, Door, GameEvent, GamePhase, GameState};
pub use tick::{FixedStep, tick};
pub use tuning::{DEFAULT_SPEED_SCALE, Tuning, is_valid_speed_scale};
