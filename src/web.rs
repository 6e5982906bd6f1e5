//! Browser bindings
//!
//! The page script owns the DOM and keyboard; it calls into `WebGame` on key
//! presses and every animation frame, then paints from `hud_json()`.

use wasm_bindgen::prelude::*;

use crate::consts::*;
use crate::hud::Hud;
use crate::platform::LocalStorage;
use crate::settings::Settings;
use crate::sim::{Direction, FixedStep, GameEvent, GameState};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Little Bird starting...");
}

/// Game instance holding all state
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    clock: FixedStep,
    settings: Settings,
    storage: LocalStorage,
    events: Vec<GameEvent>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let storage = LocalStorage;
        let settings = Settings::load(&storage);
        let seed = js_sys::Date::now() as u64;
        WebGame {
            state: GameState::new(seed, settings.speed_scale),
            clock: FixedStep::new(),
            settings,
            storage,
            events: Vec::new(),
        }
    }

    /// Enter pressed: start or restart the session
    pub fn start(&mut self) {
        self.clock.reset();
        self.state.start();
    }

    /// Arrow key pressed
    pub fn flap(&mut self, left: bool) {
        let direction = if left { Direction::Left } else { Direction::Right };
        self.state.apply_input(direction);
    }

    /// Run the ticks owed for `elapsed_ms` of wall-clock time
    pub fn frame(&mut self, elapsed_ms: f64) -> u32 {
        self.events.clear();
        let ran = self
            .clock
            .advance(&mut self.state, (elapsed_ms / 1000.0) as f32, &mut self.events);
        for event in &self.events {
            log::debug!("{:?}", event);
        }
        ran
    }

    /// Snapshot for the renderer
    pub fn hud_json(&self) -> String {
        serde_json::to_string(&Hud::from_state(&self.state)).unwrap_or_default()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn speed_scale(&self) -> f32 {
        self.settings.speed_scale
    }

    /// Speed slider changed: apply immediately and persist
    pub fn set_speed_scale(&mut self, speed_scale: f32) {
        let applied = self.settings.set_speed_scale(speed_scale);
        self.state.set_speed_scale(applied);
        self.settings.save(&mut self.storage);
    }

    /// Nominal tick period in milliseconds
    pub fn frame_time_ms() -> f64 {
        (SIM_DT as f64) * 1000.0
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
