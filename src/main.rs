//! Little Bird entry point
//!
//! The browser build is driven from JS through `little_bird::web`. Natively
//! this runs one headless session with the autopilot at the controls.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use little_bird::consts::SIM_DT;
    use little_bird::platform::{MemoryStorage, Storage};
    use little_bird::settings::Settings;
    use little_bird::sim::{FixedStep, GameEvent, GameState, autopilot};

    /// Give up after ten minutes of simulated play
    const MAX_TICKS: u64 = 60 * 60 * 10;

    env_logger::init();
    log::info!("Little Bird (native) starting...");

    // Env vars stand in for LocalStorage
    let mut storage = MemoryStorage::new();
    if let Ok(raw) = std::env::var("LITTLE_BIRD_SPEED_SCALE") {
        storage.set_item(Settings::STORAGE_KEY, &raw);
    }
    let settings = Settings::load(&storage);

    let seed = std::env::var("LITTLE_BIRD_SEED")
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let mut state = GameState::new(seed, settings.speed_scale);
    let mut clock = FixedStep::new();
    let mut events = Vec::new();
    state.start();

    while state.is_running() && state.time_ticks < MAX_TICKS {
        if let Some(direction) = autopilot(&state) {
            state.apply_input(direction);
        }
        clock.advance(&mut state, SIM_DT, &mut events);
        for event in events.drain(..) {
            if let GameEvent::DoorPassed { score } = event {
                log::info!("Door {} passed at tick {}", score, state.time_ticks);
            }
        }
    }

    if state.is_game_over() {
        println!("Game over! Score {} after {} ticks", state.score, state.time_ticks);
    } else {
        println!("Still flying after {} ticks, score {}", state.time_ticks, state.score);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is little_bird::web::wasm_start, this is just to satisfy the compiler
}
