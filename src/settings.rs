//! Game settings and preferences
//!
//! Only the speed scale is persisted, under its own storage key.

use serde::{Deserialize, Serialize};

use crate::platform::Storage;
pub use crate::sim::tuning::DEFAULT_SPEED_SCALE;
use crate::sim::tuning::is_valid_speed_scale;

/// Parse a stored speed scale. Rejects non-numbers, NaN/infinity and negatives.
pub fn parse_speed_scale(raw: &str) -> Option<f32> {
    serde_json::from_str::<f32>(raw.trim())
        .ok()
        .filter(|v| is_valid_speed_scale(*v))
}

/// Game settings/preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Multiplier for gravity, flap impulses and wall speed
    pub speed_scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed_scale: DEFAULT_SPEED_SCALE,
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "little-bird-demo:SPEED_SCALE";

    /// Update the speed scale, falling back to the default for invalid values.
    /// Returns the value actually applied.
    pub fn set_speed_scale(&mut self, speed_scale: f32) -> f32 {
        self.speed_scale = if is_valid_speed_scale(speed_scale) {
            speed_scale
        } else {
            log::warn!("Ignoring invalid speed scale {}", speed_scale);
            DEFAULT_SPEED_SCALE
        };
        self.speed_scale
    }

    /// Load settings from storage
    pub fn load(storage: &impl Storage) -> Self {
        match storage.get_item(Self::STORAGE_KEY) {
            Some(raw) => match parse_speed_scale(&raw) {
                Some(speed_scale) => {
                    log::info!("Loaded speed scale {}", speed_scale);
                    Self { speed_scale }
                }
                None => {
                    log::warn!("Stored speed scale {:?} is invalid, using default", raw);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to storage
    pub fn save(&self, storage: &mut impl Storage) {
        match serde_json::to_string(&self.speed_scale) {
            Ok(json) => {
                if storage.set_item(Self::STORAGE_KEY, &json) {
                    log::info!("Settings saved");
                } else {
                    log::warn!("Settings could not be saved");
                }
            }
            Err(e) => log::warn!("Settings not serializable: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStorage;

    #[test]
    fn test_parse_speed_scale() {
        assert_eq!(parse_speed_scale("1.5"), Some(1.5));
        assert_eq!(parse_speed_scale(" 2 "), Some(2.0));
        assert_eq!(parse_speed_scale("0"), Some(0.0));
        assert_eq!(parse_speed_scale("abc"), None);
        assert_eq!(parse_speed_scale(""), None);
        assert_eq!(parse_speed_scale("NaN"), None);
        assert_eq!(parse_speed_scale("-1"), None);
    }

    #[test]
    fn test_load_missing_uses_default() {
        let store = MemoryStorage::new();
        assert_eq!(Settings::load(&store).speed_scale, 1.0);
    }

    #[test]
    fn test_load_invalid_uses_default() {
        let mut store = MemoryStorage::new();
        store.set_item(Settings::STORAGE_KEY, "fast please");
        assert_eq!(Settings::load(&store).speed_scale, 1.0);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStorage::new();
        let mut settings = Settings::default();
        settings.set_speed_scale(2.5);
        settings.save(&mut store);

        assert_eq!(store.get_item(Settings::STORAGE_KEY).as_deref(), Some("2.5"));
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_set_invalid_speed_scale() {
        let mut settings = Settings::default();
        assert_eq!(settings.set_speed_scale(f32::NAN), 1.0);
        assert_eq!(settings.set_speed_scale(-3.0), 1.0);
        assert_eq!(settings.set_speed_scale(0.0), 0.0);
    }
}
