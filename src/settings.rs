//! Player preferences
//!
//! Persisted in LocalStorage as JSON.

use serde::{Deserialize, Serialize};

use crate::consts::PLAYER_DEFAULT_NAME;
use crate::sim::Color;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name drawn above the player
    pub player_name: String,
    /// Canvas fill drawn under every frame; transparent when unset
    pub background: Option<Color>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: PLAYER_DEFAULT_NAME.to_string(),
            background: None,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bit_eater_settings";

    /// Parse stored JSON, falling back to defaults on any error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(mut settings) => {
                if settings.player_name.trim().is_empty() {
                    settings.player_name = PLAYER_DEFAULT_NAME.to_string();
                }
                settings
            }
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let (Some(storage), Some(json)) = (storage, self.to_json()) {
            let _ = storage.set_item(Self::STORAGE_KEY, &json);
            log::info!("Settings saved");
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.player_name, "John Doe");
        assert_eq!(settings.background, None);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            player_name: "Blobby".into(),
            background: Some(Color::WHITE),
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json), settings);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"background":{"r":1,"g":2,"b":3}}"#);
        assert_eq!(settings.player_name, "John Doe");
        assert_eq!(settings.background, Some(Color::rgb(1, 2, 3)));
    }

    #[test]
    fn test_blank_name_and_garbage() {
        assert_eq!(Settings::from_json(r#"{"player_name":"  "}"#).player_name, "John Doe");
        assert_eq!(Settings::from_json("not json"), Settings::default());
    }
}
