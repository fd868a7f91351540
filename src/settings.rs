//! User preferences
//!
//! Persisted in LocalStorage as JSON. Missing or corrupt data falls back to
//! defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{BALL_COUNT, MAX_BALL_COUNT};

/// Preferences that survive a page reload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Balls created on startup and restart
    pub ball_count: usize,
    /// Show frames-per-second next to the ball count
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_count: BALL_COUNT,
            show_fps: true,
        }
    }
}

impl Settings {
    /// Ball count clamped to `1..=MAX_BALL_COUNT`
    pub fn effective_ball_count(&self) -> usize {
        self.ball_count.clamp(1, MAX_BALL_COUNT)
    }

    /// Parse the restart field; `None` for anything that is not a count
    pub fn parse_ball_count(text: &str) -> Option<usize> {
        text.trim()
            .parse::<usize>()
            .ok()
            .map(|n| n.clamp(1, MAX_BALL_COUNT))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decode stored JSON; `None` if it is corrupt
    pub fn try_from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    /// Decode stored JSON, falling back to defaults
    pub fn from_json(json: &str) -> Self {
        Self::try_from_json(json).unwrap_or_default()
    }

    /// Flip the FPS read-out; returns the new state
    pub fn toggle_fps(&mut self) -> bool {
        self.show_fps = !self.show_fps;
        self.show_fps
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "ball_hunt_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::try_from_json(&json) {
                    Some(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    None => log::info!("Stored settings are corrupt, falling back to defaults"),
                }
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

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.to_json());
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
