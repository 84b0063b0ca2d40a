//! Game settings
//!
//! Every tunable constant of the game lives here. On the web, settings are
//! read as JSON from LocalStorage; native builds always use the defaults.

use serde::{Deserialize, Serialize};

/// Tunable game constants (distance units are canvas pixels, time is ticks)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    /// Border/divider width, also the paddle thickness
    pub line_width: f32,

    // === Paddles ===
    /// Vertical paddle travel per tick while a key is held
    pub paddle_step: f32,

    // === Balls ===
    /// Number of balls in play
    pub ball_count: usize,
    /// Ball speed (units per tick)
    pub ball_speed: f32,
    /// Angle a freshly created ball starts with (degrees)
    pub ball_angle: f32,
    /// Ball width and height
    pub ball_size: f32,
    /// Angle change applied by a moving paddle on contact (degrees)
    pub angle_step: f32,
    /// Steepest allowed ball angle (degrees, symmetric)
    pub max_angle: f32,

    // === Score labels ===
    /// Vertical offset of the score labels
    pub score_y: f32,
    /// Side length of one glyph dot
    pub dot_size: f32,
    /// Gap between glyph dots
    pub dot_padding: f32,
    /// Horizontal cursor advance per character
    pub char_advance: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            line_width: 10.0,

            paddle_step: 5.0,

            ball_count: 1,
            ball_speed: 5.0,
            ball_angle: 10.0,
            ball_size: 20.0,
            angle_step: 10.0,
            max_angle: 45.0,

            score_y: 10.0,
            dot_size: 5.0,
            dot_padding: 1.0,
            char_advance: 20.0,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "canvas_pong_settings";

    /// Parse settings from JSON; missing fields take their default value
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize settings to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
