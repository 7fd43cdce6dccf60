//! Game tuning knobs. Defaults reproduce the classic timings: hold the
//! expression for more than two seconds, celebrate for one.

use crate::emoji::{EMOJIS, EmojiCode};
use std::fmt;

pub const DEFAULT_HOLD_MS: f64 = 2000.0;
pub const DEFAULT_CELEBRATE_MS: f64 = 1000.0;
pub const DEFAULT_CELEBRATION_TEXT: &str = "Congratulations!";

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// A streak must last strictly longer than this to count as a match.
    pub hold_ms: f64,
    /// How long the celebration overlay stays up after a match.
    pub celebrate_ms: f64,
    pub celebration_text: String,
    /// Targets are drawn from this set.
    pub emojis: Vec<EmojiCode>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hold_ms: DEFAULT_HOLD_MS,
            celebrate_ms: DEFAULT_CELEBRATE_MS,
            celebration_text: DEFAULT_CELEBRATION_TEXT.to_string(),
            emojis: EMOJIS.to_vec(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyEmojiSet,
    InvalidWindow { name: &'static str, value: f64 },
    #[cfg(feature = "serde_json")]
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyEmojiSet => write!(f, "emoji set must not be empty"),
            ConfigError::InvalidWindow { name, value } => {
                write!(f, "{name} must be a finite, non-negative duration (got {value})")
            }
            #[cfg(feature = "serde_json")]
            ConfigError::Parse(e) => write!(f, "invalid config json: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for wasm_bindgen::JsValue {
    fn from(e: ConfigError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

impl GameConfig {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.emojis.is_empty() {
            return Err(ConfigError::EmptyEmojiSet);
        }
        for (name, value) in [("hold_ms", self.hold_ms), ("celebrate_ms", self.celebrate_ms)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWindow { name, value });
            }
        }
        Ok(self)
    }

    /// Parse a partial JSON override; missing fields keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<GameConfig>(json)
            .map_err(ConfigError::Parse)?
            .validate()
    }
}
