//! Board settings, read once at startup.
//!
//! The page may embed overrides as JSON:
//! `<script id="board-config" type="application/json">{"activation_distance": 6}</script>`.
//! Missing fields fall back to their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::Level;
use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "board-config";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    /// Pointer travel in CSS pixels before a press turns into a drag.
    pub activation_distance: f64,
    pub log_level: Level,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            activation_distance: 3.0,
            log_level: Level::Info,
        }
    }
}

impl BoardConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads overrides from the page, falling back to defaults when the
    /// element is absent or does not parse.
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|err| {
                web_sys::console::warn_1(&format!("Invalid board config, using defaults: {}", err).into());
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}
