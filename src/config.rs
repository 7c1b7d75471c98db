//! Quest configuration
//!
//! The page may embed a JSON document with `settings` and `story` sections.
//! Every field is optional; missing ones take the built-in defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings::Settings;
use crate::story::{Story, StoryError};

/// Errors that can occur while loading a config document
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("story is invalid: {0}")]
    Story(#[from] StoryError),
}

/// Full configuration: preferences plus narrative content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestConfig {
    pub settings: Settings,
    pub story: Story,
}

impl QuestConfig {
    /// Parse and validate a config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: QuestConfig = serde_json::from_str(json)?;
        config.story.validate()?;
        Ok(config)
    }

    /// Parse `json` if present, falling back to defaults on any problem
    pub fn load_or_default(json: Option<&str>) -> Self {
        let Some(json) = json.map(str::trim).filter(|s| !s.is_empty()) else {
            log::info!("No quest config found, using defaults");
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(config) => {
                log::info!(
                    "Loaded quest config for {} and {}",
                    config.story.player_name,
                    config.story.partner_name
                );
                config
            }
            Err(e) => {
                log::warn!("Ignoring quest config: {e}");
                Self::default()
            }
        }
    }
}
