//! Player-facing preferences
//!
//! Read from the page's config element alongside the story. Never written
//! back.

use serde::{Deserialize, Serialize};

/// Presentation and audio preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === HUD ===
    /// Per-mode counters and hints
    pub show_hud: bool,
    /// Show FPS counter
    pub show_fps: bool,

    // === Visual Effects ===
    /// Twinkling star backdrop
    pub starfield: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            show_hud: true,
            show_fps: false,

            starfield: true,
        }
    }
}

impl Settings {
    /// Volume actually applied to sound effects
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume.clamp(0.0, 1.0) * self.sfx_volume.clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mute_silences() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_volume_is_clamped() {
        let settings = Settings {
            master_volume: 3.0,
            sfx_volume: 0.5,
            ..Default::default()
        };
        assert_eq!(settings.effective_volume(), 0.5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "show_fps": true }"#).unwrap();
        assert!(settings.show_fps);
        assert!(settings.starfield);
        assert_eq!(settings.master_volume, 0.8);
    }
}
