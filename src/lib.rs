//! Heart Quest - a browser quest of chained mini-games
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (mode state machine, physics, mini-games, dialog)
//! - `story`: Narrative content and constants (names, lock code, trivia bank, gifts)
//! - `config`: JSON configuration (settings + story overrides)
//! - `render`: Presentation layer drawn through the `Canvas` trait
//! - `platform`: Browser adapters (canvas 2D context, images, config element)
//! - `audio`: Event-to-sound mapping and Web Audio playback

pub mod audio;
pub mod config;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod story;

pub use config::{ConfigError, QuestConfig};
pub use settings::Settings;
pub use story::{Story, StoryError};

use glam::Vec2;

/// Game configuration constants
///
/// All rates are per tick. A tick is one rendered frame.
pub mod consts {
    /// Play area dimensions
    pub const CANVAS_WIDTH: f32 = 1024.0;
    pub const CANVAS_HEIGHT: f32 = 576.0;

    /// Platformer gravity (added to vertical velocity each airborne tick)
    pub const GRAVITY: f32 = 0.5;

    /// Actor defaults
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 150.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Only double jump
    pub const MAX_JUMPS: u8 = 2;
    pub const JUMP_VELOCITY: f32 = -18.0;
    pub const FAST_FALL_VELOCITY: f32 = 22.0;

    /// Hearts spawned per session (more than needed to win)
    pub const HEART_COUNT: usize = 9;
    /// Radius sum used for actor/heart pickup overlap
    pub const HEART_PICKUP_RADIUS: f32 = 50.0;
    pub const HEART_SIZE: f32 = 30.0;

    /// Basketball projectile
    pub const BALL_RADIUS: f32 = 16.0;
    pub const BALL_GRAVITY: f32 = 0.55;
    pub const BALL_DRAG: f32 = 0.995;
    /// Vertical restitution on the bounce line
    pub const BOUNCE_RESTITUTION: f32 = 0.55;
    /// Horizontal friction on the bounce line
    pub const BOUNCE_FRICTION: f32 = 0.85;
    /// Below this vertical speed a bounce settles the ball
    pub const SETTLE_SPEED: f32 = 2.0;
    /// Bounce plane sits above the canvas floor
    pub const BOUNCE_LINE_Y: f32 = 520.0;
    pub const SHOTS_TO_WIN: u32 = 3;

    /// Lock code length (digits)
    pub const LOCK_CODE_LEN: usize = 4;

    /// Flash durations in ticks
    pub const ERROR_FLASH_TICKS: u32 = 45;
    pub const SCORE_FLASH_TICKS: u32 = 60;
}

/// Convert polar (r, theta) to cartesian (x, y)
///
/// Screen coordinates: negative theta points up.
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
