//! Basketball toss
//!
//! Two sub-states: aiming (ball at rest, adjust angle/power) and in flight
//! (projectile under gravity and drag). Hitting the backboard scores.

use glam::Vec2;

use super::collision::{Rect, circle_hits_rect};
use super::input::Key;
use super::mode::{MiniGame, ModeContext, Outcome};
use super::state::GameEvent;
use crate::consts::*;
use crate::polar_to_cartesian;

/// Where the ball rests while aiming
pub const LAUNCH_POINT: Vec2 = Vec2::new(140.0, 440.0);
pub const BACKBOARD: Rect = Rect::new(880.0, 150.0, 14.0, 130.0);

/// Aim angle range (radians, negative is up)
pub const ANGLE_MIN: f32 = -1.45;
pub const ANGLE_MAX: f32 = -0.2;
pub const ANGLE_STEP: f32 = 0.05;
const ANGLE_DEFAULT: f32 = -0.85;

pub const POWER_MIN: f32 = 8.0;
pub const POWER_MAX: f32 = 26.0;
pub const POWER_STEP: f32 = 0.5;
const POWER_DEFAULT: f32 = 17.0;

/// Basketball session state
#[derive(Debug, Clone, PartialEq)]
pub struct BasketGame {
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub in_flight: bool,
    pub angle: f32,
    pub power: f32,
    pub shots_made: u32,
    /// Ticks left on the "score!" flash
    pub score_flash: u32,
}

impl Default for BasketGame {
    fn default() -> Self {
        Self {
            ball_pos: LAUNCH_POINT,
            ball_vel: Vec2::ZERO,
            in_flight: false,
            angle: ANGLE_DEFAULT,
            power: POWER_DEFAULT,
            shots_made: 0,
            score_flash: 0,
        }
    }
}

impl BasketGame {
    /// Launch from wherever the ball rests. No-op while in flight.
    pub fn shoot(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.ball_vel = polar_to_cartesian(self.power, self.angle);
        self.in_flight = true;
        log::debug!("Shot: angle={:.2} power={:.1}", self.angle, self.power);
        true
    }

    fn reset_to_launch(&mut self) {
        self.ball_pos = LAUNCH_POINT;
        self.ball_vel = Vec2::ZERO;
        self.in_flight = false;
    }

    /// Adjust aim; only while the ball is at rest
    fn aim(&mut self, key: Key) {
        if key.is_up() {
            self.angle = (self.angle - ANGLE_STEP).clamp(ANGLE_MIN, ANGLE_MAX);
        } else if key.is_down() {
            self.angle = (self.angle + ANGLE_STEP).clamp(ANGLE_MIN, ANGLE_MAX);
        } else if key.is_left() {
            self.power = (self.power - POWER_STEP).clamp(POWER_MIN, POWER_MAX);
        } else if key.is_right() {
            self.power = (self.power + POWER_STEP).clamp(POWER_MIN, POWER_MAX);
        }
    }

    /// Normalized power for the HUD bar
    pub fn power_fraction(&self) -> f32 {
        (self.power - POWER_MIN) / (POWER_MAX - POWER_MIN)
    }
}

impl MiniGame for BasketGame {
    fn start(&mut self) {
        *self = Self::default();
    }

    fn on_key_down(&mut self, key: Key, _ctx: &mut ModeContext<'_>) -> Outcome {
        if self.in_flight {
            return Outcome::Continue;
        }
        if key.is_confirm() {
            self.shoot();
        } else {
            self.aim(key);
        }
        Outcome::Continue
    }

    fn tick(&mut self, ctx: &mut ModeContext<'_>) -> Outcome {
        self.score_flash = self.score_flash.saturating_sub(1);

        if !self.in_flight {
            return Outcome::Continue;
        }

        self.ball_vel.y += BALL_GRAVITY;
        self.ball_vel.x *= BALL_DRAG;
        self.ball_pos += self.ball_vel;

        if circle_hits_rect(self.ball_pos, BALL_RADIUS, &BACKBOARD) {
            self.shots_made += 1;
            self.score_flash = SCORE_FLASH_TICKS;
            self.reset_to_launch();
            log::info!("Basket! {}/{}", self.shots_made, SHOTS_TO_WIN);
            ctx.emit(GameEvent::ShotScored {
                made: self.shots_made,
            });
            if self.shots_made >= SHOTS_TO_WIN {
                return Outcome::Cleared;
            }
            return Outcome::Continue;
        }

        let out_left = self.ball_pos.x + BALL_RADIUS < 0.0;
        let out_right = self.ball_pos.x - BALL_RADIUS > CANVAS_WIDTH;
        let out_top = self.ball_pos.y + BALL_RADIUS < 0.0;
        if out_left || out_right || out_top {
            self.reset_to_launch();
            return Outcome::Continue;
        }

        // Bounce line: the ball settles in place once the bounce dies out
        if self.ball_pos.y + BALL_RADIUS >= BOUNCE_LINE_Y && self.ball_vel.y > 0.0 {
            self.ball_pos.y = BOUNCE_LINE_Y - BALL_RADIUS;
            self.ball_vel.y = -self.ball_vel.y * BOUNCE_RESTITUTION;
            self.ball_vel.x *= BOUNCE_FRICTION;
            ctx.emit(GameEvent::BallBounced);
            if self.ball_vel.y.abs() < SETTLE_SPEED {
                self.ball_vel = Vec2::ZERO;
                self.in_flight = false;
                log::debug!("Ball settled at x={:.0}", self.ball_pos.x);
            }
        }

        Outcome::Continue
    }
}
