//! Platformer physics body
//!
//! A rectangular actor integrated once per tick: explicit position update,
//! landing on platforms from above, floor snap, then gravity if airborne.

use glam::Vec2;

use super::collision::Rect;
use crate::consts::*;

/// Static platform the actor can land on from above
pub type Platform = Rect;

/// Play area the actor is confined to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    /// Floor line (canvas bottom)
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    /// Jumps used since last landing
    pub jump_count: u8,
    pub max_jumps: u8,
    pub grounded: bool,
}

impl Actor {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            jump_count: 0,
            max_jumps: MAX_JUMPS,
            grounded: false,
        }
    }

    /// Put the actor back at `pos` at rest with jumps cleared
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.jump_count = 0;
        self.grounded = false;
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.width / 2.0, self.pos.y + self.height / 2.0)
    }

    /// Start a jump if any are left. Returns whether the jump happened.
    pub fn jump(&mut self) -> bool {
        if self.jump_count >= self.max_jumps {
            return false;
        }
        self.vel.y = JUMP_VELOCITY;
        self.jump_count += 1;
        true
    }

    /// Slam downward, only while still ascending
    pub fn fast_fall(&mut self) -> bool {
        if self.vel.y >= 0.0 {
            return false;
        }
        self.vel.y = FAST_FALL_VELOCITY;
        true
    }

    fn land(&mut self, surface_y: f32) {
        self.pos.y = surface_y - self.height;
        self.vel.y = 0.0;
        self.grounded = true;
        self.jump_count = 0;
    }

    /// Advance one tick against `platforms` inside `bounds`
    ///
    /// Platforms only catch the actor when falling onto them; with several
    /// candidates the last one in list order wins. The floor check runs
    /// last and overrides.
    pub fn step(&mut self, platforms: &[Platform], bounds: Bounds) {
        let prev_bottom = self.bottom();

        self.pos += self.vel;
        let max_x = (bounds.width - self.width).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);

        self.grounded = false;
        let new_bottom = self.bottom();
        for platform in platforms {
            let falling_onto =
                self.vel.y >= 0.0 && prev_bottom <= platform.y && new_bottom >= platform.y;
            if falling_onto && platform.overlaps_x(self.pos.x, self.width) {
                self.land(platform.y);
            }
        }

        // Floor: look ahead by the current vertical velocity
        if self.bottom() + self.vel.y >= bounds.height {
            self.land(bounds.height);
        }

        if !self.grounded {
            self.vel.y += GRAVITY;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn on_floor() -> Actor {
        let mut actor = Actor::new(Vec2::new(100.0, CANVAS_HEIGHT - PLAYER_HEIGHT));
        actor.step(&[], Bounds::default());
        actor
    }

    #[test]
    fn test_resting_on_floor_stays_grounded() {
        let mut actor = on_floor();
        assert!(actor.grounded);
        for _ in 0..10 {
            actor.step(&[], Bounds::default());
        }
        assert!(actor.grounded);
        assert_eq!(actor.vel.y, 0.0);
        assert_eq!(actor.bottom(), CANVAS_HEIGHT);
    }

    #[test]
    fn test_double_jump_limit() {
        let mut actor = on_floor();
        assert!(actor.jump());
        assert_eq!(actor.jump_count, 1);
        assert_eq!(actor.vel.y, JUMP_VELOCITY);

        actor.step(&[], Bounds::default());
        assert!(actor.jump());
        assert_eq!(actor.jump_count, 2);

        actor.step(&[], Bounds::default());
        let vy = actor.vel.y;
        assert!(!actor.jump());
        assert_eq!(actor.jump_count, 2);
        assert_eq!(actor.vel.y, vy);
    }

    #[test]
    fn test_landing_resets_jump_count() {
        let mut actor = on_floor();
        actor.jump();
        for _ in 0..200 {
            actor.step(&[], Bounds::default());
            if actor.grounded {
                break;
            }
        }
        assert!(actor.grounded);
        assert_eq!(actor.jump_count, 0);
        assert_eq!(actor.bottom(), CANVAS_HEIGHT);
    }

    #[test]
    fn test_fast_fall_only_while_ascending() {
        let mut actor = on_floor();
        assert!(!actor.fast_fall());

        actor.jump();
        assert!(actor.fast_fall());
        assert_eq!(actor.vel.y, FAST_FALL_VELOCITY);
        // Already descending
        assert!(!actor.fast_fall());
    }

    #[test]
    fn test_lands_on_platform_from_above() {
        let platform = Rect::new(0.0, 300.0, 300.0, 20.0);
        let mut actor = Actor::new(Vec2::new(50.0, 300.0 - PLAYER_HEIGHT - 4.0));
        actor.vel.y = 6.0;
        actor.jump_count = 1;

        actor.step(&[platform], Bounds::default());
        assert!(actor.grounded);
        assert_eq!(actor.bottom(), 300.0);
        assert_eq!(actor.vel.y, 0.0);
        assert_eq!(actor.jump_count, 0);
    }

    #[test]
    fn test_passes_through_platform_from_below() {
        let platform = Rect::new(0.0, 300.0, 300.0, 20.0);
        // Bottom edge below the platform top, moving up
        let mut actor = Actor::new(Vec2::new(50.0, 200.0));
        actor.vel.y = -10.0;

        actor.step(&[platform], Bounds::default());
        assert!(!actor.grounded);
        assert_eq!(actor.pos.y, 190.0);
    }

    #[test]
    fn test_misses_platform_without_horizontal_overlap() {
        let platform = Rect::new(400.0, 300.0, 100.0, 20.0);
        let mut actor = Actor::new(Vec2::new(50.0, 300.0 - PLAYER_HEIGHT - 4.0));
        actor.vel.y = 6.0;

        actor.step(&[platform], Bounds::default());
        assert!(!actor.grounded);
    }

    #[test]
    fn test_last_platform_wins() {
        let upper = Rect::new(0.0, 300.0, 300.0, 10.0);
        let lower = Rect::new(0.0, 305.0, 300.0, 10.0);
        let mut actor = Actor::new(Vec2::new(50.0, 298.0 - PLAYER_HEIGHT));
        actor.vel.y = 10.0;

        actor.step(&[upper, lower], Bounds::default());
        assert!(actor.grounded);
        assert_eq!(actor.bottom(), 305.0);
    }

    #[test]
    fn test_floor_overrides_platform_below_it() {
        let sunken = Rect::new(0.0, CANVAS_HEIGHT + 10.0, 300.0, 10.0);
        let mut actor = Actor::new(Vec2::new(50.0, CANVAS_HEIGHT - PLAYER_HEIGHT - 6.0));
        actor.vel.y = 20.0;

        actor.step(&[sunken], Bounds::default());
        assert!(actor.grounded);
        assert_eq!(actor.bottom(), CANVAS_HEIGHT);
        assert_eq!(actor.vel.y, 0.0);
    }

    #[test]
    fn test_horizontal_clamp() {
        let mut actor = on_floor();
        actor.vel.x = -500.0;
        actor.step(&[], Bounds::default());
        assert_eq!(actor.pos.x, 0.0);

        actor.vel.x = 5000.0;
        actor.step(&[], Bounds::default());
        assert_eq!(actor.pos.x, CANVAS_WIDTH - PLAYER_WIDTH);
    }

    proptest! {
        #[test]
        fn prop_airborne_gravity(y in -300.0f32..200.0, vy in -20.0f32..10.0, x in 0.0f32..900.0) {
            let mut actor = Actor::new(Vec2::new(x, y));
            actor.vel.y = vy;
            actor.step(&[], Bounds::default());
            prop_assert!(!actor.grounded);
            prop_assert_eq!(actor.vel.y, vy + GRAVITY);
        }

        #[test]
        fn prop_jump_never_exceeds_max(presses in 0usize..10) {
            let mut actor = Actor::new(Vec2::new(100.0, 100.0));
            let mut accepted = 0;
            for _ in 0..presses {
                if actor.jump() {
                    accepted += 1;
                }
            }
            prop_assert_eq!(accepted, presses.min(MAX_JUMPS as usize));
            prop_assert!(actor.jump_count <= actor.max_jumps);
        }
    }
}
