//! Hearts platformer
//!
//! Run and double-jump across a fixed set of platforms collecting hearts.
//! Nine hearts spawn each session; the story's target (7 by default) wins.

use glam::Vec2;

use super::body::{Actor, Bounds, Platform};
use super::collision::{Rect, heart_in_reach};
use super::input::Key;
use super::mode::{MiniGame, ModeContext, Outcome};
use super::state::GameEvent;
use crate::consts::*;

/// Actor spawn point (top-left), standing on the floor at the left edge
pub const PLAYER_SPAWN: Vec2 = Vec2::new(40.0, CANVAS_HEIGHT - PLAYER_HEIGHT);

/// Fixed platform layout, in landing priority order
const PLATFORMS: [Platform; 6] = [
    Rect::new(120.0, 430.0, 180.0, 16.0),
    Rect::new(380.0, 360.0, 160.0, 16.0),
    Rect::new(620.0, 420.0, 160.0, 16.0),
    Rect::new(820.0, 330.0, 170.0, 16.0),
    Rect::new(540.0, 250.0, 140.0, 16.0),
    Rect::new(220.0, 230.0, 150.0, 16.0),
];

/// Heart centers: three on the floor, six floating above platforms
const HEART_SPOTS: [Vec2; HEART_COUNT] = [
    Vec2::new(80.0, 480.0),
    Vec2::new(300.0, 500.0),
    Vec2::new(210.0, 340.0),
    Vec2::new(460.0, 280.0),
    Vec2::new(700.0, 340.0),
    Vec2::new(900.0, 250.0),
    Vec2::new(610.0, 170.0),
    Vec2::new(295.0, 150.0),
    Vec2::new(960.0, 490.0),
];

/// A collectible heart
#[derive(Debug, Clone, PartialEq)]
pub struct Heart {
    /// Center
    pub pos: Vec2,
    collected: bool,
}

impl Heart {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            collected: false,
        }
    }

    pub fn collected(&self) -> bool {
        self.collected
    }

    /// One-way: a collected heart never comes back
    fn collect(&mut self) {
        self.collected = true;
    }
}

/// Hearts session state
#[derive(Debug, Clone)]
pub struct HeartsGame {
    pub player: Actor,
    pub platforms: Vec<Platform>,
    pub hearts: Vec<Heart>,
}

impl Default for HeartsGame {
    fn default() -> Self {
        let mut game = Self {
            player: Actor::new(PLAYER_SPAWN),
            platforms: Vec::new(),
            hearts: Vec::new(),
        };
        game.start();
        game
    }
}

impl HeartsGame {
    pub fn collected_count(&self) -> usize {
        self.hearts.iter().filter(|h| h.collected).count()
    }
}

impl MiniGame for HeartsGame {
    fn start(&mut self) {
        self.player.reset(PLAYER_SPAWN);
        self.platforms = PLATFORMS.to_vec();
        self.hearts = HEART_SPOTS.iter().copied().map(Heart::new).collect();
    }

    fn on_key_down(&mut self, key: Key, _ctx: &mut ModeContext<'_>) -> Outcome {
        if key.is_up() || key == Key::Space {
            if self.player.jump() {
                log::trace!("Jump {}/{}", self.player.jump_count, self.player.max_jumps);
            }
        } else if key.is_down() {
            self.player.fast_fall();
        }
        Outcome::Continue
    }

    fn tick(&mut self, ctx: &mut ModeContext<'_>) -> Outcome {
        // Horizontal velocity is rewritten from held keys every tick
        self.player.vel.x = ctx
            .held
            .horizontal()
            .map_or(0.0, |dir| dir.sign() * PLAYER_SPEED);

        self.player.step(&self.platforms, Bounds::default());

        let target = ctx.story.hearts_to_collect;
        let center = self.player.center();
        let mut picked = 0;
        for heart in self.hearts.iter_mut().filter(|h| !h.collected) {
            if heart_in_reach(center, heart.pos) {
                heart.collect();
                picked += 1;
            }
        }

        if picked > 0 {
            let count = self.collected_count();
            log::debug!("Hearts {count}/{target}");
            ctx.emit(GameEvent::HeartCollected {
                remaining: target.saturating_sub(count),
            });
        }

        if self.collected_count() >= target {
            Outcome::Cleared
        } else {
            Outcome::Continue
        }
    }
}
