//! Twinkling star backdrop
//!
//! Star positions come from a seeded PCG so the sky is stable across frames
//! and restarts. Brightness is a function of the tick counter only.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{Canvas, palette};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::sim::collision::Rect;

const STAR_COUNT: usize = 90;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    /// Twinkle phase offset (radians)
    pub phase: f32,
    /// Twinkle rate (radians per tick)
    pub rate: f32,
}

#[derive(Debug, Clone)]
pub struct Backdrop {
    width: f32,
    height: f32,
    stars: Vec<Star>,
}

impl Backdrop {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                pos: Vec2::new(
                    rng.random_range(0.0..CANVAS_WIDTH),
                    rng.random_range(0.0..CANVAS_HEIGHT),
                ),
                radius: rng.random_range(0.6..2.2),
                phase: rng.random_range(0.0..std::f32::consts::TAU),
                rate: rng.random_range(0.01..0.06),
            })
            .collect();
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            stars,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Full play area
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn draw(&self, time_ticks: u64, canvas: &mut impl Canvas) {
        let t = time_ticks as f32;
        for star in &self.stars {
            let twinkle = 0.55 + 0.45 * (star.phase + t * star.rate).sin();
            canvas.fill_circle(star.pos, star.radius, palette::STAR.with_alpha(twinkle));
        }
    }
}
