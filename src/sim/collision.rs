//! Collision detection for circles and axis-aligned rectangles
//!
//! Hearts and the basketball are treated as circles; platforms and the
//! backboard are rectangles. All tests are closed (touching counts).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::HEART_PICKUP_RADIUS;

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Whether the horizontal extents of two rectangles overlap
    #[inline]
    pub fn overlaps_x(&self, left: f32, width: f32) -> bool {
        left < self.right() && left + width > self.x
    }
}

/// Circle vs rectangle overlap (closest-point test)
///
/// Clamps the circle center into the rectangle and compares the squared
/// distance against the squared radius.
pub fn circle_hits_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = Vec2::new(
        center.x.clamp(rect.x, rect.right()),
        center.y.clamp(rect.y, rect.bottom()),
    );
    center.distance_squared(closest) <= radius * radius
}

/// Circle vs circle overlap given the sum of both radii
#[inline]
pub fn circles_overlap(a: Vec2, b: Vec2, radius_sum: f32) -> bool {
    a.distance_squared(b) <= radius_sum * radius_sum
}

/// Heart pickup: actor center vs heart center with a fixed radius sum
#[inline]
pub fn heart_in_reach(actor_center: Vec2, heart_center: Vec2) -> bool {
    circles_overlap(actor_center, heart_center, HEART_PICKUP_RADIUS)
}
