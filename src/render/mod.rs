//! Presentation layer
//!
//! Everything is drawn through the [`Canvas`] trait so scenes stay free of
//! browser types. The web platform implements it over a 2D context; tests
//! use a recording fake.

pub mod backdrop;
pub mod scenes;

pub use backdrop::Backdrop;

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::collision::Rect;
use crate::sim::state::{GameMode, GameState};

/// RGBA color, alpha in 0.0 - 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba()` string for canvas fill styles
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
    }
}

/// Palette
pub mod palette {
    use super::Color;

    pub const NIGHT: Color = Color::rgb(26, 16, 40);
    pub const STAR: Color = Color::rgb(255, 240, 250);
    pub const PINK: Color = Color::rgb(255, 105, 180);
    pub const ROSE: Color = Color::rgb(220, 20, 60);
    pub const CREAM: Color = Color::rgb(255, 248, 240);
    pub const PANEL: Color = Color::rgb(48, 28, 64);
    pub const PLATFORM: Color = Color::rgb(140, 90, 160);
    pub const PLAYER: Color = Color::rgb(120, 200, 255);
    pub const BALL: Color = Color::rgb(240, 130, 40);
    pub const BOARD: Color = Color::rgb(235, 235, 235);
    pub const GOLD: Color = Color::rgb(255, 215, 0);
    pub const ERROR: Color = Color::rgb(255, 60, 60);
    pub const DIM: Color = Color::rgb(170, 150, 190);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Font and placement for a line of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Pixel size
    pub size: f32,
    pub color: Color,
    pub align: TextAlign,
    pub bold: bool,
}

impl TextStyle {
    pub fn new(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            align: TextAlign::Center,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// CSS font shorthand
    pub fn font(&self) -> String {
        let weight = if self.bold { "bold " } else { "" };
        format!("{weight}{}px sans-serif", self.size.round())
    }
}

/// 2D drawing surface
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// `pos` is the baseline anchor; horizontal anchoring follows `style.align`
    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);

    /// Draw a loaded image into `rect`. Returns false if the image is not
    /// available, in which case callers draw a shape instead.
    fn draw_image(&mut self, id: &str, rect: Rect) -> bool;
}

/// Draw one frame for the current state
pub fn draw(state: &GameState, backdrop: &Backdrop, settings: &Settings, canvas: &mut impl Canvas) {
    canvas.fill_rect(backdrop.bounds(), palette::NIGHT);
    if settings.starfield {
        backdrop.draw(state.time_ticks, canvas);
    }

    match state.mode() {
        GameMode::Title => scenes::title(state, canvas),
        GameMode::Dialog => scenes::dialog(state, canvas),
        GameMode::Hearts => scenes::hearts(state, settings, canvas),
        GameMode::Basket => scenes::basket(state, settings, canvas),
        GameMode::Lock => scenes::lock(state, canvas),
        GameMode::Trivia => scenes::trivia(state, canvas),
        GameMode::Question => scenes::question(state, canvas),
        GameMode::End => scenes::end(state, canvas),
    }

    scenes::footer(canvas);
}
