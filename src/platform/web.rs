//! Browser platform: canvas 2D drawing, image cache, config element

use std::collections::HashMap;
use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use super::{CANVAS_ELEMENT_ID, CONFIG_ELEMENT_ID, image_url};
use crate::render::{Canvas, Color, TextAlign, TextStyle};
use crate::sim::collision::Rect;

/// Images by id. Missing or broken images are simply not drawn.
#[derive(Default)]
pub struct ImageCache {
    images: HashMap<String, HtmlImageElement>,
}

impl ImageCache {
    /// Start loading every id; errors are logged and skipped
    pub fn preload(ids: &[String]) -> Self {
        let mut cache = Self::default();
        for id in ids {
            match HtmlImageElement::new() {
                Ok(img) => {
                    img.set_src(&image_url(id));
                    cache.images.insert(id.clone(), img);
                }
                Err(e) => log::warn!("Could not create image {id}: {e:?}"),
            }
        }
        log::info!("Loading {} images", cache.images.len());
        cache
    }

    /// Image ready to draw (loaded and decoded)
    pub fn ready(&self, id: &str) -> Option<&HtmlImageElement> {
        self.images
            .get(id)
            .filter(|img| img.complete() && img.natural_width() > 0)
    }
}

/// [`Canvas`] over a 2D rendering context
pub struct WebCanvas {
    ctx: CanvasRenderingContext2d,
    images: ImageCache,
}

impl WebCanvas {
    pub fn new(ctx: CanvasRenderingContext2d, images: ImageCache) -> Self {
        Self { ctx, images }
    }

    fn set_fill(&self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }
}

impl Canvas for WebCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.set_fill(color);
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.set_fill(color);
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.set_fill(style.color);
        self.ctx.set_font(&style.font());
        self.ctx.set_text_align(match style.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        });
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }

    fn draw_image(&mut self, id: &str, rect: Rect) -> bool {
        let Some(img) = self.images.ready(id) else {
            return false;
        };
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                img,
                rect.x as f64,
                rect.y as f64,
                rect.w as f64,
                rect.h as f64,
            )
            .is_ok()
    }
}

/// Find the quest canvas and its 2D context
pub fn canvas_context(
    document: &Document,
) -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ELEMENT_ID)?
        .dyn_into()
        .ok()?;
    let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
    Some((canvas, ctx))
}

/// Text of the config element, if the page has one
pub fn read_config(document: &Document) -> Option<String> {
    document
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}
