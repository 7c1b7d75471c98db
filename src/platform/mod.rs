//! Platform abstraction layer
//!
//! Browser adapters for:
//! - Canvas 2D drawing (implements [`crate::render::Canvas`])
//! - Gift and dialog images
//! - The embedded config element

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::story::Story;

/// Page element holding the optional JSON config
pub const CONFIG_ELEMENT_ID: &str = "quest-config";
/// Canvas element the quest draws into
pub const CANVAS_ELEMENT_ID: &str = "canvas";

/// URL an image id is loaded from
pub fn image_url(id: &str) -> String {
    format!("assets/{id}.png")
}

/// Every image id the story can show, in first-use order without repeats
pub fn story_images(story: &Story) -> Vec<String> {
    let pages = story
        .intro
        .iter()
        .chain(&story.hearts_cleared)
        .chain(&story.basket_cleared)
        .chain(&story.lock_opened)
        .chain(&story.trivia_cleared)
        .chain(&story.declined);
    let ids = story
        .gifts
        .iter()
        .map(|g| g.image.as_str())
        .chain(pages.filter_map(|p| p.image.as_deref()));

    let mut out: Vec<String> = Vec::new();
    for id in ids {
        if !id.is_empty() && !out.iter().any(|seen| seen == id) {
            out.push(id.to_string());
        }
    }
    out
}
