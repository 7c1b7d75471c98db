//! Dialog pages and narrative scripts
//!
//! A [`Script`] is a queue of narrative steps (show dialog, award a gift,
//! enter a mode). When a dialog step runs, the rest of the script becomes
//! the dialog's continuation and is handed back exactly once, after the
//! last page is confirmed.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::state::GameMode;

/// One page of a dialog sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogPage {
    pub title: String,
    pub body: String,
    /// Optional image id drawn beside the text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl DialogPage {
    pub fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }
}

/// A single narrative step
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Show pages; the remaining steps run after the last confirm
    Dialog(Vec<DialogPage>),
    /// Award the gift at this index of the story's gift list
    Gift(usize),
    /// Switch to a mode, starting a fresh session of it
    Enter(GameMode),
}

/// Ordered queue of narrative steps
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    steps: VecDeque<Step>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dialog(mut self, pages: Vec<DialogPage>) -> Self {
        self.steps.push_back(Step::Dialog(pages));
        self
    }

    pub fn gift(mut self, index: usize) -> Self {
        self.steps.push_back(Step::Gift(index));
        self
    }

    pub fn enter(mut self, mode: GameMode) -> Self {
        self.steps.push_back(Step::Enter(mode));
        self
    }

    /// Pop the next step to run
    pub fn next_step(&mut self) -> Option<Step> {
        self.steps.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }
}

/// Active dialog sequence
#[derive(Debug, Clone, Default)]
pub struct DialogState {
    pages: Vec<DialogPage>,
    index: usize,
    continuation: Option<Script>,
}

impl DialogState {
    /// Replace the current sequence and store its continuation
    pub fn start(&mut self, pages: Vec<DialogPage>, on_complete: Script) {
        self.pages = pages;
        self.index = 0;
        self.continuation = Some(on_complete);
    }

    /// Page currently on screen
    pub fn current(&self) -> Option<&DialogPage> {
        self.pages.get(self.index)
    }

    pub fn page_index(&self) -> usize {
        self.index
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether a continuation is still waiting to fire
    pub fn is_pending(&self) -> bool {
        self.continuation.is_some()
    }

    /// Confirm the current page
    ///
    /// Returns the continuation once the last page has been confirmed. The
    /// continuation is cleared before it is returned, so it can only ever be
    /// handed out once per sequence.
    pub fn advance(&mut self) -> Option<Script> {
        if self.index < self.pages.len() {
            self.index += 1;
        }
        if self.index >= self.pages.len() {
            self.continuation.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pages(n: usize) -> Vec<DialogPage> {
        (0..n)
            .map(|i| DialogPage::new(&format!("Page {i}"), "body"))
            .collect()
    }

    #[test]
    fn test_pages_in_order() {
        let mut dialog = DialogState::default();
        dialog.start(pages(3), Script::new().enter(GameMode::Hearts));

        assert_eq!(dialog.current().map(|p| p.title.as_str()), Some("Page 0"));
        assert!(dialog.advance().is_none());
        assert_eq!(dialog.current().map(|p| p.title.as_str()), Some("Page 1"));
        assert!(dialog.advance().is_none());
        assert_eq!(dialog.current().map(|p| p.title.as_str()), Some("Page 2"));

        let script = dialog.advance();
        assert_eq!(script, Some(Script::new().enter(GameMode::Hearts)));
        assert!(dialog.current().is_none());
    }

    #[test]
    fn test_continuation_fires_once() {
        let mut dialog = DialogState::default();
        dialog.start(pages(1), Script::new().enter(GameMode::Lock));

        assert!(dialog.advance().is_some());
        assert!(!dialog.is_pending());
        assert!(dialog.advance().is_none());
        assert!(dialog.advance().is_none());
    }

    #[test]
    fn test_restart_replaces_sequence() {
        let mut dialog = DialogState::default();
        dialog.start(pages(2), Script::new().enter(GameMode::Lock));
        dialog.advance();

        dialog.start(pages(1), Script::new().enter(GameMode::Trivia));
        assert_eq!(dialog.page_index(), 0);
        assert_eq!(dialog.advance(), Some(Script::new().enter(GameMode::Trivia)));
    }

    #[test]
    fn test_script_order() {
        let mut script = Script::new()
            .dialog(pages(1))
            .gift(0)
            .enter(GameMode::Basket);
        assert_eq!(script.len(), 3);
        assert!(matches!(script.next_step(), Some(Step::Dialog(_))));
        assert_eq!(script.next_step(), Some(Step::Gift(0)));
        assert_eq!(script.next_step(), Some(Step::Enter(GameMode::Basket)));
        assert!(script.next_step().is_none());
        assert!(script.is_empty());
    }

    proptest! {
        #[test]
        fn prop_n_pages_need_n_confirms(n in 1usize..12, extra in 0usize..5) {
            let mut dialog = DialogState::default();
            dialog.start(pages(n), Script::new().enter(GameMode::End));

            let mut fired = 0;
            let mut fired_at = None;
            for i in 1..=(n + extra) {
                if dialog.advance().is_some() {
                    fired += 1;
                    fired_at = Some(i);
                }
            }
            prop_assert_eq!(fired, 1);
            prop_assert_eq!(fired_at, Some(n));
        }
    }
}
