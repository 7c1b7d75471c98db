//! Uniform interface implemented by every playable mode
//!
//! The dispatcher in [`super::tick`] hands key events and ticks to whichever
//! mini-game is active and turns the returned [`Outcome`] into a narrative
//! transition.

use super::input::{HeldKeys, Key};
use super::state::GameEvent;
use crate::story::Story;

/// Shared resources a mini-game may read or emit into
pub struct ModeContext<'a> {
    pub story: &'a Story,
    pub held: &'a HeldKeys,
    pub events: &'a mut Vec<GameEvent>,
}

impl ModeContext<'_> {
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// Result of handling an input or a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Stay in the current mode
    Continue,
    /// Win condition met
    Cleared,
    /// Negative answer to the finale question
    Declined,
}

/// Per-mode handler: input, simulation step, session reset
pub trait MiniGame {
    /// Reset to a fresh session (called whenever the mode is entered)
    fn start(&mut self);

    /// Edge-triggered key press
    fn on_key_down(&mut self, key: Key, ctx: &mut ModeContext<'_>) -> Outcome;

    /// Key release. Held-key bookkeeping happens before this, in every mode.
    fn on_key_up(&mut self, _key: Key, _ctx: &mut ModeContext<'_>) -> Outcome {
        Outcome::Continue
    }

    /// One simulation step
    fn tick(&mut self, ctx: &mut ModeContext<'_>) -> Outcome;
}
