//! Trivia quiz
//!
//! Questions are asked in order. The selection cycles through the options
//! with wrap-around; a wrong answer flashes and the same question repeats.

use super::input::Key;
use super::mode::{MiniGame, ModeContext, Outcome};
use super::state::GameEvent;
use crate::consts::ERROR_FLASH_TICKS;

/// Trivia session state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriviaGame {
    /// Current question (only ever moves forward)
    pub index: usize,
    /// Highlighted option
    pub selection: usize,
    pub error_flash: u32,
}

impl MiniGame for TriviaGame {
    fn start(&mut self) {
        *self = Self::default();
    }

    fn on_key_down(&mut self, key: Key, ctx: &mut ModeContext<'_>) -> Outcome {
        let Some(question) = ctx.story.trivia.get(self.index) else {
            return Outcome::Continue;
        };
        let count = question.options.len().max(1);

        if key.is_up() || key.is_left() {
            self.selection = (self.selection + count - 1) % count;
        } else if key.is_down() || key.is_right() {
            self.selection = (self.selection + 1) % count;
        } else if key.is_confirm() {
            if self.selection == question.correct {
                self.index += 1;
                self.selection = 0;
                self.error_flash = 0;
                log::debug!("Trivia {}/{} correct", self.index, ctx.story.trivia.len());
                if self.index >= ctx.story.trivia.len() {
                    return Outcome::Cleared;
                }
            } else {
                self.error_flash = ERROR_FLASH_TICKS;
                ctx.emit(GameEvent::WrongAnswer);
            }
        }
        Outcome::Continue
    }

    fn tick(&mut self, _ctx: &mut ModeContext<'_>) -> Outcome {
        self.error_flash = self.error_flash.saturating_sub(1);
        Outcome::Continue
    }
}
