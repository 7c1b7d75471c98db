//! Finale question: a YES/NO choice

use super::input::Key;
use super::mode::{MiniGame, ModeContext, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Answer {
    #[default]
    Yes,
    No,
}

impl Answer {
    pub fn label(self) -> &'static str {
        match self {
            Answer::Yes => "YES",
            Answer::No => "NO",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionGame {
    pub selected: Answer,
}

impl MiniGame for QuestionGame {
    fn start(&mut self) {
        self.selected = Answer::Yes;
    }

    fn on_key_down(&mut self, key: Key, _ctx: &mut ModeContext<'_>) -> Outcome {
        // YES sits on the left, NO on the right
        if key.is_left() {
            self.selected = Answer::Yes;
        } else if key.is_right() {
            self.selected = Answer::No;
        } else if key.is_confirm() {
            return match self.selected {
                Answer::Yes => Outcome::Cleared,
                Answer::No => Outcome::Declined,
            };
        }
        Outcome::Continue
    }

    fn tick(&mut self, _ctx: &mut ModeContext<'_>) -> Outcome {
        Outcome::Continue
    }
}
