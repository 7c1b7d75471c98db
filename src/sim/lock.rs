//! Combination lock
//!
//! Type the 4-digit code and confirm. The code is compared as a string so
//! leading zeros count.

use super::input::Key;
use super::mode::{MiniGame, ModeContext, Outcome};
use super::state::GameEvent;
use crate::consts::{ERROR_FLASH_TICKS, LOCK_CODE_LEN};

/// Lock session state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockGame {
    /// Digits entered so far (never longer than the code)
    buffer: String,
    pub error_flash: u32,
}

impl LockGame {
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    fn reject(&mut self, ctx: &mut ModeContext<'_>) {
        self.error_flash = ERROR_FLASH_TICKS;
        ctx.emit(GameEvent::WrongAnswer);
    }
}

impl MiniGame for LockGame {
    fn start(&mut self) {
        self.buffer.clear();
        self.error_flash = 0;
    }

    fn on_key_down(&mut self, key: Key, ctx: &mut ModeContext<'_>) -> Outcome {
        match key {
            Key::Digit(d) => match char::from_digit(d.into(), 10) {
                Some(c) if self.buffer.len() < LOCK_CODE_LEN => self.buffer.push(c),
                _ => {}
            },
            Key::Backspace => {
                self.buffer.pop();
            }
            k if k.is_confirm() => {
                if self.buffer.len() < LOCK_CODE_LEN {
                    // Incomplete entry: flash but keep what was typed
                    self.reject(ctx);
                } else if self.buffer == ctx.story.lock_code {
                    log::info!("Lock opened");
                    return Outcome::Cleared;
                } else {
                    log::debug!("Wrong code {}", self.buffer);
                    self.buffer.clear();
                    self.reject(ctx);
                }
            }
            _ => {}
        }
        Outcome::Continue
    }

    fn tick(&mut self, _ctx: &mut ModeContext<'_>) -> Outcome {
        self.error_flash = self.error_flash.saturating_sub(1);
        Outcome::Continue
    }
}
