//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - One tick per rendered frame
//! - Input arrives as symbolic [`Key`]s
//! - Side effects leave as [`GameEvent`]s for the platform to drain

pub mod basket;
pub mod body;
pub mod collision;
pub mod dialog;
pub mod hearts;
pub mod input;
pub mod lock;
pub mod mode;
pub mod question;
pub mod state;
pub mod tick;
pub mod trivia;

pub use basket::BasketGame;
pub use body::{Actor, Bounds, Platform};
pub use collision::{Rect, circle_hits_rect, circles_overlap, heart_in_reach};
pub use dialog::{DialogPage, DialogState, Script, Step};
pub use hearts::{Heart, HeartsGame};
pub use input::{Direction, HeldKeys, Key};
pub use lock::LockGame;
pub use mode::{MiniGame, ModeContext, Outcome};
pub use question::{Answer, QuestionGame};
pub use state::{GameEvent, GameMode, GameState};
pub use tick::{handle_key_down, handle_key_up, tick};
pub use trivia::TriviaGame;
