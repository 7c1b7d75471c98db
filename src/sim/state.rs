//! Game state and mode transitions
//!
//! One owning [`GameState`] holds every mode's session state. The active
//! [`GameMode`] only changes through the transition methods here:
//! [`GameState::enter_mode`], [`GameState::start_dialog`] (directly or via
//! [`GameState::run_script`]) and [`GameState::restart`].

use super::basket::BasketGame;
use super::dialog::{DialogPage, DialogState, Script, Step};
use super::hearts::HeartsGame;
use super::input::HeldKeys;
use super::lock::LockGame;
use super::mode::{MiniGame, ModeContext, Outcome};
use super::question::QuestionGame;
use super::trivia::TriviaGame;
use crate::story::Story;

/// Top-level mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Title screen, waiting for confirm
    #[default]
    Title,
    /// Paginated dialog between mini-games
    Dialog,
    Hearts,
    Basket,
    Lock,
    Trivia,
    /// Finale YES/NO question
    Question,
    /// Terminal finale screen (only restart leaves it)
    End,
}

/// Things that happened during input handling or a tick
///
/// Drained by the platform each frame (audio, logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ModeChanged { from: GameMode, to: GameMode },
    HeartCollected { remaining: usize },
    ShotScored { made: u32 },
    BallBounced,
    /// Wrong lock code or trivia answer
    WrongAnswer,
    /// Index into the story's gift list
    GiftAwarded { gift: usize },
    Restarted,
}

/// Complete quest state
#[derive(Debug, Clone)]
pub struct GameState {
    mode: GameMode,
    pub story: Story,
    /// Held movement keys (tracked in every mode)
    pub held: HeldKeys,
    pub dialog: DialogState,
    pub hearts: HeartsGame,
    pub basket: BasketGame,
    pub lock: LockGame,
    pub trivia: TriviaGame,
    pub question: QuestionGame,
    /// Gifts awarded so far, in order (indices into `story.gifts`)
    pub gifts: Vec<usize>,
    /// Frames since the last restart
    pub time_ticks: u64,
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Story::default())
    }
}

impl GameState {
    pub fn new(story: Story) -> Self {
        Self {
            mode: GameMode::Title,
            story,
            held: HeldKeys::default(),
            dialog: DialogState::default(),
            hearts: HeartsGame::default(),
            basket: BasketGame::default(),
            lock: LockGame::default(),
            trivia: TriviaGame::default(),
            question: QuestionGame::default(),
            gifts: Vec::new(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn set_mode(&mut self, to: GameMode) {
        let from = self.mode;
        if from == to {
            return;
        }
        self.mode = to;
        log::info!("Mode {:?} -> {:?}", from, to);
        self.events.push(GameEvent::ModeChanged { from, to });
    }

    /// Switch to `mode`, starting a fresh session of it
    pub fn enter_mode(&mut self, mode: GameMode) {
        match mode {
            GameMode::Hearts => self.hearts.start(),
            GameMode::Basket => self.basket.start(),
            GameMode::Lock => self.lock.start(),
            GameMode::Trivia => self.trivia.start(),
            GameMode::Question => self.question.start(),
            GameMode::Title | GameMode::Dialog | GameMode::End => {}
        }
        self.set_mode(mode);
    }

    /// Show `pages`, then run `then` once the last page is confirmed
    ///
    /// An empty page list runs `then` immediately.
    pub fn start_dialog(&mut self, pages: Vec<DialogPage>, then: Script) {
        if pages.is_empty() {
            self.run_script(then);
            return;
        }
        self.dialog.start(pages, then);
        self.set_mode(GameMode::Dialog);
    }

    /// Confirm the current dialog page, running the continuation when done
    pub fn confirm_dialog(&mut self) {
        if let Some(script) = self.dialog.advance() {
            self.run_script(script);
        }
    }

    /// Run narrative steps until one needs player input
    pub fn run_script(&mut self, mut script: Script) {
        while let Some(step) = script.next_step() {
            match step {
                Step::Dialog(pages) => {
                    if !pages.is_empty() {
                        self.start_dialog(pages, script);
                        return;
                    }
                }
                Step::Gift(index) => {
                    if let Some(page) = self.award_gift(index) {
                        self.start_dialog(vec![page], script);
                        return;
                    }
                }
                Step::Enter(mode) => self.enter_mode(mode),
            }
        }
    }

    /// Record a gift and build the page that presents it
    fn award_gift(&mut self, index: usize) -> Option<DialogPage> {
        let Some(gift) = self.story.gifts.get(index) else {
            log::warn!("No gift at index {index}, skipping award");
            return None;
        };
        log::info!("Gift awarded: {}", gift.name);
        let page = DialogPage::new(
            "You received a gift!",
            &format!("{} - {}", gift.name, gift.blurb),
        )
        .with_image(&gift.image);
        self.gifts.push(index);
        self.events.push(GameEvent::GiftAwarded { gift: index });
        Some(page)
    }

    /// Narrative that follows a mini-game outcome, if any
    pub fn script_after(&self, mode: GameMode, outcome: Outcome) -> Option<Script> {
        let story = &self.story;
        let script = match (mode, outcome) {
            (_, Outcome::Continue) => return None,
            (GameMode::Hearts, Outcome::Cleared) => Script::new()
                .dialog(story.hearts_cleared.clone())
                .gift(0)
                .enter(GameMode::Basket),
            (GameMode::Basket, Outcome::Cleared) => Script::new()
                .dialog(story.basket_cleared.clone())
                .gift(1)
                .enter(GameMode::Lock),
            (GameMode::Lock, Outcome::Cleared) => Script::new()
                .dialog(story.lock_opened.clone())
                .enter(GameMode::Trivia),
            (GameMode::Trivia, Outcome::Cleared) => Script::new()
                .dialog(story.trivia_cleared.clone())
                .enter(GameMode::Question),
            (GameMode::Question, Outcome::Cleared) => Script::new().enter(GameMode::End),
            (GameMode::Question, Outcome::Declined) => Script::new()
                .dialog(story.declined.clone())
                .enter(GameMode::Question),
            _ => return None,
        };
        Some(script)
    }

    /// Script started from the title screen
    pub fn opening_script(&self) -> Script {
        Script::new()
            .dialog(self.story.intro.clone())
            .enter(GameMode::Hearts)
    }

    /// Apply a mini-game outcome reported while `mode` was active
    pub fn resolve(&mut self, mode: GameMode, outcome: Outcome) {
        if let Some(script) = self.script_after(mode, outcome) {
            log::debug!("{:?} finished with {:?}", mode, outcome);
            self.run_script(script);
        }
    }

    /// Run `f` against the active mini-game, if the mode has one
    pub fn with_active_game<R>(
        &mut self,
        f: impl FnOnce(&mut dyn MiniGame, &mut ModeContext<'_>) -> R,
    ) -> Option<R> {
        let game: &mut dyn MiniGame = match self.mode {
            GameMode::Hearts => &mut self.hearts,
            GameMode::Basket => &mut self.basket,
            GameMode::Lock => &mut self.lock,
            GameMode::Trivia => &mut self.trivia,
            GameMode::Question => &mut self.question,
            GameMode::Title | GameMode::Dialog | GameMode::End => return None,
        };
        let mut ctx = ModeContext {
            story: &self.story,
            held: &self.held,
            events: &mut self.events,
        };
        Some(f(game, &mut ctx))
    }

    /// Reset every mode's state, held keys and jump state; back to Title
    pub fn restart(&mut self) {
        let from = self.mode;
        let story = std::mem::take(&mut self.story);
        *self = Self::new(story);
        log::info!("Restarted from {:?}", from);
        self.events.push(GameEvent::Restarted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_is_title() {
        let state = GameState::default();
        assert_eq!(state.mode(), GameMode::Title);
        assert!(state.gifts.is_empty());
    }

    #[test]
    fn test_enter_mode_emits_change() {
        let mut state = GameState::default();
        state.enter_mode(GameMode::Lock);
        assert_eq!(state.mode(), GameMode::Lock);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::ModeChanged {
                from: GameMode::Title,
                to: GameMode::Lock
            }]
        );
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_gift_step_awards_and_shows_page() {
        let mut state = GameState::default();
        state.run_script(Script::new().gift(1).enter(GameMode::Lock));

        assert_eq!(state.mode(), GameMode::Dialog);
        assert_eq!(state.gifts, vec![1]);
        let page = state.dialog.current().cloned().expect("gift page");
        assert_eq!(page.image.as_deref(), Some("gift_chocolates"));
        assert!(state.events.contains(&GameEvent::GiftAwarded { gift: 1 }));

        state.confirm_dialog();
        assert_eq!(state.mode(), GameMode::Lock);
    }

    #[test]
    fn test_missing_gift_is_skipped() {
        let mut state = GameState::default();
        state.run_script(Script::new().gift(42).enter(GameMode::Trivia));
        assert_eq!(state.mode(), GameMode::Trivia);
        assert!(state.gifts.is_empty());
    }

    #[test]
    fn test_empty_dialog_runs_continuation() {
        let mut state = GameState::default();
        state.start_dialog(Vec::new(), Script::new().enter(GameMode::Basket));
        assert_eq!(state.mode(), GameMode::Basket);
    }

    #[test]
    fn test_continue_has_no_script() {
        let state = GameState::default();
        assert!(state.script_after(GameMode::Hearts, Outcome::Continue).is_none());
        assert!(state.script_after(GameMode::Lock, Outcome::Declined).is_none());
    }

    #[test]
    fn test_restart_keeps_story() {
        let story = Story {
            player_name: "Sam".to_string(),
            ..Default::default()
        };
        let mut state = GameState::new(story);
        state.enter_mode(GameMode::Trivia);
        state.trivia.index = 2;

        state.restart();
        assert_eq!(state.mode(), GameMode::Title);
        assert_eq!(state.story.player_name, "Sam");
        assert_eq!(state.trivia.index, 0);
        assert_eq!(state.events, vec![GameEvent::Restarted]);
    }
}
