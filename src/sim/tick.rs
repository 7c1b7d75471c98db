//! Input dispatch and the per-frame tick
//!
//! Held movement keys are tracked in every mode. Restart is handled before
//! any per-mode logic. Everything else goes to the active mode: Title and
//! Dialog wait for confirm, End ignores input, and the mini-games get the
//! key or tick through [`MiniGame`](super::mode::MiniGame).

use super::input::Key;
use super::state::{GameMode, GameState};

/// Key pressed
pub fn handle_key_down(state: &mut GameState, key: Key) {
    state.held.press(key);

    if key.is_restart() {
        state.restart();
        return;
    }

    match state.mode() {
        GameMode::Title => {
            if key.is_confirm() {
                let script = state.opening_script();
                state.run_script(script);
            }
        }
        GameMode::Dialog => {
            if key.is_confirm() {
                state.confirm_dialog();
            }
        }
        GameMode::End => {}
        mode => {
            if let Some(outcome) = state.with_active_game(|game, ctx| game.on_key_down(key, ctx)) {
                state.resolve(mode, outcome);
            }
        }
    }
}

/// Key released
pub fn handle_key_up(state: &mut GameState, key: Key) {
    state.held.release(key);

    let mode = state.mode();
    if let Some(outcome) = state.with_active_game(|game, ctx| game.on_key_up(key, ctx)) {
        state.resolve(mode, outcome);
    }
}

/// Advance the active mode by one frame
pub fn tick(state: &mut GameState) {
    state.time_ticks += 1;

    let mode = state.mode();
    if let Some(outcome) = state.with_active_game(|game, ctx| game.tick(ctx)) {
        state.resolve(mode, outcome);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::consts::*;
    use crate::sim::basket::BACKBOARD;
    use crate::sim::hearts::PLAYER_SPAWN;
    use crate::sim::question::Answer;
    use crate::sim::state::GameEvent;

    fn press(state: &mut GameState, key: Key) {
        handle_key_down(state, key);
        handle_key_up(state, key);
    }

    /// Confirm until the dialog hands control back
    fn finish_dialog(state: &mut GameState) -> usize {
        let mut confirms = 0;
        while state.mode() == GameMode::Dialog {
            press(state, Key::Enter);
            confirms += 1;
            assert!(confirms < 20, "dialog never finished");
        }
        confirms
    }

    fn type_code(state: &mut GameState, code: &str) {
        for b in code.bytes() {
            press(state, Key::Digit(b - b'0'));
        }
        press(state, Key::Enter);
    }

    fn win_hearts(state: &mut GameState) {
        let target = state.story.hearts_to_collect;
        for i in 0..target {
            let spot = state.hearts.hearts[i].pos;
            state.hearts.player.pos = spot - Vec2::new(PLAYER_WIDTH / 2.0, PLAYER_HEIGHT / 2.0);
            state.hearts.player.vel = Vec2::ZERO;
            tick(state);
        }
    }

    fn sink_basket(state: &mut GameState) {
        state.basket.in_flight = true;
        state.basket.ball_pos = Vec2::new(BACKBOARD.x - BALL_RADIUS - 1.0, 200.0);
        state.basket.ball_vel = Vec2::new(5.0, 0.0);
        tick(state);
    }

    fn answer_trivia(state: &mut GameState) {
        let answers: Vec<usize> = state.story.trivia.iter().map(|q| q.correct).collect();
        for correct in answers {
            for _ in 0..correct {
                press(state, Key::ArrowDown);
            }
            press(state, Key::Enter);
        }
    }

    #[test]
    fn test_title_confirm_starts_intro() {
        let mut state = GameState::default();
        press(&mut state, Key::Char('x'));
        assert_eq!(state.mode(), GameMode::Title);

        press(&mut state, Key::Enter);
        assert_eq!(state.mode(), GameMode::Dialog);
        let confirms = finish_dialog(&mut state);
        assert_eq!(confirms, state.story.intro.len());
        assert_eq!(state.mode(), GameMode::Hearts);
    }

    #[test]
    fn test_hearts_win_awards_gift_once_then_basket() {
        let mut state = GameState::default();
        state.enter_mode(GameMode::Hearts);
        state.drain_events();

        win_hearts(&mut state);
        assert_eq!(state.mode(), GameMode::Dialog);

        // Two story pages plus the gift page
        let confirms = finish_dialog(&mut state);
        assert_eq!(confirms, state.story.hearts_cleared.len() + 1);
        assert_eq!(state.mode(), GameMode::Basket);
        assert_eq!(state.gifts, vec![0]);

        let gift_events = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::GiftAwarded { .. }))
            .count();
        assert_eq!(gift_events, 1);
    }

    #[test]
    fn test_three_baskets_lead_to_lock() {
        let mut state = GameState::default();
        state.enter_mode(GameMode::Basket);

        sink_basket(&mut state);
        sink_basket(&mut state);
        assert_eq!(state.mode(), GameMode::Basket);
        sink_basket(&mut state);
        assert_eq!(state.mode(), GameMode::Dialog);

        finish_dialog(&mut state);
        assert_eq!(state.mode(), GameMode::Lock);
        assert_eq!(state.gifts, vec![1]);
    }

    #[test]
    fn test_lock_code_leads_to_trivia() {
        let mut state = GameState::default();
        state.enter_mode(GameMode::Lock);

        type_code(&mut state, "1234");
        assert_eq!(state.mode(), GameMode::Lock);
        assert_eq!(state.lock.buffer(), "");

        type_code(&mut state, "0225");
        assert_eq!(state.mode(), GameMode::Dialog);
        finish_dialog(&mut state);
        assert_eq!(state.mode(), GameMode::Trivia);
    }

    #[test]
    fn test_trivia_leads_to_question() {
        let mut state = GameState::default();
        state.enter_mode(GameMode::Trivia);
        answer_trivia(&mut state);
        assert_eq!(state.mode(), GameMode::Dialog);
        finish_dialog(&mut state);
        assert_eq!(state.mode(), GameMode::Question);
        assert_eq!(state.question.selected, Answer::Yes);
    }

    #[test]
    fn test_no_returns_to_question() {
        let mut state = GameState::default();
        state.enter_mode(GameMode::Question);

        press(&mut state, Key::ArrowRight);
        assert_eq!(state.question.selected, Answer::No);
        press(&mut state, Key::Enter);
        assert_eq!(state.mode(), GameMode::Dialog);

        finish_dialog(&mut state);
        assert_eq!(state.mode(), GameMode::Question);
        assert_eq!(state.question.selected, Answer::Yes);
    }

    #[test]
    fn test_yes_ends_and_end_ignores_input() {
        let mut state = GameState::default();
        state.enter_mode(GameMode::Question);
        press(&mut state, Key::Enter);
        assert_eq!(state.mode(), GameMode::End);

        for key in [Key::Enter, Key::Space, Key::ArrowLeft, Key::Digit(3), Key::Char('w')] {
            press(&mut state, key);
            tick(&mut state);
            assert_eq!(state.mode(), GameMode::End);
        }

        press(&mut state, Key::Char('r'));
        assert_eq!(state.mode(), GameMode::Title);
    }

    #[test]
    fn test_restart_from_every_mode() {
        let modes = [
            GameMode::Title,
            GameMode::Dialog,
            GameMode::Hearts,
            GameMode::Basket,
            GameMode::Lock,
            GameMode::Trivia,
            GameMode::Question,
            GameMode::End,
        ];
        for mode in modes {
            let mut state = GameState::default();
            if mode == GameMode::Dialog {
                press(&mut state, Key::Enter);
            } else {
                state.enter_mode(mode);
            }
            assert_eq!(state.mode(), mode);

            handle_key_down(&mut state, Key::Char('d'));
            state.hearts.player.jump_count = 2;
            state.gifts.push(0);

            handle_key_down(&mut state, Key::Char('r'));
            assert_eq!(state.mode(), GameMode::Title, "restart from {mode:?}");
            assert!(!state.held.any_held());
            assert_eq!(state.hearts.player.jump_count, 0);
            assert_eq!(state.hearts.player.pos, PLAYER_SPAWN);
            assert!(state.gifts.is_empty());
            assert!(!state.dialog.is_pending());
            assert_eq!(state.drain_events(), vec![GameEvent::Restarted]);
        }
    }

    #[test]
    fn test_dialog_continuation_never_fires_twice() {
        let mut state = GameState::default();
        state.enter_mode(GameMode::Lock);
        type_code(&mut state, "0225");
        finish_dialog(&mut state);
        assert_eq!(state.mode(), GameMode::Trivia);
        state.drain_events();

        // A stray confirm after the dialog belongs to trivia, not the dialog
        assert!(!state.dialog.is_pending());
        assert!(state.dialog.advance().is_none());
        assert_eq!(state.mode(), GameMode::Trivia);
        assert!(
            !state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::ModeChanged { .. }))
        );
    }

    #[test]
    fn test_held_keys_tracked_outside_hearts() {
        let mut state = GameState::default();
        handle_key_down(&mut state, Key::ArrowLeft);
        assert!(state.held.left_held());

        // Entering hearts while the key is still down moves the actor
        state.enter_mode(GameMode::Hearts);
        let x = state.hearts.player.pos.x;
        tick(&mut state);
        assert!(state.hearts.player.pos.x <= x);

        handle_key_up(&mut state, Key::ArrowLeft);
        assert!(!state.held.any_held());
    }

    #[test]
    fn test_ticks_count_in_every_mode() {
        let mut state = GameState::default();
        tick(&mut state);
        state.enter_mode(GameMode::End);
        tick(&mut state);
        assert_eq!(state.time_ticks, 2);
    }

    #[test]
    fn test_full_playthrough() {
        let mut state = GameState::default();
        press(&mut state, Key::Enter);
        finish_dialog(&mut state);
        assert_eq!(state.mode(), GameMode::Hearts);

        win_hearts(&mut state);
        finish_dialog(&mut state);
        for _ in 0..SHOTS_TO_WIN {
            sink_basket(&mut state);
        }
        finish_dialog(&mut state);
        type_code(&mut state, "0225");
        finish_dialog(&mut state);
        answer_trivia(&mut state);
        finish_dialog(&mut state);
        press(&mut state, Key::Enter);

        assert_eq!(state.mode(), GameMode::End);
        assert_eq!(state.gifts, vec![0, 1]);
    }
}
