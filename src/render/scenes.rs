//! One scene function per mode
//!
//! Scenes only read state. Story text is personalized at draw time.

use glam::Vec2;

use super::{Canvas, Color, TextAlign, TextStyle, palette};
use crate::consts::*;
use crate::polar_to_cartesian;
use crate::settings::Settings;
use crate::sim::basket::{BACKBOARD, LAUNCH_POINT};
use crate::sim::collision::Rect;
use crate::sim::question::Answer;
use crate::sim::state::GameState;

const CENTER_X: f32 = CANVAS_WIDTH / 2.0;
const DIALOG_BOX: Rect = Rect::new(112.0, 300.0, 800.0, 220.0);
/// Characters per wrapped body line
const WRAP_COLUMNS: usize = 58;

/// Greedy word wrap on character count
pub fn wrap(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > columns {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Heart glyph built from circles
fn heart_shape(canvas: &mut impl Canvas, center: Vec2, size: f32, color: Color) {
    let lobe = size / 4.0;
    canvas.fill_circle(center + Vec2::new(-lobe, -size / 8.0), lobe, color);
    canvas.fill_circle(center + Vec2::new(lobe, -size / 8.0), lobe, color);
    canvas.fill_circle(center + Vec2::new(0.0, size / 8.0), size / 3.0, color);
}

fn flash_alpha(remaining: u32, total: u32) -> f32 {
    remaining as f32 / total.max(1) as f32
}

fn hud_text(canvas: &mut impl Canvas, text: &str) {
    let style = TextStyle::new(20.0, palette::CREAM).align(TextAlign::Left);
    canvas.fill_text(text, Vec2::new(20.0, 32.0), &style);
}

fn hint(canvas: &mut impl Canvas, text: &str, y: f32) {
    canvas.fill_text(
        text,
        Vec2::new(CENTER_X, y),
        &TextStyle::new(18.0, palette::DIM),
    );
}

pub fn title(state: &GameState, canvas: &mut impl Canvas) {
    let story = &state.story;
    heart_shape(canvas, Vec2::new(CENTER_X, 200.0), 120.0, palette::ROSE);
    canvas.fill_text(
        &story.personalize(&story.title),
        Vec2::new(CENTER_X, 330.0),
        &TextStyle::new(44.0, palette::PINK).bold(),
    );
    // Slow pulse on the prompt
    let pulse = 0.6 + 0.4 * (state.time_ticks as f32 * 0.08).sin();
    canvas.fill_text(
        "Press Enter to begin",
        Vec2::new(CENTER_X, 400.0),
        &TextStyle::new(22.0, palette::CREAM.with_alpha(pulse)),
    );
}

pub fn dialog(state: &GameState, canvas: &mut impl Canvas) {
    let Some(page) = state.dialog.current() else {
        return;
    };
    let story = &state.story;

    if let Some(image) = &page.image {
        let frame = Rect::new(CENTER_X - 110.0, 60.0, 220.0, 220.0);
        canvas.fill_rect(frame, palette::PANEL);
        if !canvas.draw_image(image, frame) {
            heart_shape(canvas, frame.center(), 140.0, palette::PINK);
        }
    }

    canvas.fill_rect(DIALOG_BOX, palette::PANEL.with_alpha(0.92));
    canvas.fill_text(
        &story.personalize(&page.title),
        Vec2::new(DIALOG_BOX.x + 30.0, DIALOG_BOX.y + 45.0),
        &TextStyle::new(28.0, palette::PINK)
            .bold()
            .align(TextAlign::Left),
    );

    let body = TextStyle::new(20.0, palette::CREAM).align(TextAlign::Left);
    for (i, line) in wrap(&story.personalize(&page.body), WRAP_COLUMNS)
        .iter()
        .enumerate()
    {
        let y = DIALOG_BOX.y + 90.0 + i as f32 * 28.0;
        canvas.fill_text(line, Vec2::new(DIALOG_BOX.x + 30.0, y), &body);
    }

    let progress = format!(
        "{}/{}  Enter to continue",
        state.dialog.page_index() + 1,
        state.dialog.page_count()
    );
    canvas.fill_text(
        &progress,
        Vec2::new(DIALOG_BOX.right() - 24.0, DIALOG_BOX.bottom() - 18.0),
        &TextStyle::new(16.0, palette::DIM).align(TextAlign::Right),
    );
}

pub fn hearts(state: &GameState, settings: &Settings, canvas: &mut impl Canvas) {
    let game = &state.hearts;

    canvas.fill_rect(
        Rect::new(0.0, CANVAS_HEIGHT - 4.0, CANVAS_WIDTH, 4.0),
        palette::PLATFORM,
    );
    for platform in &game.platforms {
        canvas.fill_rect(*platform, palette::PLATFORM);
    }

    // Gentle bob so hearts read as collectibles
    let bob = (state.time_ticks as f32 * 0.1).sin() * 3.0;
    for heart in game.hearts.iter().filter(|h| !h.collected()) {
        heart_shape(
            canvas,
            heart.pos + Vec2::new(0.0, bob),
            HEART_SIZE,
            palette::ROSE,
        );
    }

    let player = &game.player;
    canvas.fill_rect(
        Rect::new(player.pos.x, player.pos.y, player.width, player.height),
        palette::PLAYER,
    );

    if settings.show_hud {
        hud_text(
            canvas,
            &format!(
                "Hearts: {}/{}",
                game.collected_count(),
                state.story.hearts_to_collect
            ),
        );
    }
}

pub fn basket(state: &GameState, settings: &Settings, canvas: &mut impl Canvas) {
    let game = &state.basket;

    canvas.fill_rect(
        Rect::new(0.0, BOUNCE_LINE_Y, CANVAS_WIDTH, CANVAS_HEIGHT - BOUNCE_LINE_Y),
        palette::PANEL,
    );
    canvas.fill_rect(BACKBOARD, palette::BOARD);
    // Rim below the board (decorative)
    canvas.fill_rect(
        Rect::new(BACKBOARD.x - 50.0, BACKBOARD.bottom() - 30.0, 50.0, 5.0),
        palette::ROSE,
    );
    // Tee marking the launch spot
    canvas.fill_rect(
        Rect::new(LAUNCH_POINT.x - 12.0, LAUNCH_POINT.y + BALL_RADIUS, 24.0, 4.0),
        palette::DIM,
    );

    if !game.in_flight {
        for i in 1..=6 {
            let offset = polar_to_cartesian(game.power * 1.6 * i as f32, game.angle);
            let alpha = 1.0 - i as f32 / 7.0;
            canvas.fill_circle(game.ball_pos + offset, 3.0, palette::CREAM.with_alpha(alpha));
        }
    }
    canvas.fill_circle(game.ball_pos, BALL_RADIUS, palette::BALL);

    if game.score_flash > 0 {
        canvas.fill_text(
            "Swish!",
            Vec2::new(CENTER_X, 140.0),
            &TextStyle::new(
                48.0,
                palette::GOLD.with_alpha(flash_alpha(game.score_flash, SCORE_FLASH_TICKS)),
            )
            .bold(),
        );
    }

    if settings.show_hud {
        hud_text(
            canvas,
            &format!("Baskets: {}/{}", game.shots_made, SHOTS_TO_WIN),
        );
        let bar = Rect::new(20.0, 48.0, 200.0, 12.0);
        canvas.fill_rect(bar, palette::PANEL);
        canvas.fill_rect(
            Rect::new(bar.x, bar.y, bar.w * game.power_fraction(), bar.h),
            palette::PINK,
        );
        hint(
            canvas,
            "W/S aim, A/D power, Space to shoot",
            CANVAS_HEIGHT - 50.0,
        );
    }
}

pub fn lock(state: &GameState, canvas: &mut impl Canvas) {
    let game = &state.lock;
    canvas.fill_text(
        "Enter the code",
        Vec2::new(CENTER_X, 150.0),
        &TextStyle::new(34.0, palette::PINK).bold(),
    );

    let slot_w = 70.0;
    let gap = 20.0;
    let total = LOCK_CODE_LEN as f32 * slot_w + (LOCK_CODE_LEN as f32 - 1.0) * gap;
    let left = CENTER_X - total / 2.0;
    let digits: Vec<char> = game.buffer().chars().collect();
    let flash = flash_alpha(game.error_flash, ERROR_FLASH_TICKS);

    for i in 0..LOCK_CODE_LEN {
        let slot = Rect::new(left + i as f32 * (slot_w + gap), 220.0, slot_w, 90.0);
        if game.error_flash > 0 {
            canvas.fill_rect(
                Rect::new(slot.x - 4.0, slot.y - 4.0, slot.w + 8.0, slot.h + 8.0),
                palette::ERROR.with_alpha(flash),
            );
        }
        canvas.fill_rect(slot, palette::PANEL);
        if let Some(d) = digits.get(i) {
            canvas.fill_text(
                &d.to_string(),
                Vec2::new(slot.center().x, slot.y + 62.0),
                &TextStyle::new(48.0, palette::CREAM).bold(),
            );
        }
    }

    hint(canvas, "Type 4 digits, Backspace to erase, Enter to try", 380.0);
}

pub fn trivia(state: &GameState, canvas: &mut impl Canvas) {
    let game = &state.trivia;
    let story = &state.story;
    let Some(question) = story.trivia.get(game.index) else {
        return;
    };

    canvas.fill_text(
        &format!("Question {}/{}", game.index + 1, story.trivia.len()),
        Vec2::new(CENTER_X, 70.0),
        &TextStyle::new(18.0, palette::DIM),
    );
    canvas.fill_text(
        &story.personalize(&question.prompt),
        Vec2::new(CENTER_X, 130.0),
        &TextStyle::new(30.0, palette::PINK).bold(),
    );

    for (i, option) in question.options.iter().enumerate() {
        let row = Rect::new(CENTER_X - 220.0, 180.0 + i as f32 * 70.0, 440.0, 54.0);
        let selected = i == game.selection;
        if selected && game.error_flash > 0 {
            canvas.fill_rect(
                Rect::new(row.x - 4.0, row.y - 4.0, row.w + 8.0, row.h + 8.0),
                palette::ERROR.with_alpha(flash_alpha(game.error_flash, ERROR_FLASH_TICKS)),
            );
        }
        let fill = if selected {
            palette::PINK
        } else {
            palette::PANEL
        };
        canvas.fill_rect(row, fill);
        canvas.fill_text(
            &story.personalize(option),
            Vec2::new(row.center().x, row.y + 35.0),
            &TextStyle::new(22.0, palette::CREAM),
        );
    }
}

pub fn question(state: &GameState, canvas: &mut impl Canvas) {
    let story = &state.story;
    heart_shape(canvas, Vec2::new(CENTER_X, 150.0), 100.0, palette::ROSE);
    canvas.fill_text(
        &story.personalize(&story.finale_prompt),
        Vec2::new(CENTER_X, 270.0),
        &TextStyle::new(40.0, palette::PINK).bold(),
    );

    for (answer, x) in [(Answer::Yes, CENTER_X - 170.0), (Answer::No, CENTER_X + 30.0)] {
        let button = Rect::new(x, 330.0, 140.0, 64.0);
        let fill = if state.question.selected == answer {
            palette::PINK
        } else {
            palette::PANEL
        };
        canvas.fill_rect(button, fill);
        canvas.fill_text(
            answer.label(),
            Vec2::new(button.center().x, button.y + 42.0),
            &TextStyle::new(28.0, palette::CREAM).bold(),
        );
    }
}

pub fn end(state: &GameState, canvas: &mut impl Canvas) {
    let story = &state.story;

    // Hearts drifting up the screen
    for i in 0..12u64 {
        let x = (i as f32 * 97.0) % CANVAS_WIDTH;
        let travel = ((state.time_ticks + i * 37) % 300) as f32 / 300.0;
        let y = CANVAS_HEIGHT - travel * (CANVAS_HEIGHT + 40.0);
        heart_shape(
            canvas,
            Vec2::new(x + 30.0, y),
            24.0,
            palette::PINK.with_alpha(1.0 - travel),
        );
    }

    canvas.fill_text(
        &story.personalize(&story.finale_message),
        Vec2::new(CENTER_X, 240.0),
        &TextStyle::new(46.0, palette::GOLD).bold(),
    );

    for (row, gift) in state
        .gifts
        .iter()
        .filter_map(|&i| story.gifts.get(i))
        .enumerate()
    {
        canvas.fill_text(
            &gift.name,
            Vec2::new(CENTER_X, 310.0 + row as f32 * 30.0),
            &TextStyle::new(20.0, palette::CREAM),
        );
    }
}

/// Restart hint, shown in every mode
pub fn footer(canvas: &mut impl Canvas) {
    canvas.fill_text(
        "Press R to restart",
        Vec2::new(CANVAS_WIDTH - 20.0, CANVAS_HEIGHT - 16.0),
        &TextStyle::new(14.0, palette::DIM).align(TextAlign::Right),
    );
}
