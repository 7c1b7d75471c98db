//! Heart Quest entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use heart_quest::QuestConfig;
    use heart_quest::audio::AudioManager;
    use heart_quest::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use heart_quest::platform::story_images;
    use heart_quest::platform::web::{ImageCache, WebCanvas, canvas_context, read_config};
    use heart_quest::render::{self, Backdrop, Canvas, TextAlign, TextStyle, palette};
    use heart_quest::settings::Settings;
    use heart_quest::sim::{GameState, Key, handle_key_down, handle_key_up, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        backdrop: Backdrop,
        canvas: WebCanvas,
        audio: AudioManager,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        /// Run one simulation tick and play what it produced
        fn update(&mut self, time: f64) {
            tick(&mut self.state);
            self.flush_events();

            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (59_000.0 / elapsed).round() as u32;
                }
            }
        }

        fn flush_events(&mut self) {
            for event in self.state.drain_events() {
                log::debug!("{:?}", event);
                self.audio.play_event(&event);
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            render::draw(&self.state, &self.backdrop, &self.settings, &mut self.canvas);
            if self.settings.show_fps {
                self.canvas.fill_text(
                    &format!("{} fps", self.fps),
                    glam::Vec2::new(CANVAS_WIDTH - 20.0, 28.0),
                    &TextStyle::new(14.0, palette::DIM).align(TextAlign::Right),
                );
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Heart Quest starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document");
            return;
        };

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let config = QuestConfig::load_or_default(read_config(&document).as_deref());

        let Some((canvas, ctx)) = canvas_context(&document) else {
            log::error!("No 2D canvas found");
            return;
        };
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let images = ImageCache::preload(&story_images(&config.story));
        let seed = js_sys::Date::now() as u64;

        let game = Rc::new(RefCell::new(Game {
            audio: AudioManager::new(&config.settings),
            state: GameState::new(config.story),
            settings: config.settings,
            backdrop: Backdrop::new(seed),
            canvas: WebCanvas::new(ctx, images),
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }));

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Heart Quest running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(key) = Key::from_dom(&event.key()) else {
                    return;
                };
                if key.is_game_key() {
                    event.prevent_default();
                }
                // Auto-repeat would re-fire jumps and confirms
                if event.repeat() {
                    return;
                }
                let mut g = game.borrow_mut();
                handle_key_down(&mut g.state, key);
                g.flush_events();
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom(&event.key()) {
                    let mut g = game.borrow_mut();
                    handle_key_up(&mut g.state, key);
                    g.flush_events();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Heart Quest (native) starting...");
    log::info!("Native mode is a headless smoke run - serve the wasm build for the real thing");

    let json = std::env::args()
        .nth(1)
        .and_then(|path| match std::fs::read_to_string(&path) {
            Ok(json) => Some(json),
            Err(e) => {
                log::warn!("Could not read {path}: {e}");
                None
            }
        });
    let config = heart_quest::QuestConfig::load_or_default(json.as_deref());
    smoke_run(config.story);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play the opening of the quest without a window and log what happens
#[cfg(not(target_arch = "wasm32"))]
fn smoke_run(story: heart_quest::Story) {
    use heart_quest::sim::{GameMode, GameState, Key, handle_key_down, handle_key_up, tick};

    fn press(state: &mut GameState, key: Key) {
        handle_key_down(state, key);
        handle_key_up(state, key);
    }

    let mut state = GameState::new(story);

    // Title and intro
    while matches!(state.mode(), GameMode::Title | GameMode::Dialog) {
        press(&mut state, Key::Enter);
    }

    // Run right with periodic double jumps for ten seconds of frames
    handle_key_down(&mut state, Key::Char('d'));
    for frame in 0..600u32 {
        if frame % 50 == 0 {
            press(&mut state, Key::Char('w'));
        }
        if frame % 50 == 10 {
            press(&mut state, Key::Char('w'));
        }
        tick(&mut state);
        if state.mode() != GameMode::Hearts {
            break;
        }
    }
    handle_key_up(&mut state, Key::Char('d'));

    for event in state.drain_events() {
        log::info!("{:?}", event);
    }
    log::info!(
        "Smoke run finished in {:?} after {} ticks with {} hearts",
        state.mode(),
        state.time_ticks,
        state.hearts.collected_count()
    );

    press(&mut state, Key::Char('r'));
    log::info!("After restart: {:?}", state.mode());
}
