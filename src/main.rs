//! Ball Hunt entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlInputElement, KeyboardEvent, MouseEvent};

    use ball_hunt::Settings;
    use ball_hunt::renderer::Canvas2d;
    use ball_hunt::sim::{Arena, Direction, InputEvent, SimConfig, SimState, handle_input, tick};

    /// Game instance holding all state
    struct Game {
        state: SimState,
        surface: Canvas2d,
        settings: Settings,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(state: SimState, surface: Canvas2d, settings: Settings) -> Self {
            Self {
                state,
                surface,
                settings,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run one simulation frame and paint it
        fn frame(&mut self, time: f64) {
            tick(&mut self.state, &mut self.surface);

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Calculate FPS from oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Update HUD elements in DOM (every frame, even when unchanged)
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let count_el = document
                .get_element_by_id("ball-count")
                .or_else(|| document.query_selector("p").ok().flatten());
            if let Some(el) = count_el {
                el.set_text_content(Some(&self.state.status_text()));
            }

            if let Some(el) = document.get_element_by_id("fps") {
                if self.settings.show_fps {
                    el.set_text_content(Some(&format!("FPS: {}", self.fps)));
                } else {
                    el.set_text_content(None);
                }
            }

            if let Some(el) = document.get_element_by_id("play-pause") {
                let label = if self.state.paused { "Play" } else { "Pause" };
                el.set_text_content(Some(label));
            }
        }

        /// Rebuild the balls with a new count
        fn restart(&mut self, ball_count: usize) {
            let seed = js_sys::Date::now() as u64;
            handle_input(&mut self.state, InputEvent::Restart { ball_count, seed });
            self.settings.ball_count = ball_count;
            self.settings.save();
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Ball Hunt starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")?
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        // Arena matches the viewport at load and never changes
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let arena = Arena::new(f64::from(canvas.width()), f64::from(canvas.height()));

        let settings = Settings::load();
        let config = SimConfig::default().with_ball_count(settings.effective_ball_count());
        let seed = js_sys::Date::now() as u64;
        let state = SimState::new(config, arena, seed);
        let surface = Canvas2d::new(&canvas)?;

        let game = Rc::new(RefCell::new(Game::new(state, surface, settings)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone())?;
        setup_controls(game.clone());

        // Start frame loop
        request_animation_frame(game);
        log::info!("Ball Hunt running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        // Keyboard moves the hunter right away, not on the next frame
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(direction) = Direction::from_key(&event.key()) {
                handle_input(&mut game.borrow_mut().state, InputEvent::Move(direction));
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Wire the play/pause button and the ball count form, when present
    fn setup_controls(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("play-pause") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                handle_input(&mut game.borrow_mut().state, InputEvent::TogglePause);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::info!("No #play-pause button, pause control disabled");
        }

        if let Some(btn) = document.get_element_by_id("fps-toggle") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                let shown = g.settings.toggle_fps();
                g.settings.save();
                log::info!("FPS display: {}", shown);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let field = document
            .get_element_by_id("ball-field")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        let submit = document.get_element_by_id("ball-submit");
        match (field, submit) {
            (Some(field), Some(btn)) => {
                field.set_value(&game.borrow().settings.ball_count.to_string());
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    match Settings::parse_ball_count(&field.value()) {
                        Some(count) => game.borrow_mut().restart(count),
                        None => log::warn!("Ignoring ball count {:?}", field.value()),
                    }
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
            _ => log::info!("No ball count form, restart control disabled"),
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
            g.frame(time);
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

/// Frames simulated by the headless native run
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_FRAMES: u64 = 600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ball_hunt::renderer::DrawList;
    use ball_hunt::sim::{
        Arena, Direction, InputEvent, SimConfig, SimEvent, SimState, handle_input, tick,
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Ball Hunt (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in a browser");

    let settings = ball_hunt::Settings::load();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let config = SimConfig::default().with_ball_count(settings.effective_ball_count());
    let mut state = SimState::new(config, Arena::new(960.0, 720.0), seed);
    let mut surface = DrawList::new();

    // Sweep the hunter back and forth across the arena
    let pattern = [Direction::Right, Direction::Down, Direction::Left, Direction::Down];
    let mut recolors = 0usize;
    let mut eliminations = 0usize;
    for frame in 0..NATIVE_FRAMES {
        let dir = pattern[(frame / 40) as usize % pattern.len()];
        if frame % 4 == 0 {
            handle_input(&mut state, InputEvent::Move(dir));
        }
        for event in tick(&mut state, &mut surface) {
            match event {
                SimEvent::Recolored { .. } => recolors += 1,
                SimEvent::Eliminated { .. } => eliminations += 1,
            }
        }
    }

    log::info!(
        "{} frames: {} recolors, {} eliminations, {}",
        state.frame,
        recolors,
        eliminations,
        state.status_text()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
