//! Bit Eater entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use bit_eater::renderer::CanvasSurface;
    use bit_eater::sim::WorldConfig;
    use bit_eater::ui::Hud;
    use bit_eater::{FrameLoop, FrameOutcome, Game, Settings};

    /// Game plus its drawing surface and loop state
    struct App {
        game: Game,
        surface: CanvasSurface,
        document: Document,
        frames: FrameLoop,
    }

    impl App {
        /// Mirror the HUD into the DOM indicators
        fn update_hud(&self) {
            let hud = self.game.hud();
            if let Err(e) = apply_hud(&self.document, &hud) {
                log::warn!("HUD update failed: {:?}", e);
            }
        }
    }

    fn apply_hud(document: &Document, hud: &Hud) -> Result<(), JsValue> {
        if let Some(el) = document.query_selector("#staminaGauge")? {
            let classes = el.class_list();
            classes.remove_2("red", "green")?;
            if let Some(class) = hud.stamina_tone.css_class() {
                classes.add_1(class)?;
            }
            el.set_text_content(Some(&hud.stamina_text));
        }

        if let Some(el) = document.query_selector("#score")? {
            el.set_text_content(Some(&hud.score_text));
            el.class_list().toggle_with_force("green", hud.score_highlight)?;
        }

        if let Some(el) = document.query_selector("#retryButton")? {
            el.class_list().toggle_with_force("hidden", !hud.retry_visible)?;
        }
        Ok(())
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Bit Eater starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")?
            .ok_or("no canvas")?
            .dyn_into()?;

        let settings = Settings::load();
        settings.save();

        let config = WorldConfig::with_bounds(canvas.width() as f32, canvas.height() as f32);
        let seed = js_sys::Date::now() as u64;
        let surface = CanvasSurface::new(canvas)?;
        let app = Rc::new(RefCell::new(App {
            game: Game::new(config, settings, seed),
            surface,
            document: document.clone(),
            frames: FrameLoop::started(),
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(app.clone())?;
        setup_retry_button(&document, app.clone())?;

        request_animation_frame(app);

        log::info!("Bit Eater running!");
        Ok(())
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.key_down(&event.key());
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_retry_button(document: &Document, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let Some(btn) = document.query_selector("#retryButton")? else {
            log::warn!("No retry button found");
            return Ok(());
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let resume = {
                let mut a = app.borrow_mut();
                a.game.retry();
                a.update_hud();
                a.frames.restart()
            };
            if resume {
                request_animation_frame(app.clone());
            }
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Schedule the next frame; on failure the loop counts as stopped so
    /// the retry button can start it again
    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window");
            app.borrow_mut().frames.schedule_failed();
            return;
        };
        let loop_app = app.clone();
        let closure = Closure::once(move |_time: f64| {
            game_loop(loop_app);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(_) => closure.forget(),
            Err(e) => {
                log::warn!("Failed to schedule frame: {:?}", e);
                app.borrow_mut().frames.schedule_failed();
            }
        }
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let (outcome, next) = {
            let mut a = app.borrow_mut();
            let App { game, surface, .. } = &mut *a;
            let outcome = game.frame(surface);
            a.update_hud();
            let next = a.frames.after_frame(outcome);
            (outcome, next)
        };

        if next {
            request_animation_frame(app);
        } else if let FrameOutcome::Stop(phase) = outcome {
            log::info!("Run ended: {:?}", phase);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bit_eater::renderer::RecordingSurface;
    use bit_eater::sim::WorldConfig;
    use bit_eater::{Game, Settings};

    env_logger::init();
    log::info!("Bit Eater (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1);
    let config = WorldConfig::default();
    let mut surface = RecordingSurface::new(config.bounds.x, config.bounds.y);
    let mut game = Game::new(config, Settings::load(), seed);

    // Hold right and down so the player wanders into the bots
    game.key_down("ArrowRight");
    game.key_down("ArrowDown");
    let outcome = game.run(&mut surface, 10_000);

    let hud = game.hud();
    log::info!(
        "Seed {}: {:?} after {} frames, score {}, size {:.1}, stamina {}",
        seed,
        outcome,
        game.state.frame,
        hud.score_text,
        game.state.player.size(),
        hud.stamina_text
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
