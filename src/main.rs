//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use canvas_pong::Settings;
    use canvas_pong::renderer::RenderState;
    use canvas_pong::sim::{
        Continuation, GameState, InputState, apply_command, continuation, tick,
    };

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        render_state: Option<RenderState>,
        /// A requestAnimationFrame callback is queued
        frame_pending: bool,
    }

    impl Game {
        fn new(settings: Settings, width: f32, height: f32) -> Self {
            Self {
                state: GameState::new(settings, width, height),
                input: InputState::new(),
                render_state: None,
                frame_pending: false,
            }
        }

        /// Advance one frame and draw it
        fn frame(&mut self) -> Continuation {
            match tick(&mut self.state, &self.input) {
                Ok(frame) => {
                    self.present(&frame.commands);
                    frame.next
                }
                Err(e) => {
                    // Keep the loop alive as long as the game is running
                    log::error!("Frame dropped: {}", e);
                    continuation(&self.state)
                }
            }
        }

        /// Draw the current state without advancing it
        fn redraw(&mut self) {
            match canvas_pong::render(&self.state) {
                Ok(commands) => self.present(&commands),
                Err(e) => log::error!("Redraw failed: {}", e),
            }
        }

        fn present(&mut self, commands: &[canvas_pong::DrawCommand]) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(commands) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    /// Viewport size in CSS pixels
    fn viewport_size() -> (u32, u32) {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|el| (el.client_width().max(1) as u32, el.client_height().max(1) as u32))
            .unwrap_or((800, 600))
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Canvas Pong starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document");
            return;
        };

        let canvas: HtmlCanvasElement = match document
            .create_element("canvas")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("Failed to create canvas");
                return;
            }
        };
        if let Some(body) = document.body() {
            let _ = body.append_child(&canvas);
        }

        let (width, height) = viewport_size();
        canvas.set_width(width);
        canvas.set_height(height);

        let game = Rc::new(RefCell::new(Game::new(
            Settings::load(),
            width as f32,
            height as f32,
        )));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        }

        setup_input_handlers(game.clone());
        setup_resize_handler(canvas, game.clone());

        game.borrow_mut().redraw();
        request_animation_frame(game);

        log::info!("Canvas Pong running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_down(event.key_code());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let next = {
                    let mut g = game.borrow_mut();
                    match g.input.key_up(event.key_code()) {
                        Some(command) => {
                            let next = apply_command(&mut g.state, command);
                            g.redraw();
                            next
                        }
                        None => Continuation::Halt,
                    }
                };
                if next == Continuation::Continue {
                    request_animation_frame(game.clone());
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = viewport_size();
            canvas.set_width(width);
            canvas.set_height(height);

            let mut g = game.borrow_mut();
            g.state.resize(width as f32, height as f32);
            if let Some(ref mut render_state) = g.render_state {
                render_state.resize(width, height);
            }
            g.redraw();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        {
            let mut g = game.borrow_mut();
            if g.frame_pending {
                return;
            }
            g.frame_pending = true;
        }

        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let next = {
            let mut g = game.borrow_mut();
            g.frame_pending = false;
            g.frame()
        };

        if next == Continuation::Continue {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    run_demo_match(3600);
}

#[cfg(target_arch = "wasm32")]
fn main() {}

/// Headless match where both paddles chase the ball
#[cfg(not(target_arch = "wasm32"))]
fn run_demo_match(ticks: u32) {
    use canvas_pong::Settings;
    use canvas_pong::sim::{GameEvent, GameState, InputState, Side, tick};

    let mut state = GameState::new(Settings::load(), 800.0, 600.0);
    let mut input = InputState::new();
    let mut hits = 0u32;

    for _ in 0..ticks {
        input.clear();
        if let Some(ball) = state.balls.first() {
            let target = ball.rect.center().y;
            for side in Side::BOTH {
                let paddle = state.paddle(side);
                let center = paddle.rect.center().y;
                if target < center - 10.0 {
                    input.key_down(paddle.bindings.up);
                } else if target > center + 10.0 {
                    input.key_down(paddle.bindings.down);
                }
            }
        }

        match tick(&mut state, &input) {
            Ok(frame) => {
                hits += frame
                    .events
                    .iter()
                    .filter(|e| matches!(e, GameEvent::PaddleHit { .. }))
                    .count() as u32;
            }
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        }
    }

    println!(
        "Demo match after {} ticks: {} - {} ({} paddle hits)",
        state.time_ticks, state.left.score, state.right.score, hits
    );
}
