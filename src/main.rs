//! Coin Catcher entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{DeviceOrientationEvent, KeyboardEvent, MouseEvent, TouchEvent};

    use coin_catcher::platform::CanvasSurface;
    use coin_catcher::{Game, InputEvent, Settings};

    /// Game plus the surface it draws on
    struct Host {
        game: Game,
        surface: CanvasSurface,
    }

    type Shared = Rc<RefCell<Host>>;

    fn seed() -> u64 {
        js_sys::Date::now() as u64
    }

    pub fn run() -> Result<(), JsValue> {
        log::info!("Coin Catcher starting...");

        let mut surface = CanvasSurface::from_element_id("canvas")?;
        let viewport = surface.fit_to_window();
        let settings = Settings::from_json_or_default(surface.settings_json().as_deref());

        let game = Game::new(settings, viewport, seed());
        game.render(&mut surface);

        let host = Rc::new(RefCell::new(Host { game, surface }));

        setup_start_triggers(host.clone())?;
        setup_keyboard(host.clone())?;
        setup_pointer(host.clone())?;
        setup_orientation(host.clone())?;
        setup_resize(host)?;

        log::info!(
            "Coin Catcher ready ({}x{})",
            viewport.width,
            viewport.height
        );
        Ok(())
    }

    /// Forward an event and kick the frame loop if the game asks for it
    fn dispatch(host: &Shared, event: InputEvent) {
        let wants_frame = host.borrow_mut().game.on_input(event, seed());
        if wants_frame {
            request_animation_frame(host.clone());
        }
    }

    fn setup_start_triggers(host: Shared) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Play button (optional) and the canvas itself both start/retry
        let canvas = host.borrow().surface.canvas().clone();
        let mut targets: Vec<web_sys::EventTarget> = vec![canvas.into()];
        if let Some(btn) = document.get_element_by_id("play") {
            targets.push(btn.into());
        }

        for target in targets {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                dispatch(&host, InputEvent::StartRequested);
            });
            target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_keyboard(host: Shared) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let input = match event.key().as_str() {
                "ArrowLeft" => InputEvent::StepLeft,
                "ArrowRight" => InputEvent::StepRight,
                " " | "Enter" => InputEvent::StartRequested,
                _ => return,
            };
            dispatch(&host, input);
        });
        document.add_event_listener_with_callback_and_bool(
            "keydown",
            closure.as_ref().unchecked_ref(),
            true,
        )?;
        closure.forget();
        Ok(())
    }

    fn setup_pointer(host: Shared) -> Result<(), JsValue> {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .ok_or("no body")?;

        // Mouse enter/move
        for kind in ["mouseenter", "mousemove"] {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                dispatch(&host, InputEvent::MoveTo(event.client_x() as f32));
            });
            body.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch drag
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    dispatch(&host, InputEvent::MoveTo(touch.client_x() as f32));
                }
            });
            body.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_orientation(host: Shared) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: DeviceOrientationEvent| {
            // gamma: left/right tilt in [-90, 90]
            if let Some(gamma) = event.gamma() {
                dispatch(&host, InputEvent::Tilt(gamma as f32));
            }
        });
        window.add_event_listener_with_callback_and_bool(
            "deviceorientation",
            closure.as_ref().unchecked_ref(),
            true,
        )?;
        closure.forget();
        Ok(())
    }

    fn setup_resize(host: Shared) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut h = host.borrow_mut();
            let Host { game, surface } = &mut *h;
            let viewport = surface.fit_to_window();
            game.on_resize(viewport, surface);
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(host: Shared) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(host, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(host: Shared, time: f64) {
        let wants_next = {
            let mut h = host.borrow_mut();
            let Host { game, surface } = &mut *h;
            game.on_frame(time, surface)
        };

        if wants_next {
            request_animation_frame(host);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Coin Catcher (native) starting...");
    log::info!(
        "Native mode runs a headless autopilot - run with `trunk serve` for the web version"
    );

    demo::run(0xC0FFEE);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use coin_catcher::renderer::RecordingSurface;
    use coin_catcher::sim::{FallerKind, GameEvent, GamePhase};
    use coin_catcher::{Game, InputEvent, Settings, Viewport};

    /// Give up after ten minutes of game time
    const MAX_TIME_MS: f64 = 10.0 * 60.0 * 1000.0;
    /// Simulated display refresh
    const REFRESH_MS: f64 = 1000.0 / 60.0;

    /// Play one session with a simple autopilot chasing the lowest coin
    pub fn run(seed: u64) {
        let mut game = Game::new(Settings::default(), Viewport::new(1280.0, 800.0), seed);
        let mut surface = RecordingSurface::new();
        game.on_start_requested(seed);

        let mut now = 0.0;
        let (mut coins, mut bombs, mut missed) = (0u32, 0u32, 0u32);

        while game.phase() == GamePhase::Playing && now < MAX_TIME_MS {
            if let Some(target) = autopilot_target(&game) {
                game.on_input(InputEvent::MoveTo(target), seed);
            }
            game.on_frame(now, &mut surface);
            for event in &game.last_events {
                match event {
                    GameEvent::CoinCaught { .. } => coins += 1,
                    GameEvent::BombCaught { .. } => bombs += 1,
                    GameEvent::Missed {
                        kind: FallerKind::Coin,
                        ..
                    } => missed += 1,
                    _ => {}
                }
            }
            game.last_events.clear();
            now += REFRESH_MS;
        }

        log::info!(
            "Demo finished after {:.1}s: score {}, coins {}, bombs {}, missed {}, frames {}",
            now / 1000.0,
            game.session.score,
            coins,
            bombs,
            missed,
            surface.frames
        );
        println!("Final score: {}", game.session.score);
    }

    /// Centre under the lowest coin, unless a bomb is lower
    fn autopilot_target(game: &Game) -> Option<f32> {
        let lowest = game
            .session
            .fallers
            .iter()
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))?;
        match lowest.kind {
            FallerKind::Coin => Some(lowest.pos.x),
            FallerKind::Bomb => {
                let basket = game.session.basket.as_ref()?;
                let dodge = basket.width + lowest.radius;
                let half = game.session.layout.viewport.width / 2.0;
                Some(if lowest.pos.x > half {
                    lowest.pos.x - dodge
                } else {
                    lowest.pos.x + dodge
                })
            }
        }
    }
}
