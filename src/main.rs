//! Star Catcher entry point
//!
//! Wires the browser page to the session: element lookup, event
//! listeners, the scheduler callbacks and logging.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlElement, MouseEvent, TouchEvent, Window};

    use star_catcher::highscores::HighScores;
    use star_catcher::input::{ControlMode, TouchZone};
    use star_catcher::platform::{CanvasSurface, DomHud, PageBundle, WebScheduler, WebStorage};
    use star_catcher::session::Session;
    use star_catcher::tuning::Tuning;

    type WebSession = Session<DomHud, CanvasSurface, WebStorage, WebScheduler>;

    /// Everything the event listeners share
    struct App {
        session: WebSession,
        /// Mode picked on the start screen, handed to the next start()
        selected_mode: Option<ControlMode>,
        name_input: web_sys::HtmlInputElement,
    }

    impl App {
        fn try_start(&mut self) {
            let name = self.name_input.value();
            let seed = js_sys::Date::now() as u64;
            if !self.session.start(&name, self.selected_mode, seed) {
                log::debug!("start click ignored");
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Star Catcher starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Missing page pieces disable the game but never take down the
        // rest of the page
        let bundle = match PageBundle::from_document(&document) {
            Ok(bundle) => bundle,
            Err(err) => {
                log::error!("Star Catcher disabled: {err}");
                return;
            }
        };
        let surface = match CanvasSurface::new(bundle.canvas.clone()) {
            Ok(surface) => surface,
            Err(err) => {
                log::error!("Star Catcher disabled: {err}");
                return;
            }
        };

        let tuning = Tuning::load();
        let scores = HighScores::load(WebStorage::session(), tuning.high_score_baseline);
        let hud = DomHud::new(&bundle);

        // The scheduler closures hold weak references; the app itself
        // is kept alive by the forgotten event listeners below
        let app = Rc::new_cyclic(|weak: &Weak<RefCell<App>>| {
            let on_frame = {
                let weak = weak.clone();
                Closure::<dyn FnMut()>::new(move || {
                    if let Some(app) = weak.upgrade() {
                        app.borrow_mut().session.frame();
                    }
                })
            };
            let on_second = {
                let weak = weak.clone();
                Closure::<dyn FnMut()>::new(move || {
                    if let Some(app) = weak.upgrade() {
                        app.borrow_mut().session.second();
                    }
                })
            };
            let scheduler = WebScheduler::new(window.clone(), on_frame, on_second);
            RefCell::new(App {
                session: Session::new(hud, surface, scores, scheduler, tuning),
                selected_mode: None,
                name_input: bundle.player_name.clone(),
            })
        });

        setup_start_controls(&app, &bundle);
        setup_mode_buttons(&app, &bundle);
        setup_keyboard(&app, &document);
        setup_zone(&app, &bundle.touch_left, TouchZone::MoveLeft);
        setup_zone(&app, &bundle.touch_right, TouchZone::MoveRight);
        setup_focus_watchers(&app, &window, &document);
        setup_resize(&app, &window);

        log::info!("Star Catcher ready");
    }

    fn setup_start_controls(app: &Rc<RefCell<App>>, bundle: &PageBundle) {
        // Start button
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
                app.borrow_mut().try_start();
            });
            let _ = bundle
                .start_btn
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Enter inside the name field starts too
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.key() == "Enter" {
                    event.prevent_default();
                    app.borrow_mut().try_start();
                }
            });
            let _ = bundle
                .player_name
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Play-again button returns to the start screen
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
                app.borrow_mut().session.reset();
            });
            let _ = bundle
                .play_again_btn
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_mode_buttons(app: &Rc<RefCell<App>>, bundle: &PageBundle) {
        setup_mode_button(
            app,
            &bundle.keyboard_mode_btn,
            &bundle.touch_mode_btn,
            ControlMode::Keyboard,
        );
        setup_mode_button(
            app,
            &bundle.touch_mode_btn,
            &bundle.keyboard_mode_btn,
            ControlMode::Touch,
        );
    }

    fn setup_mode_button(
        app: &Rc<RefCell<App>>,
        button: &HtmlElement,
        other: &HtmlElement,
        mode: ControlMode,
    ) {
        let app = app.clone();
        let button_clone = button.clone();
        let other = other.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            event.prevent_default();
            app.borrow_mut().selected_mode = Some(mode);
            let _ = button_clone.class_list().add_1("selected");
            let _ = other.class_list().remove_1("selected");
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_keyboard(app: &Rc<RefCell<App>>, document: &Document) {
        // Keydown: swallow movement keys during play so the page does
        // not scroll; everything else (typing a name) passes through
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if app.borrow_mut().session.key_down(&event.code()) {
                    event.prevent_default();
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                app.borrow_mut().session.key_up(&event.code());
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Touch and mouse press/release on one movement zone
    fn setup_zone(app: &Rc<RefCell<App>>, element: &HtmlElement, zone: TouchZone) {
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut().session.zone_down(zone);
            });
            let _ = element
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        for release in ["touchend", "touchcancel"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut().session.zone_up(zone);
            });
            let _ = element
                .add_event_listener_with_callback(release, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse fallback so the zones also work on desktop
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().session.zone_down(zone);
            });
            let _ = element
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        for release in ["mouseup", "mouseleave"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().session.zone_up(zone);
            });
            let _ = element
                .add_event_listener_with_callback(release, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_focus_watchers(app: &Rc<RefCell<App>>, window: &Window, document: &Document) {
        // Window blur: a held key's release may never arrive
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().session.focus_lost();
            });
            let _ = window
                .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Tab hidden behaves like blur
        {
            let app = app.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    app.borrow_mut().session.focus_lost();
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }
    }

    fn setup_resize(app: &Rc<RefCell<App>>, window: &Window) {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().session.resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
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
    log::info!("Star Catcher (native) starting...");
    log::info!("The game targets the browser - build the wasm32 target and serve the page");

    smoke_test_catch();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_test_catch() {
    use star_catcher::sim::{GameState, Intent, Star, tick};
    use star_catcher::tuning::DifficultyCurve;

    let mut state = GameState::new(1, DifficultyCurve::Ramp);
    state.basket.place(600.0, 600.0);
    state.spawn_rate = 0.0;
    state.stars.push(Star {
        x: state.basket.x + 10.0,
        y: state.basket.y - 4.0,
        size: 15.0,
        speed: 5.0,
        rotation: 0.0,
    });
    let effects = tick(&mut state, Intent::default(), 600.0, 600.0);
    assert!(effects.scored == 1 && state.stars.is_empty());
    println!("✓ catch simulation passed!");
}
