//! Typed page-element bundle and the DOM-backed HUD
//!
//! Every element the game needs is looked up once at startup. Lookups
//! are collected, not short-circuited, so one console line names the
//! whole missing set when the page and the code disagree.

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, HtmlInputElement};

use crate::ui::{Hud, InitError, Panel, TextSink};

/// All page elements the game touches, fetched and typed up front
pub struct PageBundle {
    pub canvas: HtmlCanvasElement,
    pub start_screen: HtmlElement,
    pub game_hud: HtmlElement,
    pub game_timer: HtmlElement,
    pub game_over_screen: HtmlElement,
    pub mobile_controls: HtmlElement,
    pub player_name: HtmlInputElement,
    pub start_btn: HtmlElement,
    pub play_again_btn: HtmlElement,
    pub current_score: HtmlElement,
    pub high_score: HtmlElement,
    pub final_score: HtmlElement,
    pub player_greeting: HtmlElement,
    pub keyboard_mode_btn: HtmlElement,
    pub touch_mode_btn: HtmlElement,
    pub touch_left: HtmlElement,
    pub touch_right: HtmlElement,
}

fn grab<T: JsCast>(
    document: &Document,
    id: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<T> {
    let found = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok());
    if found.is_none() {
        missing.push(id);
    }
    found
}

impl PageBundle {
    /// Validate the whole collaborator set in one pass
    pub fn from_document(document: &Document) -> Result<Self, InitError> {
        let mut missing = Vec::new();
        let canvas = grab::<HtmlCanvasElement>(document, "gameCanvas", &mut missing);
        let start_screen = grab::<HtmlElement>(document, "startScreen", &mut missing);
        let game_hud = grab::<HtmlElement>(document, "gameHud", &mut missing);
        let game_timer = grab::<HtmlElement>(document, "gameTimer", &mut missing);
        let game_over_screen = grab::<HtmlElement>(document, "gameOverScreen", &mut missing);
        let mobile_controls = grab::<HtmlElement>(document, "mobileControls", &mut missing);
        let player_name = grab::<HtmlInputElement>(document, "playerName", &mut missing);
        let start_btn = grab::<HtmlElement>(document, "startBtn", &mut missing);
        let play_again_btn = grab::<HtmlElement>(document, "playAgainBtn", &mut missing);
        let current_score = grab::<HtmlElement>(document, "currentScore", &mut missing);
        let high_score = grab::<HtmlElement>(document, "highScore", &mut missing);
        let final_score = grab::<HtmlElement>(document, "finalScore", &mut missing);
        let player_greeting = grab::<HtmlElement>(document, "playerGreeting", &mut missing);
        let keyboard_mode_btn = grab::<HtmlElement>(document, "keyboardModeBtn", &mut missing);
        let touch_mode_btn = grab::<HtmlElement>(document, "touchModeBtn", &mut missing);
        let touch_left = grab::<HtmlElement>(document, "touchLeft", &mut missing);
        let touch_right = grab::<HtmlElement>(document, "touchRight", &mut missing);

        let (
            Some(canvas),
            Some(start_screen),
            Some(game_hud),
            Some(game_timer),
            Some(game_over_screen),
            Some(mobile_controls),
            Some(player_name),
            Some(start_btn),
            Some(play_again_btn),
            Some(current_score),
            Some(high_score),
            Some(final_score),
            Some(player_greeting),
            Some(keyboard_mode_btn),
            Some(touch_mode_btn),
            Some(touch_left),
            Some(touch_right),
        ) = (
            canvas,
            start_screen,
            game_hud,
            game_timer,
            game_over_screen,
            mobile_controls,
            player_name,
            start_btn,
            play_again_btn,
            current_score,
            high_score,
            final_score,
            player_greeting,
            keyboard_mode_btn,
            touch_mode_btn,
            touch_left,
            touch_right,
        )
        else {
            return Err(InitError::MissingCollaborators(missing));
        };

        Ok(Self {
            canvas,
            start_screen,
            game_hud,
            game_timer,
            game_over_screen,
            mobile_controls,
            player_name,
            start_btn,
            play_again_btn,
            current_score,
            high_score,
            final_score,
            player_greeting,
            keyboard_mode_btn,
            touch_mode_btn,
            touch_left,
            touch_right,
        })
    }
}

/// [`Hud`] over the page's panels and text sinks
///
/// The timer element pulls double duty, as a panel to toggle and as
/// the sink the countdown writes into.
pub struct DomHud {
    start_screen: HtmlElement,
    game_hud: HtmlElement,
    game_timer: HtmlElement,
    canvas: HtmlElement,
    game_over_screen: HtmlElement,
    mobile_controls: HtmlElement,
    current_score: HtmlElement,
    high_score: HtmlElement,
    final_score: HtmlElement,
    player_greeting: HtmlElement,
}

impl DomHud {
    pub fn new(bundle: &PageBundle) -> Self {
        Self {
            start_screen: bundle.start_screen.clone(),
            game_hud: bundle.game_hud.clone(),
            game_timer: bundle.game_timer.clone(),
            canvas: bundle.canvas.clone().into(),
            game_over_screen: bundle.game_over_screen.clone(),
            mobile_controls: bundle.mobile_controls.clone(),
            current_score: bundle.current_score.clone(),
            high_score: bundle.high_score.clone(),
            final_score: bundle.final_score.clone(),
            player_greeting: bundle.player_greeting.clone(),
        }
    }

    fn panel_el(&self, panel: Panel) -> &HtmlElement {
        match panel {
            Panel::Start => &self.start_screen,
            Panel::Hud => &self.game_hud,
            Panel::Timer => &self.game_timer,
            Panel::Canvas => &self.canvas,
            Panel::GameOver => &self.game_over_screen,
            Panel::MobileControls => &self.mobile_controls,
        }
    }

    fn sink_el(&self, sink: TextSink) -> &HtmlElement {
        match sink {
            TextSink::CurrentScore => &self.current_score,
            TextSink::Timer => &self.game_timer,
            TextSink::FinalScore => &self.final_score,
            TextSink::HighScore => &self.high_score,
            TextSink::Greeting => &self.player_greeting,
        }
    }

    fn set_display(&self, panel: Panel, value: &str) {
        let style = self.panel_el(panel).style();
        if style.set_property("display", value).is_err() {
            warn!("failed to toggle panel display");
        }
    }
}

/// Block-level panels keep `block`; overlay and flex rows use `flex`
fn shown_display(panel: Panel) -> &'static str {
    match panel {
        Panel::Timer | Panel::Canvas => "block",
        _ => "flex",
    }
}

impl Hud for DomHud {
    fn show(&mut self, panel: Panel) {
        self.set_display(panel, shown_display(panel));
    }

    fn hide(&mut self, panel: Panel) {
        self.set_display(panel, "none");
    }

    fn set_text(&mut self, sink: TextSink, text: &str) {
        self.sink_el(sink).set_text_content(Some(text));
    }
}
