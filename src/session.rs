//! Session lifecycle: Idle, Playing, Ended
//!
//! One `Session` owns everything a run needs: simulation state, input
//! tracking, the HUD, the score store and the scheduler. The browser
//! (or a test) pushes events in; the session decides what they mean
//! for the current phase. Every scheduled callback is owned as a
//! handle here and cancelled whenever the phase that armed it exits,
//! so a finished game can never keep ticking in the background.

use log::{debug, info};

use crate::consts::*;
use crate::highscores::{HighScores, ScoreStore};
use crate::input::{ControlMode, InputState, TouchZone};
use crate::render::{Surface, draw_scene};
use crate::scheduler::Scheduler;
use crate::sim::{GameState, tick};
use crate::tuning::Tuning;
use crate::ui::{Hud, Panel, TextSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Playing,
    Ended,
}

pub struct Session<H, S, K, C: Scheduler> {
    phase: Phase,
    state: GameState,
    input: InputState,
    hud: H,
    surface: S,
    scores: HighScores<K>,
    scheduler: C,
    tuning: Tuning,
    time_left: u32,
    player_name: String,
    new_high_score: bool,
    frame: Option<C::FrameHandle>,
    countdown: Option<C::RepeatHandle>,
}

impl<H, S, K, C> Session<H, S, K, C>
where
    H: Hud,
    S: Surface,
    K: ScoreStore,
    C: Scheduler,
{
    /// Build an idle session and put the page into its start layout
    pub fn new(hud: H, surface: S, scores: HighScores<K>, scheduler: C, tuning: Tuning) -> Self {
        let mut session = Self {
            phase: Phase::Idle,
            state: GameState::new(0, tuning.curve),
            input: InputState::new(),
            hud,
            surface,
            scores,
            scheduler,
            tuning,
            time_left: SESSION_SECS,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            new_high_score: false,
            frame: None,
            countdown: None,
        };
        session
            .hud
            .set_text(TextSink::HighScore, &session.scores.best().to_string());
        session.show_start_layout();
        session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn best(&self) -> u32 {
        self.scores.best()
    }

    /// True once the session has beaten the stored best; read by the
    /// end screen
    pub fn new_high_score(&self) -> bool {
        self.new_high_score
    }

    /// Begin a run. Refused (returning false) outside the start screen
    /// or without a control-mode selection. The chosen mode is fixed
    /// for the whole session.
    pub fn start(&mut self, name: &str, mode: Option<ControlMode>, seed: u64) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        let Some(mode) = mode else {
            debug!("start refused: no control mode selected");
            return false;
        };

        let trimmed = name.trim();
        self.player_name = if trimmed.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            trimmed.to_string()
        };

        self.state = GameState::new(seed, self.tuning.curve);
        self.state
            .basket
            .place(self.surface.width(), self.surface.height());
        self.time_left = SESSION_SECS;
        self.new_high_score = false;
        self.input.set_mode(mode);
        self.input.force_clear();
        self.phase = Phase::Playing;

        self.hud.set_text(TextSink::CurrentScore, "0");
        self.hud
            .set_text(TextSink::Timer, &SESSION_SECS.to_string());
        self.hud
            .set_text(TextSink::HighScore, &self.scores.best().to_string());
        self.hud.hide(Panel::Start);
        self.hud.show(Panel::Hud);
        self.hud.show(Panel::Timer);
        self.hud.show(Panel::Canvas);
        if mode == ControlMode::Touch {
            self.hud.show(Panel::MobileControls);
        } else {
            self.hud.hide(Panel::MobileControls);
        }

        self.frame = Some(self.scheduler.schedule_frame());
        self.countdown = Some(self.scheduler.schedule_repeating(COUNTDOWN_INTERVAL_MS));
        info!("session started for {}", self.player_name);
        true
    }

    /// Animation-frame callback: advance one tick, draw, re-arm.
    /// Stray frames outside Playing fall through without re-arming.
    pub fn frame(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.frame = None;

        let (width, height) = (self.surface.width(), self.surface.height());
        let effects = tick(&mut self.state, self.input.intent(), width, height);
        if effects.scored > 0 {
            self.hud
                .set_text(TextSink::CurrentScore, &self.state.score.to_string());
            self.check_high_score();
        }
        draw_scene(&mut self.surface, &self.state);

        self.frame = Some(self.scheduler.schedule_frame());
    }

    /// Countdown callback, once per second while playing
    pub fn second(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.state.elapsed_secs += 1;
        self.time_left = self.time_left.saturating_sub(1);
        self.hud
            .set_text(TextSink::Timer, &self.time_left.to_string());
        if self.time_left == 0 {
            self.end();
        }
    }

    /// Compare against the stored best; on improvement persist it,
    /// refresh the readout and remember the win for the end screen
    fn check_high_score(&mut self) {
        if self.scores.record(self.state.score) {
            self.new_high_score = true;
            self.hud
                .set_text(TextSink::HighScore, &self.scores.best().to_string());
        }
    }

    fn end(&mut self) {
        self.cancel_scheduled();
        self.phase = Phase::Ended;
        self.input.force_clear();

        self.check_high_score();
        let score = self.state.score;
        info!(
            "session over: {} scored {score} (best {})",
            self.player_name,
            self.scores.best()
        );

        self.hud
            .set_text(TextSink::FinalScore, &format!("Final Score: {score}"));
        let greeting = if self.new_high_score {
            format!("New high score, {}!", self.player_name)
        } else {
            format!("Great job, {}!", self.player_name)
        };
        self.hud.set_text(TextSink::Greeting, &greeting);
        self.hud.show(Panel::GameOver);
    }

    /// Back to the start screen from the end screen (or mid-run).
    /// Leaves the score store untouched.
    pub fn reset(&mut self) {
        if self.phase == Phase::Idle {
            return;
        }
        self.cancel_scheduled();
        self.phase = Phase::Idle;
        self.input.force_clear();
        self.hud
            .set_text(TextSink::HighScore, &self.scores.best().to_string());
        self.show_start_layout();
    }

    /// Blur or tab-hide: drop held input so nothing drifts while the
    /// player is away. The clock keeps running; there is no pause.
    pub fn focus_lost(&mut self) {
        debug!("focus lost, clearing held input");
        self.input.force_clear();
    }

    /// Surface changed size: keep the basket on it without recentering
    pub fn resize(&mut self) {
        let (width, height) = (self.surface.width(), self.surface.height());
        self.state.basket.clamp_to(width, height);
        if self.phase == Phase::Playing {
            draw_scene(&mut self.surface, &self.state);
        }
    }

    /// Returns true when the code is a movement key pressed during
    /// play, so the caller can preventDefault exactly then
    pub fn key_down(&mut self, code: &str) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.input.key_down(code)
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.input.key_up(code)
    }

    pub fn zone_down(&mut self, zone: TouchZone) {
        if self.phase == Phase::Playing {
            self.input.zone_down(zone);
        }
    }

    pub fn zone_up(&mut self, zone: TouchZone) {
        if self.phase == Phase::Playing {
            self.input.zone_up(zone);
        }
    }

    fn show_start_layout(&mut self) {
        self.hud.hide(Panel::GameOver);
        self.hud.hide(Panel::Hud);
        self.hud.hide(Panel::Timer);
        self.hud.hide(Panel::Canvas);
        self.hud.hide(Panel::MobileControls);
        self.hud.show(Panel::Start);
    }

    fn cancel_scheduled(&mut self) {
        if let Some(handle) = self.frame.take() {
            self.scheduler.cancel_frame(handle);
        }
        if let Some(handle) = self.countdown.take() {
            self.scheduler.cancel_repeating(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use glam::DVec2;

    use super::*;
    use crate::highscores::MemoryStore;
    use crate::sim::Star;
    use crate::tuning::DifficultyCurve;

    #[derive(Default)]
    struct FakeHud {
        visible: HashMap<Panel, bool>,
        texts: HashMap<TextSink, String>,
    }

    impl FakeHud {
        fn text(&self, sink: TextSink) -> &str {
            self.texts.get(&sink).map(String::as_str).unwrap_or("")
        }

        fn shown(&self, panel: Panel) -> bool {
            self.visible.get(&panel).copied().unwrap_or(false)
        }
    }

    impl Hud for FakeHud {
        fn show(&mut self, panel: Panel) {
            self.visible.insert(panel, true);
        }
        fn hide(&mut self, panel: Panel) {
            self.visible.insert(panel, false);
        }
        fn set_text(&mut self, sink: TextSink, text: &str) {
            self.texts.insert(sink, text.to_string());
        }
    }

    struct FakeSurface {
        w: f64,
        h: f64,
        draws: usize,
    }

    impl Default for FakeSurface {
        fn default() -> Self {
            Self {
                w: 600.0,
                h: 600.0,
                draws: 0,
            }
        }
    }

    impl Surface for FakeSurface {
        fn width(&self) -> f64 {
            self.w
        }
        fn height(&self) -> f64 {
            self.h
        }
        fn fill_vertical_gradient(&mut self, _top: &str, _bottom: &str) {
            self.draws += 1;
        }
        fn fill_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64, _color: &str) {}
        fn stroke_line(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64, _c: &str, _w: f64) {}
        fn push_transform(&mut self, _tx: f64, _ty: f64, _rotation: f64) {}
        fn pop_transform(&mut self) {}
        fn fill_polygon(&mut self, _points: &[DVec2], _f: &str, _s: &str, _w: f64) {}
    }

    #[derive(Default)]
    struct FakeScheduler {
        next_handle: u32,
        armed_frames: Vec<u32>,
        armed_repeats: Vec<u32>,
        frame_arms: usize,
        repeat_arms: usize,
        frame_cancels: usize,
        repeat_cancels: usize,
    }

    impl Scheduler for FakeScheduler {
        type FrameHandle = u32;
        type RepeatHandle = u32;

        fn schedule_frame(&mut self) -> u32 {
            self.next_handle += 1;
            self.frame_arms += 1;
            self.armed_frames.push(self.next_handle);
            self.next_handle
        }
        fn cancel_frame(&mut self, handle: u32) {
            self.frame_cancels += 1;
            self.armed_frames.retain(|h| *h != handle);
        }
        fn schedule_repeating(&mut self, _interval_ms: u32) -> u32 {
            self.next_handle += 1;
            self.repeat_arms += 1;
            self.armed_repeats.push(self.next_handle);
            self.next_handle
        }
        fn cancel_repeating(&mut self, handle: u32) {
            self.repeat_cancels += 1;
            self.armed_repeats.retain(|h| *h != handle);
        }
    }

    type TestSession = Session<FakeHud, FakeSurface, MemoryStore, FakeScheduler>;

    fn session_with_store(store: MemoryStore) -> TestSession {
        Session::new(
            FakeHud::default(),
            FakeSurface::default(),
            HighScores::load(store, 0),
            FakeScheduler::default(),
            Tuning::default(),
        )
    }

    fn fresh_session() -> TestSession {
        session_with_store(MemoryStore::new())
    }

    fn stored(score: u32) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set(score);
        store
    }

    fn start_keyboard(session: &mut TestSession, name: &str) {
        assert!(session.start(name, Some(ControlMode::Keyboard), 7));
    }

    /// Park a star one tick above the basket mouth
    fn drop_star_on_basket(session: &mut TestSession) {
        let basket = session.state.basket;
        session.state.stars.push(Star {
            x: basket.x + 10.0,
            y: basket.y - 4.0,
            size: 15.0,
            speed: 5.0,
            rotation: 0.0,
        });
    }

    fn run_out_clock(session: &mut TestSession) {
        for _ in 0..SESSION_SECS {
            session.second();
        }
    }

    /// The browser consumes a pending animation frame as it fires
    fn fire_frame(session: &mut TestSession) {
        session.scheduler.armed_frames.pop();
        session.frame();
    }

    #[test]
    fn test_page_load_shows_start_screen_and_best() {
        let session = session_with_store(stored(12));
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.hud.shown(Panel::Start));
        assert!(!session.hud.shown(Panel::Hud));
        assert!(!session.hud.shown(Panel::Canvas));
        assert!(!session.hud.shown(Panel::GameOver));
        assert_eq!(session.hud.text(TextSink::HighScore), "12");
    }

    #[test]
    fn test_start_refused_without_control_mode() {
        let mut session = fresh_session();
        assert!(!session.start("Ada", None, 7));
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.hud.shown(Panel::Start));
        assert_eq!(session.scheduler.frame_arms, 0);
        assert_eq!(session.scheduler.repeat_arms, 0);
    }

    #[test]
    fn test_start_arms_frame_and_countdown() {
        let mut session = fresh_session();
        start_keyboard(&mut session, "Ada");
        assert_eq!(session.phase(), Phase::Playing);
        assert!(!session.hud.shown(Panel::Start));
        assert!(session.hud.shown(Panel::Hud));
        assert!(session.hud.shown(Panel::Timer));
        assert!(session.hud.shown(Panel::Canvas));
        assert!(!session.hud.shown(Panel::MobileControls));
        assert_eq!(session.hud.text(TextSink::CurrentScore), "0");
        assert_eq!(session.hud.text(TextSink::Timer), "45");
        assert_eq!(session.scheduler.armed_frames.len(), 1);
        assert_eq!(session.scheduler.armed_repeats.len(), 1);
        let basket = session.state.basket;
        assert_eq!(basket.x, 260.0);
        assert_eq!(basket.y, 550.0);
    }

    #[test]
    fn test_touch_start_shows_mobile_controls() {
        let mut session = fresh_session();
        assert!(session.start("Ada", Some(ControlMode::Touch), 7));
        assert!(session.hud.shown(Panel::MobileControls));
    }

    #[test]
    fn test_start_refused_while_playing() {
        let mut session = fresh_session();
        start_keyboard(&mut session, "Ada");
        assert!(!session.start("Eve", Some(ControlMode::Touch), 8));
        assert_eq!(session.scheduler.repeat_arms, 1);
    }

    #[test]
    fn test_frame_ticks_draws_and_rearms() {
        let mut session = fresh_session();
        start_keyboard(&mut session, "Ada");
        session.key_down("ArrowRight");
        let x0 = session.state.basket.x;
        fire_frame(&mut session);
        assert_eq!(session.state.basket.x, x0 + BASKET_MOVE_STEP);
        assert_eq!(session.surface.draws, 1);
        assert_eq!(session.scheduler.armed_frames.len(), 1);
        assert_eq!(session.scheduler.frame_arms, 2);
    }

    #[test]
    fn test_holding_left_walks_the_basket_to_the_wall() {
        let mut session = fresh_session();
        start_keyboard(&mut session, "Ava");
        session.key_down("ArrowLeft");
        for _ in 0..10 {
            fire_frame(&mut session);
        }
        assert_eq!(session.state.basket.x, 260.0 - 80.0);

        // A narrow surface clamps at the left wall instead
        let mut session = fresh_session();
        session.surface.w = 100.0;
        start_keyboard(&mut session, "Ava");
        assert_eq!(session.state.basket.x, 10.0);
        session.key_down("ArrowLeft");
        for _ in 0..10 {
            fire_frame(&mut session);
        }
        assert_eq!(session.state.basket.x, 0.0);
    }

    #[test]
    fn test_catch_updates_score_and_live_high_score() {
        let mut session = fresh_session();
        start_keyboard(&mut session, "Ada");
        drop_star_on_basket(&mut session);
        fire_frame(&mut session);
        assert_eq!(session.state.score, 1);
        assert_eq!(session.hud.text(TextSink::CurrentScore), "1");
        // Beat the empty store mid-play: persisted and shown right away
        assert_eq!(session.scores.best(), 1);
        assert_eq!(session.hud.text(TextSink::HighScore), "1");
        assert!(session.new_high_score());
    }

    #[test]
    fn test_catch_below_the_best_leaves_store_alone() {
        let mut session = session_with_store(stored(10));
        start_keyboard(&mut session, "Ada");
        drop_star_on_basket(&mut session);
        fire_frame(&mut session);
        assert_eq!(session.hud.text(TextSink::CurrentScore), "1");
        assert_eq!(session.hud.text(TextSink::HighScore), "10");
        assert!(!session.new_high_score());
    }

    #[test]
    fn test_countdown_updates_time_display() {
        let mut session = fresh_session();
        start_keyboard(&mut session, "Ada");
        session.second();
        assert_eq!(session.hud.text(TextSink::Timer), "44");
        assert_eq!(session.state.elapsed_secs, 1);
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn test_clock_runs_out_into_end_screen() {
        let mut session = fresh_session();
        start_keyboard(&mut session, "Ada");
        drop_star_on_basket(&mut session);
        fire_frame(&mut session);
        run_out_clock(&mut session);

        assert_eq!(session.phase(), Phase::Ended);
        assert!(session.hud.shown(Panel::GameOver));
        assert_eq!(session.hud.text(TextSink::Timer), "0");
        assert_eq!(session.hud.text(TextSink::FinalScore), "Final Score: 1");
        assert_eq!(session.hud.text(TextSink::Greeting), "New high score, Ada!");
        assert_eq!(session.hud.text(TextSink::HighScore), "1");
        assert!(session.new_high_score());
        assert_eq!(session.scores.best(), 1);
    }

    #[test]
    fn test_end_cancels_both_callbacks_exactly_once() {
        let mut session = fresh_session();
        start_keyboard(&mut session, "Ada");
        run_out_clock(&mut session);
        assert!(session.scheduler.armed_frames.is_empty());
        assert!(session.scheduler.armed_repeats.is_empty());
        assert_eq!(session.scheduler.frame_cancels, 1);
        assert_eq!(session.scheduler.repeat_cancels, 1);

        // Reset afterwards has nothing left to cancel
        session.reset();
        assert_eq!(session.scheduler.frame_cancels, 1);
        assert_eq!(session.scheduler.repeat_cancels, 1);
    }

    #[test]
    fn test_no_improvement_keeps_plain_greeting() {
        let mut session = session_with_store(stored(10));
        start_keyboard(&mut session, "  Grace  ");
        run_out_clock(&mut session);
        assert_eq!(session.hud.text(TextSink::Greeting), "Great job, Grace!");
        assert_eq!(session.hud.text(TextSink::HighScore), "10");
        assert!(!session.new_high_score());
    }

    #[test]
    fn test_tying_the_best_is_not_a_high_score() {
        let mut session = session_with_store(stored(1));
        start_keyboard(&mut session, "Ada");
        drop_star_on_basket(&mut session);
        fire_frame(&mut session);
        run_out_clock(&mut session);
        assert!(!session.new_high_score());
        assert_eq!(session.hud.text(TextSink::Greeting), "Great job, Ada!");
    }

    #[test]
    fn test_blank_name_falls_back_to_player() {
        let mut session = fresh_session();
        start_keyboard(&mut session, "   ");
        run_out_clock(&mut session);
        assert_eq!(
            session.hud.text(TextSink::Greeting),
            "Great job, Player!"
        );
    }

    #[test]
    fn test_absent_store_then_two_sessions() {
        let mut session = fresh_session();
        start_keyboard(&mut session, "Ada");
        session.state.score = 37;
        run_out_clock(&mut session);
        assert_eq!(session.scores.best(), 37);
        assert_eq!(session.hud.text(TextSink::FinalScore), "Final Score: 37");
        assert!(session.new_high_score());

        session.reset();
        start_keyboard(&mut session, "Ada");
        session.state.score = 20;
        run_out_clock(&mut session);
        assert_eq!(session.scores.best(), 37);
        assert_eq!(session.hud.text(TextSink::HighScore), "37");
        assert!(!session.new_high_score());
    }

    #[test]
    fn test_stray_callbacks_after_end_do_nothing() {
        let mut session = fresh_session();
        start_keyboard(&mut session, "Ada");
        run_out_clock(&mut session);
        let draws = session.surface.draws;
        session.frame();
        session.second();
        assert_eq!(session.surface.draws, draws);
        assert!(session.scheduler.armed_frames.is_empty());
        assert_eq!(session.hud.text(TextSink::Timer), "0");
    }

    #[test]
    fn test_second_before_start_is_ignored() {
        let mut session = fresh_session();
        session.second();
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.state.elapsed_secs, 0);
    }

    #[test]
    fn test_reset_returns_to_start_screen() {
        let mut session = fresh_session();
        start_keyboard(&mut session, "Ada");
        drop_star_on_basket(&mut session);
        fire_frame(&mut session);
        run_out_clock(&mut session);
        session.reset();

        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.hud.shown(Panel::Start));
        assert!(!session.hud.shown(Panel::GameOver));
        assert!(!session.hud.shown(Panel::Hud));
        assert!(!session.hud.shown(Panel::Canvas));
        assert_eq!(session.hud.text(TextSink::HighScore), "1");

        // A second run starts clean
        start_keyboard(&mut session, "Ada");
        assert_eq!(session.state.score, 0);
        assert_eq!(session.hud.text(TextSink::Timer), "45");
        assert!(!session.new_high_score());
    }

    #[test]
    fn test_reset_mid_run_cancels_callbacks() {
        let mut session = fresh_session();
        start_keyboard(&mut session, "Ada");
        fire_frame(&mut session);
        session.reset();
        assert!(session.scheduler.armed_frames.is_empty());
        assert!(session.scheduler.armed_repeats.is_empty());
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_focus_lost_stops_basket_drift() {
        let mut session = fresh_session();
        start_keyboard(&mut session, "Ada");
        session.key_down("ArrowLeft");
        session.focus_lost();
        let x0 = session.state.basket.x;
        fire_frame(&mut session);
        assert_eq!(session.state.basket.x, x0);
    }

    #[test]
    fn test_keys_only_steer_while_playing() {
        let mut session = fresh_session();
        // Typing on the start screen is never swallowed
        assert!(!session.key_down("KeyA"));
        start_keyboard(&mut session, "Ada");
        assert!(session.key_down("KeyA"));
        assert!(session.key_down("ArrowLeft"));
        assert!(!session.key_down("Space"));
    }

    #[test]
    fn test_touch_zones_steer_in_touch_mode() {
        let mut session = fresh_session();
        assert!(session.start("Ada", Some(ControlMode::Touch), 7));
        let x0 = session.state.basket.x;
        session.zone_down(TouchZone::MoveRight);
        fire_frame(&mut session);
        assert_eq!(session.state.basket.x, x0 + BASKET_MOVE_STEP);
        session.zone_up(TouchZone::MoveRight);
        fire_frame(&mut session);
        assert_eq!(session.state.basket.x, x0 + BASKET_MOVE_STEP);
    }

    #[test]
    fn test_keys_do_not_steer_a_touch_session() {
        let mut session = fresh_session();
        assert!(session.start("Ada", Some(ControlMode::Touch), 7));
        let x0 = session.state.basket.x;
        session.key_down("ArrowRight");
        fire_frame(&mut session);
        assert_eq!(session.state.basket.x, x0);
    }

    #[test]
    fn test_resize_keeps_basket_on_surface() {
        let mut session = fresh_session();
        start_keyboard(&mut session, "Ada");
        session.surface.w = 300.0;
        session.surface.h = 400.0;
        session.resize();
        let basket = session.state.basket;
        assert!(basket.x <= 300.0 - basket.width);
        assert_eq!(basket.y, 350.0);
    }

    #[test]
    fn test_difficulty_ramps_with_the_countdown() {
        let mut session = fresh_session();
        start_keyboard(&mut session, "Ada");
        for _ in 0..30 {
            session.second();
        }
        fire_frame(&mut session);
        let (speed, rate) = DifficultyCurve::Ramp.at(30);
        assert!((session.state.star_speed - speed).abs() < 1e-9);
        assert!((session.state.spawn_rate - rate).abs() < 1e-9);
    }

    #[test]
    fn test_baseline_floors_the_celebration() {
        let mut session = Session::new(
            FakeHud::default(),
            FakeSurface::default(),
            HighScores::load(MemoryStore::new(), 3),
            FakeScheduler::default(),
            Tuning {
                curve: DifficultyCurve::Ramp,
                high_score_baseline: 3,
            },
        );
        assert_eq!(session.hud.text(TextSink::HighScore), "3");
        start_keyboard(&mut session, "Ada");
        drop_star_on_basket(&mut session);
        fire_frame(&mut session);
        run_out_clock(&mut session);
        // One catch does not beat the baseline of three
        assert!(!session.new_high_score());
        assert_eq!(session.hud.text(TextSink::Greeting), "Great job, Ada!");
    }
}
