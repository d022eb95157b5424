//! Star Catcher - catch the falling stars in a basket
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions)
//! - `input`: Keyboard/touch input adapter
//! - `session`: Game lifecycle state machine (idle/playing/ended)
//! - `scheduler`: Cancellable frame/countdown scheduling seam
//! - `render`: Draw-surface seam and scene drawing
//! - `ui`: Panel and text-sink seam to the page chrome
//! - `highscores`: Session-lifetime high score tracking
//! - `tuning`: Deployment-level game balance choices
//! - `platform`: Browser implementations of the external seams

pub mod highscores;
pub mod input;
pub mod platform;
pub mod render;
pub mod scheduler;
pub mod session;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use highscores::HighScores;
pub use input::ControlMode;
pub use session::{Phase, Session};
pub use tuning::{DifficultyCurve, Tuning};

/// Game configuration constants
pub mod consts {
    /// Session length in seconds; the countdown starts here
    pub const SESSION_SECS: u32 = 45;
    /// Countdown tick interval (wall-clock milliseconds)
    pub const COUNTDOWN_INTERVAL_MS: u32 = 1000;

    /// Star defaults
    pub const STAR_SIZE: f64 = 15.0;
    /// Stars enter above the top edge so they slide into view
    pub const STAR_SPAWN_Y: f64 = -30.0;
    /// Spawn x is drawn from [0, width - STAR_SPAWN_MARGIN)
    pub const STAR_SPAWN_MARGIN: f64 = 30.0;
    /// Rotation advance per tick (radians, draw-only)
    pub const STAR_SPIN: f64 = 0.1;
    /// Uniform speed jitter added on top of the current base speed
    pub const STAR_SPEED_JITTER: f64 = 2.0;
    /// Base fall speed at session start (pixels/tick)
    pub const BASE_STAR_SPEED: f64 = 2.0;
    /// Base spawn probability per tick at session start
    pub const BASE_SPAWN_RATE: f64 = 0.02;

    /// Basket defaults
    pub const BASKET_WIDTH: f64 = 80.0;
    pub const BASKET_HEIGHT: f64 = 20.0;
    /// Horizontal movement per tick while an intent is held
    pub const BASKET_MOVE_STEP: f64 = 8.0;
    /// Basket top edge sits this far above the surface bottom
    pub const BASKET_BOTTOM_OFFSET: f64 = 50.0;

    /// Shown when the player leaves the name field blank
    pub const DEFAULT_PLAYER_NAME: &str = "Player";
}
