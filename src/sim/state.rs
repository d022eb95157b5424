//! Game state and core simulation types

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::DifficultyCurve;

/// A falling star
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    /// Nominal radius used for drawing; the catch box is twice this
    pub size: f64,
    /// Fall speed in pixels per tick
    pub speed: f64,
    /// Draw-only spin angle (radians)
    pub rotation: f64,
}

/// The player's basket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basket {
    pub x: f64,
    /// Fixed once per layout; only x moves during play
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Basket {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: BASKET_WIDTH,
            height: BASKET_HEIGHT,
        }
    }
}

impl Basket {
    /// Center horizontally and pin to the bottom band of the surface
    pub fn place(&mut self, width: f64, height: f64) {
        self.x = ((width - self.width) / 2.0).max(0.0);
        self.y = height - BASKET_BOTTOM_OFFSET;
    }

    /// Keep the basket inside a resized surface without re-centering
    pub fn clamp_to(&mut self, width: f64, height: f64) {
        self.x = self.x.clamp(0.0, (width - self.width).max(0.0));
        self.y = height - BASKET_BOTTOM_OFFSET;
    }
}

/// Complete per-session simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Stars caught so far; never decreases within a session
    pub score: u32,
    /// Live stars, removal-safe during traversal
    pub stars: Vec<Star>,
    pub basket: Basket,
    /// Current base fall speed; recomputed by the difficulty curve
    pub star_speed: f64,
    /// Current spawn probability per tick; recomputed by the difficulty curve
    pub spawn_rate: f64,
    /// Whole seconds since session start, advanced by the countdown
    pub elapsed_secs: u32,
    curve: DifficultyCurve,
    rng: Pcg32,
}

impl GameState {
    /// Fresh state at base difficulty with a seeded RNG
    pub fn new(seed: u64, curve: DifficultyCurve) -> Self {
        Self {
            score: 0,
            stars: Vec::new(),
            basket: Basket::default(),
            star_speed: BASE_STAR_SPEED,
            spawn_rate: BASE_SPAWN_RATE,
            elapsed_secs: 0,
            curve,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn curve(&self) -> DifficultyCurve {
        self.curve
    }

    /// Draw one uniform value in [0, 1) for the spawn decision
    pub(crate) fn spawn_roll(&mut self) -> f64 {
        self.rng.random()
    }

    /// Append one star at the top edge, x uniform in `[0, width - 30)`.
    /// Degenerate surfaces (narrower than the spawn margin) pin x to 0.
    pub fn spawn_star(&mut self, width: f64) {
        let span = (width - STAR_SPAWN_MARGIN).max(0.0);
        let x = if span > 0.0 {
            self.rng.random_range(0.0..span)
        } else {
            0.0
        };
        let speed = self.star_speed + self.rng.random_range(0.0..STAR_SPEED_JITTER);
        self.stars.push(Star {
            x,
            y: STAR_SPAWN_Y,
            size: STAR_SIZE,
            speed,
            rotation: 0.0,
        });
    }
}
