//! Difficulty curves and persisted tuning
//!
//! Difficulty is a pure function of whole elapsed seconds, so replays
//! and resumed layouts always agree on speed and spawn rate.

use serde::{Deserialize, Serialize};

use crate::consts::{BASE_SPAWN_RATE, BASE_STAR_SPEED, SESSION_SECS};

/// Seconds between stepped difficulty bumps
const STEP_SECS: u32 = 15;
/// Per-step speed gain, capped at [`MAX_STAR_SPEED`]
const STEP_SPEED_GAIN: f64 = 0.5;
const MAX_STAR_SPEED: f64 = 8.0;
/// Per-step spawn-rate gain, capped at [`MAX_SPAWN_RATE`]
const STEP_RATE_GAIN: f64 = 0.005;
const MAX_SPAWN_RATE: f64 = 0.06;
/// Ramp endpoints: speed 2 -> 6, rate 0.02 -> 0.05 across one session
const RAMP_SPEED_GAIN: f64 = 4.0;
const RAMP_RATE_GAIN: f64 = 0.03;

/// How speed and spawn rate grow over a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyCurve {
    /// Discrete bumps every 15 seconds, with hard caps
    Stepped,
    /// Smooth interpolation across the whole session
    #[default]
    Ramp,
}

impl DifficultyCurve {
    /// (star speed, spawn probability per tick) for a given elapsed time
    pub fn at(self, elapsed_secs: u32) -> (f64, f64) {
        match self {
            Self::Stepped => {
                let steps = (elapsed_secs / STEP_SECS) as f64;
                (
                    (BASE_STAR_SPEED + steps * STEP_SPEED_GAIN).min(MAX_STAR_SPEED),
                    (BASE_SPAWN_RATE + steps * STEP_RATE_GAIN).min(MAX_SPAWN_RATE),
                )
            }
            Self::Ramp => {
                let progress = (elapsed_secs as f64 / SESSION_SECS as f64).clamp(0.0, 1.0);
                (
                    BASE_STAR_SPEED + RAMP_SPEED_GAIN * progress,
                    BASE_SPAWN_RATE + RAMP_RATE_GAIN * progress,
                )
            }
        }
    }
}

const TUNING_KEY: &str = "star-catcher-tuning";

/// Durable knobs, kept across sessions in localStorage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub curve: DifficultyCurve,
    /// Score a fresh page must beat before a run counts as a high score
    pub high_score_baseline: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            curve: DifficultyCurve::Ramp,
            high_score_baseline: 0,
        }
    }
}

impl Tuning {
    /// Load from localStorage, falling back to defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return Self::default();
        };
        storage
            .get_item(TUNING_KEY)
            .ok()
            .flatten()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    /// Persist to localStorage (best-effort)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return;
        };
        if let Ok(json) = serde_json::to_string(self) {
            if storage.set_item(TUNING_KEY, &json).is_err() {
                log::warn!("failed to persist tuning");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {}
}
