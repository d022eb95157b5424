//! Input tracking for keyboard and touch control
//!
//! Movement is level-triggered: the session asks for the current
//! [`Intent`] each frame instead of reacting to individual events, so
//! repeats and multiple held keys behave sensibly.

use std::collections::HashSet;

use crate::sim::Intent;

/// Which control scheme the player picked before starting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    Keyboard,
    Touch,
}

/// The four movement keys; everything else passes through untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    ArrowLeft,
    KeyA,
    ArrowRight,
    KeyD,
}

impl GameKey {
    /// Map a `KeyboardEvent.code` to a movement key
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "KeyA" => Some(Self::KeyA),
            "ArrowRight" => Some(Self::ArrowRight),
            "KeyD" => Some(Self::KeyD),
            _ => None,
        }
    }

    pub fn steers_left(self) -> bool {
        matches!(self, Self::ArrowLeft | Self::KeyA)
    }
}

/// On-screen press areas for touch control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchZone {
    MoveLeft,
    MoveRight,
}

/// Held keys and pressed zones, gated by the active control mode
///
/// Events from the inactive scheme are dropped at the door, so a stray
/// touch during a keyboard session can never wiggle the basket.
#[derive(Debug, Default)]
pub struct InputState {
    mode: Option<ControlMode>,
    held: HashSet<GameKey>,
    left_zone: bool,
    right_zone: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Option<ControlMode> {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ControlMode) {
        self.mode = Some(mode);
    }

    /// Track a key press; returns true when the code is a movement key
    pub fn key_down(&mut self, code: &str) -> bool {
        let Some(key) = GameKey::from_code(code) else {
            return false;
        };
        if self.mode == Some(ControlMode::Keyboard) {
            self.held.insert(key);
        }
        true
    }

    /// Track a key release; returns true when the code is a movement key
    pub fn key_up(&mut self, code: &str) -> bool {
        let Some(key) = GameKey::from_code(code) else {
            return false;
        };
        if self.mode == Some(ControlMode::Keyboard) {
            self.held.remove(&key);
        }
        true
    }

    pub fn zone_down(&mut self, zone: TouchZone) {
        if self.mode != Some(ControlMode::Touch) {
            return;
        }
        match zone {
            TouchZone::MoveLeft => self.left_zone = true,
            TouchZone::MoveRight => self.right_zone = true,
        }
    }

    pub fn zone_up(&mut self, zone: TouchZone) {
        if self.mode != Some(ControlMode::Touch) {
            return;
        }
        match zone {
            TouchZone::MoveLeft => self.left_zone = false,
            TouchZone::MoveRight => self.right_zone = false,
        }
    }

    /// Drop all held state without touching the mode. Called on session
    /// start, end, reset and focus loss so a missed keyup never leaves
    /// the basket drifting.
    pub fn force_clear(&mut self) {
        self.held.clear();
        self.left_zone = false;
        self.right_zone = false;
    }

    /// Resolve held state into this frame's movement intent
    pub fn intent(&self) -> Intent {
        match self.mode {
            Some(ControlMode::Keyboard) => Intent {
                left: self.held.iter().any(|k| k.steers_left()),
                right: self.held.iter().any(|k| !k.steers_left()),
            },
            Some(ControlMode::Touch) => Intent {
                left: self.left_zone,
                right: self.right_zone,
            },
            None => Intent::default(),
        }
    }
}
