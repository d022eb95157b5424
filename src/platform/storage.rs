//! Tab-scoped score persistence over sessionStorage
//!
//! Denied or absent storage degrades to "no stored high score"; every
//! failure path lands on None or a warning, never an error the game
//! has to handle.

use log::warn;
use web_sys::Storage;

use crate::highscores::{HIGH_SCORE_KEY, ScoreStore};

pub struct WebStorage {
    storage: Option<Storage>,
}

impl WebStorage {
    /// sessionStorage for this tab; None when the browser denies it
    pub fn session() -> Self {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
        if storage.is_none() {
            warn!("session storage unavailable, high score will not persist");
        }
        Self { storage }
    }
}

impl ScoreStore for WebStorage {
    fn get(&self) -> Option<u32> {
        let raw = self.storage.as_ref()?.get_item(HIGH_SCORE_KEY).ok()??;
        // Stored as a bare integer string; anything else reads as absent
        serde_json::from_str(&raw).ok()
    }

    fn set(&mut self, score: u32) {
        let Some(storage) = &self.storage else {
            return;
        };
        let Ok(raw) = serde_json::to_string(&score) else {
            return;
        };
        if storage.set_item(HIGH_SCORE_KEY, &raw).is_err() {
            warn!("could not save high score");
        }
    }
}
