//! Session-best score tracking
//!
//! One integer survives the page: the best score so far. Storage sits
//! behind [`ScoreStore`] so the session logic never touches the browser
//! directly and tests can watch every write.

use log::info;

/// Storage key shared with the browser-backed store
pub const HIGH_SCORE_KEY: &str = "starCatcherHighScore";

/// Where the best score lives between sessions
pub trait ScoreStore {
    /// Last persisted best, or None when absent or unreadable
    fn get(&self) -> Option<u32>;
    /// Best-effort write; implementations log and swallow failures
    fn set(&mut self, score: u32);
}

/// In-memory store for tests and native runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    score: Option<u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(&self) -> Option<u32> {
        self.score
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self) -> Option<u32> {
        self.score
    }

    fn set(&mut self, score: u32) {
        self.score = Some(score);
    }
}

/// Best score, floored by a tuning baseline
#[derive(Debug)]
pub struct HighScores<S> {
    store: S,
    best: u32,
}

impl<S: ScoreStore> HighScores<S> {
    /// Read the store once at startup; a missing or unreadable entry
    /// falls back to the baseline
    pub fn load(store: S, baseline: u32) -> Self {
        let best = store.get().unwrap_or(0).max(baseline);
        info!("high score loaded: {best}");
        Self { store, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Offer the session's current score. Only a strictly better score
    /// updates the best and hits the store; ties change nothing.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        self.store.set(score);
        true
    }
}
