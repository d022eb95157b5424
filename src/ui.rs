//! HUD seam between the session and the page
//!
//! The session never touches the DOM. It flips named panels and writes
//! named text sinks through [`Hud`]; the wasm layer maps those onto
//! page elements and tests record them.

use std::error::Error;
use std::fmt;

/// Page regions the session shows and hides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// Name entry, mode pick and the start button
    Start,
    /// Score and high-score readouts above the canvas
    Hud,
    Timer,
    Canvas,
    GameOver,
    /// Touch zones, only shown for touch-mode sessions
    MobileControls,
}

/// Text fields the session writes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSink {
    CurrentScore,
    Timer,
    FinalScore,
    HighScore,
    Greeting,
}

/// Write-only view of the page chrome
pub trait Hud {
    fn show(&mut self, panel: Panel);
    fn hide(&mut self, panel: Panel);
    fn set_text(&mut self, sink: TextSink, text: &str);
}

/// Startup failure: required page pieces were absent
///
/// Collected in one pass so the console names every missing element at
/// once instead of failing on the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    MissingCollaborators(Vec<&'static str>),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCollaborators(names) => {
                write!(f, "missing page elements: {}", names.join(", "))
            }
        }
    }
}

impl Error for InitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_error_names_every_missing_piece() {
        let err = InitError::MissingCollaborators(vec!["gameCanvas", "startBtn"]);
        assert_eq!(err.to_string(), "missing page elements: gameCanvas, startBtn");
    }
}
