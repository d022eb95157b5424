//! Browser-backed implementations of the game's seams
//!
//! Everything here is wasm-only: the DOM HUD, the 2D canvas surface,
//! the sessionStorage score store and the rAF/interval scheduler.
//! Native builds and tests use in-memory stand-ins instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod sched;
#[cfg(target_arch = "wasm32")]
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
#[cfg(target_arch = "wasm32")]
pub use dom::{DomHud, PageBundle};
#[cfg(target_arch = "wasm32")]
pub use sched::WebScheduler;
#[cfg(target_arch = "wasm32")]
pub use storage::WebStorage;
