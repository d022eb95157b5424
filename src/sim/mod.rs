//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete tick per animation frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::star_hits_basket;
pub use state::{Basket, GameState, Star};
pub use tick::{Intent, TickEffects, tick};
