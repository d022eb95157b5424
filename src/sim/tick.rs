//! Per-frame simulation step
//!
//! One call per animation frame while a session is playing. The step is
//! deterministic for a given state, intent and surface size; all
//! randomness flows through the state's seeded RNG.

use super::collision::star_hits_basket;
use super::state::GameState;
use crate::consts::*;

/// Movement intent for a single tick, already resolved from held keys
/// or touch zones
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intent {
    pub left: bool,
    pub right: bool,
}

/// What a tick did, for callers that mirror score or play effects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEffects {
    /// Stars caught this tick
    pub scored: u32,
}

/// Advance the simulation by one frame
///
/// Order is fixed: basket movement, spawn roll, star updates (catch
/// checked before the off-screen cull), then difficulty recompute.
pub fn tick(state: &mut GameState, intent: Intent, width: f64, height: f64) -> TickEffects {
    let mut effects = TickEffects::default();

    // Basket movement; left applies before right, so holding both nets
    // to no motion. Clamp keeps the basket fully on-surface.
    if intent.left {
        state.basket.x -= BASKET_MOVE_STEP;
    }
    if intent.right {
        state.basket.x += BASKET_MOVE_STEP;
    }
    let limit = (width - state.basket.width).max(0.0);
    state.basket.x = state.basket.x.clamp(0.0, limit);

    // At most one spawn per tick
    if state.spawn_roll() < state.spawn_rate {
        state.spawn_star(width);
    }

    // Fall, spin, then resolve each star: catch wins over the cull when
    // a star crosses the basket and the bottom edge on the same tick.
    let basket = state.basket;
    let mut caught = 0u32;
    state.stars.retain_mut(|star| {
        star.y += star.speed;
        star.rotation += STAR_SPIN;
        if star_hits_basket(star, &basket) {
            caught += 1;
            return false;
        }
        star.y <= height
    });
    state.score += caught;
    effects.scored = caught;

    // Difficulty tracks elapsed time, not tick count
    let (speed, rate) = state.curve().at(state.elapsed_secs);
    state.star_speed = speed;
    state.spawn_rate = rate;

    effects
}
