//! Catch detection between falling stars and the basket
//!
//! Stars use an axis-aligned box twice their nominal size, which makes
//! catches feel forgiving near the basket rim.

use super::state::{Basket, Star};

/// True when the star's catch box overlaps the basket
///
/// The catch box spans `[x, x + 2*size]` on both axes even though the
/// star is drawn inside `[x, x + size]`, so grazing contact counts.
pub fn star_hits_basket(star: &Star, basket: &Basket) -> bool {
    star.x + star.size * 2.0 > basket.x
        && star.x < basket.x + basket.width
        && star.y + star.size * 2.0 > basket.y
        && star.y < basket.y + basket.height
}
