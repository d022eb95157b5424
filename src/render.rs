//! Scene drawing over an abstract surface
//!
//! Star geometry is computed here; each star is drawn inside a saved
//! translate+rotate scope so the polygon itself stays in local
//! coordinates. The [`Surface`] only ever sees primitive calls, which
//! keeps the drawing code off the wasm boundary and checkable in
//! plain tests.

use glam::DVec2;

use crate::sim::{Basket, GameState, Star};

const SKY_TOP: &str = "rgba(30, 60, 114, 0.3)";
const SKY_BOTTOM: &str = "rgba(42, 82, 152, 0.3)";
const STAR_FILL: &str = "#FFD700";
const STAR_STROKE: &str = "#FFA500";
const STAR_STROKE_WIDTH: f64 = 2.0;
const BASKET_BODY: &str = "#8B4513";
const BASKET_RIM: &str = "#A0522D";
const BASKET_WEAVE: &str = "#654321";
const WEAVE_WIDTH: f64 = 2.0;
/// Inner pentagram vertices sit at this fraction of the outer radius
const INNER_RADIUS: f64 = 0.4;

/// Drawing operations the scene needs from a canvas
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    /// Full-surface vertical gradient, top color to bottom color
    fn fill_vertical_gradient(&mut self, top: &str, bottom: &str);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64);
    /// Save the current transform, then translate and rotate
    fn push_transform(&mut self, tx: f64, ty: f64, rotation: f64);
    /// Restore the transform saved by the matching push
    fn pop_transform(&mut self);
    /// Closed polygon in the current transform's coordinates
    fn fill_polygon(&mut self, points: &[DVec2], fill: &str, stroke: &str, stroke_width: f64);
}

/// Five-pointed star outline around the origin
///
/// Outer vertices step by 144 degrees (pentagram order) starting from
/// straight up; each inner vertex sits 72 degrees past its outer one.
pub fn star_points(size: f64) -> [DVec2; 10] {
    let mut points = [DVec2::ZERO; 10];
    for i in 0..5 {
        let outer = (i as f64 * 144.0 - 90.0).to_radians();
        let inner = outer + 72.0_f64.to_radians();
        points[i * 2] = DVec2::from_angle(outer) * size;
        points[i * 2 + 1] = DVec2::from_angle(inner) * (size * INNER_RADIUS);
    }
    points
}

/// Draw one frame: sky, then stars, then the basket on top
pub fn draw_scene<S: Surface>(surface: &mut S, state: &GameState) {
    surface.fill_vertical_gradient(SKY_TOP, SKY_BOTTOM);
    for star in &state.stars {
        draw_star(surface, star);
    }
    draw_basket(surface, &state.basket);
}

fn draw_star<S: Surface>(surface: &mut S, star: &Star) {
    surface.push_transform(star.x + star.size, star.y + star.size, star.rotation);
    surface.fill_polygon(
        &star_points(star.size),
        STAR_FILL,
        STAR_STROKE,
        STAR_STROKE_WIDTH,
    );
    surface.pop_transform();
}

fn draw_basket<S: Surface>(surface: &mut S, basket: &Basket) {
    surface.fill_rect(
        basket.x,
        basket.y,
        basket.width,
        basket.height,
        BASKET_BODY,
    );
    // Rim overhangs the body by 5px on each side
    surface.fill_rect(
        basket.x - 5.0,
        basket.y - 5.0,
        basket.width + 10.0,
        8.0,
        BASKET_RIM,
    );
    for i in 1..=3 {
        let x = basket.x + basket.width / 4.0 * i as f64;
        surface.stroke_line(
            x,
            basket.y,
            x,
            basket.y + basket.height,
            BASKET_WEAVE,
            WEAVE_WIDTH,
        );
    }
}
