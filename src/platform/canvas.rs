//! 2D canvas implementation of the drawing surface

use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::render::Surface;
use crate::ui::InitError;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, InitError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| InitError::MissingCollaborators(vec!["gameCanvas 2d context"]))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    /// Backing-store size, re-read every call so resizes take effect
    /// on the next frame
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn fill_vertical_gradient(&mut self, top: &str, bottom: &str) {
        let (w, h) = (self.width(), self.height());
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
        let _ = gradient.add_color_stop(0.0, top);
        let _ = gradient.add_color_stop(1.0, bottom);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, w, h);
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(x1, y1);
        self.ctx.line_to(x2, y2);
        self.ctx.stroke();
    }

    fn push_transform(&mut self, tx: f64, ty: f64, rotation: f64) {
        self.ctx.save();
        let _ = self.ctx.translate(tx, ty);
        let _ = self.ctx.rotate(rotation);
    }

    fn pop_transform(&mut self) {
        self.ctx.restore();
    }

    fn fill_polygon(&mut self, points: &[DVec2], fill: &str, stroke: &str, stroke_width: f64) {
        let Some(first) = points.first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for point in &points[1..] {
            self.ctx.line_to(point.x, point.y);
        }
        self.ctx.close_path();
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill();
        self.ctx.set_stroke_style_str(stroke);
        self.ctx.set_line_width(stroke_width);
        self.ctx.stroke();
    }
}
