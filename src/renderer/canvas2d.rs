//! Canvas 2D backend (browser only)

use glam::DVec2;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use crate::sim::Rgb;

/// Draws onto an `HtmlCanvasElement` through its 2D context
pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    /// Acquire the 2D context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    fn circle_path(&self, center: DVec2, radius: f64) {
        self.ctx.begin_path();
        // arc() only fails on a negative radius
        let _ = self
            .ctx
            .arc(center.x, center.y, radius.max(0.0), 0.0, std::f64::consts::TAU);
    }
}

impl Surface for Canvas2d {
    fn clear(&mut self, width: f64, height: f64, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, color: Rgb, line_width: f64) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width);
        self.circle_path(center, radius);
        self.ctx.stroke();
    }
}
