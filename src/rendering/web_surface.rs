//! Browser canvas backend.
//!
//! The viewport transform is handed to the 2D context with `setTransform`,
//! so plane-space geometry and pre-divided radii come out at constant
//! apparent size. The host must register its wheel listener with
//! `passive: false` to be able to honor `InputResponse::prevent_default`.

use crate::{
    core::geo::{Point, Size},
    rendering::{style::Color, surface::DrawSurface},
};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub struct WebCanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl WebCanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn log_js_error(op: &str, result: Result<(), JsValue>) {
        if let Err(err) = result {
            log::warn!("canvas {op} failed: {err:?}");
        }
    }

    #[allow(deprecated)]
    fn set_fill(&self, color: Color) {
        self.ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
    }

    #[allow(deprecated)]
    fn set_stroke(&self, color: Color, width: f64) {
        self.ctx.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.ctx.set_line_width(width);
    }

    fn circle_path(&self, center: Point, radius: f64) {
        self.ctx.begin_path();
        Self::log_js_error(
            "arc",
            self.ctx
                .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU),
        );
    }
}

impl DrawSurface for WebCanvasSurface {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn clear(&mut self) {
        Self::log_js_error("resetTransform", self.ctx.reset_transform());
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn set_transform(&mut self, pan: Point, scale: f64) {
        Self::log_js_error(
            "setTransform",
            self.ctx.set_transform(scale, 0.0, 0.0, scale, pan.x, pan.y),
        );
    }

    fn reset_transform(&mut self) {
        Self::log_js_error("resetTransform", self.ctx.reset_transform());
    }

    fn fill_rect(&mut self, min: Point, max: Point, color: Color) {
        self.set_fill(color);
        self.ctx.fill_rect(min.x, min.y, max.x - min.x, max.y - min.y);
    }

    fn line(&mut self, from: Point, to: Point, width: f64, color: Color) {
        self.set_stroke(color, width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.set_fill(color);
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Color) {
        self.set_stroke(color, width);
        self.circle_path(center, radius);
        self.ctx.stroke();
    }
}
