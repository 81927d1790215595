//! `Surface` backed by a browser 2D canvas context.

use crate::dom;
use globe_core::Surface;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self::new(ctx))
    }

    /// Append a fresh `width` x `height` canvas to `parent` and wrap it.
    pub fn append_to(
        document: &web::Document,
        parent: &web::Element,
        width: f64,
        height: f64,
    ) -> anyhow::Result<Self> {
        let canvas = dom::create_element(document, "canvas")?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        canvas.set_width(width.max(1.0) as u32);
        canvas.set_height(height.max(1.0) as u32);
        dom::append(parent, &canvas)?;
        Self::from_canvas(&canvas)
    }

    fn log_err(op: &str, r: Result<(), JsValue>) {
        if let Err(e) = r {
            log::warn!("[canvas] {} failed: {:?}", op, e);
        }
    }
}

#[allow(deprecated)]
impl Surface for CanvasSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        let r = self
            .ctx
            .arc_with_anticlockwise(x, y, radius.max(0.0), start, end, anticlockwise);
        Self::log_err("arc", r);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ctx.set_fill_style(&JsValue::from_str(style));
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.ctx.set_stroke_style(&JsValue::from_str(style));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        let dash: js_sys::Array = segments.iter().map(|&s| JsValue::from_f64(s)).collect();
        Self::log_err("set_line_dash", self.ctx.set_line_dash(&dash));
    }

    fn set_line_dash_offset(&mut self, offset: f64) {
        self.ctx.set_line_dash_offset(offset);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_text_align(&mut self, align: &str) {
        self.ctx.set_text_align(align);
    }

    fn set_text_baseline(&mut self, baseline: &str) {
        self.ctx.set_text_baseline(baseline);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        Self::log_err("fill_text", self.ctx.fill_text(text, x, y));
    }
}
