//! 2D canvas implementation of `DrawSurface`

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::renderer::{DrawSurface, TextAlign};
use crate::tuning::Viewport;

/// Font family used for every text draw
const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a canvas element, acquiring its 2D context
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Look up a canvas by element id
    pub fn from_element_id(id: &str) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{id}")))?
            .dyn_into::<HtmlCanvasElement>()?;
        Self::new(canvas)
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Size the canvas backing store to the page and report the new viewport
    pub fn fit_to_window(&self) -> Viewport {
        let (w, h) = web_sys::window()
            .map(|window| {
                let width = window
                    .document()
                    .and_then(|d| d.body())
                    .map(|b| b.client_width() as f64)
                    .unwrap_or(0.0);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);
                (width, height)
            })
            .unwrap_or((0.0, 0.0));

        let viewport = Viewport::new(w as f32, h as f32);
        self.canvas.set_width(viewport.width as u32);
        self.canvas.set_height(viewport.height as u32);
        viewport
    }

    /// JSON from the canvas `data-settings` attribute, if any
    pub fn settings_json(&self) -> Option<String> {
        self.canvas.get_attribute("data-settings")
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            x as f64,
            y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.stroke();
        self.ctx.fill();
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: &str, align: TextAlign) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(&format!("{}px {}", size.round(), FONT_FAMILY));
        self.ctx.set_text_align(align.as_str());
        self.ctx.set_text_baseline("top");
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
