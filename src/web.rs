//! Browser host: a canvas-backed [`DrawSurface`] and a `wasm-bindgen`
//! viewer that page scripts drive with pointer and wheel events.
//!
//! ```js
//! const canvas = document.querySelector("canvas");
//! const viewer = new WebViewer(canvas);
//! canvas.onmousedown = (e) => viewer.pointer_down(e.offsetX, e.offsetY);
//! canvas.onwheel = (e) => { if (viewer.wheel(e.deltaY)) e.preventDefault(); };
//! ```

use std::f64::consts::TAU;

use glam::DVec2;
use wasm_bindgen::prelude::{wasm_bindgen, JsValue};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::chain::Rgb;
use crate::engine::ChainEngine;
use crate::error::ChainViewError;
use crate::input::{Cursor, InputEvent};
use crate::options::{ChainOptions, Options};
use crate::renderer::DrawSurface;

impl From<ChainViewError> for JsValue {
    fn from(e: ChainViewError) -> Self {
        Self::from_str(&e.to_string())
    }
}

/// Route `log` output to the browser console and panics to
/// `console.error`.
#[wasm_bindgen(start)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// [`DrawSurface`] over a canvas 2D context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`.
    pub fn from_canvas(
        canvas: &HtmlCanvasElement,
    ) -> Result<Self, ChainViewError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| ChainViewError::Surface(format!("{e:?}")))?
            .ok_or_else(|| {
                ChainViewError::Surface("canvas has no 2d context".to_owned())
            })?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| {
                ChainViewError::Surface(
                    "context is not a CanvasRenderingContext2d".to_owned(),
                )
            })?;
        Ok(Self { ctx })
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Rgb, width: f64) {
        self.ctx.set_stroke_style_str(&color.to_hex());
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(center.x, center.y, radius, 0.0, TAU) {
            log::warn!("canvas arc failed: {e:?}");
            return;
        }
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx.fill();
    }
}

/// Interactive chain viewer bound to one canvas.
#[wasm_bindgen]
pub struct WebViewer {
    engine: ChainEngine,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl WebViewer {
    /// Size `canvas` to the default viewport, generate a chain, and draw
    /// it.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: &HtmlCanvasElement) -> Result<WebViewer, JsValue> {
        let options = Options::default();
        canvas.set_width(options.viewport.width as u32);
        canvas.set_height(options.viewport.height as u32);
        let surface = CanvasSurface::from_canvas(canvas)?;
        let mut viewer = Self {
            engine: ChainEngine::new(options),
            surface,
        };
        viewer.redraw_now();
        Ok(viewer)
    }

    /// Generate a new chain from slider values and redraw.
    pub fn regenerate(&mut self, residue_count: usize, angle_resolution: u32) {
        self.engine.set_chain_options(ChainOptions {
            residue_count,
            angle_resolution,
            ..self.engine.options().chain.clone()
        });
        self.engine.regenerate();
        self.redraw_now();
    }

    /// Pointer pressed at surface coordinates.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.dispatch(InputEvent::PointerDown { x, y });
    }

    /// Pointer moved; `shift` selects rotation instead of panning.
    pub fn pointer_move(&mut self, x: f64, y: f64, shift: bool) {
        self.dispatch(InputEvent::PointerMove {
            x,
            y,
            modifier: shift,
        });
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) {
        self.dispatch(InputEvent::PointerUp);
    }

    /// Pointer left the canvas.
    pub fn pointer_leave(&mut self) {
        self.dispatch(InputEvent::PointerLeave);
    }

    /// Wheel notch. Returns whether the page should `preventDefault`.
    pub fn wheel(&mut self, delta: f64) -> bool {
        let event = InputEvent::Wheel { delta };
        self.dispatch(event);
        event.suppresses_default()
    }

    /// CSS cursor for the canvas.
    #[must_use]
    pub fn cursor(&self) -> String {
        match self.engine.cursor() {
            Cursor::Grab => "grab".to_owned(),
            Cursor::Grabbing => "grabbing".to_owned(),
        }
    }

    /// JSON schema of the UI-exposed options.
    pub fn options_schema() -> Result<String, JsValue> {
        Ok(Options::json_schema_string()?)
    }
}

impl WebViewer {
    fn dispatch(&mut self, event: InputEvent) {
        if self.engine.handle_input(event) {
            self.redraw_now();
        }
    }

    fn redraw_now(&mut self) {
        self.engine.render(&mut self.surface);
    }
}
