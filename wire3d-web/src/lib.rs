/// Wire3D Web - WASM wireframe viewer drawing on an HTML canvas
///
/// `CanvasSurface` adapts a 2D canvas context to the core `DrawSurface`,
/// and `WebViewer` exposes heading/pitch control to JavaScript.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wire3d_core::{Color, DrawSurface, Orientation, Renderer};

fn css_color(c: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// [`DrawSurface`] backed by a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
        })
    }
}

impl DrawSurface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_color(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&css_color(color));
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    // The canvas API silently ignores non-finite coordinates
    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        // only fails for a detached context
        let _ = self.ctx.translate(dx, dy);
    }

    fn clear(&mut self, background: Color) {
        self.ctx.save();
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.set_fill_style_str(&css_color(background));
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
        self.ctx.restore();
    }
}

#[wasm_bindgen]
pub struct WebViewer {
    surface: CanvasSurface,
    renderer: Renderer,
    orientation: Orientation,
}

#[wasm_bindgen]
impl WebViewer {
    /// Attach to the `<canvas>` element with the given id
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WebViewer, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("'{}' is not a canvas", canvas_id)))?;

        Ok(WebViewer {
            surface: CanvasSurface::new(&canvas)?,
            renderer: Renderer::default(),
            orientation: Orientation::default(),
        })
    }

    pub fn heading(&self) -> i32 {
        self.orientation.heading
    }

    pub fn pitch(&self) -> i32 {
        self.orientation.pitch
    }

    pub fn set_heading(&mut self, heading: i32) -> Result<(), JsValue> {
        self.orientation = Orientation::try_new(heading, self.orientation.pitch)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    pub fn set_pitch(&mut self, pitch: i32) -> Result<(), JsValue> {
        self.orientation = Orientation::try_new(self.orientation.heading, pitch)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Clear and redraw the wireframe for the current angles
    pub fn render(&mut self) {
        self.renderer.paint(self.orientation, &mut self.surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire3d_core::{BLACK, RED, WHITE};

    #[test]
    fn test_css_color() {
        assert_eq!(css_color(BLACK), "#000000");
        assert_eq!(css_color(WHITE), "#ffffff");
        assert_eq!(css_color(RED), "#ff0000");
        assert_eq!(css_color(Color::new(1, 171, 16)), "#01ab10");
    }
}
