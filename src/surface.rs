//! The drawing surface abstraction.
//!
//! Every engine draws through the [`Surface`] trait rather than holding a
//! canvas context directly. [`CanvasSurface`] is the production
//! implementation over [`web_sys::CanvasRenderingContext2d`]; tests use an
//! operation-recording double. This is the only module that touches
//! `web_sys` types, so everything above it runs natively.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use thiserror::Error;
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

/// Error raised by a fallible drawing-surface operation.
///
/// Failures never cross the engine boundary: internals compose with `?` and
/// the canvas-bound [`crate::engine::Editor`] logs and swallows the result.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// A 2D-context operation was rejected by the host.
    #[error("2d context operation failed: {0}")]
    Context(String),
    /// Pixel snapshot capture or restore failed.
    #[error("pixel snapshot failed: {0}")]
    Pixels(String),
}

/// A raw RGBA capture of the entire surface.
///
/// Saved before a rubber-band gesture begins and restored on every preview
/// frame to erase the previous preview without touching committed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSnapshot {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Immediate-mode 2D drawing operations consumed by the editor engines.
///
/// Modeled on the `Canvas2D` API: path construction, stroke/fill, clip
/// regions, style attributes under `save`/`restore`, and whole-surface pixel
/// snapshots. Point containment is deliberately absent; hit-testing uses
/// [`crate::polygon::Polygon::contains`].
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Push the style-attribute and clip-region stack.
    fn save(&mut self);
    /// Pop the style-attribute and clip-region stack.
    fn restore(&mut self);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    /// Append a full or partial circle to the current path.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Context`] if the host rejects the arc.
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), SurfaceError>;
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Intersect the clip region with the current path.
    fn clip(&mut self);
    fn stroke(&mut self);
    fn fill(&mut self);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// # Errors
    ///
    /// Returns [`SurfaceError::Context`] if the transform is rejected.
    fn translate(&mut self, x: f64, y: f64) -> Result<(), SurfaceError>;
    /// # Errors
    ///
    /// Returns [`SurfaceError::Context`] if the transform is rejected.
    fn rotate(&mut self, radians: f64) -> Result<(), SurfaceError>;

    fn set_stroke_style(&mut self, style: &str);
    fn set_fill_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_shadow_color(&mut self, color: &str);
    fn set_shadow_offset_x(&mut self, offset: f64);
    fn set_shadow_offset_y(&mut self, offset: f64);
    fn set_shadow_blur(&mut self, blur: f64);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: &str);
    fn set_text_baseline(&mut self, baseline: &str);

    /// # Errors
    ///
    /// Returns [`SurfaceError::Context`] if text rendering fails.
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SurfaceError>;

    /// Capture the whole surface as raw pixels.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Pixels`] if the pixel buffer is unavailable.
    fn save_pixels(&mut self) -> Result<PixelSnapshot, SurfaceError>;
    /// Restore a previously captured snapshot, replacing all pixels.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Pixels`] if the snapshot cannot be written back.
    fn restore_pixels(&mut self, snapshot: &PixelSnapshot) -> Result<(), SurfaceError>;
}

/// Production surface over a browser canvas 2D context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Bind to the 2D context of the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Context`] if the element has no usable
    /// 2D context.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(context_err)?
            .ok_or_else(|| SurfaceError::Context("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::Context("element returned a non-2d context".into()))?;
        Ok(Self {
            ctx,
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
        })
    }
}

fn context_err(value: JsValue) -> SurfaceError {
    SurfaceError::Context(format!("{value:?}"))
}

fn pixels_err(value: JsValue) -> SurfaceError {
    SurfaceError::Pixels(format!("{value:?}"))
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
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

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), SurfaceError> {
        self.ctx.arc(x, y, radius, start, end).map_err(context_err)
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.rect(x, y, width, height);
    }

    fn clip(&mut self) {
        self.ctx.clip();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        self.ctx.translate(x, y).map_err(context_err)
    }

    fn rotate(&mut self, radians: f64) -> Result<(), SurfaceError> {
        self.ctx.rotate(radians).map_err(context_err)
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.ctx.set_stroke_style_str(style);
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_shadow_color(&mut self, color: &str) {
        self.ctx.set_shadow_color(color);
    }

    fn set_shadow_offset_x(&mut self, offset: f64) {
        self.ctx.set_shadow_offset_x(offset);
    }

    fn set_shadow_offset_y(&mut self, offset: f64) {
        self.ctx.set_shadow_offset_y(offset);
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        self.ctx.set_shadow_blur(blur);
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

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SurfaceError> {
        self.ctx.fill_text(text, x, y).map_err(context_err)
    }

    fn save_pixels(&mut self) -> Result<PixelSnapshot, SurfaceError> {
        let image = self
            .ctx
            .get_image_data(0.0, 0.0, self.width, self.height)
            .map_err(pixels_err)?;
        Ok(PixelSnapshot {
            width: image.width(),
            height: image.height(),
            data: image.data().to_vec(),
        })
    }

    fn restore_pixels(&mut self, snapshot: &PixelSnapshot) -> Result<(), SurfaceError> {
        let image = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(snapshot.data.as_slice()),
            snapshot.width,
            snapshot.height,
        )
        .map_err(pixels_err)?;
        self.ctx.put_image_data(&image, 0.0, 0.0).map_err(pixels_err)
    }
}
