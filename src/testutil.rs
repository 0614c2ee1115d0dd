//! Test doubles shared by the colocated test modules.
//!
//! `TestSurface` records every operation so tests can assert on draw
//! behavior, and keeps a simple frame model (paint operations append marker
//! bytes; a pixel restore replaces the frame wholesale) so the snapshot
//! save/restore contract is observable without a browser.

use crate::surface::{PixelSnapshot, Surface, SurfaceError};

/// One recorded surface operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Save,
    Restore,
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    Arc { x: f64, y: f64, radius: f64 },
    RectPath { x: f64, y: f64, width: f64, height: f64 },
    Clip,
    Stroke,
    Fill,
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    Translate(f64, f64),
    Rotate(f64),
    StrokeStyle(String),
    FillStyle(String),
    LineWidth(f64),
    ShadowColor(String),
    ShadowOffsetX(f64),
    ShadowOffsetY(f64),
    ShadowBlur(f64),
    Font(String),
    TextAlign(String),
    TextBaseline(String),
    FillText { text: String, x: f64, y: f64 },
    SavePixels,
    RestorePixels,
}

/// Frame marker bytes appended by paint operations.
const MARK_STROKE: u8 = 1;
const MARK_FILL: u8 = 2;
const MARK_CLEAR: u8 = 3;
const MARK_TEXT: u8 = 4;

/// An operation-recording `Surface` double.
pub struct TestSurface {
    width: f64,
    height: f64,
    /// Every operation, in call order.
    pub ops: Vec<Op>,
    /// Marker-byte frame model mutated by paint operations.
    pub frame: Vec<u8>,
    /// Current save/restore nesting depth; must return to zero after every
    /// handler.
    pub depth: i32,
}

impl TestSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
            frame: Vec::new(),
            depth: 0,
        }
    }

    /// Number of recorded operations matching `pred`.
    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    /// Whether any recorded operation matches `pred`.
    pub fn recorded(&self, pred: impl Fn(&Op) -> bool) -> bool {
        self.ops.iter().any(pred)
    }

    /// Index of the first operation matching `pred`, if any.
    pub fn position(&self, pred: impl Fn(&Op) -> bool) -> Option<usize> {
        self.ops.iter().position(|op| pred(op))
    }

    /// Forget recorded operations (the frame model is kept).
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl Surface for TestSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn save(&mut self) {
        self.depth += 1;
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        self.depth -= 1;
        self.ops.push(Op::Restore);
    }

    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }

    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, _start: f64, _end: f64) -> Result<(), SurfaceError> {
        self.ops.push(Op::Arc { x, y, radius });
        Ok(())
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::RectPath { x, y, width, height });
    }

    fn clip(&mut self) {
        self.ops.push(Op::Clip);
    }

    fn stroke(&mut self) {
        self.frame.push(MARK_STROKE);
        self.ops.push(Op::Stroke);
    }

    fn fill(&mut self) {
        self.frame.push(MARK_FILL);
        self.ops.push(Op::Fill);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.frame.push(MARK_CLEAR);
        self.ops.push(Op::ClearRect { x, y, width, height });
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        self.ops.push(Op::Translate(x, y));
        Ok(())
    }

    fn rotate(&mut self, radians: f64) -> Result<(), SurfaceError> {
        self.ops.push(Op::Rotate(radians));
        Ok(())
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.ops.push(Op::StrokeStyle(style.into()));
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ops.push(Op::FillStyle(style.into()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::LineWidth(width));
    }

    fn set_shadow_color(&mut self, color: &str) {
        self.ops.push(Op::ShadowColor(color.into()));
    }

    fn set_shadow_offset_x(&mut self, offset: f64) {
        self.ops.push(Op::ShadowOffsetX(offset));
    }

    fn set_shadow_offset_y(&mut self, offset: f64) {
        self.ops.push(Op::ShadowOffsetY(offset));
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        self.ops.push(Op::ShadowBlur(blur));
    }

    fn set_font(&mut self, font: &str) {
        self.ops.push(Op::Font(font.into()));
    }

    fn set_text_align(&mut self, align: &str) {
        self.ops.push(Op::TextAlign(align.into()));
    }

    fn set_text_baseline(&mut self, baseline: &str) {
        self.ops.push(Op::TextBaseline(baseline.into()));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SurfaceError> {
        self.frame.push(MARK_TEXT);
        self.ops.push(Op::FillText { text: text.into(), x, y });
        Ok(())
    }

    fn save_pixels(&mut self) -> Result<PixelSnapshot, SurfaceError> {
        self.ops.push(Op::SavePixels);
        Ok(PixelSnapshot {
            width: self.width as u32,
            height: self.height as u32,
            data: self.frame.clone(),
        })
    }

    fn restore_pixels(&mut self, snapshot: &PixelSnapshot) -> Result<(), SurfaceError> {
        self.ops.push(Op::RestorePixels);
        self.frame = snapshot.data.clone();
        Ok(())
    }
}
