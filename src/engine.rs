//! The tool-mode coordinator.
//!
//! [`EditorCore`] owns the scene, the host-supplied configuration, and all
//! gesture/rotation transients, and dispatches each pointer event to exactly
//! one engine selected by the active [`ToolMode`]. It draws through any
//! [`Surface`], so the full interaction lifecycle is testable without a
//! browser. [`Editor`] binds a core to a real canvas element and is the one
//! place surface errors are logged and dropped.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use web_sys::HtmlCanvasElement;

use crate::consts::{GRID_COLOR, GRID_STEP_X, GRID_STEP_Y};
use crate::dial;
use crate::eraser;
use crate::geom::{angle_to, Point, Rect};
use crate::grid;
use crate::hit;
use crate::input::{Cursor, GestureState, RotationState, StyleConfig, ToolMode};
use crate::polygon::{Polygon, PolygonId};
use crate::render;
use crate::scene::Scene;
use crate::surface::{CanvasSurface, PixelSnapshot, Surface, SurfaceError};

/// Events returned from handlers for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The pointer affordance changed; apply to the canvas element.
    SetCursor(Cursor),
    /// A rubber-band gesture committed a new polygon to the scene.
    PolygonCommitted(PolygonId),
    /// A polygon was engaged as the rotation pivot.
    PivotEngaged(PolygonId),
    /// A pending rotation delta was folded into the pivot's start angle.
    RotationCommitted(PolygonId),
    /// Global erase emptied the scene.
    SceneCleared,
}

/// Core editor state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Editor`] so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug, Default)]
pub struct EditorCore {
    pub scene: Scene,
    pub config: StyleConfig,
    pub mode: ToolMode,
    pub gesture: GestureState,
    pub rotation: RotationState,
    /// Pixel baseline restored on every rubber-band frame. Persists until
    /// the next explicit save.
    pub snapshot: Option<PixelSnapshot>,
}

impl EditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// First paint: grid plus any pre-loaded polygons, and a fresh snapshot
    /// baseline.
    ///
    /// # Errors
    ///
    /// Propagates the first failed surface operation.
    pub fn init<S: Surface>(&mut self, surface: &mut S) -> Result<(), SurfaceError> {
        render::redraw(surface, &self.scene)?;
        self.snapshot = Some(surface.save_pixels()?);
        Ok(())
    }

    /// Replace the scene with a host-supplied snapshot of polygons.
    pub fn load(&mut self, polygons: Vec<Polygon>) {
        self.scene.load(polygons);
    }

    /// Switch the active tool.
    ///
    /// Leaving rotate mode commits any pending rotation (using the last
    /// observed pointer position) and repaints the committed scene. Every
    /// switch resets the gesture and reports the new cursor affordance.
    ///
    /// # Errors
    ///
    /// Propagates the first failed surface operation.
    pub fn set_mode<S: Surface>(
        &mut self,
        surface: &mut S,
        mode: ToolMode,
    ) -> Result<Vec<Action>, SurfaceError> {
        let mut actions = Vec::new();
        if self.mode == ToolMode::Rotate && mode != ToolMode::Rotate {
            if let Some(committed) = self.commit_rotation(self.rotation.last) {
                actions.push(committed);
            }
            render::redraw(surface, &self.scene)?;
        }
        self.mode = mode;
        self.gesture = GestureState::Idle;
        log::debug!("tool mode changed to {mode:?}");
        actions.push(Action::SetCursor(mode.cursor()));
        Ok(actions)
    }

    /// Clear the surface, repaint the grid, empty the scene, and establish a
    /// fresh snapshot baseline. Available from any mode.
    ///
    /// # Errors
    ///
    /// Propagates the first failed surface operation.
    pub fn erase_all<S: Surface>(&mut self, surface: &mut S) -> Result<Vec<Action>, SurfaceError> {
        grid::draw(surface, GRID_COLOR, GRID_STEP_X, GRID_STEP_Y);
        self.scene.clear();
        self.gesture = GestureState::Idle;
        self.rotation.reset();
        self.snapshot = Some(surface.save_pixels()?);
        log::debug!("scene cleared");
        Ok(vec![Action::SceneCleared])
    }

    // --- Pointer events ---

    /// # Errors
    ///
    /// Propagates the first failed surface operation.
    pub fn pointer_down<S: Surface>(
        &mut self,
        surface: &mut S,
        loc: Point,
    ) -> Result<Vec<Action>, SurfaceError> {
        match self.mode {
            ToolMode::Draw => self.begin_rubber_band(surface, loc),
            ToolMode::Edit => Ok(self.begin_drag(loc)),
            ToolMode::Rotate => self.rotate_down(surface, loc),
            ToolMode::Erase => {
                self.gesture = GestureState::Erasing { last: loc };
                Ok(Vec::new())
            }
        }
    }

    /// # Errors
    ///
    /// Propagates the first failed surface operation.
    pub fn pointer_move<S: Surface>(
        &mut self,
        surface: &mut S,
        loc: Point,
    ) -> Result<Vec<Action>, SurfaceError> {
        match self.mode {
            ToolMode::Draw => self.update_rubber_band(surface, loc),
            ToolMode::Edit => self.update_drag(surface, loc),
            ToolMode::Rotate => self.update_rotation(surface, loc),
            ToolMode::Erase => self.update_erase(surface, loc),
        }
    }

    /// # Errors
    ///
    /// Propagates the first failed surface operation.
    pub fn pointer_up<S: Surface>(
        &mut self,
        surface: &mut S,
        loc: Point,
    ) -> Result<Vec<Action>, SurfaceError> {
        match self.mode {
            ToolMode::Draw => self.finish_rubber_band(surface, loc),
            ToolMode::Edit => {
                self.gesture = GestureState::Idle;
                Ok(Vec::new())
            }
            // Rotation outlives the gesture; it commits on the next
            // pointer-down or on mode exit.
            ToolMode::Rotate => Ok(Vec::new()),
            ToolMode::Erase => self.finish_erase(surface),
        }
    }

    // --- Rubber band (draw mode) ---

    fn begin_rubber_band<S: Surface>(
        &mut self,
        surface: &mut S,
        loc: Point,
    ) -> Result<Vec<Action>, SurfaceError> {
        self.snapshot = Some(surface.save_pixels()?);
        self.gesture = GestureState::RubberBanding { anchor: loc, last: loc };
        Ok(Vec::new())
    }

    fn update_rubber_band<S: Surface>(
        &mut self,
        surface: &mut S,
        loc: Point,
    ) -> Result<Vec<Action>, SurfaceError> {
        let GestureState::RubberBanding { anchor, .. } = self.gesture else {
            return Ok(Vec::new());
        };
        let Some(snapshot) = self.snapshot.as_ref() else {
            return Ok(Vec::new());
        };
        surface.restore_pixels(snapshot)?;

        let preview = self.rubber_band_polygon(anchor, loc);
        render::draw_polygon(surface, &preview, None)?;
        if self.config.guidewires {
            render::draw_guidewires(surface, anchor);
        }

        self.gesture = GestureState::RubberBanding { anchor, last: loc };
        Ok(Vec::new())
    }

    fn finish_rubber_band<S: Surface>(
        &mut self,
        surface: &mut S,
        loc: Point,
    ) -> Result<Vec<Action>, SurfaceError> {
        let GestureState::RubberBanding { anchor, .. } = self.gesture else {
            return Ok(Vec::new());
        };
        self.gesture = GestureState::Idle;
        let Some(snapshot) = self.snapshot.as_ref() else {
            return Ok(Vec::new());
        };
        surface.restore_pixels(snapshot)?;

        let polygon = self.rubber_band_polygon(anchor, loc);
        render::draw_polygon(surface, &polygon, None)?;
        let id = self.scene.insert(polygon);
        log::debug!("polygon committed: {id}");
        Ok(vec![Action::PolygonCommitted(id)])
    }

    /// The preview/commit polygon for the current rubber band: centered at
    /// the anchor, radius = bounding-rectangle width (deliberately the
    /// width, not the diagonal).
    fn rubber_band_polygon(&self, anchor: Point, loc: Point) -> Polygon {
        let band = Rect::from_corners(anchor, loc);
        Polygon::new(
            anchor,
            band.width,
            self.config.sides,
            self.config.start_angle_deg.to_radians(),
            self.config.stroke_style.clone(),
            self.config.fill_style.clone(),
            self.config.filled,
        )
    }

    // --- Drag (edit mode) ---

    fn begin_drag(&mut self, loc: Point) -> Vec<Action> {
        if let Some(id) = hit::hit_test(&self.scene, loc) {
            if let Some(polygon) = self.scene.get(&id) {
                self.gesture = GestureState::DraggingPolygon {
                    id,
                    offset_x: loc.x - polygon.center_x,
                    offset_y: loc.y - polygon.center_y,
                };
            }
        }
        Vec::new()
    }

    fn update_drag<S: Surface>(
        &mut self,
        surface: &mut S,
        loc: Point,
    ) -> Result<Vec<Action>, SurfaceError> {
        let GestureState::DraggingPolygon { id, offset_x, offset_y } = self.gesture else {
            return Ok(Vec::new());
        };
        if let Some(polygon) = self.scene.get_mut(&id) {
            polygon.move_to(loc.x - offset_x, loc.y - offset_y);
        }
        render::redraw(surface, &self.scene)?;
        Ok(Vec::new())
    }

    // --- Rotation (rotate mode) ---

    fn rotate_down<S: Surface>(
        &mut self,
        surface: &mut S,
        loc: Point,
    ) -> Result<Vec<Action>, SurfaceError> {
        let mut actions = Vec::new();

        if self.rotation.pivot.is_some() {
            if let Some(committed) = self.commit_rotation(loc) {
                actions.push(committed);
            }
            render::redraw(surface, &self.scene)?;
        }

        if let Some(id) = hit::hit_test(&self.scene, loc) {
            self.rotation.pivot = Some(id);
            if let Some(pivot) = self.scene.get(&id) {
                dial::draw_annotations(surface, pivot, loc)?;
                if !self.rotation.lock_engaged {
                    self.rotation.lock_engaged = true;
                    self.rotation.lock_angle = angle_to(pivot.center(), loc);
                }
            }
            self.rotation.last = loc;
            actions.push(Action::PivotEngaged(id));
        }

        Ok(actions)
    }

    fn update_rotation<S: Surface>(
        &mut self,
        surface: &mut S,
        loc: Point,
    ) -> Result<Vec<Action>, SurfaceError> {
        let Some(id) = self.rotation.pivot else {
            return Ok(Vec::new());
        };
        if !self.rotation.lock_engaged {
            return Ok(Vec::new());
        }

        render::redraw(surface, &self.scene)?;
        if let Some(pivot) = self.scene.get(&id) {
            let delta = angle_to(pivot.center(), loc) - self.rotation.lock_angle;
            render::draw_polygon(surface, pivot, Some(delta))?;
            dial::draw_annotations(surface, pivot, loc)?;
        }
        self.rotation.last = loc;
        Ok(Vec::new())
    }

    /// Fold the pending delta (lock angle → `loc`) into the pivot's start
    /// angle and disengage. Returns the commit action if a locked pivot was
    /// still in the scene.
    fn commit_rotation(&mut self, loc: Point) -> Option<Action> {
        let id = self.rotation.pivot?;
        let mut committed = None;
        if self.rotation.lock_engaged {
            if let Some(pivot) = self.scene.get_mut(&id) {
                let delta = angle_to(pivot.center(), loc) - self.rotation.lock_angle;
                pivot.start_angle += delta;
                log::debug!("rotation committed: {id} delta {delta:.4}");
                committed = Some(Action::RotationCommitted(id));
            }
        }
        self.rotation.reset();
        committed
    }

    // --- Eraser (erase mode) ---

    fn update_erase<S: Surface>(
        &mut self,
        surface: &mut S,
        loc: Point,
    ) -> Result<Vec<Action>, SurfaceError> {
        let GestureState::Erasing { last } = self.gesture else {
            return Ok(Vec::new());
        };
        eraser::erase_last(surface, last, self.config.eraser_width, self.config.eraser_shape)?;
        eraser::draw_indicator(surface, loc, self.config.eraser_width, self.config.eraser_shape)?;
        self.gesture = GestureState::Erasing { last: loc };
        Ok(Vec::new())
    }

    fn finish_erase<S: Surface>(&mut self, surface: &mut S) -> Result<Vec<Action>, SurfaceError> {
        let GestureState::Erasing { last } = self.gesture else {
            return Ok(Vec::new());
        };
        self.gesture = GestureState::Idle;
        eraser::erase_last(surface, last, self.config.eraser_width, self.config.eraser_shape)?;
        Ok(Vec::new())
    }
}

/// The full editor. Wraps [`EditorCore`] and binds it to a browser canvas.
///
/// Handler failures never escape: they are logged here and the handler
/// behaves as a no-op, matching the editor's silent-failure contract.
pub struct Editor {
    surface: CanvasSurface,
    pub core: EditorCore,
}

impl Editor {
    /// Create an editor bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Context`] if the element has no usable 2D
    /// context.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, SurfaceError> {
        Ok(Self {
            surface: CanvasSurface::new(canvas)?,
            core: EditorCore::new(),
        })
    }

    /// First paint and snapshot baseline.
    pub fn init(&mut self) {
        if let Err(err) = self.core.init(&mut self.surface) {
            log::warn!("initial paint failed: {err}");
        }
    }

    /// Replace the scene with a host-supplied snapshot and repaint.
    pub fn load(&mut self, polygons: Vec<Polygon>) {
        self.core.load(polygons);
        if let Err(err) = render::redraw(&mut self.surface, &self.core.scene) {
            log::warn!("scene repaint failed: {err}");
        }
    }

    /// Replace the style configuration.
    pub fn set_config(&mut self, config: StyleConfig) {
        self.core.config = config;
    }

    pub fn set_mode(&mut self, mode: ToolMode) -> Vec<Action> {
        Self::sink(self.core.set_mode(&mut self.surface, mode), "mode switch")
    }

    pub fn erase_all(&mut self) -> Vec<Action> {
        Self::sink(self.core.erase_all(&mut self.surface), "global erase")
    }

    pub fn on_pointer_down(&mut self, loc: Point) -> Vec<Action> {
        Self::sink(self.core.pointer_down(&mut self.surface, loc), "pointer-down")
    }

    pub fn on_pointer_move(&mut self, loc: Point) -> Vec<Action> {
        Self::sink(self.core.pointer_move(&mut self.surface, loc), "pointer-move")
    }

    pub fn on_pointer_up(&mut self, loc: Point) -> Vec<Action> {
        Self::sink(self.core.pointer_up(&mut self.surface, loc), "pointer-up")
    }

    fn sink(result: Result<Vec<Action>, SurfaceError>, what: &str) -> Vec<Action> {
        match result {
            Ok(actions) => actions,
            Err(err) => {
                log::warn!("{what} failed: {err}");
                Vec::new()
            }
        }
    }
}
