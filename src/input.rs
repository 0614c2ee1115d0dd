//! Input model: tool modes, cursor affordances, style configuration, and
//! gesture state.
//!
//! `StyleConfig` captures the host-supplied parameters at the time of a
//! pointer event. `GestureState` is the active gesture tracked between
//! pointer-down and pointer-up, carrying the context needed to compute
//! deltas. `RotationState` deliberately outlives gestures: a pivot engages
//! on one click and commits on the next.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ERASER_WIDTH, DEFAULT_FILL_STYLE, DEFAULT_SIDES, DEFAULT_STROKE_STYLE};
use crate::geom::Point;
use crate::polygon::PolygonId;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolMode {
    /// Rubber-band a new polygon (default).
    #[default]
    Draw,
    /// Select and drag existing polygons.
    Edit,
    /// Engage a pivot polygon and rotate it.
    Rotate,
    /// Erase with a clipped grid repaint.
    Erase,
}

impl ToolMode {
    /// The pointer affordance the host should show for this mode.
    #[must_use]
    pub fn cursor(self) -> Cursor {
        match self {
            Self::Draw => Cursor::Crosshair,
            Self::Edit => Cursor::Grab,
            Self::Rotate | Self::Erase => Cursor::Pointer,
        }
    }
}

/// Pointer affordance reported to the host on mode changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Crosshair,
    Pointer,
    Grab,
}

impl Cursor {
    /// The CSS cursor keyword for this affordance.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Crosshair => "crosshair",
            Self::Pointer => "pointer",
            Self::Grab => "grab",
        }
    }
}

/// Footprint shape of the eraser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EraserShape {
    #[default]
    Circle,
    Square,
}

/// Host-supplied style parameters, read per operation and never validated
/// beyond type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Stroke color for new polygons.
    pub stroke_style: String,
    /// Fill color for new polygons.
    pub fill_style: String,
    /// Side count for new polygons; expected ≥ 3.
    pub sides: u32,
    /// Start angle for new polygons, in degrees.
    pub start_angle_deg: f64,
    /// Whether new polygons are filled.
    pub filled: bool,
    /// Eraser footprint size, in pixels.
    pub eraser_width: f64,
    /// Eraser footprint shape.
    pub eraser_shape: EraserShape,
    /// Whether to draw an anchor crosshair during rubber-banding.
    pub guidewires: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_style: DEFAULT_STROKE_STYLE.into(),
            fill_style: DEFAULT_FILL_STYLE.into(),
            sides: DEFAULT_SIDES,
            start_angle_deg: 0.0,
            filled: false,
            eraser_width: DEFAULT_ERASER_WIDTH,
            eraser_shape: EraserShape::default(),
            guidewires: false,
        }
    }
}

/// The active gesture being tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// Draw mode: a rubber-band preview is live.
    RubberBanding {
        /// Where the drag started; the committed polygon's center.
        anchor: Point,
        /// Pointer position at the previous event.
        last: Point,
    },
    /// Edit mode: an existing polygon is being dragged.
    DraggingPolygon {
        /// Id of the polygon being dragged.
        id: PolygonId,
        /// Pointer-to-center offset captured at pointer-down, so the shape
        /// doesn't jump to the pointer.
        offset_x: f64,
        offset_y: f64,
    },
    /// Erase mode: an erase stroke is in progress.
    Erasing {
        /// Pointer position at the previous sample; the erase repaint lags
        /// the indicator by one sample.
        last: Point,
    },
}

impl Default for GestureState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Rotation engine state. Outlives individual gestures: engage on one
/// pointer-down, rotate on moves, commit on the next pointer-down or on
/// leaving rotate mode.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationState {
    /// The polygon currently engaged for rotation, if any.
    pub pivot: Option<PolygonId>,
    /// Whether a reference angle has been locked.
    pub lock_engaged: bool,
    /// The reference angle captured at engagement, in radians.
    pub lock_angle: f64,
    /// The most recent pointer location seen while engaged; used to commit
    /// the pending delta on mode exit.
    pub last: Point,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            pivot: None,
            lock_engaged: false,
            lock_angle: 0.0,
            last: Point::new(0.0, 0.0),
        }
    }
}

impl RotationState {
    /// Clear the pivot and lock back to the disengaged state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
