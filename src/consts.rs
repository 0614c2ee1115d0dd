//! Shared defaults and numeric constants for the editor.

// ── Grid ────────────────────────────────────────────────────────

/// Background grid line color.
pub const GRID_COLOR: &str = "lightgrey";

/// Horizontal spacing between grid lines, in pixels.
pub const GRID_STEP_X: f64 = 10.0;

/// Vertical spacing between grid lines, in pixels.
pub const GRID_STEP_Y: f64 = 10.0;

// ── Rubber band ─────────────────────────────────────────────────

/// Stroke color for the anchor crosshair drawn while guidewires are on.
pub const GUIDEWIRE_STROKE_STYLE: &str = "rgba(0,0,230,0.4)";

// ── Style configuration defaults ────────────────────────────────

/// Default polygon stroke color.
pub const DEFAULT_STROKE_STYLE: &str = "red";

/// Default polygon fill color.
pub const DEFAULT_FILL_STYLE: &str = "orange";

/// Default side count for new polygons.
pub const DEFAULT_SIDES: u32 = 8;

/// Default eraser footprint size, in pixels.
pub const DEFAULT_ERASER_WIDTH: f64 = 25.0;
