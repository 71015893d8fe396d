//! Shared constants for the shapeboard crate.

// ── Canvas ──────────────────────────────────────────────────────

/// Default canvas width in CSS pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;

/// Default canvas height in CSS pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Half-width of the square hit region around each corner handle.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

// ── Drag-and-drop ───────────────────────────────────────────────

/// MIME type under which a dragged shape's id is carried.
pub const DRAG_MIME: &str = "text/plain";

/// DOM attribute (read via `dataset`) naming the shape an element draws.
pub const SHAPE_ID_DATA_KEY: &str = "shapeId";
