//! Native drag-and-drop.
//!
//! This is a second, independent way to move a shape. Drag start stores the
//! shape id as `text/plain` in the browser's drag transfer; drop reads it back
//! and centers the shape on the drop point. Nothing here touches the pointer
//! state machine.

#[cfg(test)]
#[path = "dnd_test.rs"]
mod dnd_test;

use crate::doc::{Shape, ShapeId};
use crate::error::EngineError;
use crate::geom::Point;
use crate::transform::center_on;

/// Drag-transfer payload for `id`.
#[must_use]
pub fn encode_payload(id: ShapeId) -> String {
    id.to_string()
}

/// Shape id carried by a drag-transfer payload.
///
/// # Errors
///
/// `MissingDragPayload` when the transfer had no data (or only whitespace),
/// `InvalidDragPayload` when it is not a decimal id.
pub fn parse_payload(raw: Option<&str>) -> Result<ShapeId, EngineError> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(EngineError::MissingDragPayload);
    }
    trimmed
        .parse::<ShapeId>()
        .map_err(|_| EngineError::InvalidDragPayload(trimmed.to_string()))
}

/// `shape` repositioned so its center lands on `drop` (canvas-local).
#[must_use]
pub fn dropped(shape: &Shape, drop: Point) -> Shape {
    let origin = center_on(drop, shape.width, shape.height);
    Shape { x: origin.x, y: origin.y, ..shape.clone() }
}
