//! Geometry for an active drag.
//!
//! Every function here is pure: it takes the shape's rect as it was at
//! pointer-down plus the current pointer sample, and returns the new rect.
//! Feeding the drag-start rect on every sample (instead of the previous
//! result) keeps the anchor exact no matter how many samples arrive.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::config::ResizeClamp;
use crate::geom::{Point, Rect};
use crate::hit::Corner;
use crate::input::DragMode;

/// Offset to record at pointer-down for `mode`.
///
/// For a move this is pointer minus shape origin. For a resize it is pointer
/// minus the anchor (the corner opposite the one grabbed).
#[must_use]
pub fn start_offset(mode: DragMode, origin: Rect, pointer: Point) -> Point {
    match mode {
        DragMode::Move => pointer - origin.origin(),
        DragMode::Resize(corner) => pointer - corner.opposite().point(origin),
    }
}

/// New geometry for a pointer sample at `pointer`.
#[must_use]
pub fn apply(mode: DragMode, origin: Rect, offset: Point, pointer: Point, clamp: ResizeClamp) -> Rect {
    match mode {
        DragMode::Move => translate(origin, offset, pointer),
        DragMode::Resize(corner) => resize(corner, origin, pointer, clamp),
    }
}

/// Place the origin at `pointer - offset`, keeping the size.
#[must_use]
pub fn translate(origin: Rect, offset: Point, pointer: Point) -> Rect {
    Rect {
        x: pointer.x - offset.x,
        y: pointer.y - offset.y,
        width: origin.width,
        height: origin.height,
    }
}

/// Drag `corner` to `pointer` while the opposite corner of `origin` stays put.
#[must_use]
pub fn resize(corner: Corner, origin: Rect, pointer: Point, clamp: ResizeClamp) -> Rect {
    let anchor = corner.opposite().point(origin);
    let left = matches!(corner, Corner::TopLeft | Corner::BottomLeft);
    let top = matches!(corner, Corner::TopLeft | Corner::TopRight);

    let (x, width) = span(anchor.x, pointer.x, left, clamp);
    let (y, height) = span(anchor.y, pointer.y, top, clamp);
    Rect { x, y, width, height }
}

/// Start and extent along one axis. `before` is true when the dragged edge
/// sits on the low side of the anchor (left or top).
fn span(anchor: f64, pointer: f64, before: bool, clamp: ResizeClamp) -> (f64, f64) {
    let extent = if before { anchor - pointer } else { pointer - anchor };
    match clamp {
        ResizeClamp::MinSize(min) if extent < min => {
            if before {
                (anchor - min, min)
            } else {
                (anchor, min)
            }
        }
        _ => {
            if before {
                (pointer, extent)
            } else {
                (anchor, extent)
            }
        }
    }
}

/// Top-left at which a `width` × `height` shape is centered on `drop`.
#[must_use]
pub fn center_on(drop: Point, width: f64, height: f64) -> Point {
    Point::new(drop.x - width / 2.0, drop.y - height / 2.0)
}
