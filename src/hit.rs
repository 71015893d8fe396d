#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{Shape, ShapeId, ShapeStore};
use crate::geom::{Point, Rect};

/// A corner of a shape's bounding box, carrying a resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Fixed scan order; the first corner hit in this order wins.
    pub const SCAN_ORDER: [Corner; 4] = [Corner::TopLeft, Corner::TopRight, Corner::BottomLeft, Corner::BottomRight];

    /// The corner diagonally across, which stays put while this one is dragged.
    #[must_use]
    pub fn opposite(self) -> Corner {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::BottomLeft => Self::TopRight,
            Self::BottomRight => Self::TopLeft,
        }
    }

    /// Position of this corner on `rect`.
    #[must_use]
    pub fn point(self, rect: Rect) -> Point {
        let left = rect.x;
        let right = rect.x + rect.width;
        let top = rect.y;
        let bottom = rect.y + rect.height;
        match self {
            Self::TopLeft => Point::new(left, top),
            Self::TopRight => Point::new(right, top),
            Self::BottomLeft => Point::new(left, bottom),
            Self::BottomRight => Point::new(right, bottom),
        }
    }
}

/// What a pointer-down on a shape should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Move,
    ResizeCorner(Corner),
}

/// Corner positions of `shape` in scan order.
#[must_use]
pub fn corners(shape: &Shape) -> [(Corner, Point); 4] {
    let rect = shape.rect();
    Corner::SCAN_ORDER.map(|c| (c, c.point(rect)))
}

/// Classify `pt` against `shape`: a corner handle if `pt` lies within the
/// square of half-width `radius` centered on that corner, otherwise a move.
///
/// Points outside the bounding box still classify as `Move`; callers decide
/// whether the shape was under the pointer at all.
#[must_use]
pub fn classify(pt: Point, shape: &Shape, radius: f64) -> HitPart {
    corners(shape)
        .into_iter()
        .find(|(_, c)| (pt.x - c.x).abs() <= radius && (pt.y - c.y).abs() <= radius)
        .map_or(HitPart::Move, |(corner, _)| HitPart::ResizeCorner(corner))
}

/// The last-drawn shape whose bounding box, grown by the handle radius,
/// contains `pt`.
#[must_use]
pub fn shape_at(pt: Point, store: &ShapeStore, radius: f64) -> Option<ShapeId> {
    store
        .shapes()
        .iter()
        .rev()
        .find(|s| s.rect().contains_with_margin(pt, radius))
        .map(|s| s.id)
}
