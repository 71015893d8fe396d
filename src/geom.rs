#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::ops::Sub;

use serde::Serialize;

/// A point in either viewport (client) or canvas-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// Axis-aligned rectangle. `width` and `height` may be negative while a
/// resize drags a corner past its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Same area with the origin moved to the true top-left and a
    /// non-negative extent.
    #[must_use]
    pub fn normalized(&self) -> Rect {
        Rect {
            x: self.x.min(self.x + self.width),
            y: self.y.min(self.y + self.height),
            width: self.width.abs(),
            height: self.height.abs(),
        }
    }

    /// Whether `pt` lies inside the normalized rect grown by `margin` on every side.
    #[must_use]
    pub fn contains_with_margin(&self, pt: Point, margin: f64) -> bool {
        let r = self.normalized();
        pt.x >= r.x - margin && pt.x <= r.x + r.width + margin && pt.y >= r.y - margin && pt.y <= r.y + r.height + margin
    }
}

/// Placement of the canvas inside the browser viewport.
///
/// `origin_x` / `origin_y` are the canvas element's top-left in client
/// coordinates. `width` / `height` are the fixed canvas extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { origin_x: 0.0, origin_y: 0.0, width, height }
    }

    /// Convert a client-space point (CSS pixels) to canvas-local coordinates.
    #[must_use]
    pub fn client_to_canvas(&self, client: Point) -> Point {
        Point { x: client.x - self.origin_x, y: client.y - self.origin_y }
    }

    /// Whether a canvas-local point lies on the canvas. Edges are inclusive.
    #[must_use]
    pub fn contains(&self, local: Point) -> bool {
        (0.0..=self.width).contains(&local.x) && (0.0..=self.height).contains(&local.y)
    }
}
