//! Document model: shape records and the in-memory store.
//!
//! `Shape` is the single record type on the canvas. `ShapeStore` keeps shapes
//! in insertion order, which is also draw order for the host renderer, and is
//! the only place geometry lives. The input engine never patches fields in
//! place; it computes a whole new record and hands it to [`ShapeStore::replace`].

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::geom::Rect;

/// Unique identifier for a shape, stable for the shape's lifetime.
pub type ShapeId = u32;

/// A colored rectangle on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    /// Left edge in canvas-local coordinates.
    pub x: f64,
    /// Top edge in canvas-local coordinates.
    pub y: f64,
    /// May be negative after a resize drags past the anchor corner.
    pub width: f64,
    /// May be negative after a resize drags past the anchor corner.
    pub height: f64,
    /// CSS color string.
    pub color: String,
}

impl Shape {
    #[must_use]
    pub fn new(id: ShapeId, x: f64, y: f64, width: f64, height: f64, color: impl Into<String>) -> Self {
        Self { id, x, y, width, height, color: color.into() }
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Copy of this shape with its geometry taken from `rect`.
    #[must_use]
    pub fn with_rect(&self, rect: Rect) -> Self {
        Self {
            id: self.id,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            color: self.color.clone(),
        }
    }
}

/// Ordered in-memory store of shapes.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// The two shapes a fresh widget starts with.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            shapes: vec![
                Shape::new(1, 100.0, 100.0, 100.0, 100.0, "red"),
                Shape::new(2, 300.0, 200.0, 100.0, 100.0, "blue"),
            ],
        }
    }

    /// Append a shape, or replace the record in place if the id already exists.
    pub fn insert(&mut self, shape: Shape) {
        if let Some(slot) = self.shapes.iter_mut().find(|s| s.id == shape.id) {
            *slot = shape;
        } else {
            self.shapes.push(shape);
        }
    }

    /// Replace an existing record wholesale. Returns false if no shape has that id.
    pub fn replace(&mut self, shape: Shape) -> bool {
        let Some(slot) = self.shapes.iter_mut().find(|s| s.id == shape.id) else {
            return false;
        };
        *slot = shape;
        true
    }

    /// Remove a shape by id, returning it if it was present.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id == id)?;
        Some(self.shapes.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Replace all shapes. Later duplicates of an id win.
    pub fn load(&mut self, shapes: Vec<Shape>) {
        self.shapes.clear();
        for shape in shapes {
            self.insert(shape);
        }
    }

    /// All shapes in draw order (first drawn first).
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// One past the largest id in the store. When the largest id is
    /// `ShapeId::MAX`, the lowest id not in use. `None` only if every id is taken.
    #[must_use]
    pub fn next_id(&self) -> Option<ShapeId> {
        let max = self.shapes.iter().map(|s| s.id).max().unwrap_or(0);
        max.checked_add(1).or_else(|| (1..=ShapeId::MAX).find(|id| self.get(*id).is_none()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
