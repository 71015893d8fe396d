//! Error types.
//!
//! None of these reach the host as failures. Engine entry points log them and
//! treat the event as a no-op; they exist so the internal paths can use `?`.

use crate::doc::ShapeId;
use crate::geom::Point;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("shape not found: {0}")]
    UnknownShape(ShapeId),
    #[error("drop carried no drag payload")]
    MissingDragPayload,
    #[error("invalid drag payload: {0:?}")]
    InvalidDragPayload(String),
    #[error("point ({}, {}) is outside the canvas", .0.x, .0.y)]
    OutsideCanvas(Point),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
