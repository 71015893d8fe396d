//! Input model: the interaction state machine.
//!
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up. It carries everything needed to recompute the active shape's
//! geometry from a fresh pointer sample: which shape, which mode, the pointer
//! offset recorded at pointer-down, and the shape's rect at that moment.
//!
//! `Mode` is the flat view of the same state for hosts that only want to know
//! what is going on (`None` exactly when nothing is active).

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::Serialize;

use crate::doc::ShapeId;
use crate::geom::{Point, Rect};
use crate::hit::{Corner, HitPart};

/// What an active interaction does with pointer samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Translate the shape, keeping the pointer offset constant.
    Move,
    /// Drag one corner while the opposite corner stays anchored.
    Resize(Corner),
}

impl From<HitPart> for DragMode {
    fn from(part: HitPart) -> Self {
        match part {
            HitPart::Move => Self::Move,
            HitPart::ResizeCorner(corner) => Self::Resize(corner),
        }
    }
}

/// Flat interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    None,
    Move,
    ResizeTopLeft,
    ResizeTopRight,
    ResizeBottomLeft,
    ResizeBottomRight,
}

impl From<DragMode> for Mode {
    fn from(mode: DragMode) -> Self {
        match mode {
            DragMode::Move => Self::Move,
            DragMode::Resize(Corner::TopLeft) => Self::ResizeTopLeft,
            DragMode::Resize(Corner::TopRight) => Self::ResizeTopRight,
            DragMode::Resize(Corner::BottomLeft) => Self::ResizeBottomLeft,
            DragMode::Resize(Corner::BottomRight) => Self::ResizeBottomRight,
        }
    }
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A shape is being moved or resized.
    Active {
        /// Id of the shape being manipulated.
        id: ShapeId,
        mode: DragMode,
        /// Pointer minus reference point at pointer-down. The reference is
        /// the shape origin for a move and the anchor corner for a resize.
        offset: Point,
        /// Shape geometry at pointer-down.
        origin: Rect,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn active_id(&self) -> Option<ShapeId> {
        match self {
            Self::Idle => None,
            Self::Active { id, .. } => Some(*id),
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        match self {
            Self::Idle => Mode::None,
            Self::Active { mode, .. } => Mode::from(*mode),
        }
    }

    /// Recorded pointer offset; zero while idle.
    #[must_use]
    pub fn pointer_offset(&self) -> Point {
        match self {
            Self::Idle => Point::default(),
            Self::Active { offset, .. } => *offset,
        }
    }
}

/// Snapshot of the interaction for the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InteractionSnapshot {
    pub active_shape_id: Option<ShapeId>,
    pub mode: Mode,
    pub pointer_offset: Point,
}

impl From<&InputState> for InteractionSnapshot {
    fn from(state: &InputState) -> Self {
        Self {
            active_shape_id: state.active_id(),
            mode: state.mode(),
            pointer_offset: state.pointer_offset(),
        }
    }
}
