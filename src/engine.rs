use tracing::{debug, trace, warn};

use crate::config::CanvasConfig;
use crate::dnd;
use crate::doc::{Shape, ShapeId, ShapeStore};
use crate::error::EngineError;
use crate::geom::{Point, Rect, Viewport};
use crate::hit;
use crate::input::{DragMode, InputState, InteractionSnapshot, Mode};
use crate::transform;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A shape's record was replaced; redraw it.
    ShapeUpdated(Shape),
    /// An interaction began. The host should start delivering move/up events.
    CaptureStarted { id: ShapeId, mode: Mode },
    /// The interaction ended. The host should stop delivering move/up events.
    CaptureEnded,
    RenderNeeded,
}

/// Core engine state: everything that runs without a DOM.
///
/// Separated from [`crate::web::Engine`] so it can be tested without a browser.
/// All `on_*` handlers take client (viewport) coordinates and translate them
/// through `viewport` before doing any geometry.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub store: ShapeStore,
    pub input: InputState,
    pub viewport: Viewport,
    pub config: CanvasConfig,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default(), ShapeStore::new())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine over `store`, sized from `config`.
    #[must_use]
    pub fn with_config(config: CanvasConfig, store: ShapeStore) -> Self {
        Self {
            store,
            input: InputState::Idle,
            viewport: Viewport::new(config.width, config.height),
            config,
        }
    }

    // --- Data inputs ---

    /// Replace every shape. Any interaction in progress is dropped.
    pub fn load_shapes(&mut self, shapes: Vec<Shape>) -> Vec<Action> {
        self.store.load(shapes);
        let mut actions = self.end_interaction();
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Add a shape with the next free id. Existing shapes are never
    /// overwritten: `None` when no id is free.
    pub fn add_shape(&mut self, rect: Rect, color: &str) -> Option<Shape> {
        let Some(id) = self.store.next_id() else {
            warn!(count = self.store.len(), "no free shape id; add refused");
            return None;
        };
        let shape = Shape::new(id, rect.x, rect.y, rect.width, rect.height, color);
        self.store.insert(shape.clone());
        debug!(shape_id = id, "shape added");
        Some(shape)
    }

    /// Remove a shape. Ends the interaction if it targeted that shape.
    pub fn remove_shape(&mut self, id: ShapeId) -> Vec<Action> {
        if self.store.remove(id).is_none() {
            debug!(shape_id = id, "remove of unknown shape ignored");
            return Vec::new();
        }
        let mut actions = if self.input.active_id() == Some(id) {
            self.end_interaction()
        } else {
            Vec::new()
        };
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Record where the canvas element sits in the viewport.
    pub fn set_origin(&mut self, origin_x: f64, origin_y: f64) {
        self.viewport.origin_x = origin_x;
        self.viewport.origin_y = origin_y;
    }

    // --- Pointer input ---

    /// Pointer-down where the host doesn't know which shape is under the
    /// pointer. Hit-tests the store, topmost first. A point off the canvas
    /// counts as empty canvas.
    pub fn on_pointer_down(&mut self, client_pt: Point) -> Vec<Action> {
        let local = self.viewport.client_to_canvas(client_pt);
        if !self.viewport.contains(local) {
            trace!(x = local.x, y = local.y, "pointer-down outside canvas");
            return self.end_interaction();
        }
        match hit::shape_at(local, &self.store, self.config.handle_radius) {
            Some(id) => self.begin(id, local),
            None => self.end_interaction(),
        }
    }

    /// Pointer-down on an element the host knows draws shape `id`.
    pub fn on_pointer_down_on(&mut self, id: ShapeId, client_pt: Point) -> Vec<Action> {
        let local = self.viewport.client_to_canvas(client_pt);
        self.begin(id, local)
    }

    pub fn on_pointer_move(&mut self, client_pt: Point) -> Vec<Action> {
        let InputState::Active { id, mode, offset, origin } = self.input else {
            return Vec::new();
        };
        let local = self.viewport.client_to_canvas(client_pt);

        let Some(shape) = self.store.get(id) else {
            debug!(shape_id = id, "active shape vanished; ending interaction");
            return self.end_interaction();
        };
        let rect = transform::apply(mode, origin, offset, local, self.config.resize_clamp);
        let updated = shape.with_rect(rect);
        trace!(shape_id = id, x = rect.x, y = rect.y, w = rect.width, h = rect.height, "shape updated");

        self.store.replace(updated.clone());
        vec![Action::ShapeUpdated(updated), Action::RenderNeeded]
    }

    /// Pointer-up always returns the engine to idle.
    pub fn on_pointer_up(&mut self, _client_pt: Point) -> Vec<Action> {
        self.end_interaction()
    }

    // --- Native drag-and-drop ---

    /// Drag-transfer payload for a drag starting on shape `id`.
    #[must_use]
    pub fn on_drag_start(&self, id: ShapeId) -> Option<String> {
        if self.store.get(id).is_none() {
            debug!(shape_id = id, "drag start on unknown shape ignored");
            return None;
        }
        Some(dnd::encode_payload(id))
    }

    /// Drop: center the dragged shape on the drop point. Missing, malformed or
    /// stale payloads are ignored, as are drops outside the canvas.
    pub fn on_drop(&mut self, payload: Option<&str>, client_pt: Point) -> Vec<Action> {
        match self.try_drop(payload, client_pt) {
            Ok(shape) => vec![Action::ShapeUpdated(shape), Action::RenderNeeded],
            Err(e) => {
                debug!(error = %e, "drop ignored");
                Vec::new()
            }
        }
    }

    fn try_drop(&mut self, payload: Option<&str>, client_pt: Point) -> Result<Shape, EngineError> {
        let id = dnd::parse_payload(payload)?;
        let shape = self.store.get(id).ok_or(EngineError::UnknownShape(id))?;
        let local = self.viewport.client_to_canvas(client_pt);
        if !self.viewport.contains(local) {
            return Err(EngineError::OutsideCanvas(local));
        }
        let moved = dnd::dropped(shape, local);
        self.store.replace(moved.clone());
        debug!(shape_id = id, x = moved.x, y = moved.y, "shape dropped");
        Ok(moved)
    }

    // --- Queries ---

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        self.store.shapes()
    }

    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.store.get(id)
    }

    /// Canvas extent as `(width, height)`.
    #[must_use]
    pub fn canvas_size(&self) -> (f64, f64) {
        (self.viewport.width, self.viewport.height)
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionSnapshot {
        InteractionSnapshot::from(&self.input)
    }

    // --- Internals ---

    fn begin(&mut self, id: ShapeId, local: Point) -> Vec<Action> {
        let Some(shape) = self.store.get(id) else {
            debug!(shape_id = id, "pointer-down on unknown shape; treating as empty canvas");
            return self.end_interaction();
        };
        if let Some(prev) = self.input.active_id() {
            debug!(shape_id = prev, "abandoning interaction without pointer-up");
        }

        let origin = shape.rect();
        let mode = DragMode::from(hit::classify(local, shape, self.config.handle_radius));
        let offset = transform::start_offset(mode, origin, local);
        self.input = InputState::Active { id, mode, offset, origin };

        let mode = Mode::from(mode);
        debug!(shape_id = id, ?mode, "interaction started");
        vec![Action::CaptureStarted { id, mode }]
    }

    fn end_interaction(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Active { id, .. } => {
                debug!(shape_id = id, "interaction ended");
                vec![Action::CaptureEnded]
            }
        }
    }
}
