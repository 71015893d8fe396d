//! Browser binding: wires DOM events on a host element into [`EngineCore`].
//!
//! The host page creates an [`Engine`] over the element that contains the
//! drawn shapes, and the constructor sizes that element to the configured
//! canvas extent. The engine listens for `mousedown`, `dragstart`, `dragover`
//! and `drop` on that element for its whole life. Document-level `mousemove`
//! and `mouseup` listeners exist only while an interaction is active: they
//! are owned by a [`PointerCapture`] guard, and dropping the guard is the one
//! place they are removed.
//!
//! Elements that draw a shape carry its id in `data-shape-id`. A mousedown on
//! anything else falls back to hit-testing the store.

use std::cell::RefCell;
use std::io;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, Event, EventTarget, HtmlElement, MouseEvent};

use crate::config::CanvasConfig;
use crate::consts::{DRAG_MIME, SHAPE_ID_DATA_KEY};
use crate::dnd;
use crate::doc::{Shape, ShapeId, ShapeStore};
use crate::engine::{Action, EngineCore};
use crate::geom::{Point, Rect};

type Listener = Closure<dyn FnMut(Event)>;

/// Install the console panic hook and a `tracing` subscriber that writes to
/// the browser console. Safe to call more than once.
#[wasm_bindgen]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::default)
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
    if installed.is_err() {
        debug!("tracing subscriber already installed");
    }
}

/// Buffers one formatted event and hands it to `console.log` on drop.
#[derive(Default)]
struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let line = String::from_utf8_lossy(&self.buf);
            web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
            self.buf.clear();
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Err(err) = io::Write::flush(self) {
            web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
        }
    }
}

/// Document-level move/up listeners for one interaction. Dropping the guard
/// detaches both.
struct PointerCapture {
    target: EventTarget,
    on_move: Listener,
    on_up: Listener,
}

impl PointerCapture {
    fn attach(target: EventTarget, on_move: Listener, on_up: Listener) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        // From here on, Drop cleans up whatever was attached.
        let capture = Self { target, on_move, on_up };
        capture
            .target
            .add_event_listener_with_callback("mouseup", capture.on_up.as_ref().unchecked_ref())?;
        Ok(capture)
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        for (kind, listener) in [("mousemove", &self.on_move), ("mouseup", &self.on_up)] {
            if let Err(err) = self
                .target
                .remove_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())
            {
                warn!(?err, event = kind, "failed to detach pointer listener");
            }
        }
    }
}

/// State shared between the engine handle and its listeners.
struct Shared {
    core: RefCell<EngineCore>,
    element: HtmlElement,
    capture: RefCell<Option<PointerCapture>>,
    on_change: RefCell<Option<js_sys::Function>>,
}

impl Shared {
    /// Refresh the canvas origin from the element's current client rect.
    fn sync_origin(&self) {
        let rect = self.element.get_bounding_client_rect();
        self.core.borrow_mut().set_origin(rect.left(), rect.top());
    }

    fn dispatch(self: &Rc<Self>, actions: Vec<Action>) {
        let mut render = false;
        for action in actions {
            match action {
                Action::CaptureStarted { id, mode } => {
                    debug!(shape_id = id, ?mode, "capturing pointer");
                    if let Err(err) = self.start_capture() {
                        warn!(?err, "pointer capture failed");
                    }
                }
                Action::CaptureEnded => {
                    drop(self.capture.take());
                }
                Action::ShapeUpdated(_) | Action::RenderNeeded => render = true,
            }
        }
        if render {
            self.notify();
        }
    }

    fn start_capture(self: &Rc<Self>) -> Result<(), JsValue> {
        drop(self.capture.take());

        let document: EventTarget = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?
            .into();

        let weak = Rc::downgrade(self);
        let on_move = pointer_listener(weak.clone(), EngineCore::on_pointer_move);
        let on_up = pointer_listener(weak, EngineCore::on_pointer_up);

        let capture = PointerCapture::attach(document, on_move, on_up)?;
        *self.capture.borrow_mut() = Some(capture);
        Ok(())
    }

    fn notify(&self) {
        let callback = self.on_change.borrow().clone();
        if let Some(callback) = callback {
            if let Err(err) = callback.call0(&JsValue::NULL) {
                warn!(?err, "change callback threw");
            }
        }
    }
}

/// Document listener feeding mouse events to `handler`. Holds the shared
/// state weakly so an abandoned capture can't keep the engine alive.
fn pointer_listener(weak: Weak<Shared>, handler: fn(&mut EngineCore, Point) -> Vec<Action>) -> Listener {
    Closure::wrap(Box::new(move |event: Event| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        shared.sync_origin();
        let actions = handler(&mut shared.core.borrow_mut(), client_point(mouse));
        shared.dispatch(actions);
    }) as Box<dyn FnMut(Event)>)
}

fn client_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Shape id from the event target's `data-shape-id`, if it has a valid one.
fn target_shape_id(event: &Event) -> Option<ShapeId> {
    let target = event.target()?;
    let element = target.dyn_ref::<HtmlElement>()?;
    let raw = element.dataset().get(SHAPE_ID_DATA_KEY)?;
    match dnd::parse_payload(Some(&raw)) {
        Ok(id) => Some(id),
        Err(e) => {
            debug!(error = %e, "ignoring bad data-shape-id");
            None
        }
    }
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// The canvas engine bound to a DOM host element.
#[wasm_bindgen]
pub struct Engine {
    shared: Rc<Shared>,
    listeners: Vec<(&'static str, Listener)>,
}

#[wasm_bindgen]
impl Engine {
    /// Bind to `element`. `config_json` is an optional [`CanvasConfig`] object
    /// as JSON. The engine starts with the two default shapes.
    ///
    /// # Errors
    ///
    /// Returns a JS error if the config is invalid or a listener can't be installed.
    #[wasm_bindgen(constructor)]
    pub fn new(element: HtmlElement, config_json: Option<String>) -> Result<Engine, JsValue> {
        let config = match config_json {
            Some(raw) => CanvasConfig::from_json(&raw).map_err(to_js_error)?,
            None => CanvasConfig::default(),
        };
        let shared = Rc::new(Shared {
            core: RefCell::new(EngineCore::with_config(config, ShapeStore::seeded())),
            element,
            capture: RefCell::new(None),
            on_change: RefCell::new(None),
        });

        let style = shared.element.style();
        style.set_property("width", &format!("{}px", config.width))?;
        style.set_property("height", &format!("{}px", config.height))?;

        let mut engine = Engine { shared, listeners: Vec::new() };
        engine.listen("mousedown", on_mouse_down)?;
        engine.listen("dragstart", on_drag_start)?;
        engine.listen("dragover", on_drag_over)?;
        engine.listen("drop", on_drop)?;
        debug!(width = config.width, height = config.height, "engine bound");
        Ok(engine)
    }

    /// Register the callback invoked (with no arguments) whenever shapes change.
    pub fn set_on_change(&self, callback: js_sys::Function) {
        *self.shared.on_change.borrow_mut() = Some(callback);
    }

    /// Current shapes as a JSON array, in draw order.
    ///
    /// # Errors
    ///
    /// Returns a JS error if serialization fails.
    pub fn shapes_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.shared.core.borrow().shapes()).map_err(to_js_error)
    }

    /// Canvas width in CSS pixels.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.shared.core.borrow().canvas_size().0
    }

    /// Canvas height in CSS pixels.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.shared.core.borrow().canvas_size().1
    }

    /// Current interaction (`active_shape_id`, `mode`, `pointer_offset`) as JSON.
    ///
    /// # Errors
    ///
    /// Returns a JS error if serialization fails.
    pub fn interaction_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.shared.core.borrow().interaction()).map_err(to_js_error)
    }

    /// Replace all shapes from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns a JS error if `raw` is not a valid shape array.
    pub fn load_shapes_json(&self, raw: &str) -> Result<(), JsValue> {
        let shapes: Vec<Shape> = serde_json::from_str(raw).map_err(to_js_error)?;
        let actions = self.shared.core.borrow_mut().load_shapes(shapes);
        self.shared.dispatch(actions);
        Ok(())
    }

    /// Add a shape and return its id, or `undefined` if no id is free.
    pub fn add_shape(&self, x: f64, y: f64, width: f64, height: f64, color: &str) -> Option<ShapeId> {
        let shape = self
            .shared
            .core
            .borrow_mut()
            .add_shape(Rect::new(x, y, width, height), color)?;
        self.shared.notify();
        Some(shape.id)
    }

    pub fn remove_shape(&self, id: ShapeId) {
        let actions = self.shared.core.borrow_mut().remove_shape(id);
        self.shared.dispatch(actions);
    }
}

impl Engine {
    fn listen(&mut self, kind: &'static str, handler: fn(&Rc<Shared>, &Event)) -> Result<(), JsValue> {
        let weak = Rc::downgrade(&self.shared);
        let listener: Listener = Closure::wrap(Box::new(move |event: Event| {
            if let Some(shared) = weak.upgrade() {
                handler(&shared, &event);
            }
        }) as Box<dyn FnMut(Event)>);
        self.shared
            .element
            .add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())?;
        self.listeners.push((kind, listener));
        Ok(())
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        drop(self.shared.capture.take());
        for (kind, listener) in &self.listeners {
            if let Err(err) = self
                .shared
                .element
                .remove_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())
            {
                warn!(?err, event = *kind, "failed to detach host listener");
            }
        }
    }
}

// --- Host element handlers ---

fn on_mouse_down(shared: &Rc<Shared>, event: &Event) {
    let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
        return;
    };
    if mouse.button() != 0 {
        return;
    }
    // Pointer drags own the mouse; native drag stays available to other sources.
    event.prevent_default();
    shared.sync_origin();
    let pt = client_point(mouse);
    let actions = match target_shape_id(event) {
        Some(id) => shared.core.borrow_mut().on_pointer_down_on(id, pt),
        None => shared.core.borrow_mut().on_pointer_down(pt),
    };
    shared.dispatch(actions);
}

fn on_drag_start(shared: &Rc<Shared>, event: &Event) {
    let Some(drag) = event.dyn_ref::<DragEvent>() else {
        return;
    };
    let Some(id) = target_shape_id(event) else {
        return;
    };
    let Some(payload) = shared.core.borrow().on_drag_start(id) else {
        return;
    };
    let Some(transfer) = drag.data_transfer() else {
        return;
    };
    if let Err(err) = transfer.set_data(DRAG_MIME, &payload) {
        warn!(?err, shape_id = id, "could not set drag payload");
    }
}

fn on_drag_over(_shared: &Rc<Shared>, event: &Event) {
    // Required for the element to accept drops.
    event.prevent_default();
}

fn on_drop(shared: &Rc<Shared>, event: &Event) {
    let Some(drag) = event.dyn_ref::<DragEvent>() else {
        return;
    };
    event.prevent_default();
    shared.sync_origin();
    let payload = match drag.data_transfer().map(|t| t.get_data(DRAG_MIME)) {
        Some(Ok(data)) => Some(data),
        Some(Err(err)) => {
            debug!(?err, "drop payload unreadable");
            None
        }
        None => None,
    };
    let actions = shared.core.borrow_mut().on_drop(payload.as_deref(), client_point(drag));
    shared.dispatch(actions);
}
