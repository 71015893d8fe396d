//! Shape canvas interaction engine.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! list of rectangles on a fixed-size canvas and the pointer state machine
//! that moves them and resizes them from their corner handles. Drawing is left
//! to the host: it reads the shape list and redraws whenever the engine
//! reports a change.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EngineCore`] and its [`engine::Action`] output |
//! | [`doc`] | Shape records and the ordered [`doc::ShapeStore`] |
//! | [`geom`] | Points, rects and the canvas viewport frame |
//! | [`hit`] | Corner-handle hit-testing |
//! | [`input`] | Interaction state machine types |
//! | [`transform`] | Move/resize geometry math |
//! | [`dnd`] | Native drag-and-drop payloads and drop placement |
//! | [`config`] | Host-supplied canvas configuration |
//! | [`error`] | Error types |
//! | [`web`] | `wasm-bindgen` binding to a DOM host element |
//! | [`consts`] | Shared numeric and string constants |

pub mod config;
pub mod consts;
pub mod dnd;
pub mod doc;
pub mod engine;
pub mod error;
pub mod geom;
pub mod hit;
pub mod input;
pub mod transform;
pub mod web;
