//! Stickyboard - note-board interaction engine.
//!
//! A single bounded surface holding free-form sticky notes that can be
//! created, dragged, recolored, annotated with symbols and removed. Notes
//! resize themselves to fit their content.
//!
//! - `board` - Note store: collection, drag selection, revisions
//! - `app` - Session controller: identity gate, editing, render data
//! - `input` - Pointer handling and the drag state machine
//! - `sizing` - Content-driven auto-resize
//! - `settings` / `logging` - Configuration and tracing setup
//!
//! All state is in memory; nothing is persisted.

pub mod app;
pub mod board;
pub mod constants;
pub mod input;
pub mod logging;
pub mod perf;
pub mod session;
pub mod settings;
pub mod sizing;
pub mod spatial_index;
pub mod types;

pub use app::{BoardApp, NoteRender, TextSelection};
pub use board::Board;
pub use input::{Dispatch, DragState, GestureTarget, NoteControl, NoteRegion, PointerEvent};
pub use types::{FontScale, Note, NoteColor, NoteId};
