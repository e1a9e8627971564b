//! Application module - the board session controller.
//!
//! This module is organized into several submodules:
//! - `state` - The BoardApp struct definition and sub-structs
//! - `lifecycle` - Construction, configuration and the identity gate
//! - `note_editing` - Text edits, symbol insertion and note controls
//! - `view_model` - Read-only per-note render data for the presentation layer
//!
//! Pointer handling (`handle_mouse_*`) lives in `crate::input`.

mod lifecycle;
mod note_editing;
mod state;
mod view_model;

pub use note_editing::{TextSelection, splice_symbol};
pub use state::{BoardApp, CanvasState, EditingState, NoteViewState, SizingState};
pub use view_model::NoteRender;
