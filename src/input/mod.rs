//! Pointer input handling for the board surface.
//!
//! This module implements the interaction controller: it turns raw pointer
//! events into board-store mutations.
//!
//! ## Architecture
//!
//! The drag protocol is an explicit state machine (`DragState`) derived from
//! the store's drag selection. Each event carries the region it landed on
//! (`GestureTarget`); note regions claim their gestures so they never reach
//! the surface-level note-creation handler.
//!
//! ## Modules
//!
//! - `state` - Drag state machine and gesture routing types
//! - `coords` - Screen to surface-local coordinate conversion
//! - `mouse_down` - Press handling (drag start, text focus, control presses)
//! - `drag` - Move handling (dragged note follows the pointer)
//! - `mouse_up` - Release, leave, click and double-click (note creation)

pub mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod state;

pub use state::{Dispatch, DragState, GestureTarget, NoteControl, NoteRegion, PointerEvent};
