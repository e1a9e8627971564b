//! Drag state machine and gesture routing types.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging(id)          (press on a note's draggable body)
//! Dragging(id) -> Dragging(id)  (move over the surface)
//! Dragging(id) -> Idle          (release, or pointer leaves the surface)
//! Dragging(id) -> Idle          (note removed while dragged)
//! ```
//!
//! The drag selection itself lives in the board store; [`DragState`] is
//! derived from it, so a removed note can never leave the controller in a
//! dragging state.
//!
//! ## Gesture claiming
//!
//! Every pointer event names the region it landed on ([`GestureTarget`]).
//! Note regions claim the gesture: a claimed gesture is never forwarded to
//! the surface-level handlers (note creation).

use crate::board::Board;
use crate::constants::NOTE_SYMBOLS;
use crate::types::NoteId;

/// Interaction state of the board surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    /// No note is being dragged
    #[default]
    Idle,
    /// A note is following the pointer
    Dragging(NoteId),
}

impl DragState {
    pub fn of(board: &Board) -> Self {
        match board.dragging() {
            Some(id) => Self::Dragging(id),
            None => Self::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Id of the note being dragged, if any
    pub fn dragged_note_id(&self) -> Option<NoteId> {
        match self {
            Self::Dragging(id) => Some(*id),
            Self::Idle => None,
        }
    }
}

/// Buttons in a note's header row and symbol picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteControl {
    Recolor,
    CycleFontScale,
    ToggleSymbolPicker,
    Remove,
    /// An entry of the symbol picker, by index into `NOTE_SYMBOLS`
    PickSymbol(usize),
}

impl NoteControl {
    /// Symbol inserted by a picker entry.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Self::PickSymbol(index) => NOTE_SYMBOLS.get(*index).copied(),
            _ => None,
        }
    }
}

/// Part of a note under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteRegion {
    /// Card background and header padding: starts a drag
    Body,
    /// Editable text area: text editing wins over dragging
    Text,
    /// A control button: activates on click, never drags
    Control(NoteControl),
}

/// What a pointer event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureTarget {
    /// Bare board surface
    Surface,
    /// Some region of a note
    Note { id: NoteId, region: NoteRegion },
}

impl GestureTarget {
    pub fn note(id: NoteId, region: NoteRegion) -> Self {
        Self::Note { id, region }
    }

    /// Whether the target keeps the gesture from reaching the surface.
    pub fn claims_gesture(&self) -> bool {
        matches!(self, Self::Note { .. })
    }

    pub fn note_id(&self) -> Option<NoteId> {
        match self {
            Self::Note { id, .. } => Some(*id),
            Self::Surface => None,
        }
    }
}

/// A pointer event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: (f32, f32),
    pub target: GestureTarget,
}

impl PointerEvent {
    pub fn on_surface(position: (f32, f32)) -> Self {
        Self {
            position,
            target: GestureTarget::Surface,
        }
    }

    pub fn on_note(position: (f32, f32), id: NoteId, region: NoteRegion) -> Self {
        Self {
            position,
            target: GestureTarget::note(id, region),
        }
    }
}

/// Outcome of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Nobody handled the event
    Ignored,
    /// Handled without changing board state
    Claimed,
    /// Handled and visible state changed; re-render
    Changed,
}

impl Dispatch {
    pub fn is_claimed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed)
    }

    pub(crate) fn changed_if(changed: bool) -> Self {
        if changed { Self::Changed } else { Self::Ignored }
    }
}
