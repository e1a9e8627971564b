//! Application state - the BoardApp struct definition and sub-structs.

use crate::board::Board;
use crate::input::coords::SurfaceBounds;
use crate::session::Session;
use crate::sizing::{SizingRules, TextMeasure};
use crate::types::{FontScale, NoteId};
use std::collections::HashMap;

use super::TextSelection;

/// Presentation-local state of one note.
///
/// None of this touches the note's content or stored size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteViewState {
    /// Current text scale, cycled by the font control
    pub font_scale: FontScale,
    /// Whether the symbol picker popup is open
    pub symbol_picker_open: bool,
    /// Caret or selection inside the text region, in chars
    pub selection: TextSelection,
}

/// Surface and note store
pub struct CanvasState {
    /// Note collection and drag selection
    pub board: Board,
    /// Screen-space placement of the surface
    pub surface: SurfaceBounds,
}

/// Text editing and per-note view state
#[derive(Default)]
pub struct EditingState {
    /// View state keyed by note, created lazily
    pub views: HashMap<NoteId, NoteViewState>,
    /// Note whose text region holds input focus
    pub focused: Option<NoteId>,
}

impl EditingState {
    pub fn view(&self, id: NoteId) -> NoteViewState {
        self.views.get(&id).cloned().unwrap_or_default()
    }

    pub fn view_mut(&mut self, id: NoteId) -> &mut NoteViewState {
        self.views.entry(id).or_default()
    }

    /// Drop everything kept for a removed note.
    pub fn forget(&mut self, id: NoteId) {
        self.views.remove(&id);
        if self.focused == Some(id) {
            self.focused = None;
        }
    }
}

/// Content-driven sizing configuration
pub struct SizingState {
    pub rules: SizingRules,
    pub measure: Box<dyn TextMeasure>,
}

/// Interaction controller owning the whole board session.
///
/// There is exactly one instance per session; collaborators receive it by
/// reference instead of reaching for globals.
pub struct BoardApp {
    /// Session identity gate
    pub(crate) session: Session,
    /// Surface and note store
    pub(crate) canvas: CanvasState,
    /// Text editing state
    pub(crate) editing: EditingState,
    /// Auto-resize rules and text measurement
    pub(crate) sizing: SizingState,
}
