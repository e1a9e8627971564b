//! Note editing - text edits, symbol insertion and the header controls.
//!
//! Every content mutation (typing or symbol insertion) is followed by an
//! auto-resize before control returns to the caller, so the stored footprint
//! always matches the stored content.

use super::BoardApp;
use crate::input::{Dispatch, NoteControl};
use crate::sizing;
use crate::types::{FontScale, NoteColor, NoteId};
use tracing::debug;

use super::NoteViewState;

/// Caret or selection inside a note's text, as char offsets.
///
/// `start == end` is a plain caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextSelection {
    pub start: usize,
    pub end: usize,
}

impl TextSelection {
    /// Selection between two offsets, in either order.
    pub fn new(anchor: usize, head: usize) -> Self {
        Self {
            start: anchor.min(head),
            end: anchor.max(head),
        }
    }

    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Clamp both ends to a text of `char_len` chars.
    pub fn clamped(self, char_len: usize) -> Self {
        Self::new(self.start.min(char_len), self.end.min(char_len))
    }
}

/// Insert `symbol` over `selection` in `content`.
///
/// Returns the new content, `content[..start] + symbol + content[end..]`,
/// and the caret offset just past the inserted symbol. Offsets are chars and
/// are clamped to the content length.
pub fn splice_symbol(content: &str, selection: TextSelection, symbol: &str) -> (String, usize) {
    let selection = selection.clamped(content.chars().count());
    let start = byte_offset(content, selection.start);
    let end = byte_offset(content, selection.end);

    let mut spliced = String::with_capacity(content.len() + symbol.len());
    spliced.push_str(&content[..start]);
    spliced.push_str(symbol);
    spliced.push_str(&content[end..]);

    (spliced, selection.start + symbol.chars().count())
}

fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(index, _)| index)
}

impl BoardApp {
    // ========================================================================
    // Text
    // ========================================================================

    /// Replace a note's text with what the text region now holds.
    pub fn edit_text(&mut self, id: NoteId, text: impl Into<String>) -> Dispatch {
        if !self.is_board_enabled() {
            return Dispatch::Ignored;
        }

        let text = text.into();
        let char_len = text.chars().count();
        if !self.canvas.board.set_content(id, text) {
            return Dispatch::Ignored;
        }

        let view = self.editing.view_mut(id);
        view.selection = view.selection.clamped(char_len);
        self.apply_auto_size(id);
        Dispatch::Changed
    }

    /// Record the caret/selection reported by the text region.
    pub fn set_selection(&mut self, id: NoteId, selection: TextSelection) -> bool {
        let Some(note) = self.canvas.board.note(id) else {
            return false;
        };
        let char_len = note.content.chars().count();
        self.editing.view_mut(id).selection = selection.clamped(char_len);
        true
    }

    pub fn selection(&self, id: NoteId) -> Option<TextSelection> {
        self.canvas
            .board
            .contains(id)
            .then(|| self.editing.view(id).selection)
    }

    /// Give input focus to a note's text region.
    pub fn focus_text(&mut self, id: NoteId) -> bool {
        if !self.canvas.board.contains(id) {
            return false;
        }
        self.editing.focused = Some(id);
        true
    }

    pub fn focused_note(&self) -> Option<NoteId> {
        self.editing.focused
    }

    /// Insert a symbol at the note's caret (replacing any selection).
    ///
    /// Returns the caret offset after the insertion. The caret is restored
    /// there, focus returns to the text region, and the picker closes.
    pub fn insert_symbol(&mut self, id: NoteId, symbol: &str) -> Option<usize> {
        if !self.is_board_enabled() {
            return None;
        }
        let note = self.canvas.board.note(id)?;
        let selection = self.editing.view(id).selection;
        let (content, caret) = splice_symbol(&note.content, selection, symbol);

        self.canvas.board.set_content(id, content);
        self.apply_auto_size(id);

        let view = self.editing.view_mut(id);
        view.selection = TextSelection::caret(caret);
        view.symbol_picker_open = false;
        self.editing.focused = Some(id);

        debug!(%id, symbol, caret, "symbol inserted");
        Some(caret)
    }

    // ========================================================================
    // Controls
    // ========================================================================

    /// Run the action behind a note control button.
    pub fn activate_control(&mut self, id: NoteId, control: NoteControl) -> Dispatch {
        if !self.is_board_enabled() {
            return Dispatch::Ignored;
        }

        let changed = match control {
            NoteControl::Recolor => self.recolor_note(id).is_some(),
            NoteControl::CycleFontScale => self.cycle_font_scale(id).is_some(),
            NoteControl::ToggleSymbolPicker => self.toggle_symbol_picker(id).is_some(),
            NoteControl::Remove => self.remove_note(id),
            NoteControl::PickSymbol(_) => match control.symbol() {
                Some(symbol) => self.insert_symbol(id, symbol).is_some(),
                None => false,
            },
        };

        // A stale control still belongs to a note; it never reaches the surface.
        if changed { Dispatch::Changed } else { Dispatch::Claimed }
    }

    pub fn recolor_note(&mut self, id: NoteId) -> Option<NoteColor> {
        self.canvas.board.recolor(id)
    }

    pub fn remove_note(&mut self, id: NoteId) -> bool {
        let removed = self.canvas.board.remove_note(id);
        if removed {
            self.editing.forget(id);
        }
        removed
    }

    /// Advance the note's font scale. Content and size are left alone.
    pub fn cycle_font_scale(&mut self, id: NoteId) -> Option<FontScale> {
        if !self.canvas.board.contains(id) {
            return None;
        }
        let view = self.editing.view_mut(id);
        view.font_scale = view.font_scale.next();
        Some(view.font_scale)
    }

    /// Open or close the symbol picker. Returns whether it is now open.
    pub fn toggle_symbol_picker(&mut self, id: NoteId) -> Option<bool> {
        if !self.canvas.board.contains(id) {
            return None;
        }
        let view = self.editing.view_mut(id);
        view.symbol_picker_open = !view.symbol_picker_open;
        Some(view.symbol_picker_open)
    }

    pub fn view_state(&self, id: NoteId) -> Option<NoteViewState> {
        self.canvas
            .board
            .contains(id)
            .then(|| self.editing.view(id))
    }

    // ========================================================================
    // Auto-resize
    // ========================================================================

    /// Refit a note's footprint to its content.
    pub(crate) fn apply_auto_size(&mut self, id: NoteId) {
        let Some(note) = self.canvas.board.note(id) else {
            return;
        };
        let scale = self.editing.view(id).font_scale;
        let current = note.size;
        let (width, height) = sizing::auto_size(
            &self.sizing.rules,
            self.sizing.measure.as_ref(),
            &note.content,
            note.width(),
            scale,
        );

        if (width, height) != current {
            self.canvas.board.resize(id, width, height);
        }
    }
}
