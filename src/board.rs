//! Board state store.
//!
//! The [`Board`] owns the ordered note collection and the single drag
//! selection. It is the only writer of note geometry and content; every
//! operation either applies completely or is a silent no-op (stale ids,
//! missing owner name), so observers never see a half-applied change.
//!
//! ## Coordinates
//!
//! All positions handed to the store are surface-local. Translating raw
//! pointer positions is the input layer's job (see `input::coords`).
//!
//! ## Revisions
//!
//! Each successful mutation bumps [`Board::revision`]. Presentation code
//! re-derives its view whenever the revision changes; no-op calls leave it
//! untouched.

use crate::spatial_index::SpatialIndex;
use crate::types::{Note, NoteColor, NoteId};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace};

/// The note currently being repositioned, and where it was grabbed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSelection {
    pub note_id: NoteId,
    /// Pointer position minus note position at drag start
    pub grab_offset: (f32, f32),
}

/// In-memory note collection plus drag selection.
pub struct Board {
    notes: Vec<Note>,
    drag: Option<DragSelection>,
    next_note_id: u64,
    revision: u64,
    index: SpatialIndex,
    rng: StdRng,
}

impl Board {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Board with a deterministic color sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            notes: Vec::new(),
            drag: None,
            next_note_id: 1,
            revision: 0,
            index: SpatialIndex::new(),
            rng,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Notes in creation order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.note(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Id of the note being dragged, if any.
    pub fn dragging(&self) -> Option<NoteId> {
        self.drag.map(|drag| drag.note_id)
    }

    pub fn drag_offset(&self) -> Option<(f32, f32)> {
        self.drag.map(|drag| drag.grab_offset)
    }

    pub fn is_dragging(&self, id: NoteId) -> bool {
        self.dragging() == Some(id)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Topmost note under a surface-local point.
    ///
    /// The dragged note is drawn above everything else; otherwise later notes
    /// cover earlier ones.
    pub fn note_at(&self, x: f32, y: f32) -> Option<NoteId> {
        if self.index.is_empty() {
            return None;
        }

        let candidates = self.index.query_point(x, y);
        if candidates.is_empty() {
            return None;
        }

        if let Some(dragged) = self.dragging() {
            if candidates.contains(&dragged) {
                return Some(dragged);
            }
        }

        self.notes
            .iter()
            .rev()
            .find(|note| candidates.contains(&note.id))
            .map(|note| note.id)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Create a note at a surface-local point.
    ///
    /// Refused when `owner_name` is empty. The note starts empty, at the
    /// minimum footprint, with a color drawn uniformly from the palette.
    pub fn create_note(&mut self, x: f32, y: f32, owner_name: &str) -> Option<NoteId> {
        if owner_name.is_empty() {
            debug!("create_note refused: no owner name");
            return None;
        }

        let id = NoteId(self.next_note_id);
        self.next_note_id += 1;

        let color = NoteColor::random(&mut self.rng);
        let note = Note::new(id, (x, y), color, owner_name);
        self.index.upsert(id, note.position, note.size);
        self.notes.push(note);
        self.touch();

        debug!(%id, x, y, %color, "note created");
        Some(id)
    }

    /// Remove a note. Clears the drag selection if it pointed at this note.
    pub fn remove_note(&mut self, id: NoteId) -> bool {
        let Some(index) = self.position_of(id) else {
            debug!(%id, "remove_note: unknown note");
            return false;
        };

        self.notes.remove(index);
        self.index.remove(id);
        if self.is_dragging(id) {
            self.drag = None;
        }
        self.touch();

        debug!(%id, "note removed");
        true
    }

    /// Assign a fresh random palette color. The new color may equal the old.
    pub fn recolor(&mut self, id: NoteId) -> Option<NoteColor> {
        let color = NoteColor::random(&mut self.rng);
        let note = self.note_mut(id)?;
        note.color = color;
        self.touch();

        debug!(%id, %color, "note recolored");
        Some(color)
    }

    /// Replace the note text verbatim.
    pub fn set_content(&mut self, id: NoteId, text: impl Into<String>) -> bool {
        let Some(note) = self.note_mut(id) else {
            debug!(%id, "set_content: unknown note");
            return false;
        };
        note.content = text.into();
        self.touch();
        true
    }

    /// Set the note footprint directly. Callers are responsible for bounds.
    pub fn resize(&mut self, id: NoteId, width: f32, height: f32) -> bool {
        let Some(note) = self.note_mut(id) else {
            debug!(%id, "resize: unknown note");
            return false;
        };
        note.size = (width, height);
        let position = note.position;
        self.index.upsert(id, position, (width, height));
        self.touch();
        true
    }

    /// Move a note programmatically (outside of a drag).
    pub fn set_position(&mut self, id: NoteId, x: f32, y: f32) -> bool {
        let Some(note) = self.note_mut(id) else {
            debug!(%id, "set_position: unknown note");
            return false;
        };
        note.position = (x, y);
        let size = note.size;
        self.index.upsert(id, (x, y), size);
        self.touch();
        true
    }

    // ========================================================================
    // Drag protocol
    // ========================================================================

    /// Select a note for dragging and remember where it was grabbed.
    pub fn begin_drag(&mut self, id: NoteId, pointer_x: f32, pointer_y: f32) -> bool {
        let Some(note) = self.note(id) else {
            debug!(%id, "begin_drag: unknown note");
            return false;
        };

        let grab_offset = (pointer_x - note.position.0, pointer_y - note.position.1);
        self.drag = Some(DragSelection {
            note_id: id,
            grab_offset,
        });
        self.touch();

        debug!(%id, offset_x = grab_offset.0, offset_y = grab_offset.1, "drag started");
        true
    }

    /// Move the dragged note so the grab point stays under the pointer.
    pub fn update_drag(&mut self, pointer_x: f32, pointer_y: f32) -> bool {
        let Some(DragSelection {
            note_id,
            grab_offset,
        }) = self.drag
        else {
            return false;
        };

        let x = pointer_x - grab_offset.0;
        let y = pointer_y - grab_offset.1;

        let Some(note) = self.note_mut(note_id) else {
            // Cannot happen while removal clears the selection; recover anyway.
            self.drag = None;
            return false;
        };
        note.position = (x, y);
        let size = note.size;
        self.index.upsert(note_id, (x, y), size);
        self.touch();

        trace!(id = %note_id, x, y, "drag moved");
        true
    }

    /// Clear the drag selection, whatever the previous state.
    pub fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            self.touch();
            debug!(id = %drag.note_id, "drag ended");
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn position_of(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    fn note_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.id == id)
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
