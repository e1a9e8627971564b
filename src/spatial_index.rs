//! Spatial index over note footprints.
//!
//! R-tree backed point queries decide whether a surface point lies on a note
//! or on empty surface, without scanning every note on each gesture.

use crate::types::NoteId;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// Bounding box of one note in surface-local coordinates.
#[derive(Debug, Clone, Copy)]
pub struct NoteFootprint {
    pub note_id: NoteId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl NoteFootprint {
    pub fn new(note_id: NoteId, position: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            note_id,
            min_x: position.0,
            min_y: position.1,
            max_x: position.0 + size.0,
            max_y: position.1 + size.1,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for NoteFootprint {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

// Removal looks entries up by id; the stored box is always the current one.
impl PartialEq for NoteFootprint {
    fn eq(&self, other: &Self) -> bool {
        self.note_id == other.note_id
    }
}

/// Footprint index keyed by note id.
pub struct SpatialIndex {
    tree: RTree<NoteFootprint>,
    entries: HashMap<NoteId, NoteFootprint>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or replace the footprint of a note.
    pub fn upsert(&mut self, note_id: NoteId, position: (f32, f32), size: (f32, f32)) {
        if let Some(old_entry) = self.entries.remove(&note_id) {
            self.tree.remove(&old_entry);
        }

        let entry = NoteFootprint::new(note_id, position, size);
        self.tree.insert(entry);
        self.entries.insert(note_id, entry);
    }

    pub fn remove(&mut self, note_id: NoteId) -> bool {
        match self.entries.remove(&note_id) {
            Some(entry) => {
                self.tree.remove(&entry);
                true
            }
            None => false,
        }
    }

    /// All notes whose footprint contains the point.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<NoteId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.note_id)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
