//! Core types for the note board.
//!
//! Defines the note entity, its identifier and color, and the per-note font
//! scale used by the presentation controls.

use crate::constants::{DEFAULT_NOTE_SIZE, NOTE_PALETTE};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::fmt;

/// Unique identifier of a note within a board.
///
/// Allocated from a monotonic per-board counter and never reused, even after
/// the note it named has been removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NoteId(pub u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "note-{}", self.0)
    }
}

/// A color drawn from the fixed note palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NoteColor(&'static str);

impl NoteColor {
    /// Uniform draw over the palette.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(NOTE_PALETTE.choose(rng).copied().unwrap_or(NOTE_PALETTE[0]))
    }

    /// Palette entry at `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        NOTE_PALETTE.get(index).copied().map(Self)
    }

    pub fn is_in_palette(&self) -> bool {
        NOTE_PALETTE.contains(&self.0)
    }
}

impl fmt::Display for NoteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A sticky note placed on the board surface.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Note {
    /// Unique identifier for this note
    pub id: NoteId,
    /// Free-form text body
    pub content: String,
    /// Top-left corner in surface-local coordinates (x, y)
    pub position: (f32, f32),
    /// Footprint (width, height), driven by the auto-resize algorithm
    pub size: (f32, f32),
    /// Background color from the fixed palette
    pub color: NoteColor,
    /// Display name of the session that created the note
    pub owner_name: String,
}

impl Note {
    pub fn new(id: NoteId, position: (f32, f32), color: NoteColor, owner_name: impl Into<String>) -> Self {
        Self {
            id,
            content: String::new(),
            position,
            size: DEFAULT_NOTE_SIZE,
            color,
            owner_name: owner_name.into(),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.0
    }

    pub fn height(&self) -> f32 {
        self.size.1
    }
}

/// Per-note text scale, cycled by the font control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontScale {
    Small,
    #[default]
    Normal,
    Large,
}

impl FontScale {
    /// The next scale in the `small -> normal -> large -> small` cycle.
    pub fn next(self) -> Self {
        match self {
            FontScale::Small => FontScale::Normal,
            FontScale::Normal => FontScale::Large,
            FontScale::Large => FontScale::Small,
        }
    }

    /// Multiplier applied to the base font size.
    pub fn factor(self) -> f32 {
        match self {
            FontScale::Small => 0.875,
            FontScale::Normal => 1.0,
            FontScale::Large => 1.25,
        }
    }
}
