//! Render data handed to the presentation layer.
//!
//! The view is re-derived from the store on demand; nothing here is cached.
//! The dragged note renders without layout transitions (smoothing during a
//! drag lags behind the pointer) and above every other note.

use super::BoardApp;
use crate::constants::{DRAGGING_Z_INDEX, RESTING_Z_INDEX};
use crate::types::{FontScale, Note};
use serde::Serialize;

/// Everything needed to draw one note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteRender {
    pub note: Note,
    pub font_scale: FontScale,
    pub symbol_picker_open: bool,
    /// Whether the text region holds input focus
    pub focused: bool,
    /// Whether position/size changes may be animated
    pub animate: bool,
    pub z_index: u32,
    /// Height given to the editable text region
    pub text_area_height: f32,
}

impl BoardApp {
    /// Derive the render list, in creation order.
    ///
    /// Empty while the board is disabled (no session identity).
    pub fn render_notes(&self) -> Vec<NoteRender> {
        if !self.is_board_enabled() {
            return Vec::new();
        }

        let board = &self.canvas.board;
        board
            .notes()
            .iter()
            .map(|note| {
                let view = self.editing.view(note.id);
                let dragging = board.is_dragging(note.id);
                NoteRender {
                    note: note.clone(),
                    font_scale: view.font_scale,
                    symbol_picker_open: view.symbol_picker_open,
                    focused: self.editing.focused == Some(note.id),
                    animate: !dragging,
                    z_index: if dragging { DRAGGING_Z_INDEX } else { RESTING_Z_INDEX },
                    text_area_height: self.sizing.rules.text_area_height(note.height()),
                }
            })
            .collect()
    }
}
