//! Mouse down event handling - drag start, text focus, control presses.
//!
//! Only a press on a note's body starts a drag. The text region and the
//! control buttons claim the press without touching the drag state.

use crate::app::BoardApp;
use crate::input::{Dispatch, GestureTarget, NoteRegion, PointerEvent};
use crate::profile_scope;
use tracing::debug;

impl BoardApp {
    pub fn handle_mouse_down(&mut self, event: &PointerEvent) -> Dispatch {
        profile_scope!("handle_mouse_down");

        if !self.is_board_enabled() {
            return Dispatch::Ignored;
        }

        let (x, y) = self.canvas.surface.screen_to_surface(event.position);

        match event.target {
            GestureTarget::Surface => {
                // Pressing bare surface blurs any focused text region.
                self.editing.focused = None;
                Dispatch::Ignored
            }
            GestureTarget::Note { id, region } => match region {
                NoteRegion::Body => {
                    self.editing.focused = None;
                    if self.canvas.board.begin_drag(id, x, y) {
                        Dispatch::Changed
                    } else {
                        debug!(%id, "press on stale note");
                        Dispatch::Claimed
                    }
                }
                NoteRegion::Text => {
                    self.focus_text(id);
                    Dispatch::Claimed
                }
                NoteRegion::Control(_) => Dispatch::Claimed,
            },
        }
    }
}
