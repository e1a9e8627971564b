//! Mouse up event handling - drag end, clicks, and note creation.
//!
//! Releasing the pointer and leaving the surface both end a drag; leaving is
//! the only cancellation path. Double-activation on bare surface creates a
//! note where it happened.

use crate::app::BoardApp;
use crate::input::{Dispatch, GestureTarget, NoteRegion, PointerEvent};
use crate::profile_scope;
use tracing::debug;

impl BoardApp {
    pub fn handle_mouse_up(&mut self, position: (f32, f32)) -> Dispatch {
        profile_scope!("handle_mouse_up");
        if let Some(id) = self.canvas.board.dragging() {
            let (x, y) = self.canvas.surface.screen_to_surface(position);
            debug!(%id, x, y, "released drag");
        }
        self.finish_drag()
    }

    /// Pointer left the surface: same as a release.
    pub fn handle_mouse_leave(&mut self) -> Dispatch {
        self.finish_drag()
    }

    /// A completed click (press and release on the same target).
    ///
    /// Control buttons act on click; everything else was already handled on
    /// press.
    pub fn handle_click(&mut self, event: &PointerEvent) -> Dispatch {
        if !self.is_board_enabled() {
            return Dispatch::Ignored;
        }

        match event.target {
            GestureTarget::Note {
                id,
                region: NoteRegion::Control(control),
            } => self.activate_control(id, control),
            GestureTarget::Note { .. } => Dispatch::Claimed,
            GestureTarget::Surface => Dispatch::Ignored,
        }
    }

    /// Double-activation: creates a note on bare surface.
    pub fn handle_double_click(&mut self, event: &PointerEvent) -> Dispatch {
        profile_scope!("handle_double_click");

        if event.target.claims_gesture() {
            return Dispatch::Claimed;
        }

        let Some(owner_name) = self.session.identity() else {
            debug!("double click ignored: no session identity");
            return Dispatch::Ignored;
        };

        if !self.canvas.surface.contains_screen_point(event.position) {
            return Dispatch::Ignored;
        }

        let (x, y) = self.canvas.surface.screen_to_surface(event.position);
        if let Some(id) = self.canvas.board.note_at(x, y) {
            debug!(%id, x, y, "double click over a note: not creating");
            return Dispatch::Claimed;
        }

        Dispatch::changed_if(self.canvas.board.create_note(x, y, owner_name).is_some())
    }

    fn finish_drag(&mut self) -> Dispatch {
        if self.canvas.board.dragging().is_none() {
            return Dispatch::Ignored;
        }
        self.canvas.board.end_drag();
        Dispatch::Changed
    }
}
