//! Drag operations - the dragged note follows the pointer.
//!
//! ## Performance Notes
//!
//! Mouse move fires at display rate while dragging. The handler exits early
//! when idle and otherwise performs one position update plus one spatial
//! index update.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::app::BoardApp;
use crate::input::Dispatch;
use crate::profile_scope;

impl BoardApp {
    /// Pointer moved over the surface (screen coordinates).
    pub fn handle_mouse_move(&mut self, position: (f32, f32)) -> Dispatch {
        profile_scope!("handle_mouse_move");

        if !self.is_board_enabled() || self.canvas.board.dragging().is_none() {
            return Dispatch::Ignored;
        }

        let (x, y) = self.canvas.surface.screen_to_surface(position);
        Dispatch::changed_if(self.canvas.board.update_drag(x, y))
    }
}
