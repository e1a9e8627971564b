//! Application lifecycle - construction, configuration and the identity gate.

use super::{BoardApp, CanvasState, EditingState, SizingState};
use crate::board::Board;
use crate::input::DragState;
use crate::input::coords::SurfaceBounds;
use crate::session::Session;
use crate::settings::BoardSettings;
use crate::sizing::{MonospaceMeasure, SizingRules, TextMeasure};
use tracing::{debug, warn};

impl BoardApp {
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Controller around an existing (typically seeded) board.
    pub fn with_board(board: Board) -> Self {
        Self {
            session: Session::new(),
            canvas: CanvasState {
                board,
                surface: SurfaceBounds::default(),
            },
            editing: EditingState::default(),
            sizing: SizingState {
                rules: SizingRules::default(),
                measure: Box::new(MonospaceMeasure),
            },
        }
    }

    /// Apply loaded settings.
    ///
    /// Sizing rules that fail validation are not applied, so settings built in
    /// code cannot push notes outside the footprint bounds either.
    pub fn with_settings(mut self, settings: &BoardSettings) -> Self {
        match settings.sizing.validate() {
            Ok(()) => self.sizing.rules = settings.sizing,
            Err(reason) => warn!(%reason, "sizing rules rejected, keeping current rules"),
        }
        self
    }

    /// Replace the text measurement used by auto-resize.
    pub fn with_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.sizing.measure = Box::new(measure);
        self
    }

    // ========================================================================
    // Identity gate
    // ========================================================================

    /// Callback for the identity-capture screen.
    pub fn submit_identity(&mut self, name: &str) -> bool {
        self.session.submit_identity(name)
    }

    /// False until an identity has been submitted; the host shows the
    /// identity-capture screen instead of the board meanwhile.
    pub fn is_board_enabled(&self) -> bool {
        self.session.is_identified()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // ========================================================================
    // Surface & accessors
    // ========================================================================

    /// Update where the surface sits on screen (after layout or scroll).
    pub fn set_surface_bounds(&mut self, bounds: SurfaceBounds) {
        debug!(
            x = bounds.origin.0,
            y = bounds.origin.1,
            width = bounds.size.0,
            height = bounds.size.1,
            "surface bounds updated"
        );
        self.canvas.surface = bounds;
    }

    pub fn surface_bounds(&self) -> SurfaceBounds {
        self.canvas.surface
    }

    /// Read-only view of the note store.
    pub fn board(&self) -> &Board {
        &self.canvas.board
    }

    pub fn drag_state(&self) -> DragState {
        DragState::of(&self.canvas.board)
    }

    pub fn sizing_rules(&self) -> &SizingRules {
        &self.sizing.rules
    }
}

impl Default for BoardApp {
    fn default() -> Self {
        Self::new()
    }
}
