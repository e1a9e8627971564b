//! Board-wide constants.
//!
//! Centralizes the note footprint rules, the color palette, and the symbol
//! set so the sizing algorithm and the store agree on the same numbers.

// ============================================================================
// Note Footprint
// ============================================================================

/// Minimum note width in surface units
pub const MIN_NOTE_WIDTH: f32 = 200.0;

/// Minimum note height in surface units
pub const MIN_NOTE_HEIGHT: f32 = 200.0;

/// Largest width the auto-resize algorithm will grow a note to
pub const MAX_AUTO_WIDTH: f32 = 400.0;

/// Width allowance per character of content (coarse heuristic)
pub const CHAR_WIDTH_ALLOWANCE: f32 = 8.0;

/// Vertical space reserved for the note header controls and padding
pub const NOTE_CHROME_HEIGHT: f32 = 40.0;

/// Footprint of a freshly created note
pub const DEFAULT_NOTE_SIZE: (f32, f32) = (MIN_NOTE_WIDTH, MIN_NOTE_HEIGHT);

// ============================================================================
// Text Metrics (default measurer)
// ============================================================================

/// Base font size in surface units (1rem)
pub const BASE_FONT_SIZE: f32 = 16.0;

/// Line height as a multiple of the font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.5;

/// Average glyph advance as a multiple of the font size
pub const GLYPH_ADVANCE_FACTOR: f32 = 0.55;

/// Padding around the editable text region (each side)
pub const TEXT_PADDING: f32 = 8.0;

/// Horizontal padding of the note card (each side)
pub const CARD_PADDING: f32 = 16.0;

// ============================================================================
// Stacking
// ============================================================================

/// Stacking order of a resting note
pub const RESTING_Z_INDEX: u32 = 1;

/// Stacking order of the note currently being dragged
pub const DRAGGING_Z_INDEX: u32 = 1000;

// ============================================================================
// Palette & Symbols
// ============================================================================

/// Fixed note color palette (hex)
pub const NOTE_PALETTE: [&str; 15] = [
    "#fef3c7", "#e9d5ff", "#bfdbfe", "#d1fae5", "#fee2e2",
    "#ddd6fe", "#fde68a", "#c7d2fe", "#fecaca", "#d1d5db",
    "#fcd34d", "#a7f3d0", "#fdba74", "#f5d0fe", "#93c5fd",
];

/// Symbols offered by the note symbol picker
pub const NOTE_SYMBOLS: [&str; 15] = [
    "😀", "😂", "🤔", "👍", "👎", "❤️", "🎉", "🔥", "🌟", "💡", "📌", "🚀", "💪", "🙌", "👀",
];

// ============================================================================
// Logging
// ============================================================================

/// Default `EnvFilter` directive when none is configured
pub const DEFAULT_LOG_FILTER: &str = "stickyboard=info";
