//! Content-driven note sizing.
//!
//! Every content change recomputes the note footprint:
//!
//! ```text
//! height = max(min_height, rendered_text_height + chrome_height)
//! width  = min(max(min_width, utf16_len * char_width), max_width)
//! ```
//!
//! The width rule is a coarse heuristic. It ignores font scale, wrapping and
//! glyph widths on purpose and must stay that way: notes grow one code unit
//! allowance at a time until they hit the maximum width, then only grow down.
//!
//! The rendered text height comes from a [`TextMeasure`]. The presentation
//! layer supplies one backed by real text shaping; [`MonospaceMeasure`] is a
//! fixed-advance estimate used when none is available.

use crate::constants::{
    BASE_FONT_SIZE, CARD_PADDING, CHAR_WIDTH_ALLOWANCE, GLYPH_ADVANCE_FACTOR, LINE_HEIGHT_FACTOR,
    MAX_AUTO_WIDTH, MIN_NOTE_HEIGHT, MIN_NOTE_WIDTH, NOTE_CHROME_HEIGHT, TEXT_PADDING,
};
use crate::types::FontScale;
use serde::{Deserialize, Serialize};

/// Numeric rules of the auto-resize algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingRules {
    pub min_width: f32,
    pub min_height: f32,
    pub max_width: f32,
    /// Width allowance per UTF-16 code unit of content
    pub char_width: f32,
    /// Space reserved above the text for header controls and padding
    pub chrome_height: f32,
}

impl Default for SizingRules {
    fn default() -> Self {
        Self {
            min_width: MIN_NOTE_WIDTH,
            min_height: MIN_NOTE_HEIGHT,
            max_width: MAX_AUTO_WIDTH,
            char_width: CHAR_WIDTH_ALLOWANCE,
            chrome_height: NOTE_CHROME_HEIGHT,
        }
    }
}

impl SizingRules {
    /// Width for the given content: linear in content length, clamped.
    ///
    /// Length is measured in UTF-16 code units, the unit text inputs report,
    /// so astral symbols such as emoji count twice.
    pub fn width_for(&self, content: &str) -> f32 {
        let content_length = content.encode_utf16().count() as f32;
        (content_length * self.char_width)
            .max(self.min_width)
            .min(self.max_width)
    }

    /// Height for a rendered text block. A NaN measurement collapses to the
    /// minimum height.
    pub fn height_for(&self, rendered_text_height: f32) -> f32 {
        (rendered_text_height + self.chrome_height).max(self.min_height)
    }

    /// Footprint `(width, height)` for the given content and measurement.
    pub fn fit(&self, content: &str, rendered_text_height: f32) -> (f32, f32) {
        (self.width_for(content), self.height_for(rendered_text_height))
    }

    /// Height left for the editable text region inside a note of `note_height`.
    pub fn text_area_height(&self, note_height: f32) -> f32 {
        (note_height - self.chrome_height).max(0.0)
    }

    /// Check the rules describe a non-empty footprint range inside the board's
    /// fixed bounds (`MIN_NOTE_WIDTH..=MAX_AUTO_WIDTH` wide, at least
    /// `MIN_NOTE_HEIGHT` tall).
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("min_width", self.min_width),
            ("min_height", self.min_height),
            ("max_width", self.max_width),
            ("char_width", self.char_width),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{name} must be a positive number, got {value}"));
            }
        }
        if !(self.chrome_height.is_finite() && self.chrome_height >= 0.0) {
            return Err(format!(
                "chrome_height must not be negative, got {}",
                self.chrome_height
            ));
        }
        if self.min_width < MIN_NOTE_WIDTH {
            return Err(format!(
                "min_width must be at least {MIN_NOTE_WIDTH}, got {}",
                self.min_width
            ));
        }
        if self.min_height < MIN_NOTE_HEIGHT {
            return Err(format!(
                "min_height must be at least {MIN_NOTE_HEIGHT}, got {}",
                self.min_height
            ));
        }
        if self.max_width > MAX_AUTO_WIDTH {
            return Err(format!(
                "max_width must be at most {MAX_AUTO_WIDTH}, got {}",
                self.max_width
            ));
        }
        if self.min_width > self.max_width {
            return Err(format!(
                "min_width ({}) exceeds max_width ({})",
                self.min_width, self.max_width
            ));
        }
        Ok(())
    }
}

/// Measures the wrapped height of a note's text.
pub trait TextMeasure {
    /// Height of `content` once laid out inside a note `note_width` wide at
    /// the given font scale, including the text region's own padding.
    fn text_height(&self, content: &str, note_width: f32, scale: FontScale) -> f32;
}

/// Fixed-advance text measurement.
///
/// Assumes every glyph has the same advance and wraps greedily by character
/// count. Explicit newlines always start a new line; an empty line still
/// occupies one line height.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonospaceMeasure;

impl TextMeasure for MonospaceMeasure {
    fn text_height(&self, content: &str, note_width: f32, scale: FontScale) -> f32 {
        let font_size = BASE_FONT_SIZE * scale.factor();
        let line_height = font_size * LINE_HEIGHT_FACTOR;
        let advance = font_size * GLYPH_ADVANCE_FACTOR;

        let available = (note_width - 2.0 * CARD_PADDING - 2.0 * TEXT_PADDING).max(advance);
        let chars_per_line = ((available / advance).floor() as usize).max(1);

        let lines: usize = content
            .split('\n')
            .map(|line| line.chars().count().div_ceil(chars_per_line).max(1))
            .sum();

        lines as f32 * line_height + 2.0 * TEXT_PADDING
    }
}

/// Recompute a note footprint after a content change.
///
/// The measurement is taken at the note's current width, before the new
/// width is applied.
pub fn auto_size(
    rules: &SizingRules,
    measure: &dyn TextMeasure,
    content: &str,
    current_width: f32,
    scale: FontScale,
) -> (f32, f32) {
    let rendered = measure.text_height(content, current_width, scale);
    rules.fit(content, rendered)
}
