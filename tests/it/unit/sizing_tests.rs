//! Unit tests for the auto-resize algorithm.

use crate::helpers::{
    TEST_SEED, TestBoardBuilder, app_with_note, assert_footprint_bounds, note, note_ids,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stickyboard::sizing::{MonospaceMeasure, SizingRules, TextMeasure, auto_size};
use stickyboard::FontScale;

/// Measure that reports one fixed line height per newline-separated line.
struct LinesMeasure(f32);

impl TextMeasure for LinesMeasure {
    fn text_height(&self, content: &str, _note_width: f32, _scale: FontScale) -> f32 {
        content.split('\n').count() as f32 * self.0
    }
}

#[test]
fn test_sixty_chars_hit_max_width() {
    let rules = SizingRules::default();
    let (width, _) = rules.fit(&"x".repeat(60), 0.0);
    assert_eq!(width, 400.0);
}

#[test]
fn test_emoji_count_as_two_units() {
    let (mut app, id) = app_with_note((0.0, 0.0));

    app.edit_text(id, "😀".repeat(30));
    assert_eq!(note(&app, id).width(), 400.0);

    app.edit_text(id, "😀".repeat(13));
    assert_eq!(note(&app, id).width(), 208.0);
}

#[test]
fn test_width_is_linear_between_bounds() {
    let rules = SizingRules::default();
    assert_eq!(rules.width_for(&"a".repeat(26)), 208.0);
    assert_eq!(rules.width_for(&"a".repeat(49)), 392.0);
}

#[test]
fn test_width_ignores_font_scale() {
    let rules = SizingRules::default();
    let content = "x".repeat(40);
    for scale in [FontScale::Small, FontScale::Normal, FontScale::Large] {
        let (width, _) = auto_size(&rules, &MonospaceMeasure, &content, 200.0, scale);
        assert_eq!(width, 320.0);
    }
}

#[test]
fn test_height_follows_rendered_text() {
    let rules = SizingRules::default();
    let content = "1\n2\n3\n4\n5\n6\n7\n8\n9\n10";
    let (_, height) = auto_size(&rules, &LinesMeasure(24.0), content, 200.0, FontScale::Normal);
    assert_eq!(height, 10.0 * 24.0 + 40.0);
}

#[test]
fn test_bounds_hold_for_random_inputs() {
    let rules = SizingRules::default();
    let mut rng = StdRng::seed_from_u64(TEST_SEED);

    for _ in 0..500 {
        let len = rng.gen_range(0..400);
        let content: String = (0..len)
            .map(|_| if rng.gen_bool(0.1) { '\n' } else { 'w' })
            .collect();
        let rendered = rng.gen_range(-100.0..2000.0);
        let (width, height) = rules.fit(&content, rendered);
        assert!((200.0..=400.0).contains(&width));
        assert!(height >= 200.0);
    }
}

#[test]
fn test_custom_rules_from_settings() {
    let rules = SizingRules {
        min_width: 240.0,
        max_width: 360.0,
        ..SizingRules::default()
    };
    assert!(rules.validate().is_ok());
    assert_eq!(rules.width_for(&"x".repeat(100)), 360.0);
    assert_eq!(rules.width_for(""), 240.0);
}

#[test]
fn test_notes_stay_in_bounds_after_edits() {
    let mut app = TestBoardBuilder::new().with_n_notes(3).build();
    let ids = note_ids(&app);
    let mut rng = StdRng::seed_from_u64(TEST_SEED);

    for _ in 0..100 {
        let id = ids[rng.gen_range(0..ids.len())];
        let len = rng.gen_range(0..600);
        let text: String = (0..len)
            .map(|_| if rng.gen_bool(0.05) { '\n' } else { 'q' })
            .collect();
        app.edit_text(id, text);
        assert_footprint_bounds(note(&app, id));
    }
}

#[test]
fn test_long_text_grows_note_downwards() {
    let mut app = TestBoardBuilder::new().with_note((0.0, 0.0)).build();
    let id = note_ids(&app)[0];

    app.edit_text(id, "lorem ipsum ".repeat(80));
    let tall = note(&app, id).size;
    assert_eq!(tall.0, 400.0);
    assert!(tall.1 > 200.0);

    app.edit_text(id, "");
    assert_eq!(note(&app, id).size, (200.0, 200.0));
}

#[test]
fn test_app_uses_supplied_measure() {
    let (app, id) = app_with_note((0.0, 0.0));
    let mut app = app.with_measure(LinesMeasure(100.0));

    app.edit_text(id, "one\ntwo\nthree");
    assert_eq!(note(&app, id).size, (200.0, 340.0));
}
