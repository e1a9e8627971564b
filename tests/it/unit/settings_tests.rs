//! Unit tests for settings loading.

use crate::helpers::{TestBoardBuilder, assert_footprint_bounds, note, note_ids};
use std::io::Write;
use stickyboard::settings::{BoardSettings, SettingsError};
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"sizing": {{"max_width": 360.0}}, "log_filter": "stickyboard=debug"}}"#
    )
    .unwrap();

    let settings = BoardSettings::load(file.path()).unwrap();
    assert_eq!(settings.sizing.max_width, 360.0);
    assert_eq!(settings.log_filter, "stickyboard=debug");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = BoardSettings::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, SettingsError::Io(_)));
}

#[test]
fn test_invalid_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"sizing": {{"char_width": -1.0}}}}"#).unwrap();

    let err = BoardSettings::load(file.path()).unwrap_err();
    assert!(matches!(err, SettingsError::Invalid(_)));
    assert!(err.to_string().contains("char_width"));
}

#[test]
fn test_blank_log_filter_is_rejected() {
    let err = BoardSettings::from_json(r#"{"log_filter": "  "}"#).unwrap_err();
    assert!(matches!(err, SettingsError::Invalid(_)));
}

#[test]
fn test_written_settings_load_back() {
    let mut settings = BoardSettings::default();
    settings.sizing.char_width = 10.0;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(settings.to_json().unwrap().as_bytes()).unwrap();

    assert_eq!(BoardSettings::load(file.path()).unwrap(), settings);
}

#[test]
fn test_settings_change_auto_resize() {
    let settings = BoardSettings::from_json(r#"{"sizing": {"max_width": 360.0}}"#).unwrap();
    let mut app = TestBoardBuilder::new()
        .with_settings(settings)
        .with_note((0.0, 0.0))
        .build();
    let id = note_ids(&app)[0];

    app.edit_text(id, "x".repeat(100));
    assert_eq!(note(&app, id).width(), 360.0);
    assert_eq!(app.sizing_rules().max_width, 360.0);
}

#[test]
fn test_out_of_bounds_footprint_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"sizing": {{"max_width": 480, "min_width": 50, "min_height": 10}}}}"#
    )
    .unwrap();

    let err = BoardSettings::load(file.path()).unwrap_err();
    assert!(matches!(err, SettingsError::Invalid(_)));
}

#[test]
fn test_unvalidated_settings_keep_notes_in_bounds() {
    let mut settings = BoardSettings::default();
    settings.sizing.max_width = 480.0;
    settings.sizing.min_width = 50.0;
    settings.sizing.min_height = 10.0;

    let mut app = TestBoardBuilder::new()
        .with_settings(settings)
        .with_note((0.0, 0.0))
        .build();
    let id = note_ids(&app)[0];

    app.edit_text(id, "x".repeat(100));
    assert_footprint_bounds(note(&app, id));
    assert_eq!(note(&app, id).size.0, 400.0);

    app.edit_text(id, "x");
    assert_footprint_bounds(note(&app, id));
    assert_eq!(note(&app, id).size, (200.0, 200.0));
}
