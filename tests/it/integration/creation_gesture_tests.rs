//! Integration tests for creating notes by double-clicking the surface.

use crate::helpers::{
    TestBoardBuilder, assert_note_count, double_click_surface, empty_app, note, note_ids, screen,
};
use std::collections::HashSet;
use stickyboard::{Dispatch, NoteControl, NoteId, NoteRegion, PointerEvent};

#[test]
fn test_double_click_creates_note_at_pointer() {
    let mut app = TestBoardBuilder::new().with_identity("Ada").build();

    assert_eq!(double_click_surface(&mut app, (100.0, 150.0)), Dispatch::Changed);
    assert_note_count(&app, 1);

    let id = note_ids(&app)[0];
    let created = note(&app, id);
    assert_eq!(created.position, (100.0, 150.0));
    assert_eq!(created.size, (200.0, 200.0));
    assert_eq!(created.owner_name, "Ada");
    assert_eq!(created.content, "");
    assert!(created.color.is_in_palette());
}

#[test]
fn test_double_click_uses_surface_local_position() {
    let mut app = TestBoardBuilder::new()
        .with_surface((64.0, 48.0), (1024.0, 768.0))
        .build();

    let event = PointerEvent::on_surface((164.0, 198.0));
    assert_eq!(app.handle_double_click(&event), Dispatch::Changed);
    assert_eq!(app.board().notes()[0].position, (100.0, 150.0));
}

#[test]
fn test_owner_name_is_trimmed_identity() {
    let mut app = TestBoardBuilder::new().with_identity("  Grace  ").build();
    double_click_surface(&mut app, (10.0, 10.0));
    assert_eq!(app.board().notes()[0].owner_name, "Grace");
}

#[test]
fn test_double_click_on_note_is_claimed() {
    let mut app = TestBoardBuilder::new().with_note((100.0, 100.0)).build();
    let id = note_ids(&app)[0];

    for region in [
        NoteRegion::Body,
        NoteRegion::Text,
        NoteRegion::Control(NoteControl::Recolor),
    ] {
        let event = PointerEvent::on_note(screen(&app, (150.0, 150.0)), id, region);
        assert_eq!(app.handle_double_click(&event), Dispatch::Claimed);
    }
    assert_note_count(&app, 1);
}

#[test]
fn test_surface_double_click_over_existing_note_creates_nothing() {
    let mut app = TestBoardBuilder::new().with_note((100.0, 100.0)).build();

    assert_eq!(double_click_surface(&mut app, (150.0, 150.0)), Dispatch::Claimed);
    assert_note_count(&app, 1);

    assert_eq!(double_click_surface(&mut app, (500.0, 150.0)), Dispatch::Changed);
    assert_note_count(&app, 2);
}

#[test]
fn test_no_identity_creates_nothing() {
    let mut app = TestBoardBuilder::new().anonymous().build();
    assert!(!app.is_board_enabled());

    assert_eq!(double_click_surface(&mut app, (100.0, 150.0)), Dispatch::Ignored);
    assert_note_count(&app, 0);
    assert!(app.render_notes().is_empty());
}

#[test]
fn test_identity_unlocks_board() {
    let mut app = TestBoardBuilder::new().anonymous().build();
    assert!(!app.submit_identity("   "));
    assert!(!app.is_board_enabled());

    assert!(app.submit_identity("Ada"));
    assert!(app.is_board_enabled());
    assert_eq!(app.session().identity(), Some("Ada"));

    // The identity is fixed for the rest of the session.
    assert!(!app.submit_identity("Grace"));
    double_click_surface(&mut app, (0.0, 0.0));
    assert_eq!(app.board().notes()[0].owner_name, "Ada");
}

#[test]
fn test_each_double_click_gets_fresh_id() {
    let mut app = empty_app();
    for i in 0..5 {
        let (col, row) = (i % 3, i / 3);
        double_click_surface(&mut app, (col as f32 * 220.0, row as f32 * 220.0));
    }
    assert_note_count(&app, 5);

    let ids: HashSet<NoteId> = note_ids(&app).into_iter().collect();
    assert_eq!(ids.len(), 5);
}

#[test]
fn test_created_notes_render_in_creation_order() {
    let mut app = empty_app();
    double_click_surface(&mut app, (0.0, 0.0));
    double_click_surface(&mut app, (300.0, 0.0));

    let renders = app.render_notes();
    assert_eq!(renders.len(), 2);
    assert_eq!(renders[0].note.position, (0.0, 0.0));
    assert_eq!(renders[1].note.position, (300.0, 0.0));
}

#[test]
fn test_double_click_outside_surface_is_ignored() {
    let mut app = TestBoardBuilder::new()
        .with_surface((100.0, 100.0), (400.0, 300.0))
        .build();

    let event = PointerEvent::on_surface((50.0, 150.0));
    assert_eq!(app.handle_double_click(&event), Dispatch::Ignored);
    assert_note_count(&app, 0);
}

#[test]
fn test_single_click_on_surface_does_nothing() {
    let mut app = empty_app();
    let event = PointerEvent::on_surface(screen(&app, (100.0, 100.0)));
    assert_eq!(app.handle_click(&event), Dispatch::Ignored);
    assert_note_count(&app, 0);
}
