//! Integration tests for stickyboard.
//!
//! These tests drive the board through the public pointer and editing
//! handlers and check the resulting store and render state.

mod creation_gesture_tests;
