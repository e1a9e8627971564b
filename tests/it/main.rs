//! Single test binary entry point.
//!
//! All integration tests compile into one binary to keep linking cheap.
//!
//! Structure:
//! - helpers: Builders and pointer helpers shared by all tests
//! - integration: Multi-component workflow tests (pointer -> store -> render)
//! - unit: Single-component unit tests

mod integration;
