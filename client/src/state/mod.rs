//! Page-state machines for the three quiz pages.
//!
//! Each module is pure state plus transitions; no I/O except the form's
//! `load`, which joins its two independent fetches.

pub mod form;
pub mod overview;
pub mod solve;
pub mod ui;
