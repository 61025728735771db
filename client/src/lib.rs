//! Typed API client and page-state machines for the quiz application.
//!
//! The [`api`] module wraps the REST surface in typed calls with a single
//! error taxonomy. The [`state`] modules are pure state machines for the
//! three pages (overview, solve, form); they hold no I/O and are driven by
//! whichever frontend hosts them.

pub mod api;
pub mod state;

pub use api::{ApiClient, ApiError};
