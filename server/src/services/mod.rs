//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic over the in-memory store so route
//! handlers can stay focused on protocol translation.

pub mod quiz;
