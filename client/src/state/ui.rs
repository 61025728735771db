//! Transient status/error messages.
//!
//! Messages auto-dismiss after a fixed TTL (3 s, matching the page
//! behavior): a message past its TTL is simply never returned.

#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::time::{Duration, Instant};

/// How long a message stays visible.
pub const MESSAGE_TTL: Duration = Duration::from_secs(3);

/// A single auto-dismissing status line.
#[derive(Clone, Debug, Default)]
pub struct StatusLine {
    current: Option<(String, Instant, Duration)>,
}

impl StatusLine {
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Show a message with the default TTL, replacing any previous one.
    pub fn set(&mut self, text: impl Into<String>) {
        self.set_with_ttl(text, MESSAGE_TTL);
    }

    /// Show a message with an explicit TTL.
    pub fn set_with_ttl(&mut self, text: impl Into<String>, ttl: Duration) {
        self.current = Some((text.into(), Instant::now(), ttl));
    }

    /// The current message, unless it has expired.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match &self.current {
            Some((text, posted, ttl)) if posted.elapsed() < *ttl => Some(text),
            _ => None,
        }
    }

    /// Dismiss early.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
