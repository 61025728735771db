//! Overview-page state: the cached quiz list.
//!
//! The cache is filled after a fetch and invalidated explicitly after any
//! mutating operation (delete, update) so the next read forces a refetch.

#[cfg(test)]
#[path = "overview_test.rs"]
mod tests;

use models::Quiz;

/// Coarse cache of the last quiz-list fetch.
#[derive(Clone, Debug, Default)]
pub struct QuizListCache {
    items: Option<Vec<Quiz>>,
}

impl QuizListCache {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: None }
    }

    /// Cached quizzes, if the cache is warm.
    #[must_use]
    pub fn get(&self) -> Option<&[Quiz]> {
        self.items.as_deref()
    }

    #[must_use]
    pub const fn is_warm(&self) -> bool {
        self.items.is_some()
    }

    /// Store a fresh fetch result.
    pub fn fill(&mut self, quizzes: Vec<Quiz>) {
        self.items = Some(quizzes);
    }

    /// Drop the cached list; the next read must refetch.
    pub fn invalidate(&mut self) {
        self.items = None;
    }
}
