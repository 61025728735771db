//! Solve-page state: a stepper over one quiz's questions.
//!
//! INVARIANT: answer visibility resets to hidden whenever the current
//! index changes. Navigation is a no-op at either boundary; an empty
//! question list leaves both directions unavailable.

#[cfg(test)]
#[path = "solve_test.rs"]
mod tests;

use models::Question;

/// Sequential navigation over a quiz's questions with show/hide answer.
#[derive(Clone, Debug)]
pub struct SolveSession {
    questions: Vec<Question>,
    current: usize,
    show_answer: bool,
}

impl SolveSession {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions, current: 0, show_answer: false }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Zero-based index of the current question.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current + 1 < self.questions.len()
    }

    /// Advance to the next question. Returns whether the index moved.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        self.show_answer = false;
        true
    }

    /// Step back to the previous question. Returns whether the index moved.
    pub fn prev(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.current -= 1;
        self.show_answer = false;
        true
    }

    /// Flip answer visibility; returns the new visibility.
    pub fn toggle_answer(&mut self) -> bool {
        self.show_answer = !self.show_answer;
        self.show_answer
    }

    #[must_use]
    pub const fn answer_visible(&self) -> bool {
        self.show_answer
    }

    /// The current answer, only while visible.
    #[must_use]
    pub fn visible_answer(&self) -> Option<&str> {
        if self.show_answer {
            self.current_question().map(|q| q.answer.as_str())
        } else {
            None
        }
    }
}
