//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the single `QuizStore` behind an async `RwLock`. The store is an
//! explicit, constructible repository: `new()` starts empty, `seeded()`
//! starts with the fixed sample dataset, and `reset()` returns a store to
//! the seeded state. Nothing survives a process restart.

use std::collections::BTreeMap;
use std::sync::Arc;

use models::{Question, Quiz};
use tokio::sync::RwLock;

use crate::seed;

// =============================================================================
// QUIZ STORE
// =============================================================================

/// In-memory repository of quizzes and the flat question bank.
///
/// ID counters are monotonic for the lifetime of the store: they start at
/// `max existing ID + 1` and never move backwards, so a freshly assigned ID
/// cannot collide with a bank record even after deletes.
#[derive(Debug)]
pub struct QuizStore {
    /// Quizzes keyed by ID; `BTreeMap` keeps listings in ID order.
    pub quizzes: BTreeMap<i64, Quiz>,
    /// Every question record ever adopted, across all quizzes.
    pub bank: BTreeMap<i64, Question>,
    next_quiz_id: i64,
    next_question_id: i64,
}

impl QuizStore {
    /// An empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            quizzes: BTreeMap::new(),
            bank: BTreeMap::new(),
            next_quiz_id: 1,
            next_question_id: 1,
        }
    }

    /// A store pre-populated with the sample quizzes.
    #[must_use]
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for quiz in seed::sample_quizzes() {
            store.insert_quiz(quiz);
        }
        store
    }

    /// Return the store to its freshly seeded state.
    pub fn reset(&mut self) {
        *self = Self::seeded();
    }

    /// Insert a fully formed quiz, registering its questions in the bank and
    /// advancing both ID counters past any IDs it carries.
    pub fn insert_quiz(&mut self, quiz: Quiz) {
        for question in &quiz.questions {
            self.next_question_id = self.next_question_id.max(question.id + 1);
            self.bank.insert(question.id, question.clone());
        }
        self.next_quiz_id = self.next_quiz_id.max(quiz.id + 1);
        self.quizzes.insert(quiz.id, quiz);
    }

    /// Claim the next quiz ID.
    pub fn allocate_quiz_id(&mut self) -> i64 {
        let id = self.next_quiz_id;
        self.next_quiz_id += 1;
        id
    }

    /// Claim the next question ID.
    pub fn allocate_question_id(&mut self) -> i64 {
        let id = self.next_question_id;
        self.next_question_id += 1;
        id
    }
}

impl Default for QuizStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — the store is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<QuizStore>>,
}

impl AppState {
    #[must_use]
    pub fn new(store: QuizStore) -> Self {
        Self { store: Arc::new(RwLock::new(store)) }
    }

    /// State over a freshly seeded store, as used at startup.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(QuizStore::seeded())
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
