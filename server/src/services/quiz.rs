//! Quiz service — CRUD over the in-memory store and question adoption.
//!
//! DESIGN
//! ======
//! Create and update both funnel the submitted question list through
//! [`adopt_questions`]: inputs carrying an ID are reused as-is, inputs
//! without one are assigned the next sequential ID and recorded in the flat
//! question bank. Submission order is preserved. Bank records are never
//! deleted — removing a question from a quiz, or deleting a whole quiz,
//! only changes that quiz.

use models::{Question, QuestionInput, Quiz, QuizPayload};
use tracing::info;

use crate::state::QuizStore;

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("quiz not found: {0}")]
    NotFound(i64),
}

/// List all quizzes in ID order.
#[must_use]
pub fn list_quizzes(store: &QuizStore) -> Vec<Quiz> {
    store.quizzes.values().cloned().collect()
}

/// Fetch one quiz by ID.
///
/// # Errors
///
/// Returns [`QuizError::NotFound`] if no quiz has this ID.
pub fn get_quiz(store: &QuizStore, id: i64) -> Result<Quiz, QuizError> {
    store.quizzes.get(&id).cloned().ok_or(QuizError::NotFound(id))
}

/// Create a quiz from a payload, adopting its questions.
pub fn create_quiz(store: &mut QuizStore, payload: QuizPayload) -> Quiz {
    let questions = adopt_questions(store, payload.questions);
    let id = store.allocate_quiz_id();
    let quiz = Quiz { id, name: payload.name, questions };
    store.quizzes.insert(id, quiz.clone());
    info!(quiz_id = id, question_count = quiz.questions.len(), "quiz created");
    quiz
}

/// Replace a quiz's name and question list wholesale.
///
/// # Errors
///
/// Returns [`QuizError::NotFound`] if no quiz has this ID; the store is left
/// untouched in that case.
pub fn update_quiz(store: &mut QuizStore, id: i64, payload: QuizPayload) -> Result<Quiz, QuizError> {
    if !store.quizzes.contains_key(&id) {
        return Err(QuizError::NotFound(id));
    }
    let questions = adopt_questions(store, payload.questions);
    let quiz = Quiz { id, name: payload.name, questions };
    store.quizzes.insert(id, quiz.clone());
    info!(quiz_id = id, question_count = quiz.questions.len(), "quiz updated");
    Ok(quiz)
}

/// Delete a quiz by ID. Bank records survive the quiz.
///
/// # Errors
///
/// Returns [`QuizError::NotFound`] if no quiz has this ID.
pub fn delete_quiz(store: &mut QuizStore, id: i64) -> Result<(), QuizError> {
    if store.quizzes.remove(&id).is_none() {
        return Err(QuizError::NotFound(id));
    }
    info!(quiz_id = id, "quiz deleted");
    Ok(())
}

/// List the flat question bank in ID order.
#[must_use]
pub fn list_questions(store: &QuizStore) -> Vec<Question> {
    store.bank.values().cloned().collect()
}

/// Partition submitted questions into reused and new records.
///
/// Inputs with an ID pass through unchanged; inputs without one are assigned
/// the next sequential question ID and inserted into the bank. The returned
/// list preserves submission order.
fn adopt_questions(store: &mut QuizStore, inputs: Vec<QuestionInput>) -> Vec<Question> {
    inputs
        .into_iter()
        .map(|input| match input.id {
            Some(id) => Question { id, question: input.question, answer: input.answer },
            None => {
                let id = store.allocate_question_id();
                let question = Question { id, question: input.question, answer: input.answer };
                store.bank.insert(id, question.clone());
                question
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "quiz_test.rs"]
mod tests;
