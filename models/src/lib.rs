//! Shared domain and wire types for the quiz REST surface.
//!
//! This crate owns the JSON shapes exchanged between `server`, `client`, and
//! `cli`. Quiz and question identifiers are server-assigned sequential
//! integers; a question submitted without an ID is a new record for the
//! server to adopt, while a question with an ID is reused as-is.

use serde::{Deserialize, Serialize};

/// A persisted question/answer pair.
///
/// Question records live in a flat bank on the server so they can be reused
/// across quizzes; each quiz additionally embeds its questions by value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
}

/// A named, ordered collection of questions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub name: String,
    pub questions: Vec<Question>,
}

/// A question as submitted in a create/update payload.
///
/// `id: None` means "new question, assign an ID"; it is omitted from the
/// serialized form entirely. `id: Some(n)` means "reuse record `n` as-is".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub question: String,
    pub answer: String,
}

impl QuestionInput {
    /// A new question with no ID yet.
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self { id: None, question: question.into(), answer: answer.into() }
    }

    /// A reference to an already-persisted question.
    #[must_use]
    pub fn existing(question: &Question) -> Self {
        Self {
            id: Some(question.id),
            question: question.question.clone(),
            answer: question.answer.clone(),
        }
    }
}

/// Body of `POST /api/quizzes` and `PUT /api/quizzes/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizPayload {
    pub name: String,
    pub questions: Vec<QuestionInput>,
}

/// Body of a successful `DELETE /api/quizzes/{id}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub success: bool,
}

/// JSON error envelope returned with non-2xx statuses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
