//! Form-page state: the editable quiz draft.
//!
//! DESIGN
//! ======
//! Draft rows carry a [`DraftId`] tagged union instead of the fragile
//! "temporary string ID" convention: `Pending` rows exist only inside the
//! draft and serialize with no ID at all, so the server knows to adopt
//! them; `Persisted` rows keep their real ID and are reused as-is.
//!
//! The page loads its two inputs (the quiz under edit, the reusable
//! question bank) concurrently and merges them only after both resolve.

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;

use models::{Question, QuestionInput, Quiz, QuizPayload};

use crate::api::{ApiClient, ApiError};

/// Which form the route parameter selects: `"new"` or a quiz ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    /// Parse the route parameter. `None` for anything that is neither the
    /// `new` sentinel nor an integer ID.
    #[must_use]
    pub fn parse(param: &str) -> Option<Self> {
        if param == "new" {
            return Some(Self::Create);
        }
        param.parse().ok().map(Self::Edit)
    }
}

/// Identity of a draft row: not yet persisted, or a real server ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftId {
    /// Local-only row, numbered per draft. Stripped before submission.
    Pending(usize),
    /// Server-assigned question ID.
    Persisted(i64),
}

/// One editable question row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftQuestion {
    pub id: DraftId,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("Question is required")]
    EmptyQuestion,
    #[error("Answer is required")]
    EmptyAnswer,
    #[error("Quiz name is required")]
    EmptyName,
}

/// The editable state of the quiz form.
#[derive(Clone, Debug, Default)]
pub struct QuizDraft {
    pub name: String,
    questions: Vec<DraftQuestion>,
    next_pending: usize,
}

impl QuizDraft {
    /// An empty draft, for the create flow.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A draft pre-filled from an existing quiz; every row is `Persisted`.
    #[must_use]
    pub fn from_quiz(quiz: &Quiz) -> Self {
        Self {
            name: quiz.name.clone(),
            questions: quiz
                .questions
                .iter()
                .map(|q| DraftQuestion {
                    id: DraftId::Persisted(q.id),
                    question: q.question.clone(),
                    answer: q.answer.clone(),
                })
                .collect(),
            next_pending: 0,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[DraftQuestion] {
        &self.questions
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Append a brand-new question. Both fields are required.
    ///
    /// # Errors
    ///
    /// Returns a [`DraftError`] if either trimmed field is empty.
    pub fn add_new(&mut self, question: &str, answer: &str) -> Result<DraftId, DraftError> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() {
            return Err(DraftError::EmptyQuestion);
        }
        if answer.is_empty() {
            return Err(DraftError::EmptyAnswer);
        }
        let id = DraftId::Pending(self.next_pending);
        self.next_pending += 1;
        self.questions.push(DraftQuestion {
            id,
            question: question.to_owned(),
            answer: answer.to_owned(),
        });
        Ok(id)
    }

    /// Append an existing bank question. Returns `false` if that question
    /// is already in the draft.
    pub fn add_existing(&mut self, question: &Question) -> bool {
        let id = DraftId::Persisted(question.id);
        if self.questions.iter().any(|row| row.id == id) {
            return false;
        }
        self.questions.push(DraftQuestion {
            id,
            question: question.question.clone(),
            answer: question.answer.clone(),
        });
        true
    }

    /// Remove the row with this ID, preserving the order of the remainder.
    /// Returns whether a row was removed.
    pub fn remove(&mut self, id: DraftId) -> bool {
        let before = self.questions.len();
        self.questions.retain(|row| row.id != id);
        self.questions.len() != before
    }

    /// Build the submission payload. `Pending` IDs are stripped so the
    /// server assigns real ones.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::EmptyName`] if the trimmed name is empty.
    pub fn payload(&self) -> Result<QuizPayload, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::EmptyName);
        }
        Ok(QuizPayload {
            name: name.to_owned(),
            questions: self
                .questions
                .iter()
                .map(|row| QuestionInput {
                    id: match row.id {
                        DraftId::Pending(_) => None,
                        DraftId::Persisted(id) => Some(id),
                    },
                    question: row.question.clone(),
                    answer: row.answer.clone(),
                })
                .collect(),
        })
    }
}

/// Everything the form page needs once loading settles.
#[derive(Clone, Debug)]
pub struct FormData {
    pub draft: QuizDraft,
    pub bank: Vec<Question>,
}

/// Load the form's inputs: the quiz under edit (edit mode only) and the
/// reusable question bank. The two fetches run concurrently and the result
/// is assembled only after both resolve.
///
/// # Errors
///
/// Fails if either fetch fails.
pub async fn load(api: &ApiClient, mode: FormMode) -> Result<FormData, ApiError> {
    match mode {
        FormMode::Create => {
            let bank = api.list_questions().await?;
            Ok(FormData { draft: QuizDraft::new(), bank })
        }
        FormMode::Edit(id) => {
            let (quiz, bank) = tokio::join!(api.get_quiz(id), api.list_questions());
            Ok(FormData { draft: QuizDraft::from_quiz(&quiz?), bank: bank? })
        }
    }
}
