//! Fixed sample dataset loaded into the store at startup.
//!
//! Stands in for real content until an operator-facing authoring flow
//! exists; the application always boots with these two quizzes.

use models::{Question, Quiz};

fn question(id: i64, question: &str, answer: &str) -> Question {
    Question { id, question: question.to_owned(), answer: answer.to_owned() }
}

/// The two sample quizzes, question IDs 1..=7.
#[must_use]
pub fn sample_quizzes() -> Vec<Quiz> {
    vec![
        Quiz {
            id: 1,
            name: "Enterwell Quiz".to_owned(),
            questions: vec![
                question(
                    1,
                    "Who was the English mathematician and writer widely considered as the \
                     world's first computer programmer for her work on Charles Babbage's \
                     proposed mechanical general-purpose computer, the Analytical Engine?",
                    "Ada Lovelace",
                ),
                question(2, "What is the smallest continent by land area?", "Australia"),
                question(3, "What is the currency of Japan?", "Yen"),
                question(4, "Who was the first man to walk on the moon?", "Neil Armstrong"),
            ],
        },
        Quiz {
            id: 2,
            name: "Geography Quiz".to_owned(),
            questions: vec![
                question(
                    5,
                    "What is the smallest country in the world by land area?",
                    "Vatican City",
                ),
                question(6, "Who invented the telephone?", "Alexander Graham Bell"),
                question(7, "What is the largest country in the world by land area?", "Russia"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_question_ids_are_unique_and_sequential() {
        let quizzes = sample_quizzes();
        let ids: Vec<i64> = quizzes
            .iter()
            .flat_map(|quiz| quiz.questions.iter().map(|q| q.id))
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn sample_quizzes_have_distinct_ids() {
        let quizzes = sample_quizzes();
        assert_eq!(quizzes[0].id, 1);
        assert_eq!(quizzes[1].id, 2);
    }
}
