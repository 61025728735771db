use super::*;
use crate::state::test_helpers::question;
use models::QuizPayload;

fn payload(name: &str, questions: Vec<QuestionInput>) -> QuizPayload {
    QuizPayload { name: name.to_owned(), questions }
}

#[test]
fn create_assigns_sequential_ids_to_new_questions() {
    let mut store = QuizStore::new();
    let quiz = create_quiz(
        &mut store,
        payload(
            "Test",
            vec![QuestionInput::new("Q1", "A1"), QuestionInput::new("Q2", "A2")],
        ),
    );
    assert_eq!(quiz.id, 1);
    assert_eq!(quiz.questions.len(), 2);
    assert_eq!(quiz.questions[0].id, 1);
    assert_eq!(quiz.questions[1].id, 2);
    assert_eq!(store.bank.len(), 2);
}

#[test]
fn create_keeps_existing_questions_as_is() {
    let mut store = QuizStore::seeded();
    let reused = question(3, "What is the currency of Japan?", "Yen");
    let quiz = create_quiz(
        &mut store,
        payload(
            "Mixed",
            vec![QuestionInput::existing(&reused), QuestionInput::new("Fresh", "New")],
        ),
    );
    assert_eq!(quiz.questions[0].id, 3);
    assert_eq!(quiz.questions[1].id, 8);
    // Reuse must not duplicate the bank record.
    assert_eq!(store.bank.len(), 8);
}

#[test]
fn create_preserves_submission_order() {
    let mut store = QuizStore::seeded();
    let quiz = create_quiz(
        &mut store,
        payload(
            "Ordered",
            vec![
                QuestionInput::new("First", "1"),
                QuestionInput { id: Some(5), question: "Middle".into(), answer: "M".into() },
                QuestionInput::new("Last", "2"),
            ],
        ),
    );
    let ids: Vec<i64> = quiz.questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![8, 5, 9]);
}

#[test]
fn get_returns_stored_quiz() {
    let store = QuizStore::seeded();
    let quiz = get_quiz(&store, 2).unwrap();
    assert_eq!(quiz.name, "Geography Quiz");
    assert_eq!(quiz.questions.len(), 3);
}

#[test]
fn get_twice_without_mutation_is_identical() {
    let store = QuizStore::seeded();
    let first = get_quiz(&store, 1).unwrap();
    let second = get_quiz(&store, 1).unwrap();
    assert_eq!(first, second);
}

#[test]
fn get_missing_quiz_is_not_found() {
    let store = QuizStore::new();
    assert!(matches!(get_quiz(&store, 42), Err(QuizError::NotFound(42))));
}

#[test]
fn update_replaces_name_and_questions_wholesale() {
    let mut store = QuizStore::seeded();
    let updated = update_quiz(
        &mut store,
        2,
        payload("Renamed", vec![QuestionInput::new("Only", "One")]),
    )
    .unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.questions.len(), 1);
    assert_eq!(updated.questions[0].id, 8);
    assert_eq!(get_quiz(&store, 2).unwrap(), updated);
}

#[test]
fn update_missing_quiz_leaves_store_untouched() {
    let mut store = QuizStore::seeded();
    let result = update_quiz(&mut store, 99, payload("Nope", vec![QuestionInput::new("Q", "A")]));
    assert!(matches!(result, Err(QuizError::NotFound(99))));
    // The rejected payload must not have leaked new records into the bank.
    assert_eq!(store.bank.len(), 7);
}

#[test]
fn removing_a_question_on_update_keeps_bank_record() {
    let mut store = QuizStore::seeded();
    let remaining: Vec<QuestionInput> = get_quiz(&store, 1)
        .unwrap()
        .questions
        .iter()
        .filter(|q| q.id != 2)
        .map(QuestionInput::existing)
        .collect();
    let updated = update_quiz(&mut store, 1, payload("Enterwell Quiz", remaining)).unwrap();
    let ids: Vec<i64> = updated.questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
    assert!(store.bank.contains_key(&2));
}

#[test]
fn delete_removes_quiz_but_not_bank() {
    let mut store = QuizStore::seeded();
    delete_quiz(&mut store, 1).unwrap();
    assert!(matches!(get_quiz(&store, 1), Err(QuizError::NotFound(1))));
    assert_eq!(list_quizzes(&store).len(), 1);
    assert_eq!(store.bank.len(), 7);
}

#[test]
fn delete_missing_quiz_is_not_found() {
    let mut store = QuizStore::new();
    assert!(matches!(delete_quiz(&mut store, 5), Err(QuizError::NotFound(5))));
}

#[test]
fn list_questions_returns_flat_bank_in_id_order() {
    let store = QuizStore::seeded();
    let ids: Vec<i64> = list_questions(&store).iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn ids_assigned_after_delete_do_not_collide() {
    let mut store = QuizStore::seeded();
    delete_quiz(&mut store, 2).unwrap();
    let quiz = create_quiz(&mut store, payload("After", vec![QuestionInput::new("Q", "A")]));
    assert_eq!(quiz.id, 3);
    assert_eq!(quiz.questions[0].id, 8);
    assert!(!store.bank.contains_key(&9));
}
