use super::*;

fn question(id: i64, text: &str, answer: &str) -> Question {
    Question { id, question: text.to_owned(), answer: answer.to_owned() }
}

fn three_questions() -> Vec<Question> {
    vec![
        question(1, "Q1", "A1"),
        question(2, "Q2", "A2"),
        question(3, "Q3", "A3"),
    ]
}

#[test]
fn starts_at_first_question_with_answer_hidden() {
    let session = SolveSession::new(three_questions());
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.current_question().map(|q| q.id), Some(1));
    assert!(!session.answer_visible());
    assert!(!session.has_prev());
    assert!(session.has_next());
}

#[test]
fn next_and_prev_walk_the_list() {
    let mut session = SolveSession::new(three_questions());
    assert!(session.next());
    assert_eq!(session.current_index(), 1);
    assert!(session.next());
    assert!(!session.has_next());
    assert!(!session.next());
    assert_eq!(session.current_index(), 2);
    assert!(session.prev());
    assert_eq!(session.current_index(), 1);
}

#[test]
fn prev_is_noop_at_first_question() {
    let mut session = SolveSession::new(three_questions());
    assert!(!session.prev());
    assert_eq!(session.current_index(), 0);
}

#[test]
fn toggle_shows_and_hides_answer() {
    let mut session = SolveSession::new(three_questions());
    assert!(session.visible_answer().is_none());
    assert!(session.toggle_answer());
    assert_eq!(session.visible_answer(), Some("A1"));
    assert!(!session.toggle_answer());
    assert!(session.visible_answer().is_none());
}

#[test]
fn navigation_resets_answer_visibility() {
    let mut session = SolveSession::new(three_questions());
    session.toggle_answer();
    session.next();
    assert!(!session.answer_visible());

    session.toggle_answer();
    session.prev();
    assert!(!session.answer_visible());
}

#[test]
fn failed_navigation_keeps_answer_visible() {
    let mut session = SolveSession::new(three_questions());
    session.toggle_answer();
    assert!(!session.prev());
    assert!(session.answer_visible());
}

#[test]
fn empty_quiz_disables_both_directions_without_panicking() {
    let mut session = SolveSession::new(Vec::new());
    assert!(session.is_empty());
    assert!(!session.has_prev());
    assert!(!session.has_next());
    assert!(!session.next());
    assert!(!session.prev());
    assert!(session.current_question().is_none());
    session.toggle_answer();
    assert!(session.visible_answer().is_none());
}

#[test]
fn single_question_has_no_navigation() {
    let session = SolveSession::new(vec![question(1, "Q", "A")]);
    assert!(!session.has_prev());
    assert!(!session.has_next());
}
