use super::*;

#[test]
fn question_input_new_has_no_id() {
    let input = QuestionInput::new("What is the currency of Japan?", "Yen");
    assert!(input.id.is_none());
    assert_eq!(input.question, "What is the currency of Japan?");
    assert_eq!(input.answer, "Yen");
}

#[test]
fn question_input_existing_carries_id() {
    let question = Question {
        id: 7,
        question: "What is the largest country in the world by land area?".into(),
        answer: "Russia".into(),
    };
    let input = QuestionInput::existing(&question);
    assert_eq!(input.id, Some(7));
    assert_eq!(input.question, question.question);
    assert_eq!(input.answer, question.answer);
}

#[test]
fn question_input_without_id_omits_field() {
    let input = QuestionInput::new("Q", "A");
    let json = serde_json::to_value(&input).unwrap();
    assert!(json.get("id").is_none());
    assert_eq!(json.get("question").and_then(|v| v.as_str()), Some("Q"));
}

#[test]
fn question_input_with_id_serializes_integer() {
    let input = QuestionInput { id: Some(3), question: "Q".into(), answer: "A".into() };
    let json = serde_json::to_value(&input).unwrap();
    assert_eq!(json.get("id").and_then(serde_json::Value::as_i64), Some(3));
}

#[test]
fn question_input_deserializes_missing_id_as_none() {
    let input: QuestionInput = serde_json::from_str(r#"{"question":"Q","answer":"A"}"#).unwrap();
    assert!(input.id.is_none());
}

#[test]
fn quiz_serde_round_trip() {
    let quiz = Quiz {
        id: 1,
        name: "Geography Quiz".into(),
        questions: vec![Question {
            id: 5,
            question: "What is the smallest country in the world by land area?".into(),
            answer: "Vatican City".into(),
        }],
    };
    let json = serde_json::to_string(&quiz).unwrap();
    let restored: Quiz = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, quiz);
}

#[test]
fn quiz_payload_deserializes_mixed_questions() {
    let payload: QuizPayload = serde_json::from_str(
        r#"{"name":"Mixed","questions":[{"id":2,"question":"Old","answer":"O"},{"question":"New","answer":"N"}]}"#,
    )
    .unwrap();
    assert_eq!(payload.questions.len(), 2);
    assert_eq!(payload.questions[0].id, Some(2));
    assert!(payload.questions[1].id.is_none());
}

#[test]
fn delete_ack_shape() {
    let json = serde_json::to_string(&DeleteAck { success: true }).unwrap();
    assert_eq!(json, r#"{"success":true}"#);
}

#[test]
fn error_body_round_trip() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"quiz not found: 9"}"#).unwrap();
    assert_eq!(body.error, "quiz not found: 9");
}
