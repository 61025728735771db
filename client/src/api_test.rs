use super::*;

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let client = ApiClient::new("http://127.0.0.1:3000/");
    assert_eq!(client.url("/api/quizzes"), "http://127.0.0.1:3000/api/quizzes");
}

#[test]
fn url_joins_path_verbatim() {
    let client = ApiClient::new("http://localhost:8080");
    assert_eq!(client.url("/api/quizzes/7"), "http://localhost:8080/api/quizzes/7");
    assert_eq!(client.url("/healthz"), "http://localhost:8080/healthz");
}

#[test]
fn status_error_displays_server_message_verbatim() {
    let err = ApiError::Status { status: 404, message: "quiz not found: 9".into() };
    assert_eq!(err.to_string(), "server returned 404: quiz not found: 9");
}
