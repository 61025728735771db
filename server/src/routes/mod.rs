//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the REST surface under `/api` with permissive CORS and request
//! tracing. Errors leave handlers as [`ApiFailure`] so every non-2xx
//! response carries a JSON `{"error": ...}` envelope clients can surface
//! verbatim.

pub mod questions;
pub mod quizzes;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use models::ErrorBody;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::services::quiz::QuizError;
use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/quizzes", get(quizzes::list).post(quizzes::create))
        .route(
            "/api/quizzes/{id}",
            get(quizzes::read).put(quizzes::update).delete(quizzes::delete),
        )
        .route("/api/questions", get(questions::list))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// A failed request: status code plus the error envelope.
#[derive(Debug)]
pub struct ApiFailure {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

impl From<QuizError> for ApiFailure {
    fn from(err: QuizError) -> Self {
        let status = match err {
            QuizError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        Self { status, message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_with_message() {
        let failure = ApiFailure::from(QuizError::NotFound(9));
        assert_eq!(failure.status, StatusCode::NOT_FOUND);
        assert_eq!(failure.message, "quiz not found: 9");
    }

    #[tokio::test]
    async fn failure_response_carries_error_envelope() {
        let failure = ApiFailure::from(QuizError::NotFound(5));
        let response = failure.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "quiz not found: 5");
    }
}
