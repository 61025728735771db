//! Quiz CRUD routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use models::{DeleteAck, Quiz, QuizPayload};

use crate::routes::ApiFailure;
use crate::services::quiz;
use crate::state::AppState;

/// `GET /api/quizzes` — list all quizzes with embedded questions.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Quiz>> {
    let store = state.store.read().await;
    Json(quiz::list_quizzes(&store))
}

/// `POST /api/quizzes` — create a quiz; new questions get sequential IDs.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<QuizPayload>,
) -> (StatusCode, Json<Quiz>) {
    let mut store = state.store.write().await;
    let created = quiz::create_quiz(&mut store, payload);
    (StatusCode::CREATED, Json(created))
}

/// `GET /api/quizzes/{id}` — fetch one quiz.
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Quiz>, ApiFailure> {
    let store = state.store.read().await;
    Ok(Json(quiz::get_quiz(&store, id)?))
}

/// `PUT /api/quizzes/{id}` — replace a quiz's name and question list.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<QuizPayload>,
) -> Result<Json<Quiz>, ApiFailure> {
    let mut store = state.store.write().await;
    Ok(Json(quiz::update_quiz(&mut store, id, payload)?))
}

/// `DELETE /api/quizzes/{id}` — delete a quiz.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteAck>, ApiFailure> {
    let mut store = state.store.write().await;
    quiz::delete_quiz(&mut store, id)?;
    Ok(Json(DeleteAck { success: true }))
}

#[cfg(test)]
#[path = "quizzes_test.rs"]
mod tests;
