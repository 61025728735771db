//! Question bank routes.

use axum::extract::State;
use axum::response::Json;
use models::Question;

use crate::services::quiz;
use crate::state::AppState;

/// `GET /api/questions` — the flat question bank, for reuse in quiz forms.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Question>> {
    let store = state.store.read().await;
    Json(quiz::list_questions(&store))
}

#[cfg(test)]
#[path = "questions_test.rs"]
mod tests;
