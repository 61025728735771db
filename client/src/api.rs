//! Typed HTTP client for the quiz REST surface.
//!
//! DESIGN
//! ======
//! One method per endpoint, returning parsed bodies on success. Failures
//! collapse into a single [`ApiError`] taxonomy: transport problems wrap
//! the underlying error, non-2xx responses carry the status and the
//! server's error envelope message. No retries, no timeouts, no
//! status-specific branching beyond success/failure.

use models::{DeleteAck, ErrorBody, Question, Quiz, QuizPayload};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Client for one server, bound to a base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http: reqwest::Client::new(), base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /healthz`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-2xx status.
    pub async fn ping(&self) -> Result<(), ApiError> {
        let response = self.http.get(self.url("/healthz")).send().await?;
        check(response).await?;
        Ok(())
    }

    /// `GET /api/quizzes`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-2xx status.
    pub async fn list_quizzes(&self) -> Result<Vec<Quiz>, ApiError> {
        let response = self.http.get(self.url("/api/quizzes")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// `GET /api/quizzes/{id}`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-2xx status (404 for a missing ID).
    pub async fn get_quiz(&self, id: i64) -> Result<Quiz, ApiError> {
        let response = self.http.get(self.url(&format!("/api/quizzes/{id}"))).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// `POST /api/quizzes`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-2xx status.
    pub async fn create_quiz(&self, payload: &QuizPayload) -> Result<Quiz, ApiError> {
        let response = self.http.post(self.url("/api/quizzes")).json(payload).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// `PUT /api/quizzes/{id}`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-2xx status (404 for a missing ID).
    pub async fn update_quiz(&self, id: i64, payload: &QuizPayload) -> Result<Quiz, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/api/quizzes/{id}")))
            .json(payload)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// `DELETE /api/quizzes/{id}`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-2xx status (404 for a missing ID).
    pub async fn delete_quiz(&self, id: i64) -> Result<DeleteAck, ApiError> {
        let response = self.http.delete(self.url(&format!("/api/quizzes/{id}"))).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// `GET /api/questions`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-2xx status.
    pub async fn list_questions(&self) -> Result<Vec<Question>, ApiError> {
        let response = self.http.get(self.url("/api/questions")).send().await?;
        Ok(check(response).await?.json().await?)
    }
}

/// Turn a non-2xx response into [`ApiError::Status`], preferring the
/// server's error envelope message over the bare status text.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_owned(),
    };
    Err(ApiError::Status { status: status.as_u16(), message })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
