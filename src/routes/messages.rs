//! Message routes backing the conversation UI.
//!
//! ERROR HANDLING
//! ==============
//! Store failures map to `502 Bad Gateway` with a JSON body carrying the
//! store error code; blank content is rejected with `400` before the store
//! is touched.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use records::{MessageRecord, NewMessage};
use serde::Serialize;
use store::{StoreError, gateway};
use tracing::error;

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("message content must not be empty")]
    EmptyContent,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
    retryable: bool,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::EmptyContent => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyContent => "E_EMPTY_CONTENT",
            Self::Store(e) => e.error_code(),
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::EmptyContent => false,
            Self::Store(e) => e.retryable(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.error_code(), message: self.to_string(), retryable: self.retryable() };
        (self.status(), Json(body)).into_response()
    }
}

/// `GET /api/messages`: every stored row.
pub async fn list_messages(State(state): State<AppState>) -> Result<Json<Vec<MessageRecord>>, ApiError> {
    match state.store.fetch_all().await {
        Ok(rows) => Ok(Json(rows)),
        Err(e) => {
            error!(error = %e, code = e.error_code(), "error listing messages");
            Err(e.into())
        }
    }
}

/// `POST /api/messages`: append one message and return the stored row.
pub async fn create_message(
    State(state): State<AppState>,
    Json(message): Json<NewMessage>,
) -> Result<(StatusCode, Json<MessageRecord>), ApiError> {
    if message.is_blank() {
        return Err(ApiError::EmptyContent);
    }
    let record = gateway::save(state.store.as_ref(), &message.content, message.role).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[cfg(test)]
#[path = "messages_test.rs"]
mod tests;
