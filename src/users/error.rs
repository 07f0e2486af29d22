use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Username or email already exists")]
    Duplicate,

    #[error("{0}")]
    Validation(String),

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match &self {
            // Handled errors keep the 200 + {"error": ...} body contract;
            // clients inspect the JSON, not the status code.
            UserError::Duplicate | UserError::Validation(_) => {
                (StatusCode::OK, Json(json!({ "error": self.to_string() }))).into_response()
            }
            UserError::Hash(msg) => {
                tracing::error!(error = %msg, "password hashing failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
            UserError::Store(e) => {
                tracing::error!(error = %e, "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}
