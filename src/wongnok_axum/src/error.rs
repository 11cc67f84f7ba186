use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wongnok_application::{AuthError, ErrorClass};

/// Message sent instead of the details of an infrastructure failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal error";

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("username not available")]
    UsernameNotAvailable,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("forbidden")]
    Forbidden,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AuthApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),

            AuthApiError::UsernameNotAvailable => (StatusCode::CONFLICT, self.to_string()),

            AuthApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),

            AuthApiError::Forbidden => (StatusCode::FORBIDDEN, self.to_string()),

            AuthApiError::UnexpectedError(ref e) => {
                tracing::error!(error = %e, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<AuthError> for AuthApiError {
    fn from(error: AuthError) -> Self {
        match (error.class(), error) {
            (_, AuthError::UsernameNotAvailable) => AuthApiError::UsernameNotAvailable,
            (_, AuthError::InvalidCredentials) => AuthApiError::InvalidCredentials,
            (ErrorClass::Validation, e) => AuthApiError::InvalidInput(e.to_string()),
            (_, e) => AuthApiError::UnexpectedError(e.to_string()),
        }
    }
}
