use std::time::Duration;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: &'static str,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            error: self.to_string(),
            error_code: self.error_code(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failures at the completion-generator boundary.
///
/// None of these reach an HTTP client: callers substitute a local fallback.
#[derive(Debug, Clone, Error)]
pub enum GeneratorError {
    #[error("generator is not configured")]
    NotConfigured,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("generator call timed out after {0:?}")]
    Timeout(Duration),

    #[error("generator returned no content")]
    EmptyResponse,

    #[error("could not parse generator output as JSON: {0}")]
    Parse(String),

    #[error("generator output did not match the expected schema: {0}")]
    Schema(String),
}

impl GeneratorError {
    /// Missing credentials cannot be fixed by waiting, everything else can.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, GeneratorError::NotConfigured)
    }
}

impl From<serde_json::Error> for GeneratorError {
    fn from(err: serde_json::Error) -> Self {
        GeneratorError::Parse(err.to_string())
    }
}

impl From<async_openai::error::OpenAIError> for GeneratorError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        GeneratorError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::NotFound("test".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InternalError("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::NotFound("session".into());
        assert_eq!(err.to_string(), "Not found: session");
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_generator_error_retryability() {
        assert!(!GeneratorError::NotConfigured.is_retryable());
        assert!(GeneratorError::Transport("reset".into()).is_retryable());
        assert!(GeneratorError::Timeout(Duration::from_secs(30)).is_retryable());
        assert!(GeneratorError::Parse("eof".into()).is_retryable());
        assert!(GeneratorError::Schema("missing question".into()).is_retryable());
    }

    #[test]
    fn test_json_error_maps_to_parse() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert!(matches!(GeneratorError::from(err), GeneratorError::Parse(_)));
    }
}
