use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

/// JSON error response structure: `{"error": "..."}`
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Application errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid YouTube URL")]
    InvalidYoutubeUrl,

    #[error("Daily limit exceeded")]
    QuotaExceeded,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("YouTube API error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidYoutubeUrl => StatusCode::NOT_FOUND,
            AppError::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // 5xx bodies stay generic; the cause only goes to the log.
        let message = match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::InvalidYoutubeUrl => "Invalid YouTube URL".to_string(),
            AppError::QuotaExceeded => "Daily limit exceeded".to_string(),
            AppError::Database(_) | AppError::Upstream(_) | AppError::Internal(_) => {
                log::error!("Internal error: {}", self);
                "Internal error".to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse { error: message })
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
