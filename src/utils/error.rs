use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::store::StoreError;
use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Database error")]
    DatabaseError(#[from] StoreError),

    #[error("Request timed out")]
    Timeout,

    #[error("Internal server error")]
    InternalServerError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DecodeError(_) => StatusCode::BAD_REQUEST,
            AppError::ParseError(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::DecodeError(_) => "DECODE_ERROR",
            AppError::ParseError(_) => "PARSE_ERROR",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::Timeout => "REQUEST_TIMEOUT",
            AppError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::DecodeError(msg) | AppError::ParseError(msg) => {
                warn!(code = self.code(), message = %msg, "Rejected request");
            }
            AppError::DatabaseError(e) => {
                error!(error = ?e, "Database error");
            }
            AppError::Timeout => {
                warn!(code = self.code(), "Request timed out");
            }
            AppError::InternalServerError(msg) => {
                error!(message = %msg, "Internal server error");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        self.log();

        let public_message = match &self {
            AppError::DecodeError(msg) | AppError::ParseError(msg) => msg.clone(),
            AppError::DatabaseError(_) => "A database error occurred".to_string(),
            AppError::Timeout => "The request took too long to complete".to_string(),
            AppError::InternalServerError(_) => "An internal error occurred".to_string(),
        };

        error_response(status, code, public_message)
    }
}
