use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use log::error;
use serde::Serialize;
use thiserror::Error;

/// Typed failures surfaced to HTTP clients. Every variant carries the
/// message sent back in the response envelope; the status code follows
/// from the variant alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    /// Unexpected failure. The carried message is logged but never sent to
    /// the client.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the failure was anticipated. Operational errors keep their
    /// message in the response; anything else is masked.
    pub fn is_operational(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}

/// JSON envelope for every failure response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub status_code: u16,
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        AppError::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        error!("Request failed: {}", self);

        let status = AppError::status_code(self);
        let message = if self.is_operational() {
            self.to_string()
        } else {
            "Internal server error".to_string()
        };

        HttpResponse::build(status).json(ErrorResponse {
            success: false,
            message,
            status_code: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_variant() {
        assert_eq!(
            AppError::not_found("missing").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::validation("bad field").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::bad_request("bad payload").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_errors_are_not_operational() {
        assert!(AppError::not_found("missing").is_operational());
        assert!(AppError::validation("bad").is_operational());
        assert!(!AppError::internal("boom").is_operational());
    }
}
