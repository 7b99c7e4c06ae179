use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Admin already exists")]
    AlreadyExists,
    #[error("Admin setup has already been completed")]
    SetupAlreadyComplete,
    #[error("Invalid URL format")]
    InvalidUrl,
    #[error("QR code URL must use HTTPS")]
    InsecureUrl,
    #[error("QR code URL must be from a trusted domain")]
    UntrustedDomain,
    #[error("Payment QR codes cannot be modified once set for security reasons. Please contact the system administrator for assistance.")]
    QrCodeImmutable,
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(e) => {
                error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::AlreadyExists
            | AppError::SetupAlreadyComplete
            | AppError::InvalidUrl
            | AppError::InsecureUrl
            | AppError::UntrustedDomain => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::QrCodeImmutable => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string()),
        };

        let body = Json(json!({
            "message": message
        }));

        (status, body).into_response()
    }
}
