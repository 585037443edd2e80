use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::error::{ProductError, PurchaseError, UserError};

/// Application-level error type for the HTTP façade.
///
/// Wraps the store errors and adds the two failures only the transport layer
/// can see: a missing/unknown auth token and a malformed request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Purchase(#[from] PurchaseError),
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::User(err) => match err {
                UserError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                UserError::NotFound => StatusCode::NOT_FOUND,
                UserError::AlreadyRegistered(_) => StatusCode::CONFLICT,
                UserError::ActorCommunicationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Product(err) => match err {
                ProductError::NotFound => StatusCode::NOT_FOUND,
                // An empty catalog is reported as a server error, matching
                // the source system's contract.
                ProductError::ListEmpty => StatusCode::INTERNAL_SERVER_ERROR,
                ProductError::InsufficientStock { .. } => StatusCode::CONFLICT,
                ProductError::InvalidQuantity(_) => StatusCode::BAD_REQUEST,
                ProductError::ActorCommunicationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Purchase(err) => match err {
                PurchaseError::UserNotFound | PurchaseError::ProductNotFound => {
                    StatusCode::NOT_FOUND
                }
                PurchaseError::InsufficientStock(_) => StatusCode::CONFLICT,
                PurchaseError::InvalidQuantity(_) => StatusCode::BAD_REQUEST,
                PurchaseError::ActorCommunicationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result type alias for façade handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
