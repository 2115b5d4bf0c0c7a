//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers should return
//! `Result<T, AppError>`.
//!
//! The error taxonomy is deliberately flat: network failures are terminal
//! for the triggering operation (no retry anywhere), an authorization
//! failure forces navigation to the login route after the credential purge,
//! and validation failures carry an inline message and propagate no further.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog API operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Durable storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Form-level validation failure.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The authorization failure is a navigation, not an error page: the
        // credential was already purged by the catalog client, so send the
        // user to the login route.
        if matches!(self, Self::Catalog(CatalogError::Unauthorized)) {
            return Redirect::to("/login").into_response();
        }

        // Capture server-side errors to Sentry
        if matches!(
            self,
            Self::Storage(_)
                | Self::Catalog(
                    CatalogError::Http(_) | CatalogError::Parse(_) | CatalogError::Status(_)
                )
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Catalog(CatalogError::NotFound(_)) | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Catalog(_) => StatusCode::BAD_GATEWAY,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Catalog(CatalogError::NotFound(_)) | Self::NotFound(_) => self.to_string(),
            Self::Catalog(_) => "External service error".to_string(),
            Self::Storage(_) => "Internal server error".to_string(),
            Self::Validation(msg) => msg.clone(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product 123".to_string());
        assert_eq!(err.to_string(), "Not found: product 123");

        let err = AppError::Validation("Quantity must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: Quantity must be at least 1"
        );
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Validation("test".to_string())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            get_status(AppError::Catalog(CatalogError::Status(
                StatusCode::INTERNAL_SERVER_ERROR
            ))),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            get_status(AppError::Catalog(CatalogError::NotFound(
                "Product not found: 9".to_string()
            ))),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_unauthorized_redirects_to_login() {
        let response = AppError::Catalog(CatalogError::Unauthorized).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response
                .headers()
                .get(axum::http::header::LOCATION)
                .and_then(|v| v.to_str().ok()),
            Some("/login")
        );
    }
}
