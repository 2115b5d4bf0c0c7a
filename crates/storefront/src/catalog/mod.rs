//! Remote catalog API client.
//!
//! # Architecture
//!
//! - Plain REST over `reqwest`; the remote API is the source of truth and
//!   every call is a single request/response round trip - no retry, no
//!   backoff, no batching
//! - The bearer credential is read from the auth store per request and
//!   attached when present
//! - A 401 response is intercepted centrally: the stored credential is
//!   purged and the caller receives [`CatalogError::Unauthorized`], which
//!   the route layer turns into a redirect to the login route
//!
//! # Endpoints
//!
//! - `GET /products` - full product list
//! - `GET /products/{id}` - single product
//! - `GET /categories` - category list
//! - `POST /auth/login` - credential exchange for an access token
//! - `GET /auth/profile` - profile of the bearer

mod client;
mod types;

pub use client::CatalogClient;
pub use types::{LoginRequest, LoginResponse, Profile};

use thiserror::Error;

/// Errors that can occur when talking to the remote catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (network failure, DNS, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The API rejected the bearer credential; the stored token has been
    /// purged by the time this error is surfaced.
    #[error("Unauthorized")]
    Unauthorized,

    /// Any other non-success status.
    #[error("Catalog API returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::NotFound("Product not found: 123".to_string());
        assert_eq!(err.to_string(), "Not found: Product not found: 123");

        let err = CatalogError::Status(reqwest::StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "Catalog API returned HTTP 502 Bad Gateway");
    }
}
