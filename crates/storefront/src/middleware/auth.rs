//! Authentication extractors.
//!
//! Provides extractors that gate route handlers on the auth store's
//! authenticated flag.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};

use crate::state::AppState;

/// Extractor that requires an authenticated session.
///
/// If no credential is held, rejects with a redirect to the login route.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(_auth: RequireAuth) -> impl IntoResponse {
///     "only for signed-in shoppers"
/// }
/// ```
pub struct RequireAuth;

/// Rejection for [`RequireAuth`]: redirect to the login route.
pub struct RedirectToLogin;

impl IntoResponse for RedirectToLogin {
    fn into_response(self) -> Response {
        Redirect::to("/login").into_response()
    }
}

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = RedirectToLogin;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if state.auth().is_authenticated() {
            Ok(Self)
        } else {
            Err(RedirectToLogin)
        }
    }
}

/// Extractor for public-only routes: authenticated users are sent to the
/// dashboard instead.
pub struct RedirectIfAuthenticated;

/// Rejection for [`RedirectIfAuthenticated`]: redirect to the dashboard.
pub struct RedirectToDashboard;

impl IntoResponse for RedirectToDashboard {
    fn into_response(self) -> Response {
        Redirect::to("/dashboard").into_response()
    }
}

impl FromRequestParts<AppState> for RedirectIfAuthenticated {
    type Rejection = RedirectToDashboard;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if state.auth().is_authenticated() {
            Err(RedirectToDashboard)
        } else {
            Ok(Self)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::StorefrontConfig;
    use crate::storage::{MemoryStorage, Storage, keys};
    use axum::http::Request;
    use std::sync::Arc;

    fn test_state(storage: Arc<MemoryStorage>) -> AppState {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            catalog_api_url: url::Url::parse("http://localhost:1/api/v1").unwrap(),
            data_dir: std::path::PathBuf::from("./unused"),
            sentry_dsn: None,
            sentry_environment: None,
        };
        AppState::new(config, storage)
    }

    fn parts() -> Parts {
        let (parts, ()) = Request::builder()
            .uri("/profile")
            .body(())
            .unwrap()
            .into_parts();
        parts
    }

    #[tokio::test]
    async fn test_require_auth_rejects_unauthenticated() {
        let state = test_state(Arc::new(MemoryStorage::new()));
        let result = RequireAuth::from_request_parts(&mut parts(), &state).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_require_auth_passes_with_stored_token() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(keys::AUTH, "token").unwrap();

        let state = test_state(storage);
        let result = RequireAuth::from_request_parts(&mut parts(), &state).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_public_gate_bounces_authenticated_users() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(keys::AUTH, "token").unwrap();

        let state = test_state(storage);
        let result = RedirectIfAuthenticated::from_request_parts(&mut parts(), &state).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_public_gate_passes_guests() {
        let state = test_state(Arc::new(MemoryStorage::new()));
        let result = RedirectIfAuthenticated::from_request_parts(&mut parts(), &state).await;
        assert!(result.is_ok());
    }
}
