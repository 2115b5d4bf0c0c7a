//! Auth route handlers.
//!
//! Login validates the form inline, exchanges the credentials with the
//! remote API, and stores the returned access token. No token structure or
//! expiry is checked locally; a later 401 is the only staleness signal.

use axum::{Json, extract::State};
use cartwheel_core::Email;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::catalog::{LoginRequest, Profile};
use crate::error::{AppError, Result};
use crate::middleware::{RedirectIfAuthenticated, RequireAuth};
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Auth state as the view renders it.
#[derive(Debug, Serialize)]
pub struct AuthView {
    pub authenticated: bool,
}

/// Handle a login submission.
///
/// Validation failures (malformed email, empty password) surface inline as
/// 422s and never reach the remote API.
#[instrument(skip(_guest, state, form))]
pub async fn login(
    _guest: RedirectIfAuthenticated,
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> Result<Json<AuthView>> {
    let email = Email::parse(form.email.trim())
        .map_err(|e| AppError::Validation(e.to_string()))?;
    if form.password.is_empty() {
        return Err(AppError::Validation("Password is required".to_string()));
    }

    let response = state
        .catalog()
        .login(&LoginRequest {
            email: email.into_inner(),
            password: form.password,
        })
        .await?;

    state.auth().login(&response.access_token)?;
    tracing::info!("Login succeeded");

    Ok(Json(AuthView {
        authenticated: true,
    }))
}

/// Drop the stored credential.
#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> Result<Json<AuthView>> {
    state.auth().logout()?;
    Ok(Json(AuthView {
        authenticated: false,
    }))
}

/// Fetch the profile of the signed-in shopper from the remote API.
#[instrument(skip(_auth, state))]
pub async fn profile(
    _auth: RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Profile>> {
    Ok(Json(state.catalog().profile().await?))
}
