//! Wire types for the auth endpoints of the catalog API.
//!
//! Product and category payloads deserialize straight into the core types;
//! only the auth flows need dedicated shapes.

use cartwheel_core::UserId;
use serde::{Deserialize, Serialize};

/// Credentials submitted to `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token pair returned by a successful login.
///
/// Only the access token is stored; the API also issues a refresh token but
/// the storefront never exchanges it (an expired session simply surfaces as
/// a 401 on the next authenticated call).
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Profile of the current bearer, from `GET /auth/profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_deserializes() {
        let json = r#"{"access_token": "abc", "refresh_token": "def"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "abc");
        assert_eq!(response.refresh_token.as_deref(), Some("def"));
    }

    #[test]
    fn test_profile_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "email": "maria@mail.com",
            "password": "12345",
            "name": "Maria",
            "role": "customer",
            "avatar": "https://example.com/avatar.png",
            "creationAt": "2026-01-01T00:00:00.000Z"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Maria");
        assert_eq!(profile.role, "customer");
    }
}
