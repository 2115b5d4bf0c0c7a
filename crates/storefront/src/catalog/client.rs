//! Catalog API client implementation.

use std::sync::Arc;

use cartwheel_core::{Category, Product, ProductId};
use serde::de::DeserializeOwned;
use tracing::instrument;

use super::CatalogError;
use super::types::{LoginRequest, LoginResponse, Profile};
use crate::config::StorefrontConfig;
use crate::stores::AuthStore;

/// Client for the remote catalog REST API.
///
/// Cheaply cloneable; the underlying connection pool and the auth store
/// handle are shared.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    http: reqwest::Client,
    base_url: String,
    auth: AuthStore,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &StorefrontConfig, auth: AuthStore) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                http: reqwest::Client::new(),
                base_url: config
                    .catalog_api_url
                    .as_str()
                    .trim_end_matches('/')
                    .to_string(),
                auth,
            }),
        }
    }

    /// Execute a request: attach the bearer credential when present, send,
    /// and decode the JSON body.
    ///
    /// The body is read as text first so parse failures can be logged with a
    /// snippet of what the API actually returned. A 401 purges the stored
    /// credential before surfacing - that is the single, central place the
    /// "stale token" signal is handled.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, CatalogError> {
        let request = match self.inner.auth.bearer_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            self.inner.auth.purge();
            return Err(CatalogError::Unauthorized);
        }

        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Catalog API returned non-success status"
            );
            return Err(CatalogError::Status(status));
        }

        match serde_json::from_str(&response_text) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse catalog API response"
                );
                Err(CatalogError::Parse(e))
            }
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        self.execute(self.inner.http.get(self.url("/products"))).await
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id, or another
    /// error if the request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn product(&self, product_id: ProductId) -> Result<Product, CatalogError> {
        let url = self.url(&format!("/products/{product_id}"));
        match self.execute(self.inner.http.get(url)).await {
            Err(CatalogError::Status(status)) if status == reqwest::StatusCode::NOT_FOUND => {
                Err(CatalogError::NotFound(format!(
                    "Product not found: {product_id}"
                )))
            }
            result => result,
        }
    }

    /// Fetch the category list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.execute(self.inner.http.get(self.url("/categories")))
            .await
    }

    // =========================================================================
    // Auth Methods
    // =========================================================================

    /// Exchange credentials for an access token.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unauthorized`] when the API rejects the
    /// credentials, or another error if the request fails.
    #[instrument(skip(self, credentials))]
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, CatalogError> {
        self.execute(
            self.inner
                .http
                .post(self.url("/auth/login"))
                .json(credentials),
        )
        .await
    }

    /// Fetch the profile of the current bearer.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unauthorized`] (after the central credential
    /// purge) when the token is stale, or another error if the request
    /// fails.
    #[instrument(skip(self))]
    pub async fn profile(&self) -> Result<Profile, CatalogError> {
        self.execute(self.inner.http.get(self.url("/auth/profile")))
            .await
    }
}
