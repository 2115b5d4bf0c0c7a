//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::storage::Storage;
use crate::stores::{AuthStore, CartStore, ProductStore};

/// Application state shared across all handlers.
///
/// This is the explicit state container the stores live in: cheaply
/// cloneable via `Arc`, injected through the router rather than reached as
/// an ambient singleton.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    cart: CartStore,
    products: ProductStore,
    auth: AuthStore,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The cart and auth stores restore their persisted entries from
    /// `storage` immediately, so the state reflects the previous session as
    /// soon as it exists.
    #[must_use]
    pub fn new(config: StorefrontConfig, storage: Arc<dyn Storage>) -> Self {
        let auth = AuthStore::new(Arc::clone(&storage));
        let cart = CartStore::new(storage);
        let products = ProductStore::new();
        let catalog = CatalogClient::new(&config, auth.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart,
                products,
                auth,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog API client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the product/pagination store.
    #[must_use]
    pub fn products(&self) -> &ProductStore {
        &self.inner.products
    }

    /// Get a reference to the auth store.
    #[must_use]
    pub fn auth(&self) -> &AuthStore {
        &self.inner.auth
    }
}
