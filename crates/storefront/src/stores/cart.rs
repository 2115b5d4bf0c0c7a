//! Cart store: core cart state wired to the storage port.
//!
//! Every mutation recomputes the total (inside [`CartState`]) and persists
//! the entire serialized state under the fixed `cart` entry. `clear` removes
//! the entry outright, which is distinct from persisting an empty cart.

use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use cartwheel_core::{CartState, Product, ProductId};
use tracing::warn;

use crate::storage::{Storage, StorageError, keys};

/// Cart state container with durable persistence.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    storage: Arc<dyn Storage>,
    state: RwLock<CartState>,
}

impl CartStore {
    /// Create the store, restoring persisted state if an entry exists.
    ///
    /// A missing entry means a cold start. A corrupt entry is logged and
    /// treated as a cold start rather than bricking the storefront.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let state = match storage.get(keys::CART) {
            Ok(Some(raw)) => match serde_json::from_str::<CartState>(&raw) {
                Ok(state) => state,
                Err(e) => {
                    warn!(error = %e, "Persisted cart entry is corrupt, starting empty");
                    CartState::new()
                }
            },
            Ok(None) => CartState::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read persisted cart, starting empty");
                CartState::new()
            }
        };

        Self {
            inner: Arc::new(CartStoreInner {
                storage,
                state: RwLock::new(state),
            }),
        }
    }

    /// A copy of the current cart state.
    #[must_use]
    pub fn snapshot(&self) -> CartState {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether the cart holds a line item for `product_id`.
    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(product_id)
    }

    /// Add a product (increment quantity if already present) and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated state cannot be persisted.
    pub fn add_to_cart(&self, product: Product) -> Result<(), StorageError> {
        let mut state = self.write();
        state.add(product);
        self.persist(&state)
    }

    /// Remove the line item for `product_id` (no-op if absent) and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated state cannot be persisted.
    pub fn remove_from_cart(&self, product_id: ProductId) -> Result<(), StorageError> {
        let mut state = self.write();
        state.remove(product_id);
        self.persist(&state)
    }

    /// Set the quantity for `product_id` and persist.
    ///
    /// Non-positive quantities are never written; callers reject them before
    /// dispatch and [`CartState`] guards the invariant again.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated state cannot be persisted.
    pub fn update_quantity(&self, product_id: ProductId, quantity: u32) -> Result<(), StorageError> {
        let mut state = self.write();
        state.update_quantity(product_id, quantity);
        self.persist(&state)
    }

    /// Empty the cart and remove the persisted entry entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted entry cannot be removed.
    pub fn clear(&self) -> Result<(), StorageError> {
        let mut state = self.write();
        state.clear();
        self.inner.storage.remove(keys::CART)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CartState> {
        self.inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, state: &CartState) -> Result<(), StorageError> {
        let raw = serde_json::to_string(state).map_err(|source| StorageError::Encode {
            key: keys::CART.to_owned(),
            source,
        })?;
        self.inner.storage.set(keys::CART, &raw)
    }
}
