//! Auth store: authenticated flag backed by a persisted token.
//!
//! The authenticated flag is derived from the presence of a stored
//! credential string; no expiry or structural validation happens locally.
//! A 401 from the remote API is the only signal that clears a stale
//! credential (see [`AuthStore::purge`]).

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use secrecy::{ExposeSecret, SecretString};
use tracing::warn;

use crate::storage::{Storage, StorageError, keys};

/// Authentication state container.
#[derive(Clone)]
pub struct AuthStore {
    inner: Arc<AuthStoreInner>,
}

struct AuthStoreInner {
    storage: Arc<dyn Storage>,
    token: RwLock<Option<SecretString>>,
}

impl AuthStore {
    /// Create the store, restoring the token from storage if one is present.
    ///
    /// A storage read failure is logged and treated as a cold start; it must
    /// not prevent the storefront from coming up.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let token = match storage.get(keys::AUTH) {
            Ok(Some(raw)) => Some(SecretString::from(raw)),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read stored auth token, starting unauthenticated");
                None
            }
        };

        Self {
            inner: Arc::new(AuthStoreInner {
                storage,
                token: RwLock::new(token),
            }),
        }
    }

    /// Whether a credential is currently held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    /// The bearer token to attach to catalog requests, if any.
    #[must_use]
    pub fn bearer_token(&self) -> Option<String> {
        self.read()
            .as_ref()
            .map(|token| token.expose_secret().to_owned())
    }

    /// Mark authenticated and persist the access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be persisted; the in-memory
    /// state is updated regardless, matching the original storefront where
    /// the session outlives a failed storage write.
    pub fn login(&self, access_token: &str) -> Result<(), StorageError> {
        let mut guard = self.write();
        *guard = Some(SecretString::from(access_token));
        self.inner.storage.set(keys::AUTH, access_token)
    }

    /// Clear the authenticated flag and remove the stored token.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored entry cannot be removed.
    pub fn logout(&self) -> Result<(), StorageError> {
        let mut guard = self.write();
        *guard = None;
        self.inner.storage.remove(keys::AUTH)
    }

    /// The 401 side effect: drop the credential everywhere, best effort.
    ///
    /// Invoked centrally by the catalog client; a storage failure here is
    /// logged rather than propagated because the triggering request already
    /// failed with an authorization error.
    pub fn purge(&self) {
        if let Err(e) = self.logout() {
            warn!(error = %e, "Failed to remove stored auth token during credential purge");
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<SecretString>> {
        self.inner
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<SecretString>> {
        self.inner
            .token
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
