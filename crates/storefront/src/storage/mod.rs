//! Durable client-side storage port.
//!
//! The storefront persists two named entries: the serialized cart state and
//! the raw auth token string. The port is an explicit interface injected into
//! the stores, so tests swap in an in-memory fake and production uses a
//! directory of per-entry files.
//!
//! Absence of an entry is not an error; it means cold-start defaults (empty
//! cart, unauthenticated).

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Fixed entry names.
pub mod keys {
    /// Serialized cart state (JSON: line items + total).
    pub const CART: &str = "cart";
    /// Raw auth token string.
    pub const AUTH: &str = "auth";
}

/// Errors that can occur when reading or writing storage entries.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure.
    #[error("storage I/O error for entry '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Entry name would escape the storage namespace.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// A store failed to encode its state for persistence.
    #[error("failed to encode entry '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Durable string-keyed storage for client-side state.
///
/// Operations are synchronous; store mutations hold their lock across the
/// write so persistence stays atomic from the caller's perspective.
pub trait Storage: Send + Sync {
    /// Read an entry. `Ok(None)` means the entry does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to read an existing entry.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write an entry, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove an entry. Removing a missing entry is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to remove an existing entry.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
