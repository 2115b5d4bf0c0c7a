//! Client-side state stores.
//!
//! Each store is an explicit, injectable state container (cheaply cloneable
//! via `Arc`) rather than an ambient singleton. Mutations go exclusively
//! through store methods and are synchronous and atomic from the caller's
//! perspective: the lock is held across the mutation and, where applicable,
//! the persistence write.
//!
//! - [`CartStore`] - line items + total, persisted to the storage port
//! - [`ProductStore`] - fetched catalog, pagination cursor, active filter
//! - [`AuthStore`] - authenticated flag + persisted bearer token

mod auth;
mod cart;
mod products;

pub use auth::AuthStore;
pub use cart::CartStore;
pub use products::ProductStore;
