//! Integration tests for Cartwheel.
//!
//! # Test Categories
//!
//! - `cart_flow` - cart store end-to-end: mutations, persistence, restarts
//! - `catalog_browsing` - filter + pagination flows over the product store
//! - `storefront_http` - HTTP-level tests against a running storefront
//!   (`#[ignore]`d; start the binary first)
//!
//! # Running Tests
//!
//! ```bash
//! # Store-level flows (no network, no server)
//! cargo test -p cartwheel-integration-tests
//!
//! # HTTP tests against a running storefront
//! cargo run -p cartwheel-storefront &
//! cargo test -p cartwheel-integration-tests -- --ignored
//! ```

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}
