//! HTTP route handlers for the storefront.
//!
//! The route map mirrors the original page map; rendering is thin JSON.
//!
//! ```text
//! GET  /                       - Storefront listing (guests; authed users -> /dashboard)
//! GET  /dashboard              - Storefront listing (requires auth)
//! POST /products/load-more     - Incremental-loading trigger (next page)
//! GET  /product/{id}           - Product detail
//!
//! # Cart
//! GET  /cart                   - Cart state
//! POST /cart/add               - Add a product (quantity +1 / insert at 1)
//! POST /cart/update            - Set a line item quantity (must be >= 1)
//! POST /cart/remove            - Remove a line item
//! POST /cart/clear             - Empty the cart
//! POST /cart/checkout          - Checkout (requires auth; clears the cart)
//!
//! # Auth
//! POST /login                  - Exchange credentials for a token (guests only)
//! POST /logout                 - Drop the stored token
//! GET  /profile                - Remote profile of the bearer (requires auth)
//!
//! Anything else redirects to /.
//! ```

pub mod auth;
pub mod cart;
pub mod home;
pub mod products;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/checkout", post(cart::checkout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Storefront listing
        .route("/", get(home::index))
        .route("/dashboard", get(home::dashboard))
        .route("/products/load-more", post(home::load_more))
        // Product detail
        .route("/product/{id}", get(products::show))
        // Cart
        .nest("/cart", cart_routes())
        // Auth
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/profile", get(auth::profile))
        // Unknown paths go home
        .fallback(fallback)
}

/// Catch-all: send unknown paths back to the storefront listing.
async fn fallback() -> Redirect {
    Redirect::to("/")
}
