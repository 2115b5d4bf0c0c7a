//! Product detail route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use cartwheel_core::{Product, ProductId};
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Product detail as the view renders it.
#[derive(Debug, Serialize)]
pub struct ProductDetailView {
    pub product: Product,
    /// Whether the cart already holds this product (the detail page disables
    /// its add button in that case).
    pub in_cart: bool,
    pub authenticated: bool,
}

/// Display a product detail.
///
/// Always fetched by id from the remote API, independent of the listing
/// store - the detail view works for deep links before the catalog has ever
/// been loaded.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductDetailView>> {
    let product = state.catalog().product(ProductId::new(id)).await?;

    Ok(Json(ProductDetailView {
        in_cart: state.cart().contains(product.id),
        authenticated: state.auth().is_authenticated(),
        product,
    }))
}
