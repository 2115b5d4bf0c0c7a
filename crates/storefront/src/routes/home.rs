//! Storefront listing route handlers.
//!
//! The listing is where the catalog gets fetched: categories first, then
//! products, once per process. A failed fetch leaves the store unloaded, so
//! the next navigation simply tries again - there is no retry loop.

use axum::{
    Json,
    extract::{Query, State},
};
use cartwheel_core::{Category, CategoryFilter, Product};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::middleware::{RedirectIfAuthenticated, RequireAuth};
use crate::state::AppState;

/// Listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    /// Comma-separated category names; `All` is the no-filtering sentinel.
    /// Absent means "keep the current filter".
    pub categories: Option<String>,
}

/// Storefront listing as the view renders it.
#[derive(Debug, Serialize)]
pub struct StorefrontView {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub has_more: bool,
    /// Count of products matching the active filter (visible or not).
    pub total_matching: usize,
    pub current_page: u32,
    pub selected_categories: Vec<String>,
    /// Line item count for the cart badge.
    pub cart_items: usize,
    pub authenticated: bool,
}

/// Result of an incremental-loading trigger.
#[derive(Debug, Serialize)]
pub struct LoadMoreView {
    /// Whether the cursor actually advanced. Overlapping triggers serialize;
    /// a second firing past the end reports `false` instead of skipping
    /// ahead.
    pub advanced: bool,
    pub products: Vec<Product>,
    pub has_more: bool,
    pub current_page: u32,
}

/// Display the storefront listing (guest entry point).
#[instrument(skip(_guest, state))]
pub async fn index(
    _guest: RedirectIfAuthenticated,
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<StorefrontView>> {
    render_listing(&state, query).await
}

/// Display the storefront listing for an authenticated shopper.
#[instrument(skip(_auth, state))]
pub async fn dashboard(
    _auth: RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<StorefrontView>> {
    render_listing(&state, query).await
}

/// Incremental-loading trigger: reveal the next page of the filtered list.
#[instrument(skip(state))]
pub async fn load_more(State(state): State<AppState>) -> Result<Json<LoadMoreView>> {
    ensure_catalog_loaded(&state).await?;

    let advanced = state.products().advance_page();
    let page = state.products().visible();

    Ok(Json(LoadMoreView {
        advanced,
        products: page.products,
        has_more: page.has_more,
        current_page: state.products().current_page(),
    }))
}

async fn render_listing(state: &AppState, query: ListingQuery) -> Result<Json<StorefrontView>> {
    ensure_catalog_loaded(state).await?;

    if let Some(raw) = query.categories {
        state.products().set_filter(parse_filter(&raw));
    }

    let page = state.products().visible();

    Ok(Json(StorefrontView {
        categories: state.products().categories(),
        products: page.products,
        has_more: page.has_more,
        total_matching: page.total_matching,
        current_page: state.products().current_page(),
        selected_categories: state.products().filter().names().to_vec(),
        cart_items: state.cart().snapshot().len(),
        authenticated: state.auth().is_authenticated(),
    }))
}

/// Fetch the catalog on first entry: categories, then products, matching the
/// original load order. Held read-only afterwards.
async fn ensure_catalog_loaded(state: &AppState) -> Result<()> {
    if state.products().is_loaded() {
        return Ok(());
    }

    let categories = state.catalog().categories().await?;
    state.products().set_categories(categories);

    let products = state.catalog().products().await?;
    state.products().set_products(products);

    tracing::info!(
        products = state.products().total_items(),
        "Catalog loaded"
    );
    Ok(())
}

/// Parse the comma-separated `categories` query value into a filter.
fn parse_filter(raw: &str) -> CategoryFilter {
    let names: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
        .collect();
    CategoryFilter::new(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartwheel_core::ALL_CATEGORIES;

    #[test]
    fn test_parse_filter_splits_and_trims() {
        let filter = parse_filter("Clothes, Shoes");
        assert_eq!(filter.names(), ["Clothes", "Shoes"]);
    }

    #[test]
    fn test_parse_filter_all_sentinel() {
        let filter = parse_filter(ALL_CATEGORIES);
        assert!(filter.is_all());
    }

    #[test]
    fn test_parse_filter_empty_value_matches_nothing() {
        let filter = parse_filter("");
        assert!(filter.names().is_empty());
        assert!(!filter.matches("Clothes"));
    }
}
