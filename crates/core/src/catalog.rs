//! Category filtering and client-side pagination over the fetched product
//! list.
//!
//! The storefront fetches the whole catalog once and pages through it
//! locally. The visible window always starts at index 0 and grows as the
//! page number increases, which is what makes incremental loading append
//! products instead of sliding past them.

use serde::{Deserialize, Serialize};

use crate::types::Product;

/// Number of products revealed per page step.
pub const ITEMS_PER_PAGE: u32 = 6;

/// Sentinel category name meaning "no filtering".
pub const ALL_CATEGORIES: &str = "All";

/// The pagination position driving how much of the filtered list is visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationCursor {
    /// Current page, >= 1.
    pub current_page: u32,
    /// Fixed page size.
    pub items_per_page: u32,
    /// Cached product count. Set from the unfiltered list length by
    /// `set_products`; the selector reports the filtered count separately.
    pub total_items: usize,
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: ITEMS_PER_PAGE,
            total_items: 0,
        }
    }
}

impl PaginationCursor {
    /// Move the cursor back to the first page.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Exclusive end of the visible window. Grows with the page rather than
    /// sliding, so page n shows the first n pages worth of products.
    #[must_use]
    pub const fn window_end(&self) -> usize {
        (self.current_page * self.items_per_page) as usize
    }
}

/// The set of category names currently selected for display.
///
/// A set containing the [`ALL_CATEGORIES`] sentinel matches every product.
/// An empty set (the user deselected everything) matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryFilter(Vec<String>);

impl Default for CategoryFilter {
    fn default() -> Self {
        Self(vec![ALL_CATEGORIES.to_owned()])
    }
}

impl CategoryFilter {
    /// The unfiltered view: just the `All` sentinel.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a filter from explicit category names.
    #[must_use]
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Whether this filter matches every product.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.0.iter().any(|name| name == ALL_CATEGORIES)
    }

    /// Whether a product with the given category name passes the filter.
    #[must_use]
    pub fn matches(&self, category_name: &str) -> bool {
        self.is_all() || self.0.iter().any(|name| name == category_name)
    }

    /// Toggle a category selection.
    ///
    /// Selecting `All` collapses the filter to the sentinel alone. Selecting
    /// a named category drops the sentinel, then adds the name if absent or
    /// removes it if present.
    pub fn toggle(&mut self, category_name: &str) {
        if category_name == ALL_CATEGORIES {
            self.0 = vec![ALL_CATEGORIES.to_owned()];
            return;
        }

        self.0.retain(|name| name != ALL_CATEGORIES);
        if self.0.iter().any(|name| name == category_name) {
            self.0.retain(|name| name != category_name);
        } else {
            self.0.push(category_name.to_owned());
        }
    }

    /// The selected category names.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.0
    }
}

/// One page of the catalog as the storefront renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogPage {
    /// The visible window: the first `current_page * items_per_page`
    /// products of the filtered list.
    pub products: Vec<Product>,
    /// Whether products beyond the window remain.
    pub has_more: bool,
    /// Number of products matching the filter, visible or not.
    pub total_matching: usize,
}

/// Compute the visible product window from the full product list, the active
/// category filter, and the pagination cursor.
///
/// Pure and idempotent: no cached intermediate state, re-evaluated on every
/// call.
#[must_use]
pub fn paginate(
    products: &[Product],
    filter: &CategoryFilter,
    cursor: &PaginationCursor,
) -> CatalogPage {
    let filtered: Vec<&Product> = products
        .iter()
        .filter(|product| filter.matches(&product.category.name))
        .collect();

    let window_end = cursor.window_end();
    let visible: Vec<Product> = filtered
        .iter()
        .take(window_end)
        .map(|product| (*product).clone())
        .collect();

    CatalogPage {
        has_more: window_end < filtered.len(),
        total_matching: filtered.len(),
        products: visible,
    }
}
