//! Product/pagination store.
//!
//! Holds the full fetched product list, the fetched category list, the
//! pagination cursor, and the active category filter. The lists are set
//! wholesale once at storefront entry and held read-only afterwards; paging
//! and filtering are purely client-side via [`cartwheel_core::paginate`].

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use cartwheel_core::{
    CatalogPage, Category, CategoryFilter, PaginationCursor, Product, ProductId, paginate,
};

/// Catalog browsing state container.
#[derive(Clone, Default)]
pub struct ProductStore {
    inner: Arc<RwLock<ProductStoreState>>,
}

#[derive(Default)]
struct ProductStoreState {
    products: Vec<Product>,
    categories: Vec<Category>,
    pagination: PaginationCursor,
    filter: CategoryFilter,
    loaded: bool,
}

impl ProductStore {
    /// Create an empty store (nothing fetched yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the catalog has been fetched this process.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.read().loaded
    }

    /// Replace the product list wholesale and mark the catalog loaded.
    ///
    /// `total_items` is cached from the unfiltered list length; the selector
    /// reports the filtered count separately, and the two diverge whenever a
    /// filter narrower than `All` is active. That mismatch is inherited
    /// behavior, kept as-is.
    pub fn set_products(&self, products: Vec<Product>) {
        let mut state = self.write();
        state.pagination.total_items = products.len();
        state.products = products;
        state.loaded = true;
    }

    /// Replace the category list wholesale.
    pub fn set_categories(&self, categories: Vec<Category>) {
        self.write().categories = categories;
    }

    /// The fetched categories.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.read().categories.clone()
    }

    /// Look up a fetched product by id.
    #[must_use]
    pub fn find(&self, product_id: ProductId) -> Option<Product> {
        self.read()
            .products
            .iter()
            .find(|product| product.id == product_id)
            .cloned()
    }

    /// Set the cursor's page directly. No bounds validation against the
    /// filtered length is performed.
    pub fn set_current_page(&self, page: u32) {
        self.write().pagination.current_page = page;
    }

    /// Move the cursor back to the first page.
    pub fn reset_pagination(&self) {
        self.write().pagination.reset();
    }

    /// The cursor's current page.
    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.read().pagination.current_page
    }

    /// The cursor's cached (unfiltered) item count.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.read().pagination.total_items
    }

    /// The active category filter.
    #[must_use]
    pub fn filter(&self) -> CategoryFilter {
        self.read().filter.clone()
    }

    /// Set the active filter. Pagination resets to page 1 whenever the new
    /// filter differs from the current one.
    pub fn set_filter(&self, filter: CategoryFilter) {
        let mut state = self.write();
        if state.filter != filter {
            state.filter = filter;
            state.pagination.reset();
        }
    }

    /// Incremental-loading trigger: advance the cursor one page, but only
    /// while more filtered products remain beyond the visible window.
    ///
    /// The `has_more` check and the increment share one exclusive lock, so
    /// overlapping trigger firings serialize and cannot advance the cursor
    /// past the end. Returns whether the page advanced.
    pub fn advance_page(&self) -> bool {
        let mut state = self.write();
        let page = paginate(&state.products, &state.filter, &state.pagination);
        if page.has_more {
            state.pagination.current_page += 1;
            true
        } else {
            false
        }
    }

    /// The currently visible catalog window.
    #[must_use]
    pub fn visible(&self) -> CatalogPage {
        let state = self.read();
        paginate(&state.products, &state.filter, &state.pagination)
    }

    fn read(&self) -> RwLockReadGuard<'_, ProductStoreState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ProductStoreState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
