//! Cart state and the operations that mutate it.
//!
//! The cart holds at most one line item per product; adding a product that is
//! already present increments its quantity instead of appending a duplicate.
//! The running total is recomputed from scratch after every mutation rather
//! than patched incrementally, so it can never drift from the line items.
//!
//! Operations never fail: mutations that reference a product not in the cart
//! degenerate to no-ops.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Product, ProductId};

/// A product held in the cart together with its quantity.
///
/// The product fields are flattened into the line item, so a serialized cart
/// keeps the flat `{...product, quantity}` shape the persisted entry uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    /// Always >= 1.
    pub quantity: u32,
}

impl CartLineItem {
    /// Price contributed by this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// The shopping cart: an ordered list of line items and a running total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartLineItem>,
    pub total: Decimal,
}

impl CartState {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// If a line item for the same product already exists its quantity is
    /// incremented by 1; otherwise a new line item with quantity 1 is
    /// appended.
    pub fn add(&mut self, product: Product) {
        match self.items.iter_mut().find(|item| item.product.id == product.id) {
            Some(existing) => existing.quantity += 1,
            None => self.items.push(CartLineItem {
                product,
                quantity: 1,
            }),
        }
        self.recompute_total();
    }

    /// Remove the line item for `product_id`, if present.
    pub fn remove(&mut self, product_id: ProductId) {
        self.items.retain(|item| item.product.id != product_id);
        self.recompute_total();
    }

    /// Set the quantity of the line item for `product_id`.
    ///
    /// A quantity of 0 is never written; callers are expected to reject
    /// non-positive quantities before dispatching, and this guards the
    /// invariant regardless.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product.id == product_id)
        {
            item.quantity = quantity;
            self.recompute_total();
        }
    }

    /// Empty the cart and zero the total.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total = Decimal::ZERO;
    }

    /// Whether a line item for `product_id` exists.
    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|item| item.product.id == product_id)
    }

    /// Number of line items (not the summed quantity).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn recompute_total(&mut self) {
        self.total = calculate_total(&self.items);
    }
}

/// Sum of price times quantity across all line items.
#[must_use]
pub fn calculate_total(items: &[CartLineItem]) -> Decimal {
    items.iter().map(CartLineItem::line_total).sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{Category, CategoryId};

    fn product(id: i32, price: u32, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Decimal::from(price),
            description: String::new(),
            images: vec![],
            category: Category {
                id: CategoryId::new(1),
                name: category.to_owned(),
                image: String::new(),
            },
        }
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let mut cart = CartState::new();
        let p1 = product(1, 10, "A");

        cart.add(p1.clone());
        cart.add(p1.clone());
        cart.add(p1);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items.first().unwrap().quantity, 3);
        assert_eq!(cart.total, Decimal::from(30));
    }

    #[test]
    fn test_add_distinct_products_appends_in_order() {
        let mut cart = CartState::new();
        cart.add(product(1, 10, "A"));
        cart.add(product(2, 5, "B"));

        let ids: Vec<i32> = cart.items.iter().map(|i| i.product.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(cart.total, Decimal::from(15));
    }

    #[test]
    fn test_total_tracks_any_operation_sequence() {
        let mut cart = CartState::new();
        cart.add(product(1, 10, "A"));
        cart.add(product(2, 20, "B"));
        cart.add(product(1, 10, "A"));
        cart.update_quantity(ProductId::new(2), 3);
        cart.remove(ProductId::new(1));

        let expected = calculate_total(&cart.items);
        assert_eq!(cart.total, expected);
        assert_eq!(cart.total, Decimal::from(60));
    }

    #[test]
    fn test_update_quantity_zero_is_never_written() {
        let mut cart = CartState::new();
        cart.add(product(1, 10, "A"));

        cart.update_quantity(ProductId::new(1), 0);

        assert_eq!(cart.items.first().unwrap().quantity, 1);
        assert_eq!(cart.total, Decimal::from(10));
    }

    #[test]
    fn test_update_quantity_missing_item_is_noop() {
        let mut cart = CartState::new();
        cart.add(product(1, 10, "A"));

        cart.update_quantity(ProductId::new(99), 5);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total, Decimal::from(10));
    }

    #[test]
    fn test_remove_missing_item_is_noop() {
        let mut cart = CartState::new();
        cart.add(product(1, 10, "A"));

        cart.remove(ProductId::new(99));

        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_clear_empties_items_and_zeroes_total() {
        let mut cart = CartState::new();
        cart.add(product(1, 10, "A"));
        cart.add(product(2, 20, "B"));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total, Decimal::ZERO);
    }

    #[test]
    fn test_fractional_prices_sum_exactly() {
        let mut cart = CartState::new();
        let mut p = product(1, 0, "A");
        p.price = "7.5".parse().unwrap();
        cart.add(p.clone());
        cart.add(p);

        assert_eq!(cart.total.to_string(), "15.0");
    }

    #[test]
    fn test_serialized_shape_is_flat() {
        let mut cart = CartState::new();
        cart.add(product(1, 10, "A"));

        let json = serde_json::to_value(&cart).unwrap();
        let item = json.get("items").unwrap().get(0).unwrap();
        // Product fields sit next to quantity, not nested under "product".
        assert!(item.get("title").is_some());
        assert_eq!(item.get("quantity").unwrap(), 1);
        assert!(item.get("product").is_none());
    }

    #[test]
    fn test_serde_roundtrip_preserves_state() {
        let mut cart = CartState::new();
        cart.add(product(1, 10, "A"));
        cart.add(product(2, 20, "B"));
        cart.update_quantity(ProductId::new(2), 4);

        let json = serde_json::to_string(&cart).unwrap();
        let restored: CartState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }
}
