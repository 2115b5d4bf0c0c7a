//! Cart store end-to-end flows: mutations, persistence, and restarts.
//!
//! These tests drive the real `CartStore` against the file-backed storage
//! port, so they cover exactly what survives a storefront restart.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use cartwheel_core::{CartState, Category, CategoryId, Product, ProductId};
use cartwheel_storefront::storage::{FileStorage, Storage, keys};
use cartwheel_storefront::stores::CartStore;
use rust_decimal::Decimal;

fn product(id: i32, price: &str, category: &str) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        price: price.parse().unwrap(),
        description: "A fine product".to_owned(),
        images: vec![format!("https://example.com/{id}.jpg")],
        category: Category {
            id: CategoryId::new(1),
            name: category.to_owned(),
            image: String::new(),
        },
    }
}

#[test]
fn test_cart_survives_restart() {
    let tmp = tempfile::tempdir().unwrap();

    {
        let storage = Arc::new(FileStorage::new(tmp.path()).unwrap());
        let cart = CartStore::new(storage);
        cart.add_to_cart(product(1, "9.99", "Clothes")).unwrap();
        cart.add_to_cart(product(1, "9.99", "Clothes")).unwrap();
        cart.add_to_cart(product(2, "120", "Electronics")).unwrap();
        cart.update_quantity(ProductId::new(2), 3).unwrap();
    }

    // "Restart": a fresh store over the same directory.
    let storage = Arc::new(FileStorage::new(tmp.path()).unwrap());
    let cart = CartStore::new(storage);
    let state = cart.snapshot();

    assert_eq!(state.len(), 2);
    assert_eq!(state.items.first().unwrap().quantity, 2);
    assert_eq!(state.items.get(1).unwrap().quantity, 3);
    // 2 * 9.99 + 3 * 120
    assert_eq!(state.total, "379.98".parse::<Decimal>().unwrap());
}

#[test]
fn test_checkout_like_clear_leaves_no_trace() {
    let tmp = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(tmp.path()).unwrap());

    {
        let cart = CartStore::new(Arc::clone(&storage) as Arc<dyn Storage>);
        cart.add_to_cart(product(1, "10", "Clothes")).unwrap();
        cart.clear().unwrap();
    }

    // The entry is removed, not rewritten as an empty cart, so a restart is
    // a true cold start.
    assert!(storage.get(keys::CART).unwrap().is_none());

    let cart = CartStore::new(storage);
    assert!(cart.snapshot().is_empty());
    assert_eq!(cart.snapshot().total, Decimal::ZERO);
}

#[test]
fn test_persisted_entry_matches_original_shape() {
    let tmp = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(tmp.path()).unwrap());
    let cart = CartStore::new(Arc::clone(&storage) as Arc<dyn Storage>);

    cart.add_to_cart(product(7, "15.5", "Shoes")).unwrap();

    let raw = storage.get(keys::CART).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    // Flat `{...product, quantity}` line items under "items", plus "total".
    let item = value.get("items").unwrap().get(0).unwrap();
    assert_eq!(item.get("id").unwrap(), 7);
    assert_eq!(item.get("quantity").unwrap(), 1);
    assert!(item.get("title").is_some());
    assert!(value.get("total").is_some());
}

#[test]
fn test_hand_written_entry_restores() {
    // A cart persisted by the original storefront: flat line items, numeric
    // prices, and a numeric total.
    let raw = r#"{
        "items": [{
            "id": 3,
            "title": "Canvas Tote",
            "price": 12.5,
            "description": "",
            "images": [],
            "category": {"id": 2, "name": "Bags", "image": ""},
            "quantity": 2
        }],
        "total": 25.0
    }"#;

    let tmp = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(tmp.path()).unwrap());
    storage.set(keys::CART, raw).unwrap();

    let cart = CartStore::new(storage);
    let state = cart.snapshot();
    assert_eq!(state.len(), 1);
    assert_eq!(state.items.first().unwrap().quantity, 2);
    assert_eq!(state.total, "25.0".parse::<Decimal>().unwrap());
}

#[test]
fn test_mutation_sequence_keeps_total_consistent() {
    let tmp = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(tmp.path()).unwrap());
    let cart = CartStore::new(Arc::clone(&storage) as Arc<dyn Storage>);

    cart.add_to_cart(product(1, "10", "A")).unwrap();
    cart.add_to_cart(product(2, "20", "A")).unwrap();
    cart.add_to_cart(product(3, "30", "B")).unwrap();
    cart.update_quantity(ProductId::new(1), 5).unwrap();
    cart.remove_from_cart(ProductId::new(2)).unwrap();
    cart.update_quantity(ProductId::new(3), 0).unwrap(); // rejected write

    let state = cart.snapshot();
    let expected: Decimal = state
        .items
        .iter()
        .map(cartwheel_core::CartLineItem::line_total)
        .sum();
    assert_eq!(state.total, expected);
    assert_eq!(state.total, Decimal::from(80));

    // And the persisted entry agrees with memory.
    let raw = storage.get(keys::CART).unwrap().unwrap();
    let persisted: CartState = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, state);
}
