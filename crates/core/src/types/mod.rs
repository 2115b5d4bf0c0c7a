//! Core types for Cartwheel.
//!
//! The catalog types mirror the JSON shapes served by the remote catalog
//! API, so they double as wire types for the client and as the in-memory
//! representation the stores hold.

pub mod email;
pub mod id;

pub use email::{Email, EmailError};
pub use id::*;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product category.
///
/// `name` is the display key the category filter matches against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub image: String,
}

/// A product from the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Unit price. Non-negative; the remote API serves it as a JSON number.
    pub price: Decimal,
    pub description: String,
    /// Ordered gallery images; may be empty.
    #[serde(default)]
    pub images: Vec<String>,
    pub category: Category,
}
