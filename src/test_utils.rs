//! Shared test utilities for `ShopCart`.
//!
//! Helpers for building sample products and wiring stores against in-memory
//! storage with sensible defaults.

use crate::core::{Notifier, SessionStore};
use crate::entities::{Principal, Product, ProductDraft};
use crate::storage::MemoryStore;
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use std::time::Duration;

/// Fresh in-memory storage backend shared by the stores under test.
pub fn memory_storage() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

/// A product with the given pricing and stock, defaults elsewhere.
pub fn sample_product(id: &str, price: f64, discount: u8, stock: u32) -> Product {
    Product {
        id: id.to_string(),
        title: format!("Sample {id}"),
        description: "A sample product".to_string(),
        price,
        images: vec!["https://example.com/image.jpg".to_string()],
        category: "electronics".to_string(),
        brand: "SampleBrand".to_string(),
        stock,
        rating: 4.0,
        discount,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        sizes: None,
        colors: None,
    }
}

/// A valid admin-form draft without id or timestamp.
///
/// Defaults: price 100.0, discount 10, stock 5.
pub fn sample_draft(title: &str) -> ProductDraft {
    ProductDraft {
        id: None,
        title: title.to_string(),
        description: "A drafted product".to_string(),
        price: 100.0,
        images: vec!["https://example.com/image.jpg".to_string()],
        category: "electronics".to_string(),
        brand: "SampleBrand".to_string(),
        stock: 5,
        rating: 4.0,
        discount: 10,
        created_at: None,
        sizes: None,
        colors: None,
    }
}

/// A session store over fresh in-memory storage with zero network delay.
/// Returns the store plus its storage and notifier for assertions.
pub fn test_session() -> (SessionStore, Arc<MemoryStore>, Arc<Notifier>) {
    let storage = memory_storage();
    let notifier = Arc::new(Notifier::new());
    let session = SessionStore::load(
        Arc::clone(&storage) as Arc<dyn crate::storage::KeyValueStore>,
        Arc::clone(&notifier),
        Duration::ZERO,
    );
    (session, storage, notifier)
}

/// The demo admin principal.
pub fn admin_principal() -> Principal {
    Principal {
        id: "1".to_string(),
        name: "Admin User".to_string(),
        email: "admin@example.com".to_string(),
        is_admin: true,
    }
}

/// The demo non-admin principal.
pub fn regular_principal() -> Principal {
    Principal {
        id: "2".to_string(),
        name: "Regular User".to_string(),
        email: "user@example.com".to_string(),
        is_admin: false,
    }
}
