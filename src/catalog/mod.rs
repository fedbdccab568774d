//! Catalog store - Owns the working set of product records.
//!
//! The store keeps the catalog in insertion order, derives the featured /
//! new-arrival / best-seller views on demand, and persists the whole
//! collection synchronously after every mutation. On construction it restores
//! the previously persisted catalog, falling back to the built-in seed when
//! nothing usable is stored.

pub mod seed;

use crate::entities::{Product, ProductDraft, ProductPatch};
use crate::storage::{KeyValueStore, PRODUCTS_KEY};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Derived views expose at most this many products.
const VIEW_LIMIT: usize = 8;
/// Cap for related-product lookups.
const RELATED_LIMIT: usize = 4;
/// Cap for title-search suggestions.
const SEARCH_LIMIT: usize = 5;

/// Holds the product catalog and its persistence handle.
pub struct CatalogStore {
    products: Vec<Product>,
    storage: Arc<dyn KeyValueStore>,
}

impl CatalogStore {
    /// Restores the catalog from storage, seeding from the built-in sample
    /// catalog when no snapshot exists or the stored one is unreadable.
    /// Seeding persists the seed immediately. Never fails: storage faults are
    /// logged and recovered.
    #[must_use]
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let restored = match storage.get(PRODUCTS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Product>>(&raw) {
                Ok(products) => {
                    debug!("restored {} products from storage", products.len());
                    Some(products)
                }
                Err(err) => {
                    warn!("discarding unreadable product snapshot: {err}");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!("failed to read product snapshot: {err}");
                None
            }
        };

        let mut store = CatalogStore {
            products: Vec::new(),
            storage,
        };
        match restored {
            Some(products) => store.products = products,
            None => {
                store.products = seed::seed_products();
                info!("seeded catalog with {} products", store.products.len());
                store.persist();
            }
        }
        store
    }

    fn persist(&self) {
        let raw = match serde_json::to_string(&self.products) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("failed to serialize catalog: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.set(PRODUCTS_KEY, &raw) {
            warn!("failed to persist catalog: {err}");
        }
    }

    /// The full catalog in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id with a linear scan.
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// First eight products carrying a discount, in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.discount > 0)
            .take(VIEW_LIMIT)
            .cloned()
            .collect()
    }

    /// Eight most recently created products, newest first.
    #[must_use]
    pub fn new_arrivals(&self) -> Vec<Product> {
        let mut sorted = self.products.clone();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted.truncate(VIEW_LIMIT);
        sorted
    }

    /// First eight products rated 4.5 or above, in catalog order.
    #[must_use]
    pub fn best_sellers(&self) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.rating >= 4.5)
            .take(VIEW_LIMIT)
            .cloned()
            .collect()
    }

    /// Products in the given category, or one of the derived views when the
    /// tag is `featured`, `new`, or `best-sellers`.
    #[must_use]
    pub fn by_category(&self, tag: &str) -> Vec<Product> {
        match tag {
            "featured" => self.featured(),
            "new" => self.new_arrivals(),
            "best-sellers" => self.best_sellers(),
            _ => self
                .products
                .iter()
                .filter(|p| p.category == tag)
                .cloned()
                .collect(),
        }
    }

    /// Up to four products sharing the given product's category, excluding
    /// the product itself. Empty when the id is unknown.
    #[must_use]
    pub fn related(&self, id: &str) -> Vec<Product> {
        let Some(product) = self.get_by_id(id) else {
            return Vec::new();
        };
        let category = &product.category;
        self.products
            .iter()
            .filter(|p| p.id != id && &p.category == category)
            .take(RELATED_LIMIT)
            .cloned()
            .collect()
    }

    /// Case-insensitive title substring search, capped at five suggestions.
    /// A blank query yields nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.products
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .take(SEARCH_LIMIT)
            .cloned()
            .collect()
    }

    /// Appends a new product from the draft, generating an id and creation
    /// timestamp when the draft does not carry them, and persists the
    /// catalog. The draft is trusted as-is; validation belongs to the caller
    /// (see [`ProductDraft::validate`]). Returns the stored record.
    pub fn create(&mut self, draft: ProductDraft) -> Product {
        let id = match draft.id.clone() {
            Some(id) => id,
            None => self.fresh_id(),
        };
        let created_at = draft.created_at.unwrap_or_else(Utc::now);
        let product = draft.into_product(id, created_at);
        info!(id = %product.id, title = %product.title, "product created");
        self.products.push(product.clone());
        self.persist();
        product
    }

    /// Applies a typed partial update to the matching record and persists.
    /// Unknown ids are a silent no-op.
    pub fn update(&mut self, id: &str, patch: ProductPatch) {
        if let Some(product) = self.products.iter_mut().find(|p| p.id == id) {
            patch.apply(product);
            debug!(%id, "product updated");
            self.persist();
        }
    }

    /// Removes the matching record and persists. Unknown ids are a silent
    /// no-op.
    pub fn delete(&mut self, id: &str) {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() != before {
            info!(%id, "product deleted");
            self.persist();
        }
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = format!("prod_{}", Uuid::new_v4().simple());
            if self.get_by_id(&id).is_none() {
                return id;
            }
        }
    }
}
