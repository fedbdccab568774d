//! Product records - The catalog's unit of sale.
//!
//! A [`Product`] is owned exclusively by the catalog store; the cart snapshots
//! the fields it needs at add-time rather than holding live references.
//! Admin input arrives as a [`ProductDraft`] (validated before the store is
//! touched) and partial edits as a typed [`ProductPatch`] so that unspecified
//! fields are never clobbered.

use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry. Field names follow the persisted JSON layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique identifier, immutable once created
    pub id: String,
    pub title: String,
    pub description: String,
    /// Unit price in the display currency, always positive
    pub price: f64,
    /// Ordered, non-empty list of image references
    pub images: Vec<String>,
    /// Category tag, e.g. "electronics"
    pub category: String,
    pub brand: String,
    /// Units on hand
    pub stock: u32,
    /// Average rating in `[0, 5]`
    pub rating: f64,
    /// Discount percent in `[0, 100]`
    pub discount: u8,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

impl Product {
    /// Unit price with the discount applied.
    #[must_use]
    pub fn discounted_price(&self) -> f64 {
        self.price * (1.0 - f64::from(self.discount) / 100.0)
    }
}

/// Admin-form payload for creating or editing a product.
///
/// `id` and `created_at` are optional; the catalog store fills them in on
/// create. Validation happens here, on the caller's side of the store
/// boundary - the store itself trusts its input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub images: Vec<String>,
    pub category: String,
    pub brand: String,
    pub stock: u32,
    pub rating: f64,
    pub discount: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

impl ProductDraft {
    /// Checks the draft against the admin-form rules.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] if:
    /// - title, description, category, or brand is blank
    /// - the price is zero, negative, or not finite
    /// - no image reference was supplied
    /// - rating is outside `[0, 5]` or discount exceeds 100
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty()
            || self.description.trim().is_empty()
            || self.category.trim().is_empty()
            || self.brand.trim().is_empty()
        {
            return Err(Error::validation("Please fill in all required fields"));
        }

        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(Error::validation("Price must be greater than zero"));
        }

        if self.images.is_empty() {
            return Err(Error::validation("Please add at least one image URL"));
        }

        if !(0.0..=5.0).contains(&self.rating) {
            return Err(Error::validation("Rating must be between 0 and 5"));
        }

        if self.discount > 100 {
            return Err(Error::validation("Discount must be between 0 and 100"));
        }

        Ok(())
    }

    /// Materializes the draft into a [`Product`] with the given identity.
    #[must_use]
    pub fn into_product(self, id: String, created_at: DateTime<Utc>) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            images: self.images,
            category: self.category,
            brand: self.brand,
            stock: self.stock,
            rating: self.rating,
            discount: self.discount,
            created_at,
            sizes: self.sizes,
            colors: self.colors,
        }
    }
}

/// Typed partial update for a product: only supplied fields are overwritten.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub images: Option<Vec<String>>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub stock: Option<u32>,
    pub rating: Option<f64>,
    pub discount: Option<u8>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
}

impl ProductPatch {
    /// Applies the patch in place. The product's id and creation timestamp
    /// are not patchable.
    pub fn apply(self, product: &mut Product) {
        if let Some(title) = self.title {
            product.title = title;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(images) = self.images {
            product.images = images;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(brand) = self.brand {
            product.brand = brand;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(rating) = self.rating {
            product.rating = rating;
        }
        if let Some(discount) = self.discount {
            product.discount = discount;
        }
        if let Some(sizes) = self.sizes {
            product.sizes = Some(sizes);
        }
        if let Some(colors) = self.colors {
            product.colors = Some(colors);
        }
    }
}
