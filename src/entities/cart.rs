//! Cart line items.
//!
//! A line snapshots the product fields the cart needs at add-time; price and
//! discount are frozen there and never re-fetched from the live catalog.
//! Line identity is the (product id, selected size, selected color) triple -
//! the same product in two variants makes two distinct lines.

use crate::entities::Product;
use serde::{Deserialize, Serialize};

/// One entry in the cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub title: String,
    /// Undiscounted unit price frozen at add-time
    pub price: f64,
    /// Primary image reference
    pub image: String,
    pub category: String,
    pub brand: String,
    /// Stock as observed at add-time; caps quantity increments
    pub stock: u32,
    /// Discount percent frozen at add-time
    pub discount: u8,
    /// Always at least 1; a line at 0 is removed, never stored
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
}

impl CartLine {
    /// Snapshots a product into a new line with the given variant selection.
    #[must_use]
    pub fn snapshot(
        product: &Product,
        quantity: u32,
        size: Option<&str>,
        color: Option<&str>,
    ) -> Self {
        CartLine {
            product_id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            image: product.images.first().cloned().unwrap_or_default(),
            category: product.category.clone(),
            brand: product.brand.clone(),
            stock: product.stock,
            discount: product.discount,
            quantity,
            selected_size: size.map(str::to_string),
            selected_color: color.map(str::to_string),
        }
    }

    /// True when this line has the given identity key.
    #[must_use]
    pub fn matches(&self, product_id: &str, size: Option<&str>, color: Option<&str>) -> bool {
        self.product_id == product_id
            && self.selected_size.as_deref() == size
            && self.selected_color.as_deref() == color
    }

    /// Unit price with the frozen discount applied.
    #[must_use]
    pub fn unit_price(&self) -> f64 {
        self.price * (1.0 - f64::from(self.discount) / 100.0)
    }

    /// Discounted unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }
}
