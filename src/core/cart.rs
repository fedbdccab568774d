//! Cart store - Owns the cart's line items.
//!
//! Lines merge by identity key (product id + selected size + selected color);
//! merged quantities sum and are capped at the stock value snapshotted on the
//! product. Prices and discounts are frozen at add-time, so totals never
//! change when the live catalog does. Every mutation persists the whole cart
//! synchronously before returning.

use crate::entities::{CartLine, Product};
use crate::storage::{CART_KEY, KeyValueStore};
use std::sync::Arc;
use tracing::{debug, warn};

/// Totals for the order review step. Shipping is free above the threshold,
/// tax is a flat GST percentage of the discounted subtotal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CheckoutSummary {
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
}

const FREE_SHIPPING_ABOVE: f64 = 1000.0;
const FLAT_SHIPPING: f64 = 49.0;
const GST_RATE: f64 = 0.18;

/// The only coupon code the simulated checkout accepts.
const COUPON_CODE: &str = "first50";

/// Holds the cart lines and their persistence handle.
pub struct CartStore {
    lines: Vec<CartLine>,
    storage: Arc<dyn KeyValueStore>,
}

impl CartStore {
    /// Restores the persisted cart. A missing snapshot yields an empty cart;
    /// an unreadable one is discarded from storage and also yields an empty
    /// cart (fail-safe, logged only).
    #[must_use]
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let lines = match storage.get(CART_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartLine>>(&raw) {
                Ok(lines) => lines,
                Err(err) => {
                    warn!("discarding unreadable cart snapshot: {err}");
                    if let Err(err) = storage.remove(CART_KEY) {
                        warn!("failed to clear corrupt cart snapshot: {err}");
                    }
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("failed to read cart snapshot: {err}");
                Vec::new()
            }
        };
        CartStore { lines, storage }
    }

    fn persist(&self) {
        let raw = match serde_json::to_string(&self.lines) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("failed to serialize cart: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.set(CART_KEY, &raw) {
            warn!("failed to persist cart: {err}");
        }
    }

    /// The current lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Adds `quantity` units of the product in the given variant. An existing
    /// line with the same identity key absorbs the increment; quantities are
    /// capped at the product's stock and never drop below 1.
    pub fn add(
        &mut self,
        product: &Product,
        quantity: u32,
        size: Option<&str>,
        color: Option<&str>,
    ) {
        let requested = quantity.max(1);
        let cap = product.stock.max(1);

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(&product.id, size, color))
        {
            line.quantity = (line.quantity + requested).clamp(1, cap);
            debug!(product_id = %product.id, quantity = line.quantity, "cart line merged");
        } else {
            let line = CartLine::snapshot(product, requested.clamp(1, cap), size, color);
            debug!(product_id = %line.product_id, quantity = line.quantity, "cart line added");
            self.lines.push(line);
        }
        self.persist();
    }

    /// Removes the line with the given identity key; a miss is a no-op.
    pub fn remove(&mut self, product_id: &str, size: Option<&str>, color: Option<&str>) {
        let before = self.lines.len();
        self.lines
            .retain(|line| !line.matches(product_id, size, color));
        if self.lines.len() != before {
            debug!(%product_id, "cart line removed");
            self.persist();
        }
    }

    /// Sets the line's quantity verbatim; zero removes the line. This path
    /// does not re-check against live stock - only `add` does.
    pub fn set_quantity(
        &mut self,
        product_id: &str,
        quantity: u32,
        size: Option<&str>,
        color: Option<&str>,
    ) {
        if quantity == 0 {
            self.remove(product_id, size, color);
            return;
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(product_id, size, color))
        {
            line.quantity = quantity;
            self.persist();
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of discounted line totals, using the prices frozen at add-time.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Order review totals: subtotal, shipping, GST, and grand total. An
    /// empty cart summarizes to all zeros.
    #[must_use]
    pub fn checkout_summary(&self) -> CheckoutSummary {
        if self.lines.is_empty() {
            return CheckoutSummary::default();
        }
        let subtotal = self.total();
        let shipping = if subtotal > FREE_SHIPPING_ABOVE {
            0.0
        } else {
            FLAT_SHIPPING
        };
        let tax = subtotal * GST_RATE;
        CheckoutSummary {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Checks a coupon code. Only the fixed demo code is accepted.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::Validation`] for any other code.
    pub fn apply_coupon(&self, code: &str) -> crate::errors::Result<()> {
        if code.trim().eq_ignore_ascii_case(COUPON_CODE) {
            Ok(())
        } else {
            Err(crate::errors::Error::validation("Invalid coupon code"))
        }
    }

    /// Places the simulated order: returns the final summary and clears the
    /// cart.
    pub fn checkout(&mut self) -> CheckoutSummary {
        let summary = self.checkout_summary();
        self.clear();
        summary
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{memory_storage, sample_product};

    fn empty_cart() -> (CartStore, Arc<crate::storage::MemoryStore>) {
        let storage = memory_storage();
        let cart = CartStore::load(Arc::clone(&storage) as Arc<dyn KeyValueStore>);
        (cart, storage)
    }

    #[test]
    fn test_add_merge_caps_at_stock() {
        // price 100, discount 10, stock 5
        let product = sample_product("prod_a", 100.0, 10, 5);
        let (mut cart, _storage) = empty_cart();

        cart.add(&product, 3, None, None);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.total(), 270.0);

        cart.add(&product, 4, None, None);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.total(), 450.0);
    }

    #[test]
    fn test_repeated_adds_never_exceed_stock() {
        let product = sample_product("prod_a", 10.0, 0, 4);
        let (mut cart, _storage) = empty_cart();

        for _ in 0..10 {
            cart.add(&product, 1, None, None);
        }
        assert_eq!(cart.lines()[0].quantity, 4);
    }

    #[test]
    fn test_variants_are_distinct_lines() {
        let product = sample_product("prod_a", 10.0, 0, 10);
        let (mut cart, _storage) = empty_cart();

        cart.add(&product, 1, Some("M"), Some("Blue"));
        cart.add(&product, 1, Some("L"), Some("Blue"));
        cart.add(&product, 1, Some("M"), Some("Blue"));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_set_quantity_zero_is_remove() {
        let product = sample_product("prod_a", 10.0, 0, 10);
        let (mut cart, _storage) = empty_cart();

        cart.add(&product, 2, None, None);
        cart.set_quantity("prod_a", 0, None, None);
        assert!(cart.lines().is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_set_quantity_does_not_recheck_stock() {
        let product = sample_product("prod_a", 10.0, 0, 5);
        let (mut cart, _storage) = empty_cart();

        cart.add(&product, 1, None, None);
        cart.set_quantity("prod_a", 9, None, None);
        assert_eq!(cart.lines()[0].quantity, 9);
    }

    #[test]
    fn test_remove_miss_is_noop() {
        let product = sample_product("prod_a", 10.0, 0, 5);
        let (mut cart, _storage) = empty_cart();
        cart.add(&product, 1, None, None);

        cart.remove("prod_a", Some("M"), None);
        cart.remove("prod_b", None, None);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_total_invariant_under_add_order() {
        let a = sample_product("prod_a", 100.0, 10, 10);
        let b = sample_product("prod_b", 40.0, 0, 10);

        let (mut first, _s1) = empty_cart();
        first.add(&a, 2, None, None);
        first.add(&b, 3, None, None);
        first.add(&a, 1, None, None);

        let (mut second, _s2) = empty_cart();
        second.add(&b, 1, None, None);
        second.add(&a, 3, None, None);
        second.add(&b, 2, None, None);

        assert_eq!(first.total(), second.total());
        assert_eq!(first.item_count(), second.item_count());
    }

    #[test]
    fn test_round_trip_restores_identical_cart() {
        let product = sample_product("prod_a", 100.0, 10, 5);
        let (mut cart, storage) = empty_cart();
        cart.add(&product, 3, Some("M"), None);

        let reloaded = CartStore::load(storage as Arc<dyn KeyValueStore>);
        assert_eq!(reloaded.lines(), cart.lines());
        assert_eq!(reloaded.item_count(), cart.item_count());
        assert_eq!(reloaded.total(), cart.total());
    }

    #[test]
    fn test_corrupt_snapshot_clears_to_empty() {
        let storage = memory_storage();
        storage.set(CART_KEY, "not an array").unwrap();

        let cart = CartStore::load(Arc::clone(&storage) as Arc<dyn KeyValueStore>);
        assert!(cart.lines().is_empty());
        // Corrupt record was discarded from storage.
        assert_eq!(storage.get(CART_KEY).unwrap(), None);
    }

    #[test]
    fn test_checkout_summary_thresholds() {
        let cheap = sample_product("prod_a", 100.0, 0, 10);
        let (mut cart, _storage) = empty_cart();

        cart.add(&cheap, 1, None, None);
        let summary = cart.checkout_summary();
        assert_eq!(summary.subtotal, 100.0);
        assert_eq!(summary.shipping, 49.0);
        assert_eq!(summary.tax, 18.0);
        assert_eq!(summary.total, 167.0);

        // Push the subtotal over the free-shipping threshold.
        cart.set_quantity("prod_a", 11, None, None);
        let summary = cart.checkout_summary();
        assert_eq!(summary.subtotal, 1100.0);
        assert_eq!(summary.shipping, 0.0);
    }

    #[test]
    fn test_empty_cart_summary_is_zero() {
        let (cart, _storage) = empty_cart();
        assert_eq!(cart.checkout_summary(), CheckoutSummary::default());
    }

    #[test]
    fn test_coupon_codes() {
        let (cart, _storage) = empty_cart();
        assert!(cart.apply_coupon("first50").is_ok());
        assert!(cart.apply_coupon("FIRST50").is_ok());
        assert!(cart.apply_coupon(" first50 ").is_ok());
        assert!(cart.apply_coupon("second50").is_err());
    }

    #[test]
    fn test_checkout_clears_cart() {
        let product = sample_product("prod_a", 100.0, 0, 10);
        let (mut cart, storage) = empty_cart();
        cart.add(&product, 2, None, None);

        let summary = cart.checkout();
        assert_eq!(summary.subtotal, 200.0);
        assert!(cart.lines().is_empty());

        // The cleared cart is what got persisted.
        let reloaded = CartStore::load(storage as Arc<dyn KeyValueStore>);
        assert!(reloaded.lines().is_empty());
    }
}
