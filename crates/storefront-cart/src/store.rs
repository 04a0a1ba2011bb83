//! Session-lived cart state.
//!
//! The store is an explicit object handed to whichever view needs it —
//! there is no process-global. Mutation methods return the freshly derived
//! totals so callers never read stale derived state.

use storefront_core::CartLine;
use uuid::Uuid;

use crate::totals::{derive_totals, CartTotals};

/// Message shown after a successful add.
pub const ADDED_MESSAGE: &str = "Product added to cart!";

/// Result of an [`CartStore::add_item`] call.
#[derive(Debug, Clone, Copy)]
pub struct AddReceipt {
    /// Id of the line the item landed on (an existing line when the add
    /// merged into one).
    pub line_id: Uuid,
    /// Generation of the notification this add raised; pass it to
    /// [`CartStore::clear_notification`] when the display timer fires.
    pub notification_generation: u64,
    pub totals: CartTotals,
}

#[derive(Debug, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
    notification: Option<String>,
    notification_generation: u64,
}

impl CartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item. An add matching an existing line's product and variant
    /// selection merges into it by summing quantities instead of creating a
    /// duplicate entry. Raises the transient added-to-cart notification.
    pub fn add_item(&mut self, line: CartLine) -> AddReceipt {
        let line_id = match self.lines.iter_mut().find(|l| l.same_selection(&line)) {
            Some(existing) => {
                existing.quantity += line.quantity;
                existing.line_id
            }
            None => {
                let id = line.line_id;
                self.lines.push(line);
                id
            }
        };

        self.notification = Some(ADDED_MESSAGE.to_string());
        self.notification_generation += 1;

        AddReceipt {
            line_id,
            notification_generation: self.notification_generation,
            totals: self.totals(),
        }
    }

    /// Increments a line's quantity by one. Unbounded here; the product
    /// detail view enforces the stock ceiling before submitting.
    pub fn increase_quantity(&mut self, line_id: Uuid) -> CartTotals {
        if let Some(line) = self.line_mut(line_id) {
            line.quantity += 1;
        }
        self.totals()
    }

    /// Decrements a line's quantity by one, flooring at 1. A decrement at 1
    /// is a no-op.
    pub fn decrease_quantity(&mut self, line_id: Uuid) -> CartTotals {
        if let Some(line) = self.line_mut(line_id) {
            if line.quantity > 1 {
                line.quantity -= 1;
            }
        }
        self.totals()
    }

    /// Removes a line entirely.
    pub fn remove_item(&mut self, line_id: Uuid) -> CartTotals {
        self.lines.retain(|l| l.line_id != line_id);
        self.totals()
    }

    /// Replaces the local lines with a backend snapshot. Used for one-shot
    /// hydration on cart-page entry; raises no notification.
    pub fn hydrate(&mut self, lines: Vec<CartLine>) -> CartTotals {
        self.lines = lines;
        self.totals()
    }

    #[must_use]
    pub fn totals(&self) -> CartTotals {
        derive_totals(&self.lines)
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total unit count across all lines (the badge number).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    #[must_use]
    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    /// Clears the notification, but only when `generation` is still the
    /// current one. Idempotent: a stale timer firing after a newer add can
    /// never blank the newer message.
    pub fn clear_notification(&mut self, generation: u64) {
        if self.notification_generation == generation {
            self.notification = None;
        }
    }

    fn line_mut(&mut self, line_id: Uuid) -> Option<&mut CartLine> {
        let line = self.lines.iter_mut().find(|l| l.line_id == line_id);
        if line.is_none() {
            tracing::warn!(%line_id, "cart mutation targeted an unknown line");
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::totals::CartTotals;

    fn make_line(product_id: &str, price: u32, quantity: u32) -> CartLine {
        CartLine::new(
            product_id,
            "Product",
            Decimal::from(price),
            None,
            quantity,
            Some("red".to_string()),
            Some("Large".to_string()),
        )
    }

    #[test]
    fn add_then_remove_yields_empty_cart_and_zero_totals() {
        let mut store = CartStore::new();
        let receipt = store.add_item(make_line("p1", 10, 1));
        let totals = store.remove_item(receipt.line_id);
        assert!(store.is_empty());
        assert_eq!(totals, CartTotals::zero());
    }

    #[test]
    fn add_merges_identical_product_and_variant() {
        let mut store = CartStore::new();
        let first = store.add_item(make_line("p1", 10, 1));
        let second = store.add_item(make_line("p1", 10, 2));
        assert_eq!(first.line_id, second.line_id);
        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.lines()[0].quantity, 3);
    }

    #[test]
    fn add_keeps_distinct_variants_separate() {
        let mut store = CartStore::new();
        store.add_item(make_line("p1", 10, 1));
        let mut other = make_line("p1", 10, 1);
        other.size = Some("Small".to_string());
        store.add_item(other);
        assert_eq!(store.lines().len(), 2);
    }

    #[test]
    fn decrease_at_one_is_a_no_op() {
        let mut store = CartStore::new();
        let receipt = store.add_item(make_line("p1", 10, 1));
        store.decrease_quantity(receipt.line_id);
        assert_eq!(store.lines()[0].quantity, 1);
    }

    #[test]
    fn increase_then_decrease_round_trips() {
        let mut store = CartStore::new();
        let receipt = store.add_item(make_line("p1", 10, 1));
        store.increase_quantity(receipt.line_id);
        assert_eq!(store.lines()[0].quantity, 2);
        store.decrease_quantity(receipt.line_id);
        assert_eq!(store.lines()[0].quantity, 1);
    }

    #[test]
    fn mutation_on_unknown_line_leaves_state_unchanged() {
        let mut store = CartStore::new();
        store.add_item(make_line("p1", 10, 1));
        let totals_before = store.totals();
        let totals = store.increase_quantity(Uuid::new_v4());
        assert_eq!(totals, totals_before);
    }

    #[test]
    fn totals_identity_across_mutations() {
        let mut store = CartStore::new();
        let receipt = store.add_item(make_line("p1", 25, 2));
        store.add_item(make_line("p2", 13, 1));
        let totals = store.increase_quantity(receipt.line_id);
        assert_eq!(
            totals.total,
            totals.subtotal - totals.discount + totals.delivery_fee
        );
        assert_eq!(
            totals.discount,
            totals.subtotal * Decimal::from(20) / Decimal::from(100)
        );
    }

    #[test]
    fn item_count_sums_quantities() {
        let mut store = CartStore::new();
        store.add_item(make_line("p1", 10, 2));
        store.add_item(make_line("p2", 10, 3));
        assert_eq!(store.item_count(), 5);
    }

    #[test]
    fn add_raises_notification_with_fresh_generation() {
        let mut store = CartStore::new();
        let first = store.add_item(make_line("p1", 10, 1));
        assert_eq!(store.notification(), Some(ADDED_MESSAGE));
        let second = store.add_item(make_line("p2", 10, 1));
        assert!(second.notification_generation > first.notification_generation);
    }

    #[test]
    fn stale_generation_cannot_clear_newer_notification() {
        let mut store = CartStore::new();
        let first = store.add_item(make_line("p1", 10, 1));
        let second = store.add_item(make_line("p2", 10, 1));
        store.clear_notification(first.notification_generation);
        assert_eq!(store.notification(), Some(ADDED_MESSAGE));
        store.clear_notification(second.notification_generation);
        assert!(store.notification().is_none());
    }

    #[test]
    fn clear_notification_is_idempotent() {
        let mut store = CartStore::new();
        let receipt = store.add_item(make_line("p1", 10, 1));
        store.clear_notification(receipt.notification_generation);
        store.clear_notification(receipt.notification_generation);
        assert!(store.notification().is_none());
    }

    #[test]
    fn hydrate_replaces_lines_without_notification() {
        let mut store = CartStore::new();
        store.add_item(make_line("p1", 10, 1));
        store.clear_notification(1);
        let totals = store.hydrate(vec![make_line("p9", 50, 2)]);
        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.lines()[0].product_id, "p9");
        assert_eq!(totals.subtotal, Decimal::from(100));
        assert!(store.notification().is_none());
    }
}
