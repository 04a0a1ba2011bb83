//! Derived cart totals. Pure functions of the current line items,
//! recomputed on demand, never stored.

use rust_decimal::Decimal;
use storefront_core::CartLine;

/// Flat storefront-wide discount applied to the subtotal.
pub const DISCOUNT_PERCENT: u32 = 20;

/// Flat delivery fee, charged only when the cart holds at least one line.
pub const DELIVERY_FEE: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
}

impl CartTotals {
    #[must_use]
    pub fn zero() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            discount: Decimal::ZERO,
            delivery_fee: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// Derives totals from the given lines.
///
/// `subtotal = Σ price × quantity`, `discount = 20% of subtotal`,
/// `delivery_fee = 15` for a non-empty cart and `0` for an empty one,
/// `total = subtotal − discount + delivery_fee`.
#[must_use]
pub fn derive_totals(lines: &[CartLine]) -> CartTotals {
    if lines.is_empty() {
        return CartTotals::zero();
    }
    let subtotal: Decimal = lines.iter().map(CartLine::line_total).sum();
    let discount = subtotal * Decimal::from(DISCOUNT_PERCENT) / Decimal::from(100);
    let delivery_fee = Decimal::from(DELIVERY_FEE);
    CartTotals {
        subtotal,
        discount,
        delivery_fee,
        total: subtotal - discount + delivery_fee,
    }
}
