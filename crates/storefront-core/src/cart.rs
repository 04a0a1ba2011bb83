use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One cart entry: a product reference, the quantity, and the variant
/// selected at the time of adding.
///
/// Lives for the page session only; there is no persistence across reloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub line_id: Uuid,
    pub product_id: String,
    pub name: String,
    /// Effective unit price captured when the line was created.
    pub price: Decimal,
    pub image: Option<String>,
    /// Always ≥ 1; decrement below 1 is a no-op at the store level.
    pub quantity: u32,
    pub color: Option<String>,
    pub size: Option<String>,
}

impl CartLine {
    /// Creates a line with a fresh id and a quantity floored at 1.
    #[must_use]
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        image: Option<String>,
        quantity: u32,
        color: Option<String>,
        size: Option<String>,
    ) -> Self {
        Self {
            line_id: Uuid::new_v4(),
            product_id: product_id.into(),
            name: name.into(),
            price,
            image,
            quantity: quantity.max(1),
            color,
            size,
        }
    }

    /// `price × quantity` for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Whether another line refers to the same product and variant
    /// selection. Used by the store to merge duplicate adds.
    #[must_use]
    pub fn same_selection(&self, other: &Self) -> bool {
        self.product_id == other.product_id
            && self.color == other.color
            && self.size == other.size
    }
}
