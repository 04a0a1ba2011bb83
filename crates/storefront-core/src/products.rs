use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Asset substituted at render time when a product carries no images.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.jpg";

/// A product normalized from a loosely-typed backend payload.
///
/// Constructed once per fetch response and discarded when the owning view
/// unmounts or refetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Backend identifier, stringified regardless of the source type.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price. Always non-negative; defaults to zero when the source
    /// supplies nothing parsable.
    pub price: Decimal,
    /// Pre-sale comparison price, if the backend supplied one.
    pub original_price: Option<Decimal>,
    /// Percent off `original_price`, if the backend supplied one.
    pub discount_percent: Option<Decimal>,
    /// Ordered image references. May be empty; callers substitute
    /// [`PLACEHOLDER_IMAGE`] at render time.
    pub images: Vec<String>,
    pub category: Option<Category>,
    pub stock: u32,
    /// Average rating, clamped to the 0–5 range at normalization time.
    pub rating: f64,
    pub review_count: u32,
    pub colors: Vec<ColorOption>,
    pub sizes: Vec<String>,
}

impl Product {
    /// Returns the first image reference, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Effective unit price for display and cart submission.
    ///
    /// When both `original_price` and `discount_percent` are present the
    /// price is derived from them and the plain `price` field is ignored,
    /// even when it differs. This mirrors the backend's display contract.
    #[must_use]
    pub fn discounted_price(&self) -> Decimal {
        match (self.original_price, self.discount_percent) {
            (Some(original), Some(discount)) => {
                original - original * discount / Decimal::from(100)
            }
            _ => self.price,
        }
    }

    /// Amount saved relative to `original_price`, when a discount applies.
    #[must_use]
    pub fn savings(&self) -> Option<Decimal> {
        match (self.original_price, self.discount_percent) {
            (Some(original), Some(_)) => Some(original - self.discounted_price()),
            _ => None,
        }
    }

    /// Whether at least one unit can be added to a cart.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Product category. The backend sends either a bare name string or an
/// object with id and name, so the id is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<String>,
    pub name: String,
}

/// A selectable color variant with its display swatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    pub id: String,
    pub swatch: String,
}
