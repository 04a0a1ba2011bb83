//! Normalization from loosely-typed backend payloads to the canonical
//! [`storefront_core`] types.
//!
//! Every attribute is resolved through an ordered alias chain (see
//! [`crate::fields`]); the precedence within each chain tracks the upstream
//! schema's drift and must not be reordered.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use storefront_core::{CartLine, Category, ColorOption, Product, Review};

use crate::error::CatalogError;
use crate::fields::{first_decimal, first_f64, first_string, first_u32, first_value, truthy_flag};

const ID_ALIASES: &[&str] = &["id", "_id"];
const NAME_ALIASES: &[&str] = &["name", "title", "productName"];
const IMAGE_ALIASES: &[&str] = &["image", "imageUrl", "thumbnail", "photo"];
const RATING_ALIASES: &[&str] = &["rating", "averageRating"];
const REVIEW_COUNT_ALIASES: &[&str] = &["reviewCount", "reviews", "totalReviews"];
const PRICE_ALIASES: &[&str] = &["currentPrice", "price", "salePrice"];
const ORIGINAL_PRICE_ALIASES: &[&str] = &["originalPrice", "oldPrice", "regularPrice"];
const DISCOUNT_ALIASES: &[&str] = &["discount", "discountPercentage", "discountPercent"];
const DESCRIPTION_ALIASES: &[&str] = &["description", "desc"];
const CATEGORY_ALIASES: &[&str] = &["category", "categoryName"];
const STOCK_ALIASES: &[&str] = &["stock", "stockQuantity", "inventory"];

/// Fallback display name when no name alias resolves.
pub const UNNAMED_PRODUCT: &str = "Unnamed Product";

/// Normalizes one raw product payload.
///
/// # Errors
///
/// Returns [`CatalogError::MalformedProductData`] when no identifier can be
/// located across all candidates. Every other attribute is optional and
/// falls back to a default rather than failing.
pub fn normalize_product(raw: &Value) -> Result<Product, CatalogError> {
    if !raw.is_object() {
        return Err(CatalogError::MalformedProductData {
            reason: "payload is not an object".to_string(),
        });
    }

    let id = first_string(raw, ID_ALIASES).ok_or_else(|| CatalogError::MalformedProductData {
        reason: "no usable product identifier".to_string(),
    })?;

    let name =
        first_string(raw, NAME_ALIASES).unwrap_or_else(|| UNNAMED_PRODUCT.to_string());

    Ok(Product {
        id,
        name,
        description: first_string(raw, DESCRIPTION_ALIASES).unwrap_or_default(),
        price: first_decimal(raw, PRICE_ALIASES)
            .map_or(Decimal::ZERO, |p| p.max(Decimal::ZERO)),
        original_price: first_decimal(raw, ORIGINAL_PRICE_ALIASES),
        discount_percent: first_decimal(raw, DISCOUNT_ALIASES),
        images: resolve_images(raw),
        category: resolve_category(raw),
        stock: first_u32(raw, STOCK_ALIASES).unwrap_or(0),
        rating: first_f64(raw, RATING_ALIASES).unwrap_or(0.0).clamp(0.0, 5.0),
        review_count: first_u32(raw, REVIEW_COUNT_ALIASES).unwrap_or(0),
        colors: resolve_colors(raw),
        sizes: resolve_sizes(raw),
    })
}

/// Normalizes a list of raw product payloads, skipping malformed entries.
///
/// A list fetch should not fail wholesale because one upstream row lost its
/// identifier; skipped entries are logged at `warn`.
#[must_use]
pub fn normalize_products(items: &[Value]) -> Vec<Product> {
    items
        .iter()
        .filter_map(|raw| match normalize_product(raw) {
            Ok(product) => Some(product),
            Err(err) => {
                tracing::warn!(error = %err, "skipping malformed product entry");
                None
            }
        })
        .collect()
}

/// Normalizes one raw review payload. Returns `None` when no identifier
/// resolves; reviews are display-only, so unidentifiable rows are dropped
/// rather than surfaced as errors.
#[must_use]
pub fn normalize_review(raw: &Value) -> Option<Review> {
    let id = first_string(raw, ID_ALIASES)?;

    let author = first_string(raw, &["customerName"])
        .or_else(|| nested_string(raw, "customer", "name"))
        .or_else(|| nested_string(raw, "user", "name"))
        .or_else(|| first_string(raw, &["name"]))
        .unwrap_or_else(|| "Anonymous".to_string());

    Some(Review {
        id,
        author,
        verified: truthy_flag(raw, &["verified", "isVerified"]),
        rating: first_f64(raw, &["rating"]).unwrap_or(5.0).clamp(0.0, 5.0),
        body: first_string(raw, &["comment", "review", "text", "description"])
            .unwrap_or_default(),
        posted_at: resolve_timestamp(raw),
        product_id: first_string(raw, &["productId", "product_id"]),
        product_name: first_string(raw, &["productName"])
            .or_else(|| nested_string(raw, "product", "name")),
    })
}

/// Normalizes a list of raw review payloads, dropping unidentifiable rows
/// with a `warn`.
#[must_use]
pub fn normalize_reviews(items: &[Value]) -> Vec<Review> {
    items
        .iter()
        .filter_map(|raw| {
            let review = normalize_review(raw);
            if review.is_none() {
                tracing::warn!("skipping review entry without an identifier");
            }
            review
        })
        .collect()
}

/// Normalizes one backend cart entry for store hydration. Returns `None`
/// when no product reference resolves.
#[must_use]
pub fn normalize_cart_line(raw: &Value) -> Option<CartLine> {
    let product_id = first_string(raw, &["id", "_id", "productId"])?;
    let name = first_string(raw, NAME_ALIASES).unwrap_or_else(|| UNNAMED_PRODUCT.to_string());
    let price =
        first_decimal(raw, PRICE_ALIASES).map_or(Decimal::ZERO, |p| p.max(Decimal::ZERO));
    let quantity = first_u32(raw, &["quantity", "qty"]).unwrap_or(1);

    Some(CartLine::new(
        product_id,
        name,
        price,
        first_string(raw, IMAGE_ALIASES),
        quantity,
        first_string(raw, &["color", "colorId"]),
        first_string(raw, &["size", "sizeId"]),
    ))
}

/// Image list resolution: prefer the explicit `images` array, else wrap the
/// first single-image alias, else empty (placeholder is substituted at
/// render time, not here).
fn resolve_images(raw: &Value) -> Vec<String> {
    if let Some(items) = raw.get("images").and_then(Value::as_array) {
        let images: Vec<String> = items
            .iter()
            .filter_map(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        if !images.is_empty() {
            return images;
        }
    }
    first_string(raw, IMAGE_ALIASES).map_or_else(Vec::new, |single| vec![single])
}

/// The category field is either a bare name string or an `{id, name}` object.
fn resolve_category(raw: &Value) -> Option<Category> {
    match first_value(raw, CATEGORY_ALIASES)? {
        Value::String(name) if !name.is_empty() => Some(Category {
            id: None,
            name: name.clone(),
        }),
        obj @ Value::Object(_) => {
            let name = first_string(obj, &["name"])?;
            Some(Category {
                id: first_string(obj, ID_ALIASES),
                name,
            })
        }
        _ => None,
    }
}

fn resolve_colors(raw: &Value) -> Vec<ColorOption> {
    let Some(items) = raw.get("colors").and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|entry| match entry {
            Value::String(s) if !s.is_empty() => Some(ColorOption {
                id: s.clone(),
                swatch: s.clone(),
            }),
            obj @ Value::Object(_) => {
                let id = first_string(obj, &["id", "name"])?;
                let swatch = first_string(obj, &["swatch", "hex", "bg"]).unwrap_or_else(|| id.clone());
                Some(ColorOption { id, swatch })
            }
            _ => None,
        })
        .collect()
}

fn resolve_sizes(raw: &Value) -> Vec<String> {
    let Some(items) = raw.get("sizes").and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|entry| match entry {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect()
}

fn resolve_timestamp(raw: &Value) -> Option<DateTime<Utc>> {
    first_string(raw, &["createdAt", "date", "created_at"])
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn nested_string(raw: &Value, outer: &str, inner: &str) -> Option<String> {
    raw.get(outer).and_then(|v| first_string(v, &[inner]))
}
