//! Headless controller for a titled, horizontally-paged product section.

use storefront_catalog::error::CatalogError;
use storefront_catalog::types::ProductQuery;
use storefront_catalog::{resolve_image_url, CatalogClient};
use storefront_core::Product;

use crate::fetch::FetchState;

/// A catalog section ("NEW ARRIVALS", "TOP SELLING", a category page).
///
/// Holds the query it was created with so that `retry` re-issues exactly the
/// same request. Results applied under a stale generation are discarded,
/// which guards against a superseded fetch (or one resolving after the
/// section was torn down) overwriting newer state.
pub struct CatalogSection {
    title: String,
    query: ProductQuery,
    state: FetchState<Vec<Product>>,
    generation: u64,
}

impl CatalogSection {
    /// Creates a section in the loading state, ready for its first `load`.
    #[must_use]
    pub fn new(title: impl Into<String>, query: ProductQuery) -> Self {
        Self {
            title: title.into(),
            query,
            state: FetchState::Loading,
            generation: 0,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn state(&self) -> &FetchState<Vec<Product>> {
        &self.state
    }

    /// Fetches the section's products and applies the outcome.
    pub async fn load(&mut self, client: &CatalogClient) {
        let token = self.begin();
        let result = client.list_products(&self.query).await;
        self.apply(token, result);
    }

    /// Re-issues the same request after a failure.
    pub async fn retry(&mut self, client: &CatalogClient) {
        self.load(client).await;
    }

    /// Marks a fetch as started: bumps the generation and enters `Loading`.
    /// Returns the token the matching [`Self::apply`] must present.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = FetchState::Loading;
        self.generation
    }

    /// Applies a fetch outcome. Outcomes carrying a stale token are dropped.
    pub fn apply(&mut self, token: u64, result: Result<Vec<Product>, CatalogError>) {
        if token != self.generation {
            tracing::debug!(title = %self.title, "discarding stale fetch result");
            return;
        }
        self.state = match result {
            Ok(products) if products.is_empty() => FetchState::Empty,
            Ok(products) => FetchState::Ready(products),
            Err(err) => FetchState::Failed(err.to_string()),
        };
    }

    /// The loaded products, or an empty slice outside the ready state.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.state.ready().map_or(&[], Vec::as_slice)
    }

    /// Card rows for the current page of products.
    #[must_use]
    pub fn cards(&self, asset_base: &str) -> Vec<ProductCard> {
        self.products()
            .iter()
            .map(|p| product_card(p, asset_base))
            .collect()
    }

    /// Cards visible per page at the given viewport width. Matches the
    /// storefront slider breakpoints.
    #[must_use]
    pub fn page_size(viewport_width: u32) -> usize {
        match viewport_width {
            w if w >= 1024 => 4,
            w if w >= 768 => 3,
            w if w >= 640 => 2,
            _ => 1,
        }
    }

    #[must_use]
    pub fn page_count(&self, viewport_width: u32) -> usize {
        let size = Self::page_size(viewport_width);
        self.products().len().div_ceil(size)
    }

    /// The products on page `index` at the given viewport width.
    #[must_use]
    pub fn page(&self, index: usize, viewport_width: u32) -> &[Product] {
        let size = Self::page_size(viewport_width);
        let products = self.products();
        let start = index.saturating_mul(size).min(products.len());
        let end = (start + size).min(products.len());
        &products[start..end]
    }

    /// Target of the "View All" escape hatch under every section.
    #[must_use]
    pub fn view_all_route() -> &'static str {
        "/category-list"
    }
}

/// Everything a product card renders, with prices pre-formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub image: String,
    pub category: Option<String>,
    pub price_label: String,
    pub original_price_label: Option<String>,
    pub discount_label: Option<String>,
    /// Whole stars to fill, `rating` floored.
    pub full_stars: u8,
    pub review_count: u32,
}

/// Builds the card presentation for one product. Missing images resolve to
/// the placeholder asset here, at render time.
#[must_use]
pub fn product_card(product: &Product, asset_base: &str) -> ProductCard {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let full_stars = product.rating.floor() as u8;
    ProductCard {
        id: product.id.clone(),
        name: product.name.clone(),
        image: resolve_image_url(asset_base, product.primary_image().unwrap_or("")),
        category: product.category.as_ref().map(|c| c.name.clone()),
        price_label: format!("${}", product.price),
        original_price_label: product.original_price.map(|p| format!("${p}")),
        discount_label: product
            .original_price
            .and(product.discount_percent)
            .map(|d| format!("-{d}%")),
        full_stars,
        review_count: product.review_count,
    }
}

#[cfg(test)]
#[path = "catalog_list_test.rs"]
mod tests;
