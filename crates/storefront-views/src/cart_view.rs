//! Headless controller for the cart page.

use rust_decimal::Decimal;
use storefront_cart::{CartStore, CartTotals};
use storefront_catalog::assets::resolve_image_url;
use storefront_catalog::error::CatalogError;
use storefront_catalog::CatalogClient;
use storefront_core::CartLine;
use uuid::Uuid;

use crate::fetch::FetchState;

/// Cart page state. The store itself lives outside the view so the
/// header badge and product pages can mutate it too.
pub struct CartView {
    state: FetchState<()>,
    generation: u64,
}

impl Default for CartView {
    fn default() -> Self {
        Self::new()
    }
}

impl CartView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: FetchState::Loading,
            generation: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &FetchState<()> {
        &self.state
    }

    /// One-shot hydration from the backend cart endpoint. Later
    /// mutations stay local to the store.
    pub async fn hydrate(&mut self, client: &CatalogClient, store: &mut CartStore) {
        let token = self.begin();
        let result = client.fetch_cart().await;
        self.apply(token, result, store);
    }

    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = FetchState::Loading;
        self.generation
    }

    pub fn apply(
        &mut self,
        token: u64,
        result: Result<Vec<CartLine>, CatalogError>,
        store: &mut CartStore,
    ) {
        if token != self.generation {
            tracing::debug!("discarding stale cart result");
            return;
        }
        self.state = match result {
            Ok(lines) => {
                store.hydrate(lines);
                if store.is_empty() {
                    FetchState::Empty
                } else {
                    FetchState::Ready(())
                }
            }
            Err(err) => FetchState::Failed(err.to_string()),
        };
    }

    #[must_use]
    pub fn rows(&self, store: &CartStore, asset_base: &str) -> Vec<CartRow> {
        store.lines().iter().map(|line| cart_row(line, asset_base)).collect()
    }

    #[must_use]
    pub fn summary(&self, store: &CartStore) -> TotalsSummary {
        TotalsSummary::from_totals(&store.totals())
    }
}

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub line_id: Uuid,
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub color: Option<String>,
    pub size: Option<String>,
    pub unit_price_label: String,
    pub line_total_label: String,
}

fn cart_row(line: &CartLine, asset_base: &str) -> CartRow {
    CartRow {
        line_id: line.line_id,
        product_id: line.product_id.clone(),
        name: line.name.clone(),
        image: resolve_image_url(asset_base, line.image.as_deref().unwrap_or_default()),
        quantity: line.quantity,
        color: line.color.clone(),
        size: line.size.clone(),
        unit_price_label: money(line.price),
        line_total_label: money(line.line_total()),
    }
}

/// Order-summary block: subtotal, the flat discount, delivery, total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsSummary {
    pub subtotal_label: String,
    pub discount_label: String,
    pub delivery_fee_label: String,
    pub total_label: String,
}

impl TotalsSummary {
    #[must_use]
    pub fn from_totals(totals: &CartTotals) -> Self {
        Self {
            subtotal_label: money(totals.subtotal),
            discount_label: format!("-{}", money(totals.discount)),
            delivery_fee_label: money(totals.delivery_fee),
            total_label: money(totals.total),
        }
    }
}

fn money(value: Decimal) -> String {
    format!("${value:.2}")
}

#[cfg(test)]
#[path = "cart_view_test.rs"]
mod tests;
