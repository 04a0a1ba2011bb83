//! Headless controller for the single-product page: gallery selection,
//! variant selection, quantity stepping, and cart submission.

use rust_decimal::Decimal;
use storefront_cart::{AddReceipt, CartStore};
use storefront_catalog::error::CatalogError;
use storefront_catalog::CatalogClient;
use storefront_core::{CartLine, Product};

use crate::fetch::FetchState;

/// Fetch wrapper around [`ProductDetail`], with the same stale-generation
/// guard as the list sections.
pub struct ProductDetailView {
    state: FetchState<ProductDetail>,
    generation: u64,
}

impl Default for ProductDetailView {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductDetailView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: FetchState::Loading,
            generation: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &FetchState<ProductDetail> {
        &self.state
    }

    /// Fetches and normalizes one product. An empty id fails validation
    /// before any request is made.
    pub async fn load(&mut self, client: &CatalogClient, product_id: &str) {
        let token = self.begin();
        let result = client.get_product(product_id).await;
        self.apply(token, result);
    }

    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = FetchState::Loading;
        self.generation
    }

    pub fn apply(&mut self, token: u64, result: Result<Product, CatalogError>) {
        if token != self.generation {
            tracing::debug!("discarding stale product detail result");
            return;
        }
        self.state = match result {
            Ok(product) => FetchState::Ready(ProductDetail::new(product)),
            Err(err) => FetchState::Failed(err.to_string()),
        };
    }

    #[must_use]
    pub fn detail(&self) -> Option<&ProductDetail> {
        self.state.ready()
    }

    pub fn detail_mut(&mut self) -> Option<&mut ProductDetail> {
        match &mut self.state {
            FetchState::Ready(detail) => Some(detail),
            _ => None,
        }
    }
}

/// Interactive state for one loaded product.
pub struct ProductDetail {
    product: Product,
    selected_image: usize,
    selected_color: Option<String>,
    selected_size: Option<String>,
    quantity: u32,
    submitting: bool,
}

impl ProductDetail {
    /// Initializes selection to the first available color and size, or
    /// leaves them unselected when none exist.
    #[must_use]
    pub fn new(product: Product) -> Self {
        let selected_color = product.colors.first().map(|c| c.id.clone());
        let selected_size = product.sizes.first().cloned();
        Self {
            product,
            selected_image: 0,
            selected_color,
            selected_size,
            quantity: 1,
            submitting: false,
        }
    }

    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub fn selected_image(&self) -> usize {
        self.selected_image
    }

    #[must_use]
    pub fn selected_color(&self) -> Option<&str> {
        self.selected_color.as_deref()
    }

    #[must_use]
    pub fn selected_size(&self) -> Option<&str> {
        self.selected_size.as_deref()
    }

    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Selects a gallery image; out-of-range indexes are ignored.
    pub fn select_image(&mut self, index: usize) {
        if index < self.product.images.len() {
            self.selected_image = index;
        }
    }

    /// Selects a color by id; unknown ids are ignored.
    pub fn select_color(&mut self, color_id: &str) {
        if self.product.colors.iter().any(|c| c.id == color_id) {
            self.selected_color = Some(color_id.to_string());
        }
    }

    /// Selects a size; unknown labels are ignored.
    pub fn select_size(&mut self, size: &str) {
        if self.product.sizes.iter().any(|s| s == size) {
            self.selected_size = Some(size.to_string());
        }
    }

    /// Steps the quantity up, bounded above by stock.
    pub fn increase_quantity(&mut self) {
        if self.quantity < self.product.stock {
            self.quantity += 1;
        }
    }

    /// Steps the quantity down, floored at 1.
    pub fn decrease_quantity(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    /// Effective unit price: derived from `original_price` and the discount
    /// percent when both exist, else the plain price.
    #[must_use]
    pub fn display_price(&self) -> Decimal {
        self.product.discounted_price()
    }

    /// Two-decimal price label, e.g. `$80.00`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.display_price())
    }

    /// Strikethrough original price label, when a discount applies.
    #[must_use]
    pub fn original_price_label(&self) -> Option<String> {
        match (self.product.original_price, self.product.discount_percent) {
            (Some(original), Some(_)) => Some(format!("${original:.2}")),
            _ => None,
        }
    }

    /// Savings line, e.g. `$20.00`, when a discount applies.
    #[must_use]
    pub fn savings_label(&self) -> Option<String> {
        self.product.savings().map(|s| format!("${s:.2}"))
    }

    /// Discount badge, e.g. `-20%`, when a discount applies.
    #[must_use]
    pub fn discount_badge(&self) -> Option<String> {
        self.product
            .original_price
            .and(self.product.discount_percent)
            .map(|d| format!("-{d}%"))
    }

    /// Add-to-cart is disabled while a submission is in flight or the
    /// product is out of stock.
    #[must_use]
    pub fn can_add_to_cart(&self) -> bool {
        !self.submitting && self.product.in_stock()
    }

    /// Marks a cart submission as in flight (or finished). Hosts flip this
    /// around their async submit so double-clicks cannot double-add.
    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    /// Builds a line from the current selection and pushes it into the
    /// store. Returns `None` when adding is currently disabled.
    pub fn add_to_cart(&mut self, store: &mut CartStore) -> Option<AddReceipt> {
        if !self.can_add_to_cart() {
            return None;
        }
        let line = CartLine::new(
            self.product.id.clone(),
            self.product.name.clone(),
            self.display_price(),
            self.product.primary_image().map(str::to_owned),
            self.quantity,
            self.selected_color.clone(),
            self.selected_size.clone(),
        );
        Some(store.add_item(line))
    }
}

#[cfg(test)]
#[path = "product_detail_test.rs"]
mod tests;
