//! Command handlers for the CLI.
//!
//! These are called from `main` after config and logging are established.
//! Each handler drives the same headless view controllers the storefront
//! pages use and renders the resulting state as plain text.

use storefront_cart::CartStore;
use storefront_catalog::types::{ProductQuery, ReviewQuery};
use storefront_catalog::CatalogClient;
use storefront_core::AppConfig;
use storefront_views::{CartView, CatalogSection, FetchState, ProductDetailView, ReviewsSection};

/// Fetch and print the product listing for the given filters.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed. Fetch
/// failures are rendered as a message, not propagated, matching how
/// the list view surfaces them.
pub(crate) async fn run_products(
    config: &AppConfig,
    category: Option<String>,
    sort: Option<String>,
    page: Option<u32>,
    limit: Option<u32>,
) -> anyhow::Result<()> {
    let client = CatalogClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build catalog client: {e}"))?;

    let query = ProductQuery {
        category,
        sort,
        page,
        limit,
    };
    let mut section = CatalogSection::new("Products", query);
    section.load(&client).await;

    match section.state() {
        FetchState::Loading => println!("still loading"),
        FetchState::Failed(reason) => println!("failed to load products: {reason}"),
        FetchState::Empty => println!("no products found"),
        FetchState::Ready(_) => {
            let cards = section.cards(&config.asset_base_url);
            println!("{} products:", cards.len());
            for card in cards {
                let mut line = format!("  {} — {}", card.name, card.price_label);
                if let Some(original) = &card.original_price_label {
                    line.push_str(&format!(" (was {original})"));
                }
                if let Some(discount) = &card.discount_label {
                    line.push_str(&format!(" {discount}"));
                }
                println!("{line} [{}★ / {} reviews]", card.full_stars, card.review_count);
            }
        }
    }

    Ok(())
}

/// Fetch and print one product's detail page.
pub(crate) async fn run_product(config: &AppConfig, id: &str) -> anyhow::Result<()> {
    let client = CatalogClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build catalog client: {e}"))?;

    let mut view = ProductDetailView::new();
    view.load(&client, id).await;

    match view.state() {
        FetchState::Loading => println!("still loading"),
        FetchState::Failed(reason) => println!("failed to load product: {reason}"),
        FetchState::Empty => println!("product not found"),
        FetchState::Ready(_) => {
            if let Some(detail) = view.detail() {
                let product = detail.product();
                println!("{}", product.name);
                println!("  price: {}", detail.price_label());
                if let Some(original) = detail.original_price_label() {
                    println!("  was:   {original}");
                }
                if let Some(badge) = detail.discount_badge() {
                    println!("  off:   {badge}");
                }
                println!("  stock: {}", product.stock);
                if !product.description.is_empty() {
                    println!("  {}", product.description);
                }
            }
        }
    }

    Ok(())
}

/// Fetch and print reviews, globally or scoped to one product.
pub(crate) async fn run_reviews(
    config: &AppConfig,
    product: Option<String>,
    limit: Option<u32>,
    verified: bool,
    min_rating: Option<f64>,
    sort: Option<String>,
) -> anyhow::Result<()> {
    let client = CatalogClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build catalog client: {e}"))?;

    let query = ReviewQuery {
        limit,
        verified: verified.then_some(true),
        min_rating,
        sort,
    };
    let mut section = match product {
        Some(id) => ReviewsSection::for_product(id, query),
        None => ReviewsSection::with_filters(query),
    };
    section.load(&client).await;

    match section.state() {
        FetchState::Loading => println!("still loading"),
        FetchState::Failed(reason) => println!("failed to load reviews: {reason}"),
        FetchState::Empty => println!("no reviews yet"),
        FetchState::Ready(_) => {
            for card in section.cards() {
                let verified_mark = if card.verified { " ✓" } else { "" };
                println!("{}{verified_mark} — {}★", card.author, card.full_stars);
                println!("  {}", card.body);
                if let Some(posted) = &card.posted_label {
                    println!("  {posted}");
                }
            }
        }
    }

    Ok(())
}

/// Fetch the backend cart snapshot and print lines plus the order summary.
pub(crate) async fn run_cart(config: &AppConfig) -> anyhow::Result<()> {
    let client = CatalogClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build catalog client: {e}"))?;

    let mut view = CartView::new();
    let mut store = CartStore::new();
    view.hydrate(&client, &mut store).await;

    match view.state() {
        FetchState::Loading => println!("still loading"),
        FetchState::Failed(reason) => println!("failed to load cart: {reason}"),
        FetchState::Empty => println!("your cart is empty"),
        FetchState::Ready(()) => {
            for row in view.rows(&store, &config.asset_base_url) {
                let mut variant = String::new();
                if let Some(color) = &row.color {
                    variant.push_str(&format!(" color: {color}"));
                }
                if let Some(size) = &row.size {
                    variant.push_str(&format!(" size: {size}"));
                }
                println!(
                    "  {} ×{} — {}{variant}",
                    row.name, row.quantity, row.line_total_label
                );
            }
            let summary = view.summary(&store);
            println!("subtotal: {}", summary.subtotal_label);
            println!("discount: {}", summary.discount_label);
            println!("delivery: {}", summary.delivery_fee_label);
            println!("total:    {}", summary.total_label);
        }
    }

    Ok(())
}
